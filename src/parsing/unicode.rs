//! Unicode and hex escape sub-parser
//!
//!     Resolves `\X{HEX}` (brace form, any number of hex digits, no nesting, must
//!     close) and `\xHH` (exactly two hex digits, braces rejected) to a single
//!     character. `\p{...}`/`\P{...}` property classes are recognized and rejected;
//!     silently generating the wrong alphabet would be worse than failing.

use crate::error::PatternError;
use crate::lexing::Lexer;
use crate::scope::Scope;
use crate::token::{Token, TokenKind};

/// Consumes the escape body behind `token` and appends the decoded character to
/// `target`. The lexer lookahead must rest on the escape's shorthand token.
pub fn parse(token: Token, lexer: &mut Lexer, target: &mut Scope) -> Result<(), PatternError> {
    let value = resolve(token, lexer)?;
    target.push_literal(value);
    Ok(())
}

/// Decodes the escape to a character without attaching it anywhere, so the
/// character-class sub-parser can feed range expansion with it.
pub fn resolve(token: Token, lexer: &mut Lexer) -> Result<char, PatternError> {
    match token.kind {
        TokenKind::UnicodeBrace => resolve_brace_form(lexer),
        TokenKind::UnicodeHex => resolve_two_digit_form(lexer),
        TokenKind::PropertyClass | TokenKind::PropertyClassNegated => {
            Err(PatternError::NotSupported {
                construct: "\\p{...} property classes".to_string(),
            })
        }
        _ => Err(PatternError::InvalidEscape {
            reason: format!("'{}' is not a unicode escape", token.value),
        }),
    }
}

/// `\X{HEX}`: arbitrary digit count between braces.
fn resolve_brace_form(lexer: &mut Lexer) -> Result<char, PatternError> {
    match next_value(lexer) {
        Some('{') => {}
        _ => {
            return Err(PatternError::InvalidEscape {
                reason: "missing opening brace after \\X".to_string(),
            })
        }
    }

    let mut digits = String::new();
    loop {
        match next_value(lexer) {
            Some('}') => break,
            Some('{') => {
                return Err(PatternError::InvalidEscape {
                    reason: "nested braces inside \\X{...}".to_string(),
                })
            }
            Some(value) if value.is_ascii_hexdigit() => digits.push(value),
            Some(value) => {
                return Err(PatternError::InvalidEscape {
                    reason: format!("'{}' is not a hex digit inside \\X{{...}}", value),
                })
            }
            None => {
                return Err(PatternError::InvalidEscape {
                    reason: "unterminated \\X{...} escape".to_string(),
                })
            }
        }
    }

    if digits.is_empty() {
        return Err(PatternError::InvalidEscape {
            reason: "empty hex body inside \\X{...}".to_string(),
        });
    }
    decode(&digits)
}

/// `\xHH`: exactly two hex digits, no braces.
fn resolve_two_digit_form(lexer: &mut Lexer) -> Result<char, PatternError> {
    let mut digits = String::new();
    for _ in 0..2 {
        match next_value(lexer) {
            Some('{') => {
                return Err(PatternError::InvalidEscape {
                    reason: "braces are not valid after \\x, use \\X{...}".to_string(),
                })
            }
            Some(value) if value.is_ascii_hexdigit() => digits.push(value),
            Some(value) => {
                return Err(PatternError::InvalidEscape {
                    reason: format!("'{}' is not a hex digit after \\x", value),
                })
            }
            None => {
                return Err(PatternError::InvalidEscape {
                    reason: "\\x expects exactly two hex digits".to_string(),
                })
            }
        }
    }
    decode(&digits)
}

fn next_value(lexer: &mut Lexer) -> Option<char> {
    if lexer.move_next() {
        lexer.lookahead().map(|t| t.value)
    } else {
        None
    }
}

fn decode(digits: &str) -> Result<char, PatternError> {
    let code_point = u32::from_str_radix(digits, 16).map_err(|_| PatternError::InvalidEscape {
        reason: format!("'{}' does not fit a code point", digits),
    })?;
    char::from_u32(code_point).ok_or_else(|| PatternError::InvalidEscape {
        reason: format!("{:#x} is not a valid code point", code_point),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_pattern(pattern: &str) -> Result<char, PatternError> {
        let mut lexer = Lexer::scan(pattern).unwrap();
        // Step over the escape marker onto the shorthand token.
        assert!(lexer.move_next());
        assert!(lexer.move_next());
        let token = *lexer.lookahead().unwrap();
        resolve(token, &mut lexer)
    }

    #[test]
    fn brace_form_decodes_arbitrary_width() {
        assert_eq!(resolve_pattern(r"\X{61}").unwrap(), 'a');
        assert_eq!(resolve_pattern(r"\X{0061}").unwrap(), 'a');
        assert_eq!(resolve_pattern(r"\X{1F600}").unwrap(), '\u{1F600}');
    }

    #[test]
    fn two_digit_form_decodes_exactly_two_digits() {
        assert_eq!(resolve_pattern(r"\x61").unwrap(), 'a');
        assert_eq!(resolve_pattern(r"\x7A").unwrap(), 'z');
    }

    #[test]
    fn brace_form_errors() {
        assert!(matches!(
            resolve_pattern(r"\X61"),
            Err(PatternError::InvalidEscape { .. })
        ));
        assert!(matches!(
            resolve_pattern(r"\X{}"),
            Err(PatternError::InvalidEscape { .. })
        ));
        assert!(matches!(
            resolve_pattern(r"\X{6g}"),
            Err(PatternError::InvalidEscape { .. })
        ));
        assert!(matches!(
            resolve_pattern(r"\X{61"),
            Err(PatternError::InvalidEscape { .. })
        ));
        assert!(matches!(
            resolve_pattern(r"\X{{61}}"),
            Err(PatternError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn two_digit_form_errors() {
        assert!(matches!(
            resolve_pattern(r"\x{61}"),
            Err(PatternError::InvalidEscape { .. })
        ));
        assert!(matches!(
            resolve_pattern(r"\x6"),
            Err(PatternError::InvalidEscape { .. })
        ));
        assert!(matches!(
            resolve_pattern(r"\xg1"),
            Err(PatternError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn property_classes_are_rejected() {
        assert!(matches!(
            resolve_pattern(r"\p{L}"),
            Err(PatternError::NotSupported { .. })
        ));
        assert!(matches!(
            resolve_pattern(r"\P{L}"),
            Err(PatternError::NotSupported { .. })
        ));
    }
}
