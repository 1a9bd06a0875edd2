//! Quantifier sub-parser
//!
//!     Applies `*`, `+`, `?`, and `{...}` closures to the scope they follow. The
//!     symbolic forms map straight to repeat bounds, with `+`/`*` using the unbounded
//!     sentinel that callers later cap. The closure form reads `{n}` and `{n,m}`,
//!     tolerating whitespace around the numbers and the comma; anything else inside
//!     the braces is fatal, as is an unclosed or nested brace.

use crate::error::PatternError;
use crate::lexing::Lexer;
use crate::scope::{Scope, UNBOUNDED};
use crate::token::TokenKind;

/// Resolves the quantifier at the current lookahead onto `target`'s repeat bounds.
pub fn parse(kind: TokenKind, lexer: &mut Lexer, target: &mut Scope) -> Result<(), PatternError> {
    match kind {
        TokenKind::Star => {
            target.set_occurrences(0, UNBOUNDED);
            Ok(())
        }
        TokenKind::Plus => {
            target.set_occurrences(1, UNBOUNDED);
            Ok(())
        }
        TokenKind::Question => {
            target.set_occurrences(0, 1);
            Ok(())
        }
        TokenKind::QuantOpen => parse_closure(lexer, target),
        _ => Err(PatternError::MalformedQuantifier {
            reason: "not a quantifier token".to_string(),
        }),
    }
}

fn parse_closure(lexer: &mut Lexer, target: &mut Scope) -> Result<(), PatternError> {
    let mut minimum = String::new();
    let mut maximum = String::new();
    let mut seen_comma = false;

    loop {
        if !lexer.move_next() {
            return Err(PatternError::MalformedQuantifier {
                reason: "missing closing brace".to_string(),
            });
        }
        let token = match lexer.lookahead() {
            Some(token) => *token,
            None => {
                return Err(PatternError::MalformedQuantifier {
                    reason: "missing closing brace".to_string(),
                })
            }
        };

        match token.kind {
            TokenKind::QuantClose => break,
            TokenKind::QuantOpen => {
                return Err(PatternError::MalformedQuantifier {
                    reason: "nested braces are not allowed".to_string(),
                })
            }
            TokenKind::LiteralNumeric => {
                if seen_comma {
                    maximum.push(token.value);
                } else {
                    minimum.push(token.value);
                }
            }
            TokenKind::LiteralChar if token.value == ',' => {
                if seen_comma {
                    return Err(PatternError::MalformedQuantifier {
                        reason: "more than one comma".to_string(),
                    });
                }
                seen_comma = true;
            }
            TokenKind::LiteralChar if token.value.is_whitespace() => {}
            _ => {
                return Err(PatternError::MalformedQuantifier {
                    reason: format!("unexpected '{}' inside braces", token.value),
                })
            }
        }
    }

    let min: u32 = minimum
        .parse()
        .map_err(|_| PatternError::MalformedQuantifier {
            reason: "missing or invalid minimum".to_string(),
        })?;
    let max: u32 = if seen_comma {
        maximum
            .parse()
            .map_err(|_| PatternError::MalformedQuantifier {
                reason: "missing or invalid maximum".to_string(),
            })?
    } else {
        min
    };
    if max < min {
        return Err(PatternError::MalformedQuantifier {
            reason: format!("maximum {} is smaller than minimum {}", max, min),
        });
    }

    target.set_occurrences(min, max);
    Ok(())
}
