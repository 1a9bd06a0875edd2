//! Mode-tracking classification of raw tokens
//!
//!     The raw logos pass knows nothing about context: a `-` is always a `Dash` and a
//!     `{` always an `OpenBrace`. This transformation walks the raw stream with three
//!     pieces of scan state and maps each raw token to its final [`TokenKind`]:
//!
//!         - escape mode: set by a bare `\`, cleared by the character that follows it.
//!           While set, shorthand letters (`d D w W s S x X p P`) classify as their
//!           shorthand kinds and everything else classifies as a literal.
//!         - set mode: set by `[`, cleared by `]`. While set, grouping and quantifier
//!           metacharacters classify as literals, `-` becomes a range marker, and a
//!           leading `^` becomes the negation marker.
//!         - group depth: adjusted by `(`/`)` outside sets and escapes. A close below
//!           depth zero and a nonzero depth after the scan are both fatal.
//!
//!     A per-set character counter detects the "first character after `[`" position
//!     for negation: it resets to 1 on `[` and is incremented by escapes, shorthands,
//!     and literals, so `^` is the negation marker only while the counter is still 1.

use crate::error::PatternError;
use crate::token::{RawToken, Token, TokenKind};
use std::ops::Range;

#[derive(Debug, Default)]
struct ScanState {
    escape_mode: bool,
    set_mode: bool,
    group_depth: usize,
    set_counter: usize,
}

/// Classifies the raw token stream into typed tokens, validating balance as it goes.
pub fn classify(
    raw: Vec<(RawToken, Range<usize>)>,
    source: &str,
) -> Result<Vec<Token>, PatternError> {
    let mut state = ScanState::default();
    let mut tokens = Vec::with_capacity(raw.len());

    for (token, span) in raw {
        let position = span.start;
        let value = match source[span].chars().next() {
            Some(ch) => ch,
            None => continue,
        };
        let kind = classify_one(token, value, position, &mut state)?;
        tokens.push(Token::new(kind, value, position));
    }

    if state.group_depth > 0 {
        return Err(PatternError::UnclosedGroup);
    }
    if state.set_mode {
        return Err(PatternError::UnclosedClass);
    }
    Ok(tokens)
}

fn classify_one(
    token: RawToken,
    value: char,
    position: usize,
    state: &mut ScanState,
) -> Result<TokenKind, PatternError> {
    if state.escape_mode {
        return Ok(classify_escaped(value, state));
    }

    let kind = match token {
        RawToken::Backslash => {
            state.escape_mode = true;
            if state.set_mode {
                state.set_counter += 1;
            }
            TokenKind::Escape
        }
        RawToken::OpenParen => {
            if state.set_mode {
                literal(value, state)
            } else {
                state.group_depth += 1;
                TokenKind::GroupOpen
            }
        }
        RawToken::CloseParen => {
            if state.set_mode {
                literal(value, state)
            } else if state.group_depth == 0 {
                return Err(PatternError::UnopenedGroup { position });
            } else {
                state.group_depth -= 1;
                TokenKind::GroupClose
            }
        }
        RawToken::OpenBracket => {
            if state.set_mode {
                return Err(PatternError::NestedClass { position });
            }
            state.set_mode = true;
            state.set_counter = 1;
            TokenKind::SetOpen
        }
        RawToken::CloseBracket => {
            if !state.set_mode {
                return Err(PatternError::ClassNotOpen { position });
            }
            state.set_mode = false;
            TokenKind::SetClose
        }
        RawToken::Dash => {
            if state.set_mode {
                TokenKind::SetRange
            } else {
                literal(value, state)
            }
        }
        RawToken::Caret => {
            if state.set_mode {
                if state.set_counter == 1 {
                    TokenKind::SetNegated
                } else {
                    literal(value, state)
                }
            } else {
                TokenKind::AnchorStart
            }
        }
        RawToken::Dollar => {
            if state.set_mode {
                literal(value, state)
            } else {
                TokenKind::AnchorEnd
            }
        }
        RawToken::OpenBrace => in_set_literal(value, state, TokenKind::QuantOpen),
        RawToken::CloseBrace => in_set_literal(value, state, TokenKind::QuantClose),
        RawToken::Star => in_set_literal(value, state, TokenKind::Star),
        RawToken::Plus => in_set_literal(value, state, TokenKind::Plus),
        RawToken::Question => in_set_literal(value, state, TokenKind::Question),
        RawToken::Dot => in_set_literal(value, state, TokenKind::Dot),
        RawToken::Pipe => in_set_literal(value, state, TokenKind::ChoiceBar),
        RawToken::Digit | RawToken::Text => literal(value, state),
    };
    Ok(kind)
}

/// Shorthand letters are only meaningful directly after an escape; anything else
/// escaped falls back to a plain literal.
fn classify_escaped(value: char, state: &mut ScanState) -> TokenKind {
    state.escape_mode = false;
    if state.set_mode {
        state.set_counter += 1;
    }
    match value {
        'd' => TokenKind::ShortDigit,
        'D' => TokenKind::ShortNotDigit,
        'w' => TokenKind::ShortWord,
        'W' => TokenKind::ShortNotWord,
        's' => TokenKind::ShortSpace,
        'S' => TokenKind::ShortNotSpace,
        'x' => TokenKind::UnicodeHex,
        'X' => TokenKind::UnicodeBrace,
        'p' => TokenKind::PropertyClass,
        'P' => TokenKind::PropertyClassNegated,
        _ if value.is_ascii_digit() => TokenKind::LiteralNumeric,
        _ => TokenKind::LiteralChar,
    }
}

fn literal(value: char, state: &mut ScanState) -> TokenKind {
    if state.set_mode {
        state.set_counter += 1;
    }
    if value.is_ascii_digit() {
        TokenKind::LiteralNumeric
    } else {
        TokenKind::LiteralChar
    }
}

/// Quantifier and expression metacharacters lose their meaning inside a class.
fn in_set_literal(value: char, state: &mut ScanState, kind: TokenKind) -> TokenKind {
    if state.set_mode {
        literal(value, state)
    } else {
        kind
    }
}
