//! Shorthand class sub-parser
//!
//!     Expands `.` and the `\d \D \w \W \s \S` shorthands into explicit literal
//!     collections. Everything is anchored to one master alphabet: printable ASCII in
//!     [32,127). The upper bound is exclusive, so DEL never appears; `\D` additionally
//!     stops its upper run at 126 exclusive. Both boundaries are carried over from the
//!     original behavior bit-exactly and must not be widened.
//!
//!     `\w` follows the usual `[0-9A-Za-z_]` alphabet; `\s` is the common whitespace
//!     set (tab, line feed, vertical tab, form feed, carriage return, space). Their
//!     complements are taken over the printable master alphabet.

use crate::error::PatternError;
use crate::scope::Scope;
use crate::token::TokenKind;
use once_cell::sync::Lazy;

/// Master "any character" alphabet for `.`: printable ASCII, DEL excluded.
static ANY_PRINTABLE: Lazy<Vec<char>> = Lazy::new(|| (32u8..127).map(char::from).collect());

/// `\D`: [32,47] and [58,126), the exclusive upper bound dropping '~'.
static NOT_DIGIT: Lazy<Vec<char>> =
    Lazy::new(|| (32u8..=47).chain(58..126).map(char::from).collect());

static WORD: Lazy<Vec<char>> = Lazy::new(|| {
    (b'0'..=b'9')
        .chain(b'A'..=b'Z')
        .chain(std::iter::once(b'_'))
        .chain(b'a'..=b'z')
        .map(char::from)
        .collect()
});

static NOT_WORD: Lazy<Vec<char>> = Lazy::new(|| {
    ANY_PRINTABLE
        .iter()
        .copied()
        .filter(|ch| !WORD.contains(ch))
        .collect()
});

static SPACE: Lazy<Vec<char>> =
    Lazy::new(|| vec!['\t', '\n', '\u{B}', '\u{C}', '\r', ' ']);

static NOT_SPACE: Lazy<Vec<char>> = Lazy::new(|| {
    ANY_PRINTABLE
        .iter()
        .copied()
        .filter(|ch| !SPACE.contains(ch))
        .collect()
});

/// Fills `target` with the expansion of the shorthand `kind`.
pub fn parse(kind: TokenKind, target: &mut Scope) -> Result<(), PatternError> {
    let alphabet: &[char] = match kind {
        TokenKind::Dot => &ANY_PRINTABLE,
        TokenKind::ShortDigit => {
            for value in '0'..='9' {
                target.push_literal(value);
            }
            return Ok(());
        }
        TokenKind::ShortNotDigit => &NOT_DIGIT,
        TokenKind::ShortWord => &WORD,
        TokenKind::ShortNotWord => &NOT_WORD,
        TokenKind::ShortSpace => &SPACE,
        TokenKind::ShortNotSpace => &NOT_SPACE,
        _ => {
            return Err(PatternError::NotSupported {
                construct: format!("{:?} as a shorthand class", kind),
            })
        }
    };
    for value in alphabet {
        target.push_literal(*value);
    }
    Ok(())
}
