//! Character class sub-parser
//!
//!     Consumes a `[...]` body and fills the target literal scope. Embedded
//!     `\xHH`/`\X{...}` escapes are resolved to characters before range handling, so
//!     `[\x61-\x63]` expands the same way `[a-c]` does. Ranges expand inclusively and
//!     only ascending; `[z-a]` is an out-of-order error. The collected characters are
//!     keyed by code point, which both deduplicates and fixes the iteration order, so
//!     generation is deterministic no matter how the class was written.
//!
//!     Negated classes are recognized by the scan and rejected here: generating the
//!     complement of a class is not supported, and pretending the `^` was not there
//!     would silently produce wrong output.

use crate::error::PatternError;
use crate::lexing::Lexer;
use crate::parsing::unicode;
use crate::scope::Scope;
use crate::token::TokenKind;
use std::collections::BTreeSet;

/// Parses the class body starting at a `SetOpen` lookahead and fills `target`
/// with the expanded, code-point-sorted literals.
pub fn parse(lexer: &mut Lexer, target: &mut Scope) -> Result<(), PatternError> {
    if let Some(next) = lexer.glimpse() {
        if next.kind == TokenKind::SetNegated {
            return Err(PatternError::NotSupported {
                construct: "negated character classes".to_string(),
            });
        }
    }

    let mut collected: BTreeSet<char> = BTreeSet::new();
    let mut pending: Option<char> = None;
    let mut range_armed = false;

    loop {
        if !lexer.move_next() {
            // The scan already guarantees a matching close; this is a structural
            // safety net, not a reachable user error.
            return Err(PatternError::UnclosedClass);
        }
        let token = match lexer.lookahead() {
            Some(token) => *token,
            None => return Err(PatternError::UnclosedClass),
        };

        match token.kind {
            TokenKind::SetClose => break,
            TokenKind::Escape => continue,
            TokenKind::SetRange => {
                if pending.is_some() {
                    range_armed = true;
                } else {
                    // A dash with no left-hand side, as in `[-a]`, is a plain literal.
                    collected.insert('-');
                }
            }
            TokenKind::UnicodeHex | TokenKind::UnicodeBrace => {
                let value = unicode::resolve(token, lexer)?;
                feed(value, &mut collected, &mut pending, &mut range_armed)?;
            }
            TokenKind::PropertyClass | TokenKind::PropertyClassNegated => {
                return Err(PatternError::NotSupported {
                    construct: "\\p{...} property classes".to_string(),
                });
            }
            TokenKind::LiteralChar | TokenKind::LiteralNumeric => {
                feed(token.value, &mut collected, &mut pending, &mut range_armed)?;
            }
            // Shorthand classes inside a set have no expansion here; skipped like
            // every other unrecognized token.
            _ => {}
        }
    }

    if range_armed {
        // Trailing dash, as in `[a-]`: both sides are literals.
        collected.insert('-');
    }
    if let Some(value) = pending {
        collected.insert(value);
    }

    for value in collected {
        target.push_literal(value);
    }
    Ok(())
}

/// Commits one resolved character: either the end of an armed range or the next
/// pending literal (committing the previous one).
fn feed(
    value: char,
    collected: &mut BTreeSet<char>,
    pending: &mut Option<char>,
    range_armed: &mut bool,
) -> Result<(), PatternError> {
    if *range_armed {
        *range_armed = false;
        let start = match pending.take() {
            Some(start) => start,
            None => {
                collected.insert('-');
                *pending = Some(value);
                return Ok(());
            }
        };
        if start > value {
            return Err(PatternError::RangeOutOfOrder { start, end: value });
        }
        for expanded in start..=value {
            collected.insert(expanded);
        }
    } else {
        if let Some(previous) = pending.take() {
            collected.insert(previous);
        }
        *pending = Some(value);
    }
    Ok(())
}
