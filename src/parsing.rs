//! Parser
//!
//!     The parser is a recursive-descent driver over the classified token stream:
//!
//!         1. Each `(` recurses into a fresh sub-expression; the sub-tree it returns is
//!            attached as a child of the current head, and the matching `)` hands
//!            control back. Group nesting therefore maps one-to-one onto recursion.
//!         2. Literals, classes, shorthands, and unicode escapes each build a literal
//!            scope, delegating the body to their sub-parser, and attach it to the head.
//!         3. Quantifiers bind to the most recently attached child of the head, never
//!            to a new node.
//!         4. `|` closes the construct built so far into one alternative and starts a
//!            new head; the enclosing result scope is flagged alternating, so exactly
//!            one head is drawn per generation.
//!         5. Tokens with no rule here (escape markers, anchors, stray closers) are
//!            skipped. Anchors in particular are tokenized but never acted on.
//!
//!     Errors raised anywhere below are wrapped exactly once at the top level with the
//!     failing byte offset and the source prefix consumed so far, so diagnostics show
//!     what was parsed before the failure rather than a bare offset.

pub mod character_class;
pub mod quantifier;
pub mod shorthand;
pub mod unicode;

use crate::error::PatternError;
use crate::lexing::Lexer;
use crate::scope::Scope;
use crate::token::TokenKind;

/// Recursion guard for pathologically nested groups; the lexer's balance check
/// bounds depth by input length, this bounds it before the stack does.
pub const MAX_GROUP_DEPTH: usize = 128;

/// Recursive-descent parser over a scanned pattern.
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser { lexer }
    }

    /// Consumes the token stream and returns the result scope.
    pub fn parse(mut self) -> Result<Scope, PatternError> {
        match parse_expression(&mut self.lexer, "result", 0) {
            Ok(result) => Ok(result),
            Err(err) => {
                let position = self
                    .lexer
                    .lookahead()
                    .map(|token| token.position)
                    .unwrap_or_else(|| self.lexer.source_len());
                Err(PatternError::At {
                    position,
                    consumed: self.lexer.compress(position).to_string(),
                    source: Box::new(err),
                })
            }
        }
    }
}

/// Parses one (sub-)expression: everything up to the matching `)` or the end of
/// the stream. Returns a result scope whose children are the alternative heads.
fn parse_expression(
    lexer: &mut Lexer,
    label: &str,
    depth: usize,
) -> Result<Scope, PatternError> {
    if depth > MAX_GROUP_DEPTH {
        return Err(PatternError::GroupTooDeep {
            limit: MAX_GROUP_DEPTH,
        });
    }

    let mut result = Scope::group(label);
    let mut heads = vec![Scope::group("head")];

    while lexer.move_next() {
        let token = match lexer.lookahead() {
            Some(token) => *token,
            None => break,
        };

        match token.kind {
            TokenKind::GroupOpen => {
                let sub = parse_expression(lexer, "group", depth + 1)?;
                attach_to_head(&mut heads, sub);
            }
            TokenKind::GroupClose => break,
            TokenKind::LiteralChar | TokenKind::LiteralNumeric => {
                let mut literal = Scope::literal("literal");
                literal.push_literal(token.value);
                attach_to_head(&mut heads, literal);
            }
            TokenKind::SetOpen => {
                let mut literal = Scope::literal("class");
                character_class::parse(lexer, &mut literal)?;
                attach_to_head(&mut heads, literal);
            }
            TokenKind::Dot
            | TokenKind::ShortDigit
            | TokenKind::ShortNotDigit
            | TokenKind::ShortWord
            | TokenKind::ShortNotWord
            | TokenKind::ShortSpace
            | TokenKind::ShortNotSpace => {
                let mut literal = Scope::literal("shorthand");
                shorthand::parse(token.kind, &mut literal)?;
                attach_to_head(&mut heads, literal);
            }
            TokenKind::UnicodeHex
            | TokenKind::UnicodeBrace
            | TokenKind::PropertyClass
            | TokenKind::PropertyClassNegated => {
                let mut literal = Scope::literal("unicode");
                unicode::parse(token, lexer, &mut literal)?;
                attach_to_head(&mut heads, literal);
            }
            TokenKind::QuantOpen
            | TokenKind::QuantClose
            | TokenKind::Star
            | TokenKind::Plus
            | TokenKind::Question => {
                if token.kind == TokenKind::QuantClose {
                    // A `}` with no open closure carries no meaning; skipped.
                    continue;
                }
                let left = heads
                    .last_mut()
                    .and_then(|head| head.last_child_mut())
                    .ok_or(PatternError::DanglingQuantifier {
                        position: token.position,
                    })?;
                quantifier::parse(token.kind, lexer, left)?;
            }
            TokenKind::ChoiceBar => {
                heads.push(Scope::group("head"));
            }
            // Escape markers, anchors, and set punctuation outside a class are
            // harmless here.
            _ => {}
        }
    }

    if heads.len() > 1 {
        result.set_alternating(true);
    }
    for head in heads {
        result.attach(head);
    }
    Ok(result)
}

fn attach_to_head(heads: &mut [Scope], child: Scope) {
    if let Some(head) = heads.last_mut() {
        head.attach(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::{ScopeKind, UNBOUNDED};

    fn parse(pattern: &str) -> Result<Scope, PatternError> {
        Parser::new(Lexer::scan(pattern)?).parse()
    }

    fn head(result: &Scope) -> &Scope {
        &result.children()[0]
    }

    #[test]
    fn literals_become_singleton_children_of_one_head() {
        let result = parse("abc").unwrap();
        assert!(!result.is_alternating());
        assert_eq!(result.child_count(), 1);

        let head = head(&result);
        assert_eq!(head.child_count(), 3);
        for (index, expected) in ['a', 'b', 'c'].into_iter().enumerate() {
            assert_eq!(head.children()[index].get_at(1), Some(expected));
        }
    }

    #[test]
    fn groups_nest_as_sub_trees() {
        let result = parse("(a(b))").unwrap();
        let outer = &head(&result).children()[0];
        assert!(matches!(outer.kind(), ScopeKind::Group { .. }));

        let outer_head = &outer.children()[0];
        assert_eq!(outer_head.child_count(), 2);
        assert_eq!(outer_head.children()[0].get_at(1), Some('a'));
        let inner = &outer_head.children()[1];
        let inner_head = &inner.children()[0];
        assert_eq!(inner_head.children()[0].get_at(1), Some('b'));
    }

    #[test]
    fn quantifier_binds_the_immediately_preceding_construct() {
        let result = parse("ab{2,4}").unwrap();
        let head = head(&result);
        assert_eq!(head.children()[0].max_occurrences(), 1);
        assert_eq!(head.children()[1].min_occurrences(), 2);
        assert_eq!(head.children()[1].max_occurrences(), 4);
    }

    #[test]
    fn quantifier_after_group_binds_the_group() {
        let result = parse("(ab)+").unwrap();
        let group = &head(&result).children()[0];
        assert_eq!(group.min_occurrences(), 1);
        assert_eq!(group.max_occurrences(), UNBOUNDED);
    }

    #[test]
    fn alternation_flags_the_result_and_splits_heads() {
        let result = parse("ab|c").unwrap();
        assert!(result.is_alternating());
        assert_eq!(result.child_count(), 2);
        assert_eq!(result.children()[0].child_count(), 2);
        assert_eq!(result.children()[1].child_count(), 1);
    }

    #[test]
    fn alternation_inside_a_group_stays_inside_it() {
        let result = parse("(a|b)c").unwrap();
        assert!(!result.is_alternating());
        let head = head(&result);
        assert_eq!(head.child_count(), 2);
        assert!(head.children()[0].is_alternating());
        assert_eq!(head.children()[0].child_count(), 2);
    }

    #[test]
    fn leading_quantifier_is_dangling() {
        assert_eq!(
            parse("*a").unwrap_err().root_cause(),
            &PatternError::DanglingQuantifier { position: 0 }
        );
        assert!(matches!(
            parse("{2}").unwrap_err().root_cause(),
            PatternError::DanglingQuantifier { .. }
        ));
    }

    #[test]
    fn anchors_are_tokenized_but_skipped() {
        let result = parse("^ab$").unwrap();
        assert_eq!(head(&result).child_count(), 2);
    }

    #[test]
    fn parse_errors_carry_position_and_consumed_prefix() {
        let err = parse("ab[f-a]").unwrap_err();
        match &err {
            PatternError::At {
                position, consumed, ..
            } => {
                // The cursor rests on the range's end character when the error fires.
                assert_eq!(*position, 5);
                assert_eq!(consumed, "ab[f-");
            }
            other => panic!("expected context wrapper, got {:?}", other),
        }
        assert_eq!(
            err.root_cause(),
            &PatternError::RangeOutOfOrder {
                start: 'f',
                end: 'a'
            }
        );
    }

    #[test]
    fn deep_nesting_hits_the_recursion_guard() {
        let pattern = format!("{}a{}", "(".repeat(200), ")".repeat(200));
        assert!(matches!(
            parse(&pattern).unwrap_err().root_cause(),
            PatternError::GroupTooDeep { .. }
        ));
    }
}
