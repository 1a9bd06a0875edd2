//! Error surface tests: every rejected construct fails loudly, with context.

use regen::{parse_pattern, PatternError};
use rstest::rstest;

#[rstest]
#[case("(a", PatternError::UnclosedGroup)]
#[case("((a)", PatternError::UnclosedGroup)]
#[case(")a", PatternError::UnopenedGroup { position: 0 })]
#[case("[ab", PatternError::UnclosedClass)]
#[case("a]b", PatternError::ClassNotOpen { position: 1 })]
#[case("[a[b]]", PatternError::NestedClass { position: 2 })]
fn scan_errors_are_not_wrapped(#[case] pattern: &str, #[case] expected: PatternError) {
    assert_eq!(parse_pattern(pattern).unwrap_err(), expected);
}

#[rstest]
#[case("[^abc]")]
#[case(r"\p{L}")]
#[case(r"\P{Lu}")]
#[case(r"[\p{L}]")]
fn unsupported_constructs_are_rejected(#[case] pattern: &str) {
    let err = parse_pattern(pattern).unwrap_err();
    assert!(
        matches!(err.root_cause(), PatternError::NotSupported { .. }),
        "{:?} should be unsupported",
        pattern
    );
}

#[rstest]
#[case("a{2,")]
#[case("a{b}")]
#[case("a{1,2,3}")]
#[case("a{3,1}")]
#[case("a{1{2}}")]
fn malformed_quantifiers_are_rejected(#[case] pattern: &str) {
    let err = parse_pattern(pattern).unwrap_err();
    assert!(
        matches!(err.root_cause(), PatternError::MalformedQuantifier { .. }),
        "{:?} should be a malformed quantifier, got {:?}",
        pattern,
        err
    );
}

#[rstest]
#[case(r"\X61")]
#[case(r"\X{}")]
#[case(r"\X{12g4}")]
#[case(r"\X{61")]
#[case(r"\x{61}")]
#[case(r"\x6")]
fn invalid_escapes_are_rejected(#[case] pattern: &str) {
    let err = parse_pattern(pattern).unwrap_err();
    assert!(
        matches!(err.root_cause(), PatternError::InvalidEscape { .. }),
        "{:?} should be an invalid escape, got {:?}",
        pattern,
        err
    );
}

#[test]
fn parse_errors_wrap_exactly_once_with_context() {
    let err = parse_pattern("abc[z-a]").unwrap_err();
    match &err {
        PatternError::At {
            consumed, source, ..
        } => {
            assert!(consumed.starts_with("abc[z"));
            assert!(!matches!(source.as_ref(), PatternError::At { .. }));
        }
        other => panic!("expected a context wrapper, got {:?}", other),
    }
}

#[test]
fn error_messages_name_the_direction_of_imbalance() {
    assert_eq!(
        parse_pattern("(ab").unwrap_err().to_string(),
        "opening group has no matching close"
    );
    assert!(parse_pattern("ab)")
        .unwrap_err()
        .to_string()
        .contains("no matching open"));
}

#[test]
fn out_of_order_range_reports_both_ends() {
    let err = parse_pattern("[9-0]").unwrap_err();
    assert_eq!(
        err.root_cause(),
        &PatternError::RangeOutOfOrder {
            start: '9',
            end: '0'
        }
    );
    assert!(err.to_string().contains("9-0"));
}

#[test]
fn errors_convert_to_strings_for_embedding() {
    let message: String = parse_pattern("(a").unwrap_err().into();
    assert!(message.contains("matching close"));
}
