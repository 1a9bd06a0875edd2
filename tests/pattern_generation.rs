//! End-to-end generation tests: pattern in, conforming string out.

use regen::{
    generate_from_pattern, parse_pattern, MersenneTwister, PatternError, RandomSource,
    SimpleRandom,
};

fn generate_with_seed(pattern: &str, seed: u64) -> String {
    let mut rng = SimpleRandom::new(seed);
    generate_from_pattern(pattern, &mut rng).expect("generation failed")
}

#[test]
fn fixed_seed_reproduces_output_byte_for_byte() {
    let pattern = "([a-f]{2,6}-)+(x|y|z){3}";
    let mut scope = parse_pattern(pattern).unwrap();
    scope.cap_unbounded(8);

    for seed in [0u64, 1, 42, 987_654_321] {
        let mut first = String::new();
        let mut second = String::new();
        scope
            .generate(&mut first, &mut SimpleRandom::new(seed))
            .unwrap();
        scope
            .generate(&mut second, &mut SimpleRandom::new(seed))
            .unwrap();
        assert_eq!(first, second, "seed {} diverged", seed);
    }
}

#[test]
fn mersenne_twister_is_deterministic_too() {
    let mut scope = parse_pattern("[0-9a-f]{8}").unwrap();
    let mut first = String::new();
    let mut second = String::new();
    scope
        .generate(&mut first, &mut MersenneTwister::new(1234))
        .unwrap();
    scope
        .generate(&mut second, &mut MersenneTwister::new(1234))
        .unwrap();
    assert_eq!(first, second);
    scope.cap_unbounded(1); // no-op on bounded trees
    assert_eq!(first.len(), 8);
}

#[test]
fn quantified_class_respects_length_and_alphabet() {
    for seed in 0..50u64 {
        let output = generate_with_seed("[a-k]{3,7}", seed);
        assert!(
            (3..=7).contains(&output.len()),
            "length {} out of bounds for seed {}",
            output.len(),
            seed
        );
        assert!(
            output.chars().all(|ch| ('a'..='k').contains(&ch)),
            "alphabet escape in {:?}",
            output
        );
    }
}

#[test]
fn plain_literals_concatenate_without_randomness() {
    for seed in 0..10u64 {
        assert_eq!(generate_with_seed("abc", seed), "abc");
    }
}

#[test]
fn alternation_emits_exactly_one_branch() {
    for seed in 0..50u64 {
        let output = generate_with_seed("a|b", seed);
        assert!(output == "a" || output == "b", "got {:?}", output);
    }
}

#[test]
fn both_alternation_branches_are_reachable() {
    let outputs: Vec<String> = (0..50u64).map(|s| generate_with_seed("a|b", s)).collect();
    assert!(outputs.iter().any(|o| o == "a"));
    assert!(outputs.iter().any(|o| o == "b"));
}

#[test]
fn quantifier_boundaries() {
    assert_eq!(generate_with_seed("a{0,0}b", 3), "b");
    assert_eq!(generate_with_seed("a{1,1}", 3), "a");

    for seed in 0..30u64 {
        let optional = generate_with_seed("a?", seed);
        assert!(optional.len() <= 1);

        let mut scope = parse_pattern("a+").unwrap();
        scope.cap_unbounded(5);
        let mut output = String::new();
        scope
            .generate(&mut output, &mut SimpleRandom::new(seed))
            .unwrap();
        assert!(
            (1..=5).contains(&output.len()),
            "'+' must produce at least one occurrence, got {:?}",
            output
        );
    }
}

#[test]
fn star_may_produce_nothing() {
    let mut scope = parse_pattern("a*").unwrap();
    scope.cap_unbounded(3);
    let lengths: Vec<usize> = (0..50u64)
        .map(|seed| {
            let mut output = String::new();
            scope
                .generate(&mut output, &mut SimpleRandom::new(seed))
                .unwrap();
            output.len()
        })
        .collect();
    assert!(lengths.iter().any(|&len| len == 0));
    assert!(lengths.iter().all(|&len| len <= 3));
}

#[test]
fn nested_groups_generate_their_concatenation() {
    assert_eq!(generate_with_seed("(a(b))", 7), "ab");
    assert_eq!(generate_with_seed("((((((deep))))))", 7), "deep");
}

#[test]
fn unbalanced_groups_fail_at_scan_time() {
    assert_eq!(
        parse_pattern("(a(b)").unwrap_err(),
        PatternError::UnclosedGroup
    );
    assert_eq!(
        parse_pattern("a(b))").unwrap_err(),
        PatternError::UnopenedGroup { position: 4 }
    );
}

#[test]
fn unicode_escapes_round_trip_to_the_same_literal() {
    assert_eq!(generate_with_seed(r"\X{0061}", 1), "a");
    assert_eq!(generate_with_seed(r"\x61", 1), "a");
    assert_eq!(generate_with_seed(r"\x41\X{42}", 1), "AB");
}

#[test]
fn quantified_group_repeats_its_whole_body() {
    assert_eq!(generate_with_seed("(ex1){5,5}", 9), "ex1ex1ex1ex1ex1");
}

#[test]
fn quantifier_binds_only_the_preceding_literal() {
    // Without a group, {5,5} repeats just the '1'.
    assert_eq!(generate_with_seed("ex1{5,5}", 9), "ex11111");
}

#[test]
fn negated_class_is_a_hard_error() {
    let err = parse_pattern("[^a-z]").unwrap_err();
    assert_eq!(
        err.root_cause(),
        &PatternError::NotSupported {
            construct: "negated character classes".to_string()
        }
    );
}

#[test]
fn dot_generates_printable_ascii_only() {
    for seed in 0..50u64 {
        let output = generate_with_seed(".{10}", seed);
        assert_eq!(output.chars().count(), 10);
        for ch in output.chars() {
            let code = ch as u32;
            assert!((32..127).contains(&code), "non-printable {:?}", ch);
        }
    }
}

#[test]
fn shorthand_digits_generate_digits() {
    for seed in 0..20u64 {
        let output = generate_with_seed(r"\d{4}", seed);
        assert!(output.chars().all(|ch| ch.is_ascii_digit()));
        let complement = generate_with_seed(r"\D{4}", seed);
        assert!(complement.chars().all(|ch| !ch.is_ascii_digit()));
        assert!(complement.chars().all(|ch| ch != '~'));
    }
}

#[test]
fn alternating_seeded_sources_agree_across_providers_only_with_themselves() {
    // Different providers are allowed to disagree; each must agree with itself.
    let simple_a = generate_with_seed("[a-z]{5}", 11);
    let simple_b = generate_with_seed("[a-z]{5}", 11);
    assert_eq!(simple_a, simple_b);

    let mut mt_a = MersenneTwister::new(11);
    let mut mt_b = MersenneTwister::new(11);
    assert_eq!(
        generate_from_pattern("[a-z]{5}", &mut mt_a).unwrap(),
        generate_from_pattern("[a-z]{5}", &mut mt_b).unwrap()
    );
}

#[test]
fn reseeding_mid_stream_restarts_generation() {
    let mut rng = SimpleRandom::new(77);
    let first = generate_from_pattern("[a-z]{6}", &mut rng).unwrap();
    rng.seed(77);
    let second = generate_from_pattern("[a-z]{6}", &mut rng).unwrap();
    assert_eq!(first, second);
}
