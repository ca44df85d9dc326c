//! Property-based tests for evaluation and generation.
//!
//! These tests use proptest to verify invariants around:
//! - Score range, determinism and monotonicity
//! - Length flags and label/crack-time consistency
//! - Common-password normalization
//! - Generated passwords satisfying their own checks

use crate::blacklist::{COMMON_PASSWORDS, is_common};
use crate::charset::CharacterClass;
use crate::evaluator::evaluate_password_strength;
use crate::generator::{GeneratorPolicy, generate_password_with_rng};
use crate::types::{PasswordAssessment, PasswordScore, StrengthLabel};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use secrecy::{ExposeSecret, SecretString};

fn evaluate(pwd: &str) -> PasswordAssessment {
    evaluate_password_strength(&SecretString::new(pwd.to_string().into()))
}

// ============================================================================
// Strategies
// ============================================================================

/// Mostly password-like ASCII, with some arbitrary Unicode mixed in.
fn arb_password() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z0-9!@#$%^&*() _.-]{0,24}").unwrap(),
        any::<String>(),
    ]
}

fn arb_class_set() -> impl Strategy<Value = Vec<CharacterClass>> {
    prop::sample::subsequence(CharacterClass::ALL.to_vec(), 1..=4)
}

// ============================================================================
// Evaluation
// ============================================================================

proptest! {
    #[test]
    fn score_is_in_range_and_deterministic(pwd in arb_password()) {
        let first = evaluate(&pwd);
        let second = evaluate(&pwd);
        prop_assert!(first.score.value() <= PasswordScore::MAX);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn short_passwords_have_no_length_flags(pwd in prop::string::string_regex(".{0,7}").unwrap()) {
        let assessment = evaluate(&pwd);
        prop_assert!(!assessment.has_min_length);
        prop_assert!(!assessment.has_long_bonus);
    }

    #[test]
    fn long_bonus_implies_min_length(pwd in arb_password()) {
        let assessment = evaluate(&pwd);
        prop_assert!(!assessment.has_long_bonus || assessment.has_min_length);
    }

    #[test]
    fn adding_a_missing_class_raises_score(pwd in arb_password()) {
        let before = evaluate(&pwd).score;
        for class in CharacterClass::ALL {
            if class.any_in(&pwd) {
                continue;
            }
            let mut extended = pwd.clone();
            extended.push(char::from(class.pool()[0]));
            prop_assert!(evaluate(&extended).score > before, "adding {} to {:?}", class, pwd);
        }
    }

    #[test]
    fn label_depends_only_on_score_and_emptiness(pwd in arb_password()) {
        let assessment = evaluate(&pwd);
        let expected = StrengthLabel::from_score(assessment.score, pwd.is_empty());
        prop_assert_eq!(assessment.label, expected);
        prop_assert_eq!(assessment.crack_time, expected.crack_time());
    }

    #[test]
    fn tips_are_never_empty(pwd in arb_password()) {
        prop_assert!(!evaluate(&pwd).tips.is_empty());
    }

    #[test]
    fn whitespace_never_changes_score(pwd in arb_password(), at in any::<prop::sample::Index>()) {
        let chars: Vec<char> = pwd.chars().collect();
        let split = at.index(chars.len() + 1);
        let (head, tail): (String, String) =
            (chars[..split].iter().collect(), chars[split..].iter().collect());
        let with_space = evaluate(&format!("{} {}", head, tail));
        let with_letter = evaluate(&format!("{}x{}", head, tail));

        prop_assert!(with_space.has_space);
        prop_assert_eq!(with_space.length, with_letter.length);
        // The letter may add the lowercase point, the space never adds anything.
        prop_assert!(with_space.score <= with_letter.score);
        prop_assert!(with_letter.score.value() - with_space.score.value() <= 1);
    }
}

// ============================================================================
// Common passwords
// ============================================================================

proptest! {
    #[test]
    fn common_lookup_ignores_case_and_padding(
        idx in 0..COMMON_PASSWORDS.len(),
        upper_mask in any::<u32>(),
        left in "[ \t]{0,3}",
        right in "[ \t\n]{0,3}",
    ) {
        let entry = COMMON_PASSWORDS[idx];
        let mixed: String = entry
            .chars()
            .enumerate()
            .map(|(i, c)| if upper_mask & (1 << (i % 32)) != 0 { c.to_ascii_uppercase() } else { c })
            .collect();
        let padded = format!("{}{}{}", left, mixed, right);
        prop_assert!(is_common(&padded));
        prop_assert!(evaluate(&padded).is_common);
    }
}

// ============================================================================
// Generation
// ============================================================================

proptest! {
    #[test]
    fn generated_passwords_meet_policy(
        seed in any::<u64>(),
        length in 4usize..64,
        classes in arb_class_set(),
    ) {
        let policy = GeneratorPolicy::new(length, classes);
        let mut rng = StdRng::seed_from_u64(seed);
        let pwd = generate_password_with_rng(&policy, &mut rng).unwrap();
        let pwd = pwd.expose_secret();

        prop_assert_eq!(pwd.chars().count(), length);
        for class in &policy.classes {
            prop_assert!(class.any_in(pwd), "{:?} missing {}", pwd, class);
        }
        prop_assert!(pwd.chars().all(|c| policy.classes.iter().any(|class| class.contains(c))));
    }

    #[test]
    fn default_generated_passwords_are_very_strong(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pwd = generate_password_with_rng(&GeneratorPolicy::default(), &mut rng).unwrap();
        let assessment = evaluate_password_strength(&pwd);

        prop_assert_eq!(assessment.score.value(), PasswordScore::MAX);
        prop_assert_eq!(assessment.label, StrengthLabel::VeryStrong);
        prop_assert!(!assessment.has_space);
    }

    #[test]
    fn too_short_lengths_are_rejected(classes in arb_class_set(), seed in any::<u64>()) {
        let length = classes.len() - 1;
        let policy = GeneratorPolicy::new(length, classes);
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(generate_password_with_rng(&policy, &mut rng).is_err());
    }
}
