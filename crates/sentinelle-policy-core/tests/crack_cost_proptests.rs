#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for the crack-cost model.

use proptest::prelude::*;
use sentinelle_policy_core::{estimate_crack_cost, format_crack_cost, HashAlgorithm, MAX_COST_USD};

const ALL_ALGORITHMS: [HashAlgorithm; 7] = [
    HashAlgorithm::Md5,
    HashAlgorithm::Sha1,
    HashAlgorithm::Sha256,
    HashAlgorithm::Pbkdf2,
    HashAlgorithm::Bcrypt,
    HashAlgorithm::Scrypt,
    HashAlgorithm::Argon2id,
];

proptest! {
    /// Below the cap, cost strictly increases with entropy.
    #[test]
    fn strictly_increasing_in_entropy(bits in 0.0f64..80.0, delta in 0.5f64..20.0) {
        let lower = estimate_crack_cost(bits, HashAlgorithm::Argon2id);
        let higher = estimate_crack_cost(bits + delta, HashAlgorithm::Argon2id);
        prop_assert!(higher > lower, "{higher} <= {lower} at {bits}+{delta} bits");
    }

    /// Below the cap, cost strictly increases with algorithm resistance.
    #[test]
    fn strictly_increasing_in_resistance(bits in 1.0f64..80.0) {
        let costs: Vec<f64> = ALL_ALGORITHMS
            .iter()
            .map(|a| estimate_crack_cost(bits, *a))
            .collect();
        for pair in costs.windows(2) {
            prop_assert!(pair[1] > pair[0], "not increasing at {bits} bits: {costs:?}");
        }
    }

    /// The cap holds for any entropy, including absurd values.
    #[test]
    fn never_exceeds_the_cap(bits in 0.0f64..4096.0) {
        for algorithm in ALL_ALGORITHMS {
            prop_assert!(estimate_crack_cost(bits, algorithm) <= MAX_COST_USD);
        }
    }

    /// Formatting always yields a dollar-prefixed, non-empty string.
    #[test]
    fn formatting_is_total(bits in 0.0f64..4096.0) {
        let text = format_crack_cost(estimate_crack_cost(bits, HashAlgorithm::Sha256));
        prop_assert!(text.starts_with('$'));
        prop_assert!(text.len() > 1);
    }
}

#[test]
fn trillion_and_above_formats_with_t() {
    assert!(format_crack_cost(1e12).contains('T'));
    assert!(format_crack_cost(MAX_COST_USD).contains('T'));
}

#[test]
fn instant_label_is_reserved_for_exactly_zero() {
    assert_eq!(format_crack_cost(0.0), "$0 (instant)");
    assert_ne!(format_crack_cost(f64::MIN_POSITIVE), "$0 (instant)");
}
