#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for the generators.

use proptest::prelude::*;
use sentinelle_policy_core::{
    generate_passphrase, generate_random_password, password_entropy_bits, CharsetConfig,
    PassphraseSeparator,
};

proptest! {
    /// Output length always equals the requested length.
    #[test]
    fn output_length_equals_request(
        length in 8usize..=128,
        uppercase: bool,
        lowercase: bool,
        digits: bool,
        symbols: bool,
    ) {
        prop_assume!(uppercase || lowercase || digits || symbols);
        let charsets = CharsetConfig { uppercase, lowercase, digits, symbols };
        let password = generate_random_password(length, &charsets).unwrap();
        prop_assert_eq!(password.chars().count(), length);
    }

    /// Every enabled charset contributes at least one character.
    #[test]
    fn every_enabled_charset_is_represented(
        length in 8usize..=64,
        uppercase: bool,
        lowercase: bool,
        digits: bool,
        symbols: bool,
    ) {
        prop_assume!(uppercase || lowercase || digits || symbols);
        let charsets = CharsetConfig { uppercase, lowercase, digits, symbols };
        let password = generate_random_password(length, &charsets).unwrap();
        if uppercase {
            prop_assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        }
        if lowercase {
            prop_assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        }
        if digits {
            prop_assert!(password.chars().any(|c| c.is_ascii_digit()));
        }
        if symbols {
            prop_assert!(password.chars().any(|c| c.is_ascii_punctuation()));
        }
    }

    /// No character outside the enabled charsets ever appears.
    #[test]
    fn no_character_outside_the_pool(length in 8usize..=64, lowercase: bool, digits: bool) {
        prop_assume!(lowercase || digits);
        let charsets = CharsetConfig { uppercase: false, lowercase, digits, symbols: false };
        let password = generate_random_password(length, &charsets).unwrap();
        for c in password.chars() {
            let allowed = (lowercase && c.is_ascii_lowercase()) || (digits && c.is_ascii_digit());
            prop_assert!(allowed, "unexpected char {c:?} in {password:?}");
        }
    }

    /// The nominal entropy formula scales linearly with length.
    #[test]
    fn entropy_formula_is_linear_in_length(length in 1usize..=128) {
        let charsets = CharsetConfig::default();
        let per_char = password_entropy_bits(1, &charsets);
        let total = password_entropy_bits(length, &charsets);
        prop_assert!((total - per_char * length as f64).abs() < 1e-6);
    }

    /// Passphrases have the requested word count for every separator.
    #[test]
    fn passphrase_word_count(word_count in 3usize..=10) {
        let pp = generate_passphrase(word_count, PassphraseSeparator::Dot, false, false).unwrap();
        prop_assert_eq!(pp.split('.').count(), word_count);
    }
}
