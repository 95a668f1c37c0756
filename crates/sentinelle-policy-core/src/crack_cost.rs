//! Brute-force cost estimation.
//!
//! Models the monetary cost of cracking a password to 50% probability on
//! rented GPU hardware. The model is fixed: a baseline raw-hash
//! throughput, a per-algorithm resistance multiplier that divides the
//! effective rate, and a flat GPU-hour price. Outputs are clamped so
//! astronomically strong passwords do not produce unbounded numbers.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Baseline brute-force throughput against an unprotected fast hash
/// (hashes per second on one rented GPU).
const BASE_HASH_RATE: f64 = 1e10;

/// Rental price of one GPU-hour in USD.
const GPU_HOUR_USD: f64 = 1.0;

/// Cost ceiling in USD. Anything above this is reported as the cap.
pub const MAX_COST_USD: f64 = 1e15;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Password hashing algorithm class, ordered by brute-force resistance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Argon2id,
    Scrypt,
    Bcrypt,
    Pbkdf2,
    Sha256,
    Sha1,
    Md5,
}

impl HashAlgorithm {
    /// Resistance multiplier dividing the effective guess rate.
    ///
    /// Memory-hard algorithms slow a GPU attacker by orders of magnitude;
    /// raw digests (and broken ones) barely slow it at all.
    #[must_use]
    pub const fn resistance_multiplier(self) -> f64 {
        match self {
            Self::Argon2id => 1000.0,
            Self::Scrypt => 500.0,
            Self::Bcrypt => 100.0,
            Self::Pbkdf2 => 10.0,
            Self::Sha256 => 1.0,
            Self::Sha1 => 0.5,
            Self::Md5 => 0.1,
        }
    }

    /// Lowercase wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Argon2id => "argon2id",
            Self::Scrypt => "scrypt",
            Self::Bcrypt => "bcrypt",
            Self::Pbkdf2 => "pbkdf2",
            Self::Sha256 => "sha256",
            Self::Sha1 => "sha1",
            Self::Md5 => "md5",
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate the USD cost to brute-force a password of `entropy_bits`
/// hashed with `algorithm`, at 50% success probability.
///
/// Expected attempts are half the search space; effective rate is the
/// baseline divided by the algorithm's resistance multiplier. The result
/// is clamped to [`MAX_COST_USD`]. Strictly increasing in entropy and in
/// resistance below the cap.
#[must_use]
pub fn estimate_crack_cost(entropy_bits: f64, algorithm: HashAlgorithm) -> f64 {
    let search_space = 2.0_f64.powf(entropy_bits);
    let expected_attempts = search_space / 2.0;
    let effective_rate = BASE_HASH_RATE / algorithm.resistance_multiplier();
    let seconds = expected_attempts / effective_rate;
    let cost = seconds / 3600.0 * GPU_HOUR_USD;
    cost.min(MAX_COST_USD)
}

/// Format a crack cost for display.
///
/// Exactly zero renders as `$0 (instant)`. Sub-dollar costs keep four
/// decimals, sub-$1000 keep two, and larger values use K/M/B/T+ suffixes
/// with two decimals.
#[must_use]
pub fn format_crack_cost(usd: f64) -> String {
    if usd == 0.0 {
        "$0 (instant)".to_string()
    } else if usd < 1.0 {
        format!("${usd:.4}")
    } else if usd < 1e3 {
        format!("${usd:.2}")
    } else if usd < 1e6 {
        format!("${:.2}K", usd / 1e3)
    } else if usd < 1e9 {
        format!("${:.2}M", usd / 1e6)
    } else if usd < 1e12 {
        format!("${:.2}B", usd / 1e9)
    } else {
        format!("${:.2}T+", usd / 1e12)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_increases_with_entropy() {
        let low = estimate_crack_cost(40.0, HashAlgorithm::Argon2id);
        let high = estimate_crack_cost(60.0, HashAlgorithm::Argon2id);
        assert!(high > low);
    }

    #[test]
    fn cost_increases_with_resistance() {
        let algorithms = [
            HashAlgorithm::Md5,
            HashAlgorithm::Sha1,
            HashAlgorithm::Sha256,
            HashAlgorithm::Pbkdf2,
            HashAlgorithm::Bcrypt,
            HashAlgorithm::Scrypt,
            HashAlgorithm::Argon2id,
        ];
        let costs: Vec<f64> = algorithms
            .iter()
            .map(|a| estimate_crack_cost(50.0, *a))
            .collect();
        for pair in costs.windows(2) {
            assert!(pair[1] > pair[0], "costs not strictly increasing: {costs:?}");
        }
    }

    #[test]
    fn cost_is_capped() {
        let cost = estimate_crack_cost(512.0, HashAlgorithm::Argon2id);
        assert_eq!(cost, MAX_COST_USD);
    }

    #[test]
    fn known_reference_point() {
        // 40 bits, sha256: 2^39 attempts at 1e10/s ≈ 55s → ~1.5 cents.
        let cost = estimate_crack_cost(40.0, HashAlgorithm::Sha256);
        assert!((cost - 2.0_f64.powf(39.0) / 1e10 / 3600.0).abs() < 1e-9);
    }

    // ── Formatting ─────────────────────────────────────────────────

    #[test]
    fn zero_formats_as_instant() {
        assert_eq!(format_crack_cost(0.0), "$0 (instant)");
    }

    #[test]
    fn sub_dollar_keeps_four_decimals() {
        assert_eq!(format_crack_cost(0.0153), "$0.0153");
    }

    #[test]
    fn sub_thousand_keeps_two_decimals() {
        assert_eq!(format_crack_cost(42.5), "$42.50");
        assert_eq!(format_crack_cost(999.99), "$999.99");
    }

    #[test]
    fn suffix_boundaries() {
        assert_eq!(format_crack_cost(1_000.0), "$1.00K");
        assert_eq!(format_crack_cost(2_500_000.0), "$2.50M");
        assert_eq!(format_crack_cost(3e9), "$3.00B");
        assert_eq!(format_crack_cost(1e12), "$1.00T+");
    }

    #[test]
    fn cap_formats_with_t_suffix() {
        let text = format_crack_cost(MAX_COST_USD);
        assert!(text.contains('T'), "got: {text}");
    }

    #[test]
    fn algorithm_serde_labels() {
        let json = serde_json::to_string(&HashAlgorithm::Argon2id).expect("serialize");
        assert_eq!(json, "\"argon2id\"");
        let back: HashAlgorithm = serde_json::from_str("\"bcrypt\"").expect("deserialize");
        assert_eq!(back, HashAlgorithm::Bcrypt);
    }
}
