//! `sentinelle-policy-core` — Pure password evaluation for SENTINELLE.
//!
//! Stateless strength, expiry, and policy evaluation: every function is a
//! pure transformation of its inputs plus fixed read-only constant
//! tables. Zero network, zero async, zero persistence — storing
//! passwords, hashes, or rotation schedules is entirely the caller's
//! responsibility.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod entropy;
pub mod patterns;
pub mod strength;

pub mod crack_cost;
pub mod rotation;

pub mod policy;

pub mod analyzer;

pub mod generate;

pub mod hashing;

pub use analyzer::{
    analyze_password, quick_check, HeuristicScorer, ScorerReport, StrengthReport, StrengthScorer,
};
pub use crack_cost::{estimate_crack_cost, format_crack_cost, HashAlgorithm, MAX_COST_USD};
pub use entropy::{estimate_entropy, round_bits};
pub use error::PolicyError;
pub use generate::{
    generate_passphrase, generate_random_password, passphrase_entropy_bits, password_entropy_bits,
    CharsetConfig, PassphraseSeparator, DEFAULT_PASSWORD_LENGTH, DEFAULT_WORD_COUNT,
};
pub use hashing::{
    hash_password, recommend_params, verify_password, Argon2idParams, HashPreset,
    RecommendedParams,
};
pub use patterns::{detect_patterns, PatternFinding, PatternKind};
pub use policy::{
    is_common_password, validate_password, validate_passwords_batch, NormalizationForm,
    PolicyConfig, PolicyResult, PolicyViolation, Severity, ValidationContext, ValidationRule,
};
pub use rotation::{
    calculate_expiry, calculate_expiry_at, calculate_expiry_batch, ExpiryBatchItem,
    ExpiryEstimate, ExpiryOptions, ExpiryOverrides, RiskProfile, PRIVILEGED_CAP_DAYS,
};
pub use strength::{crack_time_text, EntropyBand, StrengthBand};
