//! Error types for `sentinelle-policy-core`.

use thiserror::Error;

/// Errors produced by password evaluation operations.
///
/// Weak or invalid password *content* is never an error — validation
/// functions return structured results instead. Only malformed caller
/// input (bad configuration, bad parameters, bad dates) fails loudly.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Password/passphrase generation failure (invalid parameters).
    #[error("password generation error: {0}")]
    Generation(String),

    /// Malformed policy configuration (length bounds outside sane ranges).
    #[error("invalid policy configuration: {0}")]
    InvalidConfig(String),

    /// Timestamp string could not be parsed as an ISO 8601 date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Argon2id hashing or calibration failure.
    #[error("password hashing error: {0}")]
    Hashing(String),
}
