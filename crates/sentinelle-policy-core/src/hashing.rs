//! Argon2id password hashing with tiered presets.
//!
//! This module provides:
//! - [`hash_password`] — PHC-encoded Argon2id hash with a random salt
//! - [`verify_password`] — fail-closed verification against a PHC string
//! - [`recommend_params`] — benchmark hardware and return achievable presets
//! - [`Argon2idParams`] — serializable parameter set
//! - [`HashPreset`] — Interactive / Moderate / Sensitive preset selector
//!
//! Verification is deliberately a plain `bool`: a wrong password and an
//! internal failure are indistinguishable to the caller, which closes the
//! error-oracle channel.

use argon2::password_hash::SaltString;
use argon2::{PasswordHash, PasswordHasher, PasswordVerifier};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::PolicyError;

/// Output length of the hash in bytes (256 bits).
const OUTPUT_LEN: usize = 32;

/// Salt length in bytes.
const SALT_LEN: usize = 16;

/// 256 MiB in KiB — sensitive tier memory target.
const MEMORY_256MB: u32 = 262_144;

/// 64 MiB in KiB — moderate tier memory target.
const MEMORY_64MB: u32 = 65_536;

/// 19 MiB in KiB — interactive tier, the smallest acceptable setting.
const MEMORY_19MB: u32 = 19_456;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Argon2id parameter set.
///
/// Fields use the `argon2` crate convention:
/// - `m_cost`: memory in KiB (NOT bytes, NOT MB)
/// - `t_cost`: number of iterations
/// - `p_cost`: degree of parallelism
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argon2idParams {
    /// Memory cost in kibibytes (1 KiB = 1024 bytes).
    pub m_cost: u32,
    /// Number of iterations (time cost).
    pub t_cost: u32,
    /// Degree of parallelism (number of lanes).
    pub p_cost: u32,
}

/// Hashing preset selector.
///
/// Each preset has default (uncalibrated) parameters. Use
/// [`recommend_params`] to get hardware-adapted versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashPreset {
    /// Login-path hashing on shared servers (~100ms target).
    Interactive,
    /// Recommended default for dedicated auth services.
    Moderate,
    /// High-value credentials, batch or low-traffic paths.
    Sensitive,
}

impl HashPreset {
    /// Return the default (uncalibrated) parameters for this preset.
    #[must_use]
    pub const fn default_params(self) -> Argon2idParams {
        match self {
            Self::Interactive => Argon2idParams {
                m_cost: MEMORY_19MB,
                t_cost: 2,
                p_cost: 1,
            },
            Self::Moderate => Argon2idParams {
                m_cost: MEMORY_64MB,
                t_cost: 3,
                p_cost: 4,
            },
            Self::Sensitive => Argon2idParams {
                m_cost: MEMORY_256MB,
                t_cost: 4,
                p_cost: 4,
            },
        }
    }
}

/// Result of hardware calibration — achievable parameters for all 3 presets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct RecommendedParams {
    /// Interactive preset (~100ms target).
    pub interactive: Argon2idParams,
    /// Moderate preset.
    pub moderate: Argon2idParams,
    /// Sensitive preset.
    pub sensitive: Argon2idParams,
}

// ---------------------------------------------------------------------------
// Hash / verify
// ---------------------------------------------------------------------------

fn argon2_instance(params: &Argon2idParams) -> Result<argon2::Argon2<'static>, PolicyError> {
    let argon2_params =
        argon2::Params::new(params.m_cost, params.t_cost, params.p_cost, Some(OUTPUT_LEN))
            .map_err(|e| PolicyError::Hashing(format!("invalid argon2 params: {e}")))?;
    Ok(argon2::Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2_params,
    ))
}

/// Hash `password` with Argon2id under `params`, returning the
/// PHC-encoded string (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`).
///
/// A fresh 16-byte salt is drawn from `OsRng` per call.
///
/// # Errors
///
/// Returns [`PolicyError::Hashing`] carrying the underlying cause when
/// the parameters are invalid or the derivation itself fails.
pub fn hash_password(password: &str, params: &Argon2idParams) -> Result<String, PolicyError> {
    let mut salt_bytes = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| PolicyError::Hashing(format!("salt encoding failed: {e}")))?;

    let argon2 = argon2_instance(params)?;
    let encoded = argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| PolicyError::Hashing(format!("argon2id hashing failed: {e}")))?;
    salt_bytes.zeroize();
    Ok(encoded)
}

/// Verify `password` against a PHC-encoded Argon2id hash.
///
/// Fail-closed: a wrong password, a malformed encoding, and any internal
/// error all return `false`. Nothing about the failure mode is surfaced,
/// so a caller cannot be turned into a verification oracle.
#[must_use]
pub fn verify_password(password: &str, encoded: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(encoded) else {
        return false;
    };
    argon2::Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

// ---------------------------------------------------------------------------
// Calibration
// ---------------------------------------------------------------------------

/// Benchmark the current hardware and return achievable Argon2id presets.
///
/// Attempts the highest memory tier first (256 MiB), cascading down to
/// 64 MiB and 19 MiB if allocation fails. Iterations are compensated when
/// memory is reduced to maintain equivalent brute-force resistance.
///
/// Environment-dependent: results vary across machines. The deterministic
/// evaluation pipeline never calls this; it exists for deployments tuning
/// their own hash settings.
///
/// # Errors
///
/// Returns [`PolicyError::Hashing`] if even 19 MiB calibration fails.
pub fn recommend_params() -> Result<RecommendedParams, PolicyError> {
    let achievable_memory = find_achievable_memory()?;

    let interactive = Argon2idParams {
        m_cost: core::cmp::min(achievable_memory, MEMORY_19MB),
        t_cost: scale_iterations(
            2,
            MEMORY_19MB,
            core::cmp::min(achievable_memory, MEMORY_19MB),
        ),
        p_cost: 1,
    };

    let moderate = Argon2idParams {
        m_cost: core::cmp::min(achievable_memory, MEMORY_64MB),
        t_cost: scale_iterations(
            3,
            MEMORY_64MB,
            core::cmp::min(achievable_memory, MEMORY_64MB),
        ),
        p_cost: 4,
    };

    let sensitive = Argon2idParams {
        m_cost: achievable_memory,
        t_cost: scale_iterations(4, MEMORY_256MB, achievable_memory),
        p_cost: 4,
    };

    Ok(RecommendedParams {
        interactive,
        moderate,
        sensitive,
    })
}

/// Attempt trial derivations to find the highest achievable memory tier.
///
/// Returns the achievable `m_cost` in KiB. Tries 256 MiB first, cascading
/// to 64 MiB and 19 MiB.
fn find_achievable_memory() -> Result<u32, PolicyError> {
    if try_allocation(MEMORY_256MB) {
        return Ok(MEMORY_256MB);
    }
    if try_allocation(MEMORY_64MB) {
        return Ok(MEMORY_64MB);
    }
    if try_allocation(MEMORY_19MB) {
        return Ok(MEMORY_19MB);
    }

    Err(PolicyError::Hashing(
        "calibration failed: unable to allocate even 19 MiB for Argon2id".into(),
    ))
}

/// Test whether argon2 can allocate the given memory for a trial derivation.
///
/// Uses `catch_unwind` to handle OOM panics gracefully.
fn try_allocation(m_cost_kib: u32) -> bool {
    let result = std::panic::catch_unwind(|| {
        let Ok(params) = argon2::Params::new(m_cost_kib, 1, 1, Some(OUTPUT_LEN)) else {
            return false;
        };
        let argon2 =
            argon2::Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
        let mut out = [0u8; OUTPUT_LEN];
        let dummy_password = b"calibration_probe";
        let dummy_salt = b"calibration_salt_16b";
        let ok = argon2
            .hash_password_into(dummy_password, dummy_salt, &mut out)
            .is_ok();
        out.zeroize();
        ok
    });

    result.unwrap_or(false)
}

/// Scale iterations when memory is reduced.
///
/// When memory is halved, double the iterations to compensate.
const fn scale_iterations(base_t_cost: u32, target_memory: u32, actual_memory: u32) -> u32 {
    if actual_memory >= target_memory || actual_memory == 0 {
        return base_t_cost;
    }
    #[allow(clippy::arithmetic_side_effects)]
    let ratio = target_memory / actual_memory;
    base_t_cost.saturating_mul(ratio)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Small params for fast tests — 32 KiB, 1 iteration, 1 lane.
    const TEST_PARAMS: Argon2idParams = Argon2idParams {
        m_cost: 32,
        t_cost: 1,
        p_cost: 1,
    };

    #[test]
    fn hash_produces_phc_encoded_argon2id() {
        let encoded = hash_password("correct horse", &TEST_PARAMS).expect("hash should succeed");
        assert!(encoded.starts_with("$argon2id$"));
        assert!(encoded.contains("m=32,t=1,p=1"));
    }

    #[test]
    fn hash_salts_are_unique_per_call() {
        let a = hash_password("same password", &TEST_PARAMS).expect("hash should succeed");
        let b = hash_password("same password", &TEST_PARAMS).expect("hash should succeed");
        assert_ne!(a, b, "two hashes of the same password share a salt");
    }

    #[test]
    fn verify_accepts_the_right_password() {
        let encoded = hash_password("open sesame", &TEST_PARAMS).expect("hash should succeed");
        assert!(verify_password("open sesame", &encoded));
    }

    #[test]
    fn verify_rejects_the_wrong_password() {
        let encoded = hash_password("open sesame", &TEST_PARAMS).expect("hash should succeed");
        assert!(!verify_password("open sesame!", &encoded));
    }

    #[test]
    fn verify_is_fail_closed_on_garbage() {
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("anything", "not a phc string"));
        assert!(!verify_password("anything", "$argon2id$v=19$truncated"));
    }

    #[test]
    fn invalid_params_fail_loudly_on_hash() {
        // p_cost of zero is rejected by the argon2 crate.
        let bad = Argon2idParams {
            m_cost: 32,
            t_cost: 1,
            p_cost: 0,
        };
        let err = hash_password("pw", &bad).expect_err("params must be rejected");
        assert!(err.to_string().contains("argon2"));
    }

    #[test]
    fn preset_default_params() {
        let interactive = HashPreset::Interactive.default_params();
        assert_eq!(interactive.m_cost, 19_456);
        assert_eq!(interactive.t_cost, 2);
        assert_eq!(interactive.p_cost, 1);

        let moderate = HashPreset::Moderate.default_params();
        assert_eq!(moderate.m_cost, 65_536);

        let sensitive = HashPreset::Sensitive.default_params();
        assert_eq!(sensitive.m_cost, 262_144);
        assert_eq!(sensitive.t_cost, 4);
    }

    #[test]
    fn scale_iterations_no_reduction() {
        assert_eq!(scale_iterations(3, MEMORY_64MB, MEMORY_64MB), 3);
    }

    #[test]
    fn scale_iterations_reduced_memory_compensates() {
        assert_eq!(scale_iterations(3, MEMORY_64MB, MEMORY_64MB / 2), 6);
        assert_eq!(scale_iterations(4, MEMORY_256MB, MEMORY_64MB), 16);
    }

    #[test]
    fn params_serde_roundtrip() {
        let params = Argon2idParams {
            m_cost: 65_536,
            t_cost: 3,
            p_cost: 4,
        };
        let json = serde_json::to_string(&params).expect("serialize");
        let back: Argon2idParams = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(params, back);
    }
}
