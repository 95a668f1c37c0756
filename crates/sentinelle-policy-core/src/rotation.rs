//! Rotation-period recommendation and expiry calculation.
//!
//! Derives a recommended password rotation period from entropy, then
//! applies account modifiers (risk profile, MFA, privileged cap) and
//! breach signals. Breach signals short-circuit the entropy path: a
//! breached password expires immediately, and a recent similar-password
//! breach forces a 30-day window.
//!
//! Dates are plain ISO 8601 day strings converted to days since the Unix
//! epoch; no timezone handling, no clock dependency beyond "today".

use serde::{Deserialize, Serialize};

use crate::crack_cost::{estimate_crack_cost, HashAlgorithm};
use crate::entropy::{estimate_entropy, round_bits};
use crate::error::PolicyError;
use crate::strength::EntropyBand;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Hard ceiling on the rotation period of privileged accounts (days).
pub const PRIVILEGED_CAP_DAYS: u32 = 90;

/// A similar-password breach younger than this forces a short rotation
/// window (days).
const BREACH_RECENCY_DAYS: i64 = 90;

/// Forced rotation period after a recent similar-password breach (days).
const SIMILAR_BREACH_ROTATION_DAYS: u32 = 30;

/// Rotation is recommended once this many days (or fewer) remain.
const RECOMMEND_WINDOW_DAYS: u64 = 30;

/// Tighter recommendation window used on the forced-rotation path.
const BREACH_RECOMMEND_WINDOW_DAYS: u64 = 7;

/// Bounds on the "check again" interval (days).
const NEXT_CHECK_MIN_DAYS: u64 = 30;
const NEXT_CHECK_MAX_DAYS: u64 = 90;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Account risk profile, scaling the entropy-derived rotation period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    /// Low-value account: rotation period doubled.
    Low,
    /// Standard account: no scaling.
    #[default]
    Medium,
    /// High-value target: rotation period halved.
    High,
}

impl RiskProfile {
    /// Multiplier applied to the base rotation period.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Low => 2.0,
            Self::Medium => 1.0,
            Self::High => 0.5,
        }
    }
}

/// Options for expiry calculation.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryOptions {
    /// Account risk profile.
    pub risk_profile: RiskProfile,
    /// Account is protected by multi-factor authentication.
    pub has_mfa: bool,
    /// Privileged (admin/root) account — capped at [`PRIVILEGED_CAP_DAYS`].
    pub is_privileged: bool,
    /// Hash algorithm protecting the stored credential, for cost modeling.
    pub hash_algorithm: HashAlgorithm,
    /// Days since a similar-password breach was discovered, when known.
    pub days_since_breach_found: Option<i64>,
    /// This exact password is known breached.
    pub is_breached: bool,
    /// Passwords similar to this one appear in breach data.
    pub has_similar_breaches: bool,
}

impl Default for ExpiryOptions {
    fn default() -> Self {
        Self {
            risk_profile: RiskProfile::Medium,
            has_mfa: false,
            is_privileged: false,
            hash_algorithm: HashAlgorithm::Argon2id,
            days_since_breach_found: None,
            is_breached: false,
            has_similar_breaches: false,
        }
    }
}

/// Per-item overrides for [`calculate_expiry_batch`].
///
/// Every field is optional; a set field wins over the shared options,
/// an unset field falls back to them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryOverrides {
    pub risk_profile: Option<RiskProfile>,
    pub has_mfa: Option<bool>,
    pub is_privileged: Option<bool>,
    pub hash_algorithm: Option<HashAlgorithm>,
    pub days_since_breach_found: Option<i64>,
    pub is_breached: Option<bool>,
    pub has_similar_breaches: Option<bool>,
}

impl ExpiryOptions {
    /// Shallow merge: each override field set on `overrides` replaces the
    /// corresponding shared field.
    #[must_use]
    pub fn merged(&self, overrides: &ExpiryOverrides) -> Self {
        Self {
            risk_profile: overrides.risk_profile.unwrap_or(self.risk_profile),
            has_mfa: overrides.has_mfa.unwrap_or(self.has_mfa),
            is_privileged: overrides.is_privileged.unwrap_or(self.is_privileged),
            hash_algorithm: overrides.hash_algorithm.unwrap_or(self.hash_algorithm),
            days_since_breach_found: overrides
                .days_since_breach_found
                .or(self.days_since_breach_found),
            is_breached: overrides.is_breached.unwrap_or(self.is_breached),
            has_similar_breaches: overrides
                .has_similar_breaches
                .unwrap_or(self.has_similar_breaches),
        }
    }
}

/// One password + creation date for [`calculate_expiry_batch`].
#[derive(Clone, Debug)]
pub struct ExpiryBatchItem<'a> {
    pub password: &'a str,
    /// ISO 8601 date or datetime string.
    pub created_at: &'a str,
    /// Item-specific option overrides, merged over the shared options.
    pub overrides: Option<ExpiryOverrides>,
}

/// Fully derived expiry recommendation. Recomputed on every call; nothing
/// is persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryEstimate {
    /// Date the password should be considered expired (ISO 8601 day).
    pub expiry_date: String,
    /// Whole days until `expiry_date`, floored at zero.
    pub days_remaining: u64,
    /// Rotation is recommended now.
    pub recommend_rotation: bool,
    /// Human-readable explanation of how the period was derived.
    pub reason: String,
    /// When to re-evaluate this password (ISO 8601 day).
    pub next_check_date: String,
    /// Recommended rotation period in days (0 = already expired).
    pub rotation_period_days: u32,
    /// Estimated entropy in bits, rounded to one decimal.
    pub entropy_bits: f64,
    /// Estimated brute-force cost in USD under the configured algorithm.
    pub estimated_crack_cost: f64,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Calculate the expiry recommendation for `password` created on
/// `created_at` (ISO 8601 date or datetime string), evaluated against
/// today's date.
///
/// # Errors
///
/// Returns [`PolicyError::InvalidDate`] if `created_at` cannot be parsed.
pub fn calculate_expiry(
    password: &str,
    created_at: &str,
    options: &ExpiryOptions,
) -> Result<ExpiryEstimate, PolicyError> {
    let created_days = parse_iso8601_to_epoch_days(created_at).ok_or_else(|| {
        PolicyError::InvalidDate(format!("not an ISO 8601 date: {created_at:?}"))
    })?;
    Ok(calculate_expiry_at(
        password,
        created_days,
        options,
        now_epoch_days(),
    ))
}

/// Batch variant of [`calculate_expiry`]: shared options, per-item
/// overrides (item wins on each set field). Items are processed
/// sequentially and results preserve input order.
///
/// # Errors
///
/// Returns [`PolicyError::InvalidDate`] on the first unparseable
/// `created_at`.
pub fn calculate_expiry_batch(
    items: &[ExpiryBatchItem<'_>],
    shared: &ExpiryOptions,
) -> Result<Vec<ExpiryEstimate>, PolicyError> {
    let now = now_epoch_days();
    let mut estimates = Vec::with_capacity(items.len());
    for item in items {
        let created_days = parse_iso8601_to_epoch_days(item.created_at).ok_or_else(|| {
            PolicyError::InvalidDate(format!("not an ISO 8601 date: {:?}", item.created_at))
        })?;
        let options = match &item.overrides {
            Some(overrides) => shared.merged(overrides),
            None => shared.clone(),
        };
        estimates.push(calculate_expiry_at(item.password, created_days, &options, now));
    }
    Ok(estimates)
}

/// Core expiry calculation at a fixed evaluation instant (days since the
/// Unix epoch). Pure and deterministic; [`calculate_expiry`] wraps it
/// with today's date.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn calculate_expiry_at(
    password: &str,
    created_days: u64,
    options: &ExpiryOptions,
    now_days: u64,
) -> ExpiryEstimate {
    let entropy_bits = estimate_entropy(password);
    let estimated_crack_cost = estimate_crack_cost(entropy_bits, options.hash_algorithm);

    // Breached password: already expired, rotate now.
    if options.is_breached {
        return ExpiryEstimate {
            expiry_date: epoch_days_to_iso8601(created_days),
            days_remaining: 0,
            recommend_rotation: true,
            reason: "Password appears in a known breach; immediate rotation required.".to_string(),
            next_check_date: epoch_days_to_iso8601(now_days),
            rotation_period_days: 0,
            entropy_bits: round_bits(entropy_bits),
            estimated_crack_cost,
        };
    }

    // Recent similar-password breach: forced short rotation window.
    let breach_is_recent = options
        .days_since_breach_found
        .is_some_and(|d| (0..BREACH_RECENCY_DAYS).contains(&d));
    if options.has_similar_breaches && breach_is_recent {
        let expiry_days = created_days.saturating_add(u64::from(SIMILAR_BREACH_ROTATION_DAYS));
        let days_remaining = expiry_days.saturating_sub(now_days);
        return ExpiryEstimate {
            expiry_date: epoch_days_to_iso8601(expiry_days),
            days_remaining,
            recommend_rotation: days_remaining <= BREACH_RECOMMEND_WINDOW_DAYS,
            reason: format!(
                "Similar passwords breached recently; rotate within \
                 {SIMILAR_BREACH_ROTATION_DAYS} days as a precaution."
            ),
            next_check_date: epoch_days_to_iso8601(
                now_days.saturating_add(BREACH_RECOMMEND_WINDOW_DAYS),
            ),
            rotation_period_days: SIMILAR_BREACH_ROTATION_DAYS,
            entropy_bits: round_bits(entropy_bits),
            estimated_crack_cost,
        };
    }

    // Entropy-based path.
    let band = EntropyBand::from_bits(entropy_bits);
    let base_days = band.base_rotation_days();

    let mut period = f64::from(base_days) * options.risk_profile.multiplier();
    if options.has_mfa {
        period *= 2.0;
    }
    // The cap applies to the fully multiplied result: a privileged account
    // with MFA and a low-risk profile is still held to 90 days.
    let capped = options.is_privileged && period > f64::from(PRIVILEGED_CAP_DAYS);
    if capped {
        period = f64::from(PRIVILEGED_CAP_DAYS);
    }
    let rotation_period_days = period.round() as u32;

    let expiry_days = created_days.saturating_add(u64::from(rotation_period_days));
    let days_remaining = expiry_days.saturating_sub(now_days);
    let next_check_days = now_days.saturating_add(
        days_remaining
            .saturating_sub(RECOMMEND_WINDOW_DAYS)
            .clamp(NEXT_CHECK_MIN_DAYS, NEXT_CHECK_MAX_DAYS),
    );

    let mut reason = format!(
        "Estimated entropy of {} bits rates this password {}; base rotation period is \
         {base_days} days.",
        round_bits(entropy_bits),
        band.as_str(),
    );
    if options.risk_profile == RiskProfile::High {
        reason.push_str(" Period halved for a high-risk profile.");
    }
    if options.has_mfa {
        reason.push_str(" Period doubled thanks to MFA protection.");
    }
    if capped {
        reason.push_str(&format!(
            " Capped at the {PRIVILEGED_CAP_DAYS}-day maximum for privileged access."
        ));
    }

    ExpiryEstimate {
        expiry_date: epoch_days_to_iso8601(expiry_days),
        days_remaining,
        recommend_rotation: days_remaining <= RECOMMEND_WINDOW_DAYS,
        reason,
        next_check_date: epoch_days_to_iso8601(next_check_days),
        rotation_period_days,
        entropy_bits: round_bits(entropy_bits),
        estimated_crack_cost,
    }
}

// ---------------------------------------------------------------------------
// Date helpers
// ---------------------------------------------------------------------------

/// Get the current date as days since the Unix epoch.
#[must_use]
pub fn now_epoch_days() -> u64 {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    secs / 86_400
}

/// Parse an ISO 8601 date/datetime string to epoch days.
/// Supports "YYYY-MM-DDTHH:MM:SSZ" and "YYYY-MM-DD" formats.
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_sign_loss)]
pub fn parse_iso8601_to_epoch_days(s: &str) -> Option<u64> {
    // Extract the "YYYY-MM-DD" prefix.
    let date_part = s.split('T').next()?;
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let year: i64 = parts[0].parse().ok()?;
    let month: i64 = parts[1].parse().ok()?;
    let day: i64 = parts[2].parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    // Civil-date algorithm, valid for dates 1970+.
    let y = if month <= 2 { year - 1 } else { year };
    let m = if month <= 2 { month + 12 } else { month };
    let era_days = 365 * y + y / 4 - y / 100 + y / 400 + (153 * (m - 3) + 2) / 5 + day - 719_469;
    if era_days < 0 {
        None
    } else {
        Some(era_days as u64)
    }
}

/// Format epoch days as an ISO 8601 date string (inverse of
/// [`parse_iso8601_to_epoch_days`]).
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
pub fn epoch_days_to_iso8601(days: u64) -> String {
    // Inverse civil-date algorithm.
    let z = days as i64 + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let mut year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    if month <= 2 {
        year += 1;
    }
    format!("{year:04}-{month:02}-{day:02}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed evaluation instant for deterministic tests (2024-01-01).
    const NOW: u64 = 19_723;

    fn days_ago(days: u64) -> u64 {
        NOW - days
    }

    // ── Breach branches ────────────────────────────────────────────

    #[test]
    fn breached_password_expires_immediately() {
        let options = ExpiryOptions {
            is_breached: true,
            ..ExpiryOptions::default()
        };
        let est = calculate_expiry_at("AnyPassword123!", days_ago(10), &options, NOW);
        assert_eq!(est.days_remaining, 0);
        assert_eq!(est.rotation_period_days, 0);
        assert!(est.recommend_rotation);
        assert!(est.reason.contains("immediate rotation required"));
        assert_eq!(est.expiry_date, epoch_days_to_iso8601(days_ago(10)));
        assert_eq!(est.next_check_date, epoch_days_to_iso8601(NOW));
    }

    #[test]
    fn breached_wins_over_similar_breaches() {
        let options = ExpiryOptions {
            is_breached: true,
            has_similar_breaches: true,
            days_since_breach_found: Some(5),
            ..ExpiryOptions::default()
        };
        let est = calculate_expiry_at("AnyPassword123!", days_ago(10), &options, NOW);
        assert_eq!(est.rotation_period_days, 0);
    }

    #[test]
    fn recent_similar_breach_forces_thirty_day_window() {
        let options = ExpiryOptions {
            has_similar_breaches: true,
            days_since_breach_found: Some(10),
            ..ExpiryOptions::default()
        };
        let est = calculate_expiry_at("AnyPassword123!", days_ago(5), &options, NOW);
        assert_eq!(est.rotation_period_days, 30);
        assert_eq!(est.days_remaining, 25);
        assert!(!est.recommend_rotation, "25 days left is above the 7-day window");
        assert!(est.reason.contains("Similar passwords breached recently"));
        assert_eq!(est.next_check_date, epoch_days_to_iso8601(NOW + 7));
    }

    #[test]
    fn similar_breach_recommends_at_seven_days() {
        let options = ExpiryOptions {
            has_similar_breaches: true,
            days_since_breach_found: Some(10),
            ..ExpiryOptions::default()
        };
        let est = calculate_expiry_at("AnyPassword123!", days_ago(23), &options, NOW);
        assert_eq!(est.days_remaining, 7);
        assert!(est.recommend_rotation);
    }

    #[test]
    fn stale_similar_breach_falls_through_to_entropy_path() {
        let options = ExpiryOptions {
            has_similar_breaches: true,
            days_since_breach_found: Some(120),
            ..ExpiryOptions::default()
        };
        let est = calculate_expiry_at("Password12", days_ago(0), &options, NOW);
        assert_eq!(est.rotation_period_days, 90);
    }

    #[test]
    fn similar_breach_without_discovery_date_falls_through() {
        let options = ExpiryOptions {
            has_similar_breaches: true,
            ..ExpiryOptions::default()
        };
        let est = calculate_expiry_at("Password12", days_ago(0), &options, NOW);
        assert_eq!(est.rotation_period_days, 90);
    }

    // ── Entropy path: base periods and modifiers ───────────────────

    #[test]
    fn weak_entropy_gets_ninety_days() {
        // "Password12": 10 chars over 62 → ≈59.5 bits → weak band.
        let est = calculate_expiry_at("Password12", days_ago(0), &ExpiryOptions::default(), NOW);
        assert!(est.entropy_bits >= 40.0 && est.entropy_bits < 60.0);
        assert_eq!(est.rotation_period_days, 90);
    }

    #[test]
    fn mfa_doubles_the_period() {
        let base = calculate_expiry_at("Password12", days_ago(0), &ExpiryOptions::default(), NOW);
        let with_mfa = calculate_expiry_at(
            "Password12",
            days_ago(0),
            &ExpiryOptions {
                has_mfa: true,
                ..ExpiryOptions::default()
            },
            NOW,
        );
        assert_eq!(with_mfa.rotation_period_days, base.rotation_period_days * 2);
        assert!(with_mfa.reason.contains("MFA protection"));
        assert!(!base.reason.contains("MFA protection"));
    }

    #[test]
    fn risk_profile_scales_exactly() {
        let at_risk = |risk_profile| {
            calculate_expiry_at(
                "Password12",
                days_ago(0),
                &ExpiryOptions {
                    risk_profile,
                    ..ExpiryOptions::default()
                },
                NOW,
            )
            .rotation_period_days
        };
        let medium = at_risk(RiskProfile::Medium);
        assert_eq!(at_risk(RiskProfile::Low), medium * 2);
        assert_eq!(at_risk(RiskProfile::High), medium / 2);
    }

    #[test]
    fn privileged_cap_applies_after_all_multipliers() {
        // Very strong passphrase, low risk, MFA: 730 * 2 * 2 = 2920 days
        // uncapped — privileged still lands on 90.
        let est = calculate_expiry_at(
            "VeryLongUniquePassphrase!#Secure",
            days_ago(0),
            &ExpiryOptions {
                risk_profile: RiskProfile::Low,
                has_mfa: true,
                is_privileged: true,
                ..ExpiryOptions::default()
            },
            NOW,
        );
        assert_eq!(est.rotation_period_days, PRIVILEGED_CAP_DAYS);
        assert!(est.reason.contains("privileged access"));
        assert!(est.reason.contains("90-day maximum"));
    }

    #[test]
    fn privileged_below_cap_is_untouched() {
        // Very weak password: 30-day base is already under the cap, so the
        // privileged clause must not appear in the reason.
        let est = calculate_expiry_at(
            "abc",
            days_ago(0),
            &ExpiryOptions {
                is_privileged: true,
                ..ExpiryOptions::default()
            },
            NOW,
        );
        assert_eq!(est.rotation_period_days, 30);
        assert!(!est.reason.contains("privileged access"));
    }

    #[test]
    fn high_risk_clause_in_reason() {
        let est = calculate_expiry_at(
            "Password12",
            days_ago(0),
            &ExpiryOptions {
                risk_profile: RiskProfile::High,
                ..ExpiryOptions::default()
            },
            NOW,
        );
        assert!(est.reason.contains("high-risk profile"));
    }

    // ── Entropy path: dates and windows ────────────────────────────

    #[test]
    fn days_remaining_floors_at_zero() {
        // Created two years ago with a 90-day period: long expired.
        let est = calculate_expiry_at("Password12", days_ago(730), &ExpiryOptions::default(), NOW);
        assert_eq!(est.days_remaining, 0);
        assert!(est.recommend_rotation);
    }

    #[test]
    fn recommend_at_thirty_days_remaining() {
        let est = calculate_expiry_at("Password12", days_ago(60), &ExpiryOptions::default(), NOW);
        assert_eq!(est.days_remaining, 30);
        assert!(est.recommend_rotation);

        let est = calculate_expiry_at("Password12", days_ago(59), &ExpiryOptions::default(), NOW);
        assert_eq!(est.days_remaining, 31);
        assert!(!est.recommend_rotation);
    }

    #[test]
    fn next_check_is_clamped_between_thirty_and_ninety_days() {
        // Fresh password with a 730-day period: remaining-30 ≫ 90 → 90.
        let est = calculate_expiry_at(
            "VeryLongUniquePassphrase!#Secure",
            days_ago(0),
            &ExpiryOptions::default(),
            NOW,
        );
        assert_eq!(est.next_check_date, epoch_days_to_iso8601(NOW + 90));

        // Expired password: remaining-30 ≪ 30 → 30.
        let est = calculate_expiry_at("Password12", days_ago(730), &ExpiryOptions::default(), NOW);
        assert_eq!(est.next_check_date, epoch_days_to_iso8601(NOW + 30));
    }

    #[test]
    fn crack_cost_attached_on_every_branch() {
        let breached = ExpiryOptions {
            is_breached: true,
            ..ExpiryOptions::default()
        };
        let est = calculate_expiry_at("Password12", days_ago(0), &breached, NOW);
        assert!(est.estimated_crack_cost > 0.0);

        let est = calculate_expiry_at("Password12", days_ago(0), &ExpiryOptions::default(), NOW);
        assert!(est.estimated_crack_cost > 0.0);
    }

    #[test]
    fn weaker_hash_algorithm_lowers_the_attached_cost() {
        let argon = calculate_expiry_at("Password12", days_ago(0), &ExpiryOptions::default(), NOW);
        let md5 = calculate_expiry_at(
            "Password12",
            days_ago(0),
            &ExpiryOptions {
                hash_algorithm: HashAlgorithm::Md5,
                ..ExpiryOptions::default()
            },
            NOW,
        );
        assert!(md5.estimated_crack_cost < argon.estimated_crack_cost);
    }

    // ── Options merge ──────────────────────────────────────────────

    #[test]
    fn overrides_win_per_field() {
        let shared = ExpiryOptions {
            risk_profile: RiskProfile::High,
            has_mfa: true,
            ..ExpiryOptions::default()
        };
        let overrides = ExpiryOverrides {
            risk_profile: Some(RiskProfile::Low),
            ..ExpiryOverrides::default()
        };
        let merged = shared.merged(&overrides);
        assert_eq!(merged.risk_profile, RiskProfile::Low);
        assert!(merged.has_mfa, "unset override falls back to shared");
    }

    // ── Date helpers ───────────────────────────────────────────────

    #[test]
    fn parse_date_only() {
        assert_eq!(parse_iso8601_to_epoch_days("2024-01-01"), Some(19_723));
    }

    #[test]
    fn parse_datetime() {
        assert_eq!(
            parse_iso8601_to_epoch_days("2024-01-01T12:00:00Z"),
            Some(19_723)
        );
    }

    #[test]
    fn parse_invalid() {
        assert!(parse_iso8601_to_epoch_days("not-a-date").is_none());
        assert!(parse_iso8601_to_epoch_days("2024-13-01").is_none());
        assert!(parse_iso8601_to_epoch_days("2024-00-10").is_none());
    }

    #[test]
    fn format_known_dates() {
        assert_eq!(epoch_days_to_iso8601(0), "1970-01-01");
        assert_eq!(epoch_days_to_iso8601(19_723), "2024-01-01");
    }

    #[test]
    fn parse_format_roundtrip() {
        for date in ["1970-01-01", "1999-12-31", "2000-02-29", "2024-06-15", "2099-07-04"] {
            let days = parse_iso8601_to_epoch_days(date).expect("parse");
            assert_eq!(epoch_days_to_iso8601(days), date);
        }
    }

    // ── Serde ──────────────────────────────────────────────────────

    #[test]
    fn options_serde_roundtrip() {
        let options = ExpiryOptions {
            risk_profile: RiskProfile::High,
            has_mfa: true,
            days_since_breach_found: Some(12),
            ..ExpiryOptions::default()
        };
        let json = serde_json::to_string(&options).expect("serialize");
        assert!(json.contains("\"riskProfile\":\"high\""));
        let back: ExpiryOptions = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(options, back);
    }

    #[test]
    fn estimate_serde_uses_camel_case() {
        let est = calculate_expiry_at("Password12", days_ago(0), &ExpiryOptions::default(), NOW);
        let json = serde_json::to_string(&est).expect("serialize");
        assert!(json.contains("\"rotationPeriodDays\":90"));
        assert!(json.contains("\"recommendRotation\""));
    }
}
