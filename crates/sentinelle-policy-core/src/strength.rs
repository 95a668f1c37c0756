//! Strength classification bands.
//!
//! Two deliberately distinct band sets live here:
//! - [`StrengthBand`] — four bands over a 0..=100 composite score, used by
//!   the analyzer, the quick-check path, and the generators. Every call
//!   site classifies through the same breakpoints so a score judged
//!   "strong" in one API is never "weak" in another.
//! - [`EntropyBand`] — five bands over raw entropy bits, consumed only by
//!   the rotation engine to pick a base rotation period.
//!
//! The two overlap numerically but are different scales with different
//! names; do not conflate them.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Score bands (0..=100)
// ---------------------------------------------------------------------------

/// Four-level strength band derived from a 0..=100 composite score.
///
/// Total order: weak < medium < strong < very-strong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthBand {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthBand {
    /// Classify a 0..=100 score using the fixed breakpoints 40 / 60 / 80.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=39 => Self::Weak,
            40..=59 => Self::Medium,
            60..=79 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::VeryStrong => "very-strong",
        }
    }
}

// ---------------------------------------------------------------------------
// Entropy bands (bits)
// ---------------------------------------------------------------------------

/// Five-level classification of raw entropy bits.
///
/// Used only by the rotation engine. Note the different band names and the
/// extra level compared to [`StrengthBand`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntropyBand {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl EntropyBand {
    /// Classify entropy bits at the fixed breakpoints 40 / 60 / 80 / 100.
    #[must_use]
    pub fn from_bits(bits: f64) -> Self {
        if bits < 40.0 {
            Self::VeryWeak
        } else if bits < 60.0 {
            Self::Weak
        } else if bits < 80.0 {
            Self::Moderate
        } else if bits < 100.0 {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryWeak => "very weak",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
        }
    }

    /// Base rotation period in days for this band.
    ///
    /// Very-strong maps the "no forced rotation" sentinel to a finite
    /// two-year ceiling.
    #[must_use]
    pub const fn base_rotation_days(self) -> u32 {
        match self {
            Self::VeryWeak => 30,
            Self::Weak => 90,
            Self::Moderate => 180,
            Self::Strong => 365,
            Self::VeryStrong => 730,
        }
    }
}

// ---------------------------------------------------------------------------
// Crack-time text
// ---------------------------------------------------------------------------

/// Baseline offline guessing rate for crack-time display (guesses/second).
const DISPLAY_GUESS_RATE: f64 = 1e10;

/// Human-readable crack-time text for a password of `bits` entropy.
///
/// Uses the 50%-probability expectation (half the search space) at the
/// fixed display rate. Text only; the monetary model lives in
/// [`crate::crack_cost`].
#[must_use]
pub fn crack_time_text(bits: f64) -> String {
    let attempts = 2.0_f64.powf(bits) / 2.0;
    let seconds = attempts / DISPLAY_GUESS_RATE;
    format_duration(seconds)
}

/// Render a duration in seconds as a rough human-readable magnitude.
fn format_duration(seconds: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 86_400.0;
    const YEAR: f64 = 31_557_600.0;
    const CENTURY: f64 = YEAR * 100.0;

    if seconds < 1.0 {
        "instantly".to_string()
    } else if seconds < MINUTE {
        format!("{} seconds", seconds.round())
    } else if seconds < HOUR {
        format!("{} minutes", (seconds / MINUTE).round())
    } else if seconds < DAY {
        format!("{} hours", (seconds / HOUR).round())
    } else if seconds < YEAR {
        format!("{} days", (seconds / DAY).round())
    } else if seconds < CENTURY {
        format!("{} years", (seconds / YEAR).round())
    } else {
        "centuries".to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
