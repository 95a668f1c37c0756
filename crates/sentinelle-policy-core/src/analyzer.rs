//! Composite strength analysis.
//!
//! Orchestrates the entropy estimator, the pattern detector, and an
//! external strength scorer into one report. Scoring engines of the
//! zxcvbn family are collaborators, not something this crate
//! reimplements: they sit behind the [`StrengthScorer`] trait, and
//! [`HeuristicScorer`] is the self-contained default.

use serde::{Deserialize, Serialize};

use crate::entropy::{estimate_entropy, round_bits};
use crate::patterns::{detect_patterns, PatternFinding};
use crate::strength::{crack_time_text, EntropyBand, StrengthBand};

// ---------------------------------------------------------------------------
// Scorer seam
// ---------------------------------------------------------------------------

/// Feedback from an external strength scorer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerReport {
    /// Coarse 0..=4 score (zxcvbn convention).
    pub score: u8,
    /// Estimated seconds to crack under the scorer's own attack model.
    pub crack_time_seconds: f64,
    /// Headline warning, when the scorer has one.
    pub warning: Option<String>,
    /// Actionable suggestions.
    pub suggestions: Vec<String>,
}

/// External password strength scorer.
///
/// Implementations must be pure: same password in, same report out.
pub trait StrengthScorer {
    /// Score `password`, returning a coarse 0..=4 rating with feedback.
    fn score(&self, password: &str) -> ScorerReport;
}

/// Built-in scorer: entropy band plus pattern count, with canned
/// feedback. A stand-in with the same contract as a zxcvbn-class engine,
/// for callers that do not wire a real one in.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicScorer;

impl StrengthScorer for HeuristicScorer {
    fn score(&self, password: &str) -> ScorerReport {
        let bits = estimate_entropy(password);
        let findings = detect_patterns(password);

        let base: u8 = if password.is_empty() {
            0
        } else {
            match EntropyBand::from_bits(bits) {
                EntropyBand::VeryWeak => 1,
                EntropyBand::Weak => 2,
                EntropyBand::Moderate => 3,
                EntropyBand::Strong | EntropyBand::VeryStrong => 4,
            }
        };
        #[allow(clippy::cast_possible_truncation)]
        let score = base.saturating_sub(findings.len().min(4) as u8);

        let warning = findings
            .first()
            .map(|f| format!("password {}", f.description));

        let mut suggestions = Vec::new();
        if password.chars().count() < 12 {
            suggestions.push("use at least 12 characters".to_string());
        }
        if !findings.is_empty() {
            suggestions.push("avoid predictable patterns and common words".to_string());
        }
        if password.chars().all(|c| c.is_ascii_lowercase()) && !password.is_empty() {
            suggestions.push("mix upper case, digits, and symbols".to_string());
        }

        ScorerReport {
            score,
            crack_time_seconds: 2.0_f64.powf(bits) / 2.0 / 1e10,
            warning,
            suggestions,
        }
    }
}

// ---------------------------------------------------------------------------
// Composite report
// ---------------------------------------------------------------------------

/// Weight of the entropy component in the composite 0..=100 score.
const ENTROPY_WEIGHT: f64 = 0.6;

/// Weight of the external scorer in the composite 0..=100 score.
const SCORER_WEIGHT: f64 = 0.4;

/// Penalty per detected weak pattern.
const PATTERN_PENALTY: f64 = 5.0;

/// Full analysis of one password.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    /// Composite 0..=100 score.
    pub score: u8,
    /// Four-level band derived from `score`.
    pub band: StrengthBand,
    /// Estimated entropy in bits, rounded to one decimal.
    pub entropy_bits: f64,
    /// Human-readable crack-time text for the entropy estimate.
    pub crack_time_display: String,
    /// Weak patterns found in the password.
    pub weaknesses: Vec<PatternFinding>,
    /// Headline warning from the external scorer, if any.
    pub warning: Option<String>,
    /// Suggestions from the external scorer.
    pub suggestions: Vec<String>,
}

/// Analyze `password` using `scorer` as the external strength engine.
///
/// The composite score blends normalized entropy with the scorer's 0..=4
/// rating and subtracts a small penalty per weak pattern; the band is
/// then classified through the same breakpoints as every other call
/// site.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn analyze_password(password: &str, scorer: &dyn StrengthScorer) -> StrengthReport {
    let bits = estimate_entropy(password);
    let weaknesses = detect_patterns(password);
    let external = scorer.score(password);

    let entropy_component = bits.min(100.0) * ENTROPY_WEIGHT;
    let scorer_component = f64::from(external.score.min(4)) * 25.0 * SCORER_WEIGHT;
    #[allow(clippy::cast_precision_loss)]
    let penalty = PATTERN_PENALTY * weaknesses.len() as f64;
    let score = (entropy_component + scorer_component - penalty)
        .clamp(0.0, 100.0)
        .round() as u8;

    StrengthReport {
        score,
        band: StrengthBand::from_score(score),
        entropy_bits: round_bits(bits),
        crack_time_display: crack_time_text(bits),
        weaknesses,
        warning: external.warning,
        suggestions: external.suggestions,
    }
}

/// Quick strength check with the built-in scorer.
///
/// Classifies through the same breakpoints as [`analyze_password`], so a
/// password never lands in a different band depending on which API the
/// caller reached for.
#[must_use]
pub fn quick_check(password: &str) -> StrengthBand {
    analyze_password(password, &HeuristicScorer).band
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
