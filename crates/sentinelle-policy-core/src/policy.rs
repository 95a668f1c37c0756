//! NIST-style password policy validation.
//!
//! Follows the 800-63B philosophy: length and blocklist membership are
//! hard failures, composition patterns are hints. Every check runs
//! unconditionally and violations accumulate — a caller sees the full
//! picture in one pass, not the first failure.
//!
//! Weak password *content* never raises an error; only malformed
//! configuration does.

use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::PolicyError;
use crate::patterns::{find_keyboard_run, find_repeat, find_sequence, find_year};

// ---------------------------------------------------------------------------
// Constant tables
// ---------------------------------------------------------------------------

/// Built-in common-password blocklist (most-used entries from public
/// breach corpora). Matched case-insensitively and exactly.
const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "12345678", "1234567890", "qwerty", "qwertyuiop",
    "abc123", "password1", "password123", "passw0rd", "admin", "administrator", "root",
    "letmein", "welcome", "welcome1", "login", "guest", "master", "monkey", "dragon",
    "princess", "sunshine", "flower", "shadow", "superman", "batman", "starwars", "pokemon",
    "football", "baseball", "soccer", "hockey", "jordan23", "iloveyou", "lovely", "freedom",
    "whatever", "trustno1", "secret", "summer", "winter", "hello", "charlie", "michael",
    "jennifer", "jessica", "michelle", "daniel", "ashley", "matrix", "computer", "internet",
    "samsung", "google", "zaq1zaq1", "qazwsx", "1qaz2wsx", "q1w2e3r4", "asdfghjkl", "zxcvbnm",
    "111111", "000000", "121212", "123123", "654321", "666666", "696969", "112233",
];

/// Context-word candidates shorter than this are ignored — a one or two
/// character fragment would match nearly any password.
const MIN_CONTEXT_WORD_LEN: usize = 3;

/// Score penalty per error-severity violation.
const ERROR_PENALTY: u8 = 20;

/// Score penalty per warning-severity violation.
const WARNING_PENALTY: u8 = 10;

fn builtin_blocklist() -> &'static HashSet<&'static str> {
    static LOCK: OnceLock<HashSet<&'static str>> = OnceLock::new();
    LOCK.get_or_init(|| COMMON_PASSWORDS.iter().copied().collect())
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Severity of a policy violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fails validation.
    Error,
    /// Advisory only; never fails validation.
    Warning,
}

/// One violated policy rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyViolation {
    /// Which check fired: `length`, `characters`, `blocklist`, `pattern`,
    /// `context`, or `custom`.
    pub field: String,
    /// Human-readable message.
    pub message: String,
    pub severity: Severity,
    /// Additional diagnostic detail, when available.
    pub details: Option<String>,
}

/// Result of validating one password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResult {
    /// True iff no error-severity violation fired. Warnings alone leave a
    /// password valid (with a reduced score).
    pub valid: bool,
    pub violations: Vec<PolicyViolation>,
    /// 0..=100: starts at 100, minus 20 per error and 10 per warning.
    pub score: u8,
    /// The password after Unicode normalization — the string every check
    /// actually ran against.
    pub normalized: String,
}

/// Unicode normalization form applied before validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationForm {
    Nfc,
    Nfd,
    #[default]
    Nfkc,
    Nfkd,
}

impl NormalizationForm {
    /// Normalize `s` under this form.
    #[must_use]
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::Nfc => s.nfc().collect(),
            Self::Nfd => s.nfd().collect(),
            Self::Nfkc => s.nfkc().collect(),
            Self::Nfkd => s.nfkd().collect(),
        }
    }
}

/// Account context for leakage checks — none of these may appear inside
/// the password.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationContext {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A caller-supplied validation rule. The engine treats implementations
/// as opaque predicates: `validate` returning `false` records a violation
/// on the `custom` field at the rule's own severity.
pub trait ValidationRule {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &str;
    /// Returns `true` when the password satisfies this rule.
    fn validate(&self, password: &str, context: Option<&ValidationContext>) -> bool;
    /// Message recorded when the rule fails.
    fn message(&self) -> &str;
    /// Severity of a failure.
    fn severity(&self) -> Severity;
}

/// Password policy configuration. Built once, never mutated by the
/// validator.
pub struct PolicyConfig {
    /// Minimum length in characters (NIST 800-63B memorized-secret floor
    /// for this deployment).
    pub min_length: usize,
    /// Maximum length in characters.
    pub max_length: usize,
    /// Blocklists checked for exact case-insensitive membership. An empty
    /// vector disables blocklist checking entirely.
    pub blocklists: Vec<Vec<String>>,
    /// Deployment-specific words that must not appear in passwords
    /// (product name, company name, ...).
    pub context_words: Vec<String>,
    /// When set, every password character must appear in this string.
    pub allowed_chars: Option<String>,
    /// Unicode normalization applied before all checks.
    pub normalization: NormalizationForm,
    /// Run the weak-pattern checks (always warnings, never errors).
    pub detect_patterns: bool,
    /// Caller-supplied rules, run last.
    pub custom_rules: Vec<Box<dyn ValidationRule>>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: 15,
            max_length: 128,
            blocklists: vec![COMMON_PASSWORDS.iter().map(|s| (*s).to_string()).collect()],
            context_words: Vec::new(),
            allowed_chars: None,
            normalization: NormalizationForm::Nfkc,
            detect_patterns: true,
            custom_rules: Vec::new(),
        }
    }
}

impl std::fmt::Debug for PolicyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyConfig")
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("blocklists", &self.blocklists.len())
            .field("context_words", &self.context_words)
            .field("allowed_chars", &self.allowed_chars)
            .field("normalization", &self.normalization)
            .field("detect_patterns", &self.detect_patterns)
            .field(
                "custom_rules",
                &self
                    .custom_rules
                    .iter()
                    .map(|r| r.name().to_string())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate `password` against `config`, optionally checking `context`
/// for leaked account words.
///
/// All checks run; violations accumulate. `valid` is false only when an
/// error-severity violation fired — pattern findings are always warnings
/// and never block a password on their own.
///
/// # Errors
///
/// Returns [`PolicyError::InvalidConfig`] when the configured length
/// bounds are unusable (`min_length` of zero, or above `max_length`).
/// Weak password content is never an error.
pub fn validate_password(
    password: &str,
    config: &PolicyConfig,
    context: Option<&ValidationContext>,
) -> Result<PolicyResult, PolicyError> {
    if config.min_length == 0 {
        return Err(PolicyError::InvalidConfig(
            "min_length must be at least 1".to_string(),
        ));
    }
    if config.min_length > config.max_length {
        return Err(PolicyError::InvalidConfig(format!(
            "min_length ({}) exceeds max_length ({})",
            config.min_length, config.max_length
        )));
    }

    let normalized = config.normalization.apply(password);
    let mut violations = Vec::new();

    check_length(&normalized, config, &mut violations);
    check_allowed_chars(&normalized, config, &mut violations);
    check_blocklists(&normalized, config, &mut violations);
    if config.detect_patterns {
        check_patterns(&normalized, &mut violations);
    }
    check_context(&normalized, config, context, &mut violations);
    check_custom_rules(&normalized, config, context, &mut violations);

    let valid = !violations.iter().any(|v| v.severity == Severity::Error);
    let score = score_violations(&violations);

    Ok(PolicyResult {
        valid,
        violations,
        score,
        normalized,
    })
}

/// Batch variant of [`validate_password`]: one shared configuration,
/// results in input order. A custom rule panicking on one item is
/// contained to that item's result and does not abort the rest.
///
/// # Errors
///
/// Returns [`PolicyError::InvalidConfig`] under the same conditions as
/// [`validate_password`] (checked once, up front).
pub fn validate_passwords_batch(
    passwords: &[&str],
    config: &PolicyConfig,
    context: Option<&ValidationContext>,
) -> Result<Vec<PolicyResult>, PolicyError> {
    let mut results = Vec::with_capacity(passwords.len());
    for password in passwords {
        results.push(validate_password(password, config, context)?);
    }
    Ok(results)
}

// ---------------------------------------------------------------------------
// Individual checks
// ---------------------------------------------------------------------------

fn check_length(normalized: &str, config: &PolicyConfig, violations: &mut Vec<PolicyViolation>) {
    let len = normalized.chars().count();
    if len < config.min_length {
        violations.push(PolicyViolation {
            field: "length".to_string(),
            message: format!(
                "password must be at least {} characters, got {len}",
                config.min_length
            ),
            severity: Severity::Error,
            details: None,
        });
    } else if len > config.max_length {
        violations.push(PolicyViolation {
            field: "length".to_string(),
            message: format!(
                "password must be at most {} characters, got {len}",
                config.max_length
            ),
            severity: Severity::Error,
            details: None,
        });
    }
}

fn check_allowed_chars(
    normalized: &str,
    config: &PolicyConfig,
    violations: &mut Vec<PolicyViolation>,
) {
    let Some(allowed) = &config.allowed_chars else {
        return;
    };
    let allowed_set: HashSet<char> = allowed.chars().collect();
    let disallowed: Vec<char> = normalized
        .chars()
        .filter(|c| !allowed_set.contains(c))
        .collect();
    if !disallowed.is_empty() {
        violations.push(PolicyViolation {
            field: "characters".to_string(),
            message: "password contains characters outside the allowed set".to_string(),
            severity: Severity::Error,
            details: Some(format!("disallowed: {disallowed:?}")),
        });
    }
}

fn check_blocklists(
    normalized: &str,
    config: &PolicyConfig,
    violations: &mut Vec<PolicyViolation>,
) {
    if config.blocklists.is_empty() {
        return;
    }
    let lower = normalized.to_lowercase();
    let blocked = config
        .blocklists
        .iter()
        .any(|list| list.iter().any(|entry| entry.to_lowercase() == lower));
    if blocked {
        violations.push(PolicyViolation {
            field: "blocklist".to_string(),
            message: "password appears in a common-password blocklist".to_string(),
            severity: Severity::Error,
            details: None,
        });
    }
}

/// Pattern findings are advisory: each one is a separate warning and none
/// ever escalates to an error (NIST treats composition patterns as a
/// hint, not a hard block).
fn check_patterns(normalized: &str, violations: &mut Vec<PolicyViolation>) {
    let lower = normalized.to_lowercase();

    let mut push = |description: String| {
        violations.push(PolicyViolation {
            field: "pattern".to_string(),
            message: "password contains a predictable pattern".to_string(),
            severity: Severity::Warning,
            details: Some(description),
        });
    };

    if let Some(m) = find_keyboard_run(&lower) {
        push(format!("contains keyboard pattern \"{m}\""));
    }
    if let Some(m) = find_repeat(&lower) {
        push(format!("contains repeated characters \"{m}\""));
    }
    if let Some(m) = find_sequence(&lower) {
        push(format!("contains sequential characters \"{m}\""));
    }
    if let Some(m) = find_year(&lower) {
        push(format!("contains year \"{m}\""));
    }
}

fn check_context(
    normalized: &str,
    config: &PolicyConfig,
    context: Option<&ValidationContext>,
    violations: &mut Vec<PolicyViolation>,
) {
    let lower = normalized.to_lowercase();
    let mut matched_sources: Vec<String> = Vec::new();

    let mut check = |label: &str, candidate: &str| {
        let candidate = candidate.to_lowercase();
        if candidate.chars().count() >= MIN_CONTEXT_WORD_LEN && lower.contains(&candidate) {
            matched_sources.push(format!("{label} \"{candidate}\""));
        }
    };

    for word in &config.context_words {
        check("context word", word);
    }
    if let Some(ctx) = context {
        if let Some(username) = &ctx.username {
            check("username", username);
            // Also catch "j.doe" leaking into "jdoe2024".
            let stripped: String = username.chars().filter(char::is_ascii_alphanumeric).collect();
            if stripped != *username {
                check("username", &stripped);
            }
        }
        if let Some(email) = &ctx.email {
            if let Some(local_part) = email.split('@').next() {
                check("email", local_part);
            }
        }
        if let Some(first_name) = &ctx.first_name {
            check("first name", first_name);
        }
        if let Some(last_name) = &ctx.last_name {
            check("last name", last_name);
        }
    }

    if !matched_sources.is_empty() {
        violations.push(PolicyViolation {
            field: "context".to_string(),
            message: "password contains account-related words".to_string(),
            severity: Severity::Error,
            details: Some(format!("matched: {}", matched_sources.join(", "))),
        });
    }
}

/// Run caller-supplied rules, containing panics.
///
/// A panicking predicate is treated as a failed rule at error severity
/// with a standardized message: the password cannot be vouched for by a
/// rule that did not finish evaluating it.
fn check_custom_rules(
    normalized: &str,
    config: &PolicyConfig,
    context: Option<&ValidationContext>,
    violations: &mut Vec<PolicyViolation>,
) {
    for rule in &config.custom_rules {
        let outcome = catch_unwind(AssertUnwindSafe(|| rule.validate(normalized, context)));
        match outcome {
            Ok(true) => {}
            Ok(false) => violations.push(PolicyViolation {
                field: "custom".to_string(),
                message: rule.message().to_string(),
                severity: rule.severity(),
                details: Some(format!("rule \"{}\"", rule.name())),
            }),
            Err(_) => violations.push(PolicyViolation {
                field: "custom".to_string(),
                message: format!("custom rule \"{}\" panicked during evaluation", rule.name()),
                severity: Severity::Error,
                details: None,
            }),
        }
    }
}

fn score_violations(violations: &[PolicyViolation]) -> u8 {
    let mut score: u8 = 100;
    for violation in violations {
        let penalty = match violation.severity {
            Severity::Error => ERROR_PENALTY,
            Severity::Warning => WARNING_PENALTY,
        };
        score = score.saturating_sub(penalty);
    }
    score
}

/// Membership test against the built-in common-password blocklist
/// (case-insensitive exact match).
#[must_use]
pub fn is_common_password(password: &str) -> bool {
    builtin_blocklist().contains(password.to_lowercase().as_str())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
