//! Weak-pattern detection.
//!
//! Scans a password for five kinds of predictable structure: keyboard
//! runs, repeated characters, sequential characters, year-like digits,
//! and common dictionary tokens. Matching is case-insensitive. Each kind
//! short-circuits at its first hit, but every kind is always evaluated,
//! so one password can carry several findings.
//!
//! Consumed by both the strength analyzer (weaknesses) and the policy
//! validator (warning-severity violations).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constant tables
// ---------------------------------------------------------------------------

/// Keyboard-adjacency runs, checked as substrings. First match wins.
const KEYBOARD_RUNS: &[&str] = &[
    "qwertyuiop",
    "qwerty",
    "azerty",
    "asdfghjkl",
    "asdfgh",
    "asdf",
    "zxcvbn",
    "zxcv",
    "qazwsx",
    "1qaz2wsx",
    "1234567890",
    "0987654321",
];

/// Short literal repeats checked before the general contiguous-repeat scan.
const REPEAT_LITERALS: &[&str] = &["aaa", "111", "000", "zzz", "xxx", "...."];

/// Ascending three-character runs, also checked in reversed orientation.
const SEQUENCE_RUNS: &[&str] = &[
    "012", "123", "234", "345", "456", "567", "678", "789", "890", "abc", "bcd", "cde", "def",
    "efg", "fgh", "ghi", "hij", "ijk", "jkl", "klm", "lmn", "mno", "nop", "opq", "pqr", "qrs",
    "rst", "stu", "tuv", "uvw", "vwx", "wxy", "xyz",
];

/// Common dictionary tokens. Deliberately small: the policy validator's
/// blocklist handles full common-password matching; this table only feeds
/// diagnostic findings.
const DICTIONARY_TOKENS: &[&str] = &[
    "password",
    "passwort",
    "motdepasse",
    "letmein",
    "welcome",
    "admin",
    "administrator",
    "qwerty",
    "monkey",
    "dragon",
    "master",
    "login",
    "secret",
    "iloveyou",
    "sunshine",
    "princess",
    "football",
    "baseball",
    "superman",
    "batman",
    "trustno1",
    "shadow",
];

/// Minimum contiguous run length for the general repeat scan.
const REPEAT_RUN_LEN: usize = 3;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Kind of weak pattern found in a password.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Keyboard-adjacency run ("qwerty", "asdf", ...).
    Keyboard,
    /// The same character repeated three or more times contiguously.
    Repetitive,
    /// Ascending or descending character sequence ("abc", "321", ...).
    Sequential,
    /// Four-digit year-like substring (19xx or 20xx).
    Year,
    /// Common word or degenerate single-character password.
    Dictionary,
}

impl PatternKind {
    /// Short lowercase label for messages and serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyboard => "keyboard",
            Self::Repetitive => "repetitive",
            Self::Sequential => "sequential",
            Self::Year => "year",
            Self::Dictionary => "dictionary",
        }
    }
}

/// One weak pattern found in a password.
///
/// `matched` carries the triggering substring so diagnostic messages can
/// show exactly what to remove.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFinding {
    /// Which detector fired.
    pub kind: PatternKind,
    /// The substring that triggered the finding (lowercased).
    pub matched: String,
    /// Human-readable description naming the pattern and the fragment.
    pub description: String,
}

impl PatternFinding {
    fn new(kind: PatternKind, matched: &str, description: String) -> Self {
        Self {
            kind,
            matched: matched.to_string(),
            description,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Detect weak patterns in `password`.
///
/// Evaluates all five pattern kinds; within each kind the first hit wins.
/// Findings are returned in a fixed kind order (keyboard, repetitive,
/// sequential, year, dictionary).
#[must_use]
pub fn detect_patterns(password: &str) -> Vec<PatternFinding> {
    let lower = password.to_lowercase();
    let mut findings = Vec::new();

    if let Some(m) = find_keyboard_run(&lower) {
        findings.push(PatternFinding::new(
            PatternKind::Keyboard,
            m,
            format!("contains keyboard pattern \"{m}\""),
        ));
    }
    if let Some(m) = find_repeat(&lower) {
        findings.push(PatternFinding::new(
            PatternKind::Repetitive,
            &m,
            format!("contains repeated characters \"{m}\""),
        ));
    }
    if let Some(m) = find_sequence(&lower) {
        findings.push(PatternFinding::new(
            PatternKind::Sequential,
            &m,
            format!("contains sequential characters \"{m}\""),
        ));
    }
    if let Some(m) = find_year(&lower) {
        findings.push(PatternFinding::new(
            PatternKind::Year,
            &m,
            format!("contains year \"{m}\""),
        ));
    }
    if let Some(m) = find_dictionary_token(&lower) {
        findings.push(PatternFinding::new(
            PatternKind::Dictionary,
            &m,
            format!("contains common word \"{m}\""),
        ));
    }

    findings
}

// ---------------------------------------------------------------------------
// Per-kind checks (each takes the lowercased password)
// ---------------------------------------------------------------------------

/// First keyboard-adjacency run found as a substring, if any.
#[must_use]
pub fn find_keyboard_run(lower: &str) -> Option<&'static str> {
    KEYBOARD_RUNS.iter().find(|run| lower.contains(*run)).copied()
}

/// First repeated-character run: fixed literals first, then any single
/// character repeated [`REPEAT_RUN_LEN`] or more times contiguously.
#[must_use]
pub fn find_repeat(lower: &str) -> Option<String> {
    if let Some(lit) = REPEAT_LITERALS.iter().find(|lit| lower.contains(*lit)) {
        return Some((*lit).to_string());
    }

    let chars: Vec<char> = lower.chars().collect();
    let mut run_start = 0;
    for i in 1..=chars.len() {
        if i == chars.len() || chars[i] != chars[run_start] {
            #[allow(clippy::arithmetic_side_effects)]
            let run_len = i - run_start;
            if run_len >= REPEAT_RUN_LEN {
                return Some(chars[run_start..i].iter().collect());
            }
            run_start = i;
        }
    }
    None
}

/// First sequential run found, checking each table entry forward then
/// reversed (descending orientation).
#[must_use]
pub fn find_sequence(lower: &str) -> Option<String> {
    for run in SEQUENCE_RUNS {
        if lower.contains(run) {
            return Some((*run).to_string());
        }
        let reversed: String = run.chars().rev().collect();
        if lower.contains(&reversed) {
            return Some(reversed);
        }
    }
    None
}

/// First four-digit substring shaped like a year (19xx or 20xx).
#[must_use]
pub fn find_year(lower: &str) -> Option<String> {
    let chars: Vec<char> = lower.chars().collect();
    if chars.len() < 4 {
        return None;
    }
    for window in chars.windows(4) {
        if window.iter().all(char::is_ascii_digit)
            && (window[0] == '1' && window[1] == '9' || window[0] == '2' && window[1] == '0')
        {
            return Some(window.iter().collect());
        }
    }
    None
}

/// First common dictionary token found, or the whole string when it is a
/// degenerate all-same-character password.
#[must_use]
pub fn find_dictionary_token(lower: &str) -> Option<String> {
    if let Some(token) = DICTIONARY_TOKENS.iter().find(|t| lower.contains(*t)) {
        return Some((*token).to_string());
    }

    // Degenerate case: every character identical ("aaaaaaaa", "•••").
    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) && lower.chars().count() > 1 {
            return Some(lower.to_string());
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
