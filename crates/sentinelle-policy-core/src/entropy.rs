//! Charset-composition entropy estimation.
//!
//! The estimate answers "how large is the nominal search space for a
//! password of this composition and length", not "how predictable is this
//! specific string". It is a deliberate simplification, not Shannon
//! entropy of the actual character distribution; dictionary words and
//! keyboard runs are handled separately by [`crate::patterns`].

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Alphabet size credited for lowercase letters.
const LOWERCASE_SPACE: u32 = 26;

/// Alphabet size credited for uppercase letters.
const UPPERCASE_SPACE: u32 = 26;

/// Alphabet size credited for digits.
const DIGIT_SPACE: u32 = 10;

/// Alphabet size credited for ASCII symbols (the 32 punctuation characters).
const SYMBOL_SPACE: u32 = 32;

/// Flat charset bonus applied once when any non-ASCII codepoint is present.
///
/// A crude stand-in for "the attacker must widen the search to a large
/// Unicode repertoire"; one exotic character inflates the nominal space
/// far beyond the four ASCII classes.
const UNICODE_BONUS: u32 = 1000;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate the nominal entropy of `password` in bits.
///
/// Detects which of the four ASCII character classes are present
/// (lowercase 26, uppercase 26, digit 10, symbol 32) and sums their
/// alphabet sizes; any codepoint above `0x7F` adds a flat
/// [`UNICODE_BONUS`] once. The result is `len * log2(charset_size)`.
///
/// Returns `0.0` iff the string is empty or contains no recognized
/// character class. Callers round at presentation boundaries via
/// [`round_bits`]; the raw value is kept at full precision internally.
#[must_use]
pub fn estimate_entropy(password: &str) -> f64 {
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_symbol = false;
    let mut has_unicode = false;
    let mut length: usize = 0;

    for c in password.chars() {
        length = length.saturating_add(1);
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if c.is_ascii_punctuation() {
            has_symbol = true;
        } else if !c.is_ascii() {
            has_unicode = true;
        }
        // ASCII whitespace and control characters credit no class.
    }

    let mut charset: u32 = 0;
    if has_lower {
        charset = charset.saturating_add(LOWERCASE_SPACE);
    }
    if has_upper {
        charset = charset.saturating_add(UPPERCASE_SPACE);
    }
    if has_digit {
        charset = charset.saturating_add(DIGIT_SPACE);
    }
    if has_symbol {
        charset = charset.saturating_add(SYMBOL_SPACE);
    }
    if has_unicode {
        charset = charset.saturating_add(UNICODE_BONUS);
    }

    if charset == 0 || length == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let bits = (length as f64) * f64::from(charset).log2();
    bits
}

/// Round an entropy value to one decimal place for display.
#[must_use]
pub fn round_bits(bits: f64) -> f64 {
    (bits * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
