//! Password and passphrase generation.
//!
//! Provides two generation modes:
//! - [`generate_random_password`] — character-based with configurable charsets
//! - [`generate_passphrase`] — word-based using the built-in wordlist
//!
//! Both use `OsRng` (OS-level CSPRNG) for all randomness. The nominal
//! entropy formulas for both modes live here too, so callers can report
//! "this generated password is worth N bits" without re-deriving the
//! pool size.

pub mod wordlist;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::PolicyError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum allowed password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum allowed password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Default password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 20;

/// Minimum allowed passphrase word count.
pub const MIN_WORD_COUNT: usize = 3;

/// Maximum allowed passphrase word count.
pub const MAX_WORD_COUNT: usize = 10;

/// Default passphrase word count.
pub const DEFAULT_WORD_COUNT: usize = 5;

// Character sets. SYMBOLS is the full 32-character ASCII punctuation set,
// matching the symbol alphabet credited by the entropy estimator.
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Configuration for which character sets to include in a random password.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharsetConfig {
    /// Include uppercase letters (A-Z).
    pub uppercase: bool,
    /// Include lowercase letters (a-z).
    pub lowercase: bool,
    /// Include digits (0-9).
    pub digits: bool,
    /// Include symbols (ASCII punctuation).
    pub symbols: bool,
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharsetConfig {
    /// Total pool size across the enabled charsets.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn pool_size(&self) -> usize {
        let mut size = 0;
        if self.uppercase {
            size += UPPERCASE.len();
        }
        if self.lowercase {
            size += LOWERCASE.len();
        }
        if self.digits {
            size += DIGITS.len();
        }
        if self.symbols {
            size += SYMBOLS.len();
        }
        size
    }

    /// Number of enabled charsets.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_lossless)]
    pub const fn enabled_count(&self) -> usize {
        self.uppercase as usize
            + self.lowercase as usize
            + self.digits as usize
            + self.symbols as usize
    }
}

/// Separator between words in a passphrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassphraseSeparator {
    /// Hyphen: `word-word-word`
    Hyphen,
    /// Space: `word word word`
    Space,
    /// Dot: `word.word.word`
    Dot,
    /// Underscore: `word_word_word`
    Underscore,
    /// No separator: `wordwordword`
    None,
}

impl PassphraseSeparator {
    /// Returns the string representation of this separator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hyphen => "-",
            Self::Space => " ",
            Self::Dot => ".",
            Self::Underscore => "_",
            Self::None => "",
        }
    }
}

// ---------------------------------------------------------------------------
// Entropy formulas
// ---------------------------------------------------------------------------

/// Nominal entropy in bits of a random password of `length` characters
/// drawn from the enabled charsets. Zero when no charset is enabled.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn password_entropy_bits(length: usize, charsets: &CharsetConfig) -> f64 {
    let pool = charsets.pool_size();
    if pool == 0 || length == 0 {
        return 0.0;
    }
    (length as f64) * (pool as f64).log2()
}

/// Nominal entropy in bits of a passphrase of `word_count` words drawn
/// uniformly from the built-in wordlist (8.0 bits per word).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn passphrase_entropy_bits(word_count: usize) -> f64 {
    (word_count as f64) * (wordlist::WORDLIST_SIZE as f64).log2()
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a random password of the given `length` using the specified charsets.
///
/// At least one character from each enabled charset is guaranteed.
/// The remaining positions are filled randomly, then the whole password is
/// Fisher-Yates shuffled to avoid positional bias.
///
/// # Errors
///
/// Returns [`PolicyError::Generation`] if:
/// - `length` is outside [`MIN_PASSWORD_LENGTH`]..=[`MAX_PASSWORD_LENGTH`]
/// - No charset is enabled
/// - `length` is less than the number of enabled charsets (can't guarantee one from each)
///
/// # Panics
///
/// Panics if the generated password bytes are not valid UTF-8 (should never happen
/// since all character sets are ASCII).
pub fn generate_random_password(
    length: usize,
    charsets: &CharsetConfig,
) -> Result<String, PolicyError> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(PolicyError::Generation(format!(
            "length must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH}, got {length}"
        )));
    }

    // Build the character pool and collect mandatory characters.
    let mut pool: Vec<u8> = Vec::new();
    let mut mandatory: Vec<u8> = Vec::new();
    let mut rng = rand::rngs::OsRng;

    if charsets.uppercase {
        pool.extend_from_slice(UPPERCASE);
        mandatory.push(UPPERCASE[rng.gen_range(0..UPPERCASE.len())]);
    }
    if charsets.lowercase {
        pool.extend_from_slice(LOWERCASE);
        mandatory.push(LOWERCASE[rng.gen_range(0..LOWERCASE.len())]);
    }
    if charsets.digits {
        pool.extend_from_slice(DIGITS);
        mandatory.push(DIGITS[rng.gen_range(0..DIGITS.len())]);
    }
    if charsets.symbols {
        pool.extend_from_slice(SYMBOLS);
        mandatory.push(SYMBOLS[rng.gen_range(0..SYMBOLS.len())]);
    }

    if pool.is_empty() {
        return Err(PolicyError::Generation(
            "at least one charset must be enabled".to_string(),
        ));
    }

    if length < mandatory.len() {
        return Err(PolicyError::Generation(format!(
            "length ({length}) must be at least {} to include one character from each enabled charset",
            mandatory.len()
        )));
    }

    // Fill the password: mandatory chars first, then random from the full pool.
    let mut chars: Vec<u8> = mandatory;
    for _ in chars.len()..length {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }

    // Fisher-Yates shuffle to eliminate positional bias.
    chars.shuffle(&mut rng);

    // Safety: all chars are ASCII.
    Ok(String::from_utf8(chars).expect("password chars are ASCII"))
}

/// Generate a passphrase from the built-in wordlist.
///
/// # Arguments
///
/// * `word_count` — Number of words ([`MIN_WORD_COUNT`]..=[`MAX_WORD_COUNT`]).
/// * `separator` — Separator between words.
/// * `capitalize` — Capitalize the first letter of each word.
/// * `append_digit` — Append a random digit (0-9) to the end.
///
/// # Errors
///
/// Returns [`PolicyError::Generation`] if `word_count` is outside the allowed range.
pub fn generate_passphrase(
    word_count: usize,
    separator: PassphraseSeparator,
    capitalize: bool,
    append_digit: bool,
) -> Result<String, PolicyError> {
    if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&word_count) {
        return Err(PolicyError::Generation(format!(
            "word count must be between {MIN_WORD_COUNT} and {MAX_WORD_COUNT}, got {word_count}"
        )));
    }

    let words_source = wordlist::builtin();
    let mut rng = rand::rngs::OsRng;

    let words: Vec<String> = (0..word_count)
        .map(|_| {
            let word = words_source[rng.gen_range(0..words_source.len())];
            if capitalize {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |c| {
                    c.to_uppercase().collect::<String>() + chars.as_str()
                })
            } else {
                word.to_string()
            }
        })
        .collect();

    let mut result = words.join(separator.as_str());

    if append_digit {
        let digit = DIGITS[rng.gen_range(0..DIGITS.len())];
        result.push(char::from(digit));
    }

    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
