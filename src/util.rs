//! Small helpers shared by the generation and validation modules.

use std::collections::{HashMap, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

use fancy_regex::Regex;
use lazy_static::lazy_static;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// Lines that look like usable words: letters only, at least two of them.
    static ref WORD_PATTERN: Regex = Regex::new(r"^\p{Alphabetic}{2,}$").unwrap();
}

/// Normalize an externally supplied word: trim whitespace, apply Unicode NFC
/// so decomposed umlauts compare equal to composed ones, and uppercase.
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    raw.trim().nfc().collect::<String>().to_uppercase()
}

/// Whether a line from a word file or dictionary is a usable word.
#[must_use]
pub fn is_word_line(line: &str) -> bool {
    WORD_PATTERN.is_match(line).unwrap_or(false)
}

/// Count, for each letter, how many of the given words contain it at least
/// once. Each word contributes its distinct-letter set a single time.
#[must_use]
pub fn letter_occurrence_counts(words: &[String]) -> HashMap<char, usize> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for word in words {
        let mut seen: HashSet<char> = HashSet::new();
        for letter in word.chars() {
            if seen.insert(letter) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Milliseconds since the Unix epoch, for informational timestamps.
#[must_use]
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
