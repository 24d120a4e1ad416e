//! Validation of player-submitted words against a puzzle.
//!
//! An invalid word is an ordinary outcome, never an error. Event forwarding
//! for accepted or rejected submissions is the caller's concern; the
//! classification carried by [`ValidationOutcome`] gives it what it needs.

use std::collections::HashSet;

use crate::puzzle::Puzzle;
use crate::util::normalize_word;

/// How a submission was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// One of the puzzle's solution words.
    Solution,
    /// In the puzzle's additional accepted set.
    Additional,
    /// Backed by the supplementary dictionary. Also the classification when
    /// the puzzle has no dictionary configured: missing dictionaries are
    /// permissive, accepting any word that meets the length gate.
    Dictionary,
    /// Below the puzzle's minimum word length.
    TooShort,
    /// Not found in any accepted set.
    NotAWord,
}

impl ValidationOutcome {
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(
            self,
            ValidationOutcome::Solution | ValidationOutcome::Additional | ValidationOutcome::Dictionary
        )
    }
}

/// Classify a submitted word. `dictionary` is the loaded word set named by
/// the puzzle's `valid_words_dictionary_name`; pass `None` when the puzzle
/// configures no dictionary.
#[must_use]
pub fn validate_word(
    puzzle: &Puzzle,
    submission: &str,
    dictionary: Option<&HashSet<String>>,
) -> ValidationOutcome {
    let word = normalize_word(submission);

    if word.chars().count() < puzzle.min_valid_word_length {
        log::debug!("{}: rejected {word:?}: too short", puzzle.id);
        return ValidationOutcome::TooShort;
    }
    if puzzle.is_solution_word(&word) {
        return ValidationOutcome::Solution;
    }
    if puzzle.additional_valid_words.contains(&word) {
        return ValidationOutcome::Additional;
    }
    match dictionary {
        Some(words) if words.contains(&word) => ValidationOutcome::Dictionary,
        Some(_) => {
            log::debug!("{}: rejected {word:?}: not a valid word", puzzle.id);
            ValidationOutcome::NotAWord
        }
        None => ValidationOutcome::Dictionary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> Puzzle {
        let mut puzzle = Puzzle::new(
            "2024-11-30",
            vec![
                vec!['K', 'I', 'S', 'S', 'A'],
                vec!['T', 'I', 'E', 'S', 'U'],
            ],
            vec!["KISSA".to_string(), "SU".to_string(), "TIE".to_string()],
            Some("fi-kotus-2024".to_string()),
        );
        puzzle.additional_valid_words.insert("SIKA".to_string());
        puzzle
    }

    fn dictionary(raw: &[&str]) -> HashSet<String> {
        raw.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_solution_word_is_accepted() {
        let outcome = validate_word(&puzzle(), "kissa", Some(&dictionary(&[])));
        assert_eq!(outcome, ValidationOutcome::Solution);
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_length_gate_beats_solution_membership() {
        // A 2-letter solution word is still rejected under the default
        // 3-letter minimum.
        let outcome = validate_word(&puzzle(), "SU", Some(&dictionary(&[])));
        assert_eq!(outcome, ValidationOutcome::TooShort);
        assert!(!outcome.is_valid());
    }

    #[test]
    fn test_additional_word_is_accepted() {
        let outcome = validate_word(&puzzle(), "sika", Some(&dictionary(&[])));
        assert_eq!(outcome, ValidationOutcome::Additional);
    }

    #[test]
    fn test_dictionary_word_is_accepted() {
        let outcome = validate_word(&puzzle(), "aski", Some(&dictionary(&["ASKI"])));
        assert_eq!(outcome, ValidationOutcome::Dictionary);
    }

    #[test]
    fn test_unknown_word_is_rejected_with_dictionary_present() {
        let outcome = validate_word(&puzzle(), "zzzz", Some(&dictionary(&["ASKI"])));
        assert_eq!(outcome, ValidationOutcome::NotAWord);
    }

    #[test]
    fn test_missing_dictionary_accepts_any_long_enough_word() {
        let outcome = validate_word(&puzzle(), "zzzz", None);
        assert_eq!(outcome, ValidationOutcome::Dictionary);
        assert_eq!(validate_word(&puzzle(), "zz", None), ValidationOutcome::TooShort);
    }

    #[test]
    fn test_submissions_are_normalized() {
        let outcome = validate_word(&puzzle(), "  Kissa \n", Some(&dictionary(&[])));
        assert_eq!(outcome, ValidationOutcome::Solution);
    }
}
