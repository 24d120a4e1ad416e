//! Win-condition checking over a set of found words.

use std::collections::HashSet;

use crate::puzzle::Puzzle;
use crate::util::normalize_word;

/// How strictly completion is judged. Passed explicitly per check, never
/// read from ambient configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// The found words must equal the solution set exactly, with no extras.
    ExactSet,
    /// Every found word must be individually acceptable and the found
    /// words' letters must exactly cover the grid. Generalizes to puzzles
    /// solved with additional valid words in place of solution words, and
    /// guards against unrelated submissions padding out the count.
    LetterCount,
}

/// Decide whether `found_words` completes the puzzle under `policy`.
/// Duplicate finds collapse to one logical find.
///
/// Under [`CompletionPolicy::LetterCount`], a found word is acceptable if it
/// is a solution word, an additional valid word, or a member of the
/// supplied dictionary set. With no dictionary supplied, only the puzzle's
/// own word sets count. Unlike per-word validation, a missing dictionary is
/// strict here, otherwise any letters of the right total length would
/// finish the game.
#[must_use]
pub fn check_completion(
    puzzle: &Puzzle,
    found_words: &[String],
    dictionary: Option<&HashSet<String>>,
    policy: CompletionPolicy,
) -> bool {
    let found: HashSet<String> = found_words.iter().map(|word| normalize_word(word)).collect();

    let complete = match policy {
        CompletionPolicy::ExactSet => {
            found.len() == puzzle.solution_words.len()
                && puzzle
                    .solution_words
                    .iter()
                    .all(|solution| found.contains(solution))
        }
        CompletionPolicy::LetterCount => {
            let all_acceptable = found.iter().all(|word| {
                puzzle.is_solution_word(word)
                    || puzzle.additional_valid_words.contains(word)
                    || dictionary.is_some_and(|words| words.contains(word))
            });
            let letter_total: usize = found.iter().map(|word| word.chars().count()).sum();
            all_acceptable && letter_total == puzzle.cell_count()
        }
    };

    if complete {
        log::info!("{}: completed with {} words", puzzle.id, found.len());
    }
    complete
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> Puzzle {
        let mut puzzle = Puzzle::new(
            "2024-11-30",
            vec![vec!['A', 'B'], vec!['D', 'C']],
            vec!["AB".to_string(), "CD".to_string()],
            None,
        );
        puzzle.additional_valid_words.insert("EF".to_string());
        puzzle
    }

    fn found(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_complete_under_both_policies() {
        let puzzle = puzzle();
        let words = found(&["AB", "CD"]);
        assert!(check_completion(&puzzle, &words, None, CompletionPolicy::ExactSet));
        assert!(check_completion(&puzzle, &words, None, CompletionPolicy::LetterCount));
    }

    #[test]
    fn test_partial_find_is_incomplete() {
        let puzzle = puzzle();
        let words = found(&["AB"]);
        assert!(!check_completion(&puzzle, &words, None, CompletionPolicy::ExactSet));
        assert!(!check_completion(&puzzle, &words, None, CompletionPolicy::LetterCount));
    }

    #[test]
    fn test_extra_word_overflows_letter_count() {
        // Both solution words plus an accepted extra: 6 letters on a 4-cell
        // grid is not a completion.
        let puzzle = puzzle();
        let words = found(&["AB", "CD", "EF"]);
        assert!(!check_completion(&puzzle, &words, None, CompletionPolicy::LetterCount));
        assert!(!check_completion(&puzzle, &words, None, CompletionPolicy::ExactSet));
    }

    #[test]
    fn test_additional_word_may_substitute_under_letter_count_only() {
        let puzzle = puzzle();
        let words = found(&["AB", "EF"]);
        assert!(check_completion(&puzzle, &words, None, CompletionPolicy::LetterCount));
        assert!(!check_completion(&puzzle, &words, None, CompletionPolicy::ExactSet));
    }

    #[test]
    fn test_dictionary_backs_letter_count_substitutions() {
        let puzzle = puzzle();
        let dictionary: HashSet<String> = HashSet::from(["XY".to_string()]);
        let words = found(&["AB", "XY"]);
        assert!(check_completion(
            &puzzle,
            &words,
            Some(&dictionary),
            CompletionPolicy::LetterCount
        ));
        // Without the dictionary the same substitution is rejected.
        assert!(!check_completion(&puzzle, &words, None, CompletionPolicy::LetterCount));
    }

    #[test]
    fn test_duplicates_collapse() {
        let puzzle = puzzle();
        let words = found(&["AB", "ab", "CD"]);
        assert!(check_completion(&puzzle, &words, None, CompletionPolicy::ExactSet));
        assert!(check_completion(&puzzle, &words, None, CompletionPolicy::LetterCount));
    }

    #[test]
    fn test_found_words_are_normalized() {
        let puzzle = puzzle();
        let words = found(&[" ab ", "cd"]);
        assert!(check_completion(&puzzle, &words, None, CompletionPolicy::ExactSet));
    }
}
