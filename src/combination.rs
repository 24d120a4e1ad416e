//! Exact-fit word combination search and difficulty scoring.
//!
//! Given a pool of candidate words and a target letter count, enumerate
//! every subset whose letters exactly fill the target, score each subset by
//! estimated difficulty, and pick one of the hardest few at random.

use float_ord::FloatOrd;
use rand::Rng;
use std::cmp::Reverse;

use crate::error::GameError;
use crate::util::letter_occurrence_counts;

const LENGTH_WEIGHT: f64 = 0.6;
const SHARED_LETTER_WEIGHT: f64 = 0.4;

/// How many of the highest-scoring combinations the final random pick
/// considers. Keeps variety between days without sacrificing challenge.
const TOP_POOL: usize = 3;

/// A candidate subset of words with its total letter count and difficulty
/// score. Exists only during selection; never persisted.
#[derive(Debug, Clone)]
pub struct WordCombination {
    pub words: Vec<String>,
    pub total_length: usize,
    pub difficulty_score: f64,
}

/// Difficulty estimate for one combination. Longer words score higher
/// (superlinearly, via `len^1.5`), and letters appearing in two or more
/// distinct words add a shared-letter bonus, since crossing candidate paths
/// make the grid harder to untangle.
#[must_use]
pub fn difficulty_score(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let length_score = words
        .iter()
        .map(|word| (word.chars().count() as f64).powf(1.5))
        .sum::<f64>()
        / words.len() as f64;

    let shared_letter_score = letter_occurrence_counts(words)
        .values()
        .filter(|&&count| count > 1)
        .map(|&count| count as f64 * 1.5)
        .sum::<f64>();

    length_score * LENGTH_WEIGHT + shared_letter_score * SHARED_LETTER_WEIGHT
}

/// Enumerate all subsets of `candidates` whose total letter count equals
/// `target_length`. Subsets preserve the candidate order; the search
/// branches on include-then-exclude for each word, so the result order is
/// deterministic for a given input.
#[must_use]
pub fn find_combinations(candidates: &[String], target_length: usize) -> Vec<WordCombination> {
    let mut found = Vec::new();
    let mut current = Vec::new();
    collect_combinations(candidates, target_length, &mut current, 0, &mut found);
    found
}

fn collect_combinations(
    remaining: &[String],
    target_length: usize,
    current: &mut Vec<String>,
    current_length: usize,
    found: &mut Vec<WordCombination>,
) {
    if current_length == target_length {
        found.push(WordCombination {
            words: current.clone(),
            total_length: current_length,
            difficulty_score: difficulty_score(current),
        });
        return;
    }

    let Some((word, rest)) = remaining.split_first() else {
        return;
    };

    let word_length = word.chars().count();
    if current_length + word_length <= target_length {
        current.push(word.clone());
        collect_combinations(rest, target_length, current, current_length + word_length, found);
        current.pop();
    }

    collect_combinations(rest, target_length, current, current_length, found);
}

/// Pick the words for one puzzle: drop candidates that cannot fit at all,
/// collect every exact-fit combination, and choose uniformly at random
/// among the top few by difficulty.
///
/// Fails with [`GameError::NoValidCombination`] when no subset sums to the
/// target; retrying with the same pool cannot succeed.
pub fn select_combination<R: Rng>(
    candidates: &[String],
    target_length: usize,
    rng: &mut R,
) -> Result<Vec<String>, GameError> {
    let usable: Vec<String> = candidates
        .iter()
        .filter(|word| word.chars().count() <= target_length)
        .cloned()
        .collect();

    let mut combinations = find_combinations(&usable, target_length);
    if combinations.is_empty() {
        return Err(GameError::NoValidCombination { target_length });
    }

    // Stable sort: equal scores keep enumeration order.
    combinations.sort_by_key(|combination| Reverse(FloatOrd(combination.difficulty_score)));

    let pool = &combinations[..TOP_POOL.min(combinations.len())];
    let chosen = &pool[rng.gen_range(0..pool.len())];
    log::debug!(
        "selected combination of {} words (score {:.2}) from {} candidates",
        chosen.words.len(),
        chosen.difficulty_score,
        combinations.len()
    );
    Ok(chosen.words.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_unique_exact_fit_is_found() {
        let mut rng = SmallRng::seed_from_u64(7);
        let selected = select_combination(&words(&["AB", "CD"]), 4, &mut rng).unwrap();
        assert_eq!(selected, words(&["AB", "CD"]));
    }

    #[test]
    fn test_no_combination_is_an_error() {
        let mut rng = SmallRng::seed_from_u64(7);
        let result = select_combination(&words(&["ABC"]), 4, &mut rng);
        assert!(matches!(
            result,
            Err(GameError::NoValidCombination { target_length: 4 })
        ));
    }

    #[test]
    fn test_too_long_candidates_are_dropped() {
        let mut rng = SmallRng::seed_from_u64(7);
        let selected =
            select_combination(&words(&["TOOLONGWORD", "AB", "CD"]), 4, &mut rng).unwrap();
        assert_eq!(selected, words(&["AB", "CD"]));
    }

    #[test]
    fn test_all_exact_subsets_are_enumerated() {
        // The exact fits for 4 are the three two-word pairs.
        let combinations = find_combinations(&words(&["AB", "CD", "EF"]), 4);
        let mut sets: Vec<Vec<String>> = combinations.iter().map(|c| c.words.clone()).collect();
        sets.sort();
        assert_eq!(
            sets,
            vec![
                words(&["AB", "CD"]),
                words(&["AB", "EF"]),
                words(&["CD", "EF"]),
            ]
        );
        for combination in &combinations {
            assert_eq!(combination.total_length, 4);
        }
    }

    #[test]
    fn test_difficulty_score_formula() {
        // ABC and CAD: mean(3^1.5) = 5.196152..., shared letters A and C
        // each appear in both words: (2 * 1.5) * 2 = 6.0.
        let score = difficulty_score(&words(&["ABC", "CAD"]));
        let expected = 0.6 * 3f64.powf(1.5) + 0.4 * 6.0;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_selection_comes_from_top_scoring_pool() {
        // Candidate pool with many exact fits for 6; whatever the seed, the
        // chosen combination must be one of the three hardest.
        let pool = words(&["ABC", "DEF", "GHI", "ABCDEF", "AB", "CD", "EF"]);
        let mut combinations = find_combinations(&pool, 6);
        combinations.sort_by_key(|c| Reverse(FloatOrd(c.difficulty_score)));
        let top: Vec<Vec<String>> = combinations.iter().take(3).map(|c| c.words.clone()).collect();

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let selected = select_combination(&pool, 6, &mut rng).unwrap();
            assert!(top.contains(&selected), "{selected:?} not in top pool");
        }
    }

    #[test]
    fn test_empty_word_list_has_zero_score() {
        assert_eq!(difficulty_score(&[]), 0.0);
    }
}
