//! The persisted puzzle record and its structural invariants.
//!
//! A puzzle is created once by assembly, stored keyed by id, and never
//! mutated afterwards. Validation and completion checks read it many times.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

use crate::util::now_millis;

/// Lower bound below which no submission is accepted, regardless of
/// dictionary membership.
pub const DEFAULT_MIN_VALID_WORD_LENGTH: usize = 3;

/// One day's letter grid plus its accepted words and metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Puzzle {
    /// Unique identifier, conventionally an ISO calendar date.
    pub id: String,

    /// Rectangular matrix of single uppercase letters; every cell populated.
    pub grid: Vec<Vec<char>>,

    /// Submissions shorter than this are rejected outright.
    pub min_valid_word_length: usize,

    /// Words whose letters tile the grid as non-overlapping adjacent paths,
    /// in placement order. Their lengths sum to exactly `rows * columns`.
    pub solution_words: Vec<String>,

    /// Accepted-but-optional words not required for completion.
    pub additional_valid_words: HashSet<String>,

    /// Name of the supplementary dictionary, or `None` for no dictionary
    /// (which accepts any submission of sufficient length).
    pub valid_words_dictionary_name: Option<String>,

    /// Creation time in milliseconds since the Unix epoch; informational.
    pub timestamp: u64,
}

impl Puzzle {
    /// Assemble a puzzle record with the standard defaults: minimum word
    /// length 3, no additional valid words, created now.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        grid: Vec<Vec<char>>,
        solution_words: Vec<String>,
        valid_words_dictionary_name: Option<String>,
    ) -> Self {
        Puzzle {
            id: id.into(),
            grid,
            min_valid_word_length: DEFAULT_MIN_VALID_WORD_LENGTH,
            solution_words,
            additional_valid_words: HashSet::new(),
            valid_words_dictionary_name,
            timestamp: now_millis(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Total number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows() * self.columns()
    }

    #[must_use]
    pub fn is_solution_word(&self, word: &str) -> bool {
        self.solution_words.iter().any(|solution| solution == word)
    }

    /// Check the structural invariants of a finished puzzle: a rectangular
    /// grid of uppercase letters, with solution-word letters summing to
    /// exactly the cell count.
    pub fn verify(&self) -> Result<(), String> {
        let columns = self.columns();
        if self.rows() == 0 || columns == 0 {
            return Err("grid has no cells".into());
        }
        for (row_idx, row) in self.grid.iter().enumerate() {
            if row.len() != columns {
                return Err(format!(
                    "row {row_idx} has {} cells, expected {columns}",
                    row.len()
                ));
            }
            for &letter in row {
                if !letter.is_alphabetic() || !letter.is_uppercase() {
                    return Err(format!("cell holds {letter:?}, not an uppercase letter"));
                }
            }
        }
        let letter_total: usize = self
            .solution_words
            .iter()
            .map(|word| word.chars().count())
            .sum();
        if letter_total != self.cell_count() {
            return Err(format!(
                "solution words hold {letter_total} letters for {} cells",
                self.cell_count()
            ));
        }
        Ok(())
    }
}
