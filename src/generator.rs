//! Puzzle assembly: word source, combination selection, grid placement.
//!
//! The word source is a collaborator seam. In production it is backed by an
//! external language-model service that invents a theme and returns related
//! words; this crate ships a pooled source reading a word-per-line file (or
//! embedded contents) for offline generation and the CLI.

use std::fs;
use std::path::PathBuf;

use rand::Rng;

use crate::combination::select_combination;
use crate::error::GameError;
use crate::placement::{fill_grid, PlacementConfig};
use crate::puzzle::Puzzle;
use crate::types::Language;
use crate::util::{is_word_line, normalize_word};

/// Default grid dimensions for the daily puzzle.
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 5;

/// Collaborator that supplies candidate words for one puzzle's theme.
///
/// A failure is terminal for the current generation attempt; the caller may
/// retry on the next cycle.
pub trait WordSource {
    fn theme_words(&self, language: Language) -> Result<Vec<String>, GameError>;
}

/// Where a pooled word source reads its candidate words from.
#[derive(Debug, Clone)]
pub enum WordPoolConfig {
    File { path: PathBuf },
    Contents { contents: String },
}

/// Word source backed by a fixed word-per-line pool instead of an external
/// service. Lines are normalized; lines that are not plain words (too
/// short, digits, punctuation) are skipped, and duplicates collapse.
pub struct PoolWordSource {
    config: WordPoolConfig,
}

impl PoolWordSource {
    #[must_use]
    pub fn new(config: WordPoolConfig) -> Self {
        PoolWordSource { config }
    }

    fn raw_contents(&self) -> Result<String, GameError> {
        match &self.config {
            WordPoolConfig::File { path } => fs::read_to_string(path).map_err(|err| {
                GameError::GenerationFailed(format!(
                    "failed to read word pool {}: {err}",
                    path.display()
                ))
            }),
            WordPoolConfig::Contents { contents } => Ok(contents.clone()),
        }
    }
}

impl WordSource for PoolWordSource {
    fn theme_words(&self, _language: Language) -> Result<Vec<String>, GameError> {
        let contents = self.raw_contents()?;
        Ok(sanitize_pool(contents.lines()))
    }
}

/// Normalize raw candidate words, drop non-words, and collapse duplicates
/// while preserving first-seen order.
fn sanitize_pool<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    raw.into_iter()
        .map(normalize_word)
        .filter(|word| is_word_line(word))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Assembles a complete puzzle from a word source: obtain candidates, pick
/// an exact-fit combination, place it, and build the persistable record.
pub struct GameGenerator<S> {
    source: S,
    rows: usize,
    columns: usize,
}

impl<S: WordSource> GameGenerator<S> {
    /// Generator for the default 6x5 daily grid.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_dimensions(source, DEFAULT_ROWS, DEFAULT_COLUMNS)
    }

    /// Generator for caller-chosen dimensions. Dimension validity is
    /// enforced when placement is configured, so a bad pair fails the
    /// `generate` call rather than construction.
    #[must_use]
    pub fn with_dimensions(source: S, rows: usize, columns: usize) -> Self {
        GameGenerator {
            source,
            rows,
            columns,
        }
    }

    /// Produce the finished puzzle for `id`.
    ///
    /// Fails with [`GameError::GenerationFailed`] when the source yields no
    /// usable words, and propagates [`GameError::NoValidCombination`] when
    /// no subset of the pool fills the grid. Persistence is the caller's
    /// concern; no partial puzzle is ever observable.
    pub fn generate<R: Rng>(
        &self,
        id: &str,
        language: Language,
        rng: &mut R,
    ) -> Result<Puzzle, GameError> {
        let pool = self.source.theme_words(language)?;
        let candidates = sanitize_pool(pool.iter().map(String::as_str));

        if candidates.is_empty() {
            return Err(GameError::GenerationFailed(
                "word source produced no usable candidate words".into(),
            ));
        }
        log::info!("{id}: {} candidate words from source", candidates.len());

        let target_length = self.rows * self.columns;
        let selected = select_combination(&candidates, target_length, rng)?;
        log::info!(
            "{id}: picked {} words totalling {target_length} letters: {}",
            selected.len(),
            selected.join(", ")
        );

        let config = PlacementConfig::new(selected, self.rows, self.columns)?;
        let placed = fill_grid(&config, rng, None, None)?;

        let puzzle = Puzzle::new(
            id,
            placed.letter_rows(),
            config.words().to_vec(),
            language.dictionary_name().map(str::to_string),
        );
        debug_assert_eq!(puzzle.verify(), Ok(()));
        Ok(puzzle)
    }
}
