//! Randomized placement of words into a letter grid.
//!
//! Each word is laid down as a connected path of king-move-adjacent cells on
//! a flat grid array. A single attempt either fills every cell or fails as
//! soon as any letter runs out of usable cells; the driver then restarts the
//! whole attempt on a fresh grid rather than backtracking within one.

use std::time::Duration;

use instant::Instant;
use rand::Rng;
use smallvec::SmallVec;

use crate::error::GameError;
use crate::types::CellId;
use crate::util::normalize_word;

/// Per-letter ceiling on random cell draws, guarding against pathological
/// probe loops.
const MAX_DRAWS_PER_LETTER: usize = 1000;

/// Default ceiling on whole-attempt restarts before the driver gives up.
/// Exact-fit word sets on small grids converge within a few dozen attempts;
/// the ceiling exists so an unsatisfiable input cannot spin forever.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Validated parameters for a placement run: grid dimensions plus the words
/// whose letters must exactly fill the grid.
#[derive(Debug, Clone)]
pub struct PlacementConfig {
    words: Vec<String>,
    rows: usize,
    columns: usize,
}

impl PlacementConfig {
    /// Validate and normalize the inputs. The grid must be at least 2x2
    /// (a 1-wide grid cannot support 8-directional paths meaningfully) and
    /// the words' letters must number exactly `rows * columns`.
    pub fn new(words: Vec<String>, rows: usize, columns: usize) -> Result<Self, GameError> {
        if rows < 2 || columns < 2 {
            return Err(GameError::InvalidGeneratorParameters(format!(
                "grid must be at least 2x2, got {rows}x{columns}"
            )));
        }

        let words: Vec<String> = words.iter().map(|word| normalize_word(word)).collect();
        let letter_count: usize = words.iter().map(|word| word.chars().count()).sum();
        let cell_count = rows * columns;

        if letter_count == 0 {
            return Err(GameError::InvalidGeneratorParameters(
                "words cannot be empty".into(),
            ));
        }
        if letter_count > cell_count {
            return Err(GameError::InvalidGeneratorParameters(format!(
                "too many letters: {letter_count} for {cell_count} cells"
            )));
        }
        if letter_count < cell_count {
            return Err(GameError::InvalidGeneratorParameters(format!(
                "too few letters: {letter_count} for {cell_count} cells"
            )));
        }

        Ok(PlacementConfig {
            words,
            rows,
            columns,
        })
    }

    /// The words to place, normalized to uppercase.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

/// King-move adjacency: the two cells differ by at most one row and one
/// column and are not the same cell. This is the same adjacency a player
/// traces when drawing a word path on the rendered grid.
#[must_use]
pub fn cells_adjacent(a: CellId, b: CellId, columns: usize) -> bool {
    if a == b {
        return false;
    }
    let (a_row, a_col) = (a / columns, a % columns);
    let (b_row, b_col) = (b / columns, b % columns);
    a_row.abs_diff(b_row) <= 1 && a_col.abs_diff(b_col) <= 1
}

/// Cell ids adjacent to `cell`, bounded by the grid edges. At most 8.
#[must_use]
pub fn adjacent_cells(cell: CellId, rows: usize, columns: usize) -> SmallVec<[CellId; 8]> {
    let row = cell / columns;
    let col = cell % columns;
    let mut neighbors = SmallVec::new();
    for row_offset in -1i64..=1 {
        for col_offset in -1i64..=1 {
            if row_offset == 0 && col_offset == 0 {
                continue;
            }
            let neighbor_row = row as i64 + row_offset;
            let neighbor_col = col as i64 + col_offset;
            if (0..rows as i64).contains(&neighbor_row)
                && (0..columns as i64).contains(&neighbor_col)
            {
                neighbors.push(neighbor_row as usize * columns + neighbor_col as usize);
            }
        }
    }
    neighbors
}

/// A completed placement: the filled grid plus the cell path each word
/// occupies, in word order.
#[derive(Debug, Clone)]
pub struct PlacedGrid {
    cells: Vec<char>,
    paths: Vec<Vec<CellId>>,
    rows: usize,
    columns: usize,
}

impl PlacedGrid {
    /// The grid reshaped into `rows` rows of `columns` uppercase letters.
    #[must_use]
    pub fn letter_rows(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.columns)
            .map(<[char]>::to_vec)
            .collect()
    }

    /// The flat cell array, row-major.
    #[must_use]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Cell ids each word occupies, in letter order; one path per word.
    #[must_use]
    pub fn paths(&self) -> &[Vec<CellId>] {
        &self.paths
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }
}

/// One full placement attempt over a fresh grid. Pure over the config and
/// the RNG: no retry policy lives here.
///
/// The first letter of each word may take any unfilled cell; each later
/// letter needs an unfilled king-move neighbor of the previous cell.
/// Returns `None` as soon as any letter has no usable cell left.
pub fn attempt_placement<R: Rng>(config: &PlacementConfig, rng: &mut R) -> Option<PlacedGrid> {
    let cell_count = config.cell_count();
    let mut cells: Vec<Option<char>> = vec![None; cell_count];
    let mut filled_count = 0;
    let mut paths: Vec<Vec<CellId>> = Vec::with_capacity(config.words.len());

    for word in &config.words {
        let mut path: Vec<CellId> = Vec::with_capacity(word.chars().count());
        let mut previous: Option<CellId> = None;
        for letter in word.chars() {
            let cell = draw_open_cell(&cells, filled_count, previous, config.columns, rng)?;
            cells[cell] = Some(letter);
            filled_count += 1;
            path.push(cell);
            previous = Some(cell);
        }
        paths.push(path);
    }

    debug_assert_eq!(filled_count, cell_count);
    Some(PlacedGrid {
        cells: cells.into_iter().flatten().collect(),
        paths,
        rows: config.rows,
        columns: config.columns,
    })
}

/// Draw a random unfilled cell usable for the next letter: any unfilled cell
/// when `previous` is `None`, otherwise an unfilled neighbor of `previous`.
///
/// Rejected cells are remembered so each unfilled cell is tested at most
/// once; once every unfilled cell has been rejected, or the draw ceiling is
/// hit, the letter placement fails.
fn draw_open_cell<R: Rng>(
    cells: &[Option<char>],
    filled_count: usize,
    previous: Option<CellId>,
    columns: usize,
    rng: &mut R,
) -> Option<CellId> {
    let cell_count = cells.len();
    let unfilled_count = cell_count - filled_count;
    let mut rejected = vec![false; cell_count];
    let mut rejected_count = 0;

    for _ in 0..MAX_DRAWS_PER_LETTER {
        let mut cell = rng.gen_range(0..cell_count);
        while cells[cell].is_some() {
            cell = rng.gen_range(0..cell_count);
        }

        if rejected[cell] {
            continue;
        }

        let usable = match previous {
            None => true,
            Some(previous_cell) => cells_adjacent(cell, previous_cell, columns),
        };
        if usable {
            return Some(cell);
        }

        rejected[cell] = true;
        rejected_count += 1;
        if rejected_count == unfilled_count {
            return None;
        }
    }

    None
}

/// Fill the grid, restarting failed attempts on a fresh grid with the same
/// word order until a complete layout is produced or the budget runs out.
///
/// `max_attempts` defaults to [`DEFAULT_MAX_ATTEMPTS`]; `time_budget`
/// optionally bounds wall-clock time for the whole run. Exhausting either
/// surfaces as [`GameError::GenerationFailed`], never a partial grid.
pub fn fill_grid<R: Rng>(
    config: &PlacementConfig,
    rng: &mut R,
    max_attempts: Option<usize>,
    time_budget: Option<Duration>,
) -> Result<PlacedGrid, GameError> {
    let started = Instant::now();
    let attempt_limit = max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);

    for attempt in 1..=attempt_limit {
        if let Some(budget) = time_budget {
            if started.elapsed() >= budget {
                return Err(GameError::GenerationFailed(format!(
                    "placement timed out after {} attempts",
                    attempt - 1
                )));
            }
        }
        if let Some(placed) = attempt_placement(config, rng) {
            log::debug!("grid filled on attempt {attempt}");
            return Ok(placed);
        }
    }

    Err(GameError::GenerationFailed(format!(
        "placement failed after {attempt_limit} attempts"
    )))
}
