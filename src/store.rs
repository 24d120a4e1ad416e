//! Puzzle storage collaborators and the game service over them.
//!
//! The store itself is a collaborator seam (the production deployment keeps
//! puzzles in an external key-value database with a date-sorted index); the
//! in-memory implementation backs tests and single-process use. The game
//! service layers creation-with-duplicate-protection and a read-through TTL
//! cache on top of whichever store it is given.

use std::collections::BTreeMap;
use std::time::Duration;

use rand::Rng;

use crate::cache::TtlCache;
use crate::error::GameError;
use crate::generator::{GameGenerator, WordSource};
use crate::puzzle::Puzzle;
use crate::types::Language;

/// Puzzles change daily; cached reads live for a day.
const GAME_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Storage collaborator holding persisted puzzles keyed by id, with a
/// date-ordered index for browsing.
pub trait GameStore {
    fn exists(&self, id: &str) -> bool;
    fn get(&self, id: &str) -> Option<Puzzle>;
    /// Store a puzzle. Duplicate protection is the service's concern;
    /// implementations may overwrite.
    fn put(&mut self, puzzle: Puzzle);
    /// All stored ids in ascending date order.
    fn ids_by_date(&self) -> Vec<String>;
}

/// In-memory reference implementation of [`GameStore`]. Ids are ISO dates,
/// so lexicographic key order is date order.
#[derive(Default)]
pub struct InMemoryStore {
    games: BTreeMap<String, Puzzle>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        InMemoryStore::default()
    }
}

impl GameStore for InMemoryStore {
    fn exists(&self, id: &str) -> bool {
        self.games.contains_key(id)
    }

    fn get(&self, id: &str) -> Option<Puzzle> {
        self.games.get(id).cloned()
    }

    fn put(&mut self, puzzle: Puzzle) {
        self.games.insert(puzzle.id.clone(), puzzle);
    }

    fn ids_by_date(&self) -> Vec<String> {
        self.games.keys().cloned().collect()
    }
}

/// Game operations over a store: creation with duplicate protection,
/// cached reads, and latest-puzzle lookup.
pub struct GameService<S> {
    store: S,
    cache: TtlCache<String, Puzzle>,
}

impl<S: GameStore> GameService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        GameService {
            store,
            cache: TtlCache::new(GAME_CACHE_TTL),
        }
    }

    /// Generate and persist the puzzle for `id`.
    ///
    /// Fails with [`GameError::AlreadyExists`] when the id is taken. The
    /// check-then-create race between concurrent triggers is accepted at
    /// the daily generation cadence; the existing puzzle is never
    /// overwritten by this path.
    pub fn create_game<W: WordSource, R: Rng>(
        &mut self,
        generator: &GameGenerator<W>,
        id: &str,
        language: Language,
        rng: &mut R,
    ) -> Result<Puzzle, GameError> {
        if self.store.exists(id) {
            return Err(GameError::AlreadyExists(id.to_string()));
        }

        let puzzle = generator.generate(id, language, rng)?;
        self.store.put(puzzle.clone());
        self.cache.insert(id.to_string(), puzzle.clone());
        log::info!("created game {id}");
        Ok(puzzle)
    }

    /// Fetch a puzzle, filling the read-through cache on store hits.
    /// A missing puzzle is `None`, distinct from any validation outcome.
    pub fn get_game(&mut self, id: &str) -> Option<Puzzle> {
        if let Some(cached) = self.cache.get(id) {
            return Some(cached);
        }
        let puzzle = self.store.get(id)?;
        self.cache.insert(id.to_string(), puzzle.clone());
        Some(puzzle)
    }

    /// Id of the most recent puzzle in date order, if any exist.
    #[must_use]
    pub fn latest_game_id(&self) -> Option<String> {
        self.store.ids_by_date().pop()
    }

    /// All stored ids in ascending date order.
    #[must_use]
    pub fn ids_by_date(&self) -> Vec<String> {
        self.store.ids_by_date()
    }
}
