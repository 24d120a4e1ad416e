//! Named word dictionaries: registry, file loading, and caching.
//!
//! Dictionaries are word-per-line text files registered under the names
//! that puzzles store in `valid_words_dictionary_name`. Loading is
//! permissive about file problems: a registered dictionary whose file
//! cannot be read logs a warning and yields an empty set, so validation
//! degrades to solution-and-additional words instead of erroring.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use lazy_static::lazy_static;

use crate::cache::TtlCache;
use crate::util::{is_word_line, normalize_word};

lazy_static! {
    /// Registered dictionary files, keyed by the name stored on puzzles,
    /// as paths relative to the service's base directory.
    static ref DICTIONARY_PATHS: HashMap<&'static str, &'static str> = {
        let mut paths = HashMap::new();
        paths.insert("fi-kotus-2024", "data/fi-dictionary-kotus-2024.txt");
        paths
    };
}

/// Dictionaries change rarely; reload daily.
const DICTIONARY_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Loads and caches named dictionaries. Constructed once per process and
/// injected into whatever needs dictionary lookups.
pub struct DictionaryService {
    base_dir: PathBuf,
    cache: TtlCache<String, Arc<HashSet<String>>>,
}

impl DictionaryService {
    /// Service resolving registered paths against `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        DictionaryService {
            base_dir: base_dir.into(),
            cache: TtlCache::new(DICTIONARY_TTL),
        }
    }

    /// Resolve a puzzle's dictionary reference. `None` or an unregistered
    /// name yields `None`, meaning no supplementary dictionary: a
    /// configuration signal, not an error. A registered name always yields
    /// a set, which is empty when the file cannot be read.
    pub fn load(&mut self, name: Option<&str>) -> Option<Arc<HashSet<String>>> {
        let name = name?;
        let relative_path = DICTIONARY_PATHS.get(name)?;

        if let Some(cached) = self.cache.get(name) {
            return Some(cached);
        }

        let path = self.base_dir.join(relative_path);
        let dictionary = match fs::read_to_string(&path) {
            Ok(contents) => {
                let words = Arc::new(parse_dictionary(&contents));
                log::info!(
                    "loaded dictionary {name} from {} with {} words",
                    path.display(),
                    words.len()
                );
                words
            }
            Err(err) => {
                log::warn!("failed to load dictionary {name} from {}: {err}", path.display());
                Arc::new(HashSet::new())
            }
        };

        self.cache.insert(name.to_string(), Arc::clone(&dictionary));
        Some(dictionary)
    }
}

/// Parse a word-per-line dictionary file: normalize each line and keep
/// plain words of at least two letters. Junk lines are skipped silently.
fn parse_dictionary(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(normalize_word)
        .filter(|word| is_word_line(word))
        .collect()
}
