//! Shared identifier and coordinate types used across the crate.

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Index of a cell in a flat row-major grid array.
pub type CellId = usize;

/// Zero-indexed x and y coords for a cell in the grid, where y = 0 in the top row.
pub type GridCoord = (usize, usize);

/// Target language for puzzle generation. Determines which word pool the
/// source collaborator produces and which supplementary dictionary the
/// finished puzzle references.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    Finnish,
    English,
}

impl Language {
    /// Name of the registered dictionary for this language, if one exists.
    /// Only Finnish ships with a dictionary file; English puzzles carry no
    /// supplementary dictionary.
    #[must_use]
    pub fn dictionary_name(self) -> Option<&'static str> {
        match self {
            Language::Finnish => Some("fi-kotus-2024"),
            Language::English => None,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "finnish" | "fi" => Ok(Language::Finnish),
            "english" | "en" => Ok(Language::English),
            other => Err(format!("unknown language: {other}")),
        }
    }
}
