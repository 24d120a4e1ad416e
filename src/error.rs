//! Error taxonomy for puzzle generation and storage.
//!
//! Placement-attempt failures inside the packer are not represented here:
//! they are recovered internally by restarting the attempt and never reach
//! callers. Likewise, a missing puzzle is an `Option::None` on lookup and an
//! invalid submitted word is an ordinary outcome, not an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// Construction-time packer misconfiguration: bad grid dimensions or a
    /// word set whose letters do not match the grid's cell count. Not
    /// retryable without changing the inputs.
    #[error("invalid generator parameters: {0}")]
    InvalidGeneratorParameters(String),

    /// No subset of the candidate pool fills the grid exactly. Retrying with
    /// the same pool cannot succeed; the caller should request a new pool.
    #[error("no word combination fills a grid of {target_length} cells")]
    NoValidCombination { target_length: usize },

    /// Upstream word-source failure or placement retry exhaustion. Retryable
    /// by the caller on the next generation cycle.
    #[error("puzzle generation failed: {0}")]
    GenerationFailed(String),

    /// A puzzle with this id is already stored.
    #[error("puzzle {0:?} already exists")]
    AlreadyExists(String),
}
