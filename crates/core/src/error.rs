//! Error types surfaced by the core crate.

use thiserror::Error;

use crate::models::Difficulty;

/// A board could not be dealt for the requested difficulty.
///
/// Both variants describe a preset that can never be played, so callers are
/// expected to abort rather than recover.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    /// The grid has an odd number of cells, so cards cannot be paired.
    #[error("{difficulty} grid has {cells} cells; pairs need an even count")]
    OddGrid {
        /// Offending difficulty.
        difficulty: Difficulty,
        /// Number of cells in its grid.
        cells: usize,
    },
    /// The grid needs more distinct logos than exist.
    #[error("{difficulty} needs {needed} distinct logos but only {available} exist")]
    NotEnoughLogos {
        /// Offending difficulty.
        difficulty: Difficulty,
        /// Pairs required by the grid.
        needed: usize,
        /// Logos available to deal.
        available: usize,
    },
}

/// Configuration could not be loaded or failed validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The layered sources could not be merged or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    /// A value was read but is unusable.
    #[error("invalid configuration value `{field}`: {reason}")]
    Invalid {
        /// Dotted key of the field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
