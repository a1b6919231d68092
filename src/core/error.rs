//! Error types.
//!
//! Only configuration problems surface as errors: they are fatal to starting
//! a round and must be rejected before any board is built. Invalid clicks
//! (face-up card, mid-animation, round over) are normal UI noise and are
//! silently ignored by the engine rather than reported here.

use thiserror::Error;

/// A round configuration that cannot produce a playable board.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Grid dimension below the 2x2 minimum.
    #[error("grid size {grid_size} is too small; a board needs at least 2x2 cells")]
    GridTooSmall { grid_size: usize },

    /// Zero or negative countdown makes the round unplayable.
    #[error("time limit {time_limit_secs}s must be positive")]
    NonPositiveTimeLimit { time_limit_secs: f32 },

    /// Not enough distinct faces to give every pair its own face.
    #[error("face pool of {available} cannot cover {required} pairs")]
    InsufficientFaces { available: usize, required: usize },

    /// A round is already running; abandon it before starting another.
    #[error("a round is already in progress")]
    RoundInProgress,
}
