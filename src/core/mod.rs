//! Core engine types: identifiers, RNG, round configuration, errors.
//!
//! This module contains the building blocks the rest of the engine is wired
//! from. Difficulty is expressed once, as a [`RoundConfig`], and passed at
//! construction rather than held as ambient shared state.

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;

pub use config::RoundConfig;
pub use error::ConfigError;
pub use ids::{CardId, FaceId};
pub use rng::{GameRng, GameRngState};
