//! Round orchestration: the external-facing shell of the engine.
//!
//! [`RoundController`] starts a round from a difficulty level, wires the
//! timer, board, and match engine together, owns the score, and surfaces
//! everything the presentation layer needs as [`RoundEvent`]s.

pub mod controller;
pub mod events;

pub use controller::{
    RoundController, RoundPhase, FADE_DURATION_SECS, FLIP_DURATION_SECS, MATCH_AWARD,
    REVEAL_DURATION_SECS, SELECTION_CONFIRM_SECS,
};
pub use events::RoundEvent;
