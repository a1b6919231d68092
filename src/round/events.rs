//! Events crossing the core boundary.
//!
//! The engine never calls into the presentation layer. Instead the round
//! controller appends events as gameplay resolves, and the shell drains
//! them after each [`advance`](super::RoundController::advance) or
//! [`click_card`](super::RoundController::click_card) call. Within one
//! round, `RoundWon` and `RoundLost` each appear at most once, and never
//! both.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Something the presentation layer should react to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A fresh board is showing all faces for memorization.
    BoardRevealed,

    /// The opening reveal ended; every card is flipping face-down.
    BoardConcealed,

    /// A card finished flipping; swap its displayed sprite.
    FaceChanged { card: CardId, face_up: bool },

    /// A pair matched. `score` is the running total after the award.
    MatchFound { award: u32, score: u32 },

    /// A matched pair is leaving the board; neither card is interactive
    /// anymore.
    CardsRemoved { first: CardId, second: CardId },

    /// Every pair was matched before the clock ran out.
    RoundWon { score: u32, time_remaining: f32 },

    /// The clock ran out with pairs still on the board.
    RoundLost,
}
