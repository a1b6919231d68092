//! Card system: the per-card state machine and the board that owns them.
//!
//! ## Key Types
//!
//! - `Card`: One grid cell — face value, face-up/down state, animation phase
//! - `CardPhase`: `Idle`, `Flipping`, `Fading`, or `Removed`
//! - `Board`: Owns the card collection, computes the grid layout, and runs
//!   the biased pair shuffle
//! - `CellPos`: A card's grid cell and normalized on-screen position
//!
//! The board exclusively owns its cards; the match engine only ever holds
//! `CardId`s into the collection.

pub mod board;
pub mod card;

pub use board::{Board, CellPos};
pub use card::{Card, CardPhase};
