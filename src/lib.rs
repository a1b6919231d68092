//! # match-pairs
//!
//! A deterministic round engine for a pair-matching memory game: a grid of
//! face-down cards is revealed briefly, concealed, and the player must find
//! matching pairs before a countdown timer runs out.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: No rendering, audio, or asset handling. The core
//!    emits [`RoundEvent`]s; the shell decides how to display them.
//!
//! 2. **Deterministic**: Same seed produces an identical board layout and
//!    face assignment. All randomness flows through [`GameRng`].
//!
//! 3. **Single Logical Thread**: Time-based behavior (flip animations, the
//!    opening reveal, selection confirmation) is modeled as deadlines on an
//!    explicit [`Scheduler`], advanced by the shell once per frame. No locks,
//!    no real concurrency.
//!
//! ## Modules
//!
//! - `core`: Card/face identifiers, RNG, round configuration, errors
//! - `time`: Countdown timer and the deadline scheduler
//! - `cards`: Card state machine and the board (layout + shuffle)
//! - `rules`: The pairwise-selection match engine
//! - `round`: Round controller wiring timer, board, and engine together

pub mod cards;
pub mod core;
pub mod round;
pub mod rules;
pub mod time;

// Re-export commonly used types
pub use crate::core::{CardId, ConfigError, FaceId, GameRng, GameRngState, RoundConfig};

pub use crate::cards::{Board, Card, CardPhase, CellPos};

pub use crate::rules::{MatchEngine, SelectionOutcome};

pub use crate::time::{RoundTimer, ScheduledAction, Scheduler, TimerTick};

pub use crate::round::{RoundController, RoundEvent, RoundPhase};
