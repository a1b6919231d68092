//! Matching rules: the pairwise-selection state machine.
//!
//! The match engine holds no cards of its own — only the face and id of the
//! one card currently awaiting a partner. Each confirmed selection resolves
//! to a [`SelectionOutcome`]; the round controller applies the outcome to
//! the board, the score, and the event stream.

pub mod match_engine;

pub use match_engine::{MatchEngine, SelectionOutcome};
