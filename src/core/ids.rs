//! Card identification.
//!
//! Every grid slot gets a stable [`CardId`] when the board is built; it never
//! changes for the lifetime of the round. The [`FaceId`] is the pairing
//! identity: exactly two cards share a face once the board is shuffled.
//!
//! Two cards of the same face are told apart by their `CardId`, which is what
//! lets the match engine reject a double-click on the same card as a
//! self-match.

use serde::{Deserialize, Serialize};

/// Stable per-slot identifier for a card.
///
/// Assigned once at board construction, in row-major grid order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Index into the board's card collection.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Pairing identity printed on a card.
///
/// Indexes the shell's face-sprite pool; the engine only compares faces for
/// equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceId(pub u16);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}
