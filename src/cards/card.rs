//! Per-card state machine.
//!
//! A card moves through `Idle -> Flipping -> Idle` as it turns over, and
//! irreversibly through `Fading -> Removed` once matched. Only the phase
//! transitions live here; their durations are deadlines on the round
//! scheduler, which calls [`complete_flip`](Card::complete_flip) and
//! [`complete_fade`](Card::complete_fade) when the time comes.
//!
//! A card accepts a click only while face-down and `Idle`. The `Flipping`
//! phase doubles as the debounce: a second click on the same card cannot
//! land until the first flip has completed, so a card never has two
//! selection reports in flight.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, FaceId};

/// Animation phase of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardPhase {
    /// At rest, face-up or face-down.
    Idle,

    /// Mid-flip. Blocks interaction until the scheduler completes the flip.
    Flipping,

    /// Matched and fading out. Irreversible; never interactive again.
    Fading,

    /// Gone from play.
    Removed,
}

/// A single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    unique_id: CardId,
    face: Option<FaceId>,
    face_up: bool,
    phase: CardPhase,
}

impl Card {
    /// Create a card for a grid slot.
    ///
    /// Cards are built face-up with no face assigned; the shuffle fills in
    /// faces before the opening reveal shows them.
    #[must_use]
    pub fn new(unique_id: CardId) -> Self {
        Self {
            unique_id,
            face: None,
            face_up: true,
            phase: CardPhase::Idle,
        }
    }

    /// Stable slot identifier.
    #[must_use]
    pub fn unique_id(&self) -> CardId {
        self.unique_id
    }

    /// Pairing identity. `None` until the shuffle assigns one.
    #[must_use]
    pub fn face(&self) -> Option<FaceId> {
        self.face
    }

    /// Whether the face side is showing.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Current animation phase.
    #[must_use]
    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// True only while a flip is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase == CardPhase::Flipping
    }

    /// Whether the card has left play (fading out or fully removed).
    #[must_use]
    pub fn is_out_of_play(&self) -> bool {
        matches!(self.phase, CardPhase::Fading | CardPhase::Removed)
    }

    /// Whether a click would currently be accepted.
    ///
    /// Face-up, flipping, and out-of-play cards all reject clicks. The
    /// round-active check lives in the match engine, not here.
    #[must_use]
    pub fn can_accept_click(&self) -> bool {
        !self.face_up && self.phase == CardPhase::Idle
    }

    /// Assign the pairing identity during the shuffle.
    pub(crate) fn assign_face(&mut self, face: FaceId) {
        self.face = Some(face);
    }

    /// Start a flip toward the other face side.
    ///
    /// Rejected (returns `false`) unless the card is `Idle`: a card already
    /// mid-flip or out of play cannot start another transition.
    pub fn begin_flip(&mut self) -> bool {
        if self.phase != CardPhase::Idle {
            return false;
        }
        self.phase = CardPhase::Flipping;
        true
    }

    /// Finish an in-progress flip, toggling the face state.
    ///
    /// Returns the new face-up state, or `None` if the card was not
    /// flipping (a stale deadline after the phase moved on).
    pub fn complete_flip(&mut self) -> Option<bool> {
        if self.phase != CardPhase::Flipping {
            return None;
        }
        self.face_up = !self.face_up;
        self.phase = CardPhase::Idle;
        Some(self.face_up)
    }

    /// Start the irreversible fade-out of a matched card.
    ///
    /// From this point the card never accepts another click.
    pub fn begin_fade(&mut self) {
        if self.phase != CardPhase::Removed {
            self.phase = CardPhase::Fading;
        }
    }

    /// Finish the fade-out; the card is gone from play.
    pub fn complete_fade(&mut self) {
        if self.phase == CardPhase::Fading {
            self.phase = CardPhase::Removed;
        }
    }
}
