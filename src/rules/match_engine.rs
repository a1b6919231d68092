//! Pairwise-selection state machine.
//!
//! Selections arrive one at a time, already confirmed by the card layer:
//! - With nothing pending, the selection is recorded and waits for a partner.
//! - With a selection pending, equal faces are a match; the pair leaves play
//!   and the remaining-unmatched count drops by two. Differing faces are a
//!   mismatch; both cards flip back.
//! - The match that empties the board resolves as [`SelectionOutcome::RoundComplete`],
//!   exactly once, after which the engine refuses all interaction until reset.
//!
//! The card layer's flip debounce normally prevents the same card reporting
//! twice; the engine still ignores a repeated `CardId` defensively so a
//! duplicate report can never resolve as a self-match.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, FaceId};

/// How a confirmed selection resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// Interaction is disabled, or the selection repeated the pending card.
    Ignored,

    /// First of a prospective pair; waiting for a partner.
    Pending,

    /// Faces matched. Both cards leave play.
    Matched { first: CardId, second: CardId },

    /// Faces differed. Both cards flip back face-down.
    Mismatched { first: CardId, second: CardId },

    /// Faces matched and the board is now empty: the round is won.
    RoundComplete { first: CardId, second: CardId },
}

/// Selection state for one round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchEngine {
    /// The single face-up card awaiting a partner, if any.
    pending: Option<(FaceId, CardId)>,
    /// Cards still in play. Decremented by two per match; zero means won.
    remaining_unmatched: usize,
    interactive: bool,
}

impl MatchEngine {
    /// Create an inert engine. Call [`reset`](Self::reset) when a round starts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: None,
            remaining_unmatched: 0,
            interactive: false,
        }
    }

    /// Arm the engine for a fresh board of `card_count` cards.
    pub fn reset(&mut self, card_count: usize) {
        debug_assert!(card_count % 2 == 0, "card count must be even");
        self.pending = None;
        self.remaining_unmatched = card_count;
        self.interactive = true;
    }

    /// Whether the round is accepting card interaction.
    ///
    /// Cards consult this before accepting a click; it goes false when the
    /// round ends, win or lose.
    #[must_use]
    pub fn can_interact(&self) -> bool {
        self.interactive
    }

    /// Disable interaction without resolving the round (timer expiry,
    /// abandon).
    pub fn halt(&mut self) {
        self.interactive = false;
        self.pending = None;
    }

    /// The selection currently awaiting a partner.
    #[must_use]
    pub fn pending(&self) -> Option<(FaceId, CardId)> {
        self.pending
    }

    /// Cards still in play.
    #[must_use]
    pub fn remaining_unmatched(&self) -> usize {
        self.remaining_unmatched
    }

    /// Resolve a confirmed card selection.
    pub fn on_card_selected(&mut self, face: FaceId, card: CardId) -> SelectionOutcome {
        if !self.interactive {
            return SelectionOutcome::Ignored;
        }

        let Some((pending_face, pending_card)) = self.pending else {
            self.pending = Some((face, card));
            return SelectionOutcome::Pending;
        };

        // A repeated report of the pending card must not self-match.
        if pending_card == card {
            return SelectionOutcome::Ignored;
        }

        self.pending = None;

        if pending_face != face {
            return SelectionOutcome::Mismatched {
                first: pending_card,
                second: card,
            };
        }

        self.remaining_unmatched = self.remaining_unmatched.saturating_sub(2);
        if self.remaining_unmatched == 0 {
            self.interactive = false;
            SelectionOutcome::RoundComplete {
                first: pending_card,
                second: card,
            }
        } else {
            SelectionOutcome::Matched {
                first: pending_card,
                second: card,
            }
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed(card_count: usize) -> MatchEngine {
        let mut engine = MatchEngine::new();
        engine.reset(card_count);
        engine
    }

    fn select(engine: &mut MatchEngine, face: u16, card: u16) -> SelectionOutcome {
        engine.on_card_selected(FaceId::new(face), CardId::new(card))
    }

    #[test]
    fn test_first_selection_pends() {
        let mut engine = armed(16);

        let outcome = select(&mut engine, 2, 0);
        assert_eq!(outcome, SelectionOutcome::Pending);
        assert_eq!(engine.pending(), Some((FaceId::new(2), CardId::new(0))));
        assert_eq!(engine.remaining_unmatched(), 16);
    }

    #[test]
    fn test_match_resolves_pair() {
        let mut engine = armed(16);
        select(&mut engine, 2, 0);

        let outcome = select(&mut engine, 2, 1);
        assert_eq!(
            outcome,
            SelectionOutcome::Matched {
                first: CardId::new(0),
                second: CardId::new(1),
            }
        );
        assert_eq!(engine.pending(), None);
        assert_eq!(engine.remaining_unmatched(), 14);
        assert!(engine.can_interact());
    }

    #[test]
    fn test_mismatch_clears_pending_without_progress() {
        let mut engine = armed(16);
        select(&mut engine, 5, 2);

        let outcome = select(&mut engine, 7, 3);
        assert_eq!(
            outcome,
            SelectionOutcome::Mismatched {
                first: CardId::new(2),
                second: CardId::new(3),
            }
        );
        assert_eq!(engine.pending(), None);
        assert_eq!(engine.remaining_unmatched(), 16);
    }

    #[test]
    fn test_repeated_card_is_not_a_self_match() {
        let mut engine = armed(16);
        select(&mut engine, 2, 0);

        // Same unique id, same face: must be ignored, not matched
        let outcome = select(&mut engine, 2, 0);
        assert_eq!(outcome, SelectionOutcome::Ignored);
        assert_eq!(engine.pending(), Some((FaceId::new(2), CardId::new(0))));
        assert_eq!(engine.remaining_unmatched(), 16);
    }

    #[test]
    fn test_last_match_completes_round() {
        let mut engine = armed(4);

        select(&mut engine, 0, 0);
        select(&mut engine, 0, 1);
        assert_eq!(engine.remaining_unmatched(), 2);

        select(&mut engine, 1, 2);
        let outcome = select(&mut engine, 1, 3);
        assert_eq!(
            outcome,
            SelectionOutcome::RoundComplete {
                first: CardId::new(2),
                second: CardId::new(3),
            }
        );
        assert_eq!(engine.remaining_unmatched(), 0);
        assert!(!engine.can_interact());
    }

    #[test]
    fn test_completion_disables_interaction() {
        let mut engine = armed(2);
        select(&mut engine, 0, 0);
        select(&mut engine, 0, 1);

        // No further resolution is possible
        assert_eq!(select(&mut engine, 3, 4), SelectionOutcome::Ignored);
        assert_eq!(select(&mut engine, 3, 5), SelectionOutcome::Ignored);
        assert_eq!(engine.remaining_unmatched(), 0);
    }

    #[test]
    fn test_halt_discards_pending() {
        let mut engine = armed(16);
        select(&mut engine, 2, 0);

        engine.halt();
        assert!(!engine.can_interact());
        assert_eq!(engine.pending(), None);
        assert_eq!(select(&mut engine, 2, 1), SelectionOutcome::Ignored);
    }

    #[test]
    fn test_reset_rearms_after_halt() {
        let mut engine = armed(4);
        engine.halt();

        engine.reset(8);
        assert!(engine.can_interact());
        assert_eq!(engine.remaining_unmatched(), 8);
        assert_eq!(select(&mut engine, 1, 0), SelectionOutcome::Pending);
    }
}
