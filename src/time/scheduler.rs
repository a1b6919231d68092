//! Deadline scheduler.
//!
//! Replaces engine-frame callbacks and coroutine sleeps with explicit data:
//! every pending time-based transition (finish a flip, report a selection,
//! conceal the board, finish a fade) is an entry with a deadline. The round
//! controller advances the scheduler once per frame and applies whatever
//! came due, in deadline order, on the one logical thread that owns all
//! game state.
//!
//! Ending a round clears the queue, so no stale deadline can fire into a
//! torn-down board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

/// A time-based transition waiting for its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduledAction {
    /// End of the opening reveal: flip every card face-down.
    ConcealBoard,

    /// A card's flip animation finishes; its face state toggles.
    CompleteFlip(CardId),

    /// A clicked card's confirmation delay elapses; the selection is
    /// reported to the match engine.
    ReportSelection(CardId),

    /// A matched card's fade-out finishes; the card leaves the board.
    CompleteFade(CardId),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct Entry {
    /// Seconds until due. Negative once overdue.
    remaining: f32,
    /// Insertion order, breaks ties between equal deadlines.
    seq: u64,
    action: ScheduledAction,
}

/// Single-threaded deadline queue.
///
/// Deadlines are relative: [`advance`](Scheduler::advance) subtracts the
/// elapsed seconds from every entry and returns the actions that came due,
/// ordered by deadline, then by insertion order for ties.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Scheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to come due after `delay_secs`.
    pub fn schedule_in(&mut self, delay_secs: f32, action: ScheduledAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            remaining: delay_secs,
            seq,
            action,
        });
    }

    /// Advance all deadlines by `dt` seconds and return the actions that
    /// came due, earliest deadline first.
    pub fn advance(&mut self, dt: f32) -> SmallVec<[ScheduledAction; 8]> {
        for entry in &mut self.entries {
            entry.remaining -= dt;
        }

        let (mut due, pending): (Vec<Entry>, Vec<Entry>) =
            self.entries.drain(..).partition(|e| e.remaining <= 0.0);
        self.entries = pending;

        // More overdue = earlier deadline; insertion order breaks ties.
        due.sort_by(|a, b| {
            a.remaining
                .partial_cmp(&b.remaining)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.seq.cmp(&b.seq))
        });

        due.into_iter().map(|e| e.action).collect()
    }

    /// Drop every pending deadline.
    ///
    /// Called on round teardown (win, lose, abandon) so nothing fires into
    /// a dead board.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether any deadline is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pending deadlines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
