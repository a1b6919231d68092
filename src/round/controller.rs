//! Round controller.
//!
//! One `RoundController` owns everything a round needs: the board, the
//! match engine, the countdown timer, the deadline scheduler, and the
//! score. The shell drives it with exactly four calls:
//!
//! - [`start_round`](RoundController::start_round) when the player picks a
//!   difficulty
//! - [`click_card`](RoundController::click_card) when the player clicks
//! - [`advance`](RoundController::advance) once per frame with elapsed
//!   seconds
//! - [`drain_events`](RoundController::drain_events) to collect what to
//!   display
//!
//! All gameplay mutation happens inside those calls, on the caller's
//! thread. Ending a round — win, lose, or abandon — clears the scheduler so
//! no stale deadline can touch a torn-down board.

use serde::{Deserialize, Serialize};

use crate::cards::Board;
use crate::core::{CardId, ConfigError, GameRng, RoundConfig};
use crate::rules::{MatchEngine, SelectionOutcome};
use crate::time::{RoundTimer, ScheduledAction, Scheduler, TimerTick};

use super::events::RoundEvent;

/// Points granted per matched pair.
pub const MATCH_AWARD: u32 = 40;

/// How long the opening reveal shows every face.
pub const REVEAL_DURATION_SECS: f32 = 3.0;

/// Full flip duration: two 0.25 s quarter-turns with the face swap at the
/// midpoint.
pub const FLIP_DURATION_SECS: f32 = 0.5;

/// Delay between a card's click and its selection report, letting the flip
/// finish visually before resolution runs.
pub const SELECTION_CONFIRM_SECS: f32 = 0.5;

/// Fade-out duration for a matched pair.
pub const FADE_DURATION_SECS: f32 = 2.5;

/// Where the round currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round running.
    Idle,
    /// Board built, clock ticking.
    Active,
    /// Every pair matched in time.
    Won,
    /// Clock ran out first.
    Lost,
}

/// Owns and wires one round's timer, board, match engine, and score.
#[derive(Clone, Debug)]
pub struct RoundController {
    board: Option<Board>,
    engine: MatchEngine,
    timer: RoundTimer,
    scheduler: Scheduler,
    rng: GameRng,
    phase: RoundPhase,
    score: u32,
    events: Vec<RoundEvent>,
}

impl RoundController {
    /// Create an idle controller. The seed fixes the shuffle for every
    /// round this controller starts.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            board: None,
            engine: MatchEngine::new(),
            timer: RoundTimer::new(),
            scheduler: Scheduler::new(),
            rng: GameRng::new(seed),
            phase: RoundPhase::Idle,
            score: 0,
            events: Vec::new(),
        }
    }

    /// Start a round at a shell difficulty level.
    ///
    /// `grid_size = level + 4`, `time_limit = 150 - level * 10`; `face_pool`
    /// is how many distinct face sprites the shell can show. Rejected if the
    /// mapped configuration is unplayable or a round is already running.
    pub fn start_round(&mut self, level: u32, face_pool: usize) -> Result<(), ConfigError> {
        if self.phase == RoundPhase::Active {
            return Err(ConfigError::RoundInProgress);
        }
        let config = RoundConfig::for_level(level, face_pool)?;
        self.start_with_config(config)
    }

    /// Start a round from an explicit configuration.
    pub fn start_with_config(&mut self, config: RoundConfig) -> Result<(), ConfigError> {
        if self.phase == RoundPhase::Active {
            return Err(ConfigError::RoundInProgress);
        }
        config.validate()?;

        let mut board = Board::build(&config);
        board.shuffle_faces(config.face_pool, &mut self.rng);

        self.engine.reset(board.card_count());
        self.timer.configure(config.time_limit_secs);
        self.timer.reset();

        self.scheduler.clear();
        self.scheduler
            .schedule_in(REVEAL_DURATION_SECS, ScheduledAction::ConcealBoard);

        self.board = Some(board);
        self.score = 0;
        self.events.clear();
        self.events.push(RoundEvent::BoardRevealed);
        self.phase = RoundPhase::Active;
        Ok(())
    }

    /// Handle a click on a card.
    ///
    /// Returns whether the click was accepted. Rejections — no active
    /// round, face-up card, mid-animation, matched card — are normal UI
    /// noise and carry no event.
    pub fn click_card(&mut self, id: CardId) -> bool {
        if self.phase != RoundPhase::Active || !self.engine.can_interact() {
            return false;
        }
        let Some(card) = self.board.as_mut().and_then(|b| b.card_mut(id)) else {
            return false;
        };
        if !card.can_accept_click() || !card.begin_flip() {
            return false;
        }

        self.scheduler
            .schedule_in(FLIP_DURATION_SECS, ScheduledAction::CompleteFlip(id));
        self.scheduler
            .schedule_in(SELECTION_CONFIRM_SECS, ScheduledAction::ReportSelection(id));
        true
    }

    /// Advance all time-based state by `dt` seconds.
    ///
    /// Ticks the countdown first, then delivers due deadlines in order.
    /// If the timer expires, the round is lost and every pending deadline
    /// is dropped; a selection due on the same frame never resolves.
    pub fn advance(&mut self, dt: f32) {
        if self.phase != RoundPhase::Active {
            return;
        }

        if self.timer.tick(dt) == TimerTick::Expired {
            self.lose();
            return;
        }

        let due = self.scheduler.advance(dt);
        for action in due {
            if self.phase != RoundPhase::Active {
                break;
            }
            self.apply(action);
        }
    }

    /// Pause the countdown while the shell shows a menu. Animations keep
    /// their deadlines; only clock time stops.
    pub fn pause_for_menu(&mut self) {
        self.timer.pause();
    }

    /// Resume the countdown after the menu closes.
    pub fn resume_from_menu(&mut self) {
        self.timer.resume();
    }

    /// Tear down the round without declaring a win or loss.
    pub fn abandon_round(&mut self) {
        self.scheduler.clear();
        self.timer.pause();
        self.engine.halt();
        self.board = None;
        self.phase = RoundPhase::Idle;
    }

    /// Take all accumulated events, oldest first.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at accumulated events without consuming them.
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Where the round currently stands.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Running score for the current round.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The current board, if a round has one.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Read access to the countdown.
    #[must_use]
    pub fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    /// Whether cards currently accept clicks.
    #[must_use]
    pub fn can_interact(&self) -> bool {
        self.phase == RoundPhase::Active && self.engine.can_interact()
    }

    fn apply(&mut self, action: ScheduledAction) {
        match action {
            ScheduledAction::ConcealBoard => self.conceal_board(),
            ScheduledAction::CompleteFlip(id) => self.complete_flip(id),
            ScheduledAction::ReportSelection(id) => self.report_selection(id),
            ScheduledAction::CompleteFade(id) => {
                if let Some(card) = self.board.as_mut().and_then(|b| b.card_mut(id)) {
                    card.complete_fade();
                }
            }
        }
    }

    fn conceal_board(&mut self) {
        let Some(board) = self.board.as_mut() else {
            return;
        };

        let mut flipping = Vec::new();
        for id in board.card_ids().collect::<Vec<_>>() {
            if let Some(card) = board.card_mut(id) {
                if card.begin_flip() {
                    flipping.push(id);
                }
            }
        }
        for id in flipping {
            self.scheduler
                .schedule_in(FLIP_DURATION_SECS, ScheduledAction::CompleteFlip(id));
        }
        self.events.push(RoundEvent::BoardConcealed);
    }

    fn complete_flip(&mut self, id: CardId) {
        let Some(card) = self.board.as_mut().and_then(|b| b.card_mut(id)) else {
            return;
        };
        if let Some(face_up) = card.complete_flip() {
            self.events.push(RoundEvent::FaceChanged { card: id, face_up });
        }
    }

    fn report_selection(&mut self, id: CardId) {
        let Some(face) = self
            .board
            .as_ref()
            .and_then(|b| b.card(id))
            .and_then(|c| c.face())
        else {
            return;
        };

        match self.engine.on_card_selected(face, id) {
            SelectionOutcome::Ignored | SelectionOutcome::Pending => {}
            SelectionOutcome::Matched { first, second } => {
                self.resolve_match(first, second);
            }
            SelectionOutcome::RoundComplete { first, second } => {
                self.resolve_match(first, second);
                self.win();
            }
            SelectionOutcome::Mismatched { first, second } => {
                self.flip_back(first);
                self.flip_back(second);
            }
        }
    }

    fn resolve_match(&mut self, first: CardId, second: CardId) {
        self.score += MATCH_AWARD;
        self.events.push(RoundEvent::MatchFound {
            award: MATCH_AWARD,
            score: self.score,
        });

        for id in [first, second] {
            if let Some(card) = self.board.as_mut().and_then(|b| b.card_mut(id)) {
                card.begin_fade();
                self.scheduler
                    .schedule_in(FADE_DURATION_SECS, ScheduledAction::CompleteFade(id));
            }
        }
        self.events.push(RoundEvent::CardsRemoved { first, second });
    }

    fn flip_back(&mut self, id: CardId) {
        if let Some(card) = self.board.as_mut().and_then(|b| b.card_mut(id)) {
            if card.begin_flip() {
                self.scheduler
                    .schedule_in(FLIP_DURATION_SECS, ScheduledAction::CompleteFlip(id));
            }
        }
    }

    fn win(&mut self) {
        self.timer.pause();
        self.scheduler.clear();
        self.phase = RoundPhase::Won;
        self.events.push(RoundEvent::RoundWon {
            score: self.score,
            time_remaining: self.timer.remaining(),
        });
    }

    fn lose(&mut self) {
        self.engine.halt();
        self.scheduler.clear();
        self.phase = RoundPhase::Lost;
        self.events.push(RoundEvent::RoundLost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> RoundController {
        let mut controller = RoundController::new(42);
        controller.start_round(0, 8).unwrap();
        controller
    }

    /// Run the opening reveal to completion: conceal at 3.0 s, flips done
    /// 0.5 s later.
    fn past_reveal(controller: &mut RoundController) {
        controller.advance(REVEAL_DURATION_SECS);
        controller.advance(FLIP_DURATION_SECS);
    }

    #[test]
    fn test_start_round_builds_level_zero() {
        let controller = started();
        let board = controller.board().unwrap();

        assert_eq!(board.grid_size(), 4);
        assert_eq!(board.card_count(), 16);
        assert_eq!(controller.timer().limit(), 150.0);
        assert_eq!(controller.phase(), RoundPhase::Active);
        assert_eq!(controller.score(), 0);
        assert_eq!(controller.events(), &[RoundEvent::BoardRevealed]);
    }

    #[test]
    fn test_start_round_rejects_bad_config() {
        let mut controller = RoundController::new(0);
        // Level 0 needs 8 faces
        assert_eq!(
            controller.start_round(0, 7),
            Err(ConfigError::InsufficientFaces {
                available: 7,
                required: 8,
            })
        );
        assert_eq!(controller.phase(), RoundPhase::Idle);
        assert!(controller.board().is_none());
    }

    #[test]
    fn test_start_round_while_active_rejected() {
        let mut controller = started();
        assert_eq!(
            controller.start_round(0, 8),
            Err(ConfigError::RoundInProgress)
        );
    }

    #[test]
    fn test_clicks_rejected_during_reveal() {
        let mut controller = started();
        // Cards are face-up for memorization; clicks bounce off
        assert!(!controller.click_card(CardId::new(0)));
    }

    #[test]
    fn test_reveal_then_conceal_flips_all_cards_down() {
        let mut controller = started();
        past_reveal(&mut controller);

        let board = controller.board().unwrap();
        assert!(board.cards().iter().all(|c| !c.is_face_up()));

        let events = controller.drain_events();
        assert!(events.contains(&RoundEvent::BoardConcealed));
        let face_downs = events
            .iter()
            .filter(|e| matches!(e, RoundEvent::FaceChanged { face_up: false, .. }))
            .count();
        assert_eq!(face_downs, 16);
    }

    #[test]
    fn test_click_accepted_after_conceal() {
        let mut controller = started();
        past_reveal(&mut controller);

        assert!(controller.click_card(CardId::new(0)));
        // Mid-flip: the same card rejects a second click
        assert!(!controller.click_card(CardId::new(0)));
    }

    #[test]
    fn test_click_unknown_card_rejected() {
        let mut controller = started();
        past_reveal(&mut controller);
        assert!(!controller.click_card(CardId::new(200)));
    }

    #[test]
    fn test_timer_runs_during_reveal() {
        let mut controller = started();
        past_reveal(&mut controller);
        assert_eq!(controller.timer().remaining(), 150.0 - 3.5);
    }

    #[test]
    fn test_pause_for_menu_stops_only_the_clock() {
        let mut controller = started();
        controller.pause_for_menu();

        // Clock frozen, but the reveal still concludes
        controller.advance(REVEAL_DURATION_SECS);
        controller.advance(FLIP_DURATION_SECS);
        assert_eq!(controller.timer().remaining(), 150.0);
        assert!(controller
            .drain_events()
            .contains(&RoundEvent::BoardConcealed));

        controller.resume_from_menu();
        controller.advance(10.0);
        assert_eq!(controller.timer().remaining(), 140.0);
    }

    #[test]
    fn test_abandon_round_declares_nothing() {
        let mut controller = started();
        past_reveal(&mut controller);
        controller.drain_events();

        controller.abandon_round();
        assert_eq!(controller.phase(), RoundPhase::Idle);
        assert!(controller.board().is_none());
        assert!(!controller.can_interact());

        controller.advance(1000.0);
        assert!(controller.drain_events().is_empty());
    }

    #[test]
    fn test_restart_allowed_after_abandon() {
        let mut controller = started();
        controller.abandon_round();
        assert!(controller.start_round(1, 13).is_ok());
        assert_eq!(controller.board().unwrap().grid_size(), 5);
    }

    #[test]
    fn test_timer_expiry_loses_round() {
        let mut controller = started();
        past_reveal(&mut controller);
        controller.drain_events();

        controller.advance(1000.0);
        assert_eq!(controller.phase(), RoundPhase::Lost);
        assert_eq!(controller.drain_events(), vec![RoundEvent::RoundLost]);

        // Lost exactly once; the round is inert
        controller.advance(1000.0);
        assert!(controller.drain_events().is_empty());
        assert!(!controller.click_card(CardId::new(0)));
    }

    #[test]
    fn test_expiry_cancels_pending_selection() {
        let mut controller = started();
        past_reveal(&mut controller);
        assert!(controller.click_card(CardId::new(0)));
        controller.drain_events();

        // Timer dies before the selection confirmation lands
        controller.advance(1000.0);
        let events = controller.drain_events();
        assert_eq!(events, vec![RoundEvent::RoundLost]);
        assert_eq!(controller.phase(), RoundPhase::Lost);
    }
}
