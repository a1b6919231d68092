//! Time-driven state: the countdown timer and the deadline scheduler.
//!
//! The engine has no thread of its own. The shell calls
//! [`RoundController::advance`](crate::round::RoundController::advance) once
//! per frame with the elapsed wall-clock seconds; that call ticks the
//! [`RoundTimer`] and delivers any due [`ScheduledAction`]s from the
//! [`Scheduler`]. Everything that looks like an animation or a delay (card
//! flips, the opening reveal, the selection confirmation) is a deadline on
//! the scheduler, so all gameplay mutation stays on one logical thread.

pub mod scheduler;
pub mod timer;

pub use scheduler::{ScheduledAction, Scheduler};
pub use timer::{RoundTimer, TimerTick};
