//! Round configuration.
//!
//! A round is configured once, up front, by a [`RoundConfig`]:
//! - `grid_size`: The board is `N x N` cells (minus the vacant center cell
//!   when `N` is odd, keeping the card count even)
//! - `time_limit_secs`: Countdown ceiling for the round timer
//! - `face_pool`: How many distinct face sprites the shell can display
//!
//! The shell's difficulty levels map onto configs via [`RoundConfig::for_level`]:
//! level 0 is a 4x4 grid with 150 seconds, and each level adds a row/column
//! and takes 10 seconds away.
//!
//! Validation happens here, before any board is built. A config that passes
//! [`RoundConfig::validate`] cannot fail later in the round.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Complete configuration for one round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Grid dimension N. The board has N² cards (N² - 1 when N is odd).
    pub grid_size: usize,

    /// Countdown ceiling in seconds.
    pub time_limit_secs: f32,

    /// Number of distinct faces available for pairing.
    pub face_pool: usize,
}

impl RoundConfig {
    /// Create a validated configuration.
    pub fn new(grid_size: usize, time_limit_secs: f32, face_pool: usize) -> Result<Self, ConfigError> {
        let config = Self {
            grid_size,
            time_limit_secs,
            face_pool,
        };
        config.validate()?;
        Ok(config)
    }

    /// Map a shell difficulty level onto a configuration.
    ///
    /// `grid_size = level + 4`, `time_limit = 150 - level * 10`. Levels high
    /// enough to drive the time limit to zero are rejected.
    pub fn for_level(level: u32, face_pool: usize) -> Result<Self, ConfigError> {
        let grid_size = level as usize + 4;
        let time_limit_secs = 150.0 - level as f32 * 10.0;
        Self::new(grid_size, time_limit_secs, face_pool)
    }

    /// Number of cards on the board.
    ///
    /// `N² - (N mod 2)`: for odd N one cell is left vacant so the count
    /// stays even.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.grid_size * self.grid_size - self.grid_size % 2
    }

    /// Number of pairs to be matched.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.card_count() / 2
    }

    /// Check the configuration against the round invariants.
    ///
    /// - Grid must be at least 2x2 (a 1x1 grid has zero pairs)
    /// - Time limit must be positive
    /// - The face pool must cover every pair with a distinct face
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall {
                grid_size: self.grid_size,
            });
        }
        if self.time_limit_secs <= 0.0 {
            return Err(ConfigError::NonPositiveTimeLimit {
                time_limit_secs: self.time_limit_secs,
            });
        }
        if self.face_pool < self.pair_count() {
            return Err(ConfigError::InsufficientFaces {
                available: self.face_pool,
                required: self.pair_count(),
            });
        }
        Ok(())
    }
}
