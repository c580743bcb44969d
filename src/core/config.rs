//! Game configuration.
//!
//! The referee is configured at game start and the configuration never
//! changes mid-game. The interactive binary always plays the default;
//! tests construct other round counts directly.

use serde::{Deserialize, Serialize};

/// Rounds played per game when nothing says otherwise.
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Fixed-for-the-game parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rounds per game. Immutable once the game starts.
    pub max_rounds: u32,
}

impl GameConfig {
    /// Create a config with a specific round count.
    #[must_use]
    pub fn new(max_rounds: u32) -> Self {
        assert!(max_rounds > 0, "Games must have at least 1 round");
        Self { max_rounds }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}
