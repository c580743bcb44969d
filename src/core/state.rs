//! Per-game referee state.
//!
//! One `GameState` instance is authoritative for a game's lifetime. The
//! updater in `crate::rules` consumes it by value and returns the next
//! authoritative value; nothing else writes to it. Scores and the round
//! counter only ever grow, and bomb flags only ever latch on.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::Player;

/// Cumulative game state across rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Completed rounds. Starts at 0, grows by exactly 1 per round,
    /// never passes `max_rounds`.
    pub round_number: u32,

    /// Rounds won by the user.
    pub user_score: u32,

    /// Rounds won by the bot.
    pub bot_score: u32,

    /// Latched once the user plays a valid bomb. A forfeited submission
    /// never latches it.
    pub user_bomb_used: bool,

    /// Latched once the bot plays its bomb.
    pub bot_bomb_used: bool,

    max_rounds: u32,
}

impl GameState {
    /// Fresh state for a new game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            round_number: 0,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            max_rounds: config.max_rounds,
        }
    }

    /// Round count this game plays to.
    #[must_use]
    pub const fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Whether a seat has spent its bomb.
    #[must_use]
    pub const fn bomb_used(&self, player: Player) -> bool {
        match player {
            Player::User => self.user_bomb_used,
            Player::Bot => self.bot_bomb_used,
        }
    }

    /// A seat's current score.
    #[must_use]
    pub const fn score(&self, player: Player) -> u32 {
        match player {
            Player::User => self.user_score,
            Player::Bot => self.bot_score,
        }
    }

    /// True once all configured rounds are complete.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.round_number >= self.max_rounds
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
