//! Seat identification for the two-party game.

use serde::{Deserialize, Serialize};

/// One of the two seats the referee arbitrates between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The human submitting raw move text.
    User,
    /// The opponent driven by a `MovePolicy`.
    Bot,
}

impl Player {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::User => Player::Bot,
            Player::Bot => Player::User,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::User => f.write_str("user"),
            Player::Bot => f.write_str("bot"),
        }
    }
}
