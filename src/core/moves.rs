//! Move definitions and the standard cycle.
//!
//! ## Canonical form
//!
//! Every move has exactly one canonical name: its lowercase full word.
//! Serialization uses it, `Display` uses it, and the validator in
//! `crate::rules` normalizes user input into it.
//!
//! ## Bomb
//!
//! `beats` encodes only the standard rock/paper/scissors cycle. Bomb
//! interactions depend on round context (single use, bomb-vs-bomb draw)
//! and belong to the resolver, not the move itself.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A playable move.
///
/// Serializes as its canonical lowercase word (`"rock"`, `"bomb"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    /// The three standard-cycle moves.
    pub const STANDARD: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Every playable move.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Whether this is the single-use bomb.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Move::Bomb)
    }

    /// Standard-cycle dominance: rock beats scissors, scissors beats
    /// paper, paper beats rock.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    /// Legal candidate set for a player: the standard moves, plus bomb
    /// while it is still unspent.
    #[must_use]
    pub fn candidates(bomb_available: bool) -> SmallVec<[Move; 4]> {
        let mut moves = SmallVec::from_slice(&Self::STANDARD);
        if bomb_available {
            moves.push(Move::Bomb);
        }
        moves
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
