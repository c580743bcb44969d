//! Move validation: normalization, membership, bomb single-use.

use thiserror::Error;

use crate::core::Move;

/// Why a submitted move was rejected.
///
/// Both variants are recoverable: the offending round is forfeited and
/// the game continues.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The input did not normalize to any known move.
    #[error("invalid move '{0}': valid moves are rock, paper, scissors, bomb (or r/p/s)")]
    Unrecognized(String),

    /// A syntactically valid bomb from a player who already spent theirs.
    #[error("bomb already used this game; each player gets exactly one")]
    BombSpent,
}

/// Validate a candidate move string for one player.
///
/// Normalizes first (trim, lowercase, r/p/s shorthand), then checks
/// membership, then enforces the single bomb per player per game. Pure
/// query: recording actual bomb usage is `rules::apply`'s job, after the
/// round really resolves.
pub fn validate(candidate: &str, bomb_already_used: bool) -> Result<Move, MoveError> {
    let normalized = candidate.trim().to_lowercase();

    let mv = match normalized.as_str() {
        "r" | "rock" => Move::Rock,
        "p" | "paper" => Move::Paper,
        "s" | "scissors" => Move::Scissors,
        "bomb" => Move::Bomb,
        _ => return Err(MoveError::Unrecognized(candidate.trim().to_string())),
    };

    // Usage is checked only once the move is syntactically a bomb.
    if mv.is_bomb() && bomb_already_used {
        return Err(MoveError::BombSpent);
    }

    Ok(mv)
}
