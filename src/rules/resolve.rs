//! Round resolution.
//!
//! Decision order matters here: forfeits are settled before bomb
//! interactions, and bombs before the standard cycle.

use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Who took a round (or the game).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    User,
    Bot,
    Draw,
}

/// Outcome of a single resolved round.
///
/// Transient: feeds `rules::apply` and the round report, then drops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub winner: Winner,

    /// Names the moves/relationship that decided the round, not just the
    /// winner.
    pub explanation: String,
}

/// Resolve one round.
///
/// `None` for the user move marks a forfeited submission. The bot move is
/// always concrete and already legal; on a forfeit it does not influence
/// the result but is still named in the explanation.
#[must_use]
pub fn resolve(user: Option<Move>, bot: Move) -> RoundOutcome {
    let user = match user {
        Some(mv) => mv,
        None => {
            return RoundOutcome {
                winner: Winner::Bot,
                explanation: format!("round forfeited due to invalid input; bot played {bot}"),
            }
        }
    };

    match (user.is_bomb(), bot.is_bomb()) {
        (true, true) => RoundOutcome {
            winner: Winner::Draw,
            explanation: "both used bomb".to_string(),
        },
        (true, false) => RoundOutcome {
            winner: Winner::User,
            explanation: format!("bomb beats {bot}"),
        },
        (false, true) => RoundOutcome {
            winner: Winner::Bot,
            explanation: format!("bot's bomb beats {user}"),
        },
        (false, false) if user == bot => RoundOutcome {
            winner: Winner::Draw,
            explanation: format!("both chose {user}"),
        },
        (false, false) => {
            if user.beats(bot) {
                RoundOutcome {
                    winner: Winner::User,
                    explanation: format!("{user} beats {bot}"),
                }
            } else {
                RoundOutcome {
                    winner: Winner::Bot,
                    explanation: format!("{bot} beats {user}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forfeit_always_goes_to_bot() {
        for bot in Move::ALL {
            let outcome = resolve(None, bot);
            assert_eq!(outcome.winner, Winner::Bot);
            assert!(outcome.explanation.contains("forfeited"));
            assert!(outcome.explanation.contains(bot.as_str()));
        }
    }

    #[test]
    fn test_bomb_versus_bomb_draws() {
        let outcome = resolve(Some(Move::Bomb), Move::Bomb);
        assert_eq!(outcome.winner, Winner::Draw);
        assert!(outcome.explanation.contains("bomb"));
    }

    #[test]
    fn test_user_bomb_beats_standard_moves() {
        for bot in Move::STANDARD {
            let outcome = resolve(Some(Move::Bomb), bot);
            assert_eq!(outcome.winner, Winner::User);
            assert!(outcome.explanation.contains(bot.as_str()));
        }
    }

    #[test]
    fn test_bot_bomb_beats_standard_moves() {
        for user in Move::STANDARD {
            let outcome = resolve(Some(user), Move::Bomb);
            assert_eq!(outcome.winner, Winner::Bot);
            assert!(outcome.explanation.contains("bomb"));
            assert!(outcome.explanation.contains(user.as_str()));
        }
    }

    #[test]
    fn test_standard_cycle_all_pairs() {
        let cases = [
            (Move::Rock, Move::Scissors, Winner::User),
            (Move::Scissors, Move::Rock, Winner::Bot),
            (Move::Scissors, Move::Paper, Winner::User),
            (Move::Paper, Move::Scissors, Winner::Bot),
            (Move::Paper, Move::Rock, Winner::User),
            (Move::Rock, Move::Paper, Winner::Bot),
        ];

        for (user, bot, expected) in cases {
            let outcome = resolve(Some(user), bot);
            assert_eq!(outcome.winner, expected, "{user} vs {bot}");
        }
    }

    #[test]
    fn test_equal_standard_moves_draw() {
        for mv in Move::STANDARD {
            let outcome = resolve(Some(mv), mv);
            assert_eq!(outcome.winner, Winner::Draw);
            assert!(outcome.explanation.contains(mv.as_str()));
        }
    }

    #[test]
    fn test_explanation_names_winning_relationship() {
        let outcome = resolve(Some(Move::Rock), Move::Scissors);
        assert_eq!(outcome.explanation, "rock beats scissors");

        let outcome = resolve(Some(Move::Scissors), Move::Rock);
        assert_eq!(outcome.explanation, "rock beats scissors");
    }
}
