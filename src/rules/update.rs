//! State transition after a resolved round.

use crate::core::{GameState, Move};

use super::resolve::{RoundOutcome, Winner};

/// Fold a resolved round into the game state.
///
/// Takes the authoritative state by value and returns the next
/// authoritative value. The round counter advances unconditionally, even
/// on a forfeit; scores move by at most one; bomb flags only ever latch
/// on. Nothing is ever decremented or reset.
#[must_use]
pub fn apply(
    mut state: GameState,
    outcome: &RoundOutcome,
    user_move: Option<Move>,
    bot_move: Move,
) -> GameState {
    debug_assert!(
        state.round_number < state.max_rounds(),
        "apply called after the final round"
    );

    state.round_number += 1;

    match outcome.winner {
        Winner::User => state.user_score += 1,
        Winner::Bot => state.bot_score += 1,
        Winner::Draw => {}
    }

    // A forfeited submission arrives as None, so it can never latch the
    // user's flag.
    if user_move == Some(Move::Bomb) {
        state.user_bomb_used = true;
    }
    if bot_move == Move::Bomb {
        state.bot_bomb_used = true;
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::resolve;

    #[test]
    fn test_round_counter_advances_on_win() {
        let state = GameState::default();
        let outcome = resolve(Some(Move::Rock), Move::Scissors);

        let state = apply(state, &outcome, Some(Move::Rock), Move::Scissors);

        assert_eq!(state.round_number, 1);
        assert_eq!(state.user_score, 1);
        assert_eq!(state.bot_score, 0);
    }

    #[test]
    fn test_round_counter_advances_on_forfeit() {
        let state = GameState::default();
        let outcome = resolve(None, Move::Paper);

        let state = apply(state, &outcome, None, Move::Paper);

        assert_eq!(state.round_number, 1);
        assert_eq!(state.user_score, 0);
        assert_eq!(state.bot_score, 1);
        assert!(!state.user_bomb_used);
    }

    #[test]
    fn test_draw_moves_no_score() {
        let state = GameState::default();
        let outcome = resolve(Some(Move::Rock), Move::Rock);

        let state = apply(state, &outcome, Some(Move::Rock), Move::Rock);

        assert_eq!(state.round_number, 1);
        assert_eq!(state.user_score, 0);
        assert_eq!(state.bot_score, 0);
    }

    #[test]
    fn test_bomb_flags_latch_independently() {
        let state = GameState::default();
        let outcome = resolve(Some(Move::Bomb), Move::Bomb);

        let state = apply(state, &outcome, Some(Move::Bomb), Move::Bomb);

        assert!(state.user_bomb_used);
        assert!(state.bot_bomb_used);
    }

    #[test]
    fn test_bot_bomb_latches_even_when_losing() {
        // User forfeits but the bot's bomb was still played.
        let state = GameState::default();
        let outcome = resolve(None, Move::Bomb);

        let state = apply(state, &outcome, None, Move::Bomb);

        assert!(state.bot_bomb_used);
        assert!(!state.user_bomb_used);
    }

    #[test]
    fn test_flags_stay_latched_across_rounds() {
        let mut state = GameState::default();

        let outcome = resolve(Some(Move::Bomb), Move::Rock);
        state = apply(state, &outcome, Some(Move::Bomb), Move::Rock);
        assert!(state.user_bomb_used);

        let outcome = resolve(Some(Move::Paper), Move::Rock);
        state = apply(state, &outcome, Some(Move::Paper), Move::Rock);
        assert!(state.user_bomb_used);
        assert_eq!(state.round_number, 2);
        assert_eq!(state.user_score, 2);
    }
}
