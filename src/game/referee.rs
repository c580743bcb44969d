//! The referee: one round step from raw input to updated state.
//!
//! Each round is validate → choose → resolve → apply, strictly in that
//! order, producing a `RoundReport` for the presentation layer. Validation
//! failures forfeit the round; they never abort the game, which always
//! runs its configured length.

use log::debug;

use crate::core::{GameConfig, GameState, Move, Player};
use crate::policy::MovePolicy;
use crate::rules::{apply, resolve, validate, MoveError, RoundOutcome, Winner};

/// Everything the presentation layer needs about one resolved round.
///
/// Transient: produced per round, printed, dropped.
#[derive(Clone, Debug)]
pub struct RoundReport {
    /// 1-based number of the round just played.
    pub round_number: u32,

    /// The user's validated move; `None` when the round was forfeited.
    pub user_move: Option<Move>,

    /// The bot's move, always concrete.
    pub bot_move: Move,

    /// Diagnostic behind a forfeit, if any.
    pub rejection: Option<MoveError>,

    /// Winner and explanation.
    pub outcome: RoundOutcome,

    /// Running score after this round.
    pub user_score: u32,
    pub bot_score: u32,
}

/// Referees a single game: validates input, picks the bot's move,
/// resolves the round, and advances the state.
#[derive(Clone, Debug)]
pub struct Referee<P> {
    config: GameConfig,
    policy: P,
}

impl<P: MovePolicy> Referee<P> {
    /// Referee with the default three-round config.
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self::with_config(GameConfig::default(), policy)
    }

    /// Referee with an explicit config.
    #[must_use]
    pub fn with_config(config: GameConfig, policy: P) -> Self {
        Self { config, policy }
    }

    /// Fresh state for a new game under this referee's config.
    #[must_use]
    pub fn new_game(&self) -> GameState {
        GameState::new(self.config)
    }

    /// Play one round from a raw user submission.
    ///
    /// Consumes the authoritative state and returns the next one alongside
    /// the round report.
    pub fn play_round(&mut self, state: GameState, raw: &str) -> (GameState, RoundReport) {
        let (user_move, rejection) = match validate(raw, state.bomb_used(Player::User)) {
            Ok(mv) => (Some(mv), None),
            Err(err) => (None, Some(err)),
        };

        let bot_move = self.policy.choose(&state);
        let outcome = resolve(user_move, bot_move);
        let state = apply(state, &outcome, user_move, bot_move);

        debug!(
            "round {} resolved: user={:?} bot={} winner={:?}",
            state.round_number, user_move, bot_move, outcome.winner
        );

        let report = RoundReport {
            round_number: state.round_number,
            user_move,
            bot_move,
            rejection,
            outcome,
            user_score: state.user_score,
            bot_score: state.bot_score,
        };

        (state, report)
    }

    /// Final standings from cumulative scores.
    #[must_use]
    pub fn final_result(&self, state: &GameState) -> Winner {
        match state.user_score.cmp(&state.bot_score) {
            std::cmp::Ordering::Greater => Winner::User,
            std::cmp::Ordering::Less => Winner::Bot,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }
}
