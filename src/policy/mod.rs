//! Opponent move selection policies.
//!
//! Policies are trait-based so tests can script the opponent while
//! interactive play draws uniformly at random:
//! - `UniformPolicy`: uniform over the legal candidate set
//! - `ScriptedPolicy`: fixed sequence for tests and replays

use crate::core::{GameRng, GameState, Move, Player};

/// Policy for choosing the bot's move each round.
pub trait MovePolicy {
    /// Choose a legal move for the bot.
    ///
    /// Implementations must respect the bomb latch in `state`: once
    /// `bot_bomb_used` is set, bomb is off the table. Policies never
    /// write to the state.
    fn choose(&mut self, state: &GameState) -> Move;
}

/// Uniform random selection over the legal candidate set.
#[derive(Clone, Debug)]
pub struct UniformPolicy {
    rng: GameRng,
}

impl UniformPolicy {
    /// Build from an explicit RNG. Tests pin a seed through this.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Build with a specific seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Build from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// The seed behind this policy's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl MovePolicy for UniformPolicy {
    fn choose(&mut self, state: &GameState) -> Move {
        let candidates = Move::candidates(!state.bomb_used(Player::Bot));
        *self
            .rng
            .choose(&candidates)
            .expect("candidate set always holds the three standard moves")
    }
}

/// Fixed move sequence, cycling once exhausted.
///
/// Test/replay double. The script author is responsible for honoring the
/// bomb latch; the policy plays the sequence verbatim.
#[derive(Clone, Debug)]
pub struct ScriptedPolicy {
    moves: Vec<Move>,
    cursor: usize,
}

impl ScriptedPolicy {
    /// Script a move sequence.
    ///
    /// Panics on an empty script.
    #[must_use]
    pub fn new(moves: impl Into<Vec<Move>>) -> Self {
        let moves = moves.into();
        assert!(!moves.is_empty(), "Script needs at least one move");
        Self { moves, cursor: 0 }
    }
}

impl MovePolicy for ScriptedPolicy {
    fn choose(&mut self, _state: &GameState) -> Move {
        let mv = self.moves[self.cursor % self.moves.len()];
        self.cursor += 1;
        mv
    }
}
