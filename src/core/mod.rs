//! Core referee types: moves, seats, state, configuration, RNG.
//!
//! These are the data definitions everything else consumes. Game-rule
//! logic lives in `crate::rules`.

pub mod config;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, DEFAULT_MAX_ROUNDS};
pub use moves::Move;
pub use player::Player;
pub use rng::GameRng;
pub use state::GameState;
