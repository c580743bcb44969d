//! # rps-plus
//!
//! A referee engine for a three-round Rock-Paper-Scissors variant with a
//! single-use bomb move per player.
//!
//! ## Design Principles
//!
//! 1. **Plain operations**: the three core operations (`validate`,
//!    `resolve`, `apply`) are directly callable functions with no
//!    registration indirection.
//!
//! 2. **One authoritative state**: `rules::apply` consumes the
//!    `GameState` by value and returns the next authoritative value;
//!    nothing else writes to it.
//!
//! 3. **Injectable randomness**: opponent selection goes through the
//!    `MovePolicy` trait and a seedable `GameRng`, so whole games replay
//!    deterministically under test.
//!
//! ## Modules
//!
//! - `core`: moves, seats, state, configuration, RNG
//! - `rules`: move validation, round resolution, state transition
//! - `policy`: opponent move selection (uniform random, scripted)
//! - `game`: per-round orchestration driving the pieces

pub mod core;
pub mod game;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameState, Move, Player, DEFAULT_MAX_ROUNDS};

pub use crate::game::{Referee, RoundReport};

pub use crate::policy::{MovePolicy, ScriptedPolicy, UniformPolicy};

pub use crate::rules::{apply, resolve, validate, MoveError, RoundOutcome, Winner};
