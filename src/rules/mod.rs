//! Game rules: the three core referee operations.
//!
//! Dependency order runs validator → resolver → updater. The game loop in
//! `crate::game` calls each exactly once per round:
//! - `validate`: normalize and check a raw submission
//! - `resolve`: decide the round from two settled moves
//! - `apply`: fold the outcome into the game state

pub mod resolve;
pub mod update;
pub mod validate;

pub use resolve::{resolve, RoundOutcome, Winner};
pub use update::apply;
pub use validate::{validate, MoveError};
