//! Game orchestration: the referee driving rounds to completion.

pub mod referee;

pub use referee::{Referee, RoundReport};
