//! Game rules: turn resolution and the match contract.
//!
//! - `turn`: the bust rule, human prompting and the computer stopping policy
//! - `engine`: the `Match` trait, `GameResult` and `TurnRecord`

pub mod engine;
pub mod turn;

pub use engine::{GameResult, Match, TurnRecord};
pub use turn::{stopping_bound, TurnEngine};
