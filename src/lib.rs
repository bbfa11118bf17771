//! # pig-dice
//!
//! The dice game Pig for two players, human or computer.
//!
//! ## Rules
//!
//! On your turn, roll a die as many times as you like. Each roll adds its
//! face to the turn's running total; rolling a 1 ends the turn and loses the
//! running total. Holding banks the running total. First to 100 wins.
//! Computer players keep rolling until they have `min(25, 100 - score)`
//! points for the turn.
//!
//! In timed mode the match also ends after 60 seconds, and the higher score
//! wins (equal scores tie).
//!
//! ## Modules
//!
//! - `core`: Dice, players, decisions, events, configuration
//! - `rules`: Turn resolution and the `Match` contract
//! - `games`: The score-limited Pig match
//! - `timed`: Clock-limited wrapper over any `Match`
//! - `console`: CLI arguments, logging, stdin/stdout collaborators

pub mod console;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod timed;

// Re-export commonly used types
pub use crate::core::{
    Decision, Die, GameEvent, GameRng, MatchConfig, Player, PlayerId, PlayerPair, Prompter,
    Reporter, RollOutcome, Strategy,
};

pub use crate::error::{PigError, Result};

pub use crate::games::pig::{MatchSummary, PigGame, PigGameBuilder};

pub use crate::rules::{stopping_bound, GameResult, Match, TurnEngine, TurnRecord};

pub use crate::timed::{Clock, SystemClock, TimedGame};
