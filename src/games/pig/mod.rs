//! Pig, the dice game.
//!
//! - Two players take turns rolling a single die
//! - Each roll adds its face to the turn's running total
//! - A 1 ends the turn and forfeits the running total
//! - Holding banks the running total into the player's score
//! - First player to 100 wins
//!
//! `PigGame` is the score-limited match; wrap it in `timed::TimedGame` to
//! also end on the clock.

mod game;

pub use game::{MatchSummary, PigGame, PigGameBuilder};
