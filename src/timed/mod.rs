//! Timed matches.
//!
//! `TimedGame` decorates any `Match` with a wall-clock budget (60 seconds by
//! default). When the budget runs out the winner is decided on current
//! scores, so unlike a score-limited match a timed match can end in a tie.

pub mod clock;
pub mod game;

pub use clock::{Clock, ManualClock, SystemClock};
pub use game::TimedGame;
