//! Game constants and match configuration.
//!
//! The board and die are fixed: a six-sided die, 100 points to win and a
//! 25-point greed cap for computer players. Only the seat assignment, the
//! termination mode and the die seed vary between matches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Strategy;

/// Score at which a player wins.
pub const TARGET_SCORE: u32 = 100;

/// Most points a computer player tries to bank in one turn.
pub const TURN_CAP: u32 = 25;

/// Face that busts the turn.
pub const BUST_FACE: u8 = 1;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Wall-clock budget for a timed match.
pub const TIME_LIMIT: Duration = Duration::from_secs(60);

/// Display names for the two seats.
pub const PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Complete match configuration.
///
/// Built from the command line by the binary; tests build it directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Strategy for the first seat.
    pub player1: Strategy,

    /// Strategy for the second seat.
    pub player2: Strategy,

    /// End the match on the clock as well as on score.
    pub timed: bool,

    /// Die seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl MatchConfig {
    /// Create an untimed configuration with an unseeded die.
    pub fn new(player1: Strategy, player2: Strategy) -> Self {
        Self {
            player1,
            player2,
            timed: false,
            seed: None,
        }
    }

    /// Enable or disable the clock.
    #[must_use]
    pub fn with_timed(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }

    /// Fix the die seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Strategies in seat order.
    #[must_use]
    pub fn strategies(&self) -> [Strategy; 2] {
        [self.player1, self.player2]
    }
}
