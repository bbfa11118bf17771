//! Turn-level actions and roll outcomes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::BUST_FACE;
use crate::error::PigError;

/// A human player's choice at each step of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Roll the die again.
    Roll,
    /// Bank the running total and end the turn.
    Hold,
}

impl FromStr for Decision {
    type Err = PigError;

    /// Accepts `r`/`roll` and `h`/`hold`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "r" | "roll" => Ok(Decision::Roll),
            "h" | "hold" => Ok(Decision::Hold),
            _ => Err(PigError::InvalidDecision(token.to_string())),
        }
    }
}

/// Result of a single roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// The turn's running total is forfeited.
    Bust,
    /// Points added to the running total.
    Value(u8),
}

impl RollOutcome {
    /// Classify a die face.
    #[must_use]
    pub fn from_face(face: u8) -> Self {
        if face == BUST_FACE {
            RollOutcome::Bust
        } else {
            RollOutcome::Value(face)
        }
    }
}
