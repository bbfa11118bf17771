//! Game events and the collaborators that carry them in and out.
//!
//! The engine never touches a terminal. Status goes out through a
//! `Reporter` as `GameEvent`s, and human decisions come in as raw lines
//! from a `Prompter`. The console module supplies stdin/stdout versions;
//! `RecordingReporter` and `ScriptedPrompter` are in-memory versions for
//! tests and scripted play.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PigError, Result};

/// Something worth telling the players about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A die was rolled.
    Rolled { name: String, face: u8, computer: bool },
    /// A 1 was rolled and the running total is lost.
    Busted { name: String },
    /// Running total after a successful human roll.
    TurnTotal { name: String, total: u32 },
    /// The player banked the running total.
    Held { name: String, total: u32 },
    /// A human entered something other than roll or hold.
    InvalidChoice { input: String },
    /// Cumulative score after a turn.
    Score { name: String, score: u32 },
    /// The clock ran out in a timed match.
    TimeUp,
    /// The match has a winner.
    Winner { name: String, score: u32 },
    /// The clock ran out with equal scores.
    Tie,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Rolled { name, face, computer: false } => {
                write!(f, "{name} rolled: {face}")
            }
            GameEvent::Rolled { name, face, computer: true } => {
                write!(f, "{name} (Computer) rolled: {face}")
            }
            GameEvent::Busted { .. } => f.write_str("Rolled a 1! Turn ends with no points added."),
            GameEvent::TurnTotal { name, total } => write!(f, "{name}'s turn total: {total}"),
            GameEvent::Held { name, total } => {
                write!(f, "{name} holds with a turn total of {total}.")
            }
            GameEvent::InvalidChoice { .. } => {
                f.write_str("Invalid choice. Please enter 'r' to roll or 'h' to hold.")
            }
            GameEvent::Score { name, score } => write!(f, "{name}'s total score: {score}"),
            GameEvent::TimeUp => {
                f.write_str("Time's up! Determining the winner based on current scores...")
            }
            GameEvent::Winner { name, score } => {
                write!(f, "The winner is {name} with a score of {score}!")
            }
            GameEvent::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// Sink for status messages.
pub trait Reporter {
    fn report(&mut self, event: GameEvent);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, event: GameEvent) {
        (**self).report(event);
    }
}

/// Source of line-oriented human input.
pub trait Prompter {
    /// Show `prompt` and return the next line.
    ///
    /// Returns `PigError::InputClosed` when no more input will arrive.
    fn prompt(&mut self, prompt: &str) -> Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        (**self).prompt(prompt)
    }
}

/// Reporter that keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    events: Vec<GameEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Rendered messages, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Reporter that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _event: GameEvent) {}
}

/// Prompter that answers from a fixed list of lines.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompter {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter that returns `lines` in order, then reports closed input.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(PigError::InputClosed)
    }
}
