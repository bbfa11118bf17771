//! Core types: dice, players, decisions, events, configuration.
//!
//! Everything here is independent of how turns are resolved; the turn engine
//! and the match controllers build on these.

pub mod action;
pub mod config;
pub mod event;
pub mod player;
pub mod rng;

pub use action::{Decision, RollOutcome};
pub use config::{MatchConfig, BUST_FACE, DIE_FACES, PLAYER_NAMES, TARGET_SCORE, TIME_LIMIT, TURN_CAP};
pub use event::{GameEvent, NullReporter, Prompter, RecordingReporter, Reporter, ScriptedPrompter};
pub use player::{Player, PlayerId, PlayerPair, Strategy};
pub use rng::{Die, GameRng, ScriptedDie};
