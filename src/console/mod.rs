//! Terminal front end: arguments, logging, and stdin/stdout collaborators.

pub mod cli;
pub mod logging;
pub mod terminal;

pub use cli::Args;
pub use terminal::{LinePrompter, LineReporter};
