//! Stdin/stdout collaborators for interactive play.

use std::io::{self, BufRead, Write};

use crate::core::{GameEvent, Prompter, Reporter};
use crate::error::{PigError, Result};

/// Reads decisions line by line from a buffered reader, prompting on a writer.
pub struct LinePrompter<I: BufRead, O: Write> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> LinePrompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> Prompter for LinePrompter<I, O> {
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fail decision parsing like any other typo.
        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line)? {
            0 => Err(PigError::InputClosed),
            _ => Ok(String::from_utf8_lossy(&line)
                .trim_end_matches(['\r', '\n'])
                .to_string()),
        }
    }
}

/// Prints each event as one line.
pub struct LineReporter<O: Write> {
    output: O,
}

impl<O: Write> LineReporter<O> {
    pub fn new(output: O) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> O {
        self.output
    }
}

impl LineReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<O: Write> Reporter for LineReporter<O> {
    fn report(&mut self, event: GameEvent) {
        if let Err(e) = writeln!(self.output, "{event}") {
            log::error!("failed to write status: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, RecordingReporter, ScriptedDie, Strategy};
    use crate::rules::TurnEngine;

    #[test]
    fn test_line_prompter() {
        let input = b"r\r\nH\n".as_slice();
        let mut output = Vec::new();
        {
            let mut prompter = LinePrompter::new(input, &mut output);
            assert_eq!(prompter.prompt("go? ").unwrap(), "r");
            assert_eq!(prompter.prompt("go? ").unwrap(), "H");
            assert!(matches!(prompter.prompt("go? "), Err(PigError::InputClosed)));
        }
        assert_eq!(String::from_utf8(output).unwrap(), "go? go? go? ");
    }

    #[test]
    fn test_non_utf8_line_is_reprompted() {
        let input = b"\xff\xfe\nr\nh\n".as_slice();
        let mut prompter = LinePrompter::new(input, Vec::new());
        let mut die = ScriptedDie::always(4);
        let mut reporter = RecordingReporter::new();

        let total = TurnEngine::new(&mut die, &mut prompter, &mut reporter)
            .resolve_human_turn(&Player::new("Player 1", Strategy::Human))
            .unwrap();

        assert_eq!(total, 4);
        assert_eq!(die.rolls(), 1);
        assert!(matches!(
            reporter.events().first(),
            Some(GameEvent::InvalidChoice { .. })
        ));
    }

    #[test]
    fn test_line_reporter() {
        let mut reporter = LineReporter::new(Vec::new());
        reporter.report(GameEvent::Score { name: "Player 1".into(), score: 42 });
        reporter.report(GameEvent::Tie);

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "Player 1's total score: 42\nIt's a tie!\n");
    }
}
