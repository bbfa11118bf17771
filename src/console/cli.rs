//! Command-line arguments.

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use log::LevelFilter;

use crate::core::{MatchConfig, Strategy};

/// Play Pig against a friend or the computer.
#[derive(Debug, Parser)]
#[command(name = "pig", version, about)]
pub struct Args {
    /// Player 1 type
    #[arg(
        long,
        value_name = "TYPE",
        value_parser = PossibleValuesParser::new(["human", "computer"]).try_map(|s| s.parse::<Strategy>()),
    )]
    pub player1: Strategy,

    /// Player 2 type
    #[arg(
        long,
        value_name = "TYPE",
        value_parser = PossibleValuesParser::new(["human", "computer"]).try_map(|s| s.parse::<Strategy>()),
    )]
    pub player2: Strategy,

    /// Enable timed game mode (60 seconds)
    #[arg(long)]
    pub timed: bool,

    /// Seed the die for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The match these arguments describe.
    #[must_use]
    pub fn config(&self) -> MatchConfig {
        let config = MatchConfig::new(self.player1, self.player2).with_timed(self.timed);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["pig", "--player1", "human", "--player2", "computer"]).unwrap();

        assert_eq!(args.player1, Strategy::Human);
        assert_eq!(args.player2, Strategy::Computer);
        assert!(!args.timed);
        assert_eq!(args.config(), MatchConfig::new(Strategy::Human, Strategy::Computer));
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "pig", "--player1", "computer", "--player2", "computer", "--timed", "--seed", "9", "-vv",
        ])
        .unwrap();

        let config = args.config();
        assert!(config.timed);
        assert_eq!(config.seed, Some(9));
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_player_type_rejected() {
        let err = Args::try_parse_from(["pig", "--player1", "robot", "--player2", "human"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(err.to_string().contains("'robot'"));
    }

    #[test]
    fn test_help_lists_player_types() {
        let help = Args::command().render_help().to_string();
        assert!(help.contains("[possible values: human, computer]"));
    }

    #[test]
    fn test_players_required() {
        let err = Args::try_parse_from(["pig", "--player1", "human"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
