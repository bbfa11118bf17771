use std::process::ExitCode;

use clap::Parser;

use pig_dice::console::{logging, Args, LinePrompter, LineReporter};
use pig_dice::core::GameRng;
use pig_dice::games::pig::PigGameBuilder;
use pig_dice::timed::{SystemClock, TimedGame};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_level());

    let config = args.config();
    let die = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!(
        "starting {} game: {} vs {}, seed {}",
        if config.timed { "timed" } else { "untimed" },
        config.player1,
        config.player2,
        die.seed()
    );

    let mut game = PigGameBuilder::from_config(&config).build(
        die,
        LinePrompter::stdio(),
        LineReporter::stdout(),
    );

    let outcome = if config.timed {
        let mut timed = TimedGame::new(game, SystemClock);
        let outcome = timed.play();
        game = timed.into_inner();
        outcome
    } else {
        game.run_to_completion()
    };

    let mut summary = game.summary();
    if let Ok(result) = &outcome {
        summary.result = Some(*result);
    }
    match serde_json::to_string(&summary) {
        Ok(json) => log::debug!("match summary: {json}"),
        Err(e) => log::warn!("failed to serialize match summary: {e}"),
    }

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("match aborted: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
