//! Turn resolution.
//!
//! A turn rolls the die repeatedly, accumulating a running total. A 1 ends
//! the turn with nothing banked. Otherwise the turn ends when the player
//! holds: a human decides interactively, a computer player holds once the
//! running total reaches `stopping_bound`.

use crate::core::{
    Decision, Die, GameEvent, Player, Prompter, Reporter, RollOutcome, Strategy, TARGET_SCORE,
    TURN_CAP,
};
use crate::error::{PigError, Result};

/// Running total at which a computer player holds.
///
/// Never more than the cap, never more than the points still needed to win.
/// Zero once the player has reached the target.
#[must_use]
pub fn stopping_bound(score: u32) -> u32 {
    TURN_CAP.min(TARGET_SCORE.saturating_sub(score))
}

/// Resolves single turns against a die and the game's collaborators.
pub struct TurnEngine<'a, D: Die, P: Prompter, R: Reporter> {
    die: &'a mut D,
    prompter: &'a mut P,
    reporter: &'a mut R,
}

impl<'a, D: Die, P: Prompter, R: Reporter> TurnEngine<'a, D, P, R> {
    pub fn new(die: &'a mut D, prompter: &'a mut P, reporter: &'a mut R) -> Self {
        Self {
            die,
            prompter,
            reporter,
        }
    }

    /// Resolve a turn using the player's own strategy.
    pub fn resolve(&mut self, player: &Player) -> Result<u32> {
        match player.strategy() {
            Strategy::Human => self.resolve_human_turn(player),
            Strategy::Computer => Ok(self.resolve_automated_turn(player)),
        }
    }

    /// Prompt for roll/hold until the player holds or busts.
    ///
    /// Unrecognised input is reported and re-prompted; it never advances the
    /// turn. Fails only when the prompter runs out of input.
    pub fn resolve_human_turn(&mut self, player: &Player) -> Result<u32> {
        let name = player.name();
        let prompt = format!("{name}, roll or hold? (r/h): ");
        let mut total = 0u32;

        loop {
            let line = self.prompter.prompt(&prompt)?;
            let decision = match line.parse::<Decision>() {
                Ok(decision) => decision,
                Err(PigError::InvalidDecision(input)) => {
                    log::warn!("{name}: rejected input {input:?}");
                    self.reporter.report(GameEvent::InvalidChoice { input });
                    continue;
                }
                Err(other) => return Err(other),
            };
            log::debug!("{name} chose {decision:?} at running total {total}");

            match decision {
                Decision::Roll => match self.roll(name, false) {
                    RollOutcome::Bust => return Ok(0),
                    RollOutcome::Value(face) => {
                        total += u32::from(face);
                        self.reporter.report(GameEvent::TurnTotal {
                            name: name.to_string(),
                            total,
                        });
                    }
                },
                Decision::Hold => {
                    self.hold(name, total);
                    return Ok(total);
                }
            }
        }
    }

    /// Roll until the running total reaches `stopping_bound(score)` or a 1 comes up.
    ///
    /// A player already at the target holds immediately with 0 and never rolls.
    pub fn resolve_automated_turn(&mut self, player: &Player) -> u32 {
        let name = player.name();
        let bound = stopping_bound(player.score());
        let mut total = 0u32;
        log::debug!("{name} rolls toward {bound} from score {}", player.score());

        while total < bound {
            match self.roll(name, true) {
                RollOutcome::Bust => return 0,
                RollOutcome::Value(face) => total += u32::from(face),
            }
        }

        self.hold(name, total);
        total
    }

    fn roll(&mut self, name: &str, computer: bool) -> RollOutcome {
        let face = self.die.roll();
        log::debug!("{name} rolled {face}");
        self.reporter.report(GameEvent::Rolled {
            name: name.to_string(),
            face,
            computer,
        });

        let outcome = RollOutcome::from_face(face);
        if outcome == RollOutcome::Bust {
            self.reporter.report(GameEvent::Busted {
                name: name.to_string(),
            });
        }
        outcome
    }

    fn hold(&mut self, name: &str, total: u32) {
        self.reporter.report(GameEvent::Held {
            name: name.to_string(),
            total,
        });
    }
}
