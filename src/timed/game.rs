//! Clock-limited wrapper around a match.

use std::time::{Duration, Instant};

use super::clock::Clock;
use crate::core::{GameEvent, Player, PlayerId, PlayerPair, TIME_LIMIT};
use crate::error::Result;
use crate::rules::{GameResult, Match, TurnRecord};

/// A match that also ends when its time budget runs out.
///
/// The deadline is polled at turn boundaries only: a turn that has started
/// always finishes, and no new turn starts once the budget is spent.
pub struct TimedGame<M: Match, C: Clock> {
    inner: M,
    clock: C,
    started: Instant,
    limit: Duration,
}

impl<M: Match, C: Clock> TimedGame<M, C> {
    /// Wrap `inner`, starting the clock now with the standard budget.
    pub fn new(inner: M, clock: C) -> Self {
        let started = clock.now();
        Self {
            inner,
            clock,
            started,
            limit: TIME_LIMIT,
        }
    }

    /// Override the time budget.
    #[must_use]
    pub fn with_limit(mut self, limit: Duration) -> Self {
        self.limit = limit;
        self
    }

    /// Time since the wrapper was created.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started)
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Play until the clock runs out or a player reaches the target.
    ///
    /// The result is announced through the wrapped match's reporter.
    pub fn play(&mut self) -> Result<GameResult> {
        loop {
            if self.inner.is_over() {
                break;
            }

            let elapsed = self.elapsed();
            if elapsed >= self.limit {
                log::warn!("time limit reached after {:.1}s", elapsed.as_secs_f64());
                self.inner.report(GameEvent::TimeUp);
                break;
            }

            self.inner.play_turn()?;
        }

        let result = self.winner();
        log::info!("timed match finished: {result:?}");
        let event = result.event(self.inner.players());
        self.inner.report(event);
        Ok(result)
    }

    /// Higher score wins; equal scores tie.
    #[must_use]
    pub fn winner(&self) -> GameResult {
        GameResult::by_score(self.inner.players())
    }

    #[must_use]
    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Match, C: Clock> Match for TimedGame<M, C> {
    fn players(&self) -> &PlayerPair<Player> {
        self.inner.players()
    }

    fn current_player(&self) -> PlayerId {
        self.inner.current_player()
    }

    fn play_turn(&mut self) -> Result<TurnRecord> {
        self.inner.play_turn()
    }

    fn report(&mut self, event: GameEvent) {
        self.inner.report(event);
    }

    /// Over on score, or once the budget is spent.
    fn is_over(&self) -> bool {
        self.inner.is_over() || self.elapsed() >= self.limit
    }
}
