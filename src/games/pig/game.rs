//! Score-limited Pig match.

use serde::{Deserialize, Serialize};

use crate::core::{
    Die, GameEvent, MatchConfig, Player, PlayerId, PlayerPair, Prompter, Reporter, Strategy,
    PLAYER_NAMES, TARGET_SCORE,
};
use crate::error::Result;
use crate::rules::{GameResult, Match, TurnEngine, TurnRecord};

/// Two players alternating turns until one reaches the target score.
pub struct PigGame<D: Die, P: Prompter, R: Reporter> {
    players: PlayerPair<Player>,
    current: PlayerId,
    die: D,
    prompter: P,
    reporter: R,
    history: Vec<TurnRecord>,
}

/// End-of-match snapshot, logged as JSON by the binary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub result: Option<GameResult>,
    pub players: PlayerPair<Player>,
    pub turns: Vec<TurnRecord>,
}

/// Builder for creating a PigGame.
#[derive(Clone, Debug)]
pub struct PigGameBuilder {
    strategies: [Strategy; 2],
    scores: [u32; 2],
}

impl Default for PigGameBuilder {
    fn default() -> Self {
        Self {
            strategies: [Strategy::Computer, Strategy::Computer],
            scores: [0, 0],
        }
    }
}

impl PigGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat strategies from a match configuration.
    pub fn from_config(config: &MatchConfig) -> Self {
        Self {
            strategies: config.strategies(),
            ..Self::default()
        }
    }

    pub fn player1(mut self, strategy: Strategy) -> Self {
        self.strategies[0] = strategy;
        self
    }

    pub fn player2(mut self, strategy: Strategy) -> Self {
        self.strategies[1] = strategy;
        self
    }

    /// Resume from non-zero scores.
    pub fn starting_scores(mut self, first: u32, second: u32) -> Self {
        self.scores = [first, second];
        self
    }

    /// Build the game around its die and collaborators.
    pub fn build<D: Die, P: Prompter, R: Reporter>(
        self,
        die: D,
        prompter: P,
        reporter: R,
    ) -> PigGame<D, P, R> {
        let players = PlayerPair::from_fn(|id| {
            Player::new(PLAYER_NAMES[id.index()], self.strategies[id.index()])
                .with_score(self.scores[id.index()])
        });

        PigGame {
            players,
            current: PlayerId::FIRST,
            die,
            prompter,
            reporter,
            history: Vec::new(),
        }
    }
}

impl<D: Die, P: Prompter, R: Reporter> PigGame<D, P, R> {
    /// Play turns until a player reaches the target, then announce the winner.
    pub fn run_to_completion(&mut self) -> Result<GameResult> {
        while !self.is_over() {
            self.play_turn()?;
        }

        // Only one score moves per turn, so exactly one player can be over the line.
        let winner = if self.players[PlayerId::FIRST].score() >= TARGET_SCORE {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        };
        let result = GameResult::Winner(winner);
        log::info!("{} wins after {} turns", self.players[winner].name(), self.history.len());
        self.reporter.report(result.event(&self.players));
        Ok(result)
    }

    /// The threshold winner, once there is one.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        self.players
            .iter()
            .find(|(_, p)| p.score() >= TARGET_SCORE)
            .map(|(id, _)| GameResult::Winner(id))
    }

    /// Every turn resolved so far.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    #[must_use]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    #[must_use]
    pub fn die(&self) -> &D {
        &self.die
    }

    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            result: self.winner(),
            players: self.players.clone(),
            turns: self.history.clone(),
        }
    }
}

impl<D: Die, P: Prompter, R: Reporter> Match for PigGame<D, P, R> {
    fn players(&self) -> &PlayerPair<Player> {
        &self.players
    }

    fn current_player(&self) -> PlayerId {
        self.current
    }

    fn play_turn(&mut self) -> Result<TurnRecord> {
        let id = self.current;
        let points = TurnEngine::new(&mut self.die, &mut self.prompter, &mut self.reporter)
            .resolve(&self.players[id])?;

        let player = &mut self.players[id];
        let score = player.bank(points);
        log::info!("{} banked {points}, score {score}", player.name());
        self.reporter.report(GameEvent::Score {
            name: player.name().to_string(),
            score,
        });

        self.current = id.other();
        let record = TurnRecord { player: id, points, score };
        self.history.push(record);
        Ok(record)
    }

    fn report(&mut self, event: GameEvent) {
        self.reporter.report(event);
    }
}
