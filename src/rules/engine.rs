//! Match trait and results.
//!
//! `Match` is the turn-stepping contract shared by the plain score-limited
//! game and the timed wrapper:
//! - Resolve one turn for the current player
//! - Report whether the score threshold has been reached
//! - Expose the players for winner determination

use serde::{Deserialize, Serialize};

use crate::core::{GameEvent, Player, PlayerId, PlayerPair, TARGET_SCORE};
use crate::error::Result;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores when the clock ran out.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Higher score wins; equal scores tie.
    #[must_use]
    pub fn by_score(players: &PlayerPair<Player>) -> Self {
        let first = players[PlayerId::FIRST].score();
        let second = players[PlayerId::SECOND].score();
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// The announcement for this result.
    #[must_use]
    pub fn event(&self, players: &PlayerPair<Player>) -> GameEvent {
        match *self {
            GameResult::Winner(id) => GameEvent::Winner {
                name: players[id].name().to_string(),
                score: players[id].score(),
            },
            GameResult::Tie => GameEvent::Tie,
        }
    }
}

/// One resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who played the turn.
    pub player: PlayerId,
    /// Points banked this turn (0 on a bust).
    pub points: u32,
    /// The player's score after banking.
    pub score: u32,
}

/// Turn-stepping contract.
///
/// ## Implementation Notes
///
/// - `play_turn`: Must flip `current_player` exactly once per call
/// - `is_over`: Defaults to the score threshold
/// - `report`: Lets wrappers announce through the same sink
pub trait Match {
    /// Both players in seat order.
    fn players(&self) -> &PlayerPair<Player>;

    /// Whose turn is next.
    fn current_player(&self) -> PlayerId;

    /// Resolve one turn for the current player and pass play to the other.
    fn play_turn(&mut self) -> Result<TurnRecord>;

    /// Send an event to the match's reporter.
    fn report(&mut self, event: GameEvent);

    /// True once either player has reached the target score.
    fn is_over(&self) -> bool {
        self.players().values().any(|p| p.score() >= TARGET_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Strategy;

    fn players(first: u32, second: u32) -> PlayerPair<Player> {
        PlayerPair::new(
            Player::new("Player 1", Strategy::Computer).with_score(first),
            Player::new("Player 2", Strategy::Human).with_score(second),
        )
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::SECOND);
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));

        let tie = GameResult::Tie;
        assert!(!tie.is_winner(PlayerId::FIRST));
        assert!(!tie.is_winner(PlayerId::SECOND));
    }

    #[test]
    fn test_by_score() {
        assert_eq!(GameResult::by_score(&players(40, 12)), GameResult::Winner(PlayerId::FIRST));
        assert_eq!(GameResult::by_score(&players(12, 40)), GameResult::Winner(PlayerId::SECOND));
        assert_eq!(GameResult::by_score(&players(33, 33)), GameResult::Tie);
        assert_eq!(GameResult::by_score(&players(0, 0)), GameResult::Tie);
    }

    #[test]
    fn test_result_event() {
        let pair = players(104, 60);
        assert_eq!(
            GameResult::Winner(PlayerId::FIRST).event(&pair),
            GameEvent::Winner { name: "Player 1".into(), score: 104 }
        );
        assert_eq!(GameResult::Tie.event(&pair), GameEvent::Tie);
    }

    #[test]
    fn test_result_serde() {
        let result = GameResult::Winner(PlayerId::SECOND);
        let json = serde_json::to_string(&result).unwrap();
        let back: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
