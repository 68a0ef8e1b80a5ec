//! Game status derived from the board.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Current status of the game.
///
/// Computed on demand; a win takes precedence over a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The player who just moved completed a line.
    Won(Player),
    /// Board is full with no winning line.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player.index()),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_and_display() {
        assert_eq!(GameStatus::Won(Player::One).winner(), Some(Player::One));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(GameStatus::Draw.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
        assert_eq!(GameStatus::Won(Player::Two).to_string(), "Player 2 wins");
    }
}
