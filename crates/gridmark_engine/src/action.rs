//! First-class move records.

use crate::types::{Coord, Player};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a coordinate.
///
/// Returned by the engine after it applies a move and kept in the history,
/// which the invariants replay to verify the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} -> {}", self.player.index(), self.coord)
    }
}
