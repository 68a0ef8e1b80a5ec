//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Cell, GameEngine};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must only ever target
/// empty cells and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::new(game.board().size());

        for action in game.history() {
            if !reconstructed.is_empty(action.coord) {
                return false;
            }
            if reconstructed
                .set(action.coord, Cell::Occupied(action.player))
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardConfig, Coord, Player};

    fn engine() -> GameEngine {
        GameEngine::new(BoardConfig::for_size(3).unwrap())
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&engine()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut game = engine();
        for coord in [(0, 0), (1, 1), (0, 2), (2, 0)] {
            game.apply_move(Coord::from(coord)).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut game = engine();
        game.apply_move(Coord::new(1, 1)).unwrap();
        game.board_mut()
            .set(Coord::new(1, 1), Cell::Occupied(Player::Two))
            .unwrap();
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_unchecked_overwrite_violates() {
        let mut game = engine();
        game.apply_move_unchecked(Coord::new(0, 0)).unwrap();
        game.apply_move_unchecked(Coord::new(0, 0)).unwrap();
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
