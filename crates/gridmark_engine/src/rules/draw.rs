//! Draw detection.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw; callers must rule out a
/// win first since a full board can also hold a winning line.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::types::{Cell, Coord, Player};

    fn is_draw(board: &Board, length: usize) -> bool {
        is_full(board) && check_winner(board, length).is_none()
    }

    fn fill(board: &mut Board, rows: &[&str]) {
        for (row, text) in rows.iter().enumerate() {
            for (col, ch) in text.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Occupied(Player::One),
                    'O' => Cell::Occupied(Player::Two),
                    _ => Cell::Empty,
                };
                board.set(Coord::new(row, col), cell).unwrap();
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board
            .set(Coord::new(1, 1), Cell::Occupied(Player::One))
            .unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new(3);
        fill(&mut board, &["XOX", "OXX", "OXO"]);
        assert!(is_draw(&board, 3));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new(3);
        fill(&mut board, &["XXX", "OOX", "OXO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board, 3));
    }
}
