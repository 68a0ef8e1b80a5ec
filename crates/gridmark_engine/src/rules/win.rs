//! Win detection: runs of `k` marks in four directions.

use crate::types::{Board, Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Direction a line extends from its start cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Increasing row, decreasing column (bottom-left to top-right read backwards).
    AntiDiagonal,
}

impl Direction {
    /// Checks if a line of `length` cells starting at `start` stays on a board
    /// of side `size`.
    pub fn fits(self, start: Coord, size: usize, length: usize) -> bool {
        if start.row >= size || start.col >= size {
            return false;
        }
        let room_right = size - start.col >= length;
        let room_down = size - start.row >= length;
        let room_left = start.col + 1 >= length;

        match self {
            Direction::Horizontal => room_right,
            Direction::Vertical => room_down,
            Direction::MainDiagonal => room_right && room_down,
            Direction::AntiDiagonal => room_left && room_down,
        }
    }

    /// Coordinate `offset` steps from `start`.
    ///
    /// Callers guarantee the step stays on the board via [`Direction::fits`].
    fn step(self, start: Coord, offset: usize) -> Coord {
        match self {
            Direction::Horizontal => Coord::new(start.row, start.col + offset),
            Direction::Vertical => Coord::new(start.row + offset, start.col),
            Direction::MainDiagonal => Coord::new(start.row + offset, start.col + offset),
            Direction::AntiDiagonal => Coord::new(start.row + offset, start.col - offset),
        }
    }
}

/// A run of same-owner cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// First cell of the run.
    pub start: Coord,
    /// Direction the run extends.
    pub direction: Direction,
    /// Number of cells in the run.
    pub length: usize,
    /// Player owning every cell of the run.
    pub owner: Player,
}

impl Line {
    /// Coordinates covered by the line, from the start cell outward.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(|offset| self.direction.step(self.start, offset))
    }
}

/// Finds a line of exactly `length` cells owned by `player`.
///
/// Scans every start cell in row-major order and every direction whose run
/// stays on the board. Returns the first qualifying line, or `None`.
/// A zero `length` never matches.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_line(board: &Board, length: usize, player: Player) -> Option<Line> {
    if length == 0 {
        return None;
    }

    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let start = Coord::new(row, col);
            for direction in Direction::iter() {
                if !direction.fits(start, size, length) {
                    continue;
                }
                let owned = (0..length).all(|offset| {
                    board.get(direction.step(start, offset)) == Some(Cell::Occupied(player))
                });
                if owned {
                    trace!(%start, ?direction, "Found winning line");
                    return Some(Line {
                        start,
                        direction,
                        length,
                        owner: player,
                    });
                }
            }
        }
    }

    None
}

/// Checks if either player owns a line of `length` cells.
///
/// Player One is checked first.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, length: usize) -> Option<Player> {
    Player::iter().find(|player| find_line(board, length, *player).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: &mut Board, player: Player, coords: &[(usize, usize)]) {
        for &(row, col) in coords {
            board
                .set(Coord::new(row, col), Cell::Occupied(player))
                .unwrap();
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        assert_eq!(check_winner(&board, 3), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(3);
        mark(&mut board, Player::One, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(check_winner(&board, 3), Some(Player::One));

        let line = find_line(&board, 3, Player::One).unwrap();
        assert_eq!(line.start, Coord::new(0, 0));
        assert_eq!(line.direction, Direction::Horizontal);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new(4);
        mark(&mut board, Player::Two, &[(1, 2), (2, 1), (3, 0)]);
        let line = find_line(&board, 3, Player::Two).unwrap();
        assert_eq!(line.direction, Direction::AntiDiagonal);
        assert_eq!(line.start, Coord::new(1, 2));
        assert_eq!(
            line.cells().collect::<Vec<_>>(),
            vec![Coord::new(1, 2), Coord::new(2, 1), Coord::new(3, 0)]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new(3);
        mark(&mut board, Player::One, &[(0, 0), (0, 1)]);
        assert_eq!(check_winner(&board, 3), None);
    }

    #[test]
    fn test_broken_run_is_not_a_line() {
        let mut board = Board::new(5);
        mark(&mut board, Player::One, &[(2, 0), (2, 1), (2, 3), (2, 4)]);
        mark(&mut board, Player::Two, &[(2, 2)]);
        assert_eq!(find_line(&board, 4, Player::One), None);
    }

    #[test]
    fn test_run_does_not_wrap_rows() {
        // (0,3) and (1,0) are adjacent in row-major storage only
        let mut board = Board::new(4);
        mark(&mut board, Player::One, &[(0, 2), (0, 3), (1, 0)]);
        assert_eq!(find_line(&board, 3, Player::One), None);
    }

    #[test]
    fn test_zero_length_never_matches() {
        let board = Board::new(3);
        assert_eq!(find_line(&board, 0, Player::One), None);
    }

    #[test]
    fn test_fits_bounds() {
        let start = Coord::new(1, 1);
        assert!(Direction::Horizontal.fits(start, 4, 3));
        assert!(!Direction::Horizontal.fits(start, 3, 3));
        assert!(!Direction::AntiDiagonal.fits(start, 4, 3));
        assert!(Direction::AntiDiagonal.fits(Coord::new(1, 2), 4, 3));
        assert!(!Direction::Vertical.fits(Coord::new(4, 0), 4, 1));
    }
}
