//! Core domain types: players, cells, coordinates and the board.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// First player (moves first).
    One,
    /// Second player.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric identity of the player: 1 or 2. Zero is reserved for empty cells.
    pub fn index(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// A single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Zero-based board coordinate. Rows grow downward, columns grow rightward.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Square `n × n` board.
///
/// Cells are stored row-major. The size is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows. [`crate::BoardConfig::new`] rejects
    /// such sizes.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.size + coord.col)
    }

    /// Gets the cell at the coordinate, or `None` when it is off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Sets the cell at the coordinate, overwriting whatever was there.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] when the coordinate is off the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), EngineError> {
        let size = self.size;
        let i = self
            .index(coord)
            .ok_or(EngineError::OutOfBounds { coord, size })?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Checks if the cell at the coordinate is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks panics on zero; a zero-sized board has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Lists empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
            .collect()
    }
}

#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = EngineError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.size.checked_mul(raw.size) != Some(raw.cells.len()) {
            return Err(EngineError::InvalidSnapshot(format!(
                "{} cells for a {}x{} board",
                raw.cells.len(),
                raw.size,
                raw.size
            )));
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}
