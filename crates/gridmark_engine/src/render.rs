//! Text rendering of a board.
//!
//! The glyph table belongs to the presentation layer; the engine only
//! stores cells.

use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display strings for each cell state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Shown for empty cells.
    pub empty: String,
    /// Shown for Player One's marks.
    pub player_one: String,
    /// Shown for Player Two's marks.
    pub player_two: String,
}

impl Glyphs {
    /// Creates a glyph table.
    pub fn new(
        empty: impl Into<String>,
        player_one: impl Into<String>,
        player_two: impl Into<String>,
    ) -> Self {
        Self {
            empty: empty.into(),
            player_one: player_one.into(),
            player_two: player_two.into(),
        }
    }

    /// Glyph for a player's mark.
    pub fn player(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }

    /// Glyph for a cell.
    pub fn cell(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::Occupied(player) => self.player(player),
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(" ", "X", "O")
    }
}

/// Renders the board as a bordered grid.
///
/// ```text
/// +---+---+---+
/// | X |   | O |
/// +---+---+---+
/// ```
///
/// Every cell is followed by `" | "`, so each row line ends with a space.
#[instrument(skip_all, fields(size = board.size()))]
pub fn render(board: &Board, glyphs: &Glyphs) -> String {
    let border = format!("{}+\n", "+---".repeat(board.size()));
    let mut result = border.clone();
    for row in board.rows() {
        result.push_str("| ");
        for cell in row {
            result.push_str(glyphs.cell(*cell));
            result.push_str(" | ");
        }
        result.push('\n');
        result.push_str(&border);
    }
    result
}
