//! The game engine: board, turn and history for one game session.

use crate::action::Move;
use crate::config::{BoardConfig, TerminalPolicy};
use crate::error::EngineError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::phases::GameStatus;
use crate::render::{Glyphs, render};
use crate::rules::{self, Line};
use crate::types::{Board, Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// State machine for a single game.
///
/// Created fresh per session and mutated in place by each move. A restart
/// builds a new engine rather than clearing this one. Termination is
/// advisory unless the config says [`TerminalPolicy::Enforced`]: with the
/// default policy the engine keeps accepting moves after a win or draw and
/// the caller decides when to stop.
///
/// Deserialized snapshots are checked: the board must match the config and,
/// unless a mark was overwritten, the history must replay to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameEngine")]
pub struct GameEngine {
    config: BoardConfig,
    board: Board,
    to_move: Player,
    history: Vec<Move>,
    /// Set once an unchecked move overwrote a mark; history replay no longer
    /// reproduces the board after that.
    overwritten: bool,
}

impl GameEngine {
    /// Creates a game with an empty board and Player One to move.
    #[instrument]
    pub fn new(config: BoardConfig) -> Self {
        debug!("Starting new game");
        Self {
            board: Board::new(config.size()),
            config,
            to_move: Player::One,
            history: Vec::new(),
            overwritten: false,
        }
    }

    /// Creates a game on an `size × size` board with the conventional win length.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] when `size` is zero.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, EngineError> {
        Ok(Self::new(BoardConfig::for_size(size)?))
    }

    /// Returns the configuration the game was built with.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.config.size()
    }

    /// Consecutive marks needed to win.
    pub fn win_length(&self) -> usize {
        self.config.win_length()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player about to move.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the player who made the most recent move, if any.
    pub fn last_mover(&self) -> Option<Player> {
        self.history.last().map(Move::player)
    }

    /// Lists the open cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.board.empty_cells()
    }

    /// Places the current player's mark and passes the turn.
    ///
    /// On failure the engine is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`EngineError::OutOfBounds`] when the coordinate is off the board.
    /// - [`EngineError::CellOccupied`] when the cell already holds a mark.
    /// - [`EngineError::GameOver`] when the game is won or drawn and the
    ///   terminal policy is [`TerminalPolicy::Enforced`].
    /// - [`EngineError::InvariantViolation`] in debug builds if the move left
    ///   the engine inconsistent. The move is rolled back.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn apply_move(&mut self, coord: Coord) -> Result<Move, EngineError> {
        self.ensure_in_play()?;

        match self.board.get(coord) {
            None => {
                return Err(EngineError::OutOfBounds {
                    coord,
                    size: self.size(),
                });
            }
            Some(Cell::Occupied(_)) => return Err(EngineError::CellOccupied(coord)),
            Some(Cell::Empty) => {}
        }

        let snapshot = cfg!(debug_assertions).then(|| self.clone());
        let action = self.place(coord)?;

        if let Some(snapshot) = snapshot
            && let Err(e) = self.verify()
        {
            *self = snapshot;
            return Err(e);
        }

        Ok(action)
    }

    /// Places the current player's mark without checking occupancy.
    ///
    /// An occupied cell is overwritten. The turn still passes. Only the
    /// bounds and the terminal policy are checked.
    ///
    /// # Errors
    ///
    /// - [`EngineError::OutOfBounds`] when the coordinate is off the board.
    /// - [`EngineError::GameOver`] under [`TerminalPolicy::Enforced`].
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn apply_move_unchecked(&mut self, coord: Coord) -> Result<Move, EngineError> {
        self.ensure_in_play()?;

        if let Some(Cell::Occupied(previous)) = self.board.get(coord) {
            warn!(%coord, ?previous, "Overwriting occupied cell");
            self.overwritten = true;
        }

        self.place(coord)
    }

    /// Checks if the player who just moved owns a line of the win length.
    ///
    /// Before any move this checks Player Two, who owns no cells.
    #[instrument(skip(self))]
    pub fn check_win(&self) -> bool {
        self.winning_line().is_some()
    }

    /// Returns the first winning line of the player who just moved.
    #[instrument(skip(self))]
    pub fn winning_line(&self) -> Option<Line> {
        rules::find_line(&self.board, self.win_length(), self.to_move.opponent())
    }

    /// Checks if every cell holds a mark.
    ///
    /// A full board can also be a won board; evaluate [`Self::check_win`]
    /// first, or use [`Self::status`].
    #[instrument(skip(self))]
    pub fn check_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Current status, with a win taking precedence over a full board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if self.check_win() {
            GameStatus::Won(self.to_move.opponent())
        } else if self.check_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Renders the board with the given glyph table.
    pub fn render(&self, glyphs: &Glyphs) -> String {
        render(&self.board, glyphs)
    }

    fn ensure_in_play(&self) -> Result<(), EngineError> {
        if self.config.terminal_policy() == TerminalPolicy::Enforced && self.is_terminal() {
            debug!("Rejected move after game end");
            return Err(EngineError::GameOver);
        }
        Ok(())
    }

    fn place(&mut self, coord: Coord) -> Result<Move, EngineError> {
        let player = self.to_move;
        self.board.set(coord, Cell::Occupied(player))?;

        let action = Move::new(player, coord);
        self.history.push(action);
        self.to_move = player.opponent();

        debug!(%action, "Move applied");
        Ok(action)
    }

    fn verify(&self) -> Result<(), EngineError> {
        if self.overwritten {
            return Ok(());
        }

        EngineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[derive(Deserialize)]
struct RawGameEngine {
    config: BoardConfig,
    board: Board,
    to_move: Player,
    history: Vec<Move>,
    overwritten: bool,
}

impl TryFrom<RawGameEngine> for GameEngine {
    type Error = EngineError;

    fn try_from(raw: RawGameEngine) -> Result<Self, Self::Error> {
        if raw.board.size() != raw.config.size() {
            return Err(EngineError::InvalidSnapshot(format!(
                "{}x{} board for a size {} config",
                raw.board.size(),
                raw.board.size(),
                raw.config.size()
            )));
        }

        let game = Self {
            config: raw.config,
            board: raw.board,
            to_move: raw.to_move,
            history: raw.history,
            overwritten: raw.overwritten,
        };
        game.verify()?;
        Ok(game)
    }
}

impl std::fmt::Display for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&Glyphs::default()))
    }
}
