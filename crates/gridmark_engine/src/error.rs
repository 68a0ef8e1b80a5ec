//! Engine error types.

use crate::types::Coord;

/// Error that can occur when configuring an engine or applying a move.
///
/// Every variant is recoverable: a failed call leaves the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Row or column outside `[0, size)`.
    #[display("Cell {coord} is outside the {size}x{size} board")]
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
        /// Board side length.
        size: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Coord),

    /// Board size or win length cannot form a playable game.
    #[display("Invalid configuration: size {size}, win length {win_length}")]
    InvalidConfiguration {
        /// Requested board side length.
        size: usize,
        /// Requested run length.
        win_length: usize,
    },

    /// A terminal condition holds and the engine enforces it.
    #[display("Game is already over")]
    GameOver,

    /// A deserialized snapshot does not describe a reachable game.
    #[display("Invalid snapshot: {_0}")]
    InvalidSnapshot(String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
