//! Gridmark engine - pure logic for square-board, k-in-a-row games.
//!
//! The engine owns an `n × n` board, the turn indicator and the move
//! history. It applies moves, rotates turns and answers win/draw queries.
//! It performs no I/O; presentation lives in [`render`] and in the
//! `gridmark` front end.
//!
//! # Example
//!
//! ```
//! use gridmark_engine::{BoardConfig, Coord, GameEngine, GameStatus, Player};
//!
//! # fn main() -> Result<(), gridmark_engine::EngineError> {
//! let mut game = GameEngine::new(BoardConfig::new(3, 3)?);
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.apply_move(Coord::new(row, col))?;
//! }
//! assert!(game.check_win());
//! assert_eq!(game.status(), GameStatus::Won(Player::One));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod error;
pub mod invariants;
mod phases;
pub mod render;
pub mod rules;
mod types;

pub use action::Move;
pub use config::{BoardConfig, TerminalPolicy};
pub use engine::GameEngine;
pub use error::EngineError;
pub use phases::GameStatus;
pub use render::{Glyphs, render};
pub use rules::{Direction, Line};
pub use types::{Board, Cell, Coord, Player};
