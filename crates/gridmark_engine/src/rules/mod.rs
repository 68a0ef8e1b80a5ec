//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so the engine, the invariants and tests can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Direction, Line, check_winner, find_line};
