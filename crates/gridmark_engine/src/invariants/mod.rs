//! First-class invariants for the engine.
//!
//! Invariants are logical properties that must hold throughout a game.
//! Checked moves verify them in debug builds, and they can be tested
//! independently.

pub mod alternating_turn;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardConfig, Cell, Coord, GameEngine, Player};

    fn engine() -> GameEngine {
        GameEngine::new(BoardConfig::new(3, 3).unwrap())
    }

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(EngineInvariants::check_all(&engine()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = engine();
        for coord in [(0, 0), (1, 1), (0, 2)] {
            game.apply_move(Coord::from(coord)).unwrap();
        }
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = engine();
        game.apply_move(Coord::new(1, 1)).unwrap();
        game.board_mut()
            .set(Coord::new(0, 0), Cell::Occupied(Player::Two))
            .unwrap();

        let violations = EngineInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            MonotonicBoardInvariant::description()
        );
    }
}
