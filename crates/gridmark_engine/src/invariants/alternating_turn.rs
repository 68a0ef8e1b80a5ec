//! Alternating turn invariant: players move One, Two, One, Two, ...

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: Players alternate turns.
///
/// History must start with Player One and never repeat a player, and the
/// player to move must match the history's parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::One
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };

        game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (One, Two, One, ...)"
    }
}
