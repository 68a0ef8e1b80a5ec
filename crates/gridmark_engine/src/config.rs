//! Construction-time parameters for a game.

use crate::error::EngineError;
use crate::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board side length above which the conventional win length stops growing.
const CLASSIC_SIZE: usize = 3;

/// Win length used on boards larger than [`CLASSIC_SIZE`].
const LARGE_BOARD_WIN_LENGTH: usize = 4;

/// What the engine does with moves made after a win or draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TerminalPolicy {
    /// Termination is advisory: further moves are accepted and the caller stops.
    #[default]
    Advisory,
    /// Moves after a win or draw fail with [`EngineError::GameOver`].
    Enforced,
}

/// Board size, win length and terminal policy, fixed for the life of a game.
///
/// Deserialization goes through [`BoardConfig::new`], so a snapshot cannot
/// carry an unplayable size or win length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    size: usize,
    win_length: usize,
    terminal_policy: TerminalPolicy,
}

impl BoardConfig {
    /// Creates a configuration for an `size × size` board won by `win_length` in a row.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] unless `1 <= win_length <= size`
    /// and the `size × size` cells fit in memory.
    #[instrument]
    pub fn new(size: usize, win_length: usize) -> Result<Self, EngineError> {
        if size == 0 || win_length == 0 || win_length > size || !fits_in_memory(size) {
            debug!("Rejected board configuration");
            return Err(EngineError::InvalidConfiguration { size, win_length });
        }

        Ok(Self {
            size,
            win_length,
            terminal_policy: TerminalPolicy::default(),
        })
    }

    /// Creates a configuration using the conventional win length for `size`:
    /// the full side on boards up to 3, four in a row on anything larger.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] when `size` is zero.
    #[instrument]
    pub fn for_size(size: usize) -> Result<Self, EngineError> {
        let win_length = if size > CLASSIC_SIZE {
            LARGE_BOARD_WIN_LENGTH
        } else {
            size
        };
        Self::new(size, win_length)
    }

    /// Returns the configuration with the given terminal policy.
    pub fn with_terminal_policy(mut self, terminal_policy: TerminalPolicy) -> Self {
        self.terminal_policy = terminal_policy;
        self
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Consecutive marks needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Handling of moves after a terminal condition.
    pub fn terminal_policy(&self) -> TerminalPolicy {
        self.terminal_policy
    }
}

/// Checks that a `size × size` cell vector can be allocated at all.
fn fits_in_memory(size: usize) -> bool {
    size.checked_mul(size)
        .and_then(|cells| cells.checked_mul(std::mem::size_of::<Cell>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize)
}

#[derive(Deserialize)]
struct RawBoardConfig {
    size: usize,
    win_length: usize,
    terminal_policy: TerminalPolicy,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = EngineError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.size, raw.win_length)?.with_terminal_policy(raw.terminal_policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_win_length() {
        assert_eq!(BoardConfig::for_size(3).unwrap().win_length(), 3);
        assert_eq!(BoardConfig::for_size(4).unwrap().win_length(), 4);
        assert_eq!(BoardConfig::for_size(5).unwrap().win_length(), 4);
        assert_eq!(BoardConfig::for_size(2).unwrap().win_length(), 2);
        assert_eq!(BoardConfig::for_size(1).unwrap().win_length(), 1);
    }

    #[test]
    fn test_rejects_zero_size() {
        assert_eq!(
            BoardConfig::for_size(0),
            Err(EngineError::InvalidConfiguration {
                size: 0,
                win_length: 0
            })
        );
    }

    #[test]
    fn test_rejects_win_length_beyond_board() {
        assert!(matches!(
            BoardConfig::new(3, 4),
            Err(EngineError::InvalidConfiguration { size: 3, win_length: 4 })
        ));
        assert!(BoardConfig::new(3, 0).is_err());
        assert!(BoardConfig::new(4, 3).is_ok());
    }

    #[test]
    fn test_rejects_size_whose_cells_overflow() {
        assert_eq!(
            BoardConfig::new(usize::MAX / 2, 1),
            Err(EngineError::InvalidConfiguration {
                size: usize::MAX / 2,
                win_length: 1
            })
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let config: BoardConfig = serde_json::from_str(
            r#"{"size": 4, "win_length": 3, "terminal_policy": "Enforced"}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            BoardConfig::new(4, 3)
                .unwrap()
                .with_terminal_policy(TerminalPolicy::Enforced)
        );

        let zero = r#"{"size": 3, "win_length": 0, "terminal_policy": "Advisory"}"#;
        assert!(serde_json::from_str::<BoardConfig>(zero).is_err());
        let too_long = r#"{"size": 3, "win_length": 4, "terminal_policy": "Advisory"}"#;
        assert!(serde_json::from_str::<BoardConfig>(too_long).is_err());
    }

    #[test]
    fn test_terminal_policy_defaults_to_advisory() {
        let config = BoardConfig::new(3, 3).unwrap();
        assert_eq!(config.terminal_policy(), TerminalPolicy::Advisory);
        let config = config.with_terminal_policy(TerminalPolicy::Enforced);
        assert_eq!(config.terminal_policy(), TerminalPolicy::Enforced);
    }
}
