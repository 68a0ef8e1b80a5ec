//! Parsing of player input: board sizes, moves and commands.

use gridmark_engine::Coord;
use tracing::instrument;

/// Something the player typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `q`: leave the program (after confirmation).
    Quit,
    /// `r`: start over with a new board (after confirmation).
    Restart,
    /// `row, column`: place a mark.
    Place(Coord),
}

impl Command {
    /// Parses a line from the move prompt.
    ///
    /// Accepts `q`, `r`, or two non-negative integers separated by a comma,
    /// with surrounding whitespace ignored.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let text = text.trim();
        match text {
            "" => Err(InputError::Empty),
            "q" => Ok(Command::Quit),
            "r" => Ok(Command::Restart),
            _ => {
                let mut parts = text.split(',');
                let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next())
                else {
                    return Err(InputError::Malformed(text.to_string()));
                };
                Ok(Command::Place(Coord::new(
                    parse_index(row)?,
                    parse_index(col)?,
                )))
            }
        }
    }
}

fn parse_index(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

/// Parses the answer to the board size prompt.
#[instrument]
pub fn parse_size(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    parse_index(text)
}

/// Checks if a confirmation answer means yes (`y`, any case).
pub fn is_yes(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("y")
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,

    /// Not of the form `row, column`.
    #[display("Expected 'row, column', got '{_0}'")]
    Malformed(String),

    /// A field is not a non-negative integer.
    #[display("'{_0}' is not a non-negative integer")]
    NotANumber(String),
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse(" r \n"), Ok(Command::Restart));
        assert_eq!(Command::parse("Q"), Err(InputError::Malformed("Q".to_string())));
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(Command::parse("1, 2"), Ok(Command::Place(Coord::new(1, 2))));
        assert_eq!(Command::parse("0,0"), Ok(Command::Place(Coord::new(0, 0))));
        assert_eq!(
            Command::parse("  4 ,3  "),
            Ok(Command::Place(Coord::new(4, 3)))
        );
    }

    #[test]
    fn test_parse_rejects_bad_moves() {
        assert_eq!(Command::parse(""), Err(InputError::Empty));
        assert_eq!(
            Command::parse("1 2"),
            Err(InputError::Malformed("1 2".to_string()))
        );
        assert_eq!(
            Command::parse("1,2,3"),
            Err(InputError::Malformed("1,2,3".to_string()))
        );
        assert_eq!(
            Command::parse("-1, 2"),
            Err(InputError::NotANumber("-1".to_string()))
        );
        assert_eq!(
            Command::parse("a, b"),
            Err(InputError::NotANumber("a".to_string()))
        );
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size(" 4\n"), Ok(4));
        assert_eq!(parse_size(""), Err(InputError::Empty));
        assert!(parse_size("four").is_err());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" Y\n"));
        assert!(!is_yes("yes"));
        assert!(!is_yes("n"));
    }
}
