//! First-class action types for tic-tac-toe.
//!
//! An action names a target square. It carries no player: the mark placed
//! is always that of the side to move on the board it is applied to.

use super::types::{BOARD_SIZE, SQUARE_COUNT};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: the square to mark, as `(row, col)`.
///
/// Any pair of coordinates is representable so that out-of-range input
/// reaches [`Board::apply`](super::Board::apply) and is rejected there.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Action {
    /// Row of the target square (0-2).
    pub row: usize,
    /// Column of the target square (0-2).
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row of this action.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this action.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major board index (0-8), or `None` when out of range.
    pub fn index(&self) -> Option<usize> {
        (self.row < BOARD_SIZE && self.col < BOARD_SIZE).then(|| self.row * BOARD_SIZE + self.col)
    }

    /// Creates an action from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SQUARE_COUNT).then(|| Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl std::str::FromStr for Action {
    type Err = ParseActionError;

    /// Accepts `"row,col"`, `"row col"`, or a keypad number `1`-`9`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let number = |part: &str| {
            part.parse::<usize>()
                .map_err(|_| ParseActionError::Malformed(s.trim().to_string()))
        };

        match parts.as_slice() {
            [key] => {
                let key = number(*key)?;
                match key {
                    1..=SQUARE_COUNT => Self::from_index(key - 1)
                        .ok_or(ParseActionError::KeypadOutOfRange(key)),
                    _ => Err(ParseActionError::KeypadOutOfRange(key)),
                }
            }
            [row, col] => Ok(Self::new(number(*row)?, number(*col)?)),
            _ => Err(ParseActionError::Malformed(s.trim().to_string())),
        }
    }
}

/// Error parsing an action typed by a person.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseActionError {
    /// Neither `row,col` nor a single keypad number.
    #[display("Cannot read {:?} as a move; use row,col or 1-9", _0)]
    Malformed(String),

    /// A single number outside 1-9.
    #[display("Keypad square {} is out of range (1-9)", _0)]
    KeypadOutOfRange(usize),
}

impl std::error::Error for ParseActionError {}

/// Error raised by board operations.
///
/// Every variant is a contract violation by the caller; none is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The target square is out of range or already occupied.
    #[display("Illegal move at {}", _0)]
    IllegalMove(Action),

    /// Utility was requested for a game that is still in progress.
    #[display("Utility is only defined for finished games")]
    UtilityOfNonTerminalPosition,

    /// The mark counts cannot come from alternating play with X first.
    #[display("Invariant violation: {} X marks against {} O marks", x_count, o_count)]
    InvariantViolation {
        /// Number of X marks.
        x_count: usize,
        /// Number of O marks.
        o_count: usize,
    },
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        assert_eq!(Action::new(0, 0).index(), Some(0));
        assert_eq!(Action::new(1, 1).index(), Some(4));
        assert_eq!(Action::new(2, 2).index(), Some(8));
        assert_eq!(Action::new(0, 3).index(), None);
        assert_eq!(Action::from_index(5), Some(Action::new(1, 2)));
        assert_eq!(Action::from_index(9), None);
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("1,2".parse::<Action>(), Ok(Action::new(1, 2)));
        assert_eq!(" 2 0 ".parse::<Action>(), Ok(Action::new(2, 0)));
        assert_eq!("1, 1".parse::<Action>(), Ok(Action::new(1, 1)));
        assert_eq!("5".parse::<Action>(), Ok(Action::new(1, 1)));
        assert_eq!("9".parse::<Action>(), Ok(Action::new(2, 2)));
        // Out-of-range coordinates parse; the board rejects them.
        assert_eq!("3,7".parse::<Action>(), Ok(Action::new(3, 7)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            "0".parse::<Action>(),
            Err(ParseActionError::KeypadOutOfRange(0))
        );
        assert_eq!(
            "10".parse::<Action>(),
            Err(ParseActionError::KeypadOutOfRange(10))
        );
        assert!(matches!(
            "a,b".parse::<Action>(),
            Err(ParseActionError::Malformed(_))
        ));
        assert!(matches!(
            "".parse::<Action>(),
            Err(ParseActionError::Malformed(_))
        ));
        assert!(matches!(
            "1 2 3".parse::<Action>(),
            Err(ParseActionError::Malformed(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::new(0, 2).to_string(), "(0, 2)");
        assert_eq!(
            BoardError::IllegalMove(Action::new(1, 1)).to_string(),
            "Illegal move at (1, 1)"
        );
    }
}
