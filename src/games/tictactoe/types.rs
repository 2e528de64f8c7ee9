//! Core domain types for tic-tac-toe.

use super::action::{Action, BoardError};
use super::outcome::Outcome;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used for this square in the text form of a board.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    /// Parses a single board character.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '_' | '-' => Some(Square::Empty),
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition returns a new board and
/// leaves the original untouched, so parent and child positions in a
/// search never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; SQUARE_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; SQUARE_COUNT],
        }
    }

    /// Creates a board from squares in row-major order.
    ///
    /// No mark-count validation happens here; [`Board::to_move`] reports
    /// impossible boards.
    pub fn from_squares(squares: [Square; SQUARE_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square targeted by `action`, or `None` when out of range.
    pub fn get(&self, action: Action) -> Option<Square> {
        action.index().map(|index| self.squares[index])
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; SQUARE_COUNT] {
        &self.squares
    }

    /// Counts the X and O marks on the board.
    pub fn mark_counts(&self) -> (usize, usize) {
        rules::mark_counts(self)
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Result<Player, BoardError> {
        rules::turn_to_move(self)
    }

    /// Returns every empty square as an action, in row-major order.
    #[instrument(level = "trace", skip(self))]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .filter_map(|(index, _)| Action::from_index(index))
            .collect()
    }

    /// Returns the board after the side to move marks `action`.
    ///
    /// Out-of-range and occupied squares are rejected with
    /// [`BoardError::IllegalMove`].
    #[instrument(level = "trace", skip(self))]
    pub fn apply(&self, action: Action) -> Result<Board, BoardError> {
        let index = match action.index() {
            Some(index) if self.squares[index] == Square::Empty => index,
            _ => return Err(BoardError::IllegalMove(action)),
        };
        let player = self.to_move()?;

        let mut next = *self;
        next.squares[index] = Square::Occupied(player);
        Ok(next)
    }

    /// Returns the player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if the game is over.
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    /// Classifies a terminal board; `None` while the game is still live.
    pub fn outcome(&self) -> Option<Outcome> {
        rules::outcome(self)
    }

    /// Value of a terminal board from X's point of view.
    ///
    /// `+1` for an X win, `-1` for an O win, `0` for a draw.
    pub fn utility(&self) -> Result<i8, BoardError> {
        self.outcome()
            .map(|outcome| outcome.utility())
            .ok_or(BoardError::UtilityOfNonTerminalPosition)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, squares) in self.squares.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for square in squares {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine square characters, ignoring whitespace and `|`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != SQUARE_COUNT {
            return Err(ParseBoardError::WrongLength(symbols.len()));
        }

        let mut squares = [Square::Empty; SQUARE_COUNT];
        for (square, symbol) in squares.iter_mut().zip(symbols) {
            *square = Square::from_symbol(symbol).ok_or(ParseBoardError::InvalidSymbol(symbol))?;
        }
        Ok(Self { squares })
    }
}

/// Error parsing the text form of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The text held the wrong number of squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),

    /// A character that is not a square symbol.
    #[display("Invalid square symbol {:?}", _0)]
    InvalidSymbol(char),
}

impl std::error::Error for ParseBoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO. | .X. | ..O".parse().unwrap();
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
        assert_eq!(board.get(Action::new(0, 1)), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(Action::new(3, 0)), None);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(ParseBoardError::WrongLength(2)));
        assert_eq!(
            "XO.Z.....".parse::<Board>(),
            Err(ParseBoardError::InvalidSymbol('Z'))
        );
    }

    #[test]
    fn test_player_parses_case_insensitively() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
        assert_eq!(Player::X.opponent(), Player::O);
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let board = Board::new();
        let next = board.apply(Action::new(1, 1)).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.get(Action::new(1, 1)), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_utility_of_live_board_fails() {
        assert_eq!(
            Board::new().utility(),
            Err(BoardError::UtilityOfNonTerminalPosition)
        );
    }
}
