//! Turn derivation for tic-tac-toe.
//!
//! Whose turn it is follows from the marks alone: X moves first and
//! players alternate, so X is to move exactly when the counts are equal.

use super::super::{Board, BoardError, Player, Square};
use tracing::{instrument, warn};

/// Counts the X and O marks on the board.
pub fn mark_counts(board: &Board) -> (usize, usize) {
    board
        .squares()
        .iter()
        .fold((0, 0), |(x, o), square| match square {
            Square::Occupied(Player::X) => (x + 1, o),
            Square::Occupied(Player::O) => (x, o + 1),
            Square::Empty => (x, o),
        })
}

/// Returns the player to move.
///
/// Fails with [`BoardError::InvariantViolation`] unless X has the same
/// number of marks as O or exactly one more.
#[instrument(level = "trace", skip(board))]
pub fn turn_to_move(board: &Board) -> Result<Player, BoardError> {
    let (x_count, o_count) = mark_counts(board);
    if x_count == o_count {
        Ok(Player::X)
    } else if x_count == o_count + 1 {
        Ok(Player::O)
    } else {
        warn!(x_count, o_count, "Board violates turn alternation");
        Err(BoardError::InvariantViolation { x_count, o_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_x_to_move() {
        assert_eq!(turn_to_move(&Board::new()), Ok(Player::X));
    }

    #[test]
    fn test_o_to_move_after_x() {
        let board: Board = "....X....".parse().unwrap();
        assert_eq!(mark_counts(&board), (1, 0));
        assert_eq!(turn_to_move(&board), Ok(Player::O));
    }

    #[test]
    fn test_x_two_ahead_is_violation() {
        let board: Board = "XX.......".parse().unwrap();
        assert_eq!(
            turn_to_move(&board),
            Err(BoardError::InvariantViolation {
                x_count: 2,
                o_count: 0
            })
        );
    }

    #[test]
    fn test_o_ahead_is_violation() {
        let board: Board = "O........".parse().unwrap();
        assert_eq!(
            turn_to_move(&board),
            Err(BoardError::InvariantViolation {
                x_count: 0,
                o_count: 1
            })
        );
    }
}
