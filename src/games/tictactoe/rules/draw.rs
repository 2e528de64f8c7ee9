//! Draw and terminal detection logic for tic-tac-toe.

use super::super::{Board, Outcome, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Classifies the board, checking for a winner before a full board.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(player) = check_winner(board) {
        Some(Outcome::Winner(player))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// Checks if the game is over, by a win or a full board.
pub fn is_terminal(board: &Board) -> bool {
    outcome(board).is_some()
}
