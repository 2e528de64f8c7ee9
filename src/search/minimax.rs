//! Plain minimax without pruning.
//!
//! Visits every node below the board. Too slow to be the engine but
//! simple enough to trust, so the pruned search is checked against it.

use crate::games::tictactoe::{Board, BoardError, Player};

/// Exact minimax value of `board` from X's point of view.
pub fn minimax_value(board: &Board) -> Result<i8, BoardError> {
    if let Some(outcome) = board.outcome() {
        return Ok(outcome.utility());
    }

    let mover = board.to_move()?;
    let values = board
        .legal_actions()
        .into_iter()
        .map(|action| board.apply(action).and_then(|child| minimax_value(&child)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(match mover {
        Player::X => values.into_iter().fold(i8::MIN, i8::max),
        Player::O => values.into_iter().fold(i8::MAX, i8::min),
    })
}
