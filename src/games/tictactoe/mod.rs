//! Board model for tic-tac-toe: squares, boards, actions and rules.

mod action;
mod outcome;
pub mod rules;
mod symmetry;
mod types;

pub use action::{Action, BoardError, ParseActionError};
pub use outcome::Outcome;
pub use symmetry::Symmetry;
pub use types::{BOARD_SIZE, Board, ParseBoardError, Player, SQUARE_COUNT, Square};
