//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search can call them without going through methods.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_full, is_terminal, outcome};
pub use turn::{mark_counts, turn_to_move};
pub use win::{LINES, check_winner};
