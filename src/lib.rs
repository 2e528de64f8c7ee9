//! Strictly Minimax - exact tic-tac-toe solving
//!
//! This library represents tic-tac-toe positions as immutable values and
//! searches the complete game tree with minimax and alpha-beta pruning to
//! find the optimal move for whichever player is to act.
//!
//! # Architecture
//!
//! - **Board model**: squares, boards, actions, win/draw rules, symmetries
//! - **Search**: alpha-beta engine plus an unpruned reference minimax
//! - **Driver**: console play, one-shot solving and self-play
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{initial_state, optimal_action};
//!
//! let mut board = initial_state();
//! while let Some(action) = optimal_action(&board)? {
//!     board = board.apply(action)?;
//! }
//! assert_eq!(board.utility()?, 0);
//! # Ok::<(), strictly_minimax::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod search;

// Console driver
pub mod driver;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, BOARD_SIZE, Board, BoardError, Outcome, ParseActionError, ParseBoardError, Player,
    SQUARE_COUNT, Square, Symmetry, rules,
};

// Crate-level exports - Search engine
pub use search::{SearchResult, SearchStats, minimax_value, optimal_action, search};

/// Returns the empty starting board.
pub fn initial_state() -> Board {
    Board::new()
}
