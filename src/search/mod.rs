//! Game-tree search for tic-tac-toe.
//!
//! - [`alphabeta`]: full-depth minimax with alpha-beta pruning, the engine
//!   used to pick moves
//! - [`minimax`]: plain minimax without pruning, kept as the reference the
//!   pruned search must agree with

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::{SearchResult, SearchStats, optimal_action, search};
pub use minimax::minimax_value;
