//! Alpha-beta search over the full tic-tac-toe game tree.
//!
//! The tree is small enough to solve exactly, so there is no depth limit
//! and no heuristic evaluation: every leaf is a finished game scored by
//! its utility. X maximizes, O minimizes.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, Board, search};
//!
//! let board: Board = "XX. OO. ...".parse().unwrap();
//! let result = search(&board).unwrap();
//! assert_eq!(result.action(), Some(Action::new(0, 2)));
//! assert_eq!(result.value(), 1);
//! ```

use crate::games::tictactoe::{Action, Board, BoardError, Player};
use serde::Serialize;
use tracing::{debug, instrument};

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Boards visited, root included.
    pub nodes: u64,
    /// Finished games scored at the leaves.
    pub terminals: u64,
    /// Times the remaining actions of a board were skipped because alpha met beta.
    pub cutoffs: u64,
}

/// Search result containing the chosen action and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    action: Option<Action>,
    value: i8,
    stats: SearchStats,
}

impl SearchResult {
    /// Optimal action, or `None` when the root board is terminal.
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    /// Minimax value of the root board from X's point of view.
    pub fn value(&self) -> i8 {
        self.value
    }

    /// Search diagnostics.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Searches the full game tree below `board`.
///
/// The root's actions are tried in [`Board::legal_actions`] order and an
/// action replaces the current best only when it is strictly better for the
/// side to move, so ties go to the first action enumerated.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn search(board: &Board) -> Result<SearchResult, BoardError> {
    let mut stats = SearchStats {
        nodes: 1,
        ..SearchStats::default()
    };

    if let Some(outcome) = board.outcome() {
        stats.terminals += 1;
        debug!(%outcome, "Root board is terminal");
        return Ok(SearchResult {
            action: None,
            value: outcome.utility(),
            stats,
        });
    }

    let mover = board.to_move()?;
    let mut best_action = None;
    let mut best_value = match mover {
        Player::X => i8::MIN,
        Player::O => i8::MAX,
    };

    for action in board.legal_actions() {
        let child = board.apply(action)?;
        let (value, improves) = match mover {
            Player::X => {
                let value = min_value(&child, i8::MIN, i8::MAX, &mut stats)?;
                (value, value > best_value)
            }
            Player::O => {
                let value = max_value(&child, i8::MIN, i8::MAX, &mut stats)?;
                (value, value < best_value)
            }
        };
        if improves {
            best_value = value;
            best_action = Some(action);
        }
    }

    debug!(
        %mover,
        action = ?best_action,
        value = best_value,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search complete"
    );

    Ok(SearchResult {
        action: best_action,
        value: best_value,
        stats,
    })
}

/// Returns the optimal action for the side to move, or `None` if the game is over.
pub fn optimal_action(board: &Board) -> Result<Option<Action>, BoardError> {
    search(board).map(|result| result.action)
}

/// Value of a board where X is to move.
fn max_value(
    board: &Board,
    mut alpha: i8,
    beta: i8,
    stats: &mut SearchStats,
) -> Result<i8, BoardError> {
    stats.nodes += 1;
    if let Some(outcome) = board.outcome() {
        stats.terminals += 1;
        return Ok(outcome.utility());
    }

    let mut best = i8::MIN;
    for action in board.legal_actions() {
        best = best.max(min_value(&board.apply(action)?, alpha, beta, stats)?);
        alpha = alpha.max(best);
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }
    Ok(best)
}

/// Value of a board where O is to move.
fn min_value(
    board: &Board,
    alpha: i8,
    mut beta: i8,
    stats: &mut SearchStats,
) -> Result<i8, BoardError> {
    stats.nodes += 1;
    if let Some(outcome) = board.outcome() {
        stats.terminals += 1;
        return Ok(outcome.utility());
    }

    let mut best = i8::MAX;
    for action in board.legal_actions() {
        best = best.min(max_value(&board.apply(action)?, alpha, beta, stats)?);
        beta = beta.min(best);
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_root_has_no_action() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let result = search(&board).unwrap();
        assert_eq!(result.action(), None);
        assert_eq!(result.value(), 1);
        assert_eq!(result.stats().nodes, 1);
        assert_eq!(result.stats().terminals, 1);
    }

    #[test]
    fn test_x_takes_immediate_win() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(optimal_action(&board), Ok(Some(Action::new(0, 2))));
    }

    #[test]
    fn test_o_blocks_immediate_threat() {
        let board: Board = "XX. O.. ...".parse().unwrap();
        let result = search(&board).unwrap();
        assert_eq!(result.action(), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_takes_win_over_block() {
        // O can win on the middle row instead of blocking X's top row.
        let board: Board = "XX. OO. X..".parse().unwrap();
        let result = search(&board).unwrap();
        assert_eq!(result.action(), Some(Action::new(1, 2)));
        assert_eq!(result.value(), -1);
    }

    #[test]
    fn test_empty_board_is_a_draw_and_ties_go_first() {
        let result = search(&Board::new()).unwrap();
        assert_eq!(result.value(), 0);
        // Every opening draws, so the first enumerated square is kept.
        assert_eq!(result.action(), Some(Action::new(0, 0)));
        assert!(result.stats().cutoffs > 0);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes_than_full_tree() {
        // The unpruned tic-tac-toe tree has 549,946 nodes.
        let result = search(&Board::new()).unwrap();
        assert!(result.stats().nodes < 549_946);
        assert!(result.stats().terminals <= result.stats().nodes);
    }

    #[test]
    fn test_invariant_violation_propagates() {
        let board: Board = "XX. ... ...".parse().unwrap();
        assert_eq!(
            search(&board),
            Err(BoardError::InvariantViolation {
                x_count: 2,
                o_count: 0
            })
        );
    }
}
