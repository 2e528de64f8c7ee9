//! Board symmetries: the eight elements of the dihedral group D4.
//!
//! Tic-tac-toe rules do not distinguish between a board and its rotations
//! or reflections, so winners and game values are invariant under these
//! transforms.

use super::types::{BOARD_SIZE, SQUARE_COUNT};
use super::{Action, Board, Square};
use serde::{Deserialize, Serialize};

const LAST: usize = BOARD_SIZE - 1;

/// A rotation or reflection of the 3x3 grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Symmetry {
    /// Leaves every square in place.
    Identity,
    /// Quarter turn clockwise.
    Rotate90,
    /// Half turn.
    Rotate180,
    /// Quarter turn counter-clockwise.
    Rotate270,
    /// Mirror left to right.
    FlipHorizontal,
    /// Mirror top to bottom.
    FlipVertical,
    /// Mirror across the main diagonal.
    Transpose,
    /// Mirror across the anti-diagonal.
    AntiTranspose,
}

impl Symmetry {
    /// Maps in-range coordinates to their image.
    fn map(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Symmetry::Identity => (row, col),
            Symmetry::Rotate90 => (col, LAST - row),
            Symmetry::Rotate180 => (LAST - row, LAST - col),
            Symmetry::Rotate270 => (LAST - col, row),
            Symmetry::FlipHorizontal => (row, LAST - col),
            Symmetry::FlipVertical => (LAST - row, col),
            Symmetry::Transpose => (col, row),
            Symmetry::AntiTranspose => (LAST - col, LAST - row),
        }
    }

    /// Returns the transform that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Symmetry::Rotate90 => Symmetry::Rotate270,
            Symmetry::Rotate270 => Symmetry::Rotate90,
            other => other,
        }
    }

    /// Maps an action to the matching square on the transformed board.
    ///
    /// Out-of-range actions have no image and are returned unchanged.
    pub fn apply_action(self, action: Action) -> Action {
        if action.index().is_none() {
            return action;
        }
        let (row, col) = self.map(action.row, action.col);
        Action::new(row, col)
    }

    /// Returns the transformed board.
    pub fn apply_board(self, board: &Board) -> Board {
        let mut squares = [Square::Empty; SQUARE_COUNT];
        for (index, square) in board.squares().iter().enumerate() {
            let (row, col) = self.map(index / BOARD_SIZE, index % BOARD_SIZE);
            squares[row * BOARD_SIZE + col] = *square;
        }
        Board::from_squares(squares)
    }
}
