//! Check and attack queries.
//!
//! A square counts as attacked when some opposing piece's ordinary movement
//! predicate would let it move there right now. Nothing is cached; each query
//! rescans the board.

use crate::Board;
use chess_core::{Color, Square};

impl Board {
    /// Returns true if any piece of color `by` could legally move onto `target`.
    ///
    /// On an occupied target this matches chess attacks (pawns only reach it
    /// diagonally). On an empty target a pawn's forward push also counts.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces()
            .any(|(sq, piece)| piece.color == by && piece.is_valid_move(self, sq, target))
    }

    /// Returns true if the first king of `color` found is attacked.
    ///
    /// A board without such a king is never in check.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opposite()))
    }

    /// Returns true if any square on the line from `from` to `to`, both ends
    /// included, is attacked by the opponent of `color`.
    ///
    /// Squares not sharing a rank, file, or diagonal form no path and yield false.
    pub fn is_path_under_attack(&self, from: Square, to: Square, color: Color) -> bool {
        let (dx, dy) = from.delta(to);
        if !(dx == 0 || dy == 0 || dx.abs() == dy.abs()) {
            return false;
        }
        let steps = dx.abs().max(dy.abs());
        let (step_x, step_y) = (dx.signum(), dy.signum());
        (0..=steps)
            .filter_map(|i| from.offset(step_x * i, step_y * i))
            .any(|sq| self.is_square_attacked(sq, color.opposite()))
    }
}
