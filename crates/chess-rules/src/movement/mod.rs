//! Per-variant movement legality.
//!
//! Each piece kind has one predicate deciding whether it may move from one
//! square to another on a given board. The predicates only read the board;
//! applying a move is the [`Game`](crate::Game)'s job.
//!
//! No predicate looks at whether the mover's own king ends up in check.

mod attacks;
mod castling;

pub use castling::CastleSide;
use castling::castle_pattern;

use crate::{Board, Piece};
use chess_core::{PieceKind, Square};
use thiserror::Error;

/// Why a piece cannot make a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The displacement is not one the piece can make.
    #[error("a {piece} cannot move that way")]
    IllegalMovementPattern { piece: PieceKind },
    /// A square the piece must pass through or land on is occupied.
    #[error("the path is obstructed")]
    PathObstructed,
    /// The destination holds a piece of the mover's color.
    #[error("the destination holds a piece of the same color")]
    DestinationOccupied,
}

impl Piece {
    /// Checks whether this piece, standing on `from`, may move to `to` on `board`.
    pub fn validate_move(&self, board: &Board, from: Square, to: Square) -> Result<(), MoveError> {
        if from == to {
            return Err(MoveError::IllegalMovementPattern { piece: self.kind });
        }
        match self.kind {
            PieceKind::Pawn => pawn(board, self, from, to),
            PieceKind::Knight => knight(board, self, from, to),
            PieceKind::Bishop => bishop(board, self, from, to),
            PieceKind::Rook => rook(board, self, from, to),
            PieceKind::Queen => queen(board, self, from, to),
            PieceKind::King => king(board, self, from, to),
        }
    }

    /// Returns true if this piece, standing on `from`, may move to `to` on `board`.
    #[inline]
    pub fn is_valid_move(&self, board: &Board, from: Square, to: Square) -> bool {
        self.validate_move(board, from, to).is_ok()
    }
}

impl Board {
    /// Returns true if the piece on `from` may move to `to`; false for an empty origin.
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        self.piece_at(from)
            .is_some_and(|piece| piece.is_valid_move(self, from, to))
    }
}

fn illegal(piece: &Piece) -> MoveError {
    MoveError::IllegalMovementPattern { piece: piece.kind }
}

/// Destination must be empty or hold an opposing piece.
fn destination(board: &Board, piece: &Piece, to: Square) -> Result<(), MoveError> {
    match board.piece_at(to) {
        Some(target) if target.color == piece.color => Err(MoveError::DestinationOccupied),
        _ => Ok(()),
    }
}

fn slide(board: &Board, piece: &Piece, from: Square, to: Square) -> Result<(), MoveError> {
    if !board.is_path_clear(from, to) {
        return Err(MoveError::PathObstructed);
    }
    destination(board, piece, to)
}

fn is_straight(dx: i8, dy: i8) -> bool {
    dx == 0 || dy == 0
}

fn is_diagonal(dx: i8, dy: i8) -> bool {
    dx.abs() == dy.abs()
}

fn pawn(board: &Board, piece: &Piece, from: Square, to: Square) -> Result<(), MoveError> {
    let dir = piece.color.pawn_direction();
    let (dx, dy) = from.delta(to);
    let target = board.piece_at(to);

    if dx == 0 && dy == dir {
        return match target {
            None => Ok(()),
            Some(_) => Err(MoveError::PathObstructed),
        };
    }

    if dx == 0 && dy == 2 * dir && from.rank() == piece.color.pawn_home_rank() {
        return if target.is_none() && board.is_path_clear(from, to) {
            Ok(())
        } else {
            Err(MoveError::PathObstructed)
        };
    }

    if dx.abs() == 1 && dy == dir {
        return match target {
            Some(t) if t.color != piece.color => Ok(()),
            Some(_) => Err(MoveError::DestinationOccupied),
            None => Err(illegal(piece)),
        };
    }

    Err(illegal(piece))
}

fn knight(board: &Board, piece: &Piece, from: Square, to: Square) -> Result<(), MoveError> {
    let (dx, dy) = from.delta(to);
    match (dx.abs(), dy.abs()) {
        (1, 2) | (2, 1) => destination(board, piece, to),
        _ => Err(illegal(piece)),
    }
}

fn bishop(board: &Board, piece: &Piece, from: Square, to: Square) -> Result<(), MoveError> {
    let (dx, dy) = from.delta(to);
    if !is_diagonal(dx, dy) {
        return Err(illegal(piece));
    }
    slide(board, piece, from, to)
}

fn rook(board: &Board, piece: &Piece, from: Square, to: Square) -> Result<(), MoveError> {
    let (dx, dy) = from.delta(to);
    if !is_straight(dx, dy) {
        return Err(illegal(piece));
    }
    slide(board, piece, from, to)
}

fn queen(board: &Board, piece: &Piece, from: Square, to: Square) -> Result<(), MoveError> {
    let (dx, dy) = from.delta(to);
    if !is_straight(dx, dy) && !is_diagonal(dx, dy) {
        return Err(illegal(piece));
    }
    slide(board, piece, from, to)
}

fn king(board: &Board, piece: &Piece, from: Square, to: Square) -> Result<(), MoveError> {
    let (dx, dy) = from.delta(to);
    if dx.abs().max(dy.abs()) == 1 {
        return destination(board, piece, to);
    }
    castle_pattern(board, piece, from, to).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Color;

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    fn validate(board: &Board, from: &str, to: &str) -> Result<(), MoveError> {
        let from = sq(from);
        let piece = *board.piece_at(from).unwrap();
        piece.validate_move(board, from, sq(to))
    }

    #[test]
    fn pawn_pushes_from_start() {
        let board = Board::new();
        assert!(board.is_valid_move(sq("e2"), sq("e3")));
        assert!(board.is_valid_move(sq("e2"), sq("e4")));
        assert!(!board.is_valid_move(sq("e2"), sq("e5")));
        assert!(board.is_valid_move(sq("d7"), sq("d5")));
        assert!(board.is_valid_move(sq("d7"), sq("d6")));
        // Backwards is never legal.
        assert!(!board.is_valid_move(sq("d7"), sq("d8")));
    }

    #[test]
    fn pawn_double_step_only_from_home_rank() {
        let board = Board::from_fen("4k3/8/8/8/8/4P3/8/4K3").unwrap();
        assert!(board.is_valid_move(sq("e3"), sq("e4")));
        assert_eq!(
            validate(&board, "e3", "e5"),
            Err(MoveError::IllegalMovementPattern {
                piece: PieceKind::Pawn
            })
        );
    }

    #[test]
    fn pawn_blocked_push() {
        let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3").unwrap();
        assert_eq!(validate(&board, "e2", "e3"), Err(MoveError::PathObstructed));
        // The double step may not jump over the blocker either.
        assert_eq!(validate(&board, "e2", "e4"), Err(MoveError::PathObstructed));

        // A free middle square does not help when the landing square is taken.
        let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3").unwrap();
        assert!(board.is_valid_move(sq("e2"), sq("e3")));
        assert_eq!(validate(&board, "e2", "e4"), Err(MoveError::PathObstructed));
    }

    #[test]
    fn pawn_captures_diagonally_only() {
        let board = Board::from_fen("4k3/8/8/3p1P2/4P3/8/8/4K3").unwrap();
        assert!(board.is_valid_move(sq("e4"), sq("d5")));
        assert_eq!(
            validate(&board, "e4", "f5"),
            Err(MoveError::DestinationOccupied)
        );
        // Diagonal onto an empty square is not a move.
        assert!(!board.is_valid_move(sq("f5"), sq("g6")));
        // Black captures downward.
        assert!(board.is_valid_move(sq("d5"), sq("e4")));
        assert!(!board.is_valid_move(sq("d5"), sq("e6")));
    }

    #[test]
    fn knight_jumps() {
        let board = Board::new();
        assert!(board.is_valid_move(sq("b1"), sq("c3")));
        assert!(board.is_valid_move(sq("b1"), sq("a3")));
        assert_eq!(
            validate(&board, "b1", "d2"),
            Err(MoveError::DestinationOccupied)
        );
        assert!(!board.is_valid_move(sq("b1"), sq("b3")));
    }

    #[test]
    fn rook_lines_and_obstruction() {
        let board = Board::from_fen("4k3/8/8/8/R2p4/8/8/4K3").unwrap();
        assert!(board.is_valid_move(sq("a4"), sq("a8")));
        assert!(board.is_valid_move(sq("a4"), sq("c4")));
        assert!(board.is_valid_move(sq("a4"), sq("d4")));
        assert_eq!(validate(&board, "a4", "e4"), Err(MoveError::PathObstructed));
        assert_eq!(
            validate(&board, "a4", "b5"),
            Err(MoveError::IllegalMovementPattern {
                piece: PieceKind::Rook
            })
        );
    }

    #[test]
    fn bishop_diagonals() {
        let board = Board::new();
        assert_eq!(validate(&board, "c1", "e3"), Err(MoveError::PathObstructed));
        let open = Board::from_fen("4k3/8/8/8/8/8/8/2B1K3").unwrap();
        assert!(open.is_valid_move(sq("c1"), sq("h6")));
        assert!(open.is_valid_move(sq("c1"), sq("a3")));
        assert!(!open.is_valid_move(sq("c1"), sq("c2")));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let board = Board::from_fen("4k3/8/8/8/3Q4/8/8/4K3").unwrap();
        for target in ["d8", "a4", "h4", "d1", "a7", "h8", "a1", "g1"] {
            assert!(board.is_valid_move(sq("d4"), sq(target)), "d4-{}", target);
        }
        assert!(!board.is_valid_move(sq("d4"), sq("e6")));
        assert_eq!(
            validate(&board, "d4", "e1"),
            Err(MoveError::IllegalMovementPattern {
                piece: PieceKind::Queen
            })
        );
    }

    #[test]
    fn king_single_steps() {
        let board = Board::from_fen("4k3/8/8/8/8/8/3P4/4K3").unwrap();
        assert!(board.is_valid_move(sq("e1"), sq("f2")));
        assert!(board.is_valid_move(sq("e1"), sq("d1")));
        assert_eq!(
            validate(&board, "e1", "d2"),
            Err(MoveError::DestinationOccupied)
        );
        assert!(!board.is_valid_move(sq("e1"), sq("e3")));
    }

    #[test]
    fn staying_put_is_never_a_move() {
        let board = Board::new();
        for (square, _) in board.pieces() {
            assert!(!board.is_valid_move(square, square));
        }
    }

    #[test]
    fn empty_origin_is_not_a_move() {
        let board = Board::new();
        assert!(!board.is_valid_move(sq("e4"), sq("e5")));
    }

    #[test]
    fn captures_of_either_color() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/r3K2R").unwrap();
        let black_rook = *board.piece_at(sq("a1")).unwrap();
        assert_eq!(black_rook.color, Color::Black);
        assert!(black_rook.is_valid_move(&board, sq("a1"), sq("a8")));
        // Blocked by the white king before reaching h1.
        assert!(!black_rook.is_valid_move(&board, sq("a1"), sq("h1")));
        assert!(black_rook.is_valid_move(&board, sq("a1"), sq("e1")));
    }
}
