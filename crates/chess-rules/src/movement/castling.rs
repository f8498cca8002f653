//! Castling eligibility.
//!
//! Two predicates exist. [`castle_pattern`] is what king movement uses: an
//! unmoved king two files along its rank, an unmoved rook of its color in the
//! matching corner, and clear paths to both the destination and the rook.
//! [`Piece::can_castle`] adds that the king is not in check and that no square
//! it crosses, endpoints included, is reachable by the opponent.

use super::MoveError;
use crate::{Board, Piece};
use chess_core::{MoveFlag, PieceKind, Square};

/// The corner a king castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the h-file.
    Kingside,
    /// Toward the a-file.
    Queenside,
}

impl CastleSide {
    /// Classifies a king's file displacement: +2 is kingside, -2 queenside.
    pub const fn from_file_delta(dx: i8) -> Option<Self> {
        match dx {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// File offset from the king's start square to the castling rook.
    pub const fn rook_file_offset(self) -> i8 {
        match self {
            CastleSide::Kingside => 3,
            CastleSide::Queenside => -4,
        }
    }

    /// File offset from the king's start square to where the rook lands.
    pub const fn rook_landing_offset(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }

    /// Square of the castling rook for a king starting on `king_from`.
    pub fn rook_square(self, king_from: Square) -> Option<Square> {
        king_from.offset(self.rook_file_offset(), 0)
    }

    /// Square the rook is relocated to for a king starting on `king_from`.
    pub fn rook_landing(self, king_from: Square) -> Option<Square> {
        king_from.offset(self.rook_landing_offset(), 0)
    }

    /// The move flag recorded for a castle toward this side.
    pub const fn flag(self) -> MoveFlag {
        match self {
            CastleSide::Kingside => MoveFlag::CastleKingside,
            CastleSide::Queenside => MoveFlag::CastleQueenside,
        }
    }
}

/// Checks the castling shape of a king move, ignoring attacks.
///
/// The corner piece must be an unmoved rook of the king's own color. An
/// unmoved opposing rook in the corner, which only a FEN position can
/// produce, never qualifies.
pub(crate) fn castle_pattern(
    board: &Board,
    king: &Piece,
    from: Square,
    to: Square,
) -> Result<CastleSide, MoveError> {
    let illegal = MoveError::IllegalMovementPattern { piece: king.kind };
    let (dx, dy) = from.delta(to);
    let side = match (dy, CastleSide::from_file_delta(dx)) {
        (0, Some(side)) => side,
        _ => return Err(illegal),
    };
    if king.kind != PieceKind::King || king.has_moved() {
        return Err(illegal);
    }

    let rook_square = side.rook_square(from).ok_or(illegal)?;
    match board.piece_at(rook_square) {
        Some(rook)
            if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved() => {}
        _ => return Err(illegal),
    }

    if board.is_path_clear(from, to) && board.is_path_clear(from, rook_square) {
        Ok(side)
    } else {
        Err(MoveError::PathObstructed)
    }
}

impl Piece {
    /// Stricter castling test: the castling shape holds, the king is not in
    /// check, and no square from `from` to `to` inclusive is under attack.
    ///
    /// Ordinary move validation does not consult this.
    pub fn can_castle(&self, board: &Board, from: Square, to: Square) -> bool {
        if self.kind != PieceKind::King || self.has_moved() {
            return false;
        }
        if board.is_king_in_check(self.color) {
            return false;
        }
        castle_pattern(board, self, from, to).is_ok()
            && !board.is_path_under_attack(from, to, self.color)
    }
}
