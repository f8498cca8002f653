//! Played moves.

use crate::Square;
use std::fmt;

/// What a played move did besides relocating one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveFlag {
    /// Quiet move to an empty square.
    #[default]
    Normal,
    /// Pawn advanced two ranks from its home rank.
    DoublePush,
    /// The destination held an opposing piece, which left the board.
    Capture,
    /// King moved two files toward the h-file corner; the rook jumped over it.
    CastleKingside,
    /// King moved two files toward the a-file corner; the rook jumped over it.
    CastleQueenside,
}

impl MoveFlag {
    /// True for either castle.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }
}

/// Origin and destination of a played move, tagged with what happened.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    flag: MoveFlag,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        Move { from, to, flag }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn flag(self) -> MoveFlag {
        self.flag
    }

    /// True if an opposing piece was taken.
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self.flag, MoveFlag::Capture)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}, {:?})", self, self.flag)
    }
}

/// Renders as `from->to`, e.g. `e2->e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    #[test]
    fn accessors() {
        let m = Move::new(sq("g1"), sq("f3"), MoveFlag::default());
        assert_eq!((m.from(), m.to()), (sq("g1"), sq("f3")));
        assert_eq!(m.flag(), MoveFlag::Normal);
        assert!(!m.is_capture());
        assert!(Move::new(sq("e4"), sq("d5"), MoveFlag::Capture).is_capture());
    }

    #[test]
    fn castling_flags() {
        let castles = [MoveFlag::CastleKingside, MoveFlag::CastleQueenside];
        for flag in [MoveFlag::Normal, MoveFlag::DoublePush, MoveFlag::Capture] {
            assert!(!flag.is_castling());
        }
        assert!(castles.iter().all(|f| f.is_castling()));
    }

    #[test]
    fn text_forms() {
        let m = Move::new(sq("e1"), sq("g1"), MoveFlag::CastleKingside);
        assert_eq!(m.to_string(), "e1->g1");
        assert_eq!(format!("{:?}", m), "Move(e1->g1, CastleKingside)");
    }
}
