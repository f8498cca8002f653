//! Board square representation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const FILE_LETTERS: &[u8; 8] = b"abcdefgh";

/// Error returned when a square name cannot be resolved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid square name: '{0}'")]
pub struct SquareParseError(pub String);

/// A square on the chess board, indexed 0-63.
///
/// Squares are indexed in little-endian rank-file mapping:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
///
/// Files and ranks are both 0-based internally; the rank is shown 1-based in
/// the square's name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from 0-based file and rank, or `None` if either is off the board.
    #[inline]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Resolves a square name such as `"e4"`.
    ///
    /// The file letter may be upper or lower case.
    pub fn from_name(name: &str) -> Result<Self, SquareParseError> {
        let invalid = || SquareParseError(name.to_string());
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Self::from_coords(file, rank).ok_or_else(invalid)
    }

    /// Iterates over all 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the 0-based file (0 = a).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Returns the 0-based rank (0 = rank 1).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Returns the square displaced by `(file_delta, rank_delta)`, if still on the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Self::from_coords(file as u8, rank as u8)
        } else {
            None
        }
    }

    /// Returns the signed `(file, rank)` displacement from `self` to `to`.
    #[inline]
    pub fn delta(self, to: Square) -> (i8, i8) {
        (
            to.file() as i8 - self.file() as i8,
            to.rank() as i8 - self.rank() as i8,
        )
    }

    /// Returns the file letter + 1-based rank name (e.g. `"e4"`).
    pub fn name(self) -> String {
        format!("{}{}", self.file_char(), self.rank() + 1)
    }

    /// Returns the file letter.
    #[inline]
    pub const fn file_char(self) -> char {
        FILE_LETTERS[self.file() as usize] as char
    }

    // Corner and king squares
    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.name())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_from_coords() {
        let e4 = Square::from_coords(4, 3).unwrap();
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.index(), 28);
        assert_eq!(Square::from_coords(8, 0), None);
        assert_eq!(Square::from_coords(0, 8), None);
    }

    #[test]
    fn square_from_name() {
        assert_eq!(Square::from_name("a1"), Ok(Square::A1));
        assert_eq!(Square::from_name("E1"), Ok(Square::E1));
        assert_eq!(Square::from_name("h8"), Ok(Square::H8));
        assert!(Square::from_name("i1").is_err());
        assert!(Square::from_name("a9").is_err());
        assert!(Square::from_name("a0").is_err());
        assert!(Square::from_name("").is_err());
        assert!(Square::from_name("e10").is_err());
    }

    #[test]
    fn square_name_is_one_based() {
        assert_eq!(Square::A1.name(), "a1");
        assert_eq!(Square::H8.name(), "h8");
        assert_eq!(Square::from_coords(4, 3).unwrap().name(), "e4");
        assert_eq!(format!("{}", Square::E8), "e8");
        assert_eq!(format!("{:?}", Square::E8), "Square(e8)");
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::E1.offset(3, 0), Some(Square::H1));
        assert_eq!(Square::E1.offset(-4, 0), Some(Square::A1));
        assert_eq!(Square::H1.offset(1, 0), None);
        assert_eq!(Square::A1.offset(0, -1), None);
        assert_eq!(Square::A1.offset(7, 7), Some(Square::H8));
    }

    #[test]
    fn delta_is_signed() {
        assert_eq!(Square::E1.delta(Square::H1), (3, 0));
        assert_eq!(Square::H8.delta(Square::A1), (-7, -7));
    }

    #[test]
    fn all_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::A1);
        assert_eq!(squares[63], Square::H8);
    }

    #[test]
    fn parse_roundtrip_over_names() {
        for sq in Square::all() {
            assert_eq!(sq.name().parse::<Square>(), Ok(sq));
        }
    }
}
