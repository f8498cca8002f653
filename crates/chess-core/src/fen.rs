//! FEN (Forsyth-Edwards Notation) parsing.
//!
//! Only the fields a rules referee cares about are kept: piece placement,
//! side to move, castling availability and the fullmove number. Trailing
//! fields may be omitted. En passant and the halfmove clock are validated
//! when present and then discarded, since no rule here depends on them.

use crate::{Color, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Castling availability per color, as written in the FEN castling field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingAvailability {
    kingside: [bool; 2],
    queenside: [bool; 2],
}

impl CastlingAvailability {
    /// All four castling options available.
    pub const ALL: CastlingAvailability = CastlingAvailability {
        kingside: [true, true],
        queenside: [true, true],
    };

    /// Returns true if `color` may still castle toward the h-file.
    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        self.kingside[color.index()]
    }

    /// Returns true if `color` may still castle toward the a-file.
    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        self.queenside[color.index()]
    }

    /// Sets kingside availability for `color`.
    pub fn set_kingside(&mut self, color: Color, available: bool) {
        self.kingside[color.index()] = available;
    }

    /// Sets queenside availability for `color`.
    pub fn set_queenside(&mut self, color: Color, available: bool) {
        self.queenside[color.index()] = available;
    }

    /// Parses a FEN castling field (`"KQkq"`, `"Kq"`, `"-"`, ...).
    pub fn parse(field: &str) -> Result<Self, FenError> {
        let mut rights = CastlingAvailability::default();
        if field == "-" {
            return Ok(rights);
        }
        if field.is_empty() {
            return Err(FenError::InvalidCastlingRights(field.to_string()));
        }
        for c in field.chars() {
            match c {
                'K' => rights.set_kingside(Color::White, true),
                'Q' => rights.set_queenside(Color::White, true),
                'k' => rights.set_kingside(Color::Black, true),
                'q' => rights.set_queenside(Color::Black, true),
                _ => {
                    return Err(FenError::InvalidCastlingRights(format!(
                        "invalid character '{}'",
                        c
                    )))
                }
            }
        }
        Ok(rights)
    }

    /// Renders the FEN castling field.
    pub fn to_fen(self) -> String {
        let mut field = String::new();
        if self.kingside(Color::White) {
            field.push('K');
        }
        if self.queenside(Color::White) {
            field.push('Q');
        }
        if self.kingside(Color::Black) {
            field.push('k');
        }
        if self.queenside(Color::Black) {
            field.push('q');
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }
}

/// A parsed FEN record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Every piece on the board, in FEN reading order (rank 8 first).
    pub pieces: Vec<(Square, PieceKind, Color)>,
    /// Side to move; White when the field is omitted.
    pub active_color: Color,
    /// Castling field, `None` when omitted.
    pub castling: Option<CastlingAvailability>,
    /// Fullmove number; 1 when the field is omitted.
    pub fullmove: u32,
}

impl Fen {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    ///
    /// The fullmove number must be at least 1.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let pieces = Self::parse_placement(parts[0])?;

        let active_color = match parts.get(1) {
            None => Color::White,
            Some(field) => Color::from_fen_field(field)
                .ok_or_else(|| FenError::InvalidActiveColor(field.to_string()))?,
        };

        let castling = parts
            .get(2)
            .map(|field| CastlingAvailability::parse(field))
            .transpose()?;

        if let Some(ep) = parts.get(3) {
            Self::validate_en_passant(ep)?;
        }
        if let Some(clock) = parts.get(4) {
            clock
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(clock.to_string()))?;
        }
        let fullmove = match parts.get(5) {
            None => 1,
            Some(number) => number
                .parse::<u32>()
                .ok()
                .filter(|&n| n >= 1)
                .ok_or_else(|| FenError::InvalidFullmoveNumber(number.to_string()))?,
        };

        Ok(Fen {
            pieces,
            active_color,
            castling,
            fullmove,
        })
    }

    fn parse_placement(placement: &str) -> Result<Vec<(Square, PieceKind, Color)>, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut pieces = Vec::new();
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run as u8;
                } else if let Some((kind, color)) = PieceKind::from_fen_char(c) {
                    if let Some(sq) = Square::from_coords(file, rank) {
                        pieces.push((sq, kind, color));
                    }
                    file += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        rank + 1
                    )));
                }
                if file > 8 {
                    break;
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    rank + 1,
                    file
                )));
            }
        }

        Ok(pieces)
    }

    fn validate_en_passant(ep: &str) -> Result<(), FenError> {
        if ep == "-" {
            return Ok(());
        }
        match Square::from_name(ep) {
            Ok(sq) if sq.rank() == 2 || sq.rank() == 5 => Ok(()),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }
}
