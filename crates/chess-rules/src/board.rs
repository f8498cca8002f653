//! Board occupancy and path queries.

use chess_core::{CastlingAvailability, Color, Fen, FenError, PieceKind, Square, SquareParseError};
use std::fmt;

/// Handle to a piece owned by a [`Board`].
///
/// Handles stay valid for the lifetime of the board (and its clones), including
/// after the piece has been captured and removed from its square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(usize);

/// A piece in play: its kind, its color, and whether it has moved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    has_moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved.
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Returns true once the piece has been moved (including castling-induced rook moves).
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub(crate) fn set_moved(&mut self, moved: bool) {
        self.has_moved = moved;
    }

    /// Returns the Unicode glyph for this piece.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Occupancy view of a board, indexed by [`Square::index`].
pub type Snapshot = [Option<(PieceKind, Color)>; 64];

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 64 squares and the pieces placed on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square, indexed by square index.
    squares: [Option<PieceId>; 64],
    /// Every piece created for this board, captured or not.
    pieces: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            pieces: Vec::new(),
        }
    }

    /// Creates a board in the standard opening layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup();
        board
    }

    /// Resets the board to the standard opening layout, discarding every piece.
    pub fn setup(&mut self) {
        *self = Self::empty();
        for color in Color::ALL {
            let back = color.back_rank();
            let pawns = color.pawn_home_rank();
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let file = file as u8;
                if let Some(sq) = Square::from_coords(file, pawns) {
                    self.place(sq, PieceKind::Pawn, color);
                }
                if let Some(sq) = Square::from_coords(file, back) {
                    self.place(sq, *kind, color);
                }
            }
        }
    }

    /// Creates a board from a FEN string; see [`Board::from_parsed_fen`].
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_parsed_fen(&Fen::parse(fen)?))
    }

    /// Creates a board from a parsed FEN record.
    ///
    /// Without a castling field every piece starts unmoved. With one, kings
    /// and rooks that could not castle according to it are marked as moved.
    pub fn from_parsed_fen(fen: &Fen) -> Self {
        let mut board = Self::empty();
        for &(sq, kind, color) in &fen.pieces {
            board.place(sq, kind, color);
        }
        if let Some(rights) = fen.castling {
            board.apply_castling_availability(rights);
        }
        board
    }

    fn apply_castling_availability(&mut self, rights: CastlingAvailability) {
        for sq in Square::all() {
            let Some(id) = self.occupant(sq) else {
                continue;
            };
            let piece = self.piece(id);
            let home = piece.color.back_rank();
            let can_castle = match piece.kind {
                PieceKind::King => {
                    sq == home_square(4, home)
                        && (rights.kingside(piece.color) || rights.queenside(piece.color))
                }
                PieceKind::Rook if sq == home_square(7, home) => rights.kingside(piece.color),
                PieceKind::Rook if sq == home_square(0, home) => rights.queenside(piece.color),
                PieceKind::Rook => false,
                _ => continue,
            };
            self.piece_mut(id).set_moved(!can_castle);
        }
    }

    /// Derives the FEN castling field from king/rook placement and has-moved flags.
    pub fn castling_availability(&self) -> CastlingAvailability {
        let mut rights = CastlingAvailability::default();
        for color in Color::ALL {
            let home = color.back_rank();
            let unmoved = |file: u8, kind: PieceKind| {
                self.piece_at(home_square(file, home))
                    .is_some_and(|p| p.kind == kind && p.color == color && !p.has_moved())
            };
            if unmoved(4, PieceKind::King) {
                rights.set_kingside(color, unmoved(7, PieceKind::Rook));
                rights.set_queenside(color, unmoved(0, PieceKind::Rook));
            }
        }
        rights
    }

    /// Returns the FEN piece-placement field for the current occupancy.
    pub fn placement_fen(&self) -> String {
        let mut fen = String::new();
        for rank in (0..8u8).rev() {
            let mut empty_count = 0;
            for file in 0..8u8 {
                match self.piece_at(home_square(file, rank)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.kind.to_fen_char(piece.color));
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }
        fen
    }

    /// Resolves a square by name (e.g. `"e4"`).
    pub fn get_square(&self, name: &str) -> Result<Square, SquareParseError> {
        Square::from_name(name)
    }

    /// Returns the handle of the piece on `sq`, if any.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<PieceId> {
        self.squares[sq.index() as usize]
    }

    /// Returns the piece behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this board or one it was cloned from.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.0]
    }

    /// Returns the piece standing on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.occupant(sq).map(|id| self.piece(id))
    }

    /// Creates a new unmoved piece on `sq`, replacing any occupant.
    pub fn place(&mut self, sq: Square, kind: PieceKind, color: Color) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(kind, color));
        self.set_occupant(sq, Some(id));
        id
    }

    /// Clears `sq`, returning the handle of the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Option<PieceId> {
        self.squares[sq.index() as usize].take()
    }

    pub(crate) fn set_occupant(&mut self, sq: Square, id: Option<PieceId>) {
        self.squares[sq.index() as usize] = id;
    }

    /// Iterates over occupied squares from a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Returns the kind and color on every square.
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = [None; 64];
        for (sq, piece) in self.pieces() {
            snapshot[sq.index() as usize] = Some((piece.kind, piece.color));
        }
        snapshot
    }

    /// Returns the first square (scanning a1 to h8) holding a king of `color`.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    /// Returns true if no square strictly between `from` and `to` is occupied.
    ///
    /// The two squares must share a rank, file, or diagonal. Adjacent squares
    /// have nothing between them and are always clear.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let (dx, dy) = from.delta(to);
        let steps = dx.abs().max(dy.abs());
        let (step_x, step_y) = (dx.signum(), dy.signum());
        (1..steps)
            .filter_map(|i| from.offset(step_x * i, step_y * i))
            .all(|sq| self.occupant(sq).is_none())
    }
}

#[inline]
fn home_square(file: u8, rank: u8) -> Square {
    match Square::from_coords(file, rank) {
        Some(sq) => sq,
        None => unreachable!("file and rank are board constants"),
    }
}
