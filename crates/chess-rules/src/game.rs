//! Game state: the board, whose turn it is, and the move history.
//!
//! [`Game::play_move`] validates a move for the side to move, applies it, and
//! hands the turn over. [`Game::undo_move`] pops the last [`GameMove`] and puts
//! its pieces back. By default undo restores square occupancy only; has-moved
//! flags and a castled rook stay where the move left them (see
//! [`RulesConfig::restore_on_undo`]).

use crate::movement::{CastleSide, MoveError};
use crate::{Board, PieceId, RulesConfig, Snapshot};
use chess_core::{Color, Fen, FenError, Move, MoveFlag, PieceKind, Square, SquareParseError};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A square name could not be resolved.
    #[error(transparent)]
    InvalidSquare(#[from] SquareParseError),
    /// The origin square is empty.
    #[error("no piece on {0}")]
    NoPieceAtOrigin(Square),
    /// The piece on the origin square belongs to the side not on move.
    #[error("it is {expected}'s turn, but the piece on {square} is {found}")]
    WrongTurnColor {
        square: Square,
        expected: Color,
        found: Color,
    },
    /// The piece cannot make the move.
    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),
    /// The move would leave the mover's king attacked.
    #[error("move would leave the {0} king in check")]
    LeavesKingInCheck(Color),
    /// The king is in check or would cross an attacked square while castling.
    #[error("cannot castle out of or through check")]
    CastlingUnsafe,
    /// There is no move to take back.
    #[error("no moves to undo")]
    EmptyUndoHistory,
}

/// Rook relocation performed alongside a castling king move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RookShift {
    rook: PieceId,
    from: Square,
    to: Square,
    had_moved: bool,
}

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    /// Squares and flag of the move.
    pub mov: Move,
    /// The piece that moved.
    pub piece: PieceId,
    /// Kind of the piece that moved.
    pub kind: PieceKind,
    /// Color of the piece that moved.
    pub color: Color,
    /// The piece that stood on the destination, if any.
    pub captured: Option<PieceId>,
    had_moved: bool,
    rook_shift: Option<RookShift>,
}

impl fmt::Display for GameMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.symbol(self.color), self.mov)
    }
}

/// A two-player game session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    /// Played moves, most recent last.
    history: Vec<GameMove>,
    /// FEN fullmove number; advances after each Black move.
    fullmove: u32,
    config: RulesConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position and White to move.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Creates a new standard game using `config`.
    pub fn with_config(config: RulesConfig) -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
            history: Vec::new(),
            fullmove: 1,
            config,
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::from_fen_with_config(fen, RulesConfig::default())
    }

    /// Creates a game from a FEN string using `config`.
    pub fn from_fen_with_config(fen: &str, config: RulesConfig) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        Ok(Game {
            board: Board::from_parsed_fen(&parsed),
            turn: parsed.active_color,
            history: Vec::new(),
            fullmove: parsed.fullmove,
            config,
        })
    }

    /// Resets to the standard opening layout with White to move and no history.
    pub fn setup_board(&mut self) {
        self.board.setup();
        self.turn = Color::White;
        self.history.clear();
        self.fullmove = 1;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the active rule configuration.
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[GameMove] {
        &self.history
    }

    /// Returns the kind and color on every square.
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// Returns true if the king of `color` is attacked.
    pub fn is_check(&self, color: Color) -> bool {
        self.board.is_king_in_check(color)
    }

    /// Returns true if the piece on `from` is a king that may castle to `to`
    /// under the stricter, attack-aware test.
    pub fn can_castle(&self, from: Square, to: Square) -> bool {
        self.board
            .piece_at(from)
            .is_some_and(|piece| piece.can_castle(&self.board, from, to))
    }

    /// Returns the position as FEN.
    ///
    /// Castling availability is derived from has-moved flags. No en passant
    /// square is ever written and the halfmove clock is always 0. The fullmove
    /// number continues from the starting position's and advances after each
    /// Black move.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} - 0 {}",
            self.board.placement_fen(),
            self.turn.fen_char(),
            self.board.castling_availability().to_fen(),
            self.fullmove
        )
    }

    /// Plays a move given as two square names (e.g. `"e2"`, `"e4"`).
    ///
    /// On failure nothing changes.
    pub fn play_move(&mut self, start: &str, end: &str) -> Result<(), GameError> {
        let from = self.board.get_square(start)?;
        let to = self.board.get_square(end)?;
        self.play(from, to)
    }

    /// Plays a move between two squares for the side to move.
    ///
    /// On failure nothing changes.
    pub fn play(&mut self, from: Square, to: Square) -> Result<(), GameError> {
        let id = match self.check_move(from, to) {
            Ok(id) => id,
            Err(e) => {
                debug!(%from, %to, error = %e, "move rejected");
                return Err(e);
            }
        };
        self.make_move(from, to, id);
        self.switch_turn();
        Ok(())
    }

    /// Takes back the most recent move and returns it.
    ///
    /// Occupancy of the move's two squares is restored and the turn switches
    /// back. Unless [`RulesConfig::restore_on_undo`] is set, the moved piece
    /// keeps its has-moved flag and a castled rook stays beside the king's
    /// start square.
    pub fn undo_move(&mut self) -> Result<GameMove, GameError> {
        let last = self.history.pop().ok_or(GameError::EmptyUndoHistory)?;
        self.board.set_occupant(last.mov.from(), Some(last.piece));
        self.board.set_occupant(last.mov.to(), last.captured);

        if self.config.restore_on_undo {
            self.board.piece_mut(last.piece).set_moved(last.had_moved);
            if let Some(shift) = last.rook_shift {
                self.board.set_occupant(shift.to, None);
                self.board.set_occupant(shift.from, Some(shift.rook));
                self.board.piece_mut(shift.rook).set_moved(shift.had_moved);
            }
        }

        if last.color == Color::Black {
            self.fullmove -= 1;
        }
        self.switch_turn();
        debug!(mov = %last, "move undone");
        Ok(last)
    }

    fn check_move(&self, from: Square, to: Square) -> Result<PieceId, GameError> {
        let id = self
            .board
            .occupant(from)
            .ok_or(GameError::NoPieceAtOrigin(from))?;
        let piece = self.board.piece(id);
        if piece.color != self.turn {
            return Err(GameError::WrongTurnColor {
                square: from,
                expected: self.turn,
                found: piece.color,
            });
        }

        piece.validate_move(&self.board, from, to)?;

        if self.config.castling_attack_check
            && is_castling(piece.kind, from, to)
            && !piece.can_castle(&self.board, from, to)
        {
            return Err(GameError::CastlingUnsafe);
        }

        if self.config.forbid_self_check {
            let mut trial = self.board.clone();
            apply_move(&mut trial, from, to, id);
            if trial.is_king_in_check(piece.color) {
                return Err(GameError::LeavesKingInCheck(piece.color));
            }
        }

        Ok(id)
    }

    fn make_move(&mut self, from: Square, to: Square, id: PieceId) {
        let record = apply_move(&mut self.board, from, to, id);
        debug!(
            mov = %record,
            flag = ?record.mov.flag(),
            capture = record.mov.is_capture(),
            "move applied"
        );
        if record.color == Color::Black {
            self.fullmove += 1;
        }
        self.history.push(record);
    }

    fn switch_turn(&mut self) {
        self.turn = !self.turn;
    }
}

fn is_castling(kind: PieceKind, from: Square, to: Square) -> bool {
    kind == PieceKind::King && CastleSide::from_file_delta(from.delta(to).0).is_some()
}

/// Moves piece `id` from `from` to `to`, relocating the rook when a king
/// moves two files, and returns the record needed to undo it.
fn apply_move(board: &mut Board, from: Square, to: Square, id: PieceId) -> GameMove {
    let piece = *board.piece(id);
    let captured = board.occupant(to);
    let (dx, dy) = from.delta(to);

    let mut flag = if captured.is_some() {
        MoveFlag::Capture
    } else if piece.kind == PieceKind::Pawn && dy.abs() == 2 {
        MoveFlag::DoublePush
    } else {
        MoveFlag::Normal
    };

    let mut rook_shift = None;
    if let (PieceKind::King, Some(side)) = (piece.kind, CastleSide::from_file_delta(dx)) {
        flag = side.flag();
        if let (Some(rook_from), Some(rook_to)) = (side.rook_square(from), side.rook_landing(from))
        {
            if let Some(rook) = board.remove(rook_from) {
                let had_moved = board.piece(rook).has_moved();
                board.set_occupant(rook_to, Some(rook));
                board.piece_mut(rook).set_moved(true);
                rook_shift = Some(RookShift {
                    rook,
                    from: rook_from,
                    to: rook_to,
                    had_moved,
                });
            }
        }
    }

    board.set_occupant(to, Some(id));
    board.set_occupant(from, None);
    board.piece_mut(id).set_moved(true);

    GameMove {
        mov: Move::new(from, to, flag),
        piece: id,
        kind: piece.kind,
        color: piece.color,
        captured,
        had_moved: piece.has_moved(),
        rook_shift,
    }
}
