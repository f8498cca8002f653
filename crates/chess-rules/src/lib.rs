//! Two-player chess rules referee.
//!
//! This crate provides:
//! - [`Board`] - 64-square occupancy over a session-owned set of [`Piece`]s
//! - Per-variant movement predicates ([`Piece::is_valid_move`]) and castling
//!   checks ([`Piece::can_castle`])
//! - Path clearance and check queries on the board
//! - [`Game`] - turn alternation, move application, and undo history
//! - [`RulesConfig`] - opt-in stricter behaviors
//!
//! # Architecture
//!
//! Squares hold [`PieceId`] handles into a piece arena owned by the board.
//! A captured piece leaves the board but stays in the arena, so the
//! [`GameMove`] that captured it can put it back on undo. Every predicate
//! receives the board it should consult; pieces never point back at it.
//!
//! The referee validates single moves only. It does not generate move lists,
//! detect checkmate or stalemate, or implement en passant and promotion.
//!
//! # Example
//!
//! ```
//! use chess_core::Color;
//! use chess_rules::Game;
//!
//! let mut game = Game::new();
//! game.play_move("e2", "e4").unwrap();
//! game.play_move("e7", "e5").unwrap();
//! assert_eq!(game.turn(), Color::White);
//!
//! // Pawns cannot push straight into an occupied square.
//! assert!(game.play_move("e4", "e5").is_err());
//!
//! game.undo_move().unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! ```

mod board;
mod config;
mod game;
pub mod movement;

pub use board::{Board, Piece, PieceId, Snapshot};
pub use config::{ConfigError, RulesConfig};
pub use game::{Game, GameError, GameMove};
pub use movement::{CastleSide, MoveError};
