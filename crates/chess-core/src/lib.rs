//! Core types for chess.
//!
//! This crate provides the vocabulary shared by the rules engine and its
//! front ends:
//! - [`Color`] for the two sides
//! - [`Square`] for board coordinates and their algebraic names
//! - [`PieceKind`] for the six piece variants
//! - [`Move`] for a coordinate-pair move with a descriptive [`MoveFlag`]
//! - FEN parsing via [`Fen`]

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{CastlingAvailability, Fen, FenError};
pub use mov::{Move, MoveFlag};
pub use piece::PieceKind;
pub use square::{Square, SquareParseError};
