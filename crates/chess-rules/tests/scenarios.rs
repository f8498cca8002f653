//! End-to-end play scenarios through the public `Game` API.

use chess_core::{Color, MoveFlag, PieceKind, Square};
use chess_rules::{Board, Game, GameError, MoveError, RulesConfig};

fn sq(name: &str) -> Square {
    Square::from_name(name).unwrap()
}

fn at(game: &Game, name: &str) -> Option<(PieceKind, Color)> {
    game.board().piece_at(sq(name)).map(|p| (p.kind, p.color))
}

#[test]
fn test_opening_exchange_and_blocked_pawn() {
    let mut game = Game::new();

    game.play_move("e2", "e4").unwrap();
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(at(&game, "e4"), Some((PieceKind::Pawn, Color::White)));
    assert_eq!(at(&game, "e2"), None);

    game.play_move("e7", "e5").unwrap();
    assert_eq!(game.turn(), Color::White);

    let before = game.snapshot();
    assert_eq!(
        game.play_move("e4", "e5"),
        Err(GameError::IllegalMove(MoveError::PathObstructed))
    );
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_knight_development() {
    let mut game = Game::new();
    game.play_move("b1", "c3").unwrap();
    assert_eq!(at(&game, "c3"), Some((PieceKind::Knight, Color::White)));
    assert_eq!(at(&game, "b1"), None);
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn test_kingside_castle_after_clearing() {
    let mut game = Game::new();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
    ] {
        game.play_move(from, to).unwrap();
    }

    assert!(game.can_castle(Square::E1, sq("g1")));
    game.play_move("e1", "g1").unwrap();
    assert_eq!(at(&game, "g1"), Some((PieceKind::King, Color::White)));
    assert_eq!(at(&game, "f1"), Some((PieceKind::Rook, Color::White)));
    assert_eq!(at(&game, "h1"), None);
    assert_eq!(at(&game, "e1"), None);
    assert_eq!(
        game.history().last().map(|m| m.mov.flag()),
        Some(MoveFlag::CastleKingside)
    );
}

#[test]
fn test_undo_with_no_history() {
    let mut game = Game::new();
    assert_eq!(game.undo_move(), Err(GameError::EmptyUndoHistory));
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.snapshot(), Board::new().snapshot());
}

#[test]
fn test_play_then_undo_restores_position() {
    let mut game = Game::new();
    game.play_move("d2", "d4").unwrap();
    let before = game.snapshot();

    game.play_move("g8", "f6").unwrap();
    let undone = game.undo_move().unwrap();

    assert_eq!(undone.mov.from(), sq("g8"));
    assert_eq!(undone.mov.to(), sq("f6"));
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.turn(), Color::Black);
    // The knight keeps its has-moved flag.
    assert!(game.board().piece_at(sq("g8")).unwrap().has_moved());
}

#[test]
fn test_undo_all_the_way_back() {
    let mut game = Game::new();
    let moves = [("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("d8", "d5")];
    for (from, to) in moves {
        game.play_move(from, to).unwrap();
    }
    for _ in moves {
        game.undo_move().unwrap();
    }
    assert_eq!(game.snapshot(), Board::new().snapshot());
    assert_eq!(game.turn(), Color::White);
    assert!(game.history().is_empty());
}

#[test]
fn test_castling_validity_ignores_attacks() {
    let game = Game::from_fen("4kr2/8/8/8/8/8/8/4K2R w K").unwrap();
    assert!(game.board().is_valid_move(Square::E1, sq("g1")));
    assert!(!game.can_castle(Square::E1, sq("g1")));
}

#[test]
fn test_undo_castle_is_literal_by_default() {
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq").unwrap();
    game.play_move("e1", "g1").unwrap();
    game.undo_move().unwrap();

    assert_eq!(at(&game, "e1"), Some((PieceKind::King, Color::White)));
    assert_eq!(at(&game, "f1"), Some((PieceKind::Rook, Color::White)));
    assert_eq!(at(&game, "h1"), None);
    // The king has moved, so castling is gone for good.
    assert!(!game.board().is_valid_move(Square::E1, sq("g1")));
}

#[test]
fn test_strict_rules_game() {
    let mut game = Game::with_config(RulesConfig::strict());
    for (from, to) in [("e2", "e4"), ("f7", "f5"), ("d1", "h5")] {
        game.play_move(from, to).unwrap();
    }
    // Queen on h5 checks along the e8-h5 diagonal.
    assert!(game.is_check(Color::Black));

    // Black may not ignore the check.
    assert_eq!(
        game.play_move("a7", "a6"),
        Err(GameError::LeavesKingInCheck(Color::Black))
    );
    game.play_move("g7", "g6").unwrap();
    assert!(!game.is_check(Color::Black));
}

#[test]
fn test_fen_game_resumes_with_side_to_move() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1").unwrap();
    assert_eq!(game.turn(), Color::Black);
    assert!(matches!(
        game.play_move("e2", "e4"),
        Err(GameError::WrongTurnColor { .. })
    ));
    game.play_move("e8", "d8").unwrap();
    game.play_move("e2", "e4").unwrap();
    assert_eq!(game.to_fen(), "3k4/8/8/8/4P3/8/8/4K3 b - - 0 2");
}
