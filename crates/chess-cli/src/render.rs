//! Text rendering of the board.

use chess_core::{Color, Square};
use chess_rules::Board;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Renders `board` as seen by `perspective`.
///
/// White sees rank 8 at the top with files a to h. Black sees rank 1 at the
/// top with files h to a. File letters frame the top and bottom, rank
/// numbers both sides, and empty squares show as `.`.
pub fn render(board: &Board, perspective: Color) -> String {
    let (ranks, files): (Vec<u8>, Vec<u8>) = match perspective {
        Color::White => ((0..8).rev().collect(), (0..8).collect()),
        Color::Black => ((0..8).collect(), (0..8).rev().collect()),
    };

    let header = format!(
        "  {}",
        files
            .iter()
            .map(|&f| FILES[f as usize].to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    for &rank in &ranks {
        let label = rank + 1;
        out.push_str(&format!("{} ", label));
        for &file in &files {
            let cell = Square::from_coords(file, rank)
                .and_then(|sq| board.piece_at(sq))
                .map_or('.', |piece| piece.symbol());
            out.push(cell);
            out.push(' ');
        }
        out.push_str(&format!(" {}\n", label));
    }
    out.push_str(&header);
    out.push('\n');
    out
}
