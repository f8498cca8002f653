//! Player command parsing.

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the piece on `from` to `to`. Square names are resolved by the game.
    Move { from: String, to: String },
    /// Take back the last move.
    Undo,
    /// End the session.
    End,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses one input line.
    ///
    /// Accepts `e2 e4`, `e2e4`, `undo` and `end` (keywords case-insensitive).
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            [word] if word.eq_ignore_ascii_case("undo") => Command::Undo,
            [word] if word.eq_ignore_ascii_case("end") => Command::End,
            [from, to] => Command::Move {
                from: from.to_string(),
                to: to.to_string(),
            },
            [joined] if joined.len() == 4 && joined.is_ascii() => {
                let (from, to) = joined.split_at(2);
                Command::Move {
                    from: from.to_string(),
                    to: to.to_string(),
                }
            }
            _ => Command::Unknown(input.to_string()),
        }
    }
}
