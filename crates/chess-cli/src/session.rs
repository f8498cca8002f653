//! Interactive game loop over any reader/writer pair.

use crate::command::Command;
use crate::render::render;
use chess_rules::Game;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A terminal session driving one [`Game`].
pub struct Session<R: BufRead, W: Write> {
    game: Game,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, reader: R, writer: W) -> Self {
        Self {
            game,
            reader,
            writer,
        }
    }

    /// Runs until the player types `end` or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Welcome to Chess!")?;
        self.print_board()?;

        loop {
            write!(
                self.writer,
                "{}'s turn. Enter your move (e.g., e2 e4) or 'undo': ",
                self.game.turn()
            )?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                debug!("input closed");
                return Ok(());
            }

            match Command::parse(&line) {
                Command::Move { from, to } => match self.game.play_move(&from, &to) {
                    Ok(()) => writeln!(self.writer, "Moved from {} to {}.", from, to)?,
                    Err(e) => writeln!(self.writer, "Invalid move ({}). Try again.", e)?,
                },
                Command::Undo => match self.game.undo_move() {
                    Ok(_) => writeln!(self.writer, "Move undone.")?,
                    Err(_) => writeln!(self.writer, "No moves to undo.")?,
                },
                Command::End => {
                    writeln!(self.writer, "You ended the game")?;
                    return Ok(());
                }
                Command::Unknown(input) => {
                    debug!(%input, "unrecognized command");
                    writeln!(self.writer, "Invalid command. Try again.")?;
                }
            }
            self.print_board()?;
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn print_board(&mut self) -> io::Result<()> {
        write!(self.writer, "{}", render(self.game.board(), self.game.turn()))
    }
}
