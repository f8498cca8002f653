//! Chess - two players at one terminal.
//!
//! Reads moves such as `e2 e4` from stdin, validates them with
//! `chess-rules`, and redraws the board from the side to move after every
//! command. `undo` takes back the last move and `end` quits.

mod command;
mod render;
mod session;

use chess_rules::{Game, RulesConfig};
use clap::Parser;
use session::Session;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Two-player chess in the terminal.
#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Two-player chess in the terminal")]
struct Args {
    /// Path to the rules configuration file (ignored if missing)
    #[arg(long, default_value = "chess.toml")]
    config: PathBuf,

    /// Start from this FEN position instead of the standard setup
    #[arg(long)]
    fen: Option<String>,

    /// Reject moves that leave your own king in check
    #[arg(long)]
    forbid_self_check: bool,

    /// Refuse to castle while in check or across attacked squares
    #[arg(long)]
    castling_attack_check: bool,

    /// Make undo fully restore castling state
    #[arg(long)]
    restore_on_undo: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let args = Args::parse();

    let mut config = RulesConfig::load_or_default(&args.config)?;
    config.forbid_self_check |= args.forbid_self_check;
    config.castling_attack_check |= args.castling_attack_check;
    config.restore_on_undo |= args.restore_on_undo;

    let game = match &args.fen {
        Some(fen) => {
            tracing::info!("Starting from FEN: {}", fen);
            Game::from_fen_with_config(fen, config)?
        }
        None => Game::with_config(config),
    };
    tracing::info!("Rules config: {:?}", game.config());

    let mut session = Session::new(game, BufReader::new(io::stdin()), io::stdout());
    session.run()?;
    tracing::info!(
        "Session ended after {} moves: {}",
        session.game().history().len(),
        session.game().to_fen()
    );
    Ok(())
}
