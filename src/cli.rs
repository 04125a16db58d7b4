//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Perfect Tic-Tac-Toe - play against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "perfect_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Score service URL (e.g. http://127.0.0.1:3000/scores)
        #[arg(long)]
        scores_url: Option<String>,
    },

    /// Run the HTTP score service
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Score every computer move on a board
    Analyze {
        /// Nine cells, X for the human, O for the computer, . for empty
        /// (e.g. "XX./OO./...")
        board: String,
    },
}
