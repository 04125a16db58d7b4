//! Perfect Tic-Tac-Toe - unified CLI
//!
//! Terminal game, score service and board analysis.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use perfect_tictactoe::{
    AppConfig, Board, GameSession, HttpScoreSink, ScoreStore, TallySink, best_move, play, rules,
    scored_moves, serve,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = AppConfig::load(&cli.config)?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play { scores_url } => {
            if scores_url.is_some() {
                config.set_scores_endpoint(scores_url);
            }
            run_play(config).await
        }
        Command::Serve { host, port } => {
            config.set_server(host, port);
            run_server(config).await
        }
        Command::Analyze { board } => run_analyze(&board),
    }
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play in the terminal, reporting finished games locally and, when
/// configured, to the score service.
#[instrument(skip_all)]
async fn run_play(config: AppConfig) -> Result<()> {
    let remote = match config.scores().endpoint() {
        Some(endpoint) => {
            let sink = HttpScoreSink::from_current(endpoint)?;
            match sink.fetch().await {
                Ok(tally) => info!(%tally, "Global scores"),
                Err(e) => warn!(error = %e, "Could not fetch global scores"),
            }
            Some(sink)
        }
        None => None,
    };

    let mut session = GameSession::new((TallySink::new(), remote));

    // Stdin is blocking; keep it off the runtime workers that send scores.
    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        play(&mut session, stdin.lock(), std::io::stdout())
    })
    .await
    .context("terminal game task failed")??;

    Ok(())
}

/// Run the HTTP score service.
#[instrument(skip_all)]
async fn run_server(config: AppConfig) -> Result<()> {
    let server = config.server();
    info!(host = %server.host(), port = server.port(), "Starting score service");
    serve(server.host(), server.port(), ScoreStore::new()).await?;
    Ok(())
}

/// Print each candidate move's minimax score and the chosen move.
#[instrument]
fn run_analyze(board: &str) -> Result<()> {
    let board: Board = board.parse().context("invalid board")?;
    println!("{}\n", board);

    let outcome = rules::outcome(&board);
    if outcome.is_terminal() {
        println!("{}", outcome);
        return Ok(());
    }

    for candidate in scored_moves(&board) {
        println!("{:>8}  {:+}", candidate.mv().to_string(), candidate.score());
    }
    if let Some(mv) = best_move(&board) {
        println!("\nBest move: {}", mv);
    }
    Ok(())
}
