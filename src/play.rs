//! Line-oriented terminal front end.

use crate::games::tictactoe::{GameOutcome, Move};
use crate::scores::{ScoreSink, ScoreTally};
use crate::session::GameSession;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const HELP: &str = "Enter a cell number (1-9) or row,col (0-2). Commands: new, scores, help, quit.";

/// A command typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Play(Move),
    New,
    Scores,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        match line.trim().to_lowercase().as_str() {
            "new" | "restart" => Ok(Command::New),
            "scores" => Ok(Command::Scores),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => other.parse().map(Command::Play).map_err(|e| e.to_string()),
        }
    }
}

/// Runs an interactive game over `input` and `output` until `quit` or EOF.
///
/// Whenever the sink learns a new global aggregate (at startup, or after a
/// finished game reaches the score service) it is printed before the next
/// prompt.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails. Rejected
/// moves are printed and play continues.
#[instrument(skip_all)]
pub fn play<S, R, W>(session: &mut GameSession<S>, input: R, mut output: W) -> std::io::Result<()>
where
    S: ScoreSink,
    R: BufRead,
    W: Write,
{
    info!("Starting terminal game");
    writeln!(output, "You are X, the computer is O. {}", HELP)?;
    let mut shown_global = None;
    announce_global(session.sink(), &mut shown_global, &mut output)?;
    writeln!(output, "{}\n", session.board())?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&mut output)?;
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                prompt(&mut output)?;
                continue;
            }
        };
        debug!(?command, "Command read");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Scores => write_scores(session.sink(), &mut output)?,
            Command::New => {
                let board = session.reset_game();
                writeln!(output, "New game.\n{}\n", board)?;
            }
            Command::Play(mv) => match session.request_human_move(mv.row, mv.col) {
                Ok(outcome) => {
                    writeln!(output, "{}\n", session.board())?;
                    if outcome != GameOutcome::InProgress {
                        writeln!(output, "{}", outcome)?;
                        if let Some(tally) = session.sink().tally() {
                            writeln!(output, "Scores: {}", tally)?;
                        }
                        writeln!(output, "Type 'new' to play again.")?;
                    }
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
        }
        announce_global(session.sink(), &mut shown_global, &mut output)?;
        prompt(&mut output)?;
    }

    info!("Terminal game ended");
    Ok(())
}

/// Prints the sink's global aggregate if it changed since it was last shown.
fn announce_global<S: ScoreSink, W: Write>(
    sink: &S,
    shown: &mut Option<ScoreTally>,
    output: &mut W,
) -> std::io::Result<()> {
    match sink.global_tally() {
        Some(tally) if *shown != Some(tally) => {
            *shown = Some(tally);
            writeln!(output, "Global scores: {}", tally)
        }
        _ => Ok(()),
    }
}

fn write_scores<S: ScoreSink, W: Write>(sink: &S, output: &mut W) -> std::io::Result<()> {
    let local = sink.tally();
    let global = sink.global_tally();
    if let Some(tally) = local {
        writeln!(output, "Scores: {}", tally)?;
    }
    if let Some(tally) = global {
        writeln!(output, "Global scores: {}", tally)?;
    }
    if local.is_none() && global.is_none() {
        writeln!(output, "No scores kept")?;
    }
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> std::io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
