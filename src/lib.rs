//! Perfect Tic-Tac-Toe library - a human against an unbeatable computer
//!
//! # Architecture
//!
//! - **Games**: board, rules and exhaustive minimax search for tic-tac-toe
//! - **Session**: one human-versus-computer game driving the rules and search
//! - **Scores**: tallies, the score-reporting sink and the HTTP score service
//! - **Play**: line-oriented terminal front end
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{GameOutcome, GameSession, TallySink};
//!
//! let mut session = GameSession::new(TallySink::new());
//! let outcome = session.request_human_move(1, 1)?;
//! assert_eq!(outcome, GameOutcome::InProgress);
//! # Ok::<(), perfect_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod play;
mod scores;
mod session;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, SCORES_URL_ENV, ScoresConfig, ServerConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardInvariants, Cell, GameOutcome, Invariant, InvariantSet, InvariantViolation,
    MarkBalance, Move, MoveError, ParseBoardError, ParseMoveError, Player, ScoredMove,
    SingleWinner, best_move, evaluate, rules, scored_moves, search,
};

// Crate-level exports - Session management
pub use session::GameSession;

// Crate-level exports - Scores
pub use scores::{
    HttpScoreSink, ScoreError, ScoreSink, ScoreStore, ScoreTally, ScoreUpdate, TallySink, router,
    serve,
};

// Crate-level exports - Terminal front end
pub use play::play;
