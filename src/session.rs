//! Human-versus-computer game session.

use crate::games::tictactoe::{
    Board, GameOutcome, Move, MoveError, Player, assert_invariants, best_move, rules,
};
use crate::scores::ScoreSink;
use tracing::{debug, error, info, instrument};

/// One human-versus-computer game and the sink its results go to.
///
/// The human always moves first. Every human move is answered by the
/// computer within the same call, so between calls it is always the human's
/// turn unless the game has finished.
#[derive(Debug, Clone)]
pub struct GameSession<S> {
    board: Board,
    turn: Player,
    sink: S,
}

impl<S: ScoreSink> GameSession<S> {
    /// Creates a session with an empty board and the human to move.
    #[instrument(skip(sink))]
    pub fn new(sink: S) -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            turn: Player::Human,
            sink,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the outcome of the current board.
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(&self.board)
    }

    /// Returns the score sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Plays the human's move at (`row`, `col`) and, if the game continues,
    /// the computer's reply.
    ///
    /// A finished game is reported to the sink exactly once, at the move that
    /// finished it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has already finished, or an
    /// invalid-move error if the cell is off the board or occupied. Nothing
    /// changes on error and no search is run.
    #[instrument(skip(self))]
    pub fn request_human_move(&mut self, row: usize, col: usize) -> Result<GameOutcome, MoveError> {
        if self.outcome().is_terminal() {
            debug!("Move requested after game over");
            return Err(MoveError::GameOver);
        }

        rules::apply_move(&mut self.board, Move::new(row, col), Player::Human)?;
        assert_invariants(&self.board);
        debug!(board = %self.board, "Human moved");

        if let Some(outcome) = self.finish_if_terminal() {
            return Ok(outcome);
        }

        self.turn = Player::Computer;
        let Some(reply) = best_move(&self.board) else {
            error!("No computer move on a board that is not full");
            self.turn = Player::Human;
            return Ok(self.outcome());
        };
        rules::apply_move(&mut self.board, reply, Player::Computer)?;
        assert_invariants(&self.board);
        info!(%reply, "Computer moved");

        if let Some(outcome) = self.finish_if_terminal() {
            return Ok(outcome);
        }

        self.turn = Player::Human;
        Ok(GameOutcome::InProgress)
    }

    /// Clears the board for a new game with the human to move.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> &Board {
        info!("Starting new game");
        self.board = Board::new();
        self.turn = Player::Human;
        &self.board
    }

    /// Reports the outcome if the last move ended the game.
    fn finish_if_terminal(&mut self) -> Option<GameOutcome> {
        let outcome = self.outcome();
        if !outcome.is_terminal() {
            return None;
        }

        info!(%outcome, "Game finished");
        self.sink.report(outcome);
        Some(outcome)
    }
}
