//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The session and the search engine are
//! the only callers that change board state, and both go through here or
//! through private board copies.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{LINES, check_win, winner};

use super::{Board, GameOutcome, Move, MoveError, Player};
use tracing::{debug, instrument};

/// Places `player`'s marker at `mv`.
///
/// # Errors
///
/// Returns [`MoveError::OutOfRange`] if the coordinates are off the board and
/// [`MoveError::Occupied`] if the cell is taken. The board is unchanged on
/// error.
#[instrument(skip(board), fields(row = mv.row, col = mv.col))]
pub fn apply_move(board: &mut Board, mv: Move, player: Player) -> Result<(), MoveError> {
    if !mv.in_range() {
        debug!("Rejected out-of-range move");
        return Err(MoveError::OutOfRange {
            row: mv.row,
            col: mv.col,
        });
    }

    if !board.is_empty(mv) {
        debug!("Rejected move on occupied cell");
        return Err(MoveError::Occupied(mv));
    }

    board.set(mv, player.marker());
    Ok(())
}

/// Yields the coordinates of every empty cell in row-major order.
///
/// The iterator borrows the board, so it always reflects the board as it is
/// at the time of the call.
pub fn available_moves(board: &Board) -> impl Iterator<Item = Move> + '_ {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.owner().is_none())
        .filter_map(|(index, _)| Move::from_index(index))
}

/// Derives the outcome of the game on `board`.
///
/// Wins are checked before fullness, so a full board with a line is a win,
/// not a draw.
pub fn outcome(board: &Board) -> GameOutcome {
    if check_win(board, Player::Computer) {
        GameOutcome::ComputerWins
    } else if check_win(board, Player::Human) {
        GameOutcome::HumanWins
    } else if check_draw(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
