//! Win detection logic for tic-tac-toe.

use super::super::{Board, Move, Player};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, the main diagonal,
/// then the anti-diagonal.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Checks if `player` occupies all three cells of any line.
pub fn check_win(board: &Board, player: Player) -> bool {
    let marker = Some(player.marker());
    LINES
        .iter()
        .any(|line| line.iter().all(|&mv| board.cell(mv) == marker))
}

/// Returns the player holding a complete line, if any.
///
/// The computer is checked first, matching the search's terminal scoring.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Computer, Player::Human]
        .into_iter()
        .find(|&player| check_win(board, player))
}
