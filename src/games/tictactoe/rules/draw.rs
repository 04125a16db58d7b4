//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (no empty cells).
///
/// A full board can also hold a winning line, so callers check
/// [`check_win`](super::check_win) for both players before treating this as
/// a draw.
pub fn check_draw(board: &Board) -> bool {
    board.cells().iter().all(|&c| c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::winner;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!check_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(check_draw(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_full_board_with_winner() {
        // Full, but X holds the top row.
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert!(check_draw(&board));
        assert!(winner(&board).is_some());
    }
}
