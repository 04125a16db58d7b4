//! Exhaustive minimax search for the computer's move.
//!
//! Scores are from the computer's point of view: `+1` for a computer win,
//! `-1` for a human win, `0` for a draw. There is no depth limit and no
//! pruning; the 3x3 tree is small enough to search completely.

use super::rules::{available_moves, check_draw, check_win};
use super::{Board, Move, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a board the computer has won.
pub const COMPUTER_WIN: i32 = 1;
/// Score of a board the human has won.
pub const HUMAN_WIN: i32 = -1;
/// Score of a drawn board.
pub const DRAW: i32 = 0;

/// A candidate move with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct ScoredMove {
    #[getter(copy)]
    mv: Move,
    #[getter(copy)]
    score: i32,
}

/// Minimax value of `board` with `to_move` about to play.
///
/// Terminal boards are scored directly and never expanded, even if empty
/// cells remain. Otherwise every empty cell is tried on a copy of the board
/// and the computer takes the maximum child score, the human the minimum.
/// Whose turn it is alternates with `to_move` alone.
pub fn evaluate(board: &Board, to_move: Player) -> i32 {
    if check_win(board, Player::Computer) {
        return COMPUTER_WIN;
    }
    if check_win(board, Player::Human) {
        return HUMAN_WIN;
    }
    if check_draw(board) {
        return DRAW;
    }

    let scores = available_moves(board).map(|mv| {
        let mut child = *board;
        child.set(mv, to_move.marker());
        evaluate(&child, to_move.opponent())
    });

    let best = match to_move {
        Player::Computer => scores.max(),
        Player::Human => scores.min(),
    };
    // A non-full board always has at least one child.
    best.unwrap_or(DRAW)
}

/// Scores every computer move on `board`, in row-major order.
///
/// Each candidate is placed on a copy of the board and evaluated with the
/// human to move next.
#[instrument(skip(board))]
pub fn scored_moves(board: &Board) -> Vec<ScoredMove> {
    available_moves(board)
        .map(|mv| {
            let mut child = *board;
            child.set(mv, Player::Computer.marker());
            ScoredMove::new(mv, evaluate(&child, Player::Human))
        })
        .collect()
}

/// Picks the optimal computer move on `board`.
///
/// The move with the strictly greatest score wins; ties keep the first
/// candidate in row-major order. Returns `None` only when the board has no
/// empty cells. Callers should not ask for a move on a board that already
/// has a winner.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Option<Move> {
    let mut best: Option<ScoredMove> = None;
    for candidate in scored_moves(board) {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    if let Some(chosen) = best {
        debug!(mv = %chosen.mv, score = chosen.score, "Computer move chosen");
    }
    best.map(|b| b.mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::rules::{apply_move, outcome};
    use crate::games::tictactoe::GameOutcome;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(evaluate(&board("OOO/XX./X.."), Player::Human), COMPUTER_WIN);
        assert_eq!(evaluate(&board("XXX/OO./O.."), Player::Computer), HUMAN_WIN);
        assert_eq!(evaluate(&board("XOX/OXX/OXO"), Player::Human), DRAW);
    }

    #[test]
    fn test_won_board_not_expanded() {
        // Human has won; the computer could otherwise complete a line too.
        let b = board("XXX/OO./...");
        assert_eq!(evaluate(&b, Player::Computer), HUMAN_WIN);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(evaluate(&Board::new(), Player::Human), DRAW);
    }

    #[test]
    fn test_takes_immediate_win() {
        // [[C,C,_],[H,H,_],[_,_,_]]
        let b = board("OO./XX./...");
        assert_eq!(best_move(&b), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_blocks_human_threat() {
        // [[H,H,_],[C,C,_],[_,_,_]]
        let b = board("XX./OO./...");
        assert_eq!(best_move(&b), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_pure_block() {
        // Human threatens the left column; the computer has no line of its own.
        let b = board("X../XO./...");
        assert_eq!(best_move(&b), Some(Move::new(2, 0)));
    }

    #[test]
    fn test_ties_go_to_first_in_row_major_order() {
        let scored = scored_moves(&Board::new());
        assert_eq!(scored.len(), 9);
        assert!(scored.iter().all(|s| s.score() == DRAW));
        assert_eq!(best_move(&Board::new()), Some(Move::new(0, 0)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(best_move(&board("XOX/OXX/OXO")), None);
        assert!(scored_moves(&board("XOX/OXX/OXO")).is_empty());
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let b = board("X../.O./..X");
        let snapshot = b;
        let _ = evaluate(&b, Player::Computer);
        let first = best_move(&b);
        assert_eq!(b, snapshot);
        assert_eq!(best_move(&b), first);
    }

    #[test]
    fn test_computer_first_never_loses() {
        fn play_out(b: Board) {
            let Some(mv) = best_move(&b) else {
                return;
            };
            let mut after = b;
            apply_move(&mut after, mv, Player::Computer).unwrap();
            match outcome(&after) {
                GameOutcome::InProgress => {}
                GameOutcome::HumanWins => panic!("computer lost on {after:?}"),
                _ => return,
            }
            let replies: Vec<Move> = available_moves(&after).collect();
            for reply in replies {
                let mut next = after;
                apply_move(&mut next, reply, Player::Human).unwrap();
                match outcome(&next) {
                    GameOutcome::HumanWins => panic!("computer lost on {next:?}"),
                    GameOutcome::InProgress => play_out(next),
                    _ => {}
                }
            }
        }

        play_out(Board::new());
    }
}
