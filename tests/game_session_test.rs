//! Tests for the game session and its score reporting.

use perfect_tictactoe::{
    Board, Cell, GameOutcome, GameSession, Move, MoveError, Player, ScoreSink, ScoreTally,
    TallySink, evaluate,
};
use std::cell::RefCell;

/// Fake sink recording every report.
#[derive(Debug, Default)]
struct RecordingSink {
    reports: RefCell<Vec<GameOutcome>>,
}

impl ScoreSink for RecordingSink {
    fn report(&self, outcome: GameOutcome) {
        self.reports.borrow_mut().push(outcome);
    }
}

/// Plays the first free cell until the game ends.
fn play_first_free<S: ScoreSink>(session: &mut GameSession<S>) -> GameOutcome {
    loop {
        let mv = perfect_tictactoe::rules::available_moves(session.board())
            .next()
            .expect("unfinished game has a free cell");
        let outcome = session.request_human_move(mv.row, mv.col).unwrap();
        if outcome.is_terminal() {
            return outcome;
        }
    }
}

#[test]
fn test_computer_wins_naive_play_and_reports_once() {
    let mut session = GameSession::new(RecordingSink::default());
    let outcome = play_first_free(&mut session);

    assert_eq!(outcome, GameOutcome::ComputerWins);
    assert_eq!(session.outcome(), GameOutcome::ComputerWins);
    assert_eq!(*session.sink().reports.borrow(), vec![GameOutcome::ComputerWins]);
}

#[test]
fn test_moves_after_game_over_are_rejected_and_not_reported() {
    let mut session = GameSession::new(RecordingSink::default());
    play_first_free(&mut session);
    let finished = *session.board();

    let free = perfect_tictactoe::rules::available_moves(&finished).next();
    if let Some(mv) = free {
        assert_eq!(
            session.request_human_move(mv.row, mv.col),
            Err(MoveError::GameOver)
        );
    }
    assert_eq!(session.request_human_move(9, 9), Err(MoveError::GameOver));
    assert_eq!(session.board(), &finished);
    assert_eq!(session.sink().reports.borrow().len(), 1);
}

#[test]
fn test_perfect_human_draws_and_draw_is_reported() {
    let mut session = GameSession::new(RecordingSink::default());
    let mut outcome = GameOutcome::InProgress;
    while !outcome.is_terminal() {
        let mv = perfect_human_move(session.board());
        outcome = session.request_human_move(mv.row, mv.col).unwrap();
    }

    assert_eq!(outcome, GameOutcome::Draw);
    assert_eq!(*session.sink().reports.borrow(), vec![GameOutcome::Draw]);
}

/// The free cell minimising the computer's minimax value.
fn perfect_human_move(b: &Board) -> Move {
    perfect_tictactoe::rules::available_moves(b)
        .min_by_key(|&mv| {
            let mut next = *b;
            perfect_tictactoe::rules::apply_move(&mut next, mv, Player::Human).unwrap();
            evaluate(&next, Player::Computer)
        })
        .expect("unfinished game has a free cell")
}

#[test]
fn test_invalid_move_does_not_trigger_search() {
    let mut session = GameSession::new(RecordingSink::default());
    assert!(matches!(
        session.request_human_move(0, 5),
        Err(MoveError::OutOfRange { row: 0, col: 5 })
    ));
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.board().count(Player::Computer), 0);
}

#[test]
fn test_reset_starts_a_new_reportable_game() {
    let sink = TallySink::new();
    let mut session = GameSession::new(sink.clone());
    play_first_free(&mut session);

    let board = session.reset_game();
    assert!(board.cells().iter().all(|&c| c == Cell::Empty));
    assert_eq!(session.turn(), Player::Human);
    assert_eq!(session.outcome(), GameOutcome::InProgress);

    play_first_free(&mut session);
    assert_eq!(sink.snapshot(), ScoreTally::new(0, 2, 0));
}
