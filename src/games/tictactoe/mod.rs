mod action;
mod invariants;
mod outcome;
pub mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError, ParseMoveError};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalance, SingleWinner,
    assert_invariants,
};
pub use outcome::GameOutcome;
pub use search::{ScoredMove, best_move, evaluate, scored_moves};
pub use types::{Board, Cell, ParseBoardError, Player};
