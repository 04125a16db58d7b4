//! Properties every board reachable in a game satisfies.
//!
//! The session checks them after each move. A failure is logged and trips a
//! debug assertion.

use super::rules::check_win;
use super::{Board, Player};
use derive_more::Display;
use strum::IntoEnumIterator;
use tracing::warn;

/// A property of every reachable board.
pub trait Invariant {
    /// Checks the property on `board`.
    fn holds(board: &Board) -> bool;

    /// What the property states.
    fn description() -> &'static str;
}

/// A board invariant that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// The failed invariant's description.
    pub description: &'static str,
}

/// Board invariants checked together.
pub trait InvariantSet {
    /// Checks every invariant, collecting all that fail.
    fn check_all(board: &Board) -> Result<(), Vec<InvariantViolation>>;
}

impl<A: Invariant, B: Invariant> InvariantSet for (A, B) {
    fn check_all(board: &Board) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(board), A::description()),
            (B::holds(board), B::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation { description })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: at most one player holds a winning line.
pub struct SingleWinner;

impl Invariant for SingleWinner {
    fn holds(board: &Board) -> bool {
        Player::iter().filter(|&p| check_win(board, p)).count() <= 1
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

/// Invariant: the human moves first, so human marks equal computer marks or
/// exceed them by one.
pub struct MarkBalance;

impl Invariant for MarkBalance {
    fn holds(board: &Board) -> bool {
        let human = board.count(Player::Human);
        let computer = board.count(Player::Computer);
        human == computer || human == computer + 1
    }

    fn description() -> &'static str {
        "Human marks equal computer marks or exceed them by one"
    }
}

/// The invariants the session checks.
pub type BoardInvariants = (SingleWinner, MarkBalance);

/// Logs every failed board invariant and panics in debug builds.
pub fn assert_invariants(board: &Board) {
    if let Err(violations) = BoardInvariants::check_all(board) {
        for v in &violations {
            warn!(invariant = %v, "Board invariant violated");
        }
        debug_assert!(false, "Board invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_empty_board_holds() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_reachable_board_holds() {
        assert!(BoardInvariants::check_all(&board("XOX/.O./X..")).is_ok());
        assert!(BoardInvariants::check_all(&board("XXX/OO./...")).is_ok());
    }

    #[test]
    fn test_two_winners_violates() {
        let b = board("XXX/OOO/...");
        assert!(!SingleWinner::holds(&b));
        assert!(MarkBalance::holds(&b));
        let violations = BoardInvariants::check_all(&b).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, SingleWinner::description());
    }

    #[test]
    fn test_every_violation_is_collected() {
        let violations = BoardInvariants::check_all(&board("XXX/OOO/OO.")).unwrap_err();
        assert_eq!(
            violations,
            vec![
                InvariantViolation {
                    description: SingleWinner::description()
                },
                InvariantViolation {
                    description: MarkBalance::description()
                },
            ]
        );
    }

    #[test]
    fn test_computer_ahead_violates() {
        let b = board("OO./X../...");
        assert!(!MarkBalance::holds(&b));
    }
}
