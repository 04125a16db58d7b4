//! Game outcome derived from board state.

use super::types::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Outcome of a game, always recomputed from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameOutcome {
    /// Nobody has won and empty cells remain.
    #[display("Game in progress")]
    InProgress,
    /// The human has three in a row.
    #[display("Human wins!")]
    HumanWins,
    /// The computer has three in a row.
    #[display("Computer wins!")]
    ComputerWins,
    /// The board is full with no winner.
    #[display("It's a draw!")]
    Draw,
}

impl GameOutcome {
    /// Outcome for a game won by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => GameOutcome::HumanWins,
            Player::Computer => GameOutcome::ComputerWins,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::HumanWins => Some(Player::Human),
            GameOutcome::ComputerWins => Some(Player::Computer),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(GameOutcome::HumanWins.to_string(), "Human wins!");
        assert_eq!(GameOutcome::ComputerWins.to_string(), "Computer wins!");
        assert_eq!(GameOutcome::Draw.to_string(), "It's a draw!");
        assert_eq!(GameOutcome::InProgress.to_string(), "Game in progress");
    }

    #[test]
    fn test_winner_round_trips_won_by() {
        for player in [Player::Human, Player::Computer] {
            assert_eq!(GameOutcome::won_by(player).winner(), Some(player));
        }
        assert_eq!(GameOutcome::Draw.winner(), None);
        assert!(!GameOutcome::InProgress.is_terminal());
    }
}
