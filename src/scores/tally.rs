//! Win/loss/draw counters and the increments sent to the score service.

use crate::games::tictactoe::GameOutcome;
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Aggregate score counters.
///
/// Serialized with the field names the browser front end has always used:
/// `humanWins`, `aiWins` and `draws`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Display, new,
)]
#[display("Human {} | Computer {} | Draws {}", human_wins, computer_wins, draws)]
pub struct ScoreTally {
    #[serde(rename = "humanWins")]
    #[getter(copy)]
    human_wins: u32,
    #[serde(rename = "aiWins")]
    #[getter(copy)]
    computer_wins: u32,
    #[getter(copy)]
    draws: u32,
}

impl ScoreTally {
    /// Counts one finished game. `InProgress` is ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome) {
        if let Some(update) = ScoreUpdate::from_outcome(outcome) {
            self.merge(update);
        }
    }

    /// Adds an increment to the counters.
    pub fn merge(&mut self, update: ScoreUpdate) {
        self.human_wins = self.human_wins.saturating_add(update.human_wins);
        self.computer_wins = self.computer_wins.saturating_add(update.computer_wins);
        self.draws = self.draws.saturating_add(update.draws);
    }

    /// Total number of games counted.
    pub fn total(&self) -> u32 {
        self.human_wins
            .saturating_add(self.computer_wins)
            .saturating_add(self.draws)
    }
}

/// Increment sent with `PUT /scores`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScoreUpdate {
    #[serde(rename = "humanWins", default)]
    #[getter(copy)]
    human_wins: u32,
    #[serde(rename = "aiWins", default)]
    #[getter(copy)]
    computer_wins: u32,
    #[serde(default)]
    #[getter(copy)]
    draws: u32,
}

impl ScoreUpdate {
    /// The one-game increment for a finished game, `None` while in progress.
    pub fn from_outcome(outcome: GameOutcome) -> Option<Self> {
        let update = match outcome {
            GameOutcome::InProgress => return None,
            GameOutcome::HumanWins => Self {
                human_wins: 1,
                ..Self::default()
            },
            GameOutcome::ComputerWins => Self {
                computer_wins: 1,
                ..Self::default()
            },
            GameOutcome::Draw => Self {
                draws: 1,
                ..Self::default()
            },
        };
        Some(update)
    }
}
