//! The score-reporting collaborator consumed by the game session.

use super::ScoreTally;
use crate::games::tictactoe::GameOutcome;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, instrument};

/// Receives the outcome of every finished game.
///
/// The session calls [`report`](ScoreSink::report) exactly once per finished
/// game and never with [`GameOutcome::InProgress`]. Implementations must
/// return promptly and must not fail the game; any I/O happens in the
/// background.
pub trait ScoreSink {
    /// Records one finished game.
    fn report(&self, outcome: GameOutcome);

    /// Counts kept by this process, if the sink keeps any.
    fn tally(&self) -> Option<ScoreTally> {
        None
    }

    /// Last aggregate known from a score service, if the sink talks to one.
    fn global_tally(&self) -> Option<ScoreTally> {
        None
    }
}

/// In-memory tally shared between clones.
#[derive(Debug, Clone, Default)]
pub struct TallySink {
    tally: Arc<Mutex<ScoreTally>>,
}

impl TallySink {
    /// Creates a sink starting from zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current counters.
    pub fn snapshot(&self) -> ScoreTally {
        *self.tally.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ScoreSink for TallySink {
    #[instrument(skip(self))]
    fn report(&self, outcome: GameOutcome) {
        let mut tally = self.tally.lock().unwrap_or_else(PoisonError::into_inner);
        tally.record(outcome);
        debug!(total = tally.total(), "Local tally updated");
    }

    fn tally(&self) -> Option<ScoreTally> {
        Some(self.snapshot())
    }
}

impl<S: ScoreSink> ScoreSink for Option<S> {
    fn report(&self, outcome: GameOutcome) {
        if let Some(sink) = self {
            sink.report(outcome);
        }
    }

    fn tally(&self) -> Option<ScoreTally> {
        self.as_ref().and_then(|sink| sink.tally())
    }

    fn global_tally(&self) -> Option<ScoreTally> {
        self.as_ref().and_then(|sink| sink.global_tally())
    }
}

/// Reports to both sinks; for each tally the first sink that has one answers.
impl<A: ScoreSink, B: ScoreSink> ScoreSink for (A, B) {
    fn report(&self, outcome: GameOutcome) {
        self.0.report(outcome);
        self.1.report(outcome);
    }

    fn tally(&self) -> Option<ScoreTally> {
        self.0.tally().or_else(|| self.1.tally())
    }

    fn global_tally(&self) -> Option<ScoreTally> {
        self.0.global_tally().or_else(|| self.1.global_tally())
    }
}

impl<S: ScoreSink + ?Sized> ScoreSink for Arc<S> {
    fn report(&self, outcome: GameOutcome) {
        (**self).report(outcome);
    }

    fn tally(&self) -> Option<ScoreTally> {
        (**self).tally()
    }

    fn global_tally(&self) -> Option<ScoreTally> {
        (**self).global_tally()
    }
}
