//! Fire-and-forget HTTP score reporting.

use super::{ScoreError, ScoreSink, ScoreTally, ScoreUpdate};
use crate::games::tictactoe::GameOutcome;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::runtime::Handle;
use tracing::{debug, info, instrument, warn};

/// Sends finished games to a score service with `PUT {endpoint}`.
///
/// Reports are spawned on a tokio runtime and never awaited by the game, so
/// a slow or unreachable service cannot hold up play. Failed requests are
/// logged and dropped. The aggregate returned by the service is cached and
/// available from [`latest`](HttpScoreSink::latest).
#[derive(Debug, Clone)]
pub struct HttpScoreSink {
    client: reqwest::Client,
    endpoint: String,
    runtime: Handle,
    latest: Arc<Mutex<Option<ScoreTally>>>,
}

impl HttpScoreSink {
    /// Creates a sink that spawns its requests on `runtime`.
    #[instrument(skip(endpoint, runtime), fields(endpoint = %endpoint.as_ref()))]
    pub fn new(endpoint: impl AsRef<str>, runtime: Handle) -> Self {
        info!("Creating HTTP score sink");
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.as_ref().to_string(),
            runtime,
            latest: Arc::new(Mutex::new(None)),
        }
    }

    /// Creates a sink on the runtime of the calling task.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] when called outside a tokio runtime.
    #[track_caller]
    pub fn from_current(endpoint: impl AsRef<str>) -> Result<Self, ScoreError> {
        let runtime = Handle::try_current()
            .map_err(|e| ScoreError::new(format!("No tokio runtime for score reporting: {}", e)))?;
        Ok(Self::new(endpoint, runtime))
    }

    /// The score service URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The most recent aggregate returned by the service, if any.
    pub fn latest(&self) -> Option<ScoreTally> {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn remember(&self, tally: ScoreTally) {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(tally);
    }

    /// Fetches the current aggregate with `GET {endpoint}`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] if the request fails, the service answers with
    /// an error status or the body is not a tally.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self) -> Result<ScoreTally, ScoreError> {
        debug!("Fetching scores");
        let tally: ScoreTally = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        self.remember(tally);
        info!(%tally, "Scores fetched");
        Ok(tally)
    }

    /// Sends one increment with `PUT {endpoint}` and waits for the aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] if the request fails, the service answers with
    /// an error status or the body is not a tally.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn push(&self, update: ScoreUpdate) -> Result<ScoreTally, ScoreError> {
        debug!("Sending score update");
        let tally: ScoreTally = self
            .client
            .put(&self.endpoint)
            .json(&update)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        self.remember(tally);
        info!(%tally, "Scores updated");
        Ok(tally)
    }
}

impl ScoreSink for HttpScoreSink {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    fn report(&self, outcome: GameOutcome) {
        let Some(update) = ScoreUpdate::from_outcome(outcome) else {
            debug!("Ignoring report for unfinished game");
            return;
        };

        let sink = self.clone();
        self.runtime.spawn(async move {
            if let Err(e) = sink.push(update).await {
                warn!(error = %e, "Score update failed");
            }
        });
    }

    fn global_tally(&self) -> Option<ScoreTally> {
        self.latest()
    }
}
