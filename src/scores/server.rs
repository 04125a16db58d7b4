//! HTTP score service.
//!
//! Keeps the aggregate tally in memory and exposes it to game front ends:
//!
//! - `GET /scores` returns the current [`ScoreTally`];
//! - `PUT /scores` merges a [`ScoreUpdate`] and returns the new aggregate.

use super::{ScoreTally, ScoreUpdate};
use axum::{Json, Router, extract::State, routing::get};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::net::TcpListener;
use tracing::{debug, info, instrument};

/// Shared in-memory aggregate behind the score service.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    tally: Arc<Mutex<ScoreTally>>,
}

impl ScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing counts.
    pub fn with_tally(tally: ScoreTally) -> Self {
        Self {
            tally: Arc::new(Mutex::new(tally)),
        }
    }

    /// Returns a copy of the current aggregate.
    pub fn snapshot(&self) -> ScoreTally {
        *self.tally.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Merges an increment and returns the new aggregate.
    #[instrument(skip(self))]
    pub fn apply(&self, update: ScoreUpdate) -> ScoreTally {
        let mut tally = self.tally.lock().unwrap_or_else(PoisonError::into_inner);
        tally.merge(update);
        debug!(total = tally.total(), "Score store updated");
        *tally
    }
}

/// Builds the score service router.
pub fn router(store: ScoreStore) -> Router {
    Router::new()
        .route("/scores", get(get_scores).put(put_scores))
        .with_state(store)
}

#[instrument(skip(store))]
async fn get_scores(State(store): State<ScoreStore>) -> Json<ScoreTally> {
    Json(store.snapshot())
}

#[instrument(skip(store))]
async fn put_scores(
    State(store): State<ScoreStore>,
    Json(update): Json<ScoreUpdate>,
) -> Json<ScoreTally> {
    let tally = store.apply(update);
    info!(%tally, "Scores updated");
    Json(tally)
}

/// Serves the score service until the listener fails.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server stops with
/// an I/O error.
#[instrument(skip(store))]
pub async fn serve(host: &str, port: u16, store: ScoreStore) -> std::io::Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    info!(addr = %listener.local_addr()?, "Score service listening");
    axum::serve(listener, router(store)).await
}
