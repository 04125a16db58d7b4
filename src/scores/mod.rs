//! Score tallies, the score-reporting sink and the score service.

mod error;
mod http;
mod server;
mod sink;
mod tally;

pub use error::ScoreError;
pub use http::HttpScoreSink;
pub use server::{ScoreStore, router, serve};
pub use sink::{ScoreSink, TallySink};
pub use tally::{ScoreTally, ScoreUpdate};
