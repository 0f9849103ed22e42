// src/error.rs
use thiserror::Error;

/// Everything that can abort a run. Nothing here is retried or recovered;
/// the already-ingested short-circuit is a success and lives in
/// [`crate::runner::Outcome`], not here.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// GET failed, or the server answered with a non-success status.
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// The page came back but the embedded game data block wasn't in it.
    /// Distinct from [`ScrapeError::Decode`] so callers can tell "site
    /// layout changed" apart from "payload shape changed".
    #[error("failed to find game data in page")]
    Extraction,

    /// The captured block wasn't the JSON shape we expect.
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),

    /// Store open, read or write failure.
    #[error("store: {0}")]
    Store(#[from] rusqlite::Error),
}
