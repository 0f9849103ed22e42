// src/core/net.rs

// One blocking GET, body as text. TLS and connection handling belong to
// the client; we only check for a success status.

use std::time::Duration;

use crate::config::consts::TIMEOUT_SECS;
use crate::error::ScrapeError;

pub fn http_get(url: &str) -> Result<String, ScrapeError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .user_agent(concat!("sudoku_scrape/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}
