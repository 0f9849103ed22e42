// src/runner.rs

// Top-level pipeline, strictly sequential: gate first, then
// fetch → extract → encode → one transactional batch insert.

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::config::consts::{DATE_FMT, SOURCE_TAG, SOURCE_URL};
use crate::core::net;
use crate::error::ScrapeError;
use crate::sdx::{Difficulty, PuzzleRecord};
use crate::specs::daily;
use crate::store;

/// How a run ended. Both variants are success; the caller decides what to
/// print.
#[derive(Debug)]
pub enum Outcome {
    /// The gate found today's rows already stored. Nothing was fetched or
    /// written.
    AlreadyIngested { title: String },
    /// Fresh ingestion: one row per difficulty, committed as a unit.
    Ingested {
        title: String,
        difficulties: Vec<Difficulty>,
    },
}

/// Canonical per-day key, e.g. `NYT 03/14/24`.
pub fn day_title(date: NaiveDate) -> String {
    format!("{} {}", SOURCE_TAG, date.format(DATE_FMT))
}

/// Gate: true when rows for `title` already exist. Rerunning the job after
/// a hit is a no-op.
pub fn already_ingested(conn: &Connection, title: &str) -> Result<bool, ScrapeError> {
    Ok(store::count_for_title(conn, title)? > 0)
}

/// Run the whole job for `date`: gate check, then fetch and ingest.
pub fn run(conn: &mut Connection, date: NaiveDate) -> Result<Outcome, ScrapeError> {
    let title = day_title(date);

    if already_ingested(conn, &title)? {
        logf!("gate: {} already stored, skipping", title);
        return Ok(Outcome::AlreadyIngested { title });
    }

    let doc = net::http_get(SOURCE_URL)?;
    logf!("fetched {} ({} bytes)", SOURCE_URL, doc.len());

    ingest_document(conn, &doc, &title)
}

/// Ingest one already-fetched page under `title`. Split from [`run`] so the
/// pipeline can be exercised offline against a captured document.
///
/// All three records are built in memory before the first write; the insert
/// is a single transaction.
pub fn ingest_document(
    conn: &mut Connection,
    doc: &str,
    title: &str,
) -> Result<Outcome, ScrapeError> {
    let data = daily::extract(doc)?;

    let records: Vec<PuzzleRecord> = Difficulty::ALL
        .iter()
        .map(|&d| {
            let grids = data.tier(d);
            PuzzleRecord::new(title, d, &grids.puzzle, &grids.solution)
        })
        .collect();

    store::insert_batch(conn, &records)?;
    logf!("inserted {} rows for {}", records.len(), title);

    Ok(Outcome::Ingested {
        title: s!(title),
        difficulties: records.iter().map(|r| r.difficulty).collect(),
    })
}
