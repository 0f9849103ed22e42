// src/store.rs

// SQLite persistence for puzzle rows. The connection is opened once per run
// and passed by handle: the gate reads through it, the loader writes through
// it inside a single transaction. Rows are insert-only; status changes after
// creation belong to the consumers of the table.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::error::ScrapeError;
use crate::sdx::PuzzleRecord;

// `id` is what downstream readers order by; `title` carries the gate's
// COUNT(*) lookup.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS puzzles (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    title        TEXT NOT NULL,
    difficulty   TEXT NOT NULL,
    status       TEXT NOT NULL,
    sdx          TEXT NOT NULL,
    sdx_solution TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_puzzles_title ON puzzles (title);
";

/// Open the database at `path`, creating the schema on first contact.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection, ScrapeError> {
    let conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

/// Rows already stored under `title`.
pub fn count_for_title(conn: &Connection, title: &str) -> Result<i64, ScrapeError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM puzzles WHERE title = ?1",
        params![title],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Insert a batch of records inside one transaction. All or nothing: a
/// failing insert rolls the whole batch back on drop.
pub fn insert_batch(conn: &mut Connection, records: &[PuzzleRecord]) -> Result<(), ScrapeError> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO puzzles (title, difficulty, status, sdx, sdx_solution)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for rec in records {
            stmt.execute(params![
                rec.title,
                rec.difficulty.as_str(),
                rec.status,
                rec.sdx,
                rec.sdx_solution,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}
