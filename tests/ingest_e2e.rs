// tests/ingest_e2e.rs
// Full pipeline against a captured-page stand-in and a scratch database.
// No network: the fixture document goes through the same extract → encode →
// insert path the live run uses.

use chrono::NaiveDate;
use rusqlite::Connection;

use sudoku_scrape::config::consts::{DATA_CLOSE, DATA_OPEN};
use sudoku_scrape::error::ScrapeError;
use sudoku_scrape::runner::{self, Outcome};
use sudoku_scrape::store;

fn open_temp() -> (tempfile::TempDir, Connection) {
    let dir = tempfile::tempdir().unwrap();
    let conn = store::open(dir.path().join("sudokugames.db")).unwrap();
    (dir, conn)
}

// Deterministic 81-cell pair: givens on every third cell, solution filled
// everywhere. Starts blank, 5, blank / 3, 5, 7 like the worked example.
fn grids() -> (Vec<u8>, Vec<u8>) {
    let mut puzzle = vec![0u8; 81];
    let mut solution: Vec<u8> = (0..81u8).map(|j| (j * 2) % 9 + 1).collect();
    puzzle[1] = 5;
    solution[0] = 3;
    solution[1] = 5;
    solution[2] = 7;
    for j in (4..81).step_by(3) {
        puzzle[j] = (j % 9 + 1) as u8;
        solution[j] = puzzle[j];
    }
    (puzzle, solution)
}

fn fixture_page() -> String {
    let (puzzle, solution) = grids();
    let tier = serde_json::json!({
        "puzzle_data": { "puzzle": puzzle, "solution": solution }
    });
    let game_data = serde_json::json!({
        "easy": tier.clone(),
        "medium": tier.clone(),
        "hard": tier,
    });
    format!("<html><body><div>{DATA_OPEN}{game_data}{DATA_CLOSE}</div></body></html>")
}

#[test]
fn ingests_three_rows_then_gates_the_rerun() {
    let (_dir, mut conn) = open_temp();
    let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
    let title = runner::day_title(date);

    assert!(!runner::already_ingested(&conn, &title).unwrap());

    let doc = fixture_page();
    let outcome = runner::ingest_document(&mut conn, &doc, &title).unwrap();
    match outcome {
        Outcome::Ingested { title, difficulties } => {
            assert_eq!(title, "NYT 03/14/24");
            assert_eq!(difficulties.len(), 3);
        }
        Outcome::AlreadyIngested { .. } => panic!("fresh store should ingest"),
    }

    assert_eq!(store::count_for_title(&conn, &title).unwrap(), 3);

    // Second run on the same date: the gate short-circuits before any work.
    assert!(runner::already_ingested(&conn, &title).unwrap());

    // The stored encodings carry the worked-example prefix.
    let (sdx, sdx_solution): (String, String) = conn
        .query_row(
            "SELECT sdx, sdx_solution FROM puzzles WHERE difficulty = 'easy'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert!(sdx.starts_with("0 u5 0"));
    assert!(sdx_solution.starts_with("3 u5 7"));
    assert_eq!(sdx.split(' ').count(), 81);
    assert_eq!(sdx_solution.split(' ').count(), 81);
}

#[test]
fn page_without_game_data_inserts_nothing() {
    let (_dir, mut conn) = open_temp();
    let title = runner::day_title(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());

    let doc = "<html><body><p>maintenance page</p></body></html>";
    let err = runner::ingest_document(&mut conn, doc, &title).unwrap_err();
    assert!(matches!(err, ScrapeError::Extraction));

    assert_eq!(store::count_for_title(&conn, &title).unwrap(), 0);
}

#[test]
fn malformed_payload_inserts_nothing() {
    let (_dir, mut conn) = open_temp();
    let title = runner::day_title(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());

    // "hard" tier missing: decode fails before any record is built.
    let json = r#"{"easy":{"puzzle_data":{"puzzle":[0],"solution":[1]}},"medium":{"puzzle_data":{"puzzle":[0],"solution":[1]}}}"#;
    let doc = format!("{DATA_OPEN}{json}{DATA_CLOSE}");
    let err = runner::ingest_document(&mut conn, &doc, &title).unwrap_err();
    assert!(matches!(err, ScrapeError::Decode(_)));

    assert_eq!(store::count_for_title(&conn, &title).unwrap(), 0);
}
