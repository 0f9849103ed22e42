// src/main.rs
// Daily sudoku ingestion job. Meant to run once a day from cron:
//   cargo run --release
//
// Fetches the NYT sudoku page, encodes the three daily puzzles into sdx
// strings and stores them in sudokugames.db. Rerunning on the same day is
// a no-op.

use sudoku_scrape::config::consts::DB_FILE;
use sudoku_scrape::error::ScrapeError;
use sudoku_scrape::runner::{self, Outcome};
use sudoku_scrape::{loge, store};

fn main() {
    if let Err(e) = run() {
        loge!("run failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ScrapeError> {
    let mut conn = store::open(DB_FILE)?;
    let today = chrono::Local::now().date_naive();

    match runner::run(&mut conn, today)? {
        Outcome::AlreadyIngested { title } => {
            println!("Today's puzzles ({title}) already exist in the database.");
        }
        Outcome::Ingested {
            title,
            difficulties,
        } => {
            for d in difficulties {
                println!("Inserted: {title} {}", d.as_str());
            }
        }
    }
    Ok(())
}
