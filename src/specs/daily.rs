// src/specs/daily.rs

// Spec for the daily puzzle page. The site ships the day's three puzzles as
// one JSON object assigned to `window.gameData`, anchored by the editorial
// content div that follows the script block.

use serde::Deserialize;

use crate::config::consts::{DATA_CLOSE, DATA_OPEN};
use crate::core::html;
use crate::error::ScrapeError;
use crate::sdx::Difficulty;

/// Top-level shape of `window.gameData`. Extra keys on the page are ignored;
/// a missing tier or field fails the decode.
#[derive(Debug, Deserialize)]
pub struct GameData {
    pub easy: Tier,
    pub medium: Tier,
    pub hard: Tier,
}

#[derive(Debug, Deserialize)]
pub struct Tier {
    pub puzzle_data: PuzzleData,
}

/// Flat 81-cell grids, row-major. 0 = blank, 1-9 = digit.
#[derive(Debug, Deserialize)]
pub struct PuzzleData {
    pub puzzle: Vec<u8>,
    pub solution: Vec<u8>,
}

impl GameData {
    pub fn tier(&self, difficulty: Difficulty) -> &PuzzleData {
        match difficulty {
            Difficulty::Easy => &self.easy.puzzle_data,
            Difficulty::Medium => &self.medium.puzzle_data,
            Difficulty::Hard => &self.hard.puzzle_data,
        }
    }
}

/// Pull the embedded game data out of the page and decode it.
///
/// A page without the anchor pair is an [`ScrapeError::Extraction`]; a
/// captured block that isn't the expected JSON shape is a
/// [`ScrapeError::Decode`].
pub fn extract(doc: &str) -> Result<GameData, ScrapeError> {
    let raw = html::slice_between(doc, DATA_OPEN, DATA_CLOSE).ok_or(ScrapeError::Extraction)?;
    Ok(serde_json::from_str(raw)?)
}
