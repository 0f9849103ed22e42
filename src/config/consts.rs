// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://www.nytimes.com/puzzles/sudoku/";
pub const TIMEOUT_SECS: u64 = 15;

// Embedded payload anchors. The game data sits in a script assignment with
// the editorial-content div right behind it; capture is everything between.
pub const DATA_OPEN: &str = r#"<script type="text/javascript">window.gameData = "#;
pub const DATA_CLOSE: &str = r#"</script></div><div id="portal-editorial-content">"#;

// Store
pub const DB_FILE: &str = "sudokugames.db";
pub const STATUS_NEW: &str = "not started";

// Canonical title: "NYT 03/14/24"
pub const SOURCE_TAG: &str = "NYT";
pub const DATE_FMT: &str = "%m/%d/%y";
