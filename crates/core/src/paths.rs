//! Centralized path functions for app storage locations.

use std::path::PathBuf;

/// App data root: `~/Library/Application Support/daytrack/` (macOS) or `~/.local/share/daytrack/` (Linux).
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("daytrack"))
}

/// SQLite database file: `<app_data_dir>/daytrack.db`.
pub fn db_path() -> Option<PathBuf> {
    app_data_dir().map(|d| d.join("daytrack.db"))
}
