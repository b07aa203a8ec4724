//! Local storage locations

use std::path::PathBuf;

/// Directory all tracker data lives in: `<cache_dir>/fpl-tracker`.
///
/// Falls back to `~/.cache` and then the working directory when the platform
/// cache directory is unknown.
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("fpl-tracker")
}

/// Path: <cache_root>/leagues.db
pub fn league_database_path() -> PathBuf {
    cache_root().join("leagues.db")
}
