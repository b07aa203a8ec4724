//! Database schema and connection management

use crate::core::league_database_path;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// Bumped whenever the table layout changes.
pub const SCHEMA_VERSION: i64 = 2;

/// Database connection manager for stored leagues
pub struct LeagueDatabase {
    pub(crate) conn: Connection,
}

impl LeagueDatabase {
    /// Open the default database and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(&league_database_path())
    }

    /// Open (creating if needed) a database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the cache directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Create an in-memory database (for tests)
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        let version: i64 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;

        // Only fetched upstream data lives here, so older layouts are rebuilt
        if version < SCHEMA_VERSION {
            self.conn.execute_batch(
                "DROP TABLE IF EXISTS team_gameweeks;
                 DROP TABLE IF EXISTS teams;
                 DROP TABLE IF EXISTS leagues;",
            )?;
        }

        // One copy of a league per data source
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS leagues (
                league_id INTEGER NOT NULL,
                source TEXT NOT NULL,
                name TEXT NOT NULL,
                fetched_at INTEGER NOT NULL,
                PRIMARY KEY (league_id, source)
            )",
            [],
        )?;

        // `position` keeps league order, which the default tie-break relies on
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                league_id INTEGER NOT NULL,
                source TEXT NOT NULL,
                team_id INTEGER NOT NULL,
                position INTEGER NOT NULL,
                team_name TEXT NOT NULL,
                manager_name TEXT NOT NULL,
                PRIMARY KEY (league_id, source, team_id),
                FOREIGN KEY (league_id, source)
                    REFERENCES leagues(league_id, source) ON DELETE CASCADE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team_gameweeks (
                league_id INTEGER NOT NULL,
                source TEXT NOT NULL,
                team_id INTEGER NOT NULL,
                gameweek INTEGER NOT NULL,
                points INTEGER NOT NULL,
                total_points INTEGER NOT NULL,
                PRIMARY KEY (league_id, source, team_id, gameweek),
                FOREIGN KEY (league_id, source, team_id)
                    REFERENCES teams(league_id, source, team_id) ON DELETE CASCADE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_team_gameweeks_league_gw
             ON team_gameweeks(league_id, source, gameweek)",
            [],
        )?;

        self.conn
            .execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))?;

        Ok(())
    }
}
