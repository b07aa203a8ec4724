//! Data models for the storage layer

use crate::cli::types::{DataSource, Gameweek, LeagueId};
use clap::ValueEnum;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Summary of a stored league
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLeague {
    pub league_id: LeagueId,
    pub source: DataSource,
    pub name: String,
    pub team_count: u32,
    pub latest_gameweek: Option<Gameweek>,
    pub fetched_at: u64, // unix seconds
}

impl ToSql for DataSource {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for DataSource {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        <DataSource as ValueEnum>::from_str(s, false).map_err(|e| FromSqlError::Other(e.into()))
    }
}
