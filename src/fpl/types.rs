//! Serde models for every payload shape the tracker consumes.

use serde::{Deserialize, Deserializer, Serialize};

use crate::cli::types::{Gameweek, LeagueId, TeamId};


/// Go-style encoders emit `null` for empty slices; treat that as empty.
fn de_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tracker proxy: `{ league_name, results: [{ TeamID, ..., History }] }`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrackerGameweek {
    #[serde(rename = "Gameweek")]
    pub gameweek: Gameweek,
    #[serde(rename = "Points")]
    pub points: i32,
    #[serde(rename = "TotalPoints")]
    pub total_points: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrackerTeam {
    #[serde(rename = "TeamID")]
    pub team_id: TeamId,
    #[serde(rename = "PlayerName", default)]
    pub player_name: Option<String>,
    #[serde(rename = "EntryName", default)]
    pub entry_name: Option<String>,
    #[serde(rename = "History", default, deserialize_with = "de_null_as_empty")]
    pub history: Vec<TrackerGameweek>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrackerPayload {
    pub league_name: String,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub results: Vec<TrackerTeam>,
}

// ---------------------------------------------------------------------------
// Classic league standings: `{ league, standings: { results: [...] } }`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassicLeague {
    pub id: LeagueId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassicEntry {
    pub entry: TeamId,
    #[serde(default)]
    pub entry_name: Option<String>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub event_total: i32,
    #[serde(default)]
    pub total: i32,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub last_rank: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassicStandings {
    #[serde(default)]
    pub has_next: bool,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub results: Vec<ClassicEntry>,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassicPayload {
    #[serde(default)]
    pub league: Option<ClassicLeague>,
    pub standings: ClassicStandings,
}

// ---------------------------------------------------------------------------
// Per-gameweek rows: `GET /history?gameweek=N`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameweekRow {
    pub team_id: TeamId,
    #[serde(default)]
    pub rank: Option<u32>,
    pub points: i32,
    pub total_points: i32,
}

/// `GET /latest_gameweek`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatestGameweek {
    pub latest_gameweek: Gameweek,
}

// ---------------------------------------------------------------------------
// Entry history: `{ current: [{ event, points, total_points }] }`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EntryEvent {
    pub event: Gameweek,
    pub points: i32,
    pub total_points: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EntryHistory {
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub current: Vec<EntryEvent>,
}
