//! Typed ingestion boundary.
//!
//! League data arrives in three incompatible shapes depending on which API
//! served it. Everything is detected and normalized here into a [`League`], so
//! nothing past this module ever inspects raw JSON.

use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::warn;

use crate::{
    cli::types::{Gameweek, LeagueId, TeamId},
    error::{FplError, Result},
    standings::{GameweekScore, League, Team, TeamHistory, UNKNOWN_MANAGER, UNKNOWN_TEAM},
};

use super::types::{ClassicEntry, ClassicPayload, EntryHistory, GameweekRow, TrackerPayload};


/// Known payload shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// `{ league_name, results: [{ TeamID, PlayerName, EntryName, History }] }`
    V1Tracker,
    /// `{ league?, standings: { results: [{ entry, entry_name, ... }] } }`
    V2Classic,
    /// `[{ team_id, rank, points, total_points }]` for a single gameweek
    V3GameweekRows,
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SchemaVersion::V1Tracker => "v1-tracker",
            SchemaVersion::V2Classic => "v2-classic",
            SchemaVersion::V3GameweekRows => "v3-gameweek-rows",
        };
        write!(f, "{}", s)
    }
}

/// Work out which shape a payload has without fully decoding it.
pub fn detect_schema(value: &Value) -> Result<SchemaVersion> {
    match value {
        Value::Object(map) if map.contains_key("results") && map.contains_key("league_name") => {
            Ok(SchemaVersion::V1Tracker)
        }
        Value::Object(map) if map.get("standings").is_some_and(Value::is_object) => {
            Ok(SchemaVersion::V2Classic)
        }
        Value::Array(_) => Ok(SchemaVersion::V3GameweekRows),
        _ => Err(FplError::UnsupportedSchema),
    }
}

/// A decoded `/standings` response
#[derive(Debug, Clone, PartialEq)]
pub enum StandingsPayload {
    Tracker(TrackerPayload),
    Classic(ClassicPayload),
}

impl StandingsPayload {
    pub fn schema_version(&self) -> SchemaVersion {
        match self {
            StandingsPayload::Tracker(_) => SchemaVersion::V1Tracker,
            StandingsPayload::Classic(_) => SchemaVersion::V2Classic,
        }
    }
}

/// Decode a standings response of either standings shape.
pub fn decode_standings(value: Value) -> Result<StandingsPayload> {
    match detect_schema(&value)? {
        SchemaVersion::V1Tracker => Ok(StandingsPayload::Tracker(serde_json::from_value(value)?)),
        SchemaVersion::V2Classic => Ok(StandingsPayload::Classic(serde_json::from_value(value)?)),
        SchemaVersion::V3GameweekRows => Err(FplError::UnsupportedSchema),
    }
}

fn name_or(value: Option<String>, fallback: &str, team_id: TeamId, field: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            warn!(%team_id, field, "missing team metadata, using placeholder");
            fallback.to_string()
        }
    }
}

/// Keep the first occurrence of each team id.
///
/// Live classic standings can shift between page requests, so a merged payload
/// may list one entry twice. A league must hold every team exactly once.
fn first_per_team<T>(items: impl IntoIterator<Item = T>, team_id: impl Fn(&T) -> TeamId) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let id = team_id(item);
            let first = seen.insert(id);
            if !first {
                warn!(team_id = %id, "duplicate team in league payload, keeping first");
            }
            first
        })
        .collect()
}

/// Drop repeated entries from classic standings, keeping standings order.
pub fn dedup_classic_entries(entries: Vec<ClassicEntry>) -> Vec<ClassicEntry> {
    first_per_team(entries, |e| e.entry)
}

fn classic_team(entry: &ClassicEntry) -> Team {
    Team {
        id: entry.entry,
        team_name: name_or(entry.entry_name.clone(), UNKNOWN_TEAM, entry.entry, "entry_name"),
        manager_name: name_or(
            entry.player_name.clone(),
            UNKNOWN_MANAGER,
            entry.entry,
            "player_name",
        ),
    }
}

fn classic_league_name(payload: &ClassicPayload, league_id: Option<LeagueId>) -> String {
    payload
        .league
        .as_ref()
        .map(|l| l.name.clone())
        .or_else(|| league_id.map(|id| format!("League {}", id)))
        .unwrap_or_else(|| "Unknown League".to_string())
}

/// Convert an entry history into scores.
pub fn entry_history_scores(history: &EntryHistory) -> Vec<GameweekScore> {
    history
        .current
        .iter()
        .map(|e| GameweekScore {
            gameweek: e.event,
            points: e.points,
            total_points: e.total_points,
        })
        .collect()
}

/// Normalize a tracker payload, which already carries each team's history.
pub fn normalize_tracker(payload: TrackerPayload, league_id: Option<LeagueId>) -> League {
    let teams = first_per_team(payload.results, |t| t.team_id)
        .into_iter()
        .map(|t| {
            let team = Team {
                id: t.team_id,
                team_name: name_or(t.entry_name, UNKNOWN_TEAM, t.team_id, "EntryName"),
                manager_name: name_or(t.player_name, UNKNOWN_MANAGER, t.team_id, "PlayerName"),
            };
            let scores = t
                .history
                .into_iter()
                .map(|g| GameweekScore {
                    gameweek: g.gameweek,
                    points: g.points,
                    total_points: g.total_points,
                })
                .collect();
            TeamHistory::new(team, scores)
        })
        .collect();

    League::new(league_id, payload.league_name, teams)
}

/// Normalize classic standings joined with each entry's history.
///
/// Teams keep standings order. A team with no fetched history keeps an empty
/// history and simply drops out of every gameweek snapshot.
pub fn normalize_classic_with_histories(
    payload: ClassicPayload,
    league_id: Option<LeagueId>,
    histories: Vec<(TeamId, EntryHistory)>,
) -> League {
    let name = classic_league_name(&payload, league_id);
    let league_id = league_id.or(payload.league.as_ref().map(|l| l.id));
    let mut by_team: HashMap<TeamId, EntryHistory> = histories.into_iter().collect();

    let teams = dedup_classic_entries(payload.standings.results)
        .iter()
        .map(|entry| {
            let history = by_team.remove(&entry.entry).unwrap_or_else(|| {
                warn!(team_id = %entry.entry, "no gameweek history for team");
                EntryHistory::default()
            });
            TeamHistory::new(classic_team(entry), entry_history_scores(&history))
        })
        .collect();

    League::new(league_id, name, teams)
}

/// Normalize classic standings joined with per-gameweek rows.
///
/// Rows for teams absent from the standings still count; those teams get
/// placeholder names and are appended after the known teams.
pub fn normalize_classic_with_rows(
    payload: ClassicPayload,
    league_id: Option<LeagueId>,
    rows: Vec<(Gameweek, Vec<GameweekRow>)>,
) -> League {
    let name = classic_league_name(&payload, league_id);
    let league_id = league_id.or(payload.league.as_ref().map(|l| l.id));

    let mut order: Vec<Team> = dedup_classic_entries(payload.standings.results)
        .iter()
        .map(classic_team)
        .collect();
    let mut scores: HashMap<TeamId, Vec<GameweekScore>> = HashMap::new();

    for (gameweek, gw_rows) in rows {
        for row in gw_rows {
            if !order.iter().any(|t| t.id == row.team_id) {
                warn!(team_id = %row.team_id, %gameweek, "gameweek row for unknown team, using placeholder names");
                order.push(Team::unknown(row.team_id));
            }
            scores.entry(row.team_id).or_default().push(GameweekScore {
                gameweek,
                points: row.points,
                total_points: row.total_points,
            });
        }
    }

    let teams = order
        .into_iter()
        .map(|team| {
            let team_scores = scores.remove(&team.id).unwrap_or_default();
            TeamHistory::new(team, team_scores)
        })
        .collect();

    League::new(league_id, name, teams)
}

/// Give teams that no gameweek row mentioned the scores from their own history.
///
/// Teams that already have scores are left untouched.
pub fn fill_missing_histories(league: League, histories: Vec<(TeamId, EntryHistory)>) -> League {
    let mut by_team: HashMap<TeamId, EntryHistory> = histories.into_iter().collect();
    let teams = league
        .teams
        .into_iter()
        .map(|history| {
            if !history.gameweeks.is_empty() {
                return history;
            }
            match by_team.remove(&history.team.id) {
                Some(fetched) => TeamHistory::new(history.team, entry_history_scores(&fetched)),
                None => history,
            }
        })
        .collect();
    League::new(league.id, league.name, teams)
}
