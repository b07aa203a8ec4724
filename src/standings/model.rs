//! Immutable league snapshot and the per-gameweek records derived from it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cli::types::{Gameweek, LeagueId, TeamId};

/// Name shown when a team's metadata is missing upstream.
pub const UNKNOWN_TEAM: &str = "Unknown Team";
/// Manager shown when a team's metadata is missing upstream.
pub const UNKNOWN_MANAGER: &str = "Unknown Manager";

/// A team (FPL "entry") and its manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub team_name: String,
    pub manager_name: String,
}

impl Team {
    /// Placeholder metadata for a team only known by ID.
    pub fn unknown(id: TeamId) -> Self {
        Self {
            id,
            team_name: UNKNOWN_TEAM.to_string(),
            manager_name: UNKNOWN_MANAGER.to_string(),
        }
    }
}

/// Score for one team in one gameweek
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameweekScore {
    pub gameweek: Gameweek,
    pub points: i32,
    pub total_points: i32,
}

/// A team with every gameweek it has scores for, ordered by gameweek
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamHistory {
    pub team: Team,
    pub gameweeks: Vec<GameweekScore>,
}

impl TeamHistory {
    pub fn new(team: Team, mut gameweeks: Vec<GameweekScore>) -> Self {
        gameweeks.sort_by_key(|g| g.gameweek);
        gameweeks.dedup_by_key(|g| g.gameweek);
        Self { team, gameweeks }
    }

    pub fn score(&self, gameweek: Gameweek) -> Option<&GameweekScore> {
        self.gameweeks
            .binary_search_by_key(&gameweek, |g| g.gameweek)
            .ok()
            .map(|idx| &self.gameweeks[idx])
    }
}

/// One team's performance in one gameweek
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGameweekRecord {
    pub team_id: TeamId,
    pub team_name: String,
    pub manager_name: String,
    pub points: i32,
    pub total_points: i32,
}

/// All team records for a single gameweek, in league order.
///
/// League order matters: it is the fallback for equal total points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsSnapshot {
    pub gameweek: Gameweek,
    pub records: Vec<TeamGameweekRecord>,
}

impl StandingsSnapshot {
    pub fn new(gameweek: Gameweek, records: Vec<TeamGameweekRecord>) -> Self {
        Self { gameweek, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 1-based rank of every team in a snapshot
pub type RankMap = HashMap<TeamId, u32>;

/// A league and the full history of its teams.
///
/// Built once per request and passed explicitly to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: Option<LeagueId>,
    pub name: String,
    pub teams: Vec<TeamHistory>,
}

impl League {
    pub fn new(id: Option<LeagueId>, name: impl Into<String>, teams: Vec<TeamHistory>) -> Self {
        Self {
            id,
            name: name.into(),
            teams,
        }
    }

    /// Highest gameweek any team has a score for.
    pub fn latest_gameweek(&self) -> Option<Gameweek> {
        self.teams
            .iter()
            .filter_map(|t| t.gameweeks.last().map(|g| g.gameweek))
            .max()
    }

    /// Every gameweek from 1 through the latest.
    pub fn gameweeks(&self) -> impl Iterator<Item = Gameweek> {
        let latest = self.latest_gameweek().map(|g| g.as_u16()).unwrap_or(0);
        (1..=latest).map(Gameweek::new)
    }

    pub fn team(&self, team_id: TeamId) -> Option<&TeamHistory> {
        self.teams.iter().find(|t| t.team.id == team_id)
    }

    /// Records for `gameweek` in league order. Teams without a score that
    /// week (late joiners) are left out.
    pub fn snapshot(&self, gameweek: Gameweek) -> StandingsSnapshot {
        let records = self
            .teams
            .iter()
            .filter_map(|t| {
                t.score(gameweek).map(|s| TeamGameweekRecord {
                    team_id: t.team.id,
                    team_name: t.team.team_name.clone(),
                    manager_name: t.team.manager_name.clone(),
                    points: s.points,
                    total_points: s.total_points,
                })
            })
            .collect();
        StandingsSnapshot::new(gameweek, records)
    }
}
