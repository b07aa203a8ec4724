//! Gameweek ranking, rank movement and Clown of the Week detection.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::{
    cli::types::{Gameweek, TeamId, TieBreak},
    error::{FplError, Result},
};

use super::model::{League, RankMap, StandingsSnapshot, TeamGameweekRecord};


/// Signed rank change between two gameweeks.
///
/// Positive means the team climbed, negative means it dropped. Computed in
/// `i64` so every pair of `u32` ranks is exact.
pub fn compute_movement(current_rank: u32, previous_rank: u32) -> i64 {
    i64::from(previous_rank) - i64::from(current_rank)
}

/// Movement when the previous rank may be unknown; no record counts as no movement.
pub fn movement_or_zero(current_rank: u32, previous_rank: Option<u32>) -> i64 {
    previous_rank
        .map(|prev| compute_movement(current_rank, prev))
        .unwrap_or(0)
}

/// A ranked, movement-annotated line of a standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub rank: u32,
    pub previous_rank: Option<u32>,
    pub movement: i64,
    pub team_id: TeamId,
    pub team_name: String,
    pub manager_name: String,
    pub points: i32,
    pub total_points: i32,
    pub lowest_scorer: bool,
}

/// Standings for one gameweek of a league
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standings {
    pub league_name: String,
    pub gameweek: Gameweek,
    pub latest_gameweek: Gameweek,
    pub rows: Vec<StandingsRow>,
}

impl Standings {
    pub fn lowest_scorers(&self) -> impl Iterator<Item = &StandingsRow> {
        self.rows.iter().filter(|r| r.lowest_scorer)
    }
}

/// Ranks gameweek snapshots by total points using an explicit tie-break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandingsRanker {
    tie_break: TieBreak,
}

impl StandingsRanker {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    fn compare(&self, a: &TeamGameweekRecord, b: &TeamGameweekRecord) -> Ordering {
        let by_total = b.total_points.cmp(&a.total_points);
        let tie = match self.tie_break {
            TieBreak::InputOrder => Ordering::Equal,
            TieBreak::TeamId => a.team_id.cmp(&b.team_id),
            TieBreak::GameweekPoints => b.points.cmp(&a.points),
            TieBreak::TeamName => a
                .team_name
                .to_lowercase()
                .cmp(&b.team_name.to_lowercase()),
        };
        // stable sort: anything still equal keeps input order
        by_total.then(tie)
    }

    /// Records sorted into rank order.
    pub fn order<'a>(&self, snapshot: &'a StandingsSnapshot) -> Vec<&'a TeamGameweekRecord> {
        let mut sorted: Vec<&TeamGameweekRecord> = snapshot.records.iter().collect();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }

    /// Rank of every team in the snapshot, 1 through N.
    pub fn rank(&self, snapshot: &StandingsSnapshot) -> RankMap {
        self.order(snapshot)
            .into_iter()
            .enumerate()
            .map(|(idx, rec)| (rec.team_id, idx as u32 + 1))
            .collect()
    }

    /// Every team sharing the lowest gameweek score. Empty only for an empty snapshot.
    pub fn find_lowest_scorers(&self, snapshot: &StandingsSnapshot) -> BTreeSet<TeamId> {
        let Some(min_points) = snapshot.records.iter().map(|r| r.points).min() else {
            return BTreeSet::new();
        };
        snapshot
            .records
            .iter()
            .filter(|r| r.points == min_points)
            .map(|r| r.team_id)
            .collect()
    }

    /// Ranked standings for `gameweek` with movement against the gameweek before it.
    pub fn standings(&self, league: &League, gameweek: Gameweek) -> Result<Standings> {
        let latest = league.latest_gameweek().ok_or(FplError::NoData)?;
        if gameweek.as_u16() == 0 || gameweek > latest {
            return Err(FplError::GameweekOutOfRange {
                gameweek,
                latest: latest.as_u16(),
            });
        }

        let snapshot = league.snapshot(gameweek);
        let lowest = self.find_lowest_scorers(&snapshot);
        let previous_ranks = gameweek
            .previous()
            .map(|prev| self.rank(&league.snapshot(prev)))
            .unwrap_or_default();

        let rows = self
            .order(&snapshot)
            .into_iter()
            .enumerate()
            .map(|(idx, rec)| {
                let rank = idx as u32 + 1;
                let previous_rank = previous_ranks.get(&rec.team_id).copied();
                StandingsRow {
                    rank,
                    previous_rank,
                    movement: movement_or_zero(rank, previous_rank),
                    team_id: rec.team_id,
                    team_name: rec.team_name.clone(),
                    manager_name: rec.manager_name.clone(),
                    points: rec.points,
                    total_points: rec.total_points,
                    lowest_scorer: lowest.contains(&rec.team_id),
                }
            })
            .collect();

        Ok(Standings {
            league_name: league.name.clone(),
            gameweek,
            latest_gameweek: latest,
            rows,
        })
    }
}
