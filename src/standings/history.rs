//! Season-long rank tables and per-team series for charting.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    cli::types::{Gameweek, TeamId},
    error::{FplError, Result},
};

use super::{
    model::{League, RankMap, Team},
    ranker::StandingsRanker,
};

/// One point on a team's season chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankPoint {
    pub gameweek: Gameweek,
    pub rank: u32,
    pub points: i32,
    pub total_points: i32,
}

/// A team's rank and points across the season
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRankHistory {
    pub league_name: String,
    pub team: Team,
    /// League size, the bottom of the rank axis
    pub total_teams: usize,
    pub points: Vec<RankPoint>,
}

impl TeamRankHistory {
    pub fn best_rank(&self) -> Option<u32> {
        self.points.iter().map(|p| p.rank).min()
    }

    pub fn worst_rank(&self) -> Option<u32> {
        self.points.iter().map(|p| p.rank).max()
    }
}

/// Rank maps for every gameweek of the season.
pub fn season_rank_table(ranker: &StandingsRanker, league: &League) -> BTreeMap<Gameweek, RankMap> {
    let gameweeks: Vec<Gameweek> = league.gameweeks().collect();
    gameweeks
        .into_par_iter()
        .map(|gw| (gw, ranker.rank(&league.snapshot(gw))))
        .collect()
}

/// Rank and points for `team_id` in every gameweek it has a score for.
pub fn team_rank_history(
    ranker: &StandingsRanker,
    league: &League,
    team_id: TeamId,
) -> Result<TeamRankHistory> {
    let history = league
        .team(team_id)
        .ok_or(FplError::TeamNotFound { team_id })?;
    let table = season_rank_table(ranker, league);

    let points = history
        .gameweeks
        .iter()
        .filter_map(|score| {
            let rank = table.get(&score.gameweek)?.get(&team_id).copied()?;
            Some(RankPoint {
                gameweek: score.gameweek,
                rank,
                points: score.points,
                total_points: score.total_points,
            })
        })
        .collect();

    Ok(TeamRankHistory {
        league_name: league.name.clone(),
        team: history.team.clone(),
        total_teams: league.teams.len(),
        points,
    })
}
