//! League persistence queries
//!
//! Every league is stored once per data source, so data fetched from one API is
//! never served for another.

use super::{models::StoredLeague, schema::LeagueDatabase};
use crate::{
    cli::types::{DataSource, Gameweek, LeagueId, TeamId},
    standings::{GameweekScore, League, Team, TeamHistory},
};
use anyhow::Result;
use rusqlite::{params, OptionalExtension};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

impl LeagueDatabase {
    /// Replace everything stored for `league_id` from `source` with `league`, atomically.
    pub fn save_league(
        &mut self,
        league_id: LeagueId,
        source: DataSource,
        league: &League,
    ) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
        let id = league_id.as_u32();

        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM team_gameweeks WHERE league_id = ? AND source = ?",
            params![id, source],
        )?;
        tx.execute(
            "DELETE FROM teams WHERE league_id = ? AND source = ?",
            params![id, source],
        )?;
        tx.execute(
            "INSERT OR REPLACE INTO leagues (league_id, source, name, fetched_at) VALUES (?, ?, ?, ?)",
            params![id, source, league.name, now],
        )?;

        {
            let mut insert_team = tx.prepare(
                "INSERT OR REPLACE INTO teams
                 (league_id, source, team_id, position, team_name, manager_name)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            let mut insert_gw = tx.prepare(
                "INSERT OR REPLACE INTO team_gameweeks
                 (league_id, source, team_id, gameweek, points, total_points)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;

            for (position, history) in league.teams.iter().enumerate() {
                let team = &history.team;
                insert_team.execute(params![
                    id,
                    source,
                    team.id.as_u32(),
                    position as i64,
                    team.team_name,
                    team.manager_name
                ])?;
                for score in &history.gameweeks {
                    insert_gw.execute(params![
                        id,
                        source,
                        team.id.as_u32(),
                        score.gameweek.as_u16(),
                        score.points,
                        score.total_points
                    ])?;
                }
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// When the stored copy was fetched, in unix seconds.
    pub fn league_fetched_at(&self, league_id: LeagueId, source: DataSource) -> Result<Option<u64>> {
        let fetched_at: Option<i64> = self
            .conn
            .query_row(
                "SELECT fetched_at FROM leagues WHERE league_id = ? AND source = ?",
                params![league_id.as_u32(), source],
                |row| row.get(0),
            )
            .optional()?;
        Ok(fetched_at.map(|t| t.max(0) as u64))
    }

    /// Load a stored league, teams in their original order.
    pub fn load_league(&self, league_id: LeagueId, source: DataSource) -> Result<Option<League>> {
        let id = league_id.as_u32();
        let name: Option<String> = self
            .conn
            .query_row(
                "SELECT name FROM leagues WHERE league_id = ? AND source = ?",
                params![id, source],
                |row| row.get(0),
            )
            .optional()?;
        let Some(name) = name else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(
            "SELECT team_id, team_name, manager_name FROM teams
             WHERE league_id = ? AND source = ? ORDER BY position",
        )?;
        let teams = stmt
            .query_map(params![id, source], |row| {
                Ok(Team {
                    id: TeamId::new(row.get(0)?),
                    team_name: row.get(1)?,
                    manager_name: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = self.conn.prepare(
            "SELECT team_id, gameweek, points, total_points FROM team_gameweeks
             WHERE league_id = ? AND source = ? ORDER BY team_id, gameweek",
        )?;
        let mut scores: HashMap<TeamId, Vec<GameweekScore>> = HashMap::new();
        let rows = stmt.query_map(params![id, source], |row| {
            Ok((
                TeamId::new(row.get(0)?),
                GameweekScore {
                    gameweek: Gameweek::new(row.get(1)?),
                    points: row.get(2)?,
                    total_points: row.get(3)?,
                },
            ))
        })?;
        for row in rows {
            let (team_id, score) = row?;
            scores.entry(team_id).or_default().push(score);
        }

        let teams = teams
            .into_iter()
            .map(|team| {
                let team_scores = scores.remove(&team.id).unwrap_or_default();
                TeamHistory::new(team, team_scores)
            })
            .collect();

        Ok(Some(League::new(Some(league_id), name, teams)))
    }

    /// Remove a stored league. Returns whether anything was deleted.
    pub fn delete_league(&mut self, league_id: LeagueId, source: DataSource) -> Result<bool> {
        let id = league_id.as_u32();
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM team_gameweeks WHERE league_id = ? AND source = ?",
            params![id, source],
        )?;
        tx.execute(
            "DELETE FROM teams WHERE league_id = ? AND source = ?",
            params![id, source],
        )?;
        let removed = tx.execute(
            "DELETE FROM leagues WHERE league_id = ? AND source = ?",
            params![id, source],
        )?;
        tx.commit()?;
        Ok(removed > 0)
    }

    /// Summaries of every stored league.
    pub fn list_leagues(&self) -> Result<Vec<StoredLeague>> {
        let mut stmt = self.conn.prepare(
            "SELECT l.league_id, l.source, l.name, l.fetched_at,
                    (SELECT COUNT(*) FROM teams t
                     WHERE t.league_id = l.league_id AND t.source = l.source),
                    (SELECT MAX(g.gameweek) FROM team_gameweeks g
                     WHERE g.league_id = l.league_id AND g.source = l.source)
             FROM leagues l
             ORDER BY l.league_id, l.source",
        )?;
        let leagues = stmt
            .query_map([], |row| {
                let fetched_at: i64 = row.get(3)?;
                let latest: Option<u16> = row.get(5)?;
                Ok(StoredLeague {
                    league_id: LeagueId::new(row.get(0)?),
                    source: row.get(1)?,
                    name: row.get(2)?,
                    fetched_at: fetched_at.max(0) as u64,
                    team_count: row.get(4)?,
                    latest_gameweek: latest.map(Gameweek::new),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(leagues)
    }
}
