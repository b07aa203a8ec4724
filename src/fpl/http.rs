//! HTTP client for the official FPL API and the local dashboard API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::task::JoinSet;
use tracing::debug;

use crate::{
    cli::types::{DataSource, Gameweek, LeagueId, TeamId},
    core::default_header_map,
    error::Result,
    standings::League,
};

use super::{
    ingest::{
        decode_standings, dedup_classic_entries, fill_missing_histories,
        normalize_classic_with_histories, normalize_classic_with_rows, normalize_tracker,
        StandingsPayload,
    },
    types::{ClassicPayload, EntryHistory, GameweekRow, LatestGameweek},
};

#[cfg(test)]
mod tests;

/// Base path for the official Fantasy Premier League API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Default address of a locally running dashboard API.
pub const DASHBOARD_BASE_URL: &str = "http://localhost:8080";

/// Most per-team history requests in flight at once.
pub const MAX_CONCURRENT_HISTORY_REQUESTS: usize = 8;

/// Endpoint serving one team's gameweek history
#[derive(Debug, Clone, Copy)]
enum HistoryEndpoint {
    /// `entry/{id}/history/` on the official API
    Entry,
    /// `team_history?team_id=N` on the dashboard
    Dashboard,
}

/// Thin wrapper over a shared reqwest client bound to one base URL.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_header_map()?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%url, ?query, "GET");

        let res = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }

    // --- official API -----------------------------------------------------

    /// One page of classic league standings.
    pub async fn get_classic_standings_page(
        &self,
        league_id: LeagueId,
        page: u32,
    ) -> Result<ClassicPayload> {
        let path = format!("leagues-classic/{}/standings/", league_id);
        self.get_json(&path, &[("page_standings", page.to_string())])
            .await
    }

    /// Classic league standings with every page merged into one payload.
    pub async fn get_classic_standings(&self, league_id: LeagueId) -> Result<ClassicPayload> {
        let mut payload = self.get_classic_standings_page(league_id, 1).await?;
        let mut has_next = payload.standings.has_next;
        let mut page = payload.standings.page;

        while has_next {
            page += 1;
            let next = self.get_classic_standings_page(league_id, page).await?;
            has_next = next.standings.has_next && !next.standings.results.is_empty();
            payload.standings.results.extend(next.standings.results);
        }

        payload.standings.results = dedup_classic_entries(payload.standings.results);
        payload.standings.has_next = false;
        Ok(payload)
    }

    /// Gameweek-by-gameweek history of one entry.
    pub async fn get_entry_history(&self, team_id: TeamId) -> Result<EntryHistory> {
        let path = format!("entry/{}/history/", team_id);
        self.get_json(&path, &[]).await
    }

    /// Histories for many entries fetched concurrently, returned in input order.
    ///
    /// The first failure aborts the whole fetch.
    pub async fn get_entry_histories(&self, teams: &[TeamId]) -> Result<Vec<(TeamId, EntryHistory)>> {
        self.get_histories(HistoryEndpoint::Entry, teams).await
    }

    async fn get_history(&self, endpoint: HistoryEndpoint, team_id: TeamId) -> Result<EntryHistory> {
        match endpoint {
            HistoryEndpoint::Entry => self.get_entry_history(team_id).await,
            HistoryEndpoint::Dashboard => self.get_team_history(team_id).await,
        }
    }

    /// At most `MAX_CONCURRENT_HISTORY_REQUESTS` requests run at a time.
    async fn get_histories(
        &self,
        endpoint: HistoryEndpoint,
        teams: &[TeamId],
    ) -> Result<Vec<(TeamId, EntryHistory)>> {
        let mut pending = teams.iter().copied().enumerate();
        let mut set = JoinSet::new();
        let mut fetched = Vec::with_capacity(teams.len());

        loop {
            while set.len() < MAX_CONCURRENT_HISTORY_REQUESTS {
                let Some((idx, team_id)) = pending.next() else {
                    break;
                };
                let client = self.clone();
                set.spawn(async move { (idx, team_id, client.get_history(endpoint, team_id).await) });
            }

            let Some(joined) = set.join_next().await else {
                break;
            };
            let (idx, team_id, history) = joined?;
            fetched.push((idx, team_id, history?));
        }
        fetched.sort_by_key(|(idx, _, _)| *idx);

        Ok(fetched
            .into_iter()
            .map(|(_, team_id, history)| (team_id, history))
            .collect())
    }

    // --- dashboard API ----------------------------------------------------

    /// `GET /standings[?leagueId=]`, in whichever shape the server speaks.
    pub async fn get_dashboard_standings(
        &self,
        league_id: Option<LeagueId>,
    ) -> Result<StandingsPayload> {
        let query: Vec<(&str, String)> = league_id
            .map(|id| vec![("leagueId", id.to_string())])
            .unwrap_or_default();
        let raw: Value = self.get_json("standings", &query).await?;
        decode_standings(raw)
    }

    /// `GET /latest_gameweek`
    pub async fn get_latest_gameweek(&self) -> Result<Gameweek> {
        let latest: LatestGameweek = self.get_json("latest_gameweek", &[]).await?;
        Ok(latest.latest_gameweek)
    }

    /// `GET /history?gameweek=N`
    pub async fn get_gameweek_history(&self, gameweek: Gameweek) -> Result<Vec<GameweekRow>> {
        self.get_json("history", &[("gameweek", gameweek.to_string())])
            .await
    }

    /// `GET /team_history?team_id=N`
    pub async fn get_team_history(&self, team_id: TeamId) -> Result<EntryHistory> {
        self.get_json("team_history", &[("team_id", team_id.to_string())])
            .await
    }

    /// Dashboard histories for many teams, returned in input order.
    pub async fn get_team_histories(&self, teams: &[TeamId]) -> Result<Vec<(TeamId, EntryHistory)>> {
        self.get_histories(HistoryEndpoint::Dashboard, teams).await
    }

    // --- normalized -------------------------------------------------------

    /// Fetch a whole league from `source` and normalize it.
    pub async fn fetch_league(&self, source: DataSource, league_id: LeagueId) -> Result<League> {
        match source {
            DataSource::Fpl => {
                let standings = self.get_classic_standings(league_id).await?;
                let teams: Vec<TeamId> =
                    standings.standings.results.iter().map(|e| e.entry).collect();
                debug!(%league_id, teams = teams.len(), "fetching entry histories");
                let histories = self.get_entry_histories(&teams).await?;
                Ok(normalize_classic_with_histories(
                    standings,
                    Some(league_id),
                    histories,
                ))
            }
            DataSource::Dashboard => match self.get_dashboard_standings(Some(league_id)).await? {
                StandingsPayload::Tracker(payload) => Ok(normalize_tracker(payload, Some(league_id))),
                StandingsPayload::Classic(payload) => {
                    let latest = self.get_latest_gameweek().await?;
                    let mut rows = Vec::with_capacity(latest.as_u16() as usize);
                    for gw in 1..=latest.as_u16() {
                        let gameweek = Gameweek::new(gw);
                        rows.push((gameweek, self.get_gameweek_history(gameweek).await?));
                    }
                    let league = normalize_classic_with_rows(payload, Some(league_id), rows);

                    // Standings teams the gameweek rows never mention
                    let missing: Vec<TeamId> = league
                        .teams
                        .iter()
                        .filter(|t| t.gameweeks.is_empty())
                        .map(|t| t.team.id)
                        .collect();
                    if missing.is_empty() {
                        return Ok(league);
                    }
                    debug!(%league_id, teams = missing.len(), "fetching team histories");
                    let histories = self.get_team_histories(&missing).await?;
                    Ok(fill_missing_histories(league, histories))
                }
            },
        }
    }
}
