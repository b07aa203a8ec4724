//! Resources shared by every command.

use tracing::{debug, info};

use crate::{
    cli::types::DataSource,
    core::resolve_base_url,
    fpl::{load_or_fetch_league, FplClient, LoadStatus},
    standings::League,
    storage::LeagueDatabase,
    LeagueId, Result,
};

/// Context containing the resources most commands need
pub struct CommandContext {
    pub db: LeagueDatabase,
    pub client: FplClient,
    pub source: DataSource,
}

impl CommandContext {
    /// Open the default database and build a client for `source`
    pub fn new(source: DataSource, base_url: Option<&str>) -> Result<Self> {
        debug!("Connecting to database...");
        let db = LeagueDatabase::new()?;
        let client = FplClient::new(resolve_base_url(source, base_url))?;
        Ok(Self::with_parts(db, client, source))
    }

    pub fn with_parts(db: LeagueDatabase, client: FplClient, source: DataSource) -> Self {
        Self { db, client, source }
    }

    /// Load a league from storage or the API.
    pub async fn league(&mut self, league_id: LeagueId, refresh: bool) -> Result<League> {
        let (league, status) =
            load_or_fetch_league(&mut self.db, &self.client, self.source, league_id, refresh)
                .await?;
        match status {
            LoadStatus::Hit => info!(%league_id, "league loaded (from storage)"),
            LoadStatus::Miss => info!(%league_id, "league fetched (not stored yet)"),
            LoadStatus::Stale => info!(%league_id, "league fetched (stored copy was stale)"),
            LoadStatus::Refreshed => info!(%league_id, "league fetched (refreshed)"),
        }
        Ok(league)
    }
}
