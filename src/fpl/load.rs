//! Load a league from local storage, fetching and storing it when needed.
//!
//! A stored league is only served while it is younger than the staleness
//! window; after that the upstream is asked again, so new gameweeks show up
//! and an unreachable upstream is reported instead of hidden.

use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

use crate::{
    cli::types::{DataSource, LeagueId},
    standings::League,
    storage::LeagueDatabase,
    Result,
};

use super::http::FplClient;

/// How long a stored league is served before it is fetched again.
pub const STORED_LEAGUE_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// Where a loaded league came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Served from local storage
    Hit,
    /// Not stored yet, fetched
    Miss,
    /// Stored copy was older than the staleness window, fetched again
    Stale,
    /// Fetched because a refresh was requested
    Refreshed,
}

fn age_of(fetched_at: u64) -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH + Duration::from_secs(fetched_at))
        .unwrap_or(Duration::ZERO)
}

/// Load `league_id` as served by `source`, using [`STORED_LEAGUE_MAX_AGE`].
pub async fn load_or_fetch_league(
    db: &mut LeagueDatabase,
    client: &FplClient,
    source: DataSource,
    league_id: LeagueId,
    refresh: bool,
) -> Result<(League, LoadStatus)> {
    load_or_fetch_league_within(db, client, source, league_id, refresh, STORED_LEAGUE_MAX_AGE)
        .await
}

/// Serve the stored copy while it is younger than `max_age`. Otherwise, or
/// when `refresh == true`, fetch from `source`, store the result and return it.
/// A failed fetch is returned as an error, never papered over with old data.
pub async fn load_or_fetch_league_within(
    db: &mut LeagueDatabase,
    client: &FplClient,
    source: DataSource,
    league_id: LeagueId,
    refresh: bool,
    max_age: Duration,
) -> Result<(League, LoadStatus)> {
    // 1) Try storage (unless refresh)
    let mut stale = false;
    if !refresh {
        if let Some(fetched_at) = db.league_fetched_at(league_id, source)? {
            let age = age_of(fetched_at);
            if age < max_age {
                if let Some(league) = db.load_league(league_id, source)? {
                    debug!(%league_id, %source, age_secs = age.as_secs(), "league loaded from storage");
                    return Ok((league, LoadStatus::Hit));
                }
            }
            debug!(%league_id, %source, age_secs = age.as_secs(), "stored league is stale");
            stale = true;
        }
    }

    // 2) Fetch and normalize
    info!(%league_id, %source, base_url = client.base_url(), "fetching league");
    let league = client.fetch_league(source, league_id).await?;

    // 3) Store
    db.save_league(league_id, source, &league)?;

    let status = if refresh {
        LoadStatus::Refreshed
    } else if stale {
        LoadStatus::Stale
    } else {
        LoadStatus::Miss
    };
    Ok((league, status))
}
