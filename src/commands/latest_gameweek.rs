//! Latest gameweek command

use crate::{cli::types::Gameweek, error::FplError, LeagueId, Result};

use super::{common::CommandContext, resolve_league_id};

/// Latest gameweek any team in the league has a score for.
pub async fn latest_gameweek(
    ctx: &mut CommandContext,
    league_id: Option<LeagueId>,
    refresh: bool,
) -> Result<Gameweek> {
    let league_id = resolve_league_id(league_id)?;
    let league = ctx.league(league_id, refresh).await?;
    league.latest_gameweek().ok_or(FplError::NoData)
}

/// Handle the latest gameweek command
pub async fn handle_latest_gameweek(
    ctx: &mut CommandContext,
    league_id: Option<LeagueId>,
    refresh: bool,
) -> Result<()> {
    let gameweek = latest_gameweek(ctx, league_id, refresh).await?;
    println!("{}", gameweek);
    Ok(())
}
