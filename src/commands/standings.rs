//! Gameweek standings command.
//!
//! Loads the league, ranks the requested gameweek (the latest by default) and
//! prints a movement-annotated table. A league that cannot be loaded is never
//! fatal: the table is replaced by a placeholder row and the command succeeds.

use tracing::error;

use crate::{
    cli::types::{Gameweek, TieBreak},
    error::FplError,
    standings::{League, Standings, StandingsRanker},
    LeagueId, Result,
};

use super::{
    common::CommandContext,
    output::{
        placeholder_json, render_placeholder_table, render_standings_table, standings_json,
        LOAD_FAILED_MESSAGE, NO_STANDINGS_MESSAGE,
    },
    resolve_league_id,
};

/// Configuration for the standings command
#[derive(Debug, Clone)]
pub struct StandingsParams {
    pub league_id: Option<LeagueId>,
    pub gameweek: Option<Gameweek>,
    pub tie_break: TieBreak,
    pub as_json: bool,
    pub refresh: bool,
}

/// Rank `gameweek` of `league`, defaulting to the latest gameweek.
pub fn standings_for(
    league: &League,
    gameweek: Option<Gameweek>,
    tie_break: TieBreak,
) -> Result<Standings> {
    let gameweek = gameweek
        .or_else(|| league.latest_gameweek())
        .ok_or(FplError::NoData)?;
    StandingsRanker::new(tie_break).standings(league, gameweek)
}

/// Produce the command's output without printing it.
pub async fn render_standings(ctx: &mut CommandContext, params: &StandingsParams) -> Result<String> {
    let league_id = resolve_league_id(params.league_id)?;

    let league = match ctx.league(league_id, params.refresh).await {
        Ok(league) => league,
        Err(e) => {
            error!(%league_id, error = %e, "could not load standings");
            return placeholder(params.as_json, LOAD_FAILED_MESSAGE);
        }
    };

    match standings_for(&league, params.gameweek, params.tie_break) {
        Ok(standings) if params.as_json => standings_json(&standings),
        Ok(standings) => Ok(render_standings_table(&standings)),
        Err(FplError::NoData) => placeholder(params.as_json, NO_STANDINGS_MESSAGE),
        Err(e) => Err(e),
    }
}

fn placeholder(as_json: bool, message: &str) -> Result<String> {
    if as_json {
        placeholder_json(message)
    } else {
        Ok(render_placeholder_table(message))
    }
}

/// Handle the standings command
pub async fn handle_standings(ctx: &mut CommandContext, params: StandingsParams) -> Result<()> {
    let out = render_standings(ctx, &params).await?;
    println!("{}", out.trim_end());
    Ok(())
}
