//! Per-team rank history command

use crate::{
    cli::types::{TeamId, TieBreak},
    standings::{team_rank_history, StandingsRanker, TeamRankHistory},
    LeagueId, Result,
};

use super::{
    common::CommandContext,
    output::{render_team_history, team_history_json},
    resolve_league_id,
};

/// Configuration for the team history command
#[derive(Debug, Clone)]
pub struct TeamHistoryParams {
    pub league_id: Option<LeagueId>,
    pub team_id: TeamId,
    pub tie_break: TieBreak,
    pub as_json: bool,
    pub refresh: bool,
}

/// Rank series for one team of the league.
pub async fn load_team_history(
    ctx: &mut CommandContext,
    params: &TeamHistoryParams,
) -> Result<TeamRankHistory> {
    let league_id = resolve_league_id(params.league_id)?;
    let league = ctx.league(league_id, params.refresh).await?;
    team_rank_history(&StandingsRanker::new(params.tie_break), &league, params.team_id)
}

/// Handle the team history command
pub async fn handle_team_history(ctx: &mut CommandContext, params: TeamHistoryParams) -> Result<()> {
    let history = load_team_history(ctx, &params).await?;
    if params.as_json {
        println!("{}", team_history_json(&history)?);
    } else {
        print!("{}", render_team_history(&history));
    }
    Ok(())
}
