//! League data command implementation

use crate::{core::league_database_path, LeagueId, Result};

use super::{common::CommandContext, resolve_league_id};

/// Handle the league data command
pub async fn handle_league_data(
    ctx: &mut CommandContext,
    league_id: Option<LeagueId>,
    refresh: bool,
    verbose: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;

    if refresh {
        println!("Fetching fresh league data from {}...", ctx.client.base_url());
    } else {
        println!("Loading league data (stored if recent)...");
    }

    let league = ctx.league(league_id, refresh).await?;

    println!("✓ {} loaded successfully", league.name);

    if verbose {
        println!("League stored at: {}", league_database_path().display());
        println!("League ID: {}, Teams: {}", league_id, league.teams.len());
        match league.latest_gameweek() {
            Some(gw) => println!("Latest gameweek: {}", gw),
            None => println!("Latest gameweek: none played"),
        }
        for stored in ctx.db.list_leagues()? {
            println!(
                "  stored: {} ({}, {}) - {} teams",
                stored.name, stored.league_id, stored.source, stored.team_count
            );
        }
    }

    Ok(())
}
