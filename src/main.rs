//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use fpl_tracker::{
    cli::{Commands, Fpl, GetCmd},
    commands::{
        common::CommandContext,
        latest_gameweek::handle_latest_gameweek,
        league_data::handle_league_data,
        standings::{handle_standings, StandingsParams},
        team_history::{handle_team_history, TeamHistoryParams},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fpl_tracker={}", default_level)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Fpl::parse();
    init_tracing(app.verbosity);

    let mut ctx = CommandContext::new(app.source, app.base_url.as_deref())?;

    let result = match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Standings {
                source,
                gameweek,
                tie_break,
                json,
            } => {
                handle_standings(
                    &mut ctx,
                    StandingsParams {
                        league_id: source.league_id,
                        gameweek,
                        tie_break,
                        as_json: json,
                        refresh: source.refresh,
                    },
                )
                .await
            }

            GetCmd::TeamHistory {
                source,
                team_id,
                tie_break,
                json,
            } => {
                handle_team_history(
                    &mut ctx,
                    TeamHistoryParams {
                        league_id: source.league_id,
                        team_id,
                        tie_break,
                        as_json: json,
                        refresh: source.refresh,
                    },
                )
                .await
            }

            GetCmd::LatestGameweek { source } => {
                handle_latest_gameweek(&mut ctx, source.league_id, source.refresh).await
            }

            GetCmd::LeagueData { source, verbose } => {
                handle_league_data(&mut ctx, source.league_id, source.refresh, verbose).await
            }
        },
    };

    if let Err(e) = &result {
        tracing::error!("Command failed: {}", e);
    }
    result
}
