//! CLI argument definitions and parsing.

pub mod types;

use clap::{ArgAction, Args, Parser, Subcommand};
use types::{DataSource, Gameweek, LeagueId, TeamId, TieBreak};

/// Where league data comes from, shared by every command
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// League ID (or set `FPL_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Ignore stored league data and fetch fresh from the API.
    #[clap(long)]
    pub refresh: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Show league standings for a gameweek with rank movement.
    ///
    /// Teams are ranked by total points; the lowest gameweek score is
    /// flagged as Clown of the Week.
    Standings {
        #[clap(flatten)]
        source: SourceArgs,

        /// Gameweek to rank (defaults to the latest played).
        #[clap(long, short)]
        gameweek: Option<Gameweek>,

        /// Ordering for teams level on total points.
        #[clap(long, value_enum, default_value_t = TieBreak::default())]
        tie_break: TieBreak,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Show one team's rank and points for every gameweek.
    TeamHistory {
        #[clap(flatten)]
        source: SourceArgs,

        /// Team (entry) ID.
        #[clap(long, short)]
        team_id: TeamId,

        /// Ordering for teams level on total points.
        #[clap(long, value_enum, default_value_t = TieBreak::default())]
        tie_break: TieBreak,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print the latest gameweek with recorded scores.
    LatestGameweek {
        #[clap(flatten)]
        source: SourceArgs,
    },

    /// Fetch a league and store it locally.
    LeagueData {
        #[clap(flatten)]
        source: SourceArgs,

        /// Print the storage path and a short summary when done.
        #[clap(long)]
        verbose: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-tracker", about = "Fantasy Premier League mini-league tracker")]
pub struct Fpl {
    /// Upstream API serving league data.
    #[clap(long, value_enum, global = true, default_value_t = DataSource::default())]
    pub source: DataSource,

    /// Override the API base URL (or set `FPL_API_BASE_URL`).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[clap(short, long = "log-level", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data for an FPL classic league
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
