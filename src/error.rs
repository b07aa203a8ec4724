//! Error types for the FPL league tracker

use thiserror::Error;

use crate::cli::types::{Gameweek, TeamId};


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Background fetch failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse numeric ID: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("League ID must be greater than zero")]
    ZeroLeagueId,

    #[error("FPL API returned no data")]
    NoData,

    #[error("Gameweek {gameweek} is out of range (latest is {latest})")]
    GameweekOutOfRange { gameweek: Gameweek, latest: u16 },

    #[error("Team not found: {team_id}")]
    TeamNotFound { team_id: TeamId },

    #[error("Unrecognized standings payload")]
    UnsupportedSchema,
}
