//! Selectable behaviours for tracker commands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How teams with equal total points are ordered.
///
/// Upstream data gives no tie rule, so the comparator is always explicit.
/// Whatever the choice, league (input) order is the final fallback, which keeps
/// every ranking a strict total order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Keep the order teams appear in the league payload
    #[default]
    InputOrder,
    /// Lower team ID first
    TeamId,
    /// Higher points in the ranked gameweek first
    GameweekPoints,
    /// Team name, case-insensitive alphabetical
    TeamName,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TieBreak::InputOrder => "input-order",
            TieBreak::TeamId => "team-id",
            TieBreak::GameweekPoints => "gameweek-points",
            TieBreak::TeamName => "team-name",
        };
        write!(f, "{}", s)
    }
}

/// Which upstream serves league data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// The official Fantasy Premier League API
    #[default]
    Fpl,
    /// A local dashboard API exposing `/standings`, `/history`, `/latest_gameweek`
    Dashboard,
}

impl DataSource {
    /// Base URL used when neither `--base-url` nor `FPL_API_BASE_URL` is set.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            DataSource::Fpl => crate::fpl::http::FPL_BASE_URL,
            DataSource::Dashboard => crate::fpl::http::DASHBOARD_BASE_URL,
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataSource::Fpl => "fpl",
            DataSource::Dashboard => "dashboard",
        };
        write!(f, "{}", s)
    }
}
