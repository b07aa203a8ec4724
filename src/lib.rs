//! Fantasy Premier League mini-league tracker
//!
//! A Rust library for following an FPL classic league week by week: standings,
//! rank movement, the gameweek's lowest scorer and a per-team rank history.
//!
//! ## Features
//!
//! - **Standings**: Rank any gameweek by total points with an explicit tie-break
//! - **Rank Movement**: Signed change against the previous gameweek
//! - **Clown of the Week**: Every team sharing the lowest gameweek score
//! - **Team History**: Rank and points series for charting
//! - **Typed Ingestion**: Three upstream payload shapes normalized into one model
//! - **Local Storage**: Leagues are kept in SQLite and refreshed on demand
//!
//! ## Quick Start
//!
//! ```rust
//! use fpl_tracker::standings::{GameweekScore, League, StandingsRanker, Team, TeamHistory};
//! use fpl_tracker::{Gameweek, TeamId, TieBreak};
//!
//! let team = |id: u32, name: &str, total: i32| {
//!     TeamHistory::new(
//!         Team { id: TeamId::new(id), team_name: name.into(), manager_name: "M".into() },
//!         vec![GameweekScore { gameweek: Gameweek::new(1), points: total, total_points: total }],
//!     )
//! };
//! let league = League::new(None, "Office", vec![team(1, "A", 50), team(2, "B", 70)]);
//!
//! let standings = StandingsRanker::new(TieBreak::InputOrder)
//!     .standings(&league, Gameweek::new(1))
//!     .unwrap();
//! assert_eq!(standings.rows[0].team_name, "B");
//! assert!(standings.rows[1].lowest_scorer);
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export FPL_LEAGUE_ID=123456
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;
pub mod standings;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{DataSource, Gameweek, LeagueId, TeamId, TieBreak};
pub use error::{FplError, Result};
pub use standings::{League, Standings, StandingsRanker, StandingsRow};

pub const LEAGUE_ID_ENV_VAR: &str = "FPL_LEAGUE_ID";
pub const BASE_URL_ENV_VAR: &str = "FPL_API_BASE_URL";
