//! Type-safe wrappers and enums for FPL league data.

pub mod ids;
pub mod options;
pub mod time;

pub use ids::{LeagueId, TeamId};
pub use options::{DataSource, TieBreak};
pub use time::Gameweek;
