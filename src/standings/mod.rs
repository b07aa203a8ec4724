//! League standings: the typed snapshot, the ranker and season history.
//!
//! - `model`: immutable league snapshot and per-gameweek records
//! - `ranker`: ranking, rank movement and lowest scorers for one gameweek
//! - `history`: season rank tables and per-team chart series

pub mod history;
pub mod model;
pub mod ranker;

pub use history::{season_rank_table, team_rank_history, RankPoint, TeamRankHistory};
pub use model::{
    GameweekScore, League, RankMap, StandingsSnapshot, Team, TeamGameweekRecord, TeamHistory,
    UNKNOWN_MANAGER, UNKNOWN_TEAM,
};
pub use ranker::{
    compute_movement, movement_or_zero, Standings, StandingsRanker, StandingsRow,
};
