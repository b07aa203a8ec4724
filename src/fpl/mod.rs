//! Fantasy Premier League data sources
//!
//! - `types`: serde models of upstream payloads
//! - `ingest`: schema detection and normalization into a `League`
//! - `http`: the API client
//! - `load`: storage-first league loading

pub mod http;
pub mod ingest;
pub mod load;
pub mod types;

pub use http::FplClient;
pub use ingest::{decode_standings, detect_schema, SchemaVersion, StandingsPayload};
pub use load::{load_or_fetch_league, load_or_fetch_league_within, LoadStatus, STORED_LEAGUE_MAX_AGE};
