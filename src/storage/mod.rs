//! Storage layer for the FPL league tracker
//!
//! A small SQLite store of fetched leagues, one copy per data source:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Save, load and list leagues

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::LeagueDatabase;
