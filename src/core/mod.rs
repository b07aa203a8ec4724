//! Core utilities for the FPL league tracker
//!
//! This module consolidates helpers used across the application:
//! - `cache`: where local data is stored
//! - `http`: request headers and base URL resolution

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{cache_root, league_database_path};
pub use http::{default_header_map, resolve_base_url};
