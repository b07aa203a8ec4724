//! HTTP utilities shared by every data source

use crate::{cli::types::DataSource, Result, BASE_URL_ENV_VAR};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

/// Headers sent with every request.
///
/// The official API rejects requests without a browser-like user agent.
pub fn default_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let agent = format!("fpl-tracker/{}", env!("CARGO_PKG_VERSION"));
    h.insert(USER_AGENT, HeaderValue::from_str(&agent)?);
    Ok(h)
}

/// Pick the base URL: explicit flag, then `FPL_API_BASE_URL`, then the source default.
///
/// Trailing slashes are stripped so paths can be joined with `/`.
pub fn resolve_base_url(source: DataSource, override_url: Option<&str>) -> String {
    let from_env = std::env::var(BASE_URL_ENV_VAR).ok();
    let url = override_url
        .map(str::to_string)
        .or(from_env.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| source.default_base_url().to_string());
    url.trim().trim_end_matches('/').to_string()
}
