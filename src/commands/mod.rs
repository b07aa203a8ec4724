//! Command implementations for the FPL league tracker

pub mod common;
pub mod latest_gameweek;
pub mod league_data;
pub mod output;
pub mod standings;
pub mod team_history;


use crate::{error::FplError, LeagueId, Result, LEAGUE_ID_ENV_VAR};

/// Use the explicit league ID, or fall back to `FPL_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    let league_id = match league_id {
        Some(id) => id,
        None => {
            let raw = std::env::var(LEAGUE_ID_ENV_VAR).map_err(|_| FplError::MissingLeagueId {
                env_var: LEAGUE_ID_ENV_VAR.to_string(),
            })?;
            raw.parse::<LeagueId>()?
        }
    };

    if league_id.as_u32() == 0 {
        return Err(FplError::ZeroLeagueId);
    }
    Ok(league_id)
}
