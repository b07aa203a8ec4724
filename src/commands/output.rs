//! Text and JSON rendering of standings and team histories.

use serde_json::json;

use crate::{
    standings::{Standings, TeamRankHistory},
    Result,
};

/// Shown in place of the table when league data could not be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load standings";

/// Shown when a league has no played gameweeks.
pub const NO_STANDINGS_MESSAGE: &str = "No gameweeks played yet";

const CLOWN: &str = "🤡";

/// `▲ n` for a climb, `▼ n` for a drop, `-` otherwise.
pub fn movement_indicator(movement: i64) -> String {
    match movement {
        m if m > 0 => format!("▲ {}", m),
        m if m < 0 => format!("▼ {}", m.unsigned_abs()),
        _ => "-".to_string(),
    }
}

pub fn render_standings_table(standings: &Standings) -> String {
    let name_width = standings
        .rows
        .iter()
        .flat_map(|r| [r.team_name.chars().count(), r.manager_name.chars().count()])
        .max()
        .unwrap_or(0)
        .max("Team / Manager".len());

    let mut out = format!(
        "{} - Gameweek {} of {}\n",
        standings.league_name, standings.gameweek, standings.latest_gameweek
    );
    out.push_str(&format!(
        "{:<7} {:<width$} {:>6} {:>6}  {}\n",
        "Rank",
        "Team / Manager",
        "GW",
        "Total",
        "Move",
        width = name_width
    ));

    for row in &standings.rows {
        let rank = if row.lowest_scorer {
            format!("{} {}", row.rank, CLOWN)
        } else {
            row.rank.to_string()
        };
        out.push_str(&format!(
            "{:<7} {:<width$} {:>6} {:>6}  {}\n",
            rank,
            row.team_name,
            row.points,
            row.total_points,
            movement_indicator(row.movement),
            width = name_width
        ));
        out.push_str(&format!("{:<7} {:<width$}\n", "", row.manager_name, width = name_width));
    }

    let clowns: Vec<&str> = standings
        .lowest_scorers()
        .map(|r| r.team_name.as_str())
        .collect();
    if !clowns.is_empty() {
        out.push_str(&format!("\n{} Clown of the Week: {}\n", CLOWN, clowns.join(", ")));
    }
    out
}

/// Single-row table standing in for standings that failed to load.
pub fn render_placeholder_table(message: &str) -> String {
    format!(
        "{:<7} {:<20} {:>6} {:>6}  {}\n{}\n",
        "Rank", "Team / Manager", "GW", "Total", "Move", message
    )
}

pub fn standings_json(standings: &Standings) -> Result<String> {
    Ok(serde_json::to_string_pretty(standings)?)
}

/// Error state in the same envelope consumers expect rows in.
pub fn placeholder_json(message: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({
        "error": message,
        "rows": [],
    }))?)
}

pub fn render_team_history(history: &TeamRankHistory) -> String {
    let mut out = format!(
        "{} ({}) - {}\n",
        history.team.team_name, history.team.manager_name, history.league_name
    );
    for p in &history.points {
        out.push_str(&format!(
            "GW {:<3} rank {:>3}/{:<3} points {:>4}  total {:>5}\n",
            p.gameweek.as_u16(),
            p.rank,
            history.total_teams,
            p.points,
            p.total_points
        ));
    }
    if let (Some(best), Some(worst)) = (history.best_rank(), history.worst_rank()) {
        out.push_str(&format!("Best rank {}, worst rank {}\n", best, worst));
    }
    out
}

pub fn team_history_json(history: &TeamRankHistory) -> Result<String> {
    Ok(serde_json::to_string_pretty(history)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{Gameweek, TeamId};
    use crate::standings::{RankPoint, StandingsRow, Team};

    fn row(rank: u32, name: &str, movement: i64, lowest: bool) -> StandingsRow {
        StandingsRow {
            rank,
            previous_rank: None,
            movement,
            team_id: TeamId::new(rank),
            team_name: name.to_string(),
            manager_name: format!("{} Boss", name),
            points: 50,
            total_points: 100 - rank as i32,
            lowest_scorer: lowest,
        }
    }

    fn standings() -> Standings {
        Standings {
            league_name: "Render League".to_string(),
            gameweek: Gameweek::new(4),
            latest_gameweek: Gameweek::new(6),
            rows: vec![row(1, "Alpha", 2, false), row(2, "Beta", -1, true), row(3, "Gamma", 0, false)],
        }
    }

    #[test]
    fn test_movement_indicator() {
        assert_eq!(movement_indicator(2), "▲ 2");
        assert_eq!(movement_indicator(-3), "▼ 3");
        assert_eq!(movement_indicator(0), "-");
    }

    #[test]
    fn test_render_standings_table() {
        let table = render_standings_table(&standings());
        assert!(table.starts_with("Render League - Gameweek 4 of 6\n"));
        assert!(table.contains("▲ 2"));
        assert!(table.contains("▼ 1"));
        assert!(table.contains("2 🤡"));
        assert!(table.contains("Gamma Boss"));
        assert!(table.contains("Clown of the Week: Beta"));
    }

    #[test]
    fn test_placeholders() {
        let table = render_placeholder_table(LOAD_FAILED_MESSAGE);
        assert!(table.contains("Failed to load standings"));

        let json: serde_json::Value =
            serde_json::from_str(&placeholder_json(LOAD_FAILED_MESSAGE).unwrap()).unwrap();
        assert_eq!(json["error"], "Failed to load standings");
        assert!(json["rows"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_standings_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&standings_json(&standings()).unwrap()).unwrap();
        assert_eq!(json["gameweek"], 4);
        assert_eq!(json["rows"][1]["lowest_scorer"], true);
        assert_eq!(json["rows"][0]["movement"], 2);
        assert_eq!(json["rows"][0]["team_id"], 1);
    }

    #[test]
    fn test_render_team_history() {
        let history = TeamRankHistory {
            league_name: "Render League".to_string(),
            team: Team {
                id: TeamId::new(1),
                team_name: "Alpha".to_string(),
                manager_name: "Ann".to_string(),
            },
            total_teams: 8,
            points: vec![
                RankPoint { gameweek: Gameweek::new(1), rank: 5, points: 40, total_points: 40 },
                RankPoint { gameweek: Gameweek::new(2), rank: 2, points: 80, total_points: 120 },
            ],
        };
        let text = render_team_history(&history);
        assert!(text.starts_with("Alpha (Ann) - Render League\n"));
        assert!(text.contains("rank   5/8"));
        assert!(text.contains("Best rank 2, worst rank 5"));

        let json: serde_json::Value =
            serde_json::from_str(&team_history_json(&history).unwrap()).unwrap();
        assert_eq!(json["total_teams"], 8);
        assert_eq!(json["points"][1]["rank"], 2);
    }
}
