//! Unit tests for HTTP client functionality

use super::*;
use crate::error::FplError;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn entry_history(weeks: &[(u16, i32, i32)]) -> serde_json::Value {
    let current: Vec<serde_json::Value> = weeks
        .iter()
        .map(|&(event, points, total)| json!({ "event": event, "points": points, "total_points": total }))
        .collect();
    json!({ "current": current, "past": [], "chips": [] })
}

#[cfg(test)]
mod official_api_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_classic_standings_merges_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leagues-classic/314/standings/"))
            .and(query_param("page_standings", "1"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "league": { "id": 314, "name": "Mini League" },
                "standings": {
                    "has_next": true,
                    "page": 1,
                    "results": [ { "entry": 1, "entry_name": "One", "player_name": "P1" } ]
                }
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/leagues-classic/314/standings/"))
            .and(query_param("page_standings", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "league": { "id": 314, "name": "Mini League" },
                "standings": {
                    "has_next": false,
                    "page": 2,
                    "results": [ { "entry": 2, "entry_name": "Two", "player_name": "P2" } ]
                }
            })))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let payload = client.get_classic_standings(LeagueId::new(314)).await.unwrap();

        let entries: Vec<u32> = payload.standings.results.iter().map(|e| e.entry.as_u32()).collect();
        assert_eq!(entries, vec![1, 2]);
        assert!(!payload.standings.has_next);
    }

    #[tokio::test]
    async fn test_entry_repeated_across_pages_is_kept_once() {
        let mock_server = MockServer::start().await;

        for (page, has_next, entries) in [("1", true, [1, 2]), ("2", false, [2, 3])] {
            let results: Vec<serde_json::Value> = entries
                .iter()
                .map(|e| json!({ "entry": e, "entry_name": format!("Team {}", e) }))
                .collect();
            Mock::given(method("GET"))
                .and(path("/leagues-classic/314/standings/"))
                .and(query_param("page_standings", page))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "standings": { "has_next": has_next, "page": page.parse::<u32>().unwrap(), "results": results }
                })))
                .mount(&mock_server)
                .await;
        }
        for entry in 1..=3 {
            Mock::given(method("GET"))
                .and(path(format!("/entry/{}/history/", entry)))
                .respond_with(ResponseTemplate::new(200).set_body_json(entry_history(&[(1, entry * 10, entry * 10)])))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = FplClient::new(mock_server.uri()).unwrap();
        let league = client
            .fetch_league(DataSource::Fpl, LeagueId::new(314))
            .await
            .unwrap();

        let ids: Vec<u32> = league.teams.iter().map(|t| t.team.id.as_u32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(league.snapshot(Gameweek::new(1)).len(), 3);
    }

    #[tokio::test]
    async fn test_many_entry_histories_stay_in_order() {
        let mock_server = MockServer::start().await;
        let count = MAX_CONCURRENT_HISTORY_REQUESTS as u32 * 3 + 1;

        for entry in 1..=count {
            let total = entry as i32;
            Mock::given(method("GET"))
                .and(path(format!("/entry/{}/history/", entry)))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(entry_history(&[(1, total, total)]))
                        .set_delay(std::time::Duration::from_millis(u64::from(count - entry))),
                )
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = FplClient::new(mock_server.uri()).unwrap();
        let teams: Vec<TeamId> = (1..=count).map(TeamId::new).collect();
        let histories = client.get_entry_histories(&teams).await.unwrap();

        assert_eq!(histories.len(), count as usize);
        for (i, (team_id, history)) in histories.iter().enumerate() {
            assert_eq!(team_id.as_u32(), i as u32 + 1);
            assert_eq!(history.current[0].total_points, i as i32 + 1);
        }
    }

    #[tokio::test]
    async fn test_fetch_league_from_official_api() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leagues-classic/314/standings/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "league": { "id": 314, "name": "Mini League" },
                "standings": {
                    "has_next": false,
                    "page": 1,
                    "results": [
                        { "entry": 11, "entry_name": "Eleven", "player_name": "Ann" },
                        { "entry": 22, "entry_name": "Twenty Two", "player_name": "Bob" },
                        { "entry": 33, "entry_name": "Thirty Three", "player_name": "Cat" }
                    ]
                }
            })))
            .mount(&mock_server)
            .await;

        for (entry, weeks) in [
            (11, vec![(1, 50, 50), (2, 60, 110)]),
            (22, vec![(1, 70, 70), (2, 30, 100)]),
            (33, vec![(1, 40, 40), (2, 90, 130)]),
        ] {
            Mock::given(method("GET"))
                .and(path(format!("/entry/{}/history/", entry)))
                .respond_with(ResponseTemplate::new(200).set_body_json(entry_history(&weeks)))
                .mount(&mock_server)
                .await;
        }

        let client = FplClient::new(mock_server.uri()).unwrap();
        let league = client
            .fetch_league(DataSource::Fpl, LeagueId::new(314))
            .await
            .unwrap();

        assert_eq!(league.name, "Mini League");
        assert_eq!(league.id, Some(LeagueId::new(314)));
        // league order survives concurrent fetching
        let ids: Vec<u32> = league.teams.iter().map(|t| t.team.id.as_u32()).collect();
        assert_eq!(ids, vec![11, 22, 33]);
        assert_eq!(league.latest_gameweek(), Some(Gameweek::new(2)));
        assert_eq!(league.teams[2].gameweeks[1].total_points, 130);
    }

    #[tokio::test]
    async fn test_failed_entry_history_fails_the_fetch() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leagues-classic/9/standings/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "standings": { "results": [ { "entry": 1 }, { "entry": 2 } ] }
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/entry/1/history/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(entry_history(&[(1, 5, 5)])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/entry/2/history/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let result = client.fetch_league(DataSource::Fpl, LeagueId::new(9)).await;
        assert!(matches!(result, Err(FplError::Http(_))));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leagues-classic/404/standings/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let result = client.get_classic_standings(LeagueId::new(404)).await;
        match result {
            Err(FplError::Http(e)) => assert_eq!(e.status().map(|s| s.as_u16()), Some(404)),
            other => panic!("Expected Http error, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod dashboard_api_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_league_from_tracker_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/standings"))
            .and(query_param("leagueId", "77"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "league_name": "Dashboard League",
                "results": [
                    {
                        "TeamID": 1,
                        "PlayerName": "Ann",
                        "EntryName": "Alpha",
                        "History": [ { "Gameweek": 1, "Points": 40, "TotalPoints": 40 } ]
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let league = client
            .fetch_league(DataSource::Dashboard, LeagueId::new(77))
            .await
            .unwrap();
        assert_eq!(league.name, "Dashboard League");
        assert_eq!(league.teams.len(), 1);
        assert_eq!(league.id, Some(LeagueId::new(77)));
    }

    #[tokio::test]
    async fn test_fetch_league_from_classic_payload_and_rows() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/standings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "standings": {
                    "results": [
                        { "entry": 1, "entry_name": "Alpha", "player_name": "Ann" },
                        { "entry": 2, "entry_name": "Beta", "player_name": "Ben" }
                    ]
                }
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/latest_gameweek"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "latest_gameweek": 2 })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/history"))
            .and(query_param("gameweek", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "team_id": 1, "rank": 2, "points": 30, "total_points": 30 },
                { "team_id": 2, "rank": 1, "points": 45, "total_points": 45 }
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/history"))
            .and(query_param("gameweek", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "team_id": 1, "rank": 1, "points": 60, "total_points": 90 },
                { "team_id": 2, "rank": 2, "points": 20, "total_points": 65 }
            ])))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let league = client
            .fetch_league(DataSource::Dashboard, LeagueId::new(5))
            .await
            .unwrap();

        assert_eq!(league.name, "League 5");
        assert_eq!(league.latest_gameweek(), Some(Gameweek::new(2)));
        assert_eq!(league.teams[0].gameweeks.len(), 2);
        assert_eq!(league.teams[1].gameweeks[1].total_points, 65);
    }

    #[tokio::test]
    async fn test_team_missing_from_rows_uses_team_history() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/standings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "standings": {
                    "results": [
                        { "entry": 1, "entry_name": "Alpha", "player_name": "Ann" },
                        { "entry": 2, "entry_name": "Beta", "player_name": "Ben" }
                    ]
                }
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/latest_gameweek"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "latest_gameweek": 1 })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/history"))
            .and(query_param("gameweek", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "team_id": 1, "rank": 1, "points": 30, "total_points": 30 }
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/team_history"))
            .and(query_param("team_id", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(entry_history(&[(1, 45, 45)])))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/team_history"))
            .and(query_param("team_id", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(entry_history(&[(1, 0, 0)])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let league = client
            .fetch_league(DataSource::Dashboard, LeagueId::new(5))
            .await
            .unwrap();

        assert_eq!(league.teams[0].gameweeks[0].total_points, 30);
        assert_eq!(league.teams[1].gameweeks[0].total_points, 45);
        assert_eq!(league.snapshot(Gameweek::new(1)).len(), 2);
    }

    #[tokio::test]
    async fn test_get_team_history_and_latest_gameweek() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/team_history"))
            .and(query_param("team_id", "8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(entry_history(&[(1, 12, 12), (2, 8, 20)])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/latest_gameweek"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "latest_gameweek": 7 })))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(format!("{}/", mock_server.uri())).unwrap();
        let history = client.get_team_history(TeamId::new(8)).await.unwrap();
        assert_eq!(history.current.len(), 2);
        assert_eq!(client.get_latest_gameweek().await.unwrap(), Gameweek::new(7));
    }

    #[tokio::test]
    async fn test_unrecognized_standings_payload() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "teams": [] })))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let result = client.get_dashboard_standings(None).await;
        assert!(matches!(result, Err(FplError::UnsupportedSchema)));
    }
}

#[test]
fn test_base_url_constants() {
    assert_eq!(FPL_BASE_URL, "https://fantasy.premierleague.com/api");
    assert_eq!(DASHBOARD_BASE_URL, "http://localhost:8080");
}

#[test]
fn test_client_strips_trailing_slash() {
    let client = FplClient::new("http://localhost:9999/api/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:9999/api");
}
