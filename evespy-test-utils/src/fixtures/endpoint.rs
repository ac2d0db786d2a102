//! Mockito endpoint helpers for the ESI and zKillboard paths the
//! aggregation core consumes.

use evespy::model::{
    esi::{CharacterPublicInfo, Killmail, NameRef, NamedId},
    zkill::{CharacterStats, KillHistoryEntry},
};
use mockito::{Matcher, Mock, ServerGuard};

/// Mock `POST /universe/ids/` resolving to the given characters bucket.
pub fn mock_universe_ids_endpoint(
    server: &mut ServerGuard,
    characters: Vec<NamedId>,
    expected_requests: usize,
) -> Mock {
    server
        .mock("POST", "/universe/ids/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({ "characters": characters }).to_string())
        .expect(expected_requests)
        .create()
}

/// Mock `POST /universe/ids/` answering with an empty body (no bucket
/// resolved at all).
pub fn mock_universe_ids_empty_endpoint(
    server: &mut ServerGuard,
    expected_requests: usize,
) -> Mock {
    server
        .mock("POST", "/universe/ids/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .expect(expected_requests)
        .create()
}

/// Mock `POST /universe/names/` for one exact request body.
///
/// The repository deduplicates and sorts IDs before the call, so
/// `requested_ids` must be sorted ascending and unique. Matching on the
/// body lets one test mock several name lookups on the same path.
pub fn mock_universe_names_endpoint(
    server: &mut ServerGuard,
    requested_ids: Vec<i64>,
    names: Vec<NameRef>,
    expected_requests: usize,
) -> Mock {
    server
        .mock("POST", "/universe/names/")
        .match_body(Matcher::Json(serde_json::json!(requested_ids)))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&names).unwrap())
        .expect(expected_requests)
        .create()
}

/// Mock `GET /characters/{id}/`.
pub fn mock_character_endpoint(
    server: &mut ServerGuard,
    character_id: i64,
    character: CharacterPublicInfo,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", format!("/characters/{}/", character_id).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&character).unwrap())
        .expect(expected_requests)
        .create()
}

/// Mock `GET /killmails/{id}/{hash}/`.
pub fn mock_killmail_endpoint(
    server: &mut ServerGuard,
    killmail_id: i64,
    hash: &str,
    killmail: Killmail,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", format!("/killmails/{}/{}/", killmail_id, hash).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&killmail).unwrap())
        .expect(expected_requests)
        .create()
}

/// Mock `GET /api/characterID/{id}/` (kill history, most-recent-first).
pub fn mock_history_endpoint(
    server: &mut ServerGuard,
    character_id: i64,
    entries: Vec<KillHistoryEntry>,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", format!("/api/characterID/{}/", character_id).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&entries).unwrap())
        .expect(expected_requests)
        .create()
}

/// Mock `GET /api/stats/characterID/{id}/`.
pub fn mock_stats_endpoint(
    server: &mut ServerGuard,
    character_id: i64,
    stats: CharacterStats,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", format!("/api/stats/characterID/{}/", character_id).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&stats).unwrap())
        .expect(expected_requests)
        .create()
}

/// Mock any path answering with a bare error status.
pub fn mock_error_endpoint(
    server: &mut ServerGuard,
    method: &str,
    path: String,
    status: usize,
    expected_requests: usize,
) -> Mock {
    server
        .mock(method, path.as_str())
        .with_status(status)
        .expect(expected_requests)
        .create()
}
