//! Tests for EsiRepository::get_killmail.

use evespy::error::RemoteError;
use evespy_test_utils::prelude::*;

/// Killmail detail decodes victim, attackers and the final-blow flag.
#[tokio::test]
async fn fetches_killmail_detail() -> Result<(), TestError> {
    let mut test = test_repositories().await;
    endpoint::mock_killmail_endpoint(
        &mut test.server,
        111,
        "abc123",
        factory::mock_killmail(2_001, 587, 3_001, 17_738, 2_456, 30_000_142),
        1,
    );

    let killmail = test.esi.get_killmail(111, "abc123").await?;

    assert_eq!(killmail.solar_system_id, 30_000_142);
    assert_eq!(killmail.victim.character_id, Some(2_001));
    let final_blow: Vec<_> = killmail
        .attackers
        .iter()
        .filter(|attacker| attacker.final_blow)
        .collect();
    assert_eq!(final_blow.len(), 1);
    assert_eq!(final_blow[0].character_id, Some(3_001));

    Ok(())
}

/// An invalid or expired hash surfaces as a status failure.
#[tokio::test]
async fn reports_invalid_hash() {
    let mut test = test_repositories().await;
    endpoint::mock_error_endpoint(
        &mut test.server,
        "GET",
        "/killmails/111/badhash/".to_string(),
        422,
        1,
    );

    let result = test.esi.get_killmail(111, "badhash").await;

    assert!(matches!(result, Err(RemoteError::Status { .. })));
}
