//! Tests for EsiRepository::get_character.

use evespy::error::RemoteError;
use evespy_test_utils::prelude::*;

/// The public profile decodes standing, affiliation IDs and birthday.
#[tokio::test]
async fn fetches_public_profile() -> Result<(), TestError> {
    let character_id = 95_000_001;
    let mut test = test_repositories().await;
    endpoint::mock_character_endpoint(
        &mut test.server,
        character_id,
        factory::mock_character(98_000_001, Some(99_000_001)),
        1,
    );

    let profile = test.esi.get_character(character_id).await?;

    assert_eq!(profile.corporation_id, 98_000_001);
    assert_eq!(profile.alliance_id, Some(99_000_001));
    assert!(profile.security_status.is_some());
    assert_eq!(profile.birthday, factory::timestamp("2018-12-20T16:11:54Z"));

    Ok(())
}

/// A missing character surfaces as a status failure.
#[tokio::test]
async fn reports_missing_character() {
    let character_id = 95_000_002;
    let mut test = test_repositories().await;
    endpoint::mock_error_endpoint(
        &mut test.server,
        "GET",
        format!("/characters/{}/", character_id),
        404,
        1,
    );

    let result = test.esi.get_character(character_id).await;

    assert!(matches!(result, Err(RemoteError::Status { .. })));
}
