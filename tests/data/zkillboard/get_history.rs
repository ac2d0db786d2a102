//! Tests for ZkillboardRepository::get_history.

use evespy_test_utils::prelude::*;

/// History entries decode in response order (most-recent-first).
#[tokio::test]
async fn fetches_history_in_order() -> Result<(), TestError> {
    let character_id = 95_000_001;
    let mut test = test_repositories().await;
    endpoint::mock_history_endpoint(
        &mut test.server,
        character_id,
        vec![
            factory::mock_history_entry(222, "newest"),
            factory::mock_history_entry(111, "older"),
        ],
        1,
    );

    let history = test.zkillboard.get_history(character_id).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].killmail_id, 222);
    assert_eq!(history[0].zkb.hash, "newest");
    assert_eq!(history[1].killmail_id, 111);

    Ok(())
}

/// A character without kills yields an empty history, not an error.
#[tokio::test]
async fn empty_history_is_not_an_error() -> Result<(), TestError> {
    let character_id = 95_000_002;
    let mut test = test_repositories().await;
    endpoint::mock_history_endpoint(&mut test.server, character_id, vec![], 1);

    let history = test.zkillboard.get_history(character_id).await?;

    assert!(history.is_empty());

    Ok(())
}
