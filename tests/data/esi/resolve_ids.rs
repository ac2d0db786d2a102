//! Tests for EsiRepository::resolve_ids.

use evespy::error::RemoteError;
use evespy_test_utils::prelude::*;

/// Known names resolve to (ID, name) pairs matching the response.
#[tokio::test]
async fn resolves_known_names() -> Result<(), TestError> {
    let mut test = test_repositories().await;
    let mock = endpoint::mock_universe_ids_endpoint(
        &mut test.server,
        vec![
            factory::mock_named_id(100, "Alice"),
            factory::mock_named_id(200, "Bob"),
        ],
        1,
    );

    let resolved = test
        .esi
        .resolve_ids(&["Alice".to_string(), "Bob".to_string()])
        .await?;

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0], factory::mock_named_id(100, "Alice"));
    assert_eq!(resolved[1], factory::mock_named_id(200, "Bob"));
    mock.assert_async().await;

    Ok(())
}

/// Names ESI does not know are simply absent from the result; no error.
#[tokio::test]
async fn drops_unresolvable_names() -> Result<(), TestError> {
    let mut test = test_repositories().await;
    endpoint::mock_universe_ids_endpoint(
        &mut test.server,
        vec![factory::mock_named_id(100, "Alice")],
        1,
    );

    let resolved = test
        .esi
        .resolve_ids(&["Alice".to_string(), "Unknown123".to_string()])
        .await?;

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, 100);

    Ok(())
}

/// A response with no characters bucket decodes to an empty result.
#[tokio::test]
async fn tolerates_missing_characters_bucket() -> Result<(), TestError> {
    let mut test = test_repositories().await;
    endpoint::mock_universe_ids_empty_endpoint(&mut test.server, 1);

    let resolved = test.esi.resolve_ids(&["Unknown123".to_string()]).await?;

    assert!(resolved.is_empty());

    Ok(())
}

/// Empty input short-circuits without touching the network.
#[tokio::test]
async fn empty_input_makes_no_request() -> Result<(), TestError> {
    let mut test = test_repositories().await;
    let mock = endpoint::mock_universe_ids_endpoint(&mut test.server, vec![], 0);

    let resolved = test.esi.resolve_ids(&[]).await?;

    assert!(resolved.is_empty());
    mock.assert_async().await;

    Ok(())
}

/// A server error surfaces as a status failure naming the service.
#[tokio::test]
async fn reports_server_error() {
    let mut test = test_repositories().await;
    endpoint::mock_error_endpoint(&mut test.server, "POST", "/universe/ids/".to_string(), 500, 1);

    let result = test.esi.resolve_ids(&["Alice".to_string()]).await;

    assert!(matches!(
        result,
        Err(RemoteError::Status { service: "ESI", .. })
    ));
}
