//! Tests for EsiRepository::resolve_names.

use evespy_test_utils::prelude::*;

/// IDs resolve to categorized display names.
#[tokio::test]
async fn resolves_ids_to_names() -> Result<(), TestError> {
    let mut test = test_repositories().await;
    let mock = endpoint::mock_universe_names_endpoint(
        &mut test.server,
        vec![98_000_001, 99_000_001],
        vec![
            factory::mock_name_ref("corporation", 98_000_001, "The Order of Autumn"),
            factory::mock_name_ref("alliance", 99_000_001, "Autumn."),
        ],
        1,
    );

    let names = test.esi.resolve_names(&[98_000_001, 99_000_001]).await?;

    assert_eq!(names.len(), 2);
    assert_eq!(names[0].name, "The Order of Autumn");
    assert_eq!(names[1].category, "alliance");
    mock.assert_async().await;

    Ok(())
}

/// Duplicate IDs collapse into one sorted request body (ESI rejects
/// duplicates).
#[tokio::test]
async fn deduplicates_and_sorts_ids() -> Result<(), TestError> {
    let mut test = test_repositories().await;
    let mock = endpoint::mock_universe_names_endpoint(
        &mut test.server,
        vec![587, 30_000_142],
        vec![
            factory::mock_name_ref("inventory_type", 587, "Rifter"),
            factory::mock_name_ref("solar_system", 30_000_142, "Jita"),
        ],
        1,
    );

    let names = test
        .esi
        .resolve_names(&[30_000_142, 587, 30_000_142, 587])
        .await?;

    assert_eq!(names.len(), 2);
    mock.assert_async().await;

    Ok(())
}

/// Empty input short-circuits without touching the network.
#[tokio::test]
async fn empty_input_makes_no_request() -> Result<(), TestError> {
    let mut test = test_repositories().await;
    let mock = endpoint::mock_universe_names_endpoint(&mut test.server, vec![], vec![], 0);

    let names = test.esi.resolve_names(&[]).await?;

    assert!(names.is_empty());
    mock.assert_async().await;

    Ok(())
}
