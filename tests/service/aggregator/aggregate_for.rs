//! Tests for PlayerInformationAggregator::aggregate_for: the fast-path
//! contract and name resolution behavior.

use evespy_test_utils::prelude::*;

/// The call returns usable identity records after the single batched
/// resolution, with no other endpoint mocked at all: enrichment must not
/// be awaited before returning, and its failures must stay invisible.
#[tokio::test]
async fn returns_identity_records_without_waiting_on_enrichment() -> Result<(), TestError> {
    let mut test = test_setup().await;
    endpoint::mock_universe_ids_endpoint(
        &mut test.server,
        vec![factory::mock_named_id(100, "Alice")],
        1,
    );

    let aggregation = test.aggregator.aggregate_for(vec!["Alice"]).await?;

    let records = aggregation.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].character_id(), 100);
    assert_eq!(records[0].character_name(), "Alice");
    assert!(records[0].portrait_url().contains("/characters/100/portrait"));

    // Every enrichment chain hit an unmocked endpoint; all field groups
    // must simply stay unset.
    let records = aggregation.join().await;
    let snapshot = records[0].snapshot();
    assert!(snapshot.security_standing.is_none());
    assert!(snapshot.corporation_name.is_none());
    assert!(snapshot.details.danger_ratio.is_none());
    assert!(snapshot.details.latest_activity.is_none());

    Ok(())
}

/// Unresolvable names are absent from the output with no error raised.
#[tokio::test]
async fn drops_unresolvable_names() -> Result<(), TestError> {
    let mut test = test_setup().await;
    endpoint::mock_universe_ids_endpoint(
        &mut test.server,
        vec![factory::mock_named_id(100, "Alice")],
        1,
    );

    let aggregation = test
        .aggregator
        .aggregate_for(vec!["Alice", "Unknown123"])
        .await?;

    assert_eq!(aggregation.records().len(), 1);
    assert_eq!(aggregation.records()[0].character_name(), "Alice");

    Ok(())
}

/// Input that resolves to nothing yields an empty record set, no error.
#[tokio::test]
async fn unknown_only_input_yields_empty_set() -> Result<(), TestError> {
    let mut test = test_setup().await;
    endpoint::mock_universe_ids_empty_endpoint(&mut test.server, 1);

    let aggregation = test.aggregator.aggregate_for(vec!["Unknown123"]).await?;

    assert!(aggregation.records().is_empty());
    assert!(aggregation.join().await.is_empty());

    Ok(())
}

/// Empty input returns empty without any remote call.
#[tokio::test]
async fn empty_input_makes_no_request() -> Result<(), TestError> {
    let mut test = test_setup().await;
    let mock = endpoint::mock_universe_ids_endpoint(&mut test.server, vec![], 0);

    let aggregation = test
        .aggregator
        .aggregate_for(Vec::<String>::new())
        .await?;

    assert!(aggregation.records().is_empty());
    mock.assert_async().await;

    Ok(())
}

/// Total failure of the batched resolution is the one error that reaches
/// the caller.
#[tokio::test]
async fn resolution_failure_propagates() {
    let mut test = test_setup().await;
    endpoint::mock_error_endpoint(&mut test.server, "POST", "/universe/ids/".to_string(), 500, 1);

    let result = test.aggregator.aggregate_for(vec!["Alice"]).await;

    assert!(result.is_err());
}
