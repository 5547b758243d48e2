//! List-query controller integration tests.
//!
//! Drives the controller against the scripted mock backend through the flows
//! every list screen exercises: first load, filter search, table changes,
//! failed refreshes, and overlapping in-flight requests.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{MockBackend, Scripted, TestRow};
use memberdesk::{
    Config, CoreError, FetchOutcome, FilterCriteria, FilterValue, HttpBackend,
    ListQueryController, Members, PaginationInit, SortOrder, SorterDirection,
};

fn controller(backend: MockBackend) -> ListQueryController<TestRow, MockBackend> {
    ListQueryController::new(
        backend,
        "api/staff/member",
        PaginationInit::new("code", SortOrder::Asc),
    )
}

#[tokio::test]
async fn test_first_fetch_reconciles_server_metadata() {
    let backend = MockBackend::new([Scripted::page(8, 1, 42)]);
    let controller = controller(backend.clone());

    assert!(controller.state().fetch_pending);

    let outcome = controller.fetch(&FilterCriteria::new()).await.unwrap();
    match outcome {
        FetchOutcome::Rows(rows) => assert_eq!(rows.len(), 8),
        FetchOutcome::Stale => panic!("first fetch must not be stale"),
    }

    let state = controller.state();
    assert_eq!(state.page, 1);
    assert_eq!(state.total, 42);
    assert!(!state.fetch_pending);
    assert!(!state.is_fetching);

    assert_eq!(
        backend.calls(),
        vec!["api/staff/member?page=1&pageSize=10&sortField=code&sortOrder=asc&total=0"]
    );
}

#[tokio::test]
async fn test_filter_criteria_flow_onto_the_wire() {
    let backend = MockBackend::new([Scripted::page(1, 1, 1)]);
    let controller = controller(backend.clone());

    let mut criteria = FilterCriteria::new();
    criteria.insert("nationality".to_string(), FilterValue::from("Malaysia"));
    criteria.insert("active".to_string(), FilterValue::from(true));
    criteria.insert("phoneNumber".to_string(), FilterValue::from(""));

    controller.request_search();
    controller.fetch(&criteria).await.unwrap();

    let call = &backend.calls()[0];
    assert!(call.contains("active=true"));
    assert!(call.contains("nationality=Malaysia"));
    assert!(!call.contains("phoneNumber="));
}

#[tokio::test]
async fn test_error_preserves_last_good_page_and_total() {
    let backend = MockBackend::new([
        Scripted::page(10, 2, 42),
        Scripted::fail("database unavailable", 503),
    ]);
    let controller = controller(backend.clone());

    controller.request_table_change(2, 10, None, SorterDirection::None);
    controller.fetch(&FilterCriteria::new()).await.unwrap();

    controller.request_search();
    let err = controller.fetch(&FilterCriteria::new()).await.unwrap_err();
    match &err {
        CoreError::Server { message, status } => {
            assert_eq!(message, "database unavailable");
            assert_eq!(*status, 503);
        }
        other => panic!("expected server error, got {:?}", other),
    }
    assert_eq!(err.user_message(), "database unavailable");

    // The failed refresh must not blank out the last good page.
    let state = controller.state();
    assert_eq!(state.page, 2);
    assert_eq!(state.total, 42);
    assert!(!state.fetch_pending);
}

#[tokio::test]
async fn test_reset_requests_refresh_without_repaging() {
    let backend = MockBackend::new([Scripted::page(10, 3, 42)]);
    let controller = controller(backend.clone());

    controller.request_table_change(3, 10, None, SorterDirection::None);
    controller.fetch(&FilterCriteria::new()).await.unwrap();

    controller.request_reset();
    let state = controller.state();
    assert_eq!(state.page, 3);
    assert!(state.fetch_pending);
}

#[tokio::test]
async fn test_sort_tie_break_through_table_changes() {
    let backend = MockBackend::new([]);
    let controller = controller(backend);

    controller.request_table_change(2, 10, Some("name"), SorterDirection::Ascend);
    let state = controller.state();
    assert_eq!(state.sort_field, "name");
    assert_eq!(state.sort_order, SortOrder::Asc);

    controller.request_table_change(2, 10, Some("name"), SorterDirection::Descend);
    assert_eq!(controller.state().sort_order, SortOrder::Desc);

    // Clearing the sort indicator keeps the previous order.
    controller.request_table_change(2, 10, None, SorterDirection::None);
    let state = controller.state();
    assert_eq!(state.sort_field, "name");
    assert_eq!(state.sort_order, SortOrder::Desc);
}

#[tokio::test]
async fn test_repeated_intent_is_last_writer_wins() {
    let backend = MockBackend::new([]);
    let controller = controller(backend);

    controller.request_table_change(4, 25, Some("email"), SorterDirection::Descend);
    let first = controller.state();
    controller.request_table_change(4, 25, Some("email"), SorterDirection::Descend);
    assert_eq!(controller.state(), first);
}

#[tokio::test]
async fn test_superseded_response_is_discarded() {
    let backend = MockBackend::new([
        // First request answers slowly with page 1; second answers fast
        // with page 2. The slow one must not overwrite the fast one.
        Scripted::slow_page(5, 1, 10, 80),
        Scripted::page(3, 2, 42),
    ]);
    let controller = controller(backend.clone());

    let slow_criteria = FilterCriteria::new();
    let fast_criteria = FilterCriteria::new();
    let slow = controller.fetch(&slow_criteria);
    let fast = controller.fetch(&fast_criteria);
    let (slow_outcome, fast_outcome) = tokio::join!(slow, fast);

    match fast_outcome.unwrap() {
        FetchOutcome::Rows(rows) => assert_eq!(rows.len(), 3),
        FetchOutcome::Stale => panic!("latest request must win"),
    }
    assert!(matches!(slow_outcome.unwrap(), FetchOutcome::Stale));

    let state = controller.state();
    assert_eq!(state.page, 2);
    assert_eq!(state.total, 42);
    assert_eq!(backend.call_count(), 2);
}

#[tokio::test]
async fn test_is_fetching_tracks_request_lifecycle() {
    let backend = MockBackend::new([Scripted::slow_page(1, 1, 1, 60)]);
    let controller = Arc::new(controller(backend));

    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.fetch(&FilterCriteria::new()).await })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(controller.state().is_fetching);

    task.await.unwrap().unwrap();
    assert!(!controller.state().is_fetching);
}

#[tokio::test]
async fn test_resource_factory_uses_catalog_defaults() {
    let backend = HttpBackend::new(&Config::default()).unwrap();
    let controller = ListQueryController::for_resource::<Members>(backend);

    assert_eq!(controller.resource(), "api/staff/member");
    let state = controller.state();
    assert_eq!(state.sort_field, "code");
    assert_eq!(state.sort_order, SortOrder::Asc);
    assert_eq!(state.page_size, 10);
    assert!(state.fetch_pending);
}
