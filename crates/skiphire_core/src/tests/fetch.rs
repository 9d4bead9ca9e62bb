//! Tests for the fetch lifecycle

use super::skips;
use crate::error::{FETCH_FAILED_MESSAGE, FetchError, NOT_CONFIGURED_MESSAGE};
use crate::fetch::{CatalogFetch, FetchState, Resolution};

#[test]
fn test_starts_loading_before_first_request() {
    let fetch = CatalogFetch::new();
    assert!(fetch.is_loading());
    assert_eq!(fetch.generation(), 0);
    assert!(fetch.items().is_empty());
}

#[test]
fn test_success_preserves_order() {
    let mut fetch = CatalogFetch::new();
    let ticket = fetch.begin();
    let items = skips(5);

    assert_eq!(fetch.resolve(ticket, Ok(items.clone())), Resolution::Applied);
    assert_eq!(fetch.state(), &FetchState::Loaded { items: items.clone() });
    assert_eq!(fetch.items(), items.as_slice());
}

#[test]
fn test_empty_result_is_not_an_error() {
    let mut fetch = CatalogFetch::new();
    let ticket = fetch.begin();
    fetch.resolve(ticket, Ok(Vec::new()));

    assert_eq!(fetch.state(), &FetchState::Loaded { items: Vec::new() });
}

#[test]
fn test_network_failure_hides_detail() {
    let mut fetch = CatalogFetch::new();
    let ticket = fetch.begin();
    fetch.resolve(
        ticket,
        Err(FetchError::Network("connection refused (os error 111)".into())),
    );

    assert_eq!(
        fetch.state(),
        &FetchState::Failed {
            message: FETCH_FAILED_MESSAGE.to_string()
        }
    );
}

#[test]
fn test_missing_base_url_has_configuration_message() {
    let mut fetch = CatalogFetch::new();
    let ticket = fetch.begin();
    fetch.resolve(ticket, Err(FetchError::MissingBaseUrl));

    assert_eq!(
        fetch.state(),
        &FetchState::Failed {
            message: NOT_CONFIGURED_MESSAGE.to_string()
        }
    );
}

#[test]
fn test_retry_resets_to_loading() {
    let mut fetch = CatalogFetch::new();
    let first = fetch.begin();
    fetch.resolve(first, Err(FetchError::Status(503)));
    assert!(!fetch.is_loading());

    let second = fetch.begin();
    assert!(fetch.is_loading());
    assert_eq!(second.generation(), first.generation() + 1);
}

#[test]
fn test_stale_response_is_discarded() {
    let mut fetch = CatalogFetch::new();
    let first = fetch.begin();
    let second = fetch.begin();

    // The newer request finishes first
    assert_eq!(fetch.resolve(second, Ok(skips(3))), Resolution::Applied);

    // The superseded request then fails; the loaded list must survive
    assert_eq!(
        fetch.resolve(first, Err(FetchError::Network("timeout".into()))),
        Resolution::Stale
    );
    assert_eq!(fetch.items().len(), 3);
}

#[test]
fn test_stale_success_does_not_end_loading() {
    let mut fetch = CatalogFetch::new();
    let first = fetch.begin();
    let _second = fetch.begin();

    assert_eq!(fetch.resolve(first, Ok(skips(2))), Resolution::Stale);
    assert!(fetch.is_loading());
}
