//! Unit tests for `ebver check` with an injected store.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use ebver_cli::commands::check;
use ebver_cli::domain::BundlePresence;

use crate::mocks::{MemoryStore, StoreCall, config, quiet_app, service_error};

#[tokio::test]
async fn test_check_reports_absent_bundle() {
    let store = MemoryStore::empty();
    let presence = check::execute(&quiet_app(), &store, &config()).await.unwrap();
    assert_eq!(presence, BundlePresence::NotFound);
}

#[tokio::test]
async fn test_check_reports_present_bundle() {
    let store = MemoryStore::with_object(config().bundle_location(), b"bundle");
    let presence = check::execute(&quiet_app(), &store, &config()).await.unwrap();
    assert_eq!(presence, BundlePresence::Found);
}

#[tokio::test]
async fn test_check_never_writes() {
    let store = MemoryStore::empty();
    check::execute(&quiet_app(), &store, &config()).await.unwrap();
    assert_eq!(store.calls(), vec![StoreCall::Probe(config().bundle_location())]);
}

#[tokio::test]
async fn test_check_propagates_storage_errors() {
    let store = MemoryStore::failing_probe(service_error("HeadObject", "AccessDenied", "Forbidden"));
    let err = check::execute(&quiet_app(), &store, &config()).await.unwrap_err();
    assert!(format!("{err:#}").contains("AccessDenied"), "got: {err:#}");
}
