//! Store lifecycle harness.
//!
//! The store is the single owner of the published dataset. It starts
//! unloaded, accepts exactly what the loader hands over (including the
//! degraded-load marker), and answers searches only once loaded.

mod common;

use common::*;
use osdex_core::loader::LoadError;
use osdex_core::store::{LoadState, Store};
use osdex_core::SearchError;
use pretty_assertions::assert_eq;

#[test]
fn fresh_store_is_unloaded_and_empty() {
    let store = Store::new();
    assert_eq!(store.status(), LoadState::Unloaded);
    assert!(store.orders().is_empty());
    assert!(store.load_error().is_none());
}

#[test]
fn search_before_publish_is_not_ready() {
    let store = Store::new();
    assert_eq!(store.search("junta"), Err(SearchError::NotReady));
}

#[test]
fn publish_makes_the_dataset_searchable() {
    let mut store = Store::new();
    store.publish(workshop_orders(), None);

    assert_eq!(store.status(), LoadState::Loaded);
    assert_eq!(store.orders().len(), 4);
    let results = store.search("bucha").unwrap();
    assert_codes(&results, &["F003"]);
}

#[test]
fn degraded_publish_keeps_the_error_visible() {
    let mut store = Store::new();
    store.publish(
        workshop_orders(),
        Some(LoadError::Transport("connection refused".to_string())),
    );

    assert_eq!(store.status(), LoadState::Loaded);
    assert!(store.load_error().is_some());
    // Degraded data is still fully searchable
    assert!(store.search("junta").is_ok());
}

#[test]
fn republish_replaces_the_dataset_wholesale() {
    let mut store = Store::new();
    store.publish(workshop_orders(), None);
    store.publish(vec![order("F099", "Radiador")], None);

    assert_eq!(store.orders().len(), 1);
    assert_eq!(store.search("bucha").unwrap().len(), 0);
    assert_codes(&store.search("radiador").unwrap(), &["F099"]);
}

#[test]
fn clean_republish_clears_an_old_degraded_marker() {
    let mut store = Store::new();
    store.publish(
        workshop_orders(),
        Some(LoadError::Transport("timeout".to_string())),
    );
    store.publish(workshop_orders(), None);
    assert!(store.load_error().is_none());
}
