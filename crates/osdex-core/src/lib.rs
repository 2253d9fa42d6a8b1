//! osdex-core — service-order lookup core.
//!
//! This crate holds everything below the presentation layer: the record
//! types, the loader that fetches and validates the JSON resource, the
//! store that owns the published dataset, and the matcher that filters it.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Store ──► Search ──► UI
//! ```
//!
//! The loader runs exactly once per process and is the only asynchronous
//! step. Every search is a synchronous pass over the dataset the store
//! published; the UI reads from the store, never from the loader directly.

pub mod clipboard;
pub mod config;
pub mod loader;
pub mod normalizer;
pub mod search;
pub mod store;
pub mod synonyms;
pub mod types;

pub use loader::LoadError;
pub use search::SearchError;
pub use store::{LoadState, Store};
pub use types::{Field, ServiceOrder};
