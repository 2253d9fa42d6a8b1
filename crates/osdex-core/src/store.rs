//! Store — the single source of truth for the loaded dataset.
//!
//! The store starts *unloaded* and flips to *loaded* exactly once, when the
//! loader publishes its outcome; there is no partially-loaded state and no
//! user-facing reload. The UI reads from the store, never from the loader
//! directly.

use crate::loader::LoadError;
use crate::search::{self, SearchError};
use crate::types::ServiceOrder;

/// Lifecycle phase of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loaded,
}

/// Holds the published dataset and, when the loader fell back to canned
/// data, the error that caused the degradation.
#[derive(Debug, Default)]
pub struct Store {
    inner: Option<Inner>,
}

#[derive(Debug)]
struct Inner {
    orders: Vec<ServiceOrder>,
    degraded: Option<LoadError>,
}

impl Store {
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Publish a dataset, flipping the store to [`LoadState::Loaded`].
    ///
    /// `degraded` carries the load error when `orders` is the fallback
    /// dataset. Replacement is wholesale — records are never patched in
    /// place. A second publish is not part of the normal lifecycle; it
    /// replaces the dataset and logs a warning.
    pub fn publish(&mut self, orders: Vec<ServiceOrder>, degraded: Option<LoadError>) {
        if self.inner.is_some() {
            tracing::warn!("store already loaded; replacing dataset wholesale");
        }
        tracing::debug!(
            count = orders.len(),
            degraded = degraded.is_some(),
            "dataset published"
        );
        self.inner = Some(Inner { orders, degraded });
    }

    pub fn status(&self) -> LoadState {
        if self.inner.is_some() {
            LoadState::Loaded
        } else {
            LoadState::Unloaded
        }
    }

    /// The load error behind a degraded (fallback) dataset, if any.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.inner.as_ref()?.degraded.as_ref()
    }

    /// The published records, empty while unloaded.
    pub fn orders(&self) -> &[ServiceOrder] {
        self.inner
            .as_ref()
            .map(|inner| inner.orders.as_slice())
            .unwrap_or(&[])
    }

    /// Run the matcher over the published dataset.
    ///
    /// Short-circuits with [`SearchError::NotReady`] while unloaded, so a
    /// search fired before the fetch completes is rejected, not queued.
    pub fn search(&self, query: &str) -> Result<Vec<&ServiceOrder>, SearchError> {
        match &self.inner {
            None => Err(SearchError::NotReady),
            Some(inner) => search::search(query, &inner.orders),
        }
    }
}
