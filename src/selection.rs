//! Session-scoped record of facets seen so far
//!
//! The tracker only feeds the "do not normalize" hint sent with each
//! navigation. Entries are upserted by facet value and never evicted; losing
//! or duplicating entries degrades the hint but never the path/map state.

use crate::codec::{PATH_SEPARATOR, facet_path_name};
use crate::facets::Facet;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::trace;

/// Facets recorded during a navigation session, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    facets: Vec<Facet>,
    index: HashMap<String, usize>,
}

impl SelectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a facet keyed by its value
    ///
    /// A later facet with the same value replaces the earlier one in place.
    pub fn record(&mut self, facet: Option<&Facet>) {
        let Some(facet) = facet else {
            return;
        };
        match self.index.get(&facet.value) {
            Some(&slot) => self.facets[slot] = facet.clone(),
            None => {
                self.index.insert(facet.value.clone(), self.facets.len());
                self.facets.push(facet.clone());
            }
        }
        trace!(value = %facet.value, tracked = self.facets.len(), "recorded facet");
    }

    #[must_use]
    pub fn get(&self, value: &str) -> Option<&Facet> {
        self.index.get(value).and_then(|&slot| self.facets.get(slot))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Facet> {
        self.facets.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Path names of non-category facets that must not be normalized
    ///
    /// The current batch comes first, then every tracked facet, joined with `/`.
    #[must_use]
    pub fn non_normalizable_fields(&self, batch: &[Facet]) -> String {
        batch
            .iter()
            .chain(self.facets.iter())
            .filter(|facet| !facet.kind.is_category())
            .map(facet_path_name)
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR)
    }
}

/// Tracker shared between threads
///
/// Every access holds the lock for the whole read-modify-write. A poisoned
/// lock is recovered since the tracker is advisory.
#[derive(Debug, Clone, Default)]
pub struct SharedSelectionTracker {
    inner: Arc<Mutex<SelectionTracker>>,
}

impl SharedSelectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, facet: Option<&Facet>) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(facet);
    }

    #[must_use]
    pub fn non_normalizable_fields(&self, batch: &[Facet]) -> String {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .non_normalizable_fields(batch)
    }

    /// Copy of the tracked state
    #[must_use]
    pub fn snapshot(&self) -> SelectionTracker {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
