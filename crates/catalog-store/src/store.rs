//! The collection store and its refresh-ticket protocol.

use std::future::Future;
use std::sync::Arc;

use catalog_model::{Item, ResourceId};
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::status::StatusMessage;

/// Identifies one issued refresh. Tickets compare by issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// What became of a completed fetch when it was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Result accepted; the collection was replaced and the generation bumped.
    Applied,
    /// A newer refresh was issued (or the resource changed) while this fetch
    /// was in flight; the result was discarded untouched.
    Stale,
    /// The fetch failed; the previous collection was retained.
    Failed(FetchError),
}

/// Owns the last fetched collection for one resource.
///
/// Replacement is a single reference swap: readers holding the previous
/// [`Arc`] keep a consistent collection, and elements are never mutated in
/// place. The generation counter increments on every swap so derived views
/// (filter memos, aggregates) can detect staleness by key instead of by
/// deep comparison.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    resource: ResourceId,
    items: Arc<Vec<Item>>,
    generation: u64,
    issued: u64,
    fetching: bool,
    status: Option<StatusMessage>,
}

impl CollectionStore {
    /// Create an empty store for a resource. Generation starts at 0 and
    /// only moves when a collection is actually applied.
    pub fn new(resource: ResourceId) -> Self {
        Self {
            resource,
            items: Arc::new(Vec::new()),
            generation: 0,
            issued: 0,
            fetching: false,
            status: None,
        }
    }

    pub fn resource(&self) -> &ResourceId {
        &self.resource
    }

    /// Shared handle to the current collection.
    pub fn items(&self) -> Arc<Vec<Item>> {
        Arc::clone(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Empty is a valid terminal state, not an error; views disable their
    /// pagination controls and idle their carousels on it.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Monotonically increasing version of the applied collection.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a refresh is currently in flight.
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn dismiss_status(&mut self) {
        self.status = None;
    }

    /// Whether the last completed refresh failed.
    pub fn has_error(&self) -> bool {
        matches!(
            self.status,
            Some(StatusMessage {
                kind: crate::status::StatusKind::Error,
                ..
            })
        )
    }

    /// Issue a refresh. The returned ticket must accompany the fetch result
    /// back into [`Self::apply_refresh`].
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        self.fetching = true;
        debug!(resource = %self.resource, ticket = self.issued, "refresh issued");
        RefreshTicket(self.issued)
    }

    /// Apply a completed fetch.
    ///
    /// Issue order, not completion order, decides staleness: the result
    /// lands only if no newer refresh was issued while it was in flight.
    /// A stale result is discarded without touching the collection, the
    /// generation, or the fetching flag (the newer fetch still owns it).
    pub fn apply_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Item>, FetchError>,
    ) -> RefreshOutcome {
        if ticket.0 != self.issued {
            debug!(
                resource = %self.resource,
                ticket = ticket.0,
                newest = self.issued,
                "stale refresh discarded"
            );
            return RefreshOutcome::Stale;
        }
        self.fetching = false;
        match result {
            Ok(items) => {
                self.items = Arc::new(items);
                self.generation += 1;
                self.status = None;
                debug!(
                    resource = %self.resource,
                    generation = self.generation,
                    len = self.items.len(),
                    "collection replaced"
                );
                RefreshOutcome::Applied
            }
            Err(err) => {
                warn!(resource = %self.resource, error = %err, "fetch failed; previous collection retained");
                self.status = Some(StatusMessage::error(err.to_string()));
                RefreshOutcome::Failed(err)
            }
        }
    }

    /// Sequential convenience for callers without their own message loop:
    /// issue, await, apply.
    pub async fn refresh_from<F>(&mut self, fetch: F) -> RefreshOutcome
    where
        F: Future<Output = Result<Vec<Item>, FetchError>>,
    {
        let ticket = self.begin_refresh();
        let result = fetch.await;
        self.apply_refresh(ticket, result)
    }

    /// Point the store at a different resource.
    ///
    /// Stale data is discarded, not merged; the generation bumps so derived
    /// views recompute, and any in-flight ticket is invalidated. A no-op
    /// when the resource is unchanged.
    pub fn set_resource(&mut self, resource: ResourceId) {
        if resource == self.resource {
            return;
        }
        debug!(from = %self.resource, to = %resource, "resource switched");
        self.resource = resource;
        self.items = Arc::new(Vec::new());
        self.generation += 1;
        self.issued += 1;
        self.fetching = false;
        self.status = None;
    }
}
