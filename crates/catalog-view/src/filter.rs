//! Conjunctive predicate evaluation.
//!
//! Filtering is order preserving: surviving items keep their relative
//! positions from the raw collection, there is no implicit resort.

use catalog_model::{FilterState, GroupFilter, Item, StatusFilter};
use tracing::trace;

/// Decide whether a single item passes every active predicate.
pub fn matches(item: &Item, filter: &FilterState) -> bool {
    matches_search(item, &filter.search)
        && matches_status(item, &filter.status)
        && matches_group(item, &filter.group)
}

/// Case-insensitive substring match over the concatenated searchable text.
/// An empty term is vacuously true.
fn matches_search(item: &Item, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let haystack = item.search_text.join(" ").to_lowercase();
    haystack.contains(&term.to_lowercase())
}

fn matches_status(item: &Item, filter: &StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => item.status.as_deref() == Some(status.as_str()),
    }
}

fn matches_group(item: &Item, filter: &GroupFilter) -> bool {
    match filter {
        GroupFilter::All => true,
        GroupFilter::Only(key) => item.group.as_ref() == Some(key),
    }
}

/// Apply the full filter to a collection.
///
/// Pure: identical `(collection, filter)` pairs yield identical output, a
/// subset of the input in the input's order.
pub fn apply(items: &[Item], filter: &FilterState) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches(item, filter))
        .cloned()
        .collect()
}

/// Memoized filter application keyed by `(collection generation, filter)`.
///
/// The filtered view only depends on those two inputs, so re-renders
/// triggered by unrelated state hit the cache. The cached view owns clones
/// of the surviving records and stays valid across a store refresh (the
/// next lookup with the bumped generation recomputes).
#[derive(Debug, Clone, Default)]
pub struct FilterMemo {
    key: Option<(u64, FilterState)>,
    view: Vec<Item>,
}

impl FilterMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the filtered view for `(generation, filter)`, recomputing only
    /// when the key differs from the cached one.
    pub fn get_or_compute(
        &mut self,
        generation: u64,
        filter: &FilterState,
        items: &[Item],
    ) -> &[Item] {
        let stale = match &self.key {
            Some((cached_generation, cached_filter)) => {
                *cached_generation != generation || cached_filter != filter
            }
            None => true,
        };
        if stale {
            trace!(generation, "filter memo miss");
            self.view = apply(items, filter);
            self.key = Some((generation, filter.clone()));
        }
        &self.view
    }

    /// Drop the cached view; the next lookup recomputes unconditionally.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.view.clear();
    }
}
