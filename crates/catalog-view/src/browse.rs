//! Per-screen browsing state.
//!
//! Each consuming screen owns exactly one `BrowseState` and advances it only
//! through the transition methods below. The filter and both cursor kinds
//! survive unrelated re-renders; switching to a different resource replaces
//! the whole value, which is what clears transient state.

use catalog_model::{FilterState, GroupFilter, GroupKey, ResourceId, StatusFilter};

use crate::paginate::{DEFAULT_PAGE_SIZE, RevealWindow};

/// View-owned state for one browsing screen: the filter, the global page
/// cursor, and the per-group reveal cursors.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    resource: ResourceId,
    pub filter: FilterState,
    pub page_index: usize,
    pub page_size: usize,
    pub reveal: RevealWindow,
}

impl BrowseState {
    pub fn new(resource: ResourceId) -> Self {
        Self {
            resource,
            filter: FilterState::default(),
            page_index: 1,
            page_size: DEFAULT_PAGE_SIZE,
            reveal: RevealWindow::new(),
        }
    }

    pub fn resource(&self) -> &ResourceId {
        &self.resource
    }

    /// Edit the search term. Any filter edit snaps the page cursor back to
    /// the first page; reveal cursors stay put and clip on read.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
        self.page_index = 1;
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.page_index = 1;
    }

    pub fn set_group_filter(&mut self, group: GroupFilter) {
        self.filter.group = group;
        self.page_index = 1;
    }

    /// Move the global page cursor. Zero is treated as the first page; the
    /// upper clamp happens against the filtered length at derivation time.
    pub fn set_page(&mut self, index: usize) {
        self.page_index = index.max(1);
    }

    /// Change the page size, clamped to at least one item per page so a
    /// stored size can never produce an empty page while items exist.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = 1;
    }

    /// Grow one group's reveal cursor; see [`RevealWindow::load_more`].
    pub fn load_more(&mut self, group: &GroupKey, available: usize) -> usize {
        self.reveal.load_more(group, available)
    }

    /// Navigate to a different resource: filter and cursors reset to their
    /// defaults. A no-op when the resource is unchanged, so re-renders
    /// never lose state.
    pub fn reset_for_resource(&mut self, resource: ResourceId) {
        if resource == self.resource {
            return;
        }
        *self = Self::new(resource);
    }
}
