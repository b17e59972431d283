//! Filter input for one collection view.
//!
//! A filter is a conjunction: an item passes iff it passes every active
//! predicate. The `All` variants are identity-true, so the default filter
//! lets everything through.

use serde::{Deserialize, Serialize};

use crate::item::GroupKey;

/// Status predicate: exact match against the record's status, or `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Identity-true sentinel.
    #[default]
    All,
    /// Only records whose status equals this value.
    Only(String),
}

impl StatusFilter {
    /// Whether this predicate actually restricts anything.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

/// Group predicate: exact match against the record's group key, or `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupFilter {
    /// Identity-true sentinel.
    #[default]
    All,
    /// Only records belonging to this group.
    Only(GroupKey),
}

impl GroupFilter {
    /// Whether this predicate actually restricts anything.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

/// Complete filter input for one collection view.
///
/// A pure value: identical `(collection, filter)` pairs always derive
/// identical views. The consuming screen owns one of these and replaces it
/// wholesale when the underlying resource changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search term; empty is vacuously true.
    pub search: String,
    /// Status predicate.
    pub status: StatusFilter,
    /// Group predicate.
    pub group: GroupFilter,
}

impl FilterState {
    /// True when no predicate restricts the view.
    pub fn is_neutral(&self) -> bool {
        self.search.is_empty() && !self.status.is_active() && !self.group.is_active()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = StatusFilter::Only(status.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<GroupKey>) -> Self {
        self.group = GroupFilter::Only(group.into());
        self
    }
}
