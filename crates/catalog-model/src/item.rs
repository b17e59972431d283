//! Core record types shared by every view-derivation crate.
//!
//! Records are immutable once fetched: a refresh replaces the whole
//! collection, it never patches entries in place. Fields the API may omit
//! are modeled as explicit `Option`s and default to absent instead of
//! failing filtering or aggregation.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique key of a record within its collection, for the collection's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Categorical grouping key. The API delivers these as numbers or strings
/// depending on the resource, so both shapes are first-class.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupKey {
    Num(i64),
    Text(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for GroupKey {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One catalogued record (course, article, instructor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id within the collection.
    pub id: ItemId,
    /// Grouping key (e.g. category id), if the record has one.
    #[serde(default)]
    pub group: Option<GroupKey>,
    /// Workflow status (e.g. "published", "draft"), if the record has one.
    #[serde(default)]
    pub status: Option<String>,
    /// Text fields the free-text search predicate runs over.
    #[serde(default)]
    pub search_text: Vec<String>,
    /// Creation or publication time, when the API provides one.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Named numeric fields (price, rating, duration).
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
}

impl Item {
    /// Create a record with only an id; everything else is absent.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            group: None,
            status: None,
            search_text: Vec::new(),
            created_at: None,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_group(mut self, group: impl Into<GroupKey>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_search_text<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_text = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }
}

/// Metadata used to label a group in rendered views.
///
/// Fetched separately from the collection itself; counts and filters never
/// wait on it. A group without metadata renders by its raw key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub id: GroupKey,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl GroupInfo {
    pub fn new(id: impl Into<GroupKey>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

/// Identifies one remote collection (e.g. "courses", "articles").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
