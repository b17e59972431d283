//! Aggregate statistics over the raw (unfiltered) collection.
//!
//! Aggregation is total: it never fails, and records missing a field simply
//! do not contribute to that field's counts. Snapshots are recomputed in
//! full whenever the owning store's collection changes.

use std::collections::BTreeMap;

use catalog_model::{GroupKey, Item};
use serde::{Serialize, Serializer};

/// How many entries the snapshot's group ranking keeps.
pub const DEFAULT_TOP_N: usize = 5;

/// Field a ranking is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    Status,
    Group,
}

/// One entry of a top-N ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub key: String,
    pub count: usize,
}

/// Derived statistics for one collection.
///
/// Group counts are keyed by the full [`GroupKey`], so a numeric id and a
/// string id with the same rendering stay distinct buckets; keys take
/// their display form only at the serialization edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateSnapshot {
    pub total: usize,
    pub counts_by_status: BTreeMap<String, usize>,
    #[serde(serialize_with = "group_counts_as_display")]
    pub counts_by_group: BTreeMap<GroupKey, usize>,
    pub top_groups: Vec<GroupCount>,
}

fn group_counts_as_display<S>(
    counts: &BTreeMap<GroupKey, usize>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(counts.iter().map(|(key, count)| (key.to_string(), count)))
}

impl AggregateSnapshot {
    /// Fraction of records carrying the given status; `0.0` for an empty
    /// collection.
    pub fn status_rate(&self, status: &str) -> f64 {
        rate(
            self.counts_by_status.get(status).copied().unwrap_or(0),
            self.total,
        )
    }
}

/// Compute a full snapshot with the default ranking depth.
pub fn aggregate(raw: &[Item]) -> AggregateSnapshot {
    aggregate_with_top_n(raw, DEFAULT_TOP_N)
}

/// Compute a full snapshot, keeping the `n` most populous groups.
pub fn aggregate_with_top_n(raw: &[Item], n: usize) -> AggregateSnapshot {
    let mut counts_by_status = BTreeMap::new();
    let mut counts_by_group = BTreeMap::new();
    for item in raw {
        if let Some(status) = &item.status {
            *counts_by_status.entry(status.clone()).or_insert(0) += 1;
        }
        if let Some(group) = &item.group {
            *counts_by_group.entry(group.clone()).or_insert(0) += 1;
        }
    }
    let top_groups = top_n(raw, RankKey::Group, n)
        .into_iter()
        .map(|(key, count)| GroupCount { key, count })
        .collect();
    AggregateSnapshot {
        total: raw.len(),
        counts_by_status,
        counts_by_group,
        top_groups,
    }
}

/// Distinct keys ranked by descending count, in display form.
///
/// Ties break by first-seen order in the raw collection, and the result is
/// truncated to `n`. Records without the ranked field are skipped. Group
/// keys are counted as full [`GroupKey`]s before taking their display
/// form, so two distinct keys that render alike rank separately.
pub fn top_n(raw: &[Item], key: RankKey, n: usize) -> Vec<(String, usize)> {
    match key {
        RankKey::Status => rank(raw.iter().filter_map(|item| item.status.clone()), n),
        RankKey::Group => rank(raw.iter().filter_map(|item| item.group.clone()), n)
            .into_iter()
            .map(|(key, count)| (key.to_string(), count))
            .collect(),
    }
}

fn rank<K>(values: impl Iterator<Item = K>, n: usize) -> Vec<(K, usize)>
where
    K: Ord + Clone,
{
    let mut order: Vec<K> = Vec::new();
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for value in values {
        if !counts.contains_key(&value) {
            order.push(value.clone());
        }
        *counts.entry(value).or_insert(0) += 1;
    }
    // Stable sort keeps first-seen order within equal counts.
    let mut ranked: Vec<(K, usize)> = order
        .into_iter()
        .map(|key| {
            let count = counts[&key];
            (key, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// `count / total` as a fraction, defined as `0.0` when `total` is zero.
pub fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
