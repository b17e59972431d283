//! Windowing over a filtered view: fixed-size global pages and per-group
//! incremental reveal cursors.

use std::collections::BTreeMap;

use catalog_model::{GroupKey, Item};

/// Default page size for globally paged views.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Initial number of items revealed per group.
pub const REVEAL_SEED: usize = 3;

/// How many more items each "show more" click reveals.
pub const REVEAL_STEP: usize = 3;

/// One page of a filtered view.
///
/// `page_index` is the cursor actually used after clamping, so callers can
/// feed it straight back into their pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Item>,
    /// 1-based index of this page, clamped into `[1, total_pages]`.
    pub page_index: usize,
    /// Always at least 1; an empty view has one empty page.
    pub total_pages: usize,
    /// Length of the filtered view the page was cut from.
    pub total_items: usize,
}

/// Number of pages a view of `len` items occupies at `page_size`.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Cut the requested page out of a filtered view.
///
/// Out-of-range requests clamp rather than fail: asking for page 5 of a
/// 2-page view returns page 2. A page is never empty while earlier pages
/// hold items, so a view that shrank under the cursor still renders.
pub fn page(filtered: &[Item], page_index: usize, page_size: usize) -> Page {
    let total_items = filtered.len();
    let total_pages = total_pages(total_items, page_size);
    let index = page_index.clamp(1, total_pages);
    let items = filtered
        .iter()
        .skip((index - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();
    Page {
        items,
        page_index: index,
        total_pages,
        total_items,
    }
}

/// Independent "reveal N more" cursors keyed by group.
///
/// Each group's cursor starts at the seed and only grows. A cursor is never
/// reset when a filter change shrinks the group's membership; reads clip to
/// whatever the group currently holds instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealWindow {
    seed: usize,
    step: usize,
    counts: BTreeMap<GroupKey, usize>,
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealWindow {
    pub fn new() -> Self {
        Self::with_limits(REVEAL_SEED, REVEAL_STEP)
    }

    pub fn with_limits(seed: usize, step: usize) -> Self {
        Self {
            seed,
            step,
            counts: BTreeMap::new(),
        }
    }

    /// Current cursor for a group; groups never touched sit at the seed.
    pub fn visible_for(&self, group: &GroupKey) -> usize {
        self.counts.get(group).copied().unwrap_or(self.seed)
    }

    /// Grow one group's cursor by the step, capped at `available`.
    ///
    /// Monotonic: the stored cursor never decreases, even when the group's
    /// membership has shrunk below it since the last call. Other groups'
    /// cursors are untouched. Returns the new cursor value.
    pub fn load_more(&mut self, group: &GroupKey, available: usize) -> usize {
        let current = self.visible_for(group);
        let next = current.saturating_add(self.step).min(available).max(current);
        self.counts.insert(group.clone(), next);
        next
    }

    /// Forget every cursor (used when the underlying resource changes).
    pub fn reset(&mut self) {
        self.counts.clear();
    }
}

/// The revealed prefix of one group's members, in filtered order.
pub fn reveal(filtered: &[Item], group: &GroupKey, window: &RevealWindow) -> Vec<Item> {
    filtered
        .iter()
        .filter(|item| item.group.as_ref() == Some(group))
        .take(window.visible_for(group))
        .cloned()
        .collect()
}

/// How many of a group's members remain hidden behind the reveal cursor.
/// Drives the visibility of the "show more" control.
pub fn hidden_count(filtered: &[Item], group: &GroupKey, window: &RevealWindow) -> usize {
    let members = filtered
        .iter()
        .filter(|item| item.group.as_ref() == Some(group))
        .count();
    members.saturating_sub(window.visible_for(group))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped(id: &str, group: i64) -> Item {
        Item::new(id).with_group(group)
    }

    #[test]
    fn page_size_zero_yields_single_empty_page() {
        let items: Vec<Item> = (0..4).map(|i| Item::new(format!("i{i}"))).collect();
        let page = page(&items, 1, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_index, 1);
    }

    #[test]
    fn reveal_respects_filtered_order() {
        let items = vec![
            grouped("a", 1),
            grouped("b", 2),
            grouped("c", 1),
            grouped("d", 1),
            grouped("e", 1),
        ];
        let window = RevealWindow::new();
        let revealed = reveal(&items, &GroupKey::Num(1), &window);
        let ids: Vec<&str> = revealed.iter().map(|i| i.id.0.as_str()).collect();
        assert_eq!(ids, ["a", "c", "d"]);
        assert_eq!(hidden_count(&items, &GroupKey::Num(1), &window), 1);
    }

    #[test]
    fn untouched_group_sits_at_seed() {
        let window = RevealWindow::new();
        assert_eq!(window.visible_for(&GroupKey::Num(9)), REVEAL_SEED);
    }
}
