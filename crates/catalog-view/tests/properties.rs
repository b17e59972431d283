//! Property tests for the view-derivation invariants.

use catalog_model::{FilterState, GroupKey, Item};
use catalog_view::aggregate::aggregate;
use catalog_view::filter::apply;
use catalog_view::paginate::{RevealWindow, page};
use proptest::prelude::*;

fn arb_item() -> impl Strategy<Value = Item> {
    (
        0usize..200,
        proptest::option::of(prop_oneof![
            Just("published".to_string()),
            Just("draft".to_string()),
            Just("archived".to_string()),
        ]),
        proptest::option::of(0i64..5),
        proptest::collection::vec("[a-z ]{0,12}", 0..3),
    )
        .prop_map(|(n, status, group, text)| {
            let mut item = Item::new(format!("i{n}")).with_search_text(text);
            if let Some(status) = status {
                item = item.with_status(status);
            }
            if let Some(group) = group {
                item = item.with_group(group);
            }
            item
        })
}

fn arb_filter() -> impl Strategy<Value = FilterState> {
    (
        "[a-z]{0,4}",
        proptest::option::of(prop_oneof![
            Just("published".to_string()),
            Just("draft".to_string()),
        ]),
        proptest::option::of(0i64..5),
    )
        .prop_map(|(search, status, group)| {
            let mut filter = FilterState::default().with_search(search);
            if let Some(status) = status {
                filter = filter.with_status(status);
            }
            if let Some(group) = group {
                filter = filter.with_group(group);
            }
            filter
        })
}

proptest! {
    #[test]
    fn filtered_view_is_an_ordered_subsequence(
        items in proptest::collection::vec(arb_item(), 0..40),
        filter in arb_filter(),
    ) {
        let filtered = apply(&items, &filter);
        prop_assert!(filtered.len() <= items.len());

        // Subsequence walk: every survivor appears in the source, in order.
        let mut source = items.iter();
        for survivor in &filtered {
            prop_assert!(source.any(|i| i == survivor));
        }
    }

    #[test]
    fn filtering_twice_changes_nothing(
        items in proptest::collection::vec(arb_item(), 0..40),
        filter in arb_filter(),
    ) {
        let once = apply(&items, &filter);
        prop_assert_eq!(apply(&once, &filter), once.clone());
    }

    #[test]
    fn pages_stay_in_bounds(
        len in 0usize..100,
        page_index in 0usize..50,
        page_size in 1usize..20,
    ) {
        let items: Vec<Item> = (0..len).map(|i| Item::new(format!("i{i}"))).collect();
        let result = page(&items, page_index, page_size);
        prop_assert!(result.items.len() <= page_size);
        prop_assert!(result.page_index >= 1);
        prop_assert!(result.page_index <= result.total_pages);
        // A valid view never renders an empty page while items exist.
        prop_assert!(result.items.is_empty() == (len == 0));
    }

    #[test]
    fn reveal_cursor_is_monotonic_and_capped(
        available in 0usize..30,
        calls in 0usize..12,
    ) {
        let group = GroupKey::Num(1);
        let mut window = RevealWindow::new();
        let mut previous = window.visible_for(&group);
        for _ in 0..calls {
            let next = window.load_more(&group, available);
            prop_assert!(next >= previous);
            prop_assert!(next <= available.max(previous));
            previous = next;
        }
    }

    #[test]
    fn status_counts_partition_the_statused_records(
        items in proptest::collection::vec(arb_item(), 0..40),
    ) {
        let snapshot = aggregate(&items);
        let statused = items.iter().filter(|i| i.status.is_some()).count();
        prop_assert_eq!(snapshot.counts_by_status.values().sum::<usize>(), statused);
        prop_assert!(snapshot.counts_by_group.values().sum::<usize>() <= snapshot.total);
        prop_assert_eq!(snapshot.total, items.len());
    }
}
