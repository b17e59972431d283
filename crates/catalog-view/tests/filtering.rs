//! Filtering contract: conjunction, subset, order preservation, idempotence.

use catalog_model::{FilterState, GroupKey, Item};
use catalog_view::filter::apply;

fn course(id: &str, title: &str, status: &str, group: i64) -> Item {
    Item::new(id)
        .with_search_text([title])
        .with_status(status)
        .with_group(group)
}

fn fixture() -> Vec<Item> {
    vec![
        course("c1", "Classic lash extensions", "published", 1),
        course("c2", "Volume lashes masterclass", "draft", 1),
        course("c3", "Brow lamination", "published", 2),
        course("c4", "Lash lift and tint", "published", 1),
        course("c5", "Nail art basics", "draft", 3),
    ]
}

#[test]
fn predicates_combine_with_and() {
    let items = fixture();
    let filter = FilterState::default()
        .with_search("lash")
        .with_status("published")
        .with_group(GroupKey::Num(1));
    let filtered = apply(&items, &filter);
    let ids: Vec<&str> = filtered.iter().map(|i| i.id.0.as_str()).collect();
    assert_eq!(ids, ["c1", "c4"]);
}

#[test]
fn filtered_output_is_an_ordered_subset() {
    let items = fixture();
    let filtered = apply(&items, &FilterState::default().with_search("lash"));

    // Every surviving item exists, unmodified, in the source.
    for item in &filtered {
        assert!(items.contains(item));
    }

    // Relative order of survivors matches the raw collection.
    let positions: Vec<usize> = filtered
        .iter()
        .map(|f| items.iter().position(|i| i == f).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn filtering_is_idempotent() {
    let items = fixture();
    let filter = FilterState::default().with_status("draft");
    let once = apply(&items, &filter);
    let twice = apply(&once, &filter);
    assert_eq!(once, twice);
}

#[test]
fn neutral_filter_is_identity() {
    let items = fixture();
    assert_eq!(apply(&items, &FilterState::default()), items);
}

#[test]
fn empty_collection_filters_to_empty() {
    assert!(apply(&[], &FilterState::default().with_search("lash")).is_empty());
}
