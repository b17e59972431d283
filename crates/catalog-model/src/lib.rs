pub mod filter;
pub mod item;

pub use filter::{FilterState, GroupFilter, StatusFilter};
pub use item::{GroupInfo, GroupKey, Item, ItemId, ResourceId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes() {
        let item = Item::new("course-12")
            .with_group(GroupKey::Num(4))
            .with_status("published")
            .with_search_text(["Classic lash course", "Beginner friendly"]);
        let json = serde_json::to_string(&item).expect("serialize item");
        let round: Item = serde_json::from_str(&json).expect("deserialize item");
        assert_eq!(round, item);
    }

    #[test]
    fn item_tolerates_missing_fields() {
        // Records from the API may omit everything but the id.
        let round: Item = serde_json::from_str(r#"{"id":"a-1"}"#).expect("deserialize sparse item");
        assert_eq!(round.id, ItemId::from("a-1"));
        assert!(round.group.is_none());
        assert!(round.status.is_none());
        assert!(round.search_text.is_empty());
    }

    #[test]
    fn group_key_accepts_numbers_and_strings() {
        let num: GroupKey = serde_json::from_str("7").expect("numeric key");
        let text: GroupKey = serde_json::from_str(r#""lashes""#).expect("string key");
        assert_eq!(num, GroupKey::Num(7));
        assert_eq!(text, GroupKey::Text("lashes".to_string()));
        assert_eq!(num.to_string(), "7");
        assert_eq!(text.to_string(), "lashes");
    }

    #[test]
    fn default_filter_is_neutral() {
        let filter = FilterState::default();
        assert!(filter.is_neutral());
        assert_eq!(filter.status, StatusFilter::All);
        assert_eq!(filter.group, GroupFilter::All);
    }
}
