//! Derived views: pure functions over the pin collection and the
//! transient filter state. Nothing here mutates or persists anything.

use std::collections::BTreeSet;

use crate::db::models::Pin;
use crate::store::filter::Filter;

/// Pins matching the current filter, in collection order (newest
/// first). A pin is visible when the search text is empty or a
/// case-insensitive substring of its title or any tag, AND no tag is
/// selected or at least one selected tag appears on the pin.
pub fn visible_pins<'a>(pins: &'a [Pin], filter: &Filter) -> Vec<&'a Pin> {
    pins.iter()
        .filter(|pin| matches_search(pin, &filter.search_text))
        .filter(|pin| matches_tags(pin, &filter.selected_tags))
        .collect()
}

/// Pins authored by the given user, in collection order.
pub fn pins_by_author(pins: &[Pin], user_id: i64) -> Vec<&Pin> {
    pins.iter().filter(|p| p.user_id == user_id).collect()
}

/// Pins the given user has saved, in collection order.
pub fn pins_saved_by(pins: &[Pin], user_id: i64) -> Vec<&Pin> {
    pins.iter()
        .filter(|p| p.saved_by.contains(&user_id))
        .collect()
}

/// Every tag in use across the collection, deduplicated.
pub fn available_tags(pins: &[Pin]) -> BTreeSet<String> {
    pins.iter()
        .flat_map(|pin| pin.tags.iter().cloned())
        .collect()
}

fn matches_search(pin: &Pin, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    pin.title.to_lowercase().contains(&needle)
        || pin.tags.iter().any(|t| t.to_lowercase().contains(&needle))
}

fn matches_tags(pin: &Pin, selected: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|t| pin.tags.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(id: &str, title: &str, tags: &[&str]) -> Pin {
        Pin {
            id: id.into(),
            user_id: 1,
            title: title.into(),
            description: String::new(),
            image_url: format!("https://example.com/{id}.jpg"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            likes: 0,
            saved_by: Vec::new(),
            created_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    fn sample() -> Vec<Pin> {
        vec![
            pin("a", "Modern Interior", &["interior", "minimal"]),
            pin("b", "Forest Cabin", &["modern", "wood"]),
            pin("c", "Street Food", &["food"]),
        ]
    }

    #[test]
    fn empty_filter_returns_all_in_order() {
        let pins = sample();
        let visible = visible_pins(&pins, &Filter::default());
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn search_matches_title_and_tags_case_insensitively() {
        let pins = sample();
        let mut filter = Filter::default();
        filter.set_search_text("mod");
        let ids: Vec<&str> = visible_pins(&pins, &filter)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        // "a" by title, "b" by its "modern" tag; "c" matches neither
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn selected_tags_intersect_with_pin_tags() {
        let pins = sample();
        let mut filter = Filter::default();
        filter.toggle_tag("wood");
        filter.toggle_tag("food");
        let ids: Vec<&str> = visible_pins(&pins, &filter)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn search_and_tags_are_both_required() {
        let pins = sample();
        let mut filter = Filter::default();
        filter.set_search_text("mod");
        filter.toggle_tag("wood");
        let ids: Vec<&str> = visible_pins(&pins, &filter)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn tag_filter_is_case_sensitive() {
        let pins = sample();
        let mut filter = Filter::default();
        filter.toggle_tag("Wood");
        assert!(visible_pins(&pins, &filter).is_empty());
    }

    #[test]
    fn visible_pins_is_deterministic() {
        let pins = sample();
        let mut filter = Filter::default();
        filter.set_search_text("o");
        let first: Vec<String> = visible_pins(&pins, &filter)
            .iter()
            .map(|p| p.id.clone())
            .collect();
        let second: Vec<String> = visible_pins(&pins, &filter)
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn pins_by_author_keeps_collection_order() {
        let mut pins = sample();
        pins[1].user_id = 2;
        let ids: Vec<&str> = pins_by_author(&pins, 1)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(pins_by_author(&pins, 99).is_empty());
    }

    #[test]
    fn pins_saved_by_checks_membership() {
        let mut pins = sample();
        pins[0].saved_by = vec![7];
        pins[2].saved_by = vec![3, 7];
        let ids: Vec<&str> = pins_saved_by(&pins, 7)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(pins_saved_by(&pins, 99).is_empty());
    }

    #[test]
    fn available_tags_deduplicates_across_pins() {
        let mut pins = sample();
        pins.push(pin("d", "Another", &["modern", "modern", "interior"]));
        let tags = available_tags(&pins);
        let expected: BTreeSet<String> = ["interior", "minimal", "modern", "wood", "food"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn available_tags_of_empty_collection_is_empty() {
        assert!(available_tags(&[]).is_empty());
    }
}
