//! Tests for the suggestion feed state

use super::*;
use crate::test_utils::test_helpers::{feed_with, ids, record};
use proptest::prelude::*;

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn test_new_feed_is_empty() {
    let feed = SuggestionFeed::new(3);
    assert!(feed.is_empty());
    assert_eq!(feed.len(), 0);
    assert_eq!(feed.total_pages(), 1);
    assert_eq!(feed.current_page(), 1);
    assert!(feed.current_page_items().is_empty());
}

#[test]
fn test_first_page_window() {
    let feed = feed_with(&["A", "B", "C", "D", "E"], 3);
    assert_eq!(ids(feed.current_page_items()), vec!["A", "B", "C"]);
    assert_eq!(feed.total_pages(), 2);
}

#[test]
fn test_next_page_window() {
    let mut feed = feed_with(&["A", "B", "C", "D", "E"], 3);
    feed.go_to_page(PageTarget::Next);
    assert_eq!(feed.current_page(), 2);
    assert_eq!(ids(feed.current_page_items()), vec!["D", "E"]);
}

#[test]
fn test_next_on_last_page_is_no_op() {
    let mut feed = feed_with(&["A", "B", "C", "D", "E"], 3);
    feed.go_to_page(PageTarget::Last);
    feed.go_to_page(PageTarget::Next);
    assert_eq!(feed.current_page(), 2);
}

#[test]
fn test_prev_on_first_page_is_no_op() {
    let mut feed = feed_with(&["A", "B", "C", "D", "E"], 3);
    feed.go_to_page(PageTarget::Prev);
    assert_eq!(feed.current_page(), 1);
}

#[test]
fn test_explicit_page_clamps() {
    let mut feed = feed_with(&["A", "B", "C", "D", "E"], 2);
    feed.go_to_page(PageTarget::Page(42));
    assert_eq!(feed.current_page(), 3);
    assert_eq!(ids(feed.current_page_items()), vec!["E"]);

    feed.go_to_page(PageTarget::Page(0));
    assert_eq!(feed.current_page(), 1);
}

#[test]
fn test_prepend_resets_page_and_goes_first() {
    let mut feed = feed_with(&["A", "B", "C", "D", "E"], 3);
    feed.go_to_page(PageTarget::Next);

    feed.prepend(record("F"));

    assert_eq!(ids(feed.records()), vec!["F", "A", "B", "C", "D", "E"]);
    assert_eq!(feed.current_page(), 1);
    assert_eq!(feed.total_pages(), 2);
}

#[test]
fn test_prepend_keeps_duplicates() {
    let mut feed = feed_with(&["A"], 3);
    feed.prepend(record("A"));
    assert_eq!(ids(feed.records()), vec!["A", "A"]);
}

#[test]
fn test_load_replaces_and_resets() {
    let mut feed = feed_with(&["A", "B", "C", "D"], 2);
    feed.go_to_page(PageTarget::Last);

    feed.load(vec![record("X")]);

    assert_eq!(ids(feed.records()), vec!["X"]);
    assert_eq!(feed.current_page(), 1);
}

#[test]
fn test_mark_executed_first_match_only() {
    let mut feed = feed_with(&["A", "B", "A"], 5);
    assert!(feed.mark_executed("A"));

    let executed: Vec<bool> = feed.records().iter().map(|r| r.executed).collect();
    assert_eq!(executed, vec![true, false, false]);
}

#[test]
fn test_mark_executed_is_idempotent() {
    let mut feed = feed_with(&["A", "B"], 5);
    assert!(feed.mark_executed("B"));
    assert!(feed.mark_executed("B"));
    assert!(feed.records()[1].executed);
    assert!(!feed.records()[0].executed);
}

#[test]
fn test_mark_executed_unknown_id_changes_nothing() {
    let mut feed = feed_with(&["A", "B", "C"], 2);
    feed.go_to_page(PageTarget::Last);
    let before = feed.records().to_vec();
    let ptr_before = feed.records().as_ptr();

    assert!(!feed.mark_executed("missing"));

    assert_eq!(feed.records(), before.as_slice());
    assert_eq!(feed.records().as_ptr(), ptr_before);
    assert_eq!(feed.current_page(), 2);
}

#[test]
fn test_mark_executed_matches_numeric_ids_by_string() {
    let records = crate::suggestion::decode_records(r#"[{"id": 7}, {"id": "8"}]"#).unwrap();
    let mut feed = SuggestionFeed::with_records(5, records);

    assert!(feed.mark_executed("7"));
    assert!(feed.records()[0].executed);
}

#[test]
fn test_find() {
    let feed = feed_with(&["A", "B"], 5);
    assert_eq!(feed.find("B").map(|r| r.id.as_str()), Some("B"));
    assert!(feed.find("Z").is_none());
}

#[test]
fn test_set_page_size_clamps_current_page() {
    let mut feed = feed_with(&["A", "B", "C", "D", "E", "F"], 1);
    feed.go_to_page(PageTarget::Page(6));

    feed.set_page_size(4);

    assert_eq!(feed.page_size(), 4);
    assert_eq!(feed.current_page(), 2);
    assert_eq!(ids(feed.current_page_items()), vec!["E", "F"]);
}

// =========================================================================
// Property Tests
// =========================================================================

fn id_list(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("s{}", i)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_total_pages(page_size in 1usize..20, count in 0usize..100) {
        let names = id_list(count);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let feed = feed_with(&refs, page_size);
        prop_assert_eq!(feed.total_pages(), std::cmp::max(1, count.div_ceil(page_size)));
    }

    #[test]
    fn prop_page_items_length(page_size in 1usize..20, count in 0usize..100, page in 0usize..30) {
        let names = id_list(count);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut feed = feed_with(&refs, page_size);
        feed.go_to_page(PageTarget::Page(page));

        let start = (feed.current_page() - 1) * page_size;
        let expected = if start < count {
            std::cmp::min(page_size, count - start)
        } else {
            0
        };
        prop_assert_eq!(feed.current_page_items().len(), expected);
    }

    #[test]
    fn prop_prepend_goes_first(page_size in 1usize..10, count in 0usize..40, page in 1usize..10) {
        let names = id_list(count);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut feed = feed_with(&refs, page_size);
        feed.go_to_page(PageTarget::Page(page));

        feed.prepend(record("new"));

        prop_assert_eq!(feed.len(), count + 1);
        prop_assert_eq!(feed.current_page(), 1);
        prop_assert_eq!(feed.records()[0].id.as_str(), "new");
    }

    #[test]
    fn prop_navigation_stays_in_range(
        page_size in 1usize..10,
        count in 0usize..50,
        moves in prop::collection::vec(
            prop_oneof![
                Just(PageTarget::First),
                Just(PageTarget::Prev),
                Just(PageTarget::Next),
                Just(PageTarget::Last),
                (0usize..20).prop_map(PageTarget::Page),
            ],
            0..20
        )
    ) {
        let names = id_list(count);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut feed = feed_with(&refs, page_size);

        for target in moves {
            feed.go_to_page(target);
            prop_assert!(feed.current_page() >= 1);
            prop_assert!(feed.current_page() <= feed.total_pages());
        }
    }
}
