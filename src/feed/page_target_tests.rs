//! Tests for page target parsing and resolution

use super::*;

#[test]
fn test_parse_named_targets() {
    assert_eq!("first".parse::<PageTarget>().unwrap(), PageTarget::First);
    assert_eq!("prev".parse::<PageTarget>().unwrap(), PageTarget::Prev);
    assert_eq!("previous".parse::<PageTarget>().unwrap(), PageTarget::Prev);
    assert_eq!("next".parse::<PageTarget>().unwrap(), PageTarget::Next);
    assert_eq!("last".parse::<PageTarget>().unwrap(), PageTarget::Last);
}

#[test]
fn test_parse_is_case_and_whitespace_insensitive() {
    assert_eq!(" Next ".parse::<PageTarget>().unwrap(), PageTarget::Next);
    assert_eq!("LAST".parse::<PageTarget>().unwrap(), PageTarget::Last);
}

#[test]
fn test_parse_numbers() {
    assert_eq!("3".parse::<PageTarget>().unwrap(), PageTarget::Page(3));
    assert_eq!("+2".parse::<PageTarget>().unwrap(), PageTarget::Page(2));
    assert_eq!("0".parse::<PageTarget>().unwrap(), PageTarget::Page(0));
    assert_eq!("-4".parse::<PageTarget>().unwrap(), PageTarget::Page(0));
    assert_eq!(
        "99999999999999999999999999".parse::<PageTarget>().unwrap(),
        PageTarget::Page(usize::MAX)
    );
}

#[test]
fn test_parse_invalid() {
    for input in ["", "sideways", "1.5", "-", "2x"] {
        let err = input.parse::<PageTarget>().unwrap_err();
        assert!(matches!(err, FeedError::InvalidPageTarget(_)), "{input}");
    }
}

#[test]
fn test_resolve_named() {
    assert_eq!(PageTarget::First.resolve(3, 5), 1);
    assert_eq!(PageTarget::Prev.resolve(3, 5), 2);
    assert_eq!(PageTarget::Next.resolve(3, 5), 4);
    assert_eq!(PageTarget::Last.resolve(3, 5), 5);
}

#[test]
fn test_resolve_at_edges_is_no_op() {
    assert_eq!(PageTarget::Prev.resolve(1, 5), 1);
    assert_eq!(PageTarget::Next.resolve(5, 5), 5);
}

#[test]
fn test_resolve_explicit_page_clamps() {
    assert_eq!(PageTarget::Page(0).resolve(2, 4), 1);
    assert_eq!(PageTarget::Page(9).resolve(2, 4), 4);
    assert_eq!(PageTarget::Page(usize::MAX).resolve(1, 4), 4);
    assert_eq!(PageTarget::Page(3).resolve(1, 4), 3);
}

#[test]
fn test_resolve_with_zero_total_pages() {
    assert_eq!(PageTarget::Last.resolve(1, 0), 1);
}

#[test]
fn test_display_round_trips_through_parse() {
    for target in [
        PageTarget::First,
        PageTarget::Prev,
        PageTarget::Next,
        PageTarget::Last,
        PageTarget::Page(7),
    ] {
        assert_eq!(target.to_string().parse::<PageTarget>().unwrap(), target);
    }
}

#[test]
fn test_serde_json_forms() {
    assert_eq!(
        serde_json::to_string(&PageTarget::Next).unwrap(),
        "\"next\""
    );
    assert_eq!(serde_json::to_string(&PageTarget::Page(2)).unwrap(), "2");

    let target: PageTarget = serde_json::from_str("\"first\"").unwrap();
    assert_eq!(target, PageTarget::First);
    let target: PageTarget = serde_json::from_str("4").unwrap();
    assert_eq!(target, PageTarget::Page(4));
    let target: PageTarget = serde_json::from_str("-2").unwrap();
    assert_eq!(target, PageTarget::Page(0));
    assert!(serde_json::from_str::<PageTarget>("true").is_err());
}

#[test]
fn test_labels() {
    assert_eq!(PageTarget::First.label(), "«");
    assert_eq!(PageTarget::Last.label(), "»");
    assert_eq!(PageTarget::Page(12).label(), "12");
}
