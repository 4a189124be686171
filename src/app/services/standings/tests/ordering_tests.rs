//! Tests for grouping, stable ranking and the ordering self-check

use super::*;
use crate::Error;
use crate::app::services::standings::{group_by_category, rank_category, verify_category_order};

#[test]
fn test_group_by_category_uses_input_order() {
    let mut entries = create_entry_map(&[(1, "div4", 301.0), (2, "div3", 305.0)]);
    // Entry 10 sorts after 2 by number but was read first
    entries.insert(10, create_test_entry(10, "div4", 310.0, 0));
    entries.get_mut(&1).unwrap().input_index = 1;
    entries.get_mut(&2).unwrap().input_index = 2;

    let groups = group_by_category(&entries);
    assert_eq!(groups["div4"], vec![10, 1]);
    assert_eq!(groups["div3"], vec![2]);
}

#[test]
fn test_rank_category_is_stable() {
    let entries = create_entry_map(&[
        (4, "div4", 300.0),
        (1, "div4", 300.0),
        (3, "div4", 299.0),
        (2, "div4", 300.0),
    ]);
    let mut order = vec![4, 1, 3, 2];

    rank_category(&mut order, &entries);
    assert_eq!(order, vec![3, 4, 1, 2]);
}

#[test]
fn test_verify_accepts_sorted_order() {
    let entries = create_div4_entries();
    assert!(verify_category_order("div4", &[3, 1, 2], &entries).is_ok());
    assert!(verify_category_order("div4", &[], &entries).is_ok());
}

#[test]
fn test_verify_detects_sorting_fault() {
    let entries = create_div4_entries();

    let err = verify_category_order("div4", &[1, 3, 2], &entries).unwrap_err();
    match err {
        Error::SortingFault {
            category,
            first,
            second,
            order,
        } => {
            assert_eq!(category, "div4");
            assert!(first.contains("number: 1"));
            assert!(second.contains("number: 3"));
            assert_eq!(order, "1, 3, 2");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_verify_rejects_unknown_entry() {
    let entries = create_div4_entries();
    assert!(matches!(
        verify_category_order("div4", &[3, 42], &entries),
        Err(Error::SortingFault { .. })
    ));
}
