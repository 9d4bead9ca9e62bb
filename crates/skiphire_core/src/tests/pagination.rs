//! Tests for page derivation and the pager cursor

use std::num::NonZeroUsize;

use super::skips;
use crate::model::SkipId;
use crate::pagination::{Pager, paginate, total_pages};

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn ids(items: &[crate::model::SkipOption]) -> Vec<u64> {
    items.iter().map(|s| s.id.0).collect()
}

/// 14 items at 6 per page split into 6 / 6 / 2
#[test]
fn test_fourteen_items_three_pages() {
    let items = skips(14);

    let page1 = paginate(&items, size(6), 1);
    assert_eq!(page1.total_pages, 3);
    assert_eq!(ids(page1.visible), vec![1, 2, 3, 4, 5, 6]);
    assert!(!page1.has_prev);
    assert!(page1.has_next);

    let page2 = paginate(&items, size(6), 2);
    assert_eq!(ids(page2.visible), vec![7, 8, 9, 10, 11, 12]);
    assert_eq!(page2.first_index, 6);
    assert_eq!(page2.last_index, 12);
    assert!(page2.has_prev && page2.has_next);

    let page3 = paginate(&items, size(6), 3);
    assert_eq!(ids(page3.visible), vec![13, 14]);
    assert_eq!(page3.first_index, 12);
    assert_eq!(page3.last_index, 14);
    assert!(page3.has_prev);
    assert!(!page3.has_next);
}

#[test]
fn test_total_pages_is_ceiling() {
    for count in 0..40 {
        for page_size in 1..9 {
            let expected = (count + page_size - 1) / page_size;
            assert_eq!(total_pages(count, size(page_size)), expected);
        }
    }
}

#[test]
fn test_every_page_fits_and_last_page_holds_remainder() {
    for count in 1..30 {
        let items = skips(count);
        for page_size in 1..8 {
            let pages = total_pages(count, size(page_size));
            for page in 1..=pages {
                assert!(paginate(&items, size(page_size), page).visible.len() <= page_size);
            }
            let last = paginate(&items, size(page_size), pages);
            assert_eq!(last.visible.len(), count - (pages - 1) * page_size);
        }
    }
}

#[test]
fn test_empty_list_has_no_pages() {
    let items = skips(0);
    let page = paginate(&items, size(6), 1);

    assert_eq!(page.total_pages, 0);
    assert_eq!(page.current_page, 0);
    assert!(page.is_empty());
    assert!(!page.has_next);
    assert!(!page.has_prev);
    assert!(!page.needs_controls());
}

#[test]
fn test_out_of_range_pages_clamp() {
    let items = skips(14);

    let below = paginate(&items, size(6), 0);
    assert_eq!(below.current_page, 1);
    assert_eq!(ids(below.visible), vec![1, 2, 3, 4, 5, 6]);

    let above = paginate(&items, size(6), 99);
    assert_eq!(above.current_page, 3);
    assert_eq!(ids(above.visible), vec![13, 14]);
}

#[test]
fn test_single_page_needs_no_controls() {
    let items = skips(4);
    let page = paginate(&items, size(6), 1);
    assert_eq!(page.total_pages, 1);
    assert!(!page.needs_controls());
}

#[test]
fn test_pager_boundaries_are_no_ops() {
    let mut pager = Pager::new(size(6));

    assert!(!pager.prev(14));
    assert_eq!(pager.current_page(), 1);

    assert!(pager.next(14));
    assert!(pager.next(14));
    assert_eq!(pager.current_page(), 3);

    assert!(!pager.next(14));
    assert_eq!(pager.current_page(), 3);
}

#[test]
fn test_pager_reset_after_list_shrinks() {
    let mut pager = Pager::new(size(6));
    assert!(pager.go_to(3, 14));
    assert_eq!(pager.current_page(), 3);

    let smaller = skips(4);
    // Derivation stays in range even before the owner resets the cursor
    assert_eq!(pager.page(&smaller).current_page, 1);

    pager.reset();
    assert_eq!(pager.current_page(), 1);
}

#[test]
fn test_pager_page_size_change_resets() {
    let mut pager = Pager::new(size(6));
    pager.next(14);
    assert_eq!(pager.current_page(), 2);

    pager.set_page_size(size(4));
    assert_eq!(pager.current_page(), 1);

    let items = skips(14);
    let page = pager.page(&items);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.visible[0].id, SkipId(1));
}

#[test]
fn test_pager_on_empty_list_stays_put() {
    let mut pager = Pager::default();
    assert!(!pager.next(0));
    assert!(!pager.prev(0));
    assert_eq!(pager.current_page(), 1);
}

#[test]
fn test_pager_go_to_clamps_and_reports_moves() {
    let mut pager = Pager::new(size(6));

    assert!(!pager.go_to(1, 14));
    assert!(pager.go_to(usize::MAX, 14));
    assert_eq!(pager.current_page(), 3);
    assert!(!pager.go_to(99, 14));

    // Nothing to show still leaves the pager on page 1
    assert!(pager.go_to(5, 0));
    assert_eq!(pager.current_page(), 1);
}
