// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ### Pagination window calculator
//!
//! [`calculate_pagination()`] decides which page numbers a pagination control shows
//! and which runs collapse into ellipsis markers. For `total = 15, window = 7` the
//! three shapes it can produce are:
//!
//! ```text
//! current = 1    [ 1][ 2][ 3][ 4][ 5][ …][15]    left side fits, one right gap
//! current = 8    [ 1][ …][ 7][ 8][ 9][ …][15]    both sides collapse
//! current = 13   [ 1][ …][11][12][13][14][15]    right side fits, one left gap
//! ```
//!
//! Five slots of the window budget are always reserved: page 1, the two endpoints of
//! the center block sitting next to the ellipses, and the last page. Whatever budget
//! remains widens the center block around `current`:
//!
//! ```text
//!                center_left        center_right
//!                     ↓                  ↓
//! [ 1][ …][         current +/- span / 2          ][ …][total]
//!          |<-------- span = window - 5 --------->|
//! ```
//!
//! The output always concatenates (visible plus hidden) to exactly `1..=total`, an
//! ellipsis never stands in for a single page, and the first and last page are never
//! collapsed.

use smallvec::smallvec;

use super::{DEBUG_PAGINATION_MOD, page_sequence, sequence};
use crate::{MIN_WINDOW_SIZE, PageCount, PageNumber, PaginationItem, PaginationItemList,
            WindowSize, page};

/// Computes the ordered list of page / ellipsis descriptors to render for a
/// pagination control.
///
/// # Arguments
///
/// * `total` - Total number of pages. A total of 0 yields the documented fallback of
///   a single descriptor for page 1.
/// * `current` - The page the caller considers active. The contract does not require
///   it to lie in `1..=total`; out-of-range values still produce a well-formed window,
///   it just won't contain `current`.
/// * `window` - Desired maximum count of visible page-number slots, not counting
///   ellipsis markers. Values below [`MIN_WINDOW_SIZE`] are clamped up to it.
///
/// All page arithmetic saturates at both numeric bounds, so no combination of
/// inputs overflow-panics. The returned list materializes every page number in
/// `1..=total` (visible or hidden), so memory use grows with `total`.
///
/// # Examples
///
/// ```
/// use r3bl_pagination::{calculate_pagination, page, page_count, window_size};
///
/// let items = calculate_pagination(page_count(15), page(12), window_size(7));
/// assert_eq!(items.to_string(), "1 … 11 12 13 14 15");
/// ```
#[must_use]
pub fn calculate_pagination(
    total: PageCount,
    current: PageNumber,
    window: WindowSize,
) -> PaginationItemList {
    let window = window.clamp_to_min(MIN_WINDOW_SIZE);

    // Defensive fallback for pagination controls rendered before any data loads.
    if total.is_zero() {
        return PaginationItemList(smallvec![PaginationItem::new_page(1)]);
    }

    // Every page fits on screen, no collapsing needed.
    if window.can_show_all(total) {
        return page_sequence(page(1), total.one_past_last()).collect();
    }

    // The contiguous block shown around `current`. Integer floor division makes the
    // block lean right by one page when the span is odd.
    let span = window.center_span();
    let center_left = current - span / 2;
    let center_right = center_left + span;

    let last_page = total.last_page();

    if DEBUG_PAGINATION_MOD {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "calculate_pagination() center window",
            total = %total,
            current = %current,
            window = %window,
            center_left = %center_left,
            center_right = %center_right,
        );
    }

    // Note the ordering of the branches below matters.
    if center_left <= page(3) {
        // Left side fits without a gap: the visible run starts right at page 1.
        let run_end = page(window.as_usize() - 2);
        let mut items: PaginationItemList = page_sequence(page(1), run_end + 1).collect();
        items.push(PaginationItem::new_ellipsis(sequence(run_end + 1, last_page)));
        items.push(PaginationItem::Page {
            page_number: last_page,
        });
        items
    } else if center_right >= last_page - 2 {
        // Right side fits without a gap: mirror image of the branch above.
        let run_start = last_page - (window.as_usize() - 3);
        let mut items = PaginationItemList::new();
        items.push(PaginationItem::new_page(1));
        items.push(PaginationItem::new_ellipsis(sequence(page(2), run_start)));
        items.extend(page_sequence(run_start, total.one_past_last()));
        items
    } else {
        // Both sides collapse: page 1, gap, center block, gap, last page.
        let mut items = PaginationItemList::new();
        items.push(PaginationItem::new_page(1));
        items.push(PaginationItem::new_ellipsis(sequence(page(2), center_left)));
        items.extend(page_sequence(center_left, center_right + 1));
        items.push(PaginationItem::new_ellipsis(sequence(center_right + 1, last_page)));
        items.push(PaginationItem::Page {
            page_number: last_page,
        });
        items
    }
}
