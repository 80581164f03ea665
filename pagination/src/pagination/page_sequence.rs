// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Leaf helpers for building runs of consecutive page numbers.

use crate::{InlineVec, PageNumber, PaginationItem};

/// Returns the increasing run of page numbers `begin, begin+1, ..., end-1` (half-open,
/// `end` excluded). There is no ordering constraint on the inputs: if `end <= begin`
/// the result is empty rather than a panic or a negative-length run.
#[must_use]
pub fn sequence(
    arg_begin: impl Into<PageNumber>,
    arg_end: impl Into<PageNumber>,
) -> InlineVec<PageNumber> {
    let begin = arg_begin.into();
    let end = arg_end.into();
    (begin.as_usize()..end.as_usize()).map(PageNumber).collect()
}

/// Wraps each element of [`sequence()`] in a [`PaginationItem::Page`] descriptor.
pub fn page_sequence(
    arg_begin: impl Into<PageNumber>,
    arg_end: impl Into<PageNumber>,
) -> impl Iterator<Item = PaginationItem> {
    sequence(arg_begin, arg_end)
        .into_iter()
        .map(|page_number| PaginationItem::Page { page_number })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page;

    #[test]
    fn test_sequence_is_half_open() {
        let run = sequence(1, 5);
        let expected: InlineVec<PageNumber> = (1..5).map(PageNumber).collect();
        assert_eq!(run, expected);

        let run = sequence(2, 6);
        let expected: InlineVec<PageNumber> = (2..6).map(PageNumber).collect();
        assert_eq!(run, expected);
    }

    #[test]
    fn test_sequence_accepts_page_number_bounds() {
        let run = sequence(page(3), page(6));
        let expected: InlineVec<PageNumber> = (3..6).map(PageNumber).collect();
        assert_eq!(run, expected);
    }

    #[test]
    fn test_empty_sequence_when_end_not_after_begin() {
        assert!(sequence(5, 5).is_empty());
        assert!(sequence(6, 2).is_empty());
        assert!(sequence(0, 0).is_empty());
    }

    #[test]
    fn test_page_sequence_wraps_each_number() {
        let items: Vec<PaginationItem> = page_sequence(1, 4).collect();
        assert_eq!(
            items,
            vec![
                PaginationItem::new_page(1),
                PaginationItem::new_page(2),
                PaginationItem::new_page(3)
            ]
        );
    }

    #[test]
    fn test_page_sequence_can_be_empty() {
        assert_eq!(page_sequence(9, 3).count(), 0);
    }
}
