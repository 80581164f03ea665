// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{self, Debug, Display},
          ops::{Deref, DerefMut}};

use serde::{Deserialize, Serialize};

use super::PageNumber;

/// Represents the total number of pages in a paginated list.
///
/// A count of 0 means the list is empty (or has not loaded yet). For any count `>= 1`
/// the pages are numbered `1..=count`, so the count doubles as the last valid
/// [`PageNumber`] via [`PageCount::last_page`].
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PageCount(pub usize);

/// Creates a new [`PageCount`] from a value that can be converted into one. This is a
/// convenience function that is equivalent to calling [`PageCount::new`].
#[must_use]
pub fn page_count(arg_page_count: impl Into<PageCount>) -> PageCount { arg_page_count.into() }

impl Debug for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PageCount({})", self.0)
    }
}

impl Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

mod construct {
    use super::{PageCount, PageNumber};

    impl PageCount {
        #[must_use]
        pub fn new(arg_page_count: impl Into<PageCount>) -> Self { arg_page_count.into() }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }

        #[must_use]
        pub fn is_zero(&self) -> bool { self.0 == 0 }

        /// The number of the last page, which for a 1-based numbering scheme equals
        /// the count itself. Only meaningful when the count is `>= 1`.
        #[must_use]
        pub fn last_page(&self) -> PageNumber { PageNumber(self.0) }

        /// One past [`PageCount::last_page`]. Useful as the exclusive upper bound of
        /// a half-open page range. Saturates at [`usize::MAX`].
        #[must_use]
        pub fn one_past_last(&self) -> PageNumber { PageNumber(self.0.saturating_add(1)) }
    }

    impl From<usize> for PageCount {
        fn from(val: usize) -> Self { PageCount(val) }
    }

    impl From<u16> for PageCount {
        fn from(val: u16) -> Self { PageCount(usize::from(val)) }
    }

    impl From<i32> for PageCount {
        /// Negative values clamp to 0.
        fn from(val: i32) -> Self { PageCount(usize::try_from(val).unwrap_or(0)) }
    }

    impl From<PageCount> for usize {
        fn from(count: PageCount) -> Self { count.as_usize() }
    }
}

mod ops {
    use super::{Deref, DerefMut, PageCount};

    impl Deref for PageCount {
        type Target = usize;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for PageCount {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page;

    #[test]
    fn test_page_count_new() {
        let count = PageCount::new(15);
        assert_eq!(count, page_count(15));
        assert_eq!(count.as_usize(), 15);
    }

    #[test]
    fn test_page_count_is_zero() {
        assert!(page_count(0).is_zero());
        assert!(!page_count(1).is_zero());
    }

    #[test]
    fn test_page_count_last_page() {
        assert_eq!(page_count(15).last_page(), page(15));
        assert_eq!(page_count(1).last_page(), page(1));
    }

    #[test]
    fn test_page_count_one_past_last() {
        assert_eq!(page_count(15).one_past_last(), page(16));
    }

    #[test]
    fn test_page_count_one_past_last_saturates_at_max() {
        assert_eq!(page_count(usize::MAX).one_past_last(), page(usize::MAX));
    }

    #[test]
    fn test_page_count_from_negative_i32_clamps_to_zero() {
        assert_eq!(PageCount::from(-7_i32), page_count(0));
    }

    #[test]
    fn test_page_count_debug_fmt() {
        assert_eq!(format!("{:?}", page_count(15)), "PageCount(15)");
    }
}
