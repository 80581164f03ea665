// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{self, Debug, Display},
          ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign}};

use serde::{Deserialize, Serialize};

/// Represents a 1-based page number.
///
/// Pagination is user-facing, so unlike most indices in this codebase a
/// [`PageNumber`] starts at 1, not 0. The first page of a paginated list is page 1
/// and the last page equals the total page count.
///
/// `PageNumber` values can be created using the [`PageNumber::new`] method, the
/// [page] function, or by converting from various numeric types. Negative numbers
/// clamp to 0, and arithmetic saturates at both numeric bounds rather than wrapping
/// or panicking.
///
/// # Examples
///
/// ```
/// use r3bl_pagination::{PageNumber, page};
///
/// let a = PageNumber::new(5);
/// let b = page(5);
/// let c = PageNumber::from(5_usize);
///
/// assert_eq!(a, b);
/// assert_eq!(b, c);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PageNumber(pub usize);

/// Creates a new [`PageNumber`] from a value that can be converted into one. This is
/// a convenience function that is equivalent to calling [`PageNumber::new`].
#[must_use]
pub fn page(arg_page_number: impl Into<PageNumber>) -> PageNumber { arg_page_number.into() }

impl Debug for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PageNumber({})", self.0)
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

mod construct {
    use super::PageNumber;

    impl PageNumber {
        #[must_use]
        pub fn new(arg_page_number: impl Into<PageNumber>) -> Self {
            arg_page_number.into()
        }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }

    impl From<usize> for PageNumber {
        fn from(val: usize) -> Self { PageNumber(val) }
    }

    impl From<u16> for PageNumber {
        fn from(val: u16) -> Self { PageNumber(usize::from(val)) }
    }

    impl From<i32> for PageNumber {
        /// Negative values clamp to 0.
        fn from(val: i32) -> Self { PageNumber(usize::try_from(val).unwrap_or(0)) }
    }

    impl From<PageNumber> for usize {
        fn from(page_number: PageNumber) -> Self { page_number.as_usize() }
    }
}

mod ops {
    use super::{Add, AddAssign, Deref, DerefMut, PageNumber, Sub, SubAssign};

    impl Deref for PageNumber {
        type Target = usize;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for PageNumber {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }

    /// Offset a page number to the right by a slot count. Saturates at
    /// [`usize::MAX`].
    impl Add<usize> for PageNumber {
        type Output = PageNumber;

        fn add(self, rhs: usize) -> Self::Output { PageNumber(self.0.saturating_add(rhs)) }
    }

    impl AddAssign<usize> for PageNumber {
        fn add_assign(&mut self, rhs: usize) { self.0 = self.0.saturating_add(rhs); }
    }

    /// Offset a page number to the left by a slot count. Saturates at 0.
    impl Sub<usize> for PageNumber {
        type Output = PageNumber;

        fn sub(self, rhs: usize) -> Self::Output { PageNumber(self.0.saturating_sub(rhs)) }
    }

    impl SubAssign<usize> for PageNumber {
        fn sub_assign(&mut self, rhs: usize) { self.0 = self.0.saturating_sub(rhs); }
    }
}
