// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{self, Debug, Display},
          ops::{Deref, DerefMut}};

use serde::{Deserialize, Serialize};

use super::PageCount;

/// The smallest window the calculator will work with. Fewer than 5 slots cannot
/// represent the first page, the neighborhood of the current page, and the last page
/// unambiguously, so smaller requests are clamped up to this.
pub const MIN_WINDOW_SIZE: WindowSize = WindowSize(5);

/// Represents the maximum number of individually-clickable page-number slots a
/// pagination UI wants to display at once. Ellipsis markers do not count against the
/// window.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WindowSize(pub usize);

/// Creates a new [`WindowSize`] from a value that can be converted into one. This is a
/// convenience function that is equivalent to calling [`WindowSize::new`].
#[must_use]
pub fn window_size(arg_window_size: impl Into<WindowSize>) -> WindowSize {
    arg_window_size.into()
}

impl Debug for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowSize({})", self.0)
    }
}

impl Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

mod construct {
    use super::{MIN_WINDOW_SIZE, PageCount, WindowSize};

    impl WindowSize {
        #[must_use]
        pub fn new(arg_window_size: impl Into<WindowSize>) -> Self {
            arg_window_size.into()
        }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }

        /// Returns `self`, raised to `min` if it was below it.
        #[must_use]
        pub fn clamp_to_min(&self, min: WindowSize) -> WindowSize {
            if self.0 < min.0 { min } else { *self }
        }

        /// Every page fits in the window at once, so no collapsing is needed.
        #[must_use]
        pub fn can_show_all(&self, total: PageCount) -> bool { total.as_usize() <= self.0 }

        /// Slots left over to widen the block around the current page once the
        /// [`MIN_WINDOW_SIZE`] baseline is spent (first page, last page, current
        /// page, and one slot per ellipsis). Saturates at 0.
        #[must_use]
        pub fn center_span(&self) -> usize {
            self.0.saturating_sub(MIN_WINDOW_SIZE.as_usize())
        }
    }

    impl From<usize> for WindowSize {
        fn from(val: usize) -> Self { WindowSize(val) }
    }

    impl From<u16> for WindowSize {
        fn from(val: u16) -> Self { WindowSize(usize::from(val)) }
    }

    impl From<i32> for WindowSize {
        /// Negative values clamp to 0.
        fn from(val: i32) -> Self { WindowSize(usize::try_from(val).unwrap_or(0)) }
    }

    impl From<WindowSize> for usize {
        fn from(window: WindowSize) -> Self { window.as_usize() }
    }
}

mod ops {
    use super::{Deref, DerefMut, WindowSize};

    impl Deref for WindowSize {
        type Target = usize;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for WindowSize {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_count;

    #[test]
    fn test_window_size_clamp_to_min() {
        assert_eq!(window_size(1).clamp_to_min(MIN_WINDOW_SIZE), MIN_WINDOW_SIZE);
        assert_eq!(window_size(5).clamp_to_min(MIN_WINDOW_SIZE), window_size(5));
        assert_eq!(window_size(9).clamp_to_min(MIN_WINDOW_SIZE), window_size(9));
    }

    #[test]
    fn test_window_size_can_show_all() {
        assert!(window_size(7).can_show_all(page_count(7)));
        assert!(window_size(7).can_show_all(page_count(3)));
        assert!(window_size(7).can_show_all(page_count(0)));
        assert!(!window_size(7).can_show_all(page_count(8)));
    }

    #[test]
    fn test_window_size_center_span() {
        assert_eq!(window_size(5).center_span(), 0);
        assert_eq!(window_size(7).center_span(), 2);
        assert_eq!(window_size(9).center_span(), 4);

        // Below the minimum the span saturates instead of underflowing.
        assert_eq!(window_size(2).center_span(), 0);
    }

    #[test]
    fn test_window_size_debug_fmt() {
        assert_eq!(format!("{:?}", window_size(7)), "WindowSize(7)");
    }
}
