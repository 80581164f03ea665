// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The descriptor types the calculator returns: a tagged union of "render this page
//! number" and "render a collapsed run of page numbers", plus the ordered list
//! wrapper around them.

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::{InlineVec, PageNumber};

/// One slot in the rendered pagination control. Immutable value type with no identity
/// beyond its content; the calculator constructs these fresh on every call.
///
/// The serialized form is the wire shape downstream renderers consume:
///
/// ```json
/// { "kind": "page", "pageNumber": 7 }
/// { "kind": "ellipsis", "hiddenPages": [2, 3, 4, 5, 6] }
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PaginationItem {
    /// A single clickable page. `page_number` is 1-based and lies in `1..=total`.
    Page { page_number: PageNumber },
    /// A collapsed run of consecutive page numbers. `hidden_pages` is non-empty,
    /// strictly increasing by 1, and fully contained in `1..=total`.
    Ellipsis { hidden_pages: InlineVec<PageNumber> },
}

impl PaginationItem {
    #[must_use]
    pub fn new_page(arg_page_number: impl Into<PageNumber>) -> Self {
        PaginationItem::Page {
            page_number: arg_page_number.into(),
        }
    }

    #[must_use]
    pub fn new_ellipsis(hidden_pages: InlineVec<PageNumber>) -> Self {
        PaginationItem::Ellipsis { hidden_pages }
    }

    #[must_use]
    pub fn is_page(&self) -> bool { matches!(self, PaginationItem::Page { .. }) }

    #[must_use]
    pub fn is_ellipsis(&self) -> bool { matches!(self, PaginationItem::Ellipsis { .. }) }
}

impl Debug for PaginationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page { page_number } => write!(f, "Page({page_number})"),
            Self::Ellipsis { hidden_pages } => {
                write!(f, "Ellipsis[")?;
                for (index, page_number) in hidden_pages.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{page_number}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Display for PaginationItem {
    /// Renders the way a UI would: the bare page number, or `…` for a collapsed run.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page { page_number } => write!(f, "{page_number}"),
            Self::Ellipsis { .. } => write!(f, "…"),
        }
    }
}

/// The calculator output: pagination items in left-to-right rendering order.
///
/// Derefs to the backing [`InlineVec`], so the usual slice/vec operations are
/// available directly. Serializes as a plain JSON array of items.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationItemList(pub InlineVec<PaginationItem>);

impl PaginationItemList {
    #[must_use]
    pub fn new() -> Self { PaginationItemList(InlineVec::new()) }

    /// Number of [`PaginationItem::Page`] descriptors, i.e. how many window slots the
    /// output occupies. Ellipsis markers do not count.
    #[must_use]
    pub fn page_slot_count(&self) -> usize {
        self.0.iter().filter(|item| item.is_page()).count()
    }

    #[must_use]
    pub fn ellipsis_count(&self) -> usize {
        self.0.iter().filter(|item| item.is_ellipsis()).count()
    }

    /// Whether the given page is rendered as a clickable page descriptor (pages
    /// hidden inside an ellipsis do not count).
    #[must_use]
    pub fn contains_page(&self, arg_page_number: impl Into<PageNumber>) -> bool {
        let target = arg_page_number.into();
        self.0.iter().any(
            |item| matches!(item, PaginationItem::Page { page_number } if *page_number == target),
        )
    }

    /// All page numbers in the list, visible and hidden, concatenated in order. For a
    /// well-formed list this is exactly `1..=total`.
    #[must_use]
    pub fn flatten(&self) -> InlineVec<PageNumber> {
        let mut acc = InlineVec::new();
        for item in &self.0 {
            match item {
                PaginationItem::Page { page_number } => acc.push(*page_number),
                PaginationItem::Ellipsis { hidden_pages } => {
                    acc.extend(hidden_pages.iter().copied());
                }
            }
        }
        acc
    }
}

impl Debug for PaginationItemList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl Display for PaginationItemList {
    /// Renders the whole control on one line, e.g. `1 … 7 8 9 … 15`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

mod ops {
    use super::{InlineVec, PaginationItem, PaginationItemList};
    use crate::DEFAULT_INLINE_VEC_SIZE;
    use std::ops::{Deref, DerefMut};

    impl Deref for PaginationItemList {
        type Target = InlineVec<PaginationItem>;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for PaginationItemList {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }

    impl FromIterator<PaginationItem> for PaginationItemList {
        fn from_iter<T: IntoIterator<Item = PaginationItem>>(iter: T) -> Self {
            PaginationItemList(iter.into_iter().collect())
        }
    }

    impl IntoIterator for PaginationItemList {
        type Item = PaginationItem;
        type IntoIter = smallvec::IntoIter<[PaginationItem; DEFAULT_INLINE_VEC_SIZE]>;

        fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
    }

    impl<'a> IntoIterator for &'a PaginationItemList {
        type Item = &'a PaginationItem;
        type IntoIter = std::slice::Iter<'a, PaginationItem>;

        fn into_iter(self) -> Self::IntoIter { self.0.iter() }
    }
}

#[cfg(test)]
mod tests {
    use miette::IntoDiagnostic;
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    use super::*;
    use crate::page;

    fn hidden(range: std::ops::Range<usize>) -> InlineVec<PageNumber> {
        range.map(PageNumber).collect()
    }

    #[test]
    fn test_page_wire_shape() -> miette::Result<()> {
        let item = PaginationItem::new_page(7);

        let json = serde_json::to_string(&item).into_diagnostic()?;
        assert_eq!(json, r#"{"kind":"page","pageNumber":7}"#);

        let round_trip: PaginationItem = serde_json::from_str(&json).into_diagnostic()?;
        assert_eq!(round_trip, item);

        Ok(())
    }

    #[test]
    fn test_ellipsis_wire_shape() -> miette::Result<()> {
        let item = PaginationItem::new_ellipsis(hidden(2..7));

        let json = serde_json::to_string(&item).into_diagnostic()?;
        assert_eq!(json, r#"{"kind":"ellipsis","hiddenPages":[2,3,4,5,6]}"#);

        let round_trip: PaginationItem = serde_json::from_str(&json).into_diagnostic()?;
        assert_eq!(round_trip, item);

        Ok(())
    }

    #[test]
    fn test_list_serializes_as_array() -> miette::Result<()> {
        let list: PaginationItemList = [
            PaginationItem::new_page(1),
            PaginationItem::new_ellipsis(hidden(2..4)),
            PaginationItem::new_page(4),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&list).into_diagnostic()?;
        assert_eq!(
            json,
            r#"[{"kind":"page","pageNumber":1},{"kind":"ellipsis","hiddenPages":[2,3]},{"kind":"page","pageNumber":4}]"#
        );

        let round_trip: PaginationItemList = serde_json::from_str(&json).into_diagnostic()?;
        assert_eq!(round_trip, list);

        Ok(())
    }

    #[test]
    fn test_is_page_and_is_ellipsis() {
        assert!(PaginationItem::new_page(1).is_page());
        assert!(!PaginationItem::new_page(1).is_ellipsis());
        assert!(PaginationItem::new_ellipsis(hidden(2..4)).is_ellipsis());
        assert!(!PaginationItem::new_ellipsis(hidden(2..4)).is_page());
    }

    #[test]
    fn test_flatten_concatenates_visible_and_hidden() {
        let list: PaginationItemList = [
            PaginationItem::new_page(1),
            PaginationItem::new_ellipsis(hidden(2..4)),
            PaginationItem::new_page(4),
        ]
        .into_iter()
        .collect();

        let expected: InlineVec<PageNumber> = hidden(1..5);
        assert_eq!(list.flatten(), expected);
    }

    #[test]
    fn test_contains_page_ignores_hidden_pages() {
        let list: PaginationItemList = [
            PaginationItem::new_page(1),
            PaginationItem::new_ellipsis(hidden(2..4)),
            PaginationItem::new_page(4),
        ]
        .into_iter()
        .collect();

        assert!(list.contains_page(1));
        assert!(list.contains_page(4));
        assert!(!list.contains_page(2));
        assert!(!list.contains_page(3));
        assert!(!list.contains_page(99));
    }

    #[test]
    fn test_page_slot_count_and_ellipsis_count() {
        let list: PaginationItemList = [
            PaginationItem::new_page(1),
            PaginationItem::new_ellipsis(hidden(2..4)),
            PaginationItem::new_page(4),
            PaginationItem::new_page(5),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.page_slot_count(), 3);
        assert_eq!(list.ellipsis_count(), 1);
    }

    #[test]
    fn test_display_renders_like_a_ui() {
        let list: PaginationItemList = [
            PaginationItem::new_page(1),
            PaginationItem::new_ellipsis(hidden(2..7)),
            PaginationItem::new_page(7),
            PaginationItem::new_page(8),
            PaginationItem::new_page(9),
            PaginationItem::new_ellipsis(hidden(10..15)),
            PaginationItem::new_page(15),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.to_string(), "1 … 7 8 9 … 15");
    }

    #[test]
    fn test_debug_fmt_is_compact() {
        let item = PaginationItem::new_page(7);
        assert_eq!(format!("{item:?}"), "Page(7)");

        let item = PaginationItem::new_ellipsis(smallvec![page(2), page(3), page(4)]);
        assert_eq!(format!("{item:?}"), "Ellipsis[2, 3, 4]");

        let list: PaginationItemList =
            [PaginationItem::new_page(1), PaginationItem::new_ellipsis(hidden(2..4))]
                .into_iter()
                .collect();
        assert_eq!(format!("{list:?}"), "[Page(1), Ellipsis[2, 3]]");
    }

    #[test]
    fn test_list_deref_and_iteration() {
        let list: PaginationItemList = [
            PaginationItem::new_page(1),
            PaginationItem::new_page(2),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.len(), 2);
        assert!(list.iter().all(PaginationItem::is_page));

        let mut seen = 0;
        for item in &list {
            assert!(item.is_page());
            seen += 1;
        }
        assert_eq!(seen, 2);
    }
}
