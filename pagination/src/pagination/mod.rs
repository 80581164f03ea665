// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pagination window computation.
//!
//! Given `(total, current, window)` the [`calculate_pagination()`] function returns
//! the ordered list of [`PaginationItem`] descriptors a pagination UI should render,
//! collapsing runs of pages into ellipsis markers when the total does not fit in the
//! window. [`sequence()`] and [`page_sequence()`] are the leaf helpers it builds on.

/// Enables [tracing] output for the branch decisions inside this module. This crate
/// installs no subscriber; the host application decides where events go.
pub const DEBUG_PAGINATION_MOD: bool = false;

// Attach.
pub mod calculate_pagination;
pub mod page_sequence;
pub mod pagination_item;

// Re-export.
pub use calculate_pagination::*;
pub use page_sequence::*;
pub use pagination_item::*;
