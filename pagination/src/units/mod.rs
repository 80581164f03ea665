// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Newtypes for the quantities the pagination calculator works with.
//!
//! [`calculate_pagination()`] takes three integers. Bare `usize` parameters make it
//! easy to transpose arguments at the call site, so each quantity gets its own type:
//!
//! - [`PageNumber`]: 1-based position of a page.
//! - [`PageCount`]: how many pages exist in total.
//! - [`WindowSize`]: how many page-number slots fit on screen.
//!
//! All arithmetic on these types saturates at both numeric bounds, so overshooting
//! either end clamps instead of panicking.
//!
//! [`calculate_pagination()`]: crate::calculate_pagination()

// Attach.
pub mod page_count;
pub mod page_number;
pub mod window_size;

// Re-export.
pub use page_count::*;
pub use page_number::*;
pub use window_size::*;
