// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Calendar date arithmetic: month lengths, leap years, and day/month rollover.
//!
//! This is the smaller companion to the pagination calculator, shared by date picker
//! components. Like the calculator it is pure arithmetic over immutable value types.
//! There is no time-of-day, no timezone, and no formatting beyond [`Display`]
//! implementations.
//!
//! [`Display`]: std::fmt::Display

// Attach.
pub mod calendar_date;
pub mod month;

// Re-export.
pub use calendar_date::*;
pub use month::*;
