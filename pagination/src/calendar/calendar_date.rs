// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use super::{Month, days_in_month};

pub mod calendar_date_error {
    use super::Month;

    /// Errors that can occur when constructing a [`CalendarDate`].
    ///
    /// [`CalendarDate`]: super::CalendarDate
    #[derive(thiserror::Error, Debug, miette::Diagnostic, Copy, Clone, PartialEq, Eq)]
    pub enum CalendarDateError {
        #[error("📅 day {day} is out of range for {month} {year}, which has {day_count} days")]
        InvalidDayOfMonth {
            year: i32,
            month: Month,
            day: u8,
            day_count: u8,
        },

        #[error("📅 month number {month_number} is out of range, expected 1 through 12")]
        InvalidMonthNumber { month_number: u8 },
    }
}
pub use calendar_date_error::*;

/// A date on the Gregorian calendar. Immutable value type; the rollover operations
/// return a fresh date instead of mutating.
///
/// Construction is validated ([`CalendarDate::try_new`]) because rollover arithmetic
/// is only meaningful starting from a real date. Deserialization routes through the
/// same check, so an invalid date cannot arrive over the wire either. The fields
/// stay public for literal construction, which is trusted to hold a real date.
///
/// Once constructed, every operation is total: rolling past a month or year boundary
/// carries over correctly, including leap day handling.
///
/// Derived ordering is chronological (year, then month, then day).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCalendarDate")]
pub struct CalendarDate {
    pub year: i32,
    pub month: Month,
    pub day: u8,
}

/// Deserialization mirror of [`CalendarDate`], so incoming data passes through
/// [`CalendarDate::try_new`] before a date materializes.
#[derive(Deserialize)]
struct UncheckedCalendarDate {
    year: i32,
    month: Month,
    day: u8,
}

impl TryFrom<UncheckedCalendarDate> for CalendarDate {
    type Error = CalendarDateError;

    fn try_from(unchecked: UncheckedCalendarDate) -> Result<CalendarDate, CalendarDateError> {
        CalendarDate::try_new(unchecked.year, unchecked.month, unchecked.day)
    }
}

impl Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({self})")
    }
}

impl Display for CalendarDate {
    /// Renders as `YYYY-MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.as_number(),
            self.day
        )
    }
}

impl CalendarDate {
    /// Validated construction.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarDateError::InvalidDayOfMonth`] when `day` is 0 or exceeds
    /// the length of `month` in `year`.
    pub fn try_new(year: i32, month: Month, day: u8) -> Result<CalendarDate, CalendarDateError> {
        let day_count = days_in_month(year, month);
        if day == 0 || day > day_count {
            return Err(CalendarDateError::InvalidDayOfMonth {
                year,
                month,
                day,
                day_count,
            });
        }
        Ok(CalendarDate { year, month, day })
    }

    /// Like [`CalendarDate::try_new`], taking the month as its 1-based calendar
    /// number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarDateError::InvalidMonthNumber`] when `month_number` is
    /// outside `1..=12`, otherwise the same errors as [`CalendarDate::try_new`].
    pub fn try_from_ymd(
        year: i32,
        month_number: u8,
        day: u8,
    ) -> Result<CalendarDate, CalendarDateError> {
        match Month::from_repr(month_number) {
            Some(month) => Self::try_new(year, month, day),
            None => Err(CalendarDateError::InvalidMonthNumber { month_number }),
        }
    }

    /// The following day, rolling into the next month and year as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use r3bl_pagination::{CalendarDate, Month};
    ///
    /// let leap_day = CalendarDate::try_new(2024, Month::February, 28).unwrap().next_day();
    /// assert_eq!(leap_day.to_string(), "2024-02-29");
    /// assert_eq!(leap_day.next_day().to_string(), "2024-03-01");
    /// ```
    #[must_use]
    pub fn next_day(&self) -> CalendarDate {
        if self.day < days_in_month(self.year, self.month) {
            return CalendarDate {
                day: self.day + 1,
                ..*self
            };
        }
        let month = self.month.next();
        let year = if month == Month::January {
            self.year.saturating_add(1)
        } else {
            self.year
        };
        CalendarDate { year, month, day: 1 }
    }

    /// The preceding day, rolling back into the previous month and year as needed.
    #[must_use]
    pub fn previous_day(&self) -> CalendarDate {
        if self.day > 1 {
            return CalendarDate {
                day: self.day - 1,
                ..*self
            };
        }
        let month = self.month.previous();
        let year = if month == Month::December {
            self.year.saturating_sub(1)
        } else {
            self.year
        };
        CalendarDate {
            year,
            month,
            day: days_in_month(year, month),
        }
    }

    /// Same day one month later. The day is clamped to the length of the target
    /// month, so Jan 31 rolls to Feb 28 (or Feb 29 in a leap year).
    #[must_use]
    pub fn next_month(&self) -> CalendarDate {
        let month = self.month.next();
        let year = if month == Month::January {
            self.year.saturating_add(1)
        } else {
            self.year
        };
        CalendarDate {
            year,
            month,
            day: self.day.min(days_in_month(year, month)),
        }
    }

    /// Same day one month earlier, with the day clamped like [`CalendarDate::next_month`].
    #[must_use]
    pub fn previous_month(&self) -> CalendarDate {
        let month = self.month.previous();
        let year = if month == Month::December {
            self.year.saturating_sub(1)
        } else {
            self.year
        };
        CalendarDate {
            year,
            month,
            day: self.day.min(days_in_month(year, month)),
        }
    }
}
