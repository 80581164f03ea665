// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, FromRepr};

/// The twelve months of the Gregorian calendar. Discriminants are the 1-based
/// calendar numbers, so `Month::from_repr(2)` is February and
/// [`Month::as_number`] round-trips through them.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
         Deserialize, Display, EnumIter, FromRepr)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// The 1-based calendar number of this month.
    #[must_use]
    pub fn as_number(&self) -> u8 { *self as u8 }

    /// The following month. December wraps around to January.
    #[must_use]
    pub fn next(&self) -> Month {
        Month::from_repr(self.as_number() + 1).unwrap_or(Month::January)
    }

    /// The preceding month. January wraps around to December.
    #[must_use]
    pub fn previous(&self) -> Month {
        Month::from_repr(self.as_number() - 1).unwrap_or(Month::December)
    }
}

/// Gregorian leap year rule: every 4th year, except centuries, except every 400th
/// year.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month of the given year.
#[must_use]
pub fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}
