use core::fmt;

use serde::{Deserialize, Serialize};

use crate::iter_const;
use crate::time::{Month, WeekDay};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
#[serde(from = "usize")]
#[serde(into = "usize")]
pub struct Year(usize);

impl fmt::Display for Year {
    // width and fill flags pass through, `{:04}` pads like on a plain number
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The number of days in the months start_month..end_month of `year`.
const fn days_for_months(year: Year, start_month: Month, end_month: usize) -> usize {
    let mut result = 0;

    iter_const!(for month in start_month.as_usize(),..end_month => {
        result += year.number_of_days_in_month(Month::new(month));
    });

    result
}

impl Year {
    /// The date 0000/01/01 is used as a base date, it was a saturday.
    const BASE_DATE: (Self, Month, usize, WeekDay) =
        (Self(0), Month::January, 1, WeekDay::Saturday);

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        !self.is_common_year()
    }

    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let (year_ref, month_ref, day_ref, week_day_ref) = Self::BASE_DATE;

        // days elapsed between Self::BASE_DATE and (self, month, day)
        let days = {
            let mut days = 0;

            days += days_for_months(*self, month_ref, month.as_usize());
            days += self.days_since(year_ref);
            days += day - day_ref;

            days
        };

        week_day_ref.add_const(days)
    }

    /// Returns the number of days that have passed since the first of january of `other`.
    const fn days_since(&self, other: Self) -> usize {
        debug_assert!(self.as_usize() >= other.as_usize());

        let mut result = 0;
        iter_const!(for year in other.as_usize(),..self.as_usize() => {
            result += Year::new(year).days();
        });

        result
    }
}

impl From<usize> for Year {
    fn from(year: usize) -> Self {
        Self::new(year)
    }
}

impl From<Year> for usize {
    fn from(year: Year) -> Self {
        year.as_usize()
    }
}
