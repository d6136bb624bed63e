use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::time::{Month, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("the day {day} does not exist in {year:04}-{month:02}")]
    InvalidDay { year: Year, month: Month, day: usize },
    #[error("expected a date like `2025-01-31`, got `{string}`")]
    InvalidFormat { string: String },
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let invalid_format = || InvalidDate::InvalidFormat {
            string: string.to_string(),
        };

        let [year, month, day] = string.split_exact::<3>("-");

        let parse = |part: Option<&str>| {
            part.and_then(|v| v.parse::<usize>().ok())
                .ok_or_else(invalid_format)
        };

        let month = Month::try_from(parse(month)?).map_err(|_| invalid_format())?;

        Self::new(parse(year)?, month, parse(day)?)
    }
}

impl TryFrom<String> for Date {
    type Error = InvalidDate;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_new_rejects_invalid_days() {
        assert!(Date::new(2025, Month::February, 29).is_err());
        assert!(Date::new(2024, Month::February, 29).is_ok());
        assert!(Date::new(2025, Month::April, 31).is_err());
        assert!(Date::new(2025, Month::April, 0).is_err());

        assert_eq!(
            Date::new(33, Month::February, 30).unwrap_err().to_string(),
            "the day 30 does not exist in 0033-02"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("2025-06-15".parse::<Date>(), Ok(date!(2025:06:15)));
        assert_eq!("2024-02-29".parse::<Date>(), Ok(date!(2024:02:29)));

        assert!("2025-02-29".parse::<Date>().is_err());
        assert!("2025-13-01".parse::<Date>().is_err());
        assert!("15.06.2025".parse::<Date>().is_err());
        assert!("".parse::<Date>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(date!(2025:06:15).to_string(), "2025-06-15");
        assert_eq!(date!(2025:01:05).to_string(), "2025-01-05");
    }

    #[test]
    fn test_week_day() {
        assert_eq!(date!(2024:01:01).week_day(), WeekDay::Monday);
        assert_eq!(date!(2024:12:25).week_day(), WeekDay::Wednesday);
        assert_eq!(date!(2025:06:15).week_day(), WeekDay::Sunday);
    }
}
