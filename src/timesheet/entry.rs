use std::time::Duration;

use serde::Deserialize;

use crate::time::{Date, TimeStamp};

/// The maximum length of the location/description column.
pub const MAX_LOCATION_LEN: usize = 30;

/// One row of the timesheet: a single stretch of work on one day.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WorkEntry {
    date: Date,
    start: TimeStamp,
    end: TimeStamp,
    location: String,
}

/// The legally required break for a raw working span.
///
/// More than nine hours require a 45 minute break, more than six hours
/// a 30 minute break, anything below that none.
#[must_use]
pub fn legal_break(span: Duration) -> Duration {
    if span > Duration::from_hours(9) {
        Duration::from_mins(45)
    } else if span > Duration::from_hours(6) {
        Duration::from_mins(30)
    } else {
        Duration::ZERO
    }
}

impl WorkEntry {
    pub fn new(date: Date, start: TimeStamp, end: TimeStamp, location: impl Into<String>) -> Self {
        Self {
            date,
            start,
            end,
            location: location.into(),
        }
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn start(&self) -> TimeStamp {
        self.start
    }

    pub fn end(&self) -> TimeStamp {
        self.end
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// The raw span between start and end, before the break is deducted.
    ///
    /// The verifier guarantees that `end` is strictly after `start`, so
    /// there is nothing to wrap around here.
    pub fn span(&self) -> Duration {
        self.end.elapsed(&self.start)
    }

    /// How long the person has worked, with the legal break deducted.
    pub fn work_duration(&self) -> Duration {
        self.span() - self.break_duration()
    }

    pub fn break_duration(&self) -> Duration {
        legal_break(self.span())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::{date, time_stamp};

    fn entry(start: TimeStamp, end: TimeStamp) -> WorkEntry {
        WorkEntry::new(date!(2025:06:02), start, end, "workshop")
    }

    #[test]
    fn test_no_break_up_to_six_hours() {
        assert_eq!(legal_break(Duration::from_mins(0)), Duration::ZERO);
        assert_eq!(legal_break(Duration::from_mins(359)), Duration::ZERO);
        assert_eq!(legal_break(Duration::from_mins(360)), Duration::ZERO);
    }

    #[test]
    fn test_half_hour_break_up_to_nine_hours() {
        assert_eq!(legal_break(Duration::from_mins(361)), Duration::from_mins(30));
        assert_eq!(legal_break(Duration::from_mins(510)), Duration::from_mins(30));
        assert_eq!(legal_break(Duration::from_mins(540)), Duration::from_mins(30));
    }

    #[test]
    fn test_long_break_above_nine_hours() {
        assert_eq!(legal_break(Duration::from_mins(541)), Duration::from_mins(45));
        assert_eq!(legal_break(Duration::from_mins(600)), Duration::from_mins(45));
    }

    #[test]
    fn test_work_and_break_sum_to_span() {
        for minutes in 0..24 * 60 {
            let span = Duration::from_mins(minutes);
            let expected_break = match minutes {
                0..=360 => 0,
                361..=540 => 30,
                _ => 45,
            };

            assert_eq!(legal_break(span), Duration::from_mins(expected_break));
            assert_eq!((span - legal_break(span)) + legal_break(span), span);
        }
    }

    #[test]
    fn test_work_duration() {
        // 09:00 to 17:30 is a 510 minute span, so a 30 minute break applies
        let long = entry(time_stamp!(09:00), time_stamp!(17:30));
        assert_eq!(long.work_duration(), Duration::from_mins(480));
        assert_eq!(long.break_duration(), Duration::from_mins(30));

        // 08:00 to 18:00 is a 600 minute span, so a 45 minute break applies
        let longer = entry(time_stamp!(08:00), time_stamp!(18:00));
        assert_eq!(longer.work_duration(), Duration::from_mins(555));
        assert_eq!(longer.break_duration(), Duration::from_mins(45));

        // short spans are not reduced at all
        let short = entry(time_stamp!(13:15), time_stamp!(17:00));
        assert_eq!(short.work_duration(), Duration::from_mins(225));
        assert_eq!(short.break_duration(), Duration::ZERO);
    }
}
