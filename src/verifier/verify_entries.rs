use thiserror::Error;

use crate::time::{Date, TimeStamp};
use crate::timesheet::{TimeSheet, MAX_LOCATION_LEN};
use crate::verifier::Verifier;

pub struct VerifyEntries;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidEntry {
    #[error("{date}: the end time {end} must be after the start time {start} on the same day")]
    EndNotAfterStart {
        date: Date,
        start: TimeStamp,
        end: TimeStamp,
    },
    #[error("{date}: the location must not be empty")]
    EmptyLocation { date: Date },
    #[error("{date}: the location `{location}` is longer than {MAX_LOCATION_LEN} characters")]
    LocationTooLong { date: Date, location: String },
    #[error("{date}: the entry does not belong to {year:04}-{month:02}")]
    OutsideOfMonth {
        date: Date,
        month: crate::time::Month,
        year: crate::time::Year,
    },
}

impl Verifier for VerifyEntries {
    type Error = InvalidEntry;
    type Errors = Vec<Self::Error>;

    fn verify(&self, sheet: &TimeSheet) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();

        for entry in sheet.entries() {
            let date = entry.date();

            // overnight entries are rejected as well, the table covers
            // a single day per row
            if entry.end() <= entry.start() {
                errors.push(InvalidEntry::EndNotAfterStart {
                    date,
                    start: entry.start(),
                    end: entry.end(),
                });
            }

            if entry.location().is_empty() {
                errors.push(InvalidEntry::EmptyLocation { date });
            } else if entry.location().chars().count() > MAX_LOCATION_LEN {
                errors.push(InvalidEntry::LocationTooLong {
                    date,
                    location: entry.location().to_string(),
                });
            }

            if date.month() != sheet.month() || date.year() != sheet.year() {
                errors.push(InvalidEntry::OutsideOfMonth {
                    date,
                    month: sheet.month(),
                    year: sheet.year(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::time::{Month, Year};
    use crate::timesheet::WorkEntry;
    use crate::{date, time_stamp};

    fn sheet_with(entries: Vec<WorkEntry>) -> TimeSheet {
        let mut sheet = TimeSheet::new(
            "Erika Musterfrau",
            "DE02120300000000202051".parse().unwrap(),
            Month::June,
            Year::new(2025),
            true,
        );

        for entry in entries {
            sheet.push_entry(entry).unwrap();
        }

        sheet
    }

    #[test]
    fn test_valid_entries_pass() {
        let sheet = sheet_with(vec![
            WorkEntry::new(date!(2025:06:02), time_stamp!(09:00), time_stamp!(17:30), "workshop"),
            WorkEntry::new(date!(2025:06:03), time_stamp!(13:00), time_stamp!(15:00), "lab"),
        ]);

        assert_eq!(VerifyEntries.verify(&sheet), Ok(()));
    }

    #[test]
    fn test_end_must_be_after_start() {
        let sheet = sheet_with(vec![WorkEntry::new(
            date!(2025:06:02),
            time_stamp!(17:00),
            time_stamp!(09:00),
            "workshop",
        )]);

        assert_eq!(
            VerifyEntries.verify(&sheet),
            Err(vec![InvalidEntry::EndNotAfterStart {
                date: date!(2025:06:02),
                start: time_stamp!(17:00),
                end: time_stamp!(09:00),
            }])
        );
    }

    #[test]
    fn test_zero_length_entries_are_rejected() {
        let sheet = sheet_with(vec![WorkEntry::new(
            date!(2025:06:02),
            time_stamp!(12:00),
            time_stamp!(12:00),
            "workshop",
        )]);

        assert!(VerifyEntries.verify(&sheet).is_err());
    }

    #[test]
    fn test_location_limits() {
        let sheet = sheet_with(vec![
            WorkEntry::new(date!(2025:06:02), time_stamp!(09:00), time_stamp!(10:00), ""),
            WorkEntry::new(
                date!(2025:06:03),
                time_stamp!(09:00),
                time_stamp!(10:00),
                "a".repeat(MAX_LOCATION_LEN + 1),
            ),
            WorkEntry::new(
                date!(2025:06:04),
                time_stamp!(09:00),
                time_stamp!(10:00),
                "a".repeat(MAX_LOCATION_LEN),
            ),
        ]);

        let errors = VerifyEntries.verify(&sheet).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], InvalidEntry::EmptyLocation {
            date: date!(2025:06:02)
        });
        assert!(matches!(errors[1], InvalidEntry::LocationTooLong { .. }));
    }

    #[test]
    fn test_entries_must_be_in_the_period() {
        let sheet = sheet_with(vec![WorkEntry::new(
            date!(2025:07:01),
            time_stamp!(09:00),
            time_stamp!(10:00),
            "workshop",
        )]);

        assert_eq!(
            VerifyEntries.verify(&sheet),
            Err(vec![InvalidEntry::OutsideOfMonth {
                date: date!(2025:07:01),
                month: Month::June,
                year: Year::new(2025),
            }])
        );
    }
}
