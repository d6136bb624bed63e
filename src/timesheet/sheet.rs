use std::time::Duration;

use thiserror::Error;

use crate::time::{Month, Year};
use crate::timesheet::{Iban, WorkEntry};

/// The table on the template has room for exactly this many rows.
pub const MAX_ENTRIES: usize = 22;

/// A finalized month of work entries together with the header fields
/// that are printed above the table.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSheet {
    employee_name: String,
    iban: Iban,
    month: Month,
    year: Year,
    decorated_template: bool,
    entries: Vec<WorkEntry>,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("the timesheet table has room for {MAX_ENTRIES} entries")]
pub struct TooManyEntries;

impl TimeSheet {
    pub fn new(
        employee_name: impl Into<String>,
        iban: Iban,
        month: Month,
        year: Year,
        decorated_template: bool,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            iban,
            month,
            year,
            decorated_template,
            entries: Vec::new(),
        }
    }

    /// Appends an entry at the bottom of the table.
    ///
    /// The insertion order is the render order, entries are never
    /// reordered. Appending to a full table is refused.
    pub fn push_entry(&mut self, entry: WorkEntry) -> Result<(), TooManyEntries> {
        if self.entries.len() >= MAX_ENTRIES {
            return Err(TooManyEntries);
        }

        self.entries.push(entry);
        Ok(())
    }

    pub fn remove_entry(&mut self, index: usize) -> WorkEntry {
        self.entries.remove(index)
    }

    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn iban(&self) -> &Iban {
        &self.iban
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn decorated_template(&self) -> bool {
        self.decorated_template
    }

    pub fn entries(&self) -> impl Iterator<Item = &WorkEntry> {
        self.entries.iter()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// The sum of all work durations, with breaks already deducted.
    pub fn total_work_duration(&self) -> Duration {
        self.entries.iter().map(|entry| entry.work_duration()).sum()
    }
}
