use serde::Deserialize;

use crate::time::TimeStamp;

/// One `[[entries]]` record of the month file.
///
/// The day is just the day of the month, the month and year come from
/// the `[general]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Entry {
    day: usize,
    start: TimeStamp,
    end: TimeStamp,
    location: String,
}

impl Entry {
    pub fn day(&self) -> usize {
        self.day
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
}
