use core::fmt;
use std::time::Duration;

/// The total-hours convention of the timesheet template: whole hours,
/// a comma, then hundredths of an hour (not clock minutes).
///
/// The fractional part is `(seconds % 3600) / 36`, truncated. Half an
/// hour is `,50`, three minutes are `,05`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalHours(Duration);

impl DecimalHours {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self(duration)
    }
}

impl fmt::Display for DecimalHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.0.as_secs();

        write!(f, "{},{:02}", seconds / 3600, (seconds % 3600) / 36)
    }
}

impl From<Duration> for DecimalHours {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}
