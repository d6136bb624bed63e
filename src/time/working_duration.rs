use std::str::FromStr;
use std::time::Duration;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::utils::StrExt;

/// A duration rendered as zero-padded `HH:MM`, like the work time and
/// break time cells on the timesheet.
#[derive(Debug, Copy, Clone, Default, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{:02}:{:02}", hours, minutes)]
pub struct WorkingDuration {
    hours: u8,
    minutes: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Duration is not valid: {hours:02}:{minutes:02}")]
pub struct InvalidWorkingDuration {
    hours: u8,
    minutes: u8,
}

impl WorkingDuration {
    #[must_use]
    pub fn new(hours: u8, minutes: u8) -> Result<Self, InvalidWorkingDuration> {
        if hours > 99 || minutes > 59 {
            return Err(InvalidWorkingDuration { hours, minutes });
        }

        Ok(Self { hours, minutes })
    }

    #[doc(hidden)]
    #[must_use]
    pub const fn new_const(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }

    // the maximum WorkingDuration is 99:59, which would be 99 * 60 + 59 = 5999
    #[must_use]
    pub const fn as_minutes(&self) -> u16 {
        self.hours as u16 * 60 + self.minutes as u16
    }

    pub fn to_duration(&self) -> Duration {
        Duration::from_mins(self.as_minutes() as u64)
    }
}

impl From<WorkingDuration> for Duration {
    fn from(duration: WorkingDuration) -> Self {
        duration.to_duration()
    }
}

impl From<Duration> for WorkingDuration {
    fn from(duration: Duration) -> Self {
        let minutes = duration.as_secs() / 60;

        Self {
            hours: ((minutes / 60) % 100) as u8,
            minutes: (minutes % 60) as u8,
        }
    }
}

impl FromStr for WorkingDuration {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let [hours, minutes] = string.split_exact::<2>(":");

        let parse = |part: Option<&str>| {
            part.and_then(|v| v.parse::<u8>().ok())
                .ok_or_else(|| anyhow::anyhow!("expected a duration like `08:00`, got `{string}`"))
        };

        Ok(Self::new(parse(hours)?, parse(minutes)?)?)
    }
}

impl<'de> Deserialize<'de> for WorkingDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for WorkingDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
