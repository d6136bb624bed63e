use std::cmp;
use std::str::FromStr;
use std::time::Duration;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::utils::StrExt;

#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{:02}:{:02}", hour, minute)]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Time is not valid: {hour:02}:{minute:02}")]
pub struct InvalidTime {
    hour: u8,
    minute: u8,
}

impl TimeStamp {
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    #[doc(hidden)]
    #[must_use]
    pub const fn new_const(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    // the maximum TimeStamp is 23:59, which would be 23 * 60 + 59 = 1439
    #[must_use]
    pub const fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// The absolute difference between two times on the same day.
    pub fn elapsed(&self, other: &Self) -> Duration {
        let minutes = cmp::max(self.as_minutes(), other.as_minutes())
            - cmp::min(self.as_minutes(), other.as_minutes());

        Duration::from_secs(minutes as u64 * 60)
    }
}

impl From<TimeStamp> for Duration {
    fn from(stamp: TimeStamp) -> Self {
        Duration::from_secs(stamp.as_minutes() as u64 * 60)
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseTimeError {
    #[error("expected a time like `08:30`, got `{string}`")]
    InvalidFormat { string: String },
    #[error(transparent)]
    InvalidTime(#[from] InvalidTime),
}

impl FromStr for TimeStamp {
    type Err = ParseTimeError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let invalid_format = || ParseTimeError::InvalidFormat {
            string: string.to_string(),
        };

        let [hour, minute] = string.split_exact::<2>(":");

        let hour = hour
            .and_then(|v| v.parse().ok())
            .ok_or_else(invalid_format)?;
        // the minutes are optional, `8:` and `8` are read as `08:00`
        let minute = match minute {
            None | Some("") => 0,
            Some(v) => v.parse().map_err(|_| invalid_format())?,
        };

        Ok(Self::new(hour, minute)?)
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for TimeStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::time_stamp;

    #[test]
    fn test_new() {
        assert!(TimeStamp::new(23, 59).is_ok());
        assert!(TimeStamp::new(24, 0).is_err());
        assert!(TimeStamp::new(12, 60).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("08:30".parse(), Ok(time_stamp!(08:30)));
        assert_eq!("8:30".parse(), Ok(time_stamp!(08:30)));
        assert_eq!("8".parse(), Ok(time_stamp!(08:00)));
        assert_eq!("23:59".parse(), Ok(time_stamp!(23:59)));

        assert!("24:00".parse::<TimeStamp>().is_err());
        assert!("12:60".parse::<TimeStamp>().is_err());
        assert!("".parse::<TimeStamp>().is_err());
        assert!("ab:cd".parse::<TimeStamp>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(time_stamp!(08:05).to_string(), "08:05");
        assert_eq!(time_stamp!(23:59).to_string(), "23:59");
    }

    #[test]
    fn test_elapsed() {
        assert_eq!(
            time_stamp!(17:30).elapsed(&time_stamp!(09:00)),
            Duration::from_secs(510 * 60)
        );
        assert_eq!(
            time_stamp!(09:00).elapsed(&time_stamp!(17:30)),
            Duration::from_secs(510 * 60)
        );
        assert_eq!(
            time_stamp!(12:00).elapsed(&time_stamp!(12:00)),
            Duration::ZERO
        );
    }
}
