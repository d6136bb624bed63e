use core::fmt;
use std::str::FromStr;

use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

/// A structurally validated IBAN.
///
/// The account number is stored without spaces and displayed in the
/// usual blocks of four. Only the shape is checked (two letters, two
/// check digits, then the grouped digit blocks), not the check digits
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban(String);

#[derive(Debug, Clone, Error, PartialEq)]
#[error("`{string}` does not look like a valid IBAN")]
pub struct InvalidIban {
    string: String,
}

impl Iban {
    // two letters, two check digits, four blocks of four digits and at
    // most two trailing digits (a german IBAN has all 18)
    fn is_structurally_valid(normalized: &str) -> bool {
        // byte index 2 may land inside a multi-byte char
        let Some((country, rest)) = normalized.split_at_checked(2) else {
            return false;
        };

        if !country.chars().all(|c| c.is_ascii_uppercase()) {
            return false;
        }

        (18..=20).contains(&rest.len()) && rest.chars().all(|c| c.is_ascii_digit())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Iban {
    type Err = InvalidIban;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let normalized: String = string
            .trim()
            .chars()
            .filter(|c| *c != ' ')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if !Self::is_structurally_valid(&normalized) {
            return Err(InvalidIban {
                string: string.to_string(),
            });
        }

        Ok(Self(normalized))
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                f.write_str(" ")?;
            }

            write!(f, "{}", c)?;
        }

        Ok(())
    }
}

impl<'de> Deserialize<'de> for Iban {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for Iban {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_ibans() {
        assert!("DE02120300000000202051".parse::<Iban>().is_ok());
        assert!("DE02 1203 0000 0000 2020 51".parse::<Iban>().is_ok());
        // lowercase and stray spaces are normalized away
        assert!(" de02120300000000202051 ".parse::<Iban>().is_ok());
    }

    #[test]
    fn test_invalid_ibans() {
        assert!("".parse::<Iban>().is_err());
        assert!("DE021203".parse::<Iban>().is_err());
        assert!("D202120300000000202051".parse::<Iban>().is_err());
        assert!("DE0212030000000020205A".parse::<Iban>().is_err());
        // three trailing digits after the last full block
        assert!("DE021203000000002020511".parse::<Iban>().is_err());
    }

    #[test]
    fn test_multi_byte_input_is_rejected() {
        assert!("€12345678901234567890".parse::<Iban>().is_err());
        assert!("ä".parse::<Iban>().is_err());
        assert!("ДЕ02120300000000202051".parse::<Iban>().is_err());
    }

    #[test]
    fn test_display_groups_of_four() {
        let iban: Iban = "de02 1203 0000 0000 2020 51".parse().unwrap();
        assert_eq!(iban.to_string(), "DE02 1203 0000 0000 2020 51");
        assert_eq!(iban.as_str(), "DE02120300000000202051");
    }
}
