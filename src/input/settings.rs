use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils;

/// At most this many locations are kept in the quick-use history.
pub const MAX_QUICK_USE: usize = 10;

/// The per-user settings blob, read once at startup and written back
/// after a successful export.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    name: String,
    iban: String,
    decorated_template: bool,
    quick_use: Vec<QuickUse>,
}

/// One entry of the frequency-ranked location history.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct QuickUse {
    location: String,
    count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: String::new(),
            iban: String::new(),
            decorated_template: true,
            quick_use: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads the settings, falling back to the defaults when the file
    /// does not exist yet.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        match utils::read_to_string(path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(error.into()),
        }
    }

    /// Writes the settings back, keeping only the most used locations.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let mut settings = self.clone();
        settings.quick_use = settings.ranked_quick_use();
        settings.quick_use.truncate(MAX_QUICK_USE);

        utils::write(path, serde_json::to_string_pretty(&settings)?)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn decorated_template(&self) -> bool {
        self.decorated_template
    }

    /// Counts one more use of `location`.
    pub fn record_use(&mut self, location: &str) {
        if let Some(entry) = self
            .quick_use
            .iter_mut()
            .find(|entry| entry.location == location)
        {
            entry.count += 1;
        } else {
            self.quick_use.push(QuickUse {
                location: location.to_string(),
                count: 1,
            });
        }
    }

    /// The locations ordered by how often they have been used, most
    /// used first. Ties keep their previous order.
    #[must_use]
    fn ranked_quick_use(&self) -> Vec<QuickUse> {
        let mut ranked = self.quick_use.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    pub fn ranked_locations(&self) -> Vec<&str> {
        let mut indices: Vec<usize> = (0..self.quick_use.len()).collect();
        indices.sort_by(|a, b| self.quick_use[*b].count.cmp(&self.quick_use[*a].count));

        indices
            .into_iter()
            .map(|i| self.quick_use[i].location.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_when_file_is_missing() {
        let settings = Settings::load("does/not/exist.json").unwrap();

        assert_eq!(settings, Settings::default());
        assert!(settings.decorated_template());
    }

    #[test]
    fn test_ranking() {
        let mut settings = Settings::default();

        settings.record_use("lab");
        settings.record_use("workshop");
        settings.record_use("workshop");
        settings.record_use("office");

        // `lab` was recorded before `office` and both have one use
        assert_eq!(settings.ranked_locations(), vec!["workshop", "lab", "office"]);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.record_use("workshop");
        settings.record_use("workshop");
        settings.record_use("lab");
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.ranked_locations(), vec!["workshop", "lab"]);
    }

    #[test]
    fn test_save_caps_the_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        for i in 0..(MAX_QUICK_USE + 5) {
            settings.record_use(&format!("location {i}"));
        }
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.ranked_locations().len(), MAX_QUICK_USE);
    }
}
