use serde::Deserialize;

use crate::input::toml_input::{Entry, General};

#[derive(Debug, Clone, Deserialize)]
pub struct MonthFile {
    general: General,
    #[serde(default)]
    entries: Vec<Entry>,
}

impl MonthFile {
    pub fn general(&self) -> &General {
        &self.general
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}
