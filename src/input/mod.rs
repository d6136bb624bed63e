mod config;
mod settings;

pub mod toml_input;

pub use config::{Config, ConfigBuilder};
pub use settings::{QuickUse, Settings, MAX_QUICK_USE};
