use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::input::toml_input::MonthFile;
use crate::input::Settings;
use crate::time::Date;
use crate::timesheet::{TimeSheet, WorkEntry};
use crate::utils;

pub struct Config {
    sheet: TimeSheet,
    settings: Settings,
    output: PathBuf,
    assets: PathBuf,
    preserve_dir: Option<PathBuf>,
    magick_path: PathBuf,
}

pub struct ConfigBuilder {
    month_file: MonthFile,
    settings: Settings,
    output_dir: Option<PathBuf>,
    assets: Option<PathBuf>,
    preserve_dir: Option<PathBuf>,
    magick_path: Option<PathBuf>,
}

impl ConfigBuilder {
    fn new(month_file: MonthFile, settings: Settings) -> Self {
        Self {
            month_file,
            settings,
            output_dir: None,
            assets: None,
            preserve_dir: None,
            magick_path: None,
        }
    }

    pub fn output_dir(&mut self, output_dir: impl Into<PathBuf>) -> &mut Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn assets(&mut self, assets: impl Into<PathBuf>) -> &mut Self {
        self.assets = Some(assets.into());
        self
    }

    pub fn preserve_dir(&mut self, preserve_dir: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(preserve_dir.into());
        self
    }

    pub fn magick_path(&mut self, magick_path: impl Into<PathBuf>) -> &mut Self {
        self.magick_path = Some(magick_path.into());
        self
    }

    pub fn build(self) -> anyhow::Result<Config> {
        let general = self.month_file.general();
        let month = general.month();
        let year = general.year();

        let iban = self
            .settings
            .iban()
            .parse()
            .context("the `iban` in the settings file is not usable")?;

        let mut sheet = TimeSheet::new(
            self.settings.name(),
            iban,
            month,
            year,
            self.settings.decorated_template(),
        );

        for entry in self.month_file.entries() {
            let date = Date::new(year, month, entry.day()).with_context(|| {
                format!("entry on day {} of {:04}-{:02}", entry.day(), year, month)
            })?;

            sheet
                .push_entry(WorkEntry::new(
                    date,
                    entry.start(),
                    entry.end(),
                    entry.location(),
                ))
                .with_context(|| format!("too many entries, starting with day {}", entry.day()))?;
        }

        // `job_log_06_25.pdf` for june 2025
        let file_name = format!(
            "job_log_{:02}_{:02}.pdf",
            month.as_usize(),
            year.as_usize() % 100
        );

        let output = self
            .output_dir
            .unwrap_or_else(|| PathBuf::from("."))
            .join(file_name);

        Ok(Config {
            sheet,
            settings: self.settings,
            output,
            assets: self.assets.unwrap_or_else(|| PathBuf::from("assets")),
            preserve_dir: self.preserve_dir,
            magick_path: self.magick_path.unwrap_or_else(|| "magick".into()),
        })
    }
}

impl Config {
    pub fn try_from_files(
        month: impl AsRef<Path>,
        settings: impl AsRef<Path>,
    ) -> anyhow::Result<ConfigBuilder> {
        let month_file: MonthFile = utils::toml_from_reader(
            File::open(&month)
                .with_context(|| format!("failed to open `{}`", month.as_ref().display()))?,
        )?;
        let settings = Settings::load(settings)?;

        Ok(ConfigBuilder::new(month_file, settings))
    }

    pub fn from_parts(month_file: MonthFile, settings: Settings) -> ConfigBuilder {
        ConfigBuilder::new(month_file, settings)
    }

    pub fn sheet(&self) -> &TimeSheet {
        &self.sheet
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// The background image for the selected template variant.
    pub fn template_path(&self) -> PathBuf {
        if self.sheet.decorated_template() {
            self.assets.join("template.png")
        } else {
            self.assets.join("template_empty.png")
        }
    }

    pub fn font_path(&self) -> PathBuf {
        self.assets.join("RobotoMono.ttf")
    }

    pub fn preserve_dir(&self) -> Option<&Path> {
        self.preserve_dir.as_deref()
    }

    pub fn magick_path(&self) -> &Path {
        &self.magick_path
    }
}
