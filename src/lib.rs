mod utils;

pub mod input;
pub mod render;
pub mod time;
pub mod timesheet;
pub mod verifier;

use std::fs;

use log::{error, info};

use crate::input::Config;
use crate::render::ImageGenerator;
use crate::time::DecimalHours;
use crate::verifier::{DefaultVerifier, Verifier};

/// Validates the sheet and renders it to `config.output()`.
///
/// Any validation violation refuses the export, nothing is written in
/// that case.
pub fn generate_job_log(config: &Config) -> anyhow::Result<()> {
    let sheet = config.sheet();

    if let Err(errors) = DefaultVerifier.verify(sheet) {
        for error in &errors {
            error!("{}", error);
        }

        anyhow::bail!("refusing to export: the sheet has {} problem(s)", errors.len());
    }

    info!(
        "total work time: {} h",
        DecimalHours::new(sheet.total_work_duration())
    );

    let output = config.output();
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    ImageGenerator::new(config).generate(output)?;

    Ok(())
}
