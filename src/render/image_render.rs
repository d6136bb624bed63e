use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use tempfile::TempDir;
use thiserror::Error;

use crate::render::TextField;
use crate::utils;

/// The resolution the final document is scaled down to.
const TARGET_SIZE: &str = "1218x1848";

#[derive(Debug, Error)]
pub enum RenderingError {
    #[error(transparent)]
    RunError(io::Error),
    #[error(transparent)]
    ReadOutputFile(io::Error),
}

/// Renders placed text onto a template image and converts the result
/// into the final pdf, both through ImageMagick.
pub struct ImageRender {
    /// Path to the ImageMagick binary.
    magick_path: PathBuf,
    /// Temporary directory holding the template, font and intermediate image.
    working_dir: TempDir,
    preserve_dir: Option<PathBuf>,
    fields: Vec<TextField>,
}

fn escape_draw_text(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

impl ImageRender {
    /// Stages the template and font in a fresh working directory.
    ///
    /// Fails early when either asset is missing or unreadable, before
    /// anything has been drawn.
    pub fn new(
        template: impl AsRef<Path>,
        font: impl AsRef<Path>,
        fields: Vec<TextField>,
    ) -> anyhow::Result<Self> {
        let working_dir = TempDir::new()?;

        let template_bytes = utils::read(&template).with_context(|| {
            format!(
                "failed to read the template image `{}`",
                template.as_ref().display()
            )
        })?;
        let font_bytes = utils::read(&font).with_context(|| {
            format!("failed to read the font `{}`", font.as_ref().display())
        })?;

        utils::write(working_dir.path().join("template.png"), template_bytes)?;
        utils::write(working_dir.path().join("font.ttf"), font_bytes)?;

        Ok(Self {
            magick_path: "magick".into(),
            working_dir,
            preserve_dir: None,
            fields,
        })
    }

    pub fn magick_path(&mut self, magick_path: impl Into<PathBuf>) -> &mut Self {
        self.magick_path = magick_path.into();
        self
    }

    pub fn preserve_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(path.into());
        self
    }

    fn run(&self, cmd: &mut Command, what: &str) -> anyhow::Result<()> {
        cmd.current_dir(self.working_dir.path());

        let output = cmd.output().map_err(RenderingError::RunError)?;

        if !output.status.success() {
            return Err(anyhow::anyhow!(
                "{} failed with status: {:?}, stdout: {}, stderr: {}",
                what,
                output.status.code(),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            ));
        }

        Ok(())
    }

    /// Keeps the working directory around for a retry and says where.
    fn preserve(self, error: anyhow::Error) -> anyhow::Error {
        if let Some(path) = &self.preserve_dir {
            if let Err(copy_error) = utils::create_dir_all(path).map_err(anyhow::Error::from).and_then(|_| {
                fs_extra::dir::copy(
                    self.working_dir.path(),
                    path,
                    &fs_extra::dir::CopyOptions {
                        overwrite: true,
                        skip_exist: false,
                        ..Default::default()
                    },
                )
                .map_err(anyhow::Error::from)
            }) {
                return error.context(format!(
                    "failed to copy `{}` to `{}`: {}",
                    self.working_dir.path().display(),
                    path.display(),
                    copy_error
                ));
            }

            return error.context(format!(
                "the working directory was copied to `{}`",
                path.display()
            ));
        }

        let kept = self.working_dir.keep();
        error.context(format!("the intermediate files are kept in `{}`", kept.display()))
    }

    pub fn render(self) -> anyhow::Result<Vec<u8>> {
        let output_file = self.working_dir.path().join("composed.pdf");

        // first pass: draw every text field onto the template
        let mut draw = Command::new(&self.magick_path);
        draw.arg("template.png")
            .args(["-font", "font.ttf", "-fill", "black"]);

        for field in &self.fields {
            draw.args(["-pointsize", &field.point_size.to_string()]);
            draw.arg("-draw").arg(format!(
                "text {:.1},{:.1} '{}'",
                field.x,
                field.y,
                escape_draw_text(&field.text)
            ));
        }

        draw.arg("composed.png");
        if let Err(error) = self.run(&mut draw, "drawing the text fields") {
            return Err(self.preserve(error));
        }

        // second pass: scale down and convert to the final document
        let mut convert = Command::new(&self.magick_path);
        convert
            .arg("composed.png")
            .args(["-scale", TARGET_SIZE])
            .args(["-compress", "JPEG"])
            .args(["-quality", "90"])
            .arg("composed.pdf");
        if let Err(error) = self.run(&mut convert, "converting the image to a pdf") {
            return Err(self.preserve(error));
        }

        Ok(utils::read(output_file).map_err(RenderingError::ReadOutputFile)?)
    }
}
