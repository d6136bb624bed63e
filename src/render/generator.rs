use std::path::Path;

use log::{debug, info};

use crate::input::Config;
use crate::render::{ImageRender, Layout};
use crate::utils;

pub struct ImageGenerator<'a> {
    config: &'a Config,
}

impl<'a> ImageGenerator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn generate(self, outpath: impl AsRef<Path>) -> anyhow::Result<()> {
        let sheet = self.config.sheet();

        info!("laying out {} entries", sheet.entry_count());
        let fields = Layout::DEFAULT.lay_out(sheet);
        debug!("placed {} text fields", fields.len());

        let mut renderer = ImageRender::new(
            self.config.template_path(),
            self.config.font_path(),
            fields,
        )?;

        renderer.magick_path(self.config.magick_path());

        if let Some(dir) = self.config.preserve_dir() {
            renderer.preserve_dir(dir);
        }

        info!("rendering the document");
        utils::write(outpath, renderer.render()?)?;
        info!("Done");

        Ok(())
    }
}
