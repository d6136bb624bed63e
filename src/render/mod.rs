mod generator;
mod image_render;
mod layout;

pub use generator::ImageGenerator;
pub use image_render::{ImageRender, RenderingError};
pub use layout::{FieldSpec, Layout, TextField};
