//! Procedural map-pin icon renderer.
//!
//! The pin is painted as a fixed stack of filled shapes on a transparent
//! canvas, back to front, then encoded as PNG.

mod config;
mod geometry;
mod layers;
mod output;

pub use config::{RenderConfig, DEFAULT_OUTPUT, DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH};
pub use geometry::{PinGeometry, ARC_STEP_DEGREES, GRADIENT_RINGS};
pub use layers::{build_layers, Layer, LayerKind};
pub use output::{encode_png, png_data_uri, save_png};

use image::RgbaImage;
use raster::{Canvas, RasterError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pin width must be within {min}..={max}, got {width}")]
    InvalidWidth { width: u32, min: u32, max: u32 },
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Paint every pin layer onto a fresh canvas.
pub fn render(config: &RenderConfig) -> Result<RgbaImage> {
    config.validate()?;
    let geometry = PinGeometry::from_width(config.width);
    let mut canvas = Canvas::new(geometry.width, geometry.height, config.mode)?;
    for layer in build_layers(&geometry, &config.palette) {
        canvas.fill(&layer.shape, layer.color)?;
        log::debug!("painted {:?}", layer.kind);
    }
    Ok(canvas.to_image())
}

/// Render and write the PNG to `config.output`.
pub fn render_to_file(config: &RenderConfig) -> Result<PathBuf> {
    let img = render(config)?;
    save_png(&img, &config.output)?;
    Ok(config.output.clone())
}
