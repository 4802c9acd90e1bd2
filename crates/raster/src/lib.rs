//! Filled-shape rasterization onto an RGBA canvas, backed by `tiny-skia`.

mod canvas;

pub use canvas::Canvas;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("cannot allocate a {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("inverted bounding box ({x0}, {y0}) .. ({x1}, {y1})")]
    InvertedBox { x0: f64, y0: f64, x1: f64, y1: f64 },
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("shape has a non-finite coordinate")]
    NonFinite,
}

pub type Result<T> = std::result::Result<T, RasterError>;
