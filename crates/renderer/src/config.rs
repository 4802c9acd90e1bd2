use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use types::{PaintMode, PinPalette};

use crate::{RenderError, Result};

pub const DEFAULT_WIDTH: u32 = 200;
/// Smallest width whose head-center pixel shows the opaque center dot.
///
/// The head center sits inside the highlight ellipse up to a head radius of
/// 11 (width 35) and only just clears it at radius 12; from width 64 it is
/// clear by more than a third of a pixel.
pub const MIN_WIDTH: u32 = 64;
pub const MAX_WIDTH: u32 = 8192;
pub const DEFAULT_OUTPUT: &str = "modern-pin.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Canvas width in pixels; the height follows as `round(1.4 * width)`.
    pub width: u32,
    pub mode: PaintMode,
    pub palette: PinPalette,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            mode: PaintMode::default(),
            palette: PinPalette::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            return Err(RenderError::InvalidWidth {
                width: self.width,
                min: MIN_WIDTH,
                max: MAX_WIDTH,
            });
        }
        Ok(())
    }
}
