use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use crate::Result;

/// Encode as an RGBA8 PNG.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Write `img` as PNG, replacing any existing file. The parent directory
/// must already exist.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    log::info!("wrote {}x{} pin to {}", img.width(), img.height(), path.display());
    Ok(())
}

/// PNG data URI, for embedding the icon in a map style without a file.
pub fn png_data_uri(img: &RgbaImage) -> Result<String> {
    let png = encode_png(img)?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(png)))
}
