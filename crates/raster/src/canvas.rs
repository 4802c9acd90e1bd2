use image::{Rgba, RgbaImage};
use tiny_skia::{BlendMode, FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Transform};
use types::{BoundingBox, Color, PaintMode, Shape};

use crate::{RasterError, Result};

/// RGBA pixmap that shapes are painted onto, back to front.
///
/// Shape coordinates are pixel indices: pixel `(x, y)` is covered when the
/// point `(x as f64, y as f64)` lies inside the shape. Fills are aliased so
/// every pixel is either untouched or takes the fill exactly.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
    mode: PaintMode,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32, mode: PaintMode) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::EmptyCanvas { width, height })?;
        Ok(Self { pixmap, mode })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    /// Straight-alpha color of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Copy out as a straight-alpha `RgbaImage` for encoding.
    pub fn to_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width(), self.height());
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        img
    }

    pub fn fill(&mut self, shape: &Shape, color: Color) -> Result<()> {
        match shape {
            Shape::Ellipse(bbox) => self.fill_ellipse(bbox, color),
            Shape::Polygon(points) => self.fill_polygon(points, color),
        }
    }

    /// Fill the ellipse inscribed in `bbox`.
    ///
    /// Box corners are inclusive, so the oval reaches half a pixel past them.
    pub fn fill_ellipse(&mut self, bbox: &BoundingBox, color: Color) -> Result<()> {
        if !bbox.is_finite() {
            return Err(RasterError::NonFinite);
        }
        let inverted = RasterError::InvertedBox {
            x0: bbox.x0,
            y0: bbox.y0,
            x1: bbox.x1,
            y1: bbox.y1,
        };
        if bbox.is_inverted() {
            return Err(inverted);
        }
        let rect = Rect::from_ltrb(
            (bbox.x0 - 0.5) as f32,
            (bbox.y0 - 0.5) as f32,
            (bbox.x1 + 0.5) as f32,
            (bbox.y1 + 0.5) as f32,
        )
        .ok_or(inverted)?;
        if let Some(path) = PathBuilder::from_oval(rect) {
            self.fill_path(&path, color);
        }
        Ok(())
    }

    /// Even-odd fill of a closed polygon.
    pub fn fill_polygon(&mut self, points: &[[f64; 2]], color: Color) -> Result<()> {
        if points.len() < 3 {
            return Err(RasterError::TooFewVertices(points.len()));
        }
        if points.iter().any(|p| !p[0].is_finite() || !p[1].is_finite()) {
            return Err(RasterError::NonFinite);
        }
        let mut pb = PathBuilder::new();
        for (i, p) in points.iter().enumerate() {
            let (x, y) = (p[0] as f32, p[1] as f32);
            if i == 0 {
                pb.move_to(x, y);
            } else {
                pb.line_to(x, y);
            }
        }
        pb.close();
        // Zero-area outlines produce no path and paint nothing.
        if let Some(path) = pb.finish() {
            self.fill_path(&path, color);
        }
        Ok(())
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let [r, g, b, a] = color.0;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = false;
        paint.blend_mode = match self.mode {
            PaintMode::Replace => BlendMode::Source,
            PaintMode::SourceOver => BlendMode::SourceOver,
        };
        // Pixel centers sit at +0.5; shift so index coordinates land on them.
        let to_centers = Transform::from_translate(0.5, 0.5);
        self.pixmap.fill_path(path, &paint, FillRule::EvenOdd, to_centers, None);
    }
}
