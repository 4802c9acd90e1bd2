use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const TRANSPARENT: Color = Color([0, 0, 0, 0]);
    pub const BLACK: Color = Color([0, 0, 0, 255]);
    pub const WHITE: Color = Color([255, 255, 255, 255]);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        let [r, g, b, _] = self.0;
        Self([r, g, b, a])
    }

    pub const fn alpha(self) -> u8 {
        self.0[3]
    }
}

/// Axis-aligned box in pixel-index space. Both corners are inclusive.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of half extents `rx`, `ry` around `(cx, cy)`.
    pub fn centered(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::new(cx - rx, cy - ry, cx + rx, cy + ry)
    }

    pub fn center(&self) -> [f64; 2] {
        [(self.x0 + self.x1) * 0.5, (self.y0 + self.y1) * 0.5]
    }

    /// Half extents on each axis.
    pub fn radii(&self) -> [f64; 2] {
        [(self.x1 - self.x0) * 0.5, (self.y1 - self.y0) * 0.5]
    }

    /// Shrink every side by `d`.
    pub fn inset(&self, d: f64) -> Self {
        Self::new(self.x0 + d, self.y0 + d, self.x1 - d, self.y1 - d)
    }

    pub fn is_inverted(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }
}

/// A fillable outline.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Shape {
    Ellipse(BoundingBox),
    Polygon(Vec<[f64; 2]>),
}

/// How a fill combines with the pixels already on the canvas.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    /// The fill color, alpha included, overwrites the pixel.
    #[default]
    Replace,
    /// Straight-alpha source-over compositing.
    SourceOver,
}

/// Fill colors for every pin layer.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PinPalette {
    /// Head, center dot and base of the gradient rings.
    pub body: Color,
    /// Teardrop point.
    pub point: Color,
    pub shadow: Color,
    pub glow: Color,
    pub inner: Color,
    pub highlight: Color,
}

impl Default for PinPalette {
    fn default() -> Self {
        let body = Color::rgb(255, 59, 48); // #ff3b30
        Self {
            body,
            point: Color::rgb(211, 47, 47), // #d32f2f
            shadow: Color::BLACK.with_alpha(60),
            glow: body.with_alpha(40),
            inner: Color::WHITE.with_alpha(240),
            highlight: Color::WHITE.with_alpha(60),
        }
    }
}
