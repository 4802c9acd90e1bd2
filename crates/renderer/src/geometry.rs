use types::{BoundingBox, Color};

pub const GRADIENT_RINGS: u32 = 20;
pub const ARC_STEP_DEGREES: i32 = 5;

const TOP_OFFSET: f64 = 10.0;
const SHADOW_OFFSET: f64 = 5.0;
const SHADOW_HALF_WIDTH: f64 = 25.0;
const SHADOW_HEIGHT: f64 = 10.0;
const GLOW_MARGIN: f64 = 15.0;
const RING_STEP: f64 = 0.5;
const ARC_SCALE: f64 = 0.9;
const INNER_SCALE: f64 = 0.5;
const DOT_SCALE: f64 = 0.25;

/// Scalar layout of the pin, derived once from the canvas width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinGeometry {
    pub width: u32,
    pub height: u32,
    pub center_x: f64,
    pub top_y: f64,
    /// Head radius.
    pub radius: f64,
    /// Y of the teardrop apex.
    pub point_y: f64,
}

impl PinGeometry {
    pub fn from_width(width: u32) -> Self {
        Self {
            width,
            height: (width as f64 * 1.4).round() as u32,
            center_x: (width / 2) as f64,
            top_y: TOP_OFFSET,
            radius: (width / 3) as f64,
            point_y: (width as f64 * 1.3).floor(),
        }
    }

    pub fn head_center(&self) -> [f64; 2] {
        [self.center_x, self.top_y + self.radius]
    }

    fn head_circle(&self, r: f64) -> BoundingBox {
        let [cx, cy] = self.head_center();
        BoundingBox::centered(cx, cy, r, r)
    }

    /// Ground shadow, shifted right of the apex.
    pub fn shadow_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.center_x - SHADOW_HALF_WIDTH + SHADOW_OFFSET,
            self.point_y - SHADOW_HEIGHT,
            self.center_x + SHADOW_HALF_WIDTH + SHADOW_OFFSET,
            self.point_y,
        )
    }

    pub fn glow_box(&self) -> BoundingBox {
        self.head_circle(self.radius + GLOW_MARGIN)
    }

    pub fn head_box(&self) -> BoundingBox {
        self.head_circle(self.radius)
    }

    pub fn inner_box(&self) -> BoundingBox {
        self.head_circle(self.radius * INNER_SCALE)
    }

    pub fn dot_box(&self) -> BoundingBox {
        self.head_circle(self.radius * DOT_SCALE)
    }

    /// Specular shine up and left of the head center.
    pub fn highlight_box(&self) -> BoundingBox {
        let r = self.radius;
        BoundingBox::centered(self.center_x - r * 0.3, self.top_y + r * 0.6, r * 0.4, r * 0.5)
    }

    /// Gradient rings from outermost to innermost, each with its fill.
    ///
    /// Alpha rises toward the center while the color darkens outward from
    /// `body`. Insets stop at the head radius so small pins stay valid.
    pub fn gradient_rings(&self, body: Color) -> Vec<(BoundingBox, Color)> {
        let head = self.head_box();
        let [r, g, b, _] = body.0;
        (0..GRADIENT_RINGS)
            .map(|k| {
                let step = k + 1;
                let shade = (GRADIENT_RINGS - k) as u8;
                let alpha = (255 * step / GRADIENT_RINGS) as u8;
                let color = Color::rgba(
                    r.saturating_sub(shade.saturating_mul(10)),
                    g.saturating_sub(shade * 2),
                    b,
                    alpha,
                );
                (head.inset((step as f64 * RING_STEP).min(self.radius)), color)
            })
            .collect()
    }

    /// Right half of a circle at 90% of the head radius, sampled every
    /// `ARC_STEP_DEGREES` from -90 to 90 inclusive, closed by the apex.
    pub fn teardrop_points(&self) -> Vec<[f64; 2]> {
        let [cx, cy] = self.head_center();
        let r = self.radius * ARC_SCALE;
        let mut points: Vec<[f64; 2]> = (-90..=90)
            .step_by(ARC_STEP_DEGREES as usize)
            .map(|deg: i32| {
                let rad = (deg as f64).to_radians();
                [cx + r * rad.cos(), cy + r * rad.sin()]
            })
            .collect();
        points.push([self.center_x, self.point_y]);
        points
    }
}
