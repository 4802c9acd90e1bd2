use types::{Color, PinPalette, Shape};

use crate::geometry::PinGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Shadow,
    Glow,
    /// Ring index, 0 is outermost.
    GradientRing(u32),
    Teardrop,
    MainDisc,
    InnerDisc,
    CenterDot,
    Highlight,
}

/// One filled shape in the pin stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub shape: Shape,
    pub color: Color,
}

impl Layer {
    fn new(kind: LayerKind, shape: Shape, color: Color) -> Self {
        Self { kind, shape, color }
    }
}

/// All layers in paint order, back to front.
pub fn build_layers(geometry: &PinGeometry, palette: &PinPalette) -> Vec<Layer> {
    let mut layers = vec![
        Layer::new(LayerKind::Shadow, Shape::Ellipse(geometry.shadow_box()), palette.shadow),
        Layer::new(LayerKind::Glow, Shape::Ellipse(geometry.glow_box()), palette.glow),
    ];
    layers.extend(
        geometry
            .gradient_rings(palette.body)
            .into_iter()
            .enumerate()
            .map(|(k, (bbox, color))| {
                Layer::new(LayerKind::GradientRing(k as u32), Shape::Ellipse(bbox), color)
            }),
    );
    layers.extend([
        Layer::new(LayerKind::Teardrop, Shape::Polygon(geometry.teardrop_points()), palette.point),
        Layer::new(LayerKind::MainDisc, Shape::Ellipse(geometry.head_box()), palette.body),
        Layer::new(LayerKind::InnerDisc, Shape::Ellipse(geometry.inner_box()), palette.inner),
        Layer::new(LayerKind::CenterDot, Shape::Ellipse(geometry.dot_box()), palette.body),
        Layer::new(LayerKind::Highlight, Shape::Ellipse(geometry.highlight_box()), palette.highlight),
    ]);
    layers
}
