#[cfg(test)]
mod tests {
    use image::ColorType;
    use raster::Canvas;
    use renderer::{
        build_layers, encode_png, png_data_uri, render, render_to_file, PinGeometry, RenderConfig,
        RenderError, MIN_WIDTH,
    };
    use types::{Color, PaintMode, PinPalette};

    const BODY: Color = Color::rgb(255, 59, 48);

    fn px(img: &image::RgbaImage, x: u32, y: u32) -> Color {
        Color(img.get_pixel(x, y).0)
    }

    /// Low alphas lose a little color precision through premultiplied storage.
    fn assert_near(actual: Color, expected: Color, tol: u8) {
        let close = actual.alpha() == expected.alpha()
            && actual.0.iter().zip(expected.0.iter()).all(|(a, e)| a.abs_diff(*e) <= tol);
        assert!(close, "{actual:?} not within {tol} of {expected:?}");
    }

    /// Union of every layer shape, painted opaque.
    fn coverage_mask(width: u32) -> Canvas {
        let g = PinGeometry::from_width(width);
        let mut mask = Canvas::new(g.width, g.height, PaintMode::Replace).unwrap();
        for layer in build_layers(&g, &PinPalette::default()) {
            mask.fill(&layer.shape, Color::WHITE).unwrap();
        }
        mask
    }

    #[test]
    fn test_default_dimensions() {
        let img = render(&RenderConfig::default()).unwrap();
        assert_eq!(img.dimensions(), (200, 280));

        let img = render(&RenderConfig { width: 120, ..Default::default() }).unwrap();
        assert_eq!(img.dimensions(), (120, 168));

        let img = render(&RenderConfig { width: MIN_WIDTH, ..Default::default() }).unwrap();
        assert_eq!(img.dimensions(), (64, 90));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = RenderConfig::default();
        let a = encode_png(&render(&config).unwrap()).unwrap();
        let b = encode_png(&render(&config).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pixels_outside_every_shape_are_transparent() {
        for width in [MIN_WIDTH, 65, 97, 200, 333] {
            let mask = coverage_mask(width).to_image();
            for mode in [PaintMode::Replace, PaintMode::SourceOver] {
                let img = render(&RenderConfig { width, mode, ..Default::default() }).unwrap();
                assert_eq!(img.dimensions(), mask.dimensions());
                for (x, y, p) in img.enumerate_pixels() {
                    if mask.get_pixel(x, y).0[3] == 0 {
                        assert_eq!(p.0[3], 0, "width {width} {mode:?} pixel ({x}, {y})");
                    }
                }
                assert!(img.pixels().any(|p| p.0[3] != 0), "width {width} painted nothing");
            }
        }
    }

    #[test]
    fn test_center_pixels_are_opaque_body() {
        let img = render(&RenderConfig::default()).unwrap();
        // Head center, covered last by the center dot.
        assert_eq!(px(&img, 100, 76), BODY);
        // Canvas center, inside the main disc.
        assert_eq!(px(&img, 100, 140), BODY);
    }

    #[test]
    fn test_head_center_is_body_for_supported_widths() {
        for width in [MIN_WIDTH, MIN_WIDTH + 1, 100, 200, 333] {
            let img = render(&RenderConfig { width, ..Default::default() }).unwrap();
            let [cx, cy] = PinGeometry::from_width(width).head_center();
            assert_eq!(px(&img, cx as u32, cy as u32), BODY, "width {width}");
        }
    }

    #[test]
    fn test_layer_pixels_replace_mode() {
        let img = render(&RenderConfig::default()).unwrap();
        assert_near(px(&img, 100, 3), BODY.with_alpha(40), 6);
        assert_eq!(px(&img, 105, 255), Color::rgba(0, 0, 0, 60), "shadow");
        assert_eq!(px(&img, 125, 76), Color::rgba(255, 255, 255, 240), "inner disc");
        assert_eq!(px(&img, 80, 50), Color::rgba(255, 255, 255, 60), "highlight");
    }

    #[test]
    fn test_source_over_mode_keeps_head_opaque() {
        let config = RenderConfig { mode: PaintMode::SourceOver, ..Default::default() };
        let img = render(&config).unwrap();
        assert_eq!(px(&img, 100, 76), BODY);
        assert_near(px(&img, 100, 3), BODY.with_alpha(40), 6);
        let shine = px(&img, 80, 50);
        assert_eq!(shine.alpha(), 255);
        assert!(shine.0[0] >= 250, "{shine:?}");
        assert_eq!(px(&img, 0, 0).alpha(), 0);
    }

    #[test]
    fn test_invalid_width() {
        let err = render(&RenderConfig { width: 10, ..Default::default() }).unwrap_err();
        assert!(matches!(err, RenderError::InvalidWidth { width: 10, .. }));
    }

    #[test]
    fn test_render_to_file_writes_rgba_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("modern-pin.png");
        std::fs::write(&output, b"stale").unwrap();

        let config = RenderConfig { output: output.clone(), ..Default::default() };
        let written = render_to_file(&config).unwrap();
        assert_eq!(written, output);

        assert_eq!(image::image_dimensions(&output).unwrap(), (200, 280));
        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgba8);
        assert_eq!(decoded.to_rgba8(), render(&config).unwrap());
    }

    #[test]
    fn test_missing_parent_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig {
            output: dir.path().join("missing").join("pin.png"),
            ..Default::default()
        };
        assert!(render_to_file(&config).is_err());
    }

    #[test]
    fn test_png_data_uri() {
        let img = render(&RenderConfig { width: MIN_WIDTH, ..Default::default() }).unwrap();
        let uri = png_data_uri(&img).unwrap();
        assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }
}
