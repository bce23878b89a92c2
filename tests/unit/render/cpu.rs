use super::*;

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::new(Canvas {
        width: w,
        height: h,
    })
    .unwrap()
}

#[test]
fn oversized_canvas_is_rejected() {
    let err = CpuSurface::new(Canvas {
        width: 70_000,
        height: 10,
    })
    .unwrap_err();
    assert!(err.to_string().contains("exceeds u16"));
}

#[test]
fn clear_fills_every_pixel() {
    let mut s = surface(8, 4);
    s.clear(Rgba8::WHITE);
    let frame = s.finish();
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.count_non_background([255, 255, 255, 255]), 0);
}

#[test]
fn polygon_covers_its_interior() {
    let mut s = surface(16, 16);
    s.clear(Rgba8::WHITE);
    s.fill_polygon(
        &[
            Point::new(4.0, 4.0),
            Point::new(12.0, 4.0),
            Point::new(12.0, 12.0),
            Point::new(4.0, 12.0),
        ],
        Rgba8::new(0, 0, 0, 255),
    );
    let frame = s.finish();
    assert_eq!(frame.pixel(8, 8), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(1, 1), Some([255, 255, 255, 255]));
}

#[test]
fn stroke_width_zero_draws_nothing() {
    let mut s = surface(16, 16);
    s.clear(Rgba8::WHITE);
    s.stroke_polyline(
        &[Point::new(0.0, 8.0), Point::new(16.0, 8.0)],
        StrokeStyle::new(0.0, Rgba8::new(0, 0, 0, 255)),
    );
    s.stroke_circle(
        Point::new(8.0, 8.0),
        4.0,
        StrokeStyle::new(0.0, Rgba8::new(0, 0, 0, 255)),
    );
    let frame = s.finish();
    assert_eq!(frame.count_non_background([255, 255, 255, 255]), 0);
}

#[test]
fn translated_stroke_lands_under_the_transform() {
    let mut s = surface(32, 32);
    s.clear(Rgba8::WHITE);
    s.push();
    s.translate(Vec2::new(16.0, 0.0));
    s.stroke_polyline(
        &[Point::new(0.0, 0.0), Point::new(0.0, 32.0)],
        StrokeStyle::new(4.0, Rgba8::new(0, 0, 0, 255)),
    );
    s.pop();
    let frame = s.finish();
    assert_eq!(frame.pixel(16, 16), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(4, 16), Some([255, 255, 255, 255]));
}

#[test]
fn polyline_corners_are_mitered() {
    let mut s = surface(300, 300);
    s.clear(Rgba8::WHITE);
    s.stroke_polyline(
        &[
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
            Point::new(200.0, 200.0),
        ],
        StrokeStyle::new(40.0, Rgba8::new(0, 0, 0, 255)),
    );
    let frame = s.finish();
    // Outside a round join of radius 20 around (200, 100), inside the miter square.
    assert_eq!(frame.pixel(216, 84), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(230, 70), Some([255, 255, 255, 255]));
}
