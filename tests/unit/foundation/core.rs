use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(Canvas::new(3, 4).unwrap().size(), Size::new(3.0, 4.0));
}

#[test]
fn centered_transform_puts_glyph_in_the_middle() {
    let canvas = Canvas {
        width: 800,
        height: 600,
    };
    let t = FrameTransform::centered(canvas, Size::new(10.0, 12.0), 30.0);
    assert_eq!(t.scale, 30.0);
    assert!((t.origin.x - 250.0).abs() < 1e-9);
    assert!((t.origin.y - 120.0).abs() < 1e-9);

    let top_left = t.apply(Point::new(0.0, 0.0));
    let bottom_right = t.apply(Point::new(10.0, 12.0));
    assert!((top_left.x + bottom_right.x - 800.0).abs() < 1e-9);
    assert!((top_left.y + bottom_right.y - 600.0).abs() < 1e-9);
}

#[test]
fn apply_matches_affine() {
    let t = FrameTransform::new(5.0, -3.0, 2.5);
    let p = Point::new(1.5, 4.0);
    let a = t.to_affine() * p;
    let b = t.apply(p);
    assert!((a.x - b.x).abs() < 1e-12);
    assert!((a.y - b.y).abs() < 1e-12);
}

#[test]
fn rgb_alpha_rounds_and_premultiplies() {
    let c = Rgba8::from_rgb_alpha([200, 100, 0], 0.8);
    assert_eq!(c.a, 204);
    assert_eq!(c.to_premul(), [160, 80, 0, 204]);
    assert_eq!(Rgba8::WHITE.to_premul(), [255, 255, 255, 255]);
}
