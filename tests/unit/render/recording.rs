use super::*;
use std::f64::consts::FRAC_PI_2;

fn canvas() -> Canvas {
    Canvas {
        width: 100,
        height: 100,
    }
}

#[test]
fn push_pop_restores_transform() {
    let mut s = RecordingSurface::new(canvas());
    s.push();
    s.translate(Vec2::new(10.0, 5.0));
    s.rotate(FRAC_PI_2);
    assert_eq!(s.depth(), 1);
    s.pop();
    assert_eq!(s.depth(), 0);
    assert_eq!(s.transform(), Affine::IDENTITY);
    // Unbalanced pops are ignored.
    s.pop();
    assert_eq!(s.transform(), Affine::IDENTITY);
}

#[test]
fn points_are_recorded_in_canvas_space() {
    let mut s = RecordingSurface::new(canvas());
    s.translate(Vec2::new(10.0, 20.0));
    s.rotate(FRAC_PI_2);
    s.fill_polygon(&[Point::new(1.0, 0.0)], Rgba8::WHITE);
    let DrawCommand::FillPolygon { points, .. } = &s.commands()[0] else {
        panic!("expected polygon");
    };
    assert!((points[0] - Point::new(10.0, 21.0)).hypot() < 1e-9);
}

#[test]
fn arc_start_includes_rotation() {
    let mut s = RecordingSurface::new(canvas());
    s.translate(Vec2::new(50.0, 50.0));
    s.rotate(FRAC_PI_2);
    s.stroke_arc(
        Point::ORIGIN,
        10.0,
        0.0,
        1.0,
        ArcClosure::Open,
        StrokeStyle::new(4.0, Rgba8::WHITE),
    );
    match &s.take_commands()[0] {
        DrawCommand::StrokeArc { center, start, .. } => {
            assert!((*center - Point::new(50.0, 50.0)).hypot() < 1e-9);
            assert!((start - FRAC_PI_2).abs() < 1e-9);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(s.commands().is_empty());
}

#[test]
fn fill_rect_becomes_a_quad() {
    let mut s = RecordingSurface::new(canvas());
    s.fill_rect(Rect::new(0.0, 0.0, 2.0, 3.0), Rgba8::CONTROL_POINT);
    assert_eq!(
        s.commands()[0],
        DrawCommand::FillPolygon {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 3.0),
                Point::new(0.0, 3.0),
            ],
            color: Rgba8::CONTROL_POINT,
        }
    );
}
