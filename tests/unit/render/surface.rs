use super::*;
use kurbo::{PathEl, Shape};

#[test]
fn open_arc_starts_on_the_circle() {
    let path = arc_path(Point::new(10.0, 10.0), 5.0, 0.0, std::f64::consts::PI, ArcClosure::Open);
    let els = path.elements();
    assert!(matches!(els[0], PathEl::MoveTo(p) if (p - Point::new(15.0, 10.0)).hypot() < 1e-9));
    assert!(!els.iter().any(|e| matches!(e, PathEl::ClosePath)));
    let bbox = path.bounding_box();
    // Positive sweep from angle 0 runs through +y.
    assert!(bbox.max_y() > 14.9);
    assert!(bbox.min_y() > 9.9);
}

#[test]
fn pie_arc_closes_through_center() {
    let path = arc_path(Point::ORIGIN, 4.0, 0.0, std::f64::consts::FRAC_PI_2, ArcClosure::Pie);
    let els = path.elements();
    assert_eq!(els[0], PathEl::MoveTo(Point::ORIGIN));
    assert!(matches!(els[1], PathEl::LineTo(p) if (p - Point::new(4.0, 0.0)).hypot() < 1e-9));
    assert_eq!(els.last(), Some(&PathEl::ClosePath));
}

#[test]
fn polygon_closes_only_with_three_or_more_points() {
    let tri = polygon_path(&[Point::ORIGIN, Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
    assert_eq!(tri.elements().last(), Some(&PathEl::ClosePath));
    let line = polygon_path(&[Point::ORIGIN, Point::new(1.0, 0.0)]);
    assert_eq!(line.elements().len(), 2);
    assert!(polyline_path(&[]).elements().is_empty());
}
