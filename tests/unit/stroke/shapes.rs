use super::*;
use crate::foundation::math::approx_eq;
use kurbo::Affine;
use std::f64::consts::{FRAC_PI_2, PI};

fn close(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x, 1e-9) && approx_eq(a.y, b.y, 1e-9)
}

#[test]
fn square_cut_segment_is_a_rectangle() {
    let quad = segment_outline(4.0, 30.0, CutAngles::SQUARE);
    assert_eq!(
        quad,
        [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, -30.0),
            Point::new(0.0, -30.0),
        ]
    );
}

#[test]
fn vertical_segment_lands_axis_aligned() {
    // Spine (0,0)->(0,4): rotate by atan2(4, 0).
    let frame = Affine::rotate(4f64.atan2(0.0));
    let quad = segment_outline(4.0, 30.0, CutAngles::SQUARE).map(|p| frame * p);
    assert!(close(quad[0], Point::new(0.0, 0.0)));
    assert!(close(quad[1], Point::new(0.0, 4.0)));
    assert!(close(quad[2], Point::new(30.0, 4.0)));
    assert!(close(quad[3], Point::new(30.0, 0.0)));
}

#[test]
fn slanted_start_cut_shifts_the_base_corner() {
    let quad = segment_outline(100.0, 30.0, CutAngles::new(60.0, 90.0));
    let expected = 30.0 * (-PI / 6.0).tan();
    assert!(approx_eq(quad[0].x, expected, 1e-9));
    assert_eq!(quad[1], Point::new(100.0, 0.0));

    let quad = segment_outline(100.0, 30.0, CutAngles::new(90.0, 60.0));
    assert!(approx_eq(quad[1].x, 100.0 - expected, 1e-9));
}

#[test]
fn mid_segment_is_centered_on_the_spine() {
    let quad = segment_mid_outline(10.0, 8.0, CutAngles::SQUARE);
    assert_eq!(quad[0], Point::new(0.0, 4.0));
    assert_eq!(quad[1], Point::new(10.0, 4.0));
    assert_eq!(quad[2], Point::new(10.0, -4.0));
    assert_eq!(quad[3], Point::new(0.0, -4.0));

    let slanted = segment_mid_outline(10.0, 8.0, CutAngles::new(90.0, 45.0));
    // tan(-45°) = -1 and the end sign flips it back to +4.
    assert!(approx_eq(slanted[1].x, 14.0, 1e-9));
    assert!(approx_eq(slanted[2].x, 6.0, 1e-9));
}

#[test]
fn polyline_bevel_moves_only_the_ends() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 0.0),
    ];
    assert_eq!(polyline_bevel(&pts, 20.0, CutAngles::SQUARE), pts.to_vec());

    let bent = polyline_bevel(&pts, 20.0, CutAngles::new(45.0, 135.0));
    // start: t = 10 * tan(-45°) = -10, d0 = (1, 0) -> offset (0, -10)
    assert!(close(bent[0], Point::new(0.0, -10.0)));
    assert_eq!(bent[1], pts[1]);
    // end: t = 10 * tan(45°) = 10, dn = (1, 0) -> offset (0, -10)
    assert!(close(bent[2], Point::new(20.0, -10.0)));
}

#[test]
fn polyline_bevel_skips_degenerate_ends() {
    let pts = [Point::new(3.0, 3.0), Point::new(3.0, 3.0)];
    let out = polyline_bevel(&pts, 10.0, CutAngles::new(30.0, 30.0));
    assert_eq!(out, pts.to_vec());
}

#[test]
fn arc_span_applies_cuts_to_both_ends() {
    let arc = SolvedArc {
        center: Point::new(0.0, 6.0),
        radius: 5.5,
        start_angle: 3.0 * FRAC_PI_2,
        end_angle: 5.0 * FRAC_PI_2,
        clockwise: false,
    };
    let plain = arc_span(&arc, CutAngles::SQUARE);
    assert!(approx_eq(plain.rotation, 3.0 * FRAC_PI_2, 1e-12));
    assert!(approx_eq(plain.sweep, PI, 1e-12));

    let cut = arc_span(&arc, CutAngles::new(60.0, 60.0));
    assert!(approx_eq(cut.rotation, 3.0 * FRAC_PI_2 - PI / 6.0, 1e-12));
    assert!(approx_eq(cut.sweep, PI + PI / 3.0, 1e-12));
}

#[test]
fn arc_span_wraps_when_cuts_overrun_it() {
    let arc = SolvedArc {
        center: Point::new(0.0, 0.0),
        radius: 2.0,
        start_angle: 0.0,
        end_angle: PI / 6.0,
        clockwise: true,
    };
    // 150° cuts pull each end in by 60°, past each other.
    let span = arc_span(&arc, CutAngles::new(150.0, 150.0));
    assert!(approx_eq(span.rotation, PI / 3.0, 1e-12));
    assert!(approx_eq(span.sweep, 3.0 * FRAC_PI_2, 1e-12));
}
