//! Outline math for the stroke primitives, in the stroke's local pixel frame.
//!
//! Segment quads are built with the spine along `+x` starting at the origin. The caller
//! translates to the first canvas point and rotates by the spine angle.

use crate::{
    foundation::{
        core::Point,
        math::{cut_offset_rad, normalize_angle},
    },
    geometry::arc::SolvedArc,
};

/// End-cut angles in degrees. `90` is a cut perpendicular to the stroke direction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CutAngles {
    pub start: f64,
    pub end: f64,
}

impl Default for CutAngles {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl CutAngles {
    pub const SQUARE: Self = Self {
        start: 90.0,
        end: 90.0,
    };

    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn is_square(self) -> bool {
        self == Self::SQUARE
    }

    fn offsets(self, reach: f64) -> (f64, f64) {
        let sr = cut_offset_rad(self.start);
        let er = cut_offset_rad(self.end);
        let s = reach * sr.tan() * if sr > 0.0 { -1.0 } else { 1.0 };
        let e = reach * er.tan() * if er < 0.0 { -1.0 } else { 1.0 };
        (s, e)
    }
}

/// Quad for a block that grows to one side (`-y`) of a spine of `length` pixels.
pub fn segment_outline(length: f64, width: f64, cuts: CutAngles) -> [Point; 4] {
    let (s, e) = cuts.offsets(width);
    [
        Point::new(s, 0.0),
        Point::new(length + e, 0.0),
        Point::new(length, -width),
        Point::new(0.0, -width),
    ]
}

/// Quad for a block centered on a spine of `length` pixels.
pub fn segment_mid_outline(length: f64, width: f64, cuts: CutAngles) -> [Point; 4] {
    let half = width / 2.0;
    let (s, e) = cuts.offsets(half);
    [
        Point::new(s, half),
        Point::new(length + e, half),
        Point::new(length - e, -half),
        Point::new(-s, -half),
    ]
}

/// Copy of `points` with the first and last vertex slid sideways to fake a slanted cut.
///
/// Interior vertices are untouched. An end whose segment has zero length stays put.
pub fn polyline_bevel(points: &[Point], width: f64, cuts: CutAngles) -> Vec<Point> {
    let mut out = points.to_vec();
    let n = points.len();
    if n < 2 {
        return out;
    }
    let half = width / 2.0;

    let first = points[1] - points[0];
    let first_len = first.hypot();
    if first_len > 0.0 {
        let d = first / first_len;
        let t = half * cut_offset_rad(cuts.start).tan();
        out[0] = points[0] + kurbo::Vec2::new(-t * d.y, t * d.x);
    }

    let last = points[n - 1] - points[n - 2];
    let last_len = last.hypot();
    if last_len > 0.0 {
        let d = last / last_len;
        let t = half * cut_offset_rad(cuts.end).tan();
        out[n - 1] = points[n - 1] + kurbo::Vec2::new(t * d.y, -t * d.x);
    }
    out
}

/// Where an arc stroke starts (`rotation`) and how far it turns (`sweep`), both in radians,
/// after the end cuts are applied.
///
/// `sweep` is always in `[0, 2π)`: a span the cuts push negative wraps to the remaining turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpan {
    pub rotation: f64,
    pub sweep: f64,
}

pub fn arc_span(arc: &SolvedArc, cuts: CutAngles) -> ArcSpan {
    let start = arc.start_angle + cut_offset_rad(cuts.start);
    let end = arc.end_angle - cut_offset_rad(cuts.end);
    ArcSpan {
        rotation: start,
        sweep: normalize_angle(end - start),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/shapes.rs"]
mod tests;
