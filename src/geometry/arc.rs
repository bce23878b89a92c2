use std::f64::consts::{PI, TAU};

use crate::foundation::{core::Point, math::normalize_angle};

/// Default sweep used when an arc is authored from two points only.
pub const DEFAULT_SWEEP_DEG: f64 = 90.0;

/// How an arc stroke is authored.
///
/// `ThreePoint` is solved as a circumcircle. When its points turn out to be collinear, the
/// chord `p1 -> p2` is used instead with `p3.x` read as the sweep in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ArcSpec {
    ThreePoint(Point, Point, Point),
    ChordAndAngle(Point, Point, f64),
}

impl ArcSpec {
    /// Pick the variant from an authored control-point list: three points give a
    /// [`ArcSpec::ThreePoint`], two points a [`ArcSpec::ChordAndAngle`] with the default 90°
    /// sweep.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        match *points {
            [a, b] => Some(Self::ChordAndAngle(a, b, DEFAULT_SWEEP_DEG)),
            [a, b, c] => Some(Self::ThreePoint(a, b, c)),
            _ => None,
        }
    }

    /// Control points that actually lie on the arc.
    pub fn control_points(&self) -> Vec<Point> {
        match *self {
            Self::ThreePoint(a, b, c) => vec![a, b, c],
            Self::ChordAndAngle(a, b, _) => vec![a, b],
        }
    }
}

/// A circle fitted to an [`ArcSpec`].
///
/// Angles are radians measured with `atan2(dy, dx)` in stroke space (y grows downward), so a
/// positive sweep runs clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SolvedArc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub clockwise: bool,
}

impl SolvedArc {
    /// Signed angular span from start to end.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn point_at(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

/// Fit a circle to `spec`. Returns `None` on singular input instead of panicking.
pub fn solve_arc(spec: &ArcSpec) -> Option<SolvedArc> {
    match *spec {
        ArcSpec::ThreePoint(a, b, c) => {
            if !all_finite(&[a, b, c]) {
                return None;
            }
            let ab = b - a;
            let ac = c - a;
            if ab.cross(ac) != 0.0 {
                circumcircle(a, b, c)
            } else {
                solve_chord(a, b, c.x)
            }
        }
        ArcSpec::ChordAndAngle(a, b, sweep_deg) => {
            if !all_finite(&[a, b]) {
                return None;
            }
            solve_chord(a, b, sweep_deg)
        }
    }
}

fn all_finite(points: &[Point]) -> bool {
    points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}

fn circumcircle(a: Point, b: Point, c: Point) -> Option<SolvedArc> {
    let mid_ab = a.midpoint(b);
    let mid_bc = b.midpoint(c);

    // Perpendicular bisectors as `a1 x + b1 y = c1`.
    let (a1, b1) = (b.x - a.x, b.y - a.y);
    let c1 = a1 * mid_ab.x + b1 * mid_ab.y;
    let (a2, b2) = (c.x - b.x, c.y - b.y);
    let c2 = a2 * mid_bc.x + b2 * mid_bc.y;

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }
    let h = (b2 * c1 - b1 * c2) / det;
    let k = (a1 * c2 - a2 * c1) / det;
    let center = Point::new(h, k);
    let radius = (a - center).hypot();
    if !radius.is_finite() || radius == 0.0 {
        return None;
    }

    let angles = [a, b, c].map(|p| normalize_angle((p.y - k).atan2(p.x - h)));
    let mut sorted = angles;
    sorted.sort_by(f64::total_cmp);

    let crosses_zero = sorted[2] - sorted[0] > PI;
    let (start_angle, end_angle) = if crosses_zero {
        (sorted[2], sorted[1] + TAU)
    } else {
        (sorted[0], sorted[2])
    };

    Some(SolvedArc {
        center,
        radius,
        start_angle,
        end_angle,
        clockwise: angles[1] > angles[0],
    })
}

fn solve_chord(a: Point, b: Point, sweep_deg: f64) -> Option<SolvedArc> {
    if !sweep_deg.is_finite() || sweep_deg <= 0.0 || sweep_deg > 180.0 {
        return None;
    }
    let ab = b - a;
    let chord = ab.hypot();
    if chord == 0.0 || !chord.is_finite() {
        return None;
    }

    let sweep = sweep_deg.to_radians();
    let radius = chord / (2.0 * (sweep / 2.0).sin());
    let half = chord / 2.0;
    let to_center = (radius * radius - half * half).max(0.0).sqrt();
    let normal = kurbo::Vec2::new(-ab.y, ab.x) / chord;
    let center = a.midpoint(b) + normal * to_center;

    let start_angle = normalize_angle((a.y - center.y).atan2(a.x - center.x));
    let mut end_angle = normalize_angle((b.y - center.y).atan2(b.x - center.x));

    let diff = (end_angle - start_angle).abs();
    if diff > PI {
        end_angle = if end_angle > start_angle {
            start_angle - (TAU - diff)
        } else {
            start_angle + (TAU - diff)
        };
    }

    Some(SolvedArc {
        center,
        radius,
        start_angle,
        end_angle,
        clockwise: end_angle > start_angle,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/arc.rs"]
mod tests;
