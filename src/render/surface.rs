use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8, Vec2};

/// Flattening tolerance, in pixels, for arcs and circles.
pub const CURVE_TOLERANCE: f64 = 0.1;

/// Pen for stroked primitives. Caps are butt and joins are mitered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Rgba8,
}

impl StrokeStyle {
    pub fn new(width: f64, color: Rgba8) -> Self {
        Self { width, color }
    }
}

/// What is drawn besides the arc itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcClosure {
    /// Just the curve.
    Open,
    /// The curve plus both radii back to the center.
    Pie,
}

/// Immediate-mode drawing target for characters.
///
/// Coordinates are canvas pixels under the current transform. `push`/`pop` save and restore
/// that transform; `translate` and `rotate` post-multiply it.
pub trait RenderSurface {
    fn size(&self) -> Canvas;

    fn push(&mut self);

    fn pop(&mut self);

    fn translate(&mut self, offset: Vec2);

    fn rotate(&mut self, radians: f64);

    /// Fill the whole surface, ignoring the current transform.
    fn clear(&mut self, color: Rgba8);

    fn fill_polygon(&mut self, points: &[Point], color: Rgba8);

    fn fill_rect(&mut self, rect: Rect, color: Rgba8);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8);

    fn stroke_circle(&mut self, center: Point, radius: f64, style: StrokeStyle);

    fn stroke_polyline(&mut self, points: &[Point], style: StrokeStyle);

    /// Stroke an arc starting at `start` radians and turning by `sweep` (positive is clockwise
    /// on screen).
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        sweep: f64,
        closure: ArcClosure,
        style: StrokeStyle,
    );
}

/// Path for [`RenderSurface::stroke_arc`].
pub fn arc_path(
    center: Point,
    radius: f64,
    start: f64,
    sweep: f64,
    closure: ArcClosure,
) -> BezPath {
    let arc = kurbo::Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: start,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    let mut path = BezPath::new();
    match closure {
        ArcClosure::Open => {
            path.move_to(center + Vec2::from_angle(start) * radius);
            path.extend(arc.append_iter(CURVE_TOLERANCE));
        }
        ArcClosure::Pie => {
            path.move_to(center);
            path.line_to(center + Vec2::from_angle(start) * radius);
            path.extend(arc.append_iter(CURVE_TOLERANCE));
            path.close_path();
        }
    }
    path
}

pub fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}

pub fn polygon_path(points: &[Point]) -> BezPath {
    let mut path = polyline_path(points);
    if points.len() > 2 {
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
