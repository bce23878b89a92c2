use crate::{
    foundation::core::{Affine, Canvas, Point, Rect, Rgba8, Vec2},
    render::surface::{ArcClosure, RenderSurface, StrokeStyle},
};

/// One recorded call, with positions already mapped to canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Rgba8,
    },
    /// Also produced by `fill_rect`, as its four transformed corners.
    FillPolygon {
        points: Vec<Point>,
        color: Rgba8,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba8,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        style: StrokeStyle,
    },
    StrokePolyline {
        points: Vec<Point>,
        style: StrokeStyle,
    },
    StrokeArc {
        center: Point,
        radius: f64,
        /// Absolute start angle, including the surface rotation in effect.
        start: f64,
        sweep: f64,
        closure: ArcClosure,
        style: StrokeStyle,
    },
}

/// A [`RenderSurface`] that keeps a display list instead of pixels.
#[derive(Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    transform: Affine,
    stack: Vec<Affine>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn map(&self, p: Point) -> Point {
        self.transform * p
    }

    fn rotation(&self) -> f64 {
        let [a, b, ..] = self.transform.as_coeffs();
        b.atan2(a)
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> Canvas {
        self.canvas
    }

    fn push(&mut self) {
        self.stack.push(self.transform);
    }

    fn pop(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine::translate(offset);
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self.transform * Affine::rotate(radians);
    }

    fn clear(&mut self, color: Rgba8) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba8) {
        let points = points.iter().map(|p| self.map(*p)).collect();
        self.commands.push(DrawCommand::FillPolygon { points, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        let corners = [
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ];
        self.fill_polygon(&corners, color);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.commands.push(DrawCommand::FillCircle {
            center: self.map(center),
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, style: StrokeStyle) {
        self.commands.push(DrawCommand::StrokeCircle {
            center: self.map(center),
            radius,
            style,
        });
    }

    fn stroke_polyline(&mut self, points: &[Point], style: StrokeStyle) {
        let points = points.iter().map(|p| self.map(*p)).collect();
        self.commands.push(DrawCommand::StrokePolyline { points, style });
    }

    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        sweep: f64,
        closure: ArcClosure,
        style: StrokeStyle,
    ) {
        self.commands.push(DrawCommand::StrokeArc {
            center: self.map(center),
            radius,
            start: start + self.rotation(),
            sweep,
            closure,
            style,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
