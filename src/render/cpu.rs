use kurbo::{Cap, Join, Shape, Stroke, StrokeOpts};

use crate::{
    foundation::{
        core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2},
        error::{GlyphError, GlyphResult},
    },
    render::{
        frame::FrameRGBA,
        surface::{
            ArcClosure, CURVE_TOLERANCE, RenderSurface, StrokeStyle, arc_path, polygon_path,
            polyline_path,
        },
    },
};

/// Canvas default; sharper corners fall back to a bevel.
const MITER_LIMIT: f64 = 10.0;

/// Raster [`RenderSurface`] backed by `vello_cpu`.
///
/// Strokes are expanded to outlines with `kurbo` and filled, so every primitive goes through
/// the same fill path.
pub struct CpuSurface {
    canvas: Canvas,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    transform: Affine,
    stack: Vec<Affine>,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("canvas", &self.canvas)
            .field("transform", &self.transform)
            .field("depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> GlyphResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| GlyphError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| GlyphError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(GlyphError::render("canvas width/height must be > 0"));
        }
        Ok(Self {
            canvas,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            transform: Affine::IDENTITY,
            stack: Vec::new(),
        })
    }

    /// Rasterize everything drawn so far. Pixels are premultiplied RGBA8.
    pub fn finish(mut self) -> FrameRGBA {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn fill_with(&mut self, path: &BezPath, transform: Affine, color: Rgba8) {
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_with(&mut self, path: &BezPath, style: StrokeStyle) {
        if !(style.width > 0.0 && style.width.is_finite()) {
            return;
        }
        let pen = Stroke::new(style.width)
            .with_caps(Cap::Butt)
            .with_join(Join::Miter)
            .with_miter_limit(MITER_LIMIT);
        let outline = kurbo::stroke(path.iter(), &pen, &StrokeOpts::default(), CURVE_TOLERANCE);
        self.fill_with(&outline, self.transform, style.color);
    }
}

impl RenderSurface for CpuSurface {
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
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba8) {
        if points.len() < 3 {
            return;
        }
        self.fill_with(&polygon_path(points), self.transform, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.fill_with(&rect.to_path(CURVE_TOLERANCE), self.transform, color);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        if !(radius > 0.0) {
            return;
        }
        let circle = kurbo::Circle::new(center, radius).to_path(CURVE_TOLERANCE);
        self.fill_with(&circle, self.transform, color);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, style: StrokeStyle) {
        if !(radius > 0.0) {
            return;
        }
        let circle = kurbo::Circle::new(center, radius).to_path(CURVE_TOLERANCE);
        self.stroke_with(&circle, style);
    }

    fn stroke_polyline(&mut self, points: &[Point], style: StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        self.stroke_with(&polyline_path(points), style);
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
        if !(radius > 0.0) || sweep == 0.0 {
            return;
        }
        self.stroke_with(&arc_path(center, radius, start, sweep, closure), style);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
