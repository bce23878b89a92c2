use crate::{
    foundation::{
        core::{AudioSample, FrameTransform, Point, Rgba8},
        error::{GlyphError, GlyphResult},
    },
    geometry::{
        arc::{ArcSpec, SolvedArc},
        memo::{ArcCache, solve_arc_cached},
    },
    render::surface::{ArcClosure, RenderSurface, StrokeStyle},
    stroke::{
        shapes::{CutAngles, arc_span, polyline_bevel, segment_mid_outline, segment_outline},
        weight::WeightMap,
    },
};

/// Diameter of the control-point overlay dots, in pixels.
pub const CONTROL_POINT_DIAMETER: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeKind {
    /// Block that grows to one side of a two-point spine.
    Segment,
    /// Block centered on a two-point spine.
    SegmentMid,
    Arc,
    Polyline,
    /// Ring around the first point passing through the second.
    Circle,
}

/// Single-slot cache that recomputes only when the key changes by value.
#[derive(Clone, Debug)]
pub struct InputCache<K, V> {
    slot: Option<(K, V)>,
    recomputes: u64,
}

impl<K, V> Default for InputCache<K, V> {
    fn default() -> Self {
        Self {
            slot: None,
            recomputes: 0,
        }
    }
}

impl<K: PartialEq, V> InputCache<K, V> {
    pub fn get_or_update(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        if !matches!(&self.slot, Some((last, _)) if *last == key) {
            self.recomputes += 1;
            self.slot = None;
        }
        let (_, value) = self.slot.get_or_insert_with(|| {
            let value = compute(&key);
            (key, value)
        });
        value
    }

    pub fn last_key(&self) -> Option<&K> {
        self.slot.as_ref().map(|(k, _)| k)
    }

    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

/// Geometry derived once from the control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeGeometry {
    /// Spine direction (radians) and length in stroke units.
    Spine { angle: f64, length: f64 },
    Arc(SolvedArc),
    Path,
    Circle,
}

#[derive(Clone, Debug, PartialEq)]
enum InitState {
    Pending,
    Ready(StrokeGeometry),
    Failed(String),
}

/// One primitive of a character.
#[derive(Clone, Debug)]
pub struct StrokeComponent {
    kind: StrokeKind,
    points: Vec<Point>,
    arc_spec: Option<ArcSpec>,
    weight: WeightMap,
    cuts: CutAngles,
    color: Option<Rgba8>,
    state: InitState,
    width: InputCache<AudioSample, f64>,
    canvas_points: InputCache<FrameTransform, Vec<Point>>,
}

impl StrokeComponent {
    /// Stroke of `kind` through `points`.
    ///
    /// For [`StrokeKind::Arc`] the authoring form is inferred from the point count (see
    /// [`ArcSpec::from_points`]); use [`StrokeComponent::arc`] to give it explicitly.
    pub fn new(kind: StrokeKind, points: Vec<Point>, weight: WeightMap) -> Self {
        let arc_spec = match kind {
            StrokeKind::Arc => ArcSpec::from_points(&points),
            _ => None,
        };
        Self {
            kind,
            points,
            arc_spec,
            weight,
            cuts: CutAngles::SQUARE,
            color: None,
            state: InitState::Pending,
            width: InputCache::default(),
            canvas_points: InputCache::default(),
        }
    }

    pub fn arc(spec: ArcSpec, weight: WeightMap) -> Self {
        let mut s = Self::new(StrokeKind::Arc, spec.control_points(), weight);
        s.arc_spec = Some(spec);
        s
    }

    pub fn with_cuts(mut self, cuts: CutAngles) -> Self {
        self.cuts = cuts;
        self
    }

    pub fn kind(&self) -> StrokeKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn arc_spec(&self) -> Option<&ArcSpec> {
        self.arc_spec.as_ref()
    }

    pub fn weight(&self) -> &WeightMap {
        &self.weight
    }

    pub fn cuts(&self) -> CutAngles {
        self.cuts
    }

    pub fn color(&self) -> Option<Rgba8> {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba8) {
        self.color = Some(color);
    }

    pub fn geometry(&self) -> Option<&StrokeGeometry> {
        match &self.state {
            InitState::Ready(g) => Some(g),
            _ => None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        !matches!(self.state, InitState::Pending)
    }

    pub fn is_drawable(&self) -> bool {
        matches!(self.state, InitState::Ready(_))
    }

    pub fn width_cache(&self) -> &InputCache<AudioSample, f64> {
        &self.width
    }

    pub fn point_cache(&self) -> &InputCache<FrameTransform, Vec<Point>> {
        &self.canvas_points
    }

    /// Solve the stroke's geometry. Runs once; later calls report the first outcome.
    pub fn init(&mut self, arcs: &mut ArcCache) -> GlyphResult<()> {
        match &self.state {
            InitState::Ready(_) => return Ok(()),
            InitState::Failed(msg) => return Err(GlyphError::geometry(msg.clone())),
            InitState::Pending => {}
        }
        match self.solve(arcs) {
            Ok(g) => {
                self.state = InitState::Ready(g);
                Ok(())
            }
            Err(msg) => {
                tracing::warn!(kind = ?self.kind, points = ?self.points, "{msg}");
                self.state = InitState::Failed(msg.clone());
                Err(GlyphError::geometry(msg))
            }
        }
    }

    fn solve(&self, arcs: &mut ArcCache) -> Result<StrokeGeometry, String> {
        if self.points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(format!("{:?} has non-finite control points", self.kind));
        }
        let n = self.points.len();
        match self.kind {
            StrokeKind::Segment | StrokeKind::SegmentMid => {
                if n != 2 {
                    return Err(format!("{:?} needs exactly 2 points, got {n}", self.kind));
                }
                let d = self.points[1] - self.points[0];
                Ok(StrokeGeometry::Spine {
                    angle: d.y.atan2(d.x),
                    length: d.hypot(),
                })
            }
            StrokeKind::Arc => {
                let spec = self
                    .arc_spec
                    .ok_or_else(|| format!("arc needs 2 or 3 points, got {n}"))?;
                solve_arc_cached(arcs, &spec)
                    .map(StrokeGeometry::Arc)
                    .ok_or_else(|| "failed to fit an arc to the control points".to_string())
            }
            StrokeKind::Polyline => {
                if n < 2 {
                    return Err(format!("polyline needs at least 2 points, got {n}"));
                }
                Ok(StrokeGeometry::Path)
            }
            StrokeKind::Circle => {
                if n != 2 {
                    return Err(format!(
                        "circle needs a center and a radius point, got {n} points"
                    ));
                }
                Ok(StrokeGeometry::Circle)
            }
        }
    }

    /// Current width for `sample`, recomputed only when the sample changes.
    pub fn width_for(&mut self, sample: AudioSample) -> f64 {
        let weight = &self.weight;
        *self.width.get_or_update(sample, |s| weight.width(*s))
    }

    /// Control points in canvas pixels, recomputed only when the transform changes.
    pub fn canvas_points_for(&mut self, transform: FrameTransform) -> &[Point] {
        let points = &self.points;
        self.canvas_points
            .get_or_update(transform, |t| points.iter().map(|p| t.apply(*p)).collect())
    }

    /// Draw with the current audio input. Returns whether anything besides the overlay was
    /// drawn; strokes that failed [`StrokeComponent::init`] and zero-width strokes draw nothing.
    pub fn draw<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        transform: FrameTransform,
        sample: AudioSample,
        color_mode: bool,
        show_control_points: bool,
    ) -> bool {
        let geometry = match &self.state {
            InitState::Ready(g) => *g,
            _ => return false,
        };
        let width = self.width_for(sample);
        let color = match (color_mode, self.color) {
            (true, Some(c)) => c,
            _ => Rgba8::INK,
        };
        let (kind, cuts) = (self.kind, self.cuts);
        let stroke_points = &self.points;
        let points: &[Point] = self.canvas_points.get_or_update(transform, |t| {
            stroke_points.iter().map(|p| t.apply(*p)).collect()
        });

        let drawn = width > 0.0;
        if drawn {
            match geometry {
                StrokeGeometry::Spine { angle, length } => {
                    let length = length * transform.scale;
                    let quad = match kind {
                        StrokeKind::SegmentMid => segment_mid_outline(length, width, cuts),
                        _ => segment_outline(length, width, cuts),
                    };
                    surface.push();
                    surface.translate(points[0].to_vec2());
                    surface.rotate(angle);
                    surface.fill_polygon(&quad, color);
                    surface.pop();
                }
                StrokeGeometry::Arc(arc) => {
                    let span = arc_span(&arc, cuts);
                    let closure = if arc.clockwise {
                        ArcClosure::Open
                    } else {
                        ArcClosure::Pie
                    };
                    surface.push();
                    surface.translate(transform.apply(arc.center).to_vec2());
                    surface.rotate(span.rotation);
                    surface.stroke_arc(
                        Point::ORIGIN,
                        arc.radius * transform.scale,
                        0.0,
                        span.sweep,
                        closure,
                        StrokeStyle::new(width, color),
                    );
                    surface.pop();
                }
                StrokeGeometry::Path => {
                    let path = polyline_bevel(points, width, cuts);
                    surface.stroke_polyline(&path, StrokeStyle::new(width, color));
                }
                StrokeGeometry::Circle => {
                    let radius = (points[1] - points[0]).hypot();
                    surface.stroke_circle(points[0], radius, StrokeStyle::new(width, color));
                }
            }
        }

        if show_control_points {
            for p in points {
                surface.fill_circle(*p, CONTROL_POINT_DIAMETER / 2.0, Rgba8::CONTROL_POINT);
            }
        }
        drawn
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/component.rs"]
mod tests;
