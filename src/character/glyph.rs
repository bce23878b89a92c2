use rand::{SeedableRng, rngs::StdRng};

use crate::{
    character::palette::Palette,
    foundation::core::{AudioSample, Canvas, FrameTransform, Size},
    geometry::memo::ArcCache,
    render::surface::RenderSurface,
    stroke::component::{InputCache, StrokeComponent},
};

/// Pixels per stroke-space unit unless configured otherwise.
pub const DEFAULT_GRID_UNIT: f64 = 30.0;

/// State shared by every character drawn from one catalog.
#[derive(Debug)]
pub struct DrawEnv {
    pub arcs: ArcCache,
    pub rng: StdRng,
    pub palette: Palette,
    pub grid_unit: f64,
    pub show_control_points: bool,
}

impl Default for DrawEnv {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_UNIT, None)
    }
}

impl DrawEnv {
    /// `seed` makes color assignment reproducible; `None` seeds from the OS.
    pub fn new(grid_unit: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            arcs: ArcCache::default(),
            rng,
            palette: Palette::BUILTIN,
            grid_unit,
            show_control_points: false,
        }
    }

    pub fn with_arc_cache(mut self, arcs: ArcCache) -> Self {
        self.arcs = arcs;
        self
    }
}

/// A named glyph: ordered strokes laid out on a `nominal_size` grid.
#[derive(Clone, Debug)]
pub struct Character {
    id: String,
    name: String,
    phonetic: Option<String>,
    nominal_size: Size,
    strokes: Vec<StrokeComponent>,
    initialized: bool,
    geometry_failures: usize,
    last_color_mode: Option<bool>,
    last_sample: Option<AudioSample>,
    color_assignments: u64,
    frame: InputCache<(Canvas, f64), FrameTransform>,
}

impl Character {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        nominal_size: Size,
        strokes: Vec<StrokeComponent>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phonetic: None,
            nominal_size,
            strokes,
            initialized: false,
            geometry_failures: 0,
            last_color_mode: None,
            last_sample: None,
            color_assignments: 0,
            frame: InputCache::default(),
        }
    }

    pub fn with_phonetic(mut self, phonetic: impl Into<String>) -> Self {
        self.phonetic = Some(phonetic.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phonetic(&self) -> Option<&str> {
        self.phonetic.as_deref()
    }

    pub fn nominal_size(&self) -> Size {
        self.nominal_size
    }

    pub fn strokes(&self) -> &[StrokeComponent] {
        &self.strokes
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Strokes whose geometry could not be solved. They are skipped when drawing.
    pub fn geometry_failures(&self) -> usize {
        self.geometry_failures
    }

    /// How many times palette colors have been (re)assigned.
    pub fn color_assignments(&self) -> u64 {
        self.color_assignments
    }

    pub fn last_sample(&self) -> Option<AudioSample> {
        self.last_sample
    }

    /// Solve every stroke and assign initial colors. Only the first call does any work.
    #[tracing::instrument(skip_all, fields(character = %self.id))]
    pub fn init(&mut self, env: &mut DrawEnv) {
        if self.initialized {
            return;
        }
        let mut failures = 0;
        for stroke in &mut self.strokes {
            if stroke.init(&mut env.arcs).is_err() {
                failures += 1;
            }
        }
        if failures > 0 {
            tracing::warn!(failures, "some strokes will not be drawn");
        }
        self.geometry_failures = failures;
        self.assign_colors(env);
        self.initialized = true;
    }

    /// Draw a fresh palette color for every stroke.
    pub fn assign_colors(&mut self, env: &mut DrawEnv) {
        let picks = env.palette.assign(self.strokes.len(), &mut env.rng);
        for (stroke, pick) in self.strokes.iter_mut().zip(&picks) {
            stroke.set_color(pick.color);
        }
        self.color_assignments += 1;
        tracing::debug!(character = %self.id, strokes = picks.len(), "assigned colors");
    }

    /// Transform that centers this character on `canvas`, cached on `(canvas, grid_unit)`.
    pub fn frame_transform(&mut self, canvas: Canvas, grid_unit: f64) -> FrameTransform {
        let nominal = self.nominal_size;
        *self.frame.get_or_update((canvas, grid_unit), |(c, g)| {
            FrameTransform::centered(*c, nominal, *g)
        })
    }

    /// Draw every stroke for one frame. Returns how many strokes produced output.
    ///
    /// Initializes on first use. Turning color mode on reassigns palette colors.
    pub fn draw<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        canvas: Canvas,
        sample: AudioSample,
        color_mode: bool,
        env: &mut DrawEnv,
    ) -> usize {
        if !self.initialized {
            self.init(env);
        }
        if color_mode && self.last_color_mode != Some(true) {
            self.assign_colors(env);
        }
        self.last_color_mode = Some(color_mode);
        self.last_sample = Some(sample);

        let transform = self.frame_transform(canvas, env.grid_unit);
        let show = env.show_control_points;
        let mut drawn = 0;
        for stroke in &mut self.strokes {
            if stroke.draw(surface, transform, sample, color_mode, show) {
                drawn += 1;
            }
        }
        drawn
    }
}

#[cfg(test)]
#[path = "../../tests/unit/character/glyph.rs"]
mod tests;
