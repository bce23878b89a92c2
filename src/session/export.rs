use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    character::catalog::Catalog,
    foundation::{
        core::{AudioSample, Canvas, Rgba8},
        error::{GlyphError, GlyphResult},
    },
    render::frame::FrameRGBA,
    session::player::render_frame,
    stroke::weight::{CENTROID_SPAN, LOUDNESS_SPAN},
};

/// `<base>-<character>-<timestamp>.png`
pub fn export_file_name(base: &str, character: &str, timestamp: u64) -> String {
    format!("{base}-{character}-{timestamp}.png")
}

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Write `frame` as a straight-alpha RGBA PNG, creating parent directories as needed.
pub fn save_png(frame: &FrameRGBA, path: &Path) -> GlyphResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            GlyphError::render(format!(
                "failed to create output dir '{}': {e}",
                parent.display()
            ))
        })?;
    }
    let data = frame.to_straight_rgba();
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| GlyphError::render(format!("write png '{}': {e}", path.display())))
}

/// Evenly spaced audio samples covering a loudness x centroid rectangle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SweepGrid {
    pub loudness: [f64; 2],
    pub centroid: [f64; 2],
    pub loudness_steps: usize,
    pub centroid_steps: usize,
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            loudness: LOUDNESS_SPAN,
            centroid: CENTROID_SPAN,
            loudness_steps: 4,
            centroid_steps: 3,
        }
    }
}

impl SweepGrid {
    pub fn len(&self) -> usize {
        self.loudness_steps * self.centroid_steps
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major samples: centroid varies fastest.
    pub fn samples(&self) -> Vec<AudioSample> {
        let ls = steps(self.loudness, self.loudness_steps);
        let cs = steps(self.centroid, self.centroid_steps);
        ls.iter()
            .flat_map(|&l| cs.iter().map(move |&c| AudioSample::new(l, c)))
            .collect()
    }
}

fn steps(span: [f64; 2], n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![span[0]],
        n => (0..n)
            .map(|i| span[0] + (span[1] - span[0]) * i as f64 / (n - 1) as f64)
            .collect(),
    }
}

/// Caller-owned sequencing for bulk frame capture.
///
/// Every saved frame gets a distinct timestamp: the session start plus the frame counter.
#[derive(Clone, Debug)]
pub struct CaptureSession {
    base_name: String,
    dir: PathBuf,
    started_ms: u64,
    frames: u64,
    sweeps: u64,
}

impl CaptureSession {
    pub fn new(base_name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self::starting_at(base_name, dir, unix_millis())
    }

    pub fn starting_at(
        base_name: impl Into<String>,
        dir: impl Into<PathBuf>,
        started_ms: u64,
    ) -> Self {
        Self {
            base_name: base_name.into(),
            dir: dir.into(),
            started_ms,
            frames: 0,
            sweeps: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn sweeps(&self) -> u64 {
        self.sweeps
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the next saved frame of `character` will get. Does not advance the counter.
    pub fn next_path(&self, character: &str) -> PathBuf {
        let name = export_file_name(&self.base_name, character, self.started_ms + self.frames);
        self.dir.join(name)
    }

    pub fn save(&mut self, frame: &FrameRGBA, character: &str) -> GlyphResult<PathBuf> {
        let path = self.next_path(character);
        save_png(frame, &path)?;
        self.frames += 1;
        tracing::debug!(path = %path.display(), frame = self.frames, "saved frame");
        Ok(path)
    }

    /// Render and save the current character once per grid sample.
    pub fn capture_sweep(
        &mut self,
        catalog: &mut Catalog,
        grid: &SweepGrid,
        canvas: Canvas,
        color_mode: bool,
        background: Rgba8,
    ) -> GlyphResult<Vec<PathBuf>> {
        let id = catalog.current().id().to_string();
        let mut written = Vec::with_capacity(grid.len());
        for sample in grid.samples() {
            let frame = render_frame(catalog, canvas, sample, color_mode, background)?;
            written.push(self.save(&frame, &id)?);
        }
        self.sweeps += 1;
        tracing::info!(
            character = %id,
            frames = written.len(),
            sweep = self.sweeps,
            "sweep captured"
        );
        Ok(written)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/export.rs"]
mod tests;
