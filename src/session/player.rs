use std::time::Duration;

use crate::{
    audio::sampler::{FeatureSource, Sampler},
    character::catalog::Catalog,
    foundation::{
        core::{AudioSample, Canvas, Rgba8},
        error::GlyphResult,
    },
    render::{cpu::CpuSurface, frame::FrameRGBA, surface::RenderSurface},
};

/// What one tick drew.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub character: String,
    pub sample: AudioSample,
    pub strokes_drawn: usize,
    pub active: bool,
    pub color_mode: bool,
}

/// Frame-loop glue: poll the sampler, clear, draw the current character.
#[derive(Debug)]
pub struct Player<S> {
    catalog: Catalog,
    sampler: Sampler<S>,
    background: Rgba8,
    color_mode: bool,
    ticks: u64,
}

impl<S: FeatureSource> Player<S> {
    pub fn new(catalog: Catalog, sampler: Sampler<S>, background: Rgba8) -> Self {
        Self {
            catalog,
            sampler,
            background,
            color_mode: false,
            ticks: 0,
        }
    }

    pub fn with_color_mode(mut self, on: bool) -> Self {
        self.color_mode = on;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn sampler(&self) -> &Sampler<S> {
        &self.sampler
    }

    pub fn sampler_mut(&mut self) -> &mut Sampler<S> {
        &mut self.sampler
    }

    pub fn color_mode(&self) -> bool {
        self.color_mode
    }

    pub fn set_color_mode(&mut self, on: bool) {
        self.color_mode = on;
    }

    pub fn toggle_color_mode(&mut self) -> bool {
        self.color_mode = !self.color_mode;
        self.color_mode
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Start audio capture. On failure the player keeps running on the last-known sample.
    pub fn enable_audio(&mut self) -> GlyphResult<()> {
        self.sampler.enable()
    }

    pub fn stop_audio(&mut self) {
        self.sampler.stop();
    }

    pub fn tick<R: RenderSurface + ?Sized>(&mut self, surface: &mut R) -> TickReport {
        let sample = self.sampler.sample();
        self.draw(surface, sample)
    }

    /// [`Player::tick`] against an explicit sampler clock.
    pub fn tick_at<R: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut R,
        elapsed: Duration,
    ) -> TickReport {
        let sample = self.sampler.sample_at(elapsed);
        self.draw(surface, sample)
    }

    fn draw<R: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut R,
        sample: AudioSample,
    ) -> TickReport {
        let canvas = surface.size();
        surface.clear(self.background);
        let strokes_drawn = self
            .catalog
            .draw_current(surface, canvas, sample, self.color_mode);
        self.ticks += 1;
        TickReport {
            character: self.catalog.current().id().to_string(),
            sample,
            strokes_drawn,
            active: self.sampler.is_active(),
            color_mode: self.color_mode,
        }
    }
}

/// Rasterize the catalog's current character for one sample.
pub fn render_frame(
    catalog: &mut Catalog,
    canvas: Canvas,
    sample: AudioSample,
    color_mode: bool,
    background: Rgba8,
) -> GlyphResult<FrameRGBA> {
    let mut surface = CpuSurface::new(canvas)?;
    surface.clear(background);
    catalog.draw_current(&mut surface, canvas, sample, color_mode);
    Ok(surface.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
