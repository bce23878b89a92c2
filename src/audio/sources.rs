use crate::{
    audio::sampler::FeatureSource,
    foundation::{
        core::AudioSample,
        error::{GlyphError, GlyphResult},
    },
};

/// Always-open source that reports silence.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSource;

impl FeatureSource for SilentSource {
    fn open(&mut self) -> GlyphResult<()> {
        Ok(())
    }

    fn close(&mut self) {}

    fn analyze(&mut self) -> Option<AudioSample> {
        Some(AudioSample::SILENT)
    }
}

/// Replays a fixed list of samples in a loop, one per analysis.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: Vec<AudioSample>,
    cursor: usize,
    open: bool,
    unavailable: Option<String>,
}

impl ScriptedSource {
    pub fn new(script: Vec<AudioSample>) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }

    /// A source whose `open` always fails with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Evenly spaced loudness ramp from `lo` to `hi` at a fixed centroid.
    pub fn loudness_ramp(lo: f64, hi: f64, steps: usize, centroid: f64) -> Self {
        let script = match steps {
            0 => Vec::new(),
            1 => vec![AudioSample::new(lo, centroid)],
            n => (0..n)
                .map(|i| {
                    let t = i as f64 / (n - 1) as f64;
                    AudioSample::new(lo + (hi - lo) * t, centroid)
                })
                .collect(),
        };
        Self::new(script)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn script(&self) -> &[AudioSample] {
        &self.script
    }
}

impl FeatureSource for ScriptedSource {
    fn open(&mut self) -> GlyphResult<()> {
        if let Some(reason) = &self.unavailable {
            return Err(GlyphError::audio_unavailable(reason.clone()));
        }
        self.open = true;
        Ok(())
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn analyze(&mut self) -> Option<AudioSample> {
        if !self.open || self.script.is_empty() {
            return None;
        }
        let sample = self.script[self.cursor % self.script.len()];
        self.cursor = (self.cursor + 1) % self.script.len();
        Some(sample)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/sources.rs"]
mod tests;
