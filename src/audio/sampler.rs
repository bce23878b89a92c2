use std::time::{Duration, Instant};

use crate::foundation::{
    core::AudioSample,
    error::{GlyphError, GlyphResult},
};

pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(5);
/// Loudness above which the input counts as active.
pub const DEFAULT_GATE: f64 = 50.0;

/// Live audio feature extraction, provided by the host.
///
/// `open` may fail (no device, permission denied). `close` must be safe to call at any time,
/// including after a failed `open`.
pub trait FeatureSource {
    fn open(&mut self) -> GlyphResult<()>;
    fn close(&mut self);
    /// Current features, or `None` when nothing new is available.
    fn analyze(&mut self) -> Option<AudioSample>;
}

impl<S: FeatureSource + ?Sized> FeatureSource for Box<S> {
    fn open(&mut self) -> GlyphResult<()> {
        (**self).open()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn analyze(&mut self) -> Option<AudioSample> {
        (**self).analyze()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Capturing,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerSettings {
    pub interval: Duration,
    pub gate: f64,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_SAMPLE_INTERVAL,
            gate: DEFAULT_GATE,
        }
    }
}

/// Interval-gated poller over a [`FeatureSource`].
///
/// The source is analyzed at most once per `interval`; between refreshes, and whenever
/// capture is not running, the last-known sample is returned.
#[derive(Debug)]
pub struct Sampler<S> {
    source: S,
    settings: SamplerSettings,
    state: CaptureState,
    epoch: Instant,
    last_refresh: Option<Duration>,
    current: AudioSample,
    active: bool,
    refreshes: u64,
}

impl<S: FeatureSource> Sampler<S> {
    pub fn new(source: S, settings: SamplerSettings) -> Self {
        Self {
            source,
            settings,
            state: CaptureState::Idle,
            epoch: Instant::now(),
            last_refresh: None,
            current: AudioSample::SILENT,
            active: false,
            refreshes: 0,
        }
    }

    pub fn settings(&self) -> SamplerSettings {
        self.settings
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn current(&self) -> AudioSample {
        self.current
    }

    /// Loudness of the last refresh was above the gate.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of times the source has actually been analyzed.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Start capturing. A no-op while already capturing.
    ///
    /// On failure the source is closed again and the sampler keeps serving the last-known
    /// sample.
    pub fn enable(&mut self) -> GlyphResult<()> {
        if self.state == CaptureState::Capturing {
            return Ok(());
        }
        match self.source.open() {
            Ok(()) => {
                self.state = CaptureState::Capturing;
                self.last_refresh = None;
                tracing::debug!("audio capture started");
                Ok(())
            }
            Err(err) => {
                self.source.close();
                tracing::warn!(error = %err, "audio input unavailable");
                Err(match err {
                    e @ GlyphError::AudioUnavailable(_) => e,
                    other => GlyphError::audio_unavailable(other.to_string()),
                })
            }
        }
    }

    /// Stop capturing, keeping the last-known sample.
    pub fn stop(&mut self) {
        if self.state == CaptureState::Capturing {
            self.source.close();
            self.state = CaptureState::Stopped;
            tracing::debug!("audio capture stopped");
        }
    }

    pub fn sample(&mut self) -> AudioSample {
        let elapsed = self.epoch.elapsed();
        self.sample_at(elapsed)
    }

    /// Like [`Sampler::sample`] with an explicit clock reading since the sampler was created.
    pub fn sample_at(&mut self, elapsed: Duration) -> AudioSample {
        if self.state != CaptureState::Capturing {
            return self.current;
        }
        let due = match self.last_refresh {
            None => true,
            Some(last) => elapsed.saturating_sub(last) >= self.settings.interval,
        };
        if !due {
            return self.current;
        }
        self.last_refresh = Some(elapsed);
        if let Some(sample) = self.source.analyze() {
            self.refreshes += 1;
            self.current = sample;
            self.active = sample.loudness > self.settings.gate;
        }
        self.current
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/sampler.rs"]
mod tests;
