//! Runtime configuration: defaults, JSON files, and `SONOGLYPH_*` environment overrides.

use std::{path::Path, path::PathBuf, time::Duration};

use anyhow::Context;

use crate::{
    audio::sampler::SamplerSettings,
    character::glyph::{DEFAULT_GRID_UNIT, DrawEnv},
    foundation::{
        core::{Canvas, Rgba8},
        error::{GlyphError, GlyphResult},
    },
    geometry::memo::{ArcCache, DEFAULT_CAPACITY, DEFAULT_TTL},
};

pub const ENV_GRID_UNIT: &str = "SONOGLYPH_GRID_UNIT";
pub const ENV_COLOR_MODE: &str = "SONOGLYPH_COLOR_MODE";
pub const ENV_SEED: &str = "SONOGLYPH_SEED";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Pixels per stroke-space unit.
    pub grid_unit: f64,
    pub canvas: Canvas,
    pub audio: AudioConfig,
    pub color_mode: bool,
    pub show_control_points: bool,
    pub background: Rgba8,
    pub export: ExportConfig,
    pub arc_cache: CacheConfig,
    /// Fixed seed for palette assignment. Unset means a fresh OS seed per run.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_unit: DEFAULT_GRID_UNIT,
            canvas: Canvas {
                width: 800,
                height: 800,
            },
            audio: AudioConfig::default(),
            color_mode: false,
            show_control_points: false,
            background: Rgba8::WHITE,
            export: ExportConfig::default(),
            arc_cache: CacheConfig::default(),
            seed: None,
        }
    }
}

/// Parameters handed to the host's capture/FFT stage, plus the sampler's own gating.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    pub sample_interval_ms: u64,
    pub fft_smoothing: f64,
    pub fft_bins: u32,
    pub mic_amp: f64,
    pub gate: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 5,
            fft_smoothing: 0.8,
            fft_bins: 64,
            mic_amp: 0.8,
            gate: 50.0,
        }
    }
}

impl AudioConfig {
    pub fn sampler_settings(&self) -> SamplerSettings {
        SamplerSettings {
            interval: Duration::from_millis(self.sample_interval_ms),
            gate: self.gate,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub base_name: String,
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_name: "sonoglyph".to_string(),
            dir: PathBuf::from("."),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub capacity: usize,
    pub ttl_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl_ms: DEFAULT_TTL.as_millis() as u64,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> GlyphResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| GlyphError::serde(format!("config json parse failed: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_json(path: &Path) -> GlyphResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config from '{}'", path.display()))
            .map_err(GlyphError::from)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> GlyphResult<()> {
        if !self.grid_unit.is_finite() || self.grid_unit <= 0.0 {
            return Err(GlyphError::validation("grid_unit must be finite and > 0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(GlyphError::validation("canvas width/height must be > 0"));
        }
        if self.arc_cache.capacity == 0 {
            return Err(GlyphError::validation("arc_cache.capacity must be > 0"));
        }
        if self.arc_cache.ttl_ms == 0 {
            return Err(GlyphError::validation("arc_cache.ttl_ms must be > 0"));
        }
        if self.audio.sample_interval_ms == 0 {
            return Err(GlyphError::validation("audio.sample_interval_ms must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.audio.fft_smoothing) {
            return Err(GlyphError::validation("audio.fft_smoothing must be in [0, 1]"));
        }
        if self.audio.fft_bins == 0 {
            return Err(GlyphError::validation("audio.fft_bins must be > 0"));
        }
        if self.export.base_name.trim().is_empty() {
            return Err(GlyphError::validation("export.base_name must not be empty"));
        }
        Ok(())
    }

    /// Apply `SONOGLYPH_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`. Unparseable or out-of-range values are ignored.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(grid) = lookup(ENV_GRID_UNIT)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|g| g.is_finite() && *g > 0.0)
        {
            self.grid_unit = grid;
        }
        if let Some(on) = lookup(ENV_COLOR_MODE).and_then(|v| parse_flag(&v)) {
            self.color_mode = on;
        }
        if let Some(seed) = lookup(ENV_SEED).and_then(|v| v.trim().parse::<u64>().ok()) {
            self.seed = Some(seed);
        }
        self
    }

    pub fn arc_cache(&self) -> ArcCache {
        ArcCache::new(
            self.arc_cache.capacity,
            Duration::from_millis(self.arc_cache.ttl_ms),
        )
    }

    /// Fresh draw environment built from these settings.
    pub fn draw_env(&self) -> DrawEnv {
        let mut env = DrawEnv::new(self.grid_unit, self.seed).with_arc_cache(self.arc_cache());
        env.show_control_points = self.show_control_points;
        env
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
