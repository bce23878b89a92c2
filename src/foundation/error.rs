/// Convenience result type used across sonoglyph.
pub type GlyphResult<T> = Result<T, GlyphError>;

/// Top-level error taxonomy used by library APIs.
///
/// None of these are fatal to the frame loop: geometry failures are resolved once at init and
/// the affected stroke is skipped, audio failures leave the sampler on its last-known values.
#[derive(thiserror::Error, Debug)]
pub enum GlyphError {
    /// Invalid user-provided configuration or catalog data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Insufficient or degenerate control points for a stroke primitive.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Audio capture could not be started (permission denied, no device).
    #[error("audio unavailable: {0}")]
    AudioUnavailable(String),

    /// Errors while rasterizing or exporting a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphError {
    /// Build a [`GlyphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`GlyphError::AudioUnavailable`] value.
    pub fn audio_unavailable(msg: impl Into<String>) -> Self {
        Self::AudioUnavailable(msg.into())
    }

    /// Build a [`GlyphError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GlyphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
