use crate::foundation::error::{GlyphError, GlyphResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> GlyphResult<Self> {
        if width == 0 || height == 0 {
            return Err(GlyphError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const CONTROL_POINT: Self = Self::new(255, 0, 0, 255);
    /// Stroke color when color mode is off: black at 80% opacity.
    pub const INK: Self = Self::new(0, 0, 0, 204);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `[r, g, b]` with a fractional alpha in `[0, 1]`.
    pub fn from_rgb_alpha(rgb: [u8; 3], alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Premultiplied bytes, matching what the raster surface stores.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }
        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

/// One reading of the two live audio features.
///
/// `loudness` is band energy on a `0..=255` scale and rarely exceeds ~200 in practice.
/// `centroid` is the spectral centroid in Hz.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioSample {
    pub loudness: f64,
    pub centroid: f64,
}

impl AudioSample {
    pub const SILENT: Self = Self::new(0.0, 0.0);

    pub const fn new(loudness: f64, centroid: f64) -> Self {
        Self { loudness, centroid }
    }
}

/// Per-frame mapping from stroke-space units to canvas pixels.
///
/// `canvas = stroke * scale + origin`. Equality is by value so it can key a cache directly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameTransform {
    pub origin: Vec2,
    pub scale: f64,
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl FrameTransform {
    pub fn new(origin_x: f64, origin_y: f64, scale: f64) -> Self {
        Self {
            origin: Vec2::new(origin_x, origin_y),
            scale,
        }
    }

    /// Center a glyph of `nominal` stroke-space size inside `canvas` at `grid_unit` pixels per
    /// unit.
    pub fn centered(canvas: Canvas, nominal: Size, grid_unit: f64) -> Self {
        let cols = f64::from(canvas.width) / grid_unit;
        let rows = f64::from(canvas.height) / grid_unit;
        Self::new(
            (cols - nominal.width) / 2.0 * grid_unit,
            (rows - nominal.height) / 2.0 * grid_unit,
            grid_unit,
        )
    }

    pub fn apply(self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.origin.x,
            p.y * self.scale + self.origin.y,
        )
    }

    pub fn to_affine(self) -> Affine {
        Affine::translate(self.origin) * Affine::scale(self.scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
