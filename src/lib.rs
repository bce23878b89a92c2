#![forbid(unsafe_code)]
//! Audio-reactive glyph rendering.
//!
//! A [`Character`] is a fixed set of stroke primitives laid out on a unit grid. Every frame the
//! stroke widths are re-evaluated from the live [`AudioSample`] and drawn onto a
//! [`RenderSurface`]. Geometry (arc fitting in particular) is solved once and cached.

mod audio;
mod character;
mod config;
mod foundation;
mod geometry;
mod render;
mod session;
mod stroke;

pub use audio::{
    sampler::{
        CaptureState, DEFAULT_GATE, DEFAULT_SAMPLE_INTERVAL, FeatureSource, Sampler,
        SamplerSettings,
    },
    sources::{ScriptedSource, SilentSource},
};
pub use character::{
    builtin::characters as builtin_characters,
    catalog::{Catalog, CatalogDef, CharacterDef, StrokeDef},
    glyph::{Character, DEFAULT_GRID_UNIT, DrawEnv},
    palette::{ALPHA_VALUES, ColorPick, Palette},
};
pub use config::{AudioConfig, CacheConfig, Config, ExportConfig};
pub use foundation::{
    core::{Affine, AudioSample, BezPath, Canvas, FrameTransform, Point, Rect, Rgba8, Size, Vec2},
    error::{GlyphError, GlyphResult},
    math::{cut_offset_rad, map_range, normalize_angle},
};
pub use geometry::{
    arc::{ArcSpec, DEFAULT_SWEEP_DEG, SolvedArc, solve_arc},
    memo::{ArcCache, ArcKey, CacheStats, Memoizer, solve_arc_cached},
};
pub use render::{
    cpu::CpuSurface,
    frame::FrameRGBA,
    recording::{DrawCommand, RecordingSurface},
    surface::{ArcClosure, RenderSurface, StrokeStyle},
};
pub use session::{
    export::{CaptureSession, SweepGrid, export_file_name, save_png, unix_millis},
    player::{Player, TickReport, render_frame},
};
pub use stroke::{
    component::{CONTROL_POINT_DIAMETER, InputCache, StrokeComponent, StrokeGeometry, StrokeKind},
    shapes::{ArcSpan, CutAngles, arc_span, polyline_bevel, segment_mid_outline, segment_outline},
    weight::{CENTROID_SPAN, DEFAULT_WIDTH, Feature, LOUDNESS_SPAN, Remap, WeightMap},
};
