use std::{collections::HashSet, path::Path};

use anyhow::Context;

use crate::{
    character::{
        builtin,
        glyph::{Character, DrawEnv},
    },
    foundation::{
        core::{AudioSample, Canvas, Point, Size},
        error::{GlyphError, GlyphResult},
    },
    geometry::arc::{ArcSpec, DEFAULT_SWEEP_DEG},
    render::surface::RenderSurface,
    stroke::{
        component::{StrokeComponent, StrokeKind},
        shapes::CutAngles,
        weight::WeightMap,
    },
};

/// Serialized form of a glyph set.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatalogDef {
    pub characters: Vec<CharacterDef>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    /// Nominal `[width, height]` in grid units.
    pub size: [f64; 2],
    pub strokes: Vec<StrokeDef>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeDef {
    pub kind: StrokeKind,
    pub points: Vec<[f64; 2]>,
    #[serde(default)]
    pub weight: WeightMap,
    #[serde(default, skip_serializing_if = "is_square_cut")]
    pub cuts: CutAngles,
    /// Explicit sweep for two-point arcs; defaults to 90°.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep_deg: Option<f64>,
}

fn is_square_cut(cuts: &CutAngles) -> bool {
    cuts.is_square()
}

impl StrokeDef {
    pub fn build(&self) -> StrokeComponent {
        let points: Vec<Point> = self.points.iter().map(|&[x, y]| Point::new(x, y)).collect();
        let stroke = match (self.kind, self.sweep_deg, points.as_slice()) {
            (StrokeKind::Arc, Some(sweep), &[a, b]) => {
                StrokeComponent::arc(ArcSpec::ChordAndAngle(a, b, sweep), self.weight.clone())
            }
            _ => StrokeComponent::new(self.kind, points, self.weight.clone()),
        };
        stroke.with_cuts(self.cuts)
    }
}

impl From<&StrokeComponent> for StrokeDef {
    fn from(stroke: &StrokeComponent) -> Self {
        let sweep_deg = match stroke.arc_spec() {
            Some(ArcSpec::ChordAndAngle(_, _, sweep)) if *sweep != DEFAULT_SWEEP_DEG => {
                Some(*sweep)
            }
            _ => None,
        };
        Self {
            kind: stroke.kind(),
            points: stroke.points().iter().map(|p| [p.x, p.y]).collect(),
            weight: stroke.weight().clone(),
            cuts: stroke.cuts(),
            sweep_deg,
        }
    }
}

impl CharacterDef {
    pub fn build(&self) -> GlyphResult<Character> {
        if self.id.trim().is_empty() {
            return Err(GlyphError::validation("character id must not be empty"));
        }
        let [w, h] = self.size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(GlyphError::validation(format!(
                "character '{}' size must be finite and > 0",
                self.id
            )));
        }
        let strokes = self.strokes.iter().map(StrokeDef::build).collect();
        let ch = Character::new(self.id.clone(), self.name.clone(), Size::new(w, h), strokes);
        Ok(match &self.phonetic {
            Some(p) => ch.with_phonetic(p.clone()),
            None => ch,
        })
    }
}

impl From<&Character> for CharacterDef {
    fn from(ch: &Character) -> Self {
        let size = ch.nominal_size();
        Self {
            id: ch.id().to_string(),
            name: ch.name().to_string(),
            phonetic: ch.phonetic().map(str::to_string),
            size: [size.width, size.height],
            strokes: ch.strokes().iter().map(StrokeDef::from).collect(),
        }
    }
}

/// Ordered, navigable set of characters plus the state they share while drawing.
#[derive(Debug)]
pub struct Catalog {
    characters: Vec<Character>,
    current: usize,
    env: DrawEnv,
}

impl Catalog {
    /// Requires at least one character and unique ids.
    pub fn new(characters: Vec<Character>, env: DrawEnv) -> GlyphResult<Self> {
        if characters.is_empty() {
            return Err(GlyphError::validation("catalog needs at least one character"));
        }
        let mut seen = HashSet::new();
        for ch in &characters {
            if !seen.insert(ch.id()) {
                return Err(GlyphError::validation(format!(
                    "duplicate character id '{}'",
                    ch.id()
                )));
            }
        }
        Ok(Self {
            characters,
            current: 0,
            env,
        })
    }

    /// The bundled glyph set.
    pub fn builtin(env: DrawEnv) -> Self {
        Self {
            characters: builtin::characters(),
            current: 0,
            env,
        }
    }

    pub fn from_def(def: &CatalogDef, env: DrawEnv) -> GlyphResult<Self> {
        let characters = def
            .characters
            .iter()
            .map(CharacterDef::build)
            .collect::<GlyphResult<Vec<_>>>()?;
        Self::new(characters, env)
    }

    pub fn from_json_str(json: &str, env: DrawEnv) -> GlyphResult<Self> {
        let def: CatalogDef = serde_json::from_str(json)
            .map_err(|e| GlyphError::serde(format!("catalog json parse failed: {e}")))?;
        Self::from_def(&def, env)
    }

    pub fn load_json(path: &Path, env: DrawEnv) -> GlyphResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog from '{}'", path.display()))
            .map_err(GlyphError::from)?;
        Self::from_json_str(&json, env)
    }

    pub fn to_def(&self) -> CatalogDef {
        CatalogDef {
            characters: self.characters.iter().map(CharacterDef::from).collect(),
        }
    }

    pub fn to_json_string(&self) -> GlyphResult<String> {
        serde_json::to_string_pretty(&self.to_def())
            .map_err(|e| GlyphError::serde(format!("catalog json encode failed: {e}")))
    }

    pub fn save_json(&self, path: &Path) -> GlyphResult<()> {
        let json = self.to_json_string()?;
        std::fs::write(path, json)
            .with_context(|| format!("write catalog to '{}'", path.display()))
            .map_err(GlyphError::from)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Character {
        &self.characters[self.current]
    }

    pub fn env(&self) -> &DrawEnv {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut DrawEnv {
        &mut self.env
    }

    /// Step forward. Stays on the last character instead of wrapping; returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.characters.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back. Stays on the first character instead of wrapping; returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn select(&mut self, index: usize) -> GlyphResult<()> {
        if index >= self.characters.len() {
            return Err(GlyphError::validation(format!(
                "character index {index} out of range (catalog has {})",
                self.characters.len()
            )));
        }
        self.current = index;
        Ok(())
    }

    /// Index of the character whose id or display name is `key`.
    pub fn find(&self, key: &str) -> Option<usize> {
        self.characters
            .iter()
            .position(|c| c.id() == key || c.name() == key)
    }

    /// Select by id, display name, or decimal index.
    pub fn select_key(&mut self, key: &str) -> GlyphResult<()> {
        if let Some(i) = self.find(key) {
            self.current = i;
            return Ok(());
        }
        match key.parse::<usize>() {
            Ok(i) => self.select(i),
            Err(_) => Err(GlyphError::validation(format!("no character named '{key}'"))),
        }
    }

    /// Draw the current character. Returns how many strokes produced output.
    pub fn draw_current<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        canvas: Canvas,
        sample: AudioSample,
        color_mode: bool,
    ) -> usize {
        let ch = &mut self.characters[self.current];
        ch.draw(surface, canvas, sample, color_mode, &mut self.env)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/character/catalog.rs"]
mod tests;
