use crate::foundation::{core::AudioSample, math::map_range};

/// Stroke width when both features are silent.
pub const DEFAULT_WIDTH: f64 = 30.0;

/// Loudness range the product factors are authored against.
pub const LOUDNESS_SPAN: [f64; 2] = [0.0, 150.0];
/// Centroid range (Hz) the product factors are authored against.
pub const CENTROID_SPAN: [f64; 2] = [0.0, 8000.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Loudness,
    Centroid,
}

impl Feature {
    pub fn read(self, sample: AudioSample) -> f64 {
        match self {
            Self::Loudness => sample.loudness,
            Self::Centroid => sample.centroid,
        }
    }
}

/// Unclamped linear remap from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Remap {
    pub from: [f64; 2],
    pub to: [f64; 2],
}

impl Remap {
    pub const fn new(from: [f64; 2], to: [f64; 2]) -> Self {
        Self { from, to }
    }

    pub fn apply(self, v: f64) -> f64 {
        map_range(v, self.from[0], self.from[1], self.to[0], self.to[1])
    }
}

/// Audio-to-width mapping of a stroke, in pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WeightMap {
    Constant {
        width: f64,
    },
    Linear {
        feature: Feature,
        from: [f64; 2],
        to: [f64; 2],
    },
    /// `below` applies while the feature is under `threshold`, `above` from the threshold on.
    Gated {
        feature: Feature,
        threshold: f64,
        below: Box<WeightMap>,
        above: Box<WeightMap>,
    },
    /// Both features remap to factors; `output` remaps their product.
    Product {
        loudness: Remap,
        centroid: Remap,
        output: Remap,
    },
}

impl Default for WeightMap {
    fn default() -> Self {
        Self::Constant {
            width: DEFAULT_WIDTH,
        }
    }
}

impl WeightMap {
    pub fn constant(width: f64) -> Self {
        Self::Constant { width }
    }

    /// Linear from [`DEFAULT_WIDTH`] at `from[0]` to `to` at `from[1]`.
    pub fn linear(feature: Feature, from: [f64; 2], to: f64) -> Self {
        Self::Linear {
            feature,
            from,
            to: [DEFAULT_WIDTH, to],
        }
    }

    pub fn linear_between(feature: Feature, from: [f64; 2], to: [f64; 2]) -> Self {
        Self::Linear { feature, from, to }
    }

    pub fn gated(feature: Feature, threshold: f64, below: WeightMap, above: WeightMap) -> Self {
        Self::Gated {
            feature,
            threshold,
            below: Box::new(below),
            above: Box::new(above),
        }
    }

    /// Product of `1..loudness_gain` over [`LOUDNESS_SPAN`] and `1..centroid_gain` over
    /// `centroid_span`, remapped from `1..product_max` to `DEFAULT_WIDTH..to`.
    pub fn product(
        loudness_gain: f64,
        centroid_gain: f64,
        centroid_span: [f64; 2],
        product_max: f64,
        to: f64,
    ) -> Self {
        Self::Product {
            loudness: Remap::new(LOUDNESS_SPAN, [1.0, loudness_gain]),
            centroid: Remap::new(centroid_span, [1.0, centroid_gain]),
            output: Remap::new([1.0, product_max], [DEFAULT_WIDTH, to]),
        }
    }

    /// Raw mapped value, possibly negative or non-finite.
    pub fn eval(&self, sample: AudioSample) -> f64 {
        match self {
            Self::Constant { width } => *width,
            Self::Linear { feature, from, to } => {
                Remap::new(*from, *to).apply(feature.read(sample))
            }
            Self::Gated {
                feature,
                threshold,
                below,
                above,
            } => {
                if feature.read(sample) < *threshold {
                    below.eval(sample)
                } else {
                    above.eval(sample)
                }
            }
            Self::Product {
                loudness,
                centroid,
                output,
            } => {
                let l = loudness.apply(sample.loudness);
                let c = centroid.apply(sample.centroid);
                output.apply(l * c)
            }
        }
    }

    /// Drawable width: [`WeightMap::eval`] clamped to `>= 0`, with non-finite results as `0`.
    pub fn width(&self, sample: AudioSample) -> f64 {
        let w = self.eval(sample);
        if w.is_finite() { w.max(0.0) } else { 0.0 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/weight.rs"]
mod tests;
