use super::*;

fn s(loudness: f64, centroid: f64) -> AudioSample {
    AudioSample::new(loudness, centroid)
}

#[test]
fn linear_starts_at_default_width() {
    let w = WeightMap::linear(Feature::Centroid, [0.0, 8000.0], 100.0);
    assert_eq!(w.width(s(0.0, 0.0)), DEFAULT_WIDTH);
    assert_eq!(w.width(s(0.0, 8000.0)), 100.0);
    assert_eq!(w.width(s(0.0, 4000.0)), 65.0);
}

#[test]
fn gated_switches_at_threshold() {
    let w = WeightMap::gated(
        Feature::Loudness,
        50.0,
        WeightMap::constant(DEFAULT_WIDTH),
        WeightMap::linear(Feature::Loudness, [50.0, 150.0], 100.0),
    );
    assert_eq!(w.width(s(49.9, 0.0)), 30.0);
    assert_eq!(w.width(s(50.0, 0.0)), 30.0);
    assert_eq!(w.width(s(150.0, 0.0)), 100.0);
}

#[test]
fn product_multiplies_factors() {
    let w = WeightMap::product(1.2, 1.2, CENTROID_SPAN, 1.44, 100.0);
    assert!((w.width(s(0.0, 0.0)) - 30.0).abs() < 1e-9);
    assert!((w.width(s(150.0, 8000.0)) - 100.0).abs() < 1e-9);
}

#[test]
fn widths_never_go_negative() {
    let maps = [
        WeightMap::linear(Feature::Centroid, [0.0, 6000.0], 0.0),
        WeightMap::linear(Feature::Loudness, [0.0, 150.0], -40.0),
        WeightMap::product(1.2, 3.0, CENTROID_SPAN, 3.6, 0.0),
        WeightMap::constant(f64::NAN),
        WeightMap::linear(Feature::Loudness, [0.0, 0.0], 10.0),
    ];
    for map in &maps {
        for l in [0.0, 25.0, 60.0, 150.0, 255.0, 1e6] {
            for c in [0.0, 1000.0, 6000.0, 9000.0, 1e9] {
                let w = map.width(s(l, c));
                assert!(w >= 0.0 && w.is_finite(), "{map:?} at ({l}, {c}) gave {w}");
            }
        }
    }
}

#[test]
fn eval_extrapolates_unclamped() {
    let w = WeightMap::linear(Feature::Centroid, [0.0, 6000.0], 0.0);
    assert!(w.eval(s(0.0, 9000.0)) < 0.0);
    assert_eq!(w.width(s(0.0, 9000.0)), 0.0);
}

#[test]
fn json_shape_is_tagged() {
    let w = WeightMap::gated(
        Feature::Centroid,
        1000.0,
        WeightMap::constant(30.0),
        WeightMap::linear(Feature::Centroid, [1000.0, 5000.0], 10.0),
    );
    let v = serde_json::to_value(&w).unwrap();
    assert_eq!(v["type"], "gated");
    assert_eq!(v["feature"], "centroid");
    assert_eq!(v["above"]["type"], "linear");
    let back: WeightMap = serde_json::from_value(v).unwrap();
    assert_eq!(back, w);
}
