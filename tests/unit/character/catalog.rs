use super::*;
use crate::{
    foundation::core::Canvas,
    render::recording::RecordingSurface,
    stroke::weight::Feature,
};

const TWO_GLYPHS: &str = r#"{
  "characters": [
    {
      "id": "er",
      "name": "二",
      "phonetic": "èr",
      "size": [10, 6],
      "strokes": [
        { "kind": "segment_mid", "points": [[1, 0], [9, 0]] },
        {
          "kind": "segment",
          "points": [[0, 6], [10, 6]],
          "weight": { "type": "linear", "feature": "loudness", "from": [0, 150], "to": [30, 60] }
        }
      ]
    },
    {
      "id": "wan",
      "name": "弯",
      "size": [4, 4],
      "strokes": [
        { "kind": "arc", "points": [[0, 0], [4, 0]], "sweep_deg": 120 },
        { "kind": "segment", "points": [[0, 4], [4, 4]], "cuts": { "start": 90, "end": 60 } }
      ]
    }
  ]
}"#;

fn env() -> DrawEnv {
    DrawEnv::new(30.0, Some(11))
}

#[test]
fn builtin_catalog_starts_at_the_first_glyph() {
    let cat = Catalog::builtin(env());
    assert_eq!(cat.len(), 27);
    assert_eq!(cat.current_index(), 0);
    assert_eq!(cat.current().name(), "气");
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut cat = Catalog::from_json_str(TWO_GLYPHS, env()).unwrap();
    assert!(!cat.previous());
    assert_eq!(cat.current_index(), 0);
    assert!(cat.next());
    assert_eq!(cat.current().id(), "wan");
    assert!(!cat.next());
    assert_eq!(cat.current_index(), 1);
    assert!(cat.previous());
    assert_eq!(cat.current_index(), 0);
}

#[test]
fn select_by_id_name_or_index() {
    let mut cat = Catalog::from_json_str(TWO_GLYPHS, env()).unwrap();
    cat.select_key("弯").unwrap();
    assert_eq!(cat.current_index(), 1);
    cat.select_key("er").unwrap();
    assert_eq!(cat.current_index(), 0);
    cat.select_key("1").unwrap();
    assert_eq!(cat.current_index(), 1);
    assert!(cat.select_key("nope").is_err());
    assert!(cat.select(2).is_err());
    assert_eq!(cat.current_index(), 1);
}

#[test]
fn json_fields_reach_the_strokes() {
    let cat = Catalog::from_json_str(TWO_GLYPHS, env()).unwrap();
    let er = cat.get(0).unwrap();
    assert_eq!(er.phonetic(), Some("èr"));
    assert_eq!(er.nominal_size(), Size::new(10.0, 6.0));
    assert_eq!(er.strokes()[0].weight(), &WeightMap::default());
    assert_eq!(
        er.strokes()[1].weight(),
        &WeightMap::linear_between(Feature::Loudness, [0.0, 150.0], [30.0, 60.0])
    );

    let wan = cat.get(1).unwrap();
    assert_eq!(wan.phonetic(), None);
    assert!(matches!(
        wan.strokes()[0].arc_spec(),
        Some(ArcSpec::ChordAndAngle(_, _, s)) if *s == 120.0
    ));
    assert_eq!(wan.strokes()[1].cuts(), CutAngles::new(90.0, 60.0));
}

#[test]
fn definition_survives_a_json_trip() {
    let cat = Catalog::from_json_str(TWO_GLYPHS, env()).unwrap();
    let json = cat.to_json_string().unwrap();
    // Square cuts and the default sweep are left implicit.
    assert_eq!(json.matches("\"cuts\"").count(), 1);
    assert_eq!(json.matches("\"sweep_deg\"").count(), 1);
    let again = Catalog::from_json_str(&json, env()).unwrap();
    assert_eq!(again.to_def(), cat.to_def());
}

#[test]
fn invalid_catalogs_are_rejected() {
    let empty = r#"{ "characters": [] }"#;
    assert!(matches!(
        Catalog::from_json_str(empty, env()),
        Err(GlyphError::Validation(_))
    ));

    let dup = r#"{ "characters": [
        { "id": "a", "name": "x", "size": [1, 1], "strokes": [] },
        { "id": "a", "name": "y", "size": [1, 1], "strokes": [] }
    ] }"#;
    assert!(matches!(
        Catalog::from_json_str(dup, env()),
        Err(GlyphError::Validation(_))
    ));

    let bad_size = r#"{ "characters": [
        { "id": "a", "name": "x", "size": [0, 1], "strokes": [] }
    ] }"#;
    assert!(Catalog::from_json_str(bad_size, env()).is_err());

    assert!(matches!(
        Catalog::from_json_str("{ not json", env()),
        Err(GlyphError::Serde(_))
    ));
}

#[test]
fn save_then_load_from_disk() {
    let dir = std::env::temp_dir().join(format!("sonoglyph-catalog-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("glyphs.json");

    let cat = Catalog::builtin(env());
    cat.save_json(&path).unwrap();
    let loaded = Catalog::load_json(&path, env()).unwrap();
    assert_eq!(loaded.len(), cat.len());
    assert_eq!(loaded.to_def(), cat.to_def());

    let missing = Catalog::load_json(&dir.join("missing.json"), env());
    assert!(matches!(missing, Err(GlyphError::Other(_))));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn draw_current_draws_the_selected_glyph() {
    let canvas = Canvas {
        width: 400,
        height: 400,
    };
    let mut cat = Catalog::from_json_str(TWO_GLYPHS, env()).unwrap();
    let mut s = RecordingSurface::new(canvas);
    assert_eq!(cat.draw_current(&mut s, canvas, AudioSample::SILENT, false), 2);
    assert!(cat.current().is_initialized());
    assert!(!cat.get(1).unwrap().is_initialized());
}
