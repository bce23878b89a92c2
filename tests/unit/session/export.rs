use super::*;
use crate::character::glyph::DrawEnv;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sonoglyph-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn file_name_layout() {
    assert_eq!(
        export_file_name("schar", "气", 1_700_000_000_123),
        "schar-气-1700000000123.png"
    );
}

#[test]
fn sweep_grid_covers_both_ends() {
    let grid = SweepGrid {
        loudness: [0.0, 150.0],
        centroid: [0.0, 8000.0],
        loudness_steps: 3,
        centroid_steps: 2,
    };
    let s = grid.samples();
    assert_eq!(s.len(), grid.len());
    assert_eq!(s[0], AudioSample::new(0.0, 0.0));
    assert_eq!(s[1], AudioSample::new(0.0, 8000.0));
    assert_eq!(s[2], AudioSample::new(75.0, 0.0));
    assert_eq!(s[5], AudioSample::new(150.0, 8000.0));

    let single = SweepGrid {
        loudness_steps: 1,
        centroid_steps: 1,
        ..grid
    };
    assert_eq!(single.samples(), vec![AudioSample::new(0.0, 0.0)]);
    assert!(
        SweepGrid {
            loudness_steps: 0,
            ..grid
        }
        .is_empty()
    );
}

#[test]
fn save_png_writes_straight_alpha() {
    let dir = temp_dir("png");
    let path = dir.join("nested").join("one.png");
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![128, 0, 0, 128, 0, 0, 0, 0],
        premultiplied: true,
    };
    save_png(&frame, &path).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn session_names_never_collide() {
    let s = CaptureSession::starting_at("schar", "out", 1000);
    assert_eq!(s.next_path("yue"), PathBuf::from("out").join("schar-yue-1000.png"));

    let dir = temp_dir("session");
    let mut s = CaptureSession::starting_at("schar", &dir, 1000);
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![255; 4],
        premultiplied: true,
    };
    let a = s.save(&frame, "yue").unwrap();
    let b = s.save(&frame, "yue").unwrap();
    assert_ne!(a, b);
    assert!(b.ends_with("schar-yue-1001.png"));
    assert_eq!(s.frames(), 2);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn sweep_writes_one_png_per_sample() {
    let dir = temp_dir("sweep");
    let mut catalog = Catalog::builtin(DrawEnv::new(4.0, Some(9)));
    let grid = SweepGrid {
        loudness_steps: 2,
        centroid_steps: 2,
        ..SweepGrid::default()
    };
    let canvas = Canvas {
        width: 64,
        height: 64,
    };
    let mut session = CaptureSession::starting_at("t", &dir, 0);
    let paths = session
        .capture_sweep(&mut catalog, &grid, canvas, true, Rgba8::WHITE)
        .unwrap();
    assert_eq!(paths.len(), 4);
    assert!(paths.iter().all(|p| p.is_file()));
    assert_eq!(session.sweeps(), 1);
    assert_eq!(session.frames(), 4);
    let _ = std::fs::remove_dir_all(&dir);
}
