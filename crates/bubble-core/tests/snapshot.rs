// File: crates/bubble-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small bubble chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use bubble_core::{BubblePoint, BubbleSeries, Chart, RenderOptions};
use skia_safe::Color;

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::new();
    chart.add_series(
        BubbleSeries::with_points(vec![
            BubblePoint { x: 800.0, y: 32.0, r: 48.0 },
            BubblePoint { x: 3_000.0, y: 45.0, r: 30.0 },
            BubblePoint { x: 15_000.0, y: 70.0, r: 14.0 },
            BubblePoint { x: 60_000.0, y: 82.0, r: 6.0 },
        ])
        .with_fill(vec![
            Color::from_rgb(255, 88, 114),
            Color::from_rgb(0, 213, 233),
            Color::from_rgb(127, 235, 0),
            Color::from_rgb(255, 231, 0),
        ]),
    );

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_basic_bubbles() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_bubbles.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn decoded_snapshot_has_requested_size() {
    let img = image::load_from_memory(&render_bytes()).expect("decode").to_rgba8();
    let opts = RenderOptions::default();
    assert_eq!((img.width() as i32, img.height() as i32), (opts.width, opts.height));
}
