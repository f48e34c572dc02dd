// File: crates/bubble-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use bubble_core::{BubblePoint, BubbleSeries, Chart, RenderOptions};
use skia_safe::Color;

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new();
    chart.add_series(
        BubbleSeries::with_points(vec![
            BubblePoint { x: 1_000.0, y: 40.0, r: 30.0 },
            BubblePoint { x: 20_000.0, y: 75.0, r: 12.0 },
        ])
        .with_fill(vec![Color::from_rgb(255, 88, 114), Color::from_rgb(255, 231, 0)])
        .with_labels(vec!["India".into(), "Spain".into()]),
    );

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
