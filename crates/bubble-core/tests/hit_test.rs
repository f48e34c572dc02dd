// File: crates/bubble-core/tests/hit_test.rs
// Purpose: Hover hit testing picks the top-most bubble and ignores the margins.

use bubble_core::{BubblePoint, BubbleSeries, Chart, Hit, RenderOptions};

fn chart() -> Chart {
    let mut chart = Chart::new();
    chart.add_series(BubbleSeries::with_points(vec![
        BubblePoint { x: 2_000.0, y: 60.0, r: 40.0 },
        BubblePoint { x: 2_000.0, y: 60.0, r: 8.0 },
        BubblePoint { x: 50_000.0, y: 80.0, r: 6.0 },
    ]));
    chart
}

#[test]
fn hit_prefers_last_drawn_bubble() {
    let chart = chart();
    let opts = RenderOptions::default();
    let (cx, cy) = chart.to_pixel(&opts, 2_000.0, 60.0);
    assert_eq!(chart.hit_test(&opts, cx, cy), Some(Hit { series: 0, index: 1 }));
    // outside the small one, inside the big one
    assert_eq!(chart.hit_test(&opts, cx + 20.0, cy), Some(Hit { series: 0, index: 0 }));
}

#[test]
fn miss_outside_plot_and_between_bubbles() {
    let chart = chart();
    let opts = RenderOptions::default();
    assert_eq!(chart.hit_test(&opts, 1.0, 1.0), None);
    let (cx, cy) = chart.to_pixel(&opts, 50_000.0, 80.0);
    assert_eq!(chart.hit_test(&opts, cx + 30.0, cy), None);
}

#[test]
fn plot_area_tracks_surface_size() {
    let chart = chart();
    let small = RenderOptions::default().with_size(400, 300);
    let large = RenderOptions::default().with_size(1600, 1000);
    assert!(chart.plot_area(&large).height() > chart.plot_area(&small).height());
    assert_eq!(
        chart.plot_area(&small).height(),
        300 - small.insets.vsum() as i32
    );
}
