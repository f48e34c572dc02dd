// File: crates/wealth-health/src/render.rs
// Summary: Adapter from projected frames to chart primitives, and the base chart setup.

use std::rc::Rc;

use bubble_core::{BackdropLabel, BubblePoint, BubbleSeries, Chart, RenderOptions, TextShaper, Tooltip};
use skia_safe as skia;

use crate::config::ChartConfig;
use crate::format::tooltip_body;
use crate::projector::ProjectedFrame;
use crate::region::Rgb;

pub fn to_color(c: Rgb) -> skia::Color {
    skia::Color::from_rgb(c.r, c.g, c.b)
}

/// Frame -> one bubble series in the frame's (draw) order.
pub fn to_series(frame: &ProjectedFrame, border: Rgb) -> BubbleSeries {
    let points = frame
        .points
        .iter()
        .map(|p| BubblePoint { x: p.x, y: p.y, r: p.r })
        .collect();
    BubbleSeries::with_points(points)
        .with_fill(frame.colors.iter().copied().map(to_color).collect())
        .with_labels(frame.labels.clone())
        .with_border(to_color(border))
}

/// Axes from `cfg` plus the year backdrop hook; no data yet.
pub fn base_chart(cfg: &ChartConfig, text: TextShaper, year_label: Rc<BackdropLabel>) -> Chart {
    let mut chart = Chart::with_text(text);
    chart.x_axis = cfg.x_axis();
    chart.y_axis = cfg.y_axis();
    chart.register_pre_draw(year_label);
    chart
}

/// Tooltip for frame entry `index`, anchored at its bubble center.
pub fn tooltip_for(chart: &Chart, opts: &RenderOptions, frame: &ProjectedFrame, index: usize) -> Option<Tooltip> {
    let p = frame.points.get(index)?;
    let title = frame.labels.get(index)?;
    let anchor = chart.to_pixel(opts, p.x, p.y);
    Some(Tooltip::new(anchor, title.clone(), tooltip_body(p.x, p.y)))
}

/// One-shot: chart for a single frame, as the headless renderer uses it.
pub fn frame_chart(cfg: &ChartConfig, text: TextShaper, frame: &ProjectedFrame) -> Chart {
    let label = Rc::new(BackdropLabel::new(frame.year.to_string()));
    let mut chart = base_chart(cfg, text, label);
    chart.add_series(to_series(frame, cfg.border_color));
    chart
}
