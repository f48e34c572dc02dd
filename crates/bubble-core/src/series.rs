// File: crates/bubble-core/src/series.rs
// Summary: Bubble series model: parallel point, fill color and label sequences.
// Notes:
// - Points are drawn in sequence order; callers sort them (largest first)
//   when small bubbles should stay visible on top.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubblePoint {
    pub x: f64,
    pub y: f64,
    /// Radius in pixels.
    pub r: f64,
}

#[derive(Clone, Debug)]
pub struct BubbleSeries {
    pub points: Vec<BubblePoint>,
    /// Per-point fill; shorter than `points` falls back to `default_fill`.
    pub fill: Vec<skia::Color>,
    pub labels: Vec<String>,
    pub border: skia::Color,
    pub border_width: f32,
    pub default_fill: skia::Color,
}

impl BubbleSeries {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            fill: Vec::new(),
            labels: Vec::new(),
            border: skia::Color::from_rgb(0x77, 0x77, 0x77),
            border_width: 1.0,
            default_fill: skia::Color::from_rgb(0x99, 0x99, 0x99),
        }
    }

    pub fn with_points(points: Vec<BubblePoint>) -> Self {
        Self { points, ..Self::new() }
    }

    pub fn with_fill(mut self, fill: Vec<skia::Color>) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_border(mut self, border: skia::Color) -> Self {
        self.border = border;
        self
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn fill_at(&self, i: usize) -> skia::Color {
        self.fill.get(i).copied().unwrap_or(self.default_fill)
    }

    pub fn label_at(&self, i: usize) -> Option<&str> {
        self.labels.get(i).map(String::as_str)
    }
}

impl Default for BubbleSeries {
    fn default() -> Self { Self::new() }
}
