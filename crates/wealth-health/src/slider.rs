// File: crates/wealth-health/src/slider.rs
// Summary: Year slider geometry: maps pointer x to a year and a year back to the knob position.

use bubble_core::RectI32;

use crate::dataset::YearRange;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearSlider {
    pub years: YearRange,
    /// Track rectangle in window pixels.
    pub track: RectI32,
}

impl YearSlider {
    pub fn new(years: YearRange, track: RectI32) -> Self {
        Self { years, track }
    }

    /// Slider strip along the bottom of a `width x height` window.
    pub fn along_bottom(years: YearRange, width: i32, height: i32, strip: i32) -> Self {
        let margin = 24;
        let top = height - strip;
        let track = RectI32::from_ltrb(margin, top, (width - margin).max(margin + 1), height);
        Self::new(years, track)
    }

    /// Year under pointer `x`, clamped to the ends of the track.
    pub fn year_at(&self, x: f32) -> i32 {
        let w = self.track.width().max(1) as f32;
        let t = ((x - self.track.left as f32) / w).clamp(0.0, 1.0);
        let span = (i64::from(self.years.end) - i64::from(self.years.start)) as f64;
        self.years.clamp((i64::from(self.years.start) + (f64::from(t) * span).round() as i64) as i32)
    }

    /// Knob x for `year`.
    pub fn knob_x(&self, year: i32) -> f32 {
        let span = (i64::from(self.years.end) - i64::from(self.years.start)).max(1) as f64;
        let t = (i64::from(self.years.clamp(year)) - i64::from(self.years.start)) as f64 / span;
        self.track.left as f32 + (t * self.track.width() as f64) as f32
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.track.contains(x, y)
    }

    /// Year after moving `delta` steps, kept inside the range.
    pub fn step(&self, year: i32, delta: i32) -> i32 {
        self.years.clamp(year.saturating_add(delta))
    }
}
