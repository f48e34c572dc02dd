// File: crates/bubble-core/src/scale.rs
// Summary: Axis (linear/log10) pixel transforms and the square-root radius scale.

use crate::axis::{Axis, ScaleKind};

/// Maps data values on one axis onto a pixel span.
/// `px_start` corresponds to `min`; for a Y axis pass the bottom edge as start.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub px_start: f32,
    pub px_end: f32,
    pub min: f64,
    pub max: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new_linear(px_start: f32, px_end: f32, min: f64, mut max: f64) -> Self {
        if (max - min).abs() < 1e-12 { max = min + 1.0; }
        Self { px_start, px_end, min, max, log: false, log_min: 0.0, log_max: 0.0 }
    }

    pub fn new_log10(px_start: f32, px_end: f32, mut min: f64, mut max: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        min = if min <= eps { eps } else { min };
        max = if max <= min { min * 10.0 } else { max };
        Self { px_start, px_end, min, max, log: true, log_min: min.log10(), log_max: max.log10() }
    }

    pub fn for_axis(axis: &Axis, px_start: f32, px_end: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(px_start, px_end, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(px_start, px_end, axis.min, axis.max),
        }
    }

    #[inline]
    fn fraction(&self, v: f64) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            let span = (self.max - self.min).max(1e-12);
            (v - self.min) / span
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.px_start + self.fraction(v) as f32 * (self.px_end - self.px_start)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let denom = self.px_end - self.px_start;
        let t = if denom.abs() < f32::EPSILON { 0.0 } else { ((px - self.px_start) / denom) as f64 };
        if self.log {
            10f64.powf(self.log_min + t * (self.log_max - self.log_min))
        } else {
            self.min + t * (self.max - self.min)
        }
    }
}

/// Square-root scale from a value domain onto a radius range, unclamped.
/// Area of a disc drawn with the output radius grows linearly with the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Replace the upper bound of the output range, keeping the domain.
    pub fn set_range_max(&mut self, r_max: f64) {
        self.range.1 = r_max;
    }

    pub fn with_range_max(mut self, r_max: f64) -> Self {
        self.set_range_max(r_max);
        self
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = (signed_sqrt(self.domain.0), signed_sqrt(self.domain.1));
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            return self.range.0;
        }
        let t = (signed_sqrt(v) - d0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

// Negative inputs mirror around zero instead of producing NaN.
#[inline]
fn signed_sqrt(v: f64) -> f64 {
    if v < 0.0 { -(-v).sqrt() } else { v.sqrt() }
}
