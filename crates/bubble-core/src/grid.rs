// File: crates/bubble-core/src/grid.rs
// Summary: Grid/tick layout helpers for linear and log10 axes.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Multiples of `step` inside `[min, max]`, starting at the first multiple >= min.
pub fn stepped(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !min.is_finite() || !max.is_finite() || max < min { return Vec::new(); }
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Log10 gridline positions: every `k * 10^n` (k = 1..9) inside `[min, max]`,
/// plus both ends of the range.
pub fn log10_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0) || !(max > min) { return Vec::new(); }
    let mut out = vec![min];
    let lo = min.log10().floor() as i32;
    let hi = max.log10().ceil() as i32;
    for exp in lo..=hi {
        let decade = 10f64.powi(exp);
        for k in 1..10 {
            let v = k as f64 * decade;
            // relative tolerance so 300.0000001 does not duplicate the range end
            if v > min * (1.0 + 1e-9) && v < max * (1.0 - 1e-9) {
                out.push(v);
            }
        }
    }
    out.push(max);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepped_life_expectancy_range() {
        assert_eq!(stepped(10.0, 90.0, 10.0), vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0]);
        assert!(stepped(1.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn log_ticks_cover_income_range() {
        let t = log10_ticks(300.0, 2e5);
        assert_eq!(t.first().copied(), Some(300.0));
        assert_eq!(t.last().copied(), Some(2e5));
        for want in [500.0, 1000.0, 5000.0, 10_000.0, 50_000.0, 100_000.0] {
            assert!(t.iter().any(|&v| (v - want).abs() < 1e-6), "missing {want}");
        }
        assert!(t.windows(2).all(|w| w[0] < w[1]));
    }
}
