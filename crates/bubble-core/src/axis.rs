// File: crates/bubble-core/src/axis.rs
// Summary: Axis model with titles, ranges, scale kind and tick layout.

use crate::format;
use crate::grid::{linspace, log10_ticks, stepped};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// Where gridlines/ticks go.
#[derive(Clone, Debug, PartialEq)]
pub enum TickSpec {
    /// `n` evenly spaced ticks across the range (linear position).
    Count(usize),
    /// Every multiple of the step inside the range.
    Step(f64),
    /// Every `k * 10^n` inside the range (for log axes).
    Decades,
}

/// How tick values become text.
#[derive(Clone, Debug, PartialEq)]
pub enum TickFormat {
    /// Shortest decimal representation.
    Plain,
    /// Comma-grouped thousands.
    Thousands,
    /// Only label the listed values (comma-grouped); other ticks stay unlabeled.
    ThousandsAt(Vec<f64>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    pub ticks: TickSpec,
    pub tick_format: TickFormat,
    /// Axis title font size in px.
    pub title_size: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: ScaleKind::Linear,
            ticks: TickSpec::Count(6),
            tick_format: TickFormat::Plain,
            title_size: 16.0,
        }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        let mut a = Self::new(label, min, max);
        a.kind = ScaleKind::Log10;
        a.ticks = TickSpec::Decades;
        a
    }

    pub fn with_ticks(mut self, ticks: TickSpec) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.tick_format = format;
        self
    }

    /// Income axis of the wealth/health chart: log10 over PPP dollars with sparse labels.
    pub fn default_x() -> Self {
        Self::log10("GDP/capita, PPP$ inflation-adjusted", 300.0, 2e5).with_format(TickFormat::ThousandsAt(vec![
            300.0, 500.0, 1000.0, 5000.0, 10_000.0, 50_000.0, 100_000.0, 200_000.0,
        ]))
    }

    pub fn default_y() -> Self {
        Self::new("Life expectancy (yrs)", 10.0, 90.0).with_ticks(TickSpec::Step(10.0))
    }

    /// Tick positions with their (optional) labels.
    pub fn tick_marks(&self) -> Vec<Tick> {
        let values = match self.ticks {
            TickSpec::Count(n) => linspace(self.min, self.max, n),
            TickSpec::Step(step) => stepped(self.min, self.max, step),
            TickSpec::Decades => log10_ticks(self.min, self.max),
        };
        values
            .into_iter()
            .map(|value| Tick { value, label: self.format_tick(value) })
            .collect()
    }

    fn format_tick(&self, v: f64) -> Option<String> {
        match &self.tick_format {
            TickFormat::Plain => Some(format!("{}", round_label(v))),
            TickFormat::Thousands => Some(format::thousands(round_label(v))),
            TickFormat::ThousandsAt(keep) => keep
                .iter()
                .any(|k| (k - v).abs() <= k.abs() * 1e-9)
                .then(|| format::thousands(round_label(v))),
        }
    }
}

// Trim float noise from generated tick values (e.g. 0.30000000000000004).
fn round_label(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_axis_labels_only_whitelisted_ticks() {
        let ticks = Axis::default_x().tick_marks();
        let labeled: Vec<_> = ticks.iter().filter_map(|t| t.label.clone()).collect();
        assert_eq!(labeled, vec!["300", "500", "1,000", "5,000", "10,000", "50,000", "100,000", "200,000"]);
        // unlabeled gridlines still exist (e.g. 2,000)
        assert!(ticks.iter().any(|t| (t.value - 2000.0).abs() < 1e-6 && t.label.is_none()));
    }

    #[test]
    fn life_axis_steps_by_ten() {
        let ticks = Axis::default_y().tick_marks();
        assert_eq!(ticks.len(), 9);
        assert_eq!(ticks[0].label.as_deref(), Some("10"));
        assert_eq!(ticks[8].label.as_deref(), Some("90"));
    }
}
