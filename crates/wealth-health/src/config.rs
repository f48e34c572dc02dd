// File: crates/wealth-health/src/config.rs
// Summary: Chart configuration (year span, radius scale, axis ranges, colors) with JSON loading.

use std::path::Path;

use bubble_core::{Axis, Theme};
use serde::{Deserialize, Serialize};

use crate::dataset::YearRange;
use crate::error::DataError;
use crate::region::{self, Rgb};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub start_year: i32,
    pub end_year: i32,
    /// Population mapped to `plot_height / radius_divisor`.
    pub radius_domain_max: f64,
    pub radius_divisor: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub x_title: String,
    pub y_title: String,
    /// Labeled ticks on the income axis.
    pub x_labeled_ticks: Vec<f64>,
    pub border_color: Rgb,
    pub unknown_region_color: Rgb,
    pub theme: String,
    pub width: i32,
    pub height: i32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            start_year: 1800,
            end_year: 2018,
            radius_domain_max: 5e8,
            radius_divisor: 20.0,
            x_min: 300.0,
            x_max: 2e5,
            y_min: 10.0,
            y_max: 90.0,
            x_title: "GDP/capita, PPP$ inflation-adjusted".to_string(),
            y_title: "Life expectancy (yrs)".to_string(),
            x_labeled_ticks: vec![300.0, 500.0, 1000.0, 5000.0, 10_000.0, 50_000.0, 100_000.0, 200_000.0],
            border_color: Rgb::new(0x77, 0x77, 0x77),
            unknown_region_color: region::UNKNOWN,
            theme: "light".to_string(),
            width: bubble_core::types::WIDTH,
            height: bubble_core::types::HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(s: &str) -> Result<Self, DataError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        let cfg = Self::from_json_str(&raw)?;
        log::info!("loaded chart config from {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.end_year < self.start_year {
            return Err(DataError::Config(format!(
                "end_year {} is before start_year {}",
                self.end_year, self.start_year
            )));
        }
        if !(self.radius_domain_max > 0.0) {
            return Err(DataError::Config("radius_domain_max must be positive".into()));
        }
        if !(self.radius_divisor > 0.0) {
            return Err(DataError::Config("radius_divisor must be positive".into()));
        }
        if !(self.x_min > 0.0) || !(self.x_max > self.x_min) {
            return Err(DataError::Config("x range must be positive and increasing (log axis)".into()));
        }
        if !(self.y_max > self.y_min) {
            return Err(DataError::Config("y range must be increasing".into()));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(DataError::Config("width and height must be positive".into()));
        }
        Ok(())
    }

    pub fn years(&self) -> YearRange {
        YearRange::new(self.start_year, self.end_year)
    }

    pub fn x_axis(&self) -> Axis {
        let mut axis = Axis::default_x();
        axis.label = self.x_title.clone();
        axis.min = self.x_min;
        axis.max = self.x_max;
        axis.tick_format = bubble_core::TickFormat::ThousandsAt(self.x_labeled_ticks.clone());
        axis
    }

    pub fn y_axis(&self) -> Axis {
        let mut axis = Axis::default_y();
        axis.label = self.y_title.clone();
        axis.min = self.y_min;
        axis.max = self.y_max;
        axis
    }

    pub fn theme(&self) -> Theme {
        bubble_core::theme::find(&self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = ChartConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.years().len(), 219);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = ChartConfig::from_json_str(r##"{"end_year": 1900, "border_color": "#000"}"##).unwrap();
        assert_eq!(cfg.end_year, 1900);
        assert_eq!(cfg.start_year, 1800);
        assert_eq!(cfg.border_color, Rgb::new(0, 0, 0));
        assert_eq!(cfg.radius_divisor, 20.0);
    }

    #[test]
    fn rejects_inverted_years_and_bad_colors() {
        assert!(matches!(
            ChartConfig::from_json_str(r#"{"start_year": 2000, "end_year": 1990}"#),
            Err(DataError::Config(_))
        ));
        assert!(matches!(
            ChartConfig::from_json_str(r#"{"border_color": "grey"}"#),
            Err(DataError::Json(_))
        ));
        assert!(matches!(
            ChartConfig::from_json_str(r#"{"x_min": 0}"#),
            Err(DataError::Config(_))
        ));
    }
}
