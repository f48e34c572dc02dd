// File: crates/wealth-health/src/projector.rs
// Summary: Year-slice projection: countries + chosen year -> ordered bubble points, colors and labels.

use std::cmp::Ordering;

use bubble_core::SqrtScale;
use serde::Serialize;

use crate::config::ChartConfig;
use crate::dataset::{CountryRecord, Dataset, YearRange, YearSample};
use crate::region::{self, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProjectedPoint {
    /// GDP per capita.
    pub x: f64,
    /// Life expectancy.
    pub y: f64,
    /// Scaled population, in pixels.
    pub r: f64,
}

/// Renderable slice of one year. `points`, `colors` and `labels` are parallel.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProjectedFrame {
    pub year: i32,
    pub points: Vec<ProjectedPoint>,
    pub colors: Vec<Rgb>,
    pub labels: Vec<String>,
}

impl ProjectedFrame {
    pub fn empty(year: i32) -> Self {
        Self { year, ..Self::default() }
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

/// Maps a dataset year onto bubble primitives. Holds no per-call state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearSliceProjector {
    pub years: YearRange,
    pub radius: SqrtScale,
    /// Plot height divided by this gives the largest radius of the domain.
    pub radius_divisor: f64,
    pub unknown_color: Rgb,
}

impl YearSliceProjector {
    pub fn new(years: YearRange, radius_domain_max: f64, radius_divisor: f64) -> Self {
        Self {
            years,
            radius: SqrtScale::new((0.0, radius_domain_max), (0.0, 0.0)),
            radius_divisor,
            unknown_color: region::UNKNOWN,
        }
    }

    pub fn from_config(cfg: &ChartConfig) -> Self {
        let mut p = Self::new(cfg.years(), cfg.radius_domain_max, cfg.radius_divisor);
        p.unknown_color = cfg.unknown_region_color;
        p
    }

    /// Re-derive the radius range from the plot height (on resize).
    pub fn set_plot_height(&mut self, plot_height: f64) {
        let r_max = if self.radius_divisor > 0.0 { plot_height.max(0.0) / self.radius_divisor } else { 0.0 };
        self.radius.set_range_max(r_max);
    }

    pub fn with_plot_height(mut self, plot_height: f64) -> Self {
        self.set_plot_height(plot_height);
        self
    }

    /// Largest radius of the domain under the current range.
    pub fn max_radius(&self) -> f64 {
        self.radius.range.1
    }

    /// Project `countries` for `year`.
    ///
    /// A country is kept only when GDP, life expectancy and population are all
    /// present and non-zero for that year. Survivors are ordered by descending
    /// population (stable for ties) so the largest bubbles are drawn first.
    /// Years outside the configured span yield an empty frame.
    pub fn project(&self, countries: &[CountryRecord], year: i32) -> ProjectedFrame {
        let Some(offset) = self.years.offset(year) else {
            log::debug!("year {year} outside {}..={}; nothing to project", self.years.start, self.years.end);
            return ProjectedFrame::empty(year);
        };

        let mut kept: Vec<(&CountryRecord, YearSample)> = countries
            .iter()
            .filter_map(|c| c.sample(offset).map(|s| (c, s)))
            .collect();
        // sort_by is stable: equal populations keep dataset order
        kept.sort_by(|a, b| b.1.population.partial_cmp(&a.1.population).unwrap_or(Ordering::Equal));

        let mut frame = ProjectedFrame {
            year,
            points: Vec::with_capacity(kept.len()),
            colors: Vec::with_capacity(kept.len()),
            labels: Vec::with_capacity(kept.len()),
        };
        for (country, s) in kept {
            frame.points.push(ProjectedPoint { x: s.gdp, y: s.life_expectancy, r: self.radius.apply(s.population) });
            frame.colors.push(country.region.color_or(self.unknown_color));
            frame.labels.push(country.name.clone());
        }

        log::debug!("projected {} of {} countries for {year}", frame.len(), countries.len());
        frame
    }

    /// Project a dataset that may not have loaded yet; no data means an empty frame.
    pub fn project_loaded(&self, data: Option<&Dataset>, year: i32) -> ProjectedFrame {
        match data {
            Some(d) => self.project(d.countries(), year),
            None => ProjectedFrame::empty(year),
        }
    }
}
