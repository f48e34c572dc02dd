// File: crates/wealth-health/src/lib.rs
// Summary: Wealth & Health domain: dataset model, year-slice projection and app state for the bubble chart.

pub mod error;
pub mod region;
pub mod dataset;
pub mod config;
pub mod projector;
pub mod format;
pub mod render;
pub mod slider;
pub mod app;

pub use error::DataError;
pub use region::{Region, Rgb};
pub use dataset::{CountryRecord, Dataset, YearRange, YearSample};
pub use config::ChartConfig;
pub use projector::{ProjectedFrame, ProjectedPoint, YearSliceProjector};
pub use slider::YearSlider;
pub use app::{AppEvent, AppState};
