// File: crates/bubble-core/src/lib.rs
// Summary: Bubble chart library entry point; exports the chart, axis, scale and hook API.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod format;
pub mod plugin;
pub mod tooltip;

pub use chart::{Chart, Hit, RenderOptions};
pub use series::{BubblePoint, BubbleSeries};
pub use axis::{Axis, ScaleKind, TickFormat, TickSpec};
pub use geometry::RectI32;
pub use scale::{AxisScale, SqrtScale};
pub use theme::Theme;
pub use text::{FontRole, TextShaper};
pub use plugin::{BackdropLabel, DrawContext, PreDrawHook};
pub use tooltip::Tooltip;
