// File: crates/wealth-health/src/app.rs
// Summary: Application state and event handling: data load, year input, resize, fonts, hover.
// Notes:
// - One AppState owns everything mutable (dataset, chosen year, viewport,
//   chart). Events are handled synchronously; each returns whether the
//   surface needs a redraw.
// - The chart is created once, when data arrives, and its series are
//   replaced on every recompute.

use std::rc::Rc;

use bubble_core::{BackdropLabel, Chart, RenderOptions, TextShaper};

use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::projector::{ProjectedFrame, YearSliceProjector};
use crate::render;

#[derive(Debug)]
pub enum AppEvent {
    /// One-shot data load finished.
    DataLoaded(Dataset),
    /// Data load failed; the chart stays empty.
    DataFailed(String),
    /// Slider moved. The value is used as given.
    YearInput(i32),
    /// Viewport resized; only the radius scale is re-derived.
    Resized { width: i32, height: i32 },
    /// Web/asset fonts became available.
    FontsLoaded,
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
}

pub struct AppState {
    config: ChartConfig,
    dataset: Option<Dataset>,
    year: i32,
    opts: RenderOptions,
    projector: YearSliceProjector,
    year_label: Rc<BackdropLabel>,
    text: TextShaper,
    chart: Option<Chart>,
    frame: ProjectedFrame,
    pointer: Option<(f32, f32)>,
    hovered: Option<usize>,
}

impl AppState {
    pub fn new(config: ChartConfig) -> Self {
        Self::with_text(config, TextShaper::new())
    }

    pub fn with_text(config: ChartConfig, text: TextShaper) -> Self {
        let opts = RenderOptions {
            width: config.width,
            height: config.height,
            theme: config.theme(),
            ..RenderOptions::default()
        };
        let projector = YearSliceProjector::from_config(&config)
            .with_plot_height(opts.plot_area().height() as f64);
        let year = config.start_year;
        Self {
            year_label: Rc::new(BackdropLabel::new(year.to_string())),
            frame: ProjectedFrame::empty(year),
            config,
            dataset: None,
            year,
            opts,
            projector,
            text,
            chart: None,
            pointer: None,
            hovered: None,
        }
    }

    pub fn config(&self) -> &ChartConfig { &self.config }

    pub fn year(&self) -> i32 { self.year }

    pub fn is_loaded(&self) -> bool { self.dataset.is_some() }

    pub fn dataset(&self) -> Option<&Dataset> { self.dataset.as_ref() }

    pub fn render_options(&self) -> &RenderOptions { &self.opts }

    pub fn projector(&self) -> &YearSliceProjector { &self.projector }

    /// Current frame; empty before data has loaded.
    pub fn frame(&self) -> &ProjectedFrame { &self.frame }

    /// `None` until data has loaded ("no chart yet").
    pub fn chart(&self) -> Option<&Chart> { self.chart.as_ref() }

    /// Index into the current frame of the bubble under the pointer.
    pub fn hovered(&self) -> Option<usize> { self.hovered }

    /// Apply one event. Returns true when the chart should be redrawn.
    pub fn handle(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::DataLoaded(data) => {
                let misaligned = data.misaligned(&self.projector.years);
                if !misaligned.is_empty() {
                    log::warn!(
                        "{} countries have series not spanning {}..={} (e.g. {})",
                        misaligned.len(),
                        self.projector.years.start,
                        self.projector.years.end,
                        misaligned[0]
                    );
                }
                self.dataset = Some(data);
                self.chart = Some(render::base_chart(&self.config, self.text.clone(), self.year_label.clone()));
                self.update();
                true
            }
            AppEvent::DataFailed(reason) => {
                log::error!("data load failed: {reason}");
                false
            }
            AppEvent::YearInput(year) => {
                self.year = year;
                self.year_label.set_text(year.to_string());
                self.update()
            }
            AppEvent::Resized { width, height } => {
                self.opts.width = width.max(1);
                self.opts.height = height.max(1);
                self.update()
            }
            AppEvent::FontsLoaded => self.update(),
            AppEvent::PointerMoved { x, y } => {
                self.pointer = Some((x, y));
                self.refresh_hover()
            }
            AppEvent::PointerLeft => {
                self.pointer = None;
                self.refresh_hover()
            }
        }
    }

    /// Recompute radius scale and frame, push them into the chart.
    /// No-op (false) before data has loaded.
    fn update(&mut self) -> bool {
        let Some(dataset) = self.dataset.as_ref() else { return false };
        let Some(chart) = self.chart.as_mut() else { return false };

        self.projector.set_plot_height(chart.plot_area(&self.opts).height() as f64);
        self.frame = self.projector.project(dataset.countries(), self.year);
        chart.series = vec![render::to_series(&self.frame, self.config.border_color)];
        self.refresh_hover();
        true
    }

    /// Re-run hover detection; true when the tooltip changed.
    fn refresh_hover(&mut self) -> bool {
        let Some(chart) = self.chart.as_mut() else { return false };
        let hovered = self
            .pointer
            .and_then(|(x, y)| chart.hit_test(&self.opts, x, y))
            .map(|hit| hit.index);
        let tooltip = hovered.and_then(|i| render::tooltip_for(chart, &self.opts, &self.frame, i));
        let changed = hovered != self.hovered || tooltip != chart.tooltip;
        self.hovered = hovered;
        chart.tooltip = tooltip;
        changed
    }

    /// Render the current chart to PNG bytes; `None` before data has loaded.
    pub fn render_png(&self) -> anyhow::Result<Option<Vec<u8>>> {
        self.chart
            .as_ref()
            .map(|c| c.render_to_png_bytes(&self.opts))
            .transpose()
    }

    /// Render the current chart to an RGBA8 buffer; `None` before data has loaded.
    pub fn render_rgba8(&self) -> anyhow::Result<Option<(Vec<u8>, u32, u32, usize)>> {
        self.chart
            .as_ref()
            .map(|c| c.render_to_rgba8(&self.opts))
            .transpose()
    }
}
