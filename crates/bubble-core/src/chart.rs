// File: crates/bubble-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG file/bytes, RGBA buffer) on Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::RectI32;
use crate::plugin::{DrawContext, PreDrawHook};
use crate::scale::AxisScale;
use crate::series::BubbleSeries;
use crate::text::{FontRole, TextShaper};
use crate::theme::Theme;
use crate::tooltip::Tooltip;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels, titles, backdrop text and tooltips; off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Plot rectangle inside the insets; never narrower/shorter than one pixel.
    pub fn plot_area(&self) -> RectI32 {
        let left = self.insets.left as i32;
        let top = self.insets.top as i32;
        let right = (self.width - self.insets.right as i32).max(left + 1);
        let bottom = (self.height - self.insets.bottom as i32).max(top + 1);
        RectI32::from_ltrb(left, top, right, bottom)
    }
}

/// A bubble hit by [`Chart::hit_test`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub series: usize,
    pub index: usize,
}

pub struct Chart {
    pub series: Vec<BubbleSeries>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub tooltip: Option<Tooltip>,
    pub text: TextShaper,
    hooks: Vec<Box<dyn PreDrawHook>>,
}

impl Chart {
    pub fn new() -> Self {
        Self::with_text(TextShaper::new())
    }

    /// Build a chart that shares an existing font collection.
    pub fn with_text(text: TextShaper) -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            tooltip: None,
            text,
            hooks: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: BubbleSeries) {
        self.series.push(series);
    }

    /// Register a hook that runs before the chart draws its own content.
    /// Hooks run in registration order.
    pub fn register_pre_draw(&mut self, hook: impl PreDrawHook + 'static) {
        log::debug!("registering pre-draw hook '{}'", hook.id());
        self.hooks.push(Box::new(hook));
    }

    pub fn pre_draw_hooks(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.hooks.iter().map(|h| h.id())
    }

    /// Plot rectangle for `opts`; bubble radii are usually derived from its height.
    pub fn plot_area(&self, opts: &RenderOptions) -> RectI32 {
        opts.plot_area()
    }

    fn scales(&self, plot: &RectI32) -> (AxisScale, AxisScale) {
        let sx = AxisScale::for_axis(&self.x_axis, plot.left as f32, plot.right as f32);
        let sy = AxisScale::for_axis(&self.y_axis, plot.bottom as f32, plot.top as f32);
        (sx, sy)
    }

    /// Pixel position of a data point under `opts`.
    pub fn to_pixel(&self, opts: &RenderOptions, x: f64, y: f64) -> (f32, f32) {
        let (sx, sy) = self.scales(&opts.plot_area());
        (sx.to_px(x), sy.to_px(y))
    }

    /// Top-most bubble (last drawn) whose disc contains the pixel.
    pub fn hit_test(&self, opts: &RenderOptions, px: f32, py: f32) -> Option<Hit> {
        let plot = opts.plot_area();
        if !plot.contains(px, py) { return None; }
        let (sx, sy) = self.scales(&plot);
        for (si, s) in self.series.iter().enumerate().rev() {
            for (pi, p) in s.points.iter().enumerate().rev() {
                let dx = sx.to_px(p.x) - px;
                let dy = sy.to_px(p.y) - py;
                let reach = p.r as f32 + s.border_width * 0.5;
                if dx * dx + dy * dy <= reach * reach {
                    return Some(Hit { series: si, index: pi });
                }
            }
        }
        None
    }

    /// Draw the whole chart onto `canvas` sized per `opts`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = opts.plot_area();
        let cx = DrawContext { plot, theme, text: &self.text, draw_labels: opts.draw_labels };

        for hook in &self.hooks {
            hook.before_draw(canvas, &cx);
        }

        let (sx, sy) = self.scales(&plot);
        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &sx, &sy, theme);
        draw_axes(canvas, &plot, theme);
        if opts.draw_labels {
            draw_tick_labels(canvas, &plot, &self.x_axis, &self.y_axis, &sx, &sy, &cx);
            draw_axis_titles(canvas, &plot, &self.x_axis, &self.y_axis, &cx);
        }

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_bubble_series(canvas, &sx, &sy, s);
        }
        canvas.restore();

        if let Some(tip) = self.tooltip.as_ref().filter(|_| opts.draw_labels) {
            let surface = RectI32::from_ltwh(0, 0, opts.width, opts.height);
            tip.draw(canvas, &surface, &cx);
        }
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render into an unpremultiplied RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back raster pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, plot: &RectI32, x: &Axis, y: &Axis, sx: &AxisScale, sy: &AxisScale, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // verticals
    for tick in x.tick_marks() {
        let px = sx.to_px(tick.value);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for tick in y.tick_marks() {
        let py = sy.to_px(tick.value);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    sx: &AxisScale,
    sy: &AxisScale,
    cx: &DrawContext<'_>,
) {
    let size = 12.0;
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(cx.theme.tick);
    tick_paint.set_stroke_width(1.0);

    let b = plot.bottom as f32;
    for tick in x.tick_marks() {
        if let Some(label) = tick.label {
            let px = sx.to_px(tick.value);
            canvas.draw_line((px, b), (px, b + 5.0), &tick_paint);
            cx.text.draw_centered(canvas, &label, px, b + 16.0, size, cx.theme.tick, FontRole::Numeric);
        }
    }
    let l = plot.left as f32;
    for tick in y.tick_marks() {
        if let Some(label) = tick.label {
            let py = sy.to_px(tick.value);
            canvas.draw_line((l - 5.0, py), (l, py), &tick_paint);
            cx.text.draw_right(canvas, &label, l - 8.0, py, size, cx.theme.tick, FontRole::Numeric);
        }
    }
}

fn draw_axis_titles(canvas: &skia::Canvas, plot: &RectI32, x: &Axis, y: &Axis, cx: &DrawContext<'_>) {
    let (mx, my) = plot.center();
    // line height 2: title sits one title-size below the tick labels
    cx.text.draw_centered(canvas, &x.label, mx, plot.bottom as f32 + 28.0 + x.title_size, x.title_size, cx.theme.axis_label, FontRole::Body);

    canvas.save();
    canvas.translate((plot.left as f32 - 44.0 - y.title_size * 0.5, my));
    canvas.rotate(-90.0, None);
    cx.text.draw_centered(canvas, &y.label, 0.0, 0.0, y.title_size, cx.theme.axis_label, FontRole::Body);
    canvas.restore();
}

fn draw_bubble_series(canvas: &skia::Canvas, sx: &AxisScale, sy: &AxisScale, series: &BubbleSeries) {
    if series.is_empty() { return; }

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.border_width);
    stroke.set_color(series.border);

    // painter's order: earlier points end up underneath later ones
    for (i, p) in series.points.iter().enumerate() {
        if !(p.r > 0.0) || !p.x.is_finite() || !p.y.is_finite() { continue; }
        let center = (sx.to_px(p.x), sy.to_px(p.y));
        fill.set_color(series.fill_at(i));
        canvas.draw_circle(center, p.r as f32, &fill);
        if series.border_width > 0.0 {
            canvas.draw_circle(center, p.r as f32, &stroke);
        }
    }
}
