// File: crates/bubble-core/src/tooltip.rs
// Summary: Hover tooltip box (title + body line) anchored near a pixel.

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::plugin::DrawContext;
use crate::text::FontRole;

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Pixel the tooltip points at (usually the hovered bubble center).
    pub anchor: (f32, f32),
    pub title: String,
    pub body: String,
    pub padding: f32,
    pub title_size: f32,
    pub title_margin_bottom: f32,
    pub body_size: f32,
}

impl Tooltip {
    pub fn new(anchor: (f32, f32), title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            anchor,
            title: title.into(),
            body: body.into(),
            padding: 10.0,
            title_size: 20.0,
            title_margin_bottom: 10.0,
            body_size: 14.0,
        }
    }

    /// Box size for the given text widths.
    fn box_size(&self, title_w: f32, body_w: f32) -> (f32, f32) {
        let w = title_w.max(body_w) + 2.0 * self.padding;
        let h = self.title_size + self.title_margin_bottom + self.body_size * 1.2 + 2.0 * self.padding;
        (w, h)
    }

    /// Place the box to the right of the anchor, flipping left/up to stay on the surface.
    pub fn placement(&self, size: (f32, f32), surface: &RectI32) -> skia::Rect {
        let (w, h) = size;
        let gap = 8.0;
        let (ax, ay) = self.anchor;
        let mut left = ax + gap;
        if left + w > surface.right as f32 { left = ax - gap - w; }
        let mut top = ay - h * 0.5;
        if top + h > surface.bottom as f32 { top = surface.bottom as f32 - h; }
        if top < surface.top as f32 { top = surface.top as f32; }
        left = left.max(surface.left as f32);
        skia::Rect::from_xywh(left, top, w, h)
    }

    pub fn draw(&self, canvas: &skia::Canvas, surface: &RectI32, cx: &DrawContext<'_>) {
        let title_w = cx.text.measure_width(&self.title, self.title_size, FontRole::Body);
        let body_w = cx.text.measure_width(&self.body, self.body_size, FontRole::Body);
        let rect = self.placement(self.box_size(title_w, body_w), surface);

        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(cx.theme.tooltip_background);
        canvas.draw_round_rect(rect, 6.0, 6.0, &bg);

        let x = rect.left + self.padding;
        let title_base = rect.top + self.padding + self.title_size;
        cx.text.draw_left(canvas, &self.title, x, title_base, self.title_size, cx.theme.tooltip_title, FontRole::Body);
        let body_base = title_base + self.title_margin_bottom + self.body_size;
        cx.text.draw_left(canvas, &self.body, x, body_base, self.body_size, cx.theme.tooltip_body, FontRole::Body);
    }
}
