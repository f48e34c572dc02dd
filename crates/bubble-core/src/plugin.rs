// File: crates/bubble-core/src/plugin.rs
// Summary: Pre-draw hook capability exposed by the chart surface, plus a backdrop label hook.

use std::cell::RefCell;
use std::rc::Rc;

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::text::{FontRole, TextShaper};
use crate::theme::Theme;

/// What a hook sees while the chart is drawing.
pub struct DrawContext<'a> {
    pub plot: RectI32,
    pub theme: &'a Theme,
    pub text: &'a TextShaper,
    /// False when text output is suppressed (deterministic snapshots).
    pub draw_labels: bool,
}

/// Hook invoked after the background is cleared and before grid, axes and series.
/// Register with [`crate::Chart::register_pre_draw`].
pub trait PreDrawHook {
    fn id(&self) -> &'static str;
    fn before_draw(&self, canvas: &skia::Canvas, cx: &DrawContext<'_>);
}

/// Large centered text behind the data, sized to the plot area.
/// Font size is `min(plot_width * 0.4, max_size)`.
pub struct BackdropLabel {
    text: RefCell<String>,
    pub max_size: f32,
}

impl BackdropLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: RefCell::new(text.into()), max_size: 400.0 }
    }

    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = text.into();
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn font_size(&self, plot: &RectI32) -> f32 {
        (plot.width() as f32 * 0.4).min(self.max_size)
    }
}

impl PreDrawHook for BackdropLabel {
    fn id(&self) -> &'static str { "backdrop_label" }

    fn before_draw(&self, canvas: &skia::Canvas, cx: &DrawContext<'_>) {
        if !cx.draw_labels { return; }
        let text = self.text.borrow();
        if text.is_empty() { return; }
        let size = self.font_size(&cx.plot);
        if size < 1.0 { return; }
        let (mx, my) = cx.plot.center();
        cx.text.draw_centered(canvas, &text, mx, my, size, cx.theme.backdrop_text, FontRole::Display);
    }
}

// Allow sharing a single label across frames while the owner updates its text
impl PreDrawHook for Rc<BackdropLabel> {
    fn id(&self) -> &'static str { BackdropLabel::id(self) }
    fn before_draw(&self, canvas: &skia::Canvas, cx: &DrawContext<'_>) { BackdropLabel::before_draw(self, canvas, cx) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_font_size_caps_at_max() {
        let label = BackdropLabel::new("1800");
        assert_eq!(label.font_size(&RectI32::from_ltwh(0, 0, 500, 300)), 200.0);
        assert_eq!(label.font_size(&RectI32::from_ltwh(0, 0, 2000, 300)), 400.0);
    }

    #[test]
    fn shared_label_updates_through_rc() {
        let label = Rc::new(BackdropLabel::new("1800"));
        let hook: Box<dyn PreDrawHook> = Box::new(label.clone());
        label.set_text("1950");
        assert_eq!(hook.id(), "backdrop_label");
        assert_eq!(label.text(), "1950");
    }
}
