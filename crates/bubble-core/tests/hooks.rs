// File: crates/bubble-core/tests/hooks.rs
// Purpose: Pre-draw hooks run before the chart content and see the plot area.

use std::cell::RefCell;
use std::rc::Rc;

use bubble_core::{BackdropLabel, Chart, DrawContext, PreDrawHook, RectI32, RenderOptions};
use skia_safe as skia;

struct Recorder {
    seen: Rc<RefCell<Vec<RectI32>>>,
}

impl PreDrawHook for Recorder {
    fn id(&self) -> &'static str { "recorder" }
    fn before_draw(&self, _canvas: &skia::Canvas, cx: &DrawContext<'_>) {
        self.seen.borrow_mut().push(cx.plot);
    }
}

#[test]
fn hook_called_once_per_render_with_plot_area() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut chart = Chart::new();
    chart.register_pre_draw(Recorder { seen: seen.clone() });

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    chart.render_to_png_bytes(&opts).expect("render");
    chart.render_to_png_bytes(&opts).expect("render");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], opts.plot_area());
}

#[test]
fn hooks_listed_in_registration_order() {
    let mut chart = Chart::new();
    let label = Rc::new(BackdropLabel::new("1800"));
    chart.register_pre_draw(label.clone());
    chart.register_pre_draw(Recorder { seen: Rc::new(RefCell::new(Vec::new())) });
    assert_eq!(chart.pre_draw_hooks().collect::<Vec<_>>(), vec!["backdrop_label", "recorder"]);
}

#[test]
fn backdrop_label_paints_behind_with_labels_on() {
    let mut chart = Chart::new();
    chart.register_pre_draw(Rc::new(BackdropLabel::new("2018")));
    let opts = RenderOptions::default();
    let bytes = chart.render_to_png_bytes(&opts).expect("render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
