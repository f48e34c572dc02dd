// File: crates/bubble-core/src/theme.rs
// Summary: Light/Dark theming for bubble chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    /// Large text painted behind the data (e.g. the selected year).
    pub backdrop_text: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_title: skia::Color,
    pub tooltip_body: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 230),
            axis_line: skia::Color::from_argb(255, 160, 160, 160),
            axis_label: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            tick: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            backdrop_text: skia::Color::from_argb(255, 0xee, 0xee, 0xee),
            tooltip_background: skia::Color::from_argb(204, 0, 0, 0),
            tooltip_title: skia::Color::from_argb(255, 255, 255, 255),
            tooltip_body: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            backdrop_text: skia::Color::from_argb(255, 34, 34, 40),
            tooltip_background: skia::Color::from_argb(230, 235, 235, 245),
            tooltip_title: skia::Color::from_argb(255, 18, 18, 20),
            tooltip_body: skia::Color::from_argb(255, 40, 40, 45),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
