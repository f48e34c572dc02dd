// File: crates/bubble-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; system fonts plus optional font files.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use skia::textlayout::{
    FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle, TypefaceFontProvider,
};

/// Which family list a piece of text uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    /// Axis titles, tooltips.
    Body,
    /// Tick labels; tabular digits where available.
    Numeric,
    /// Large decorative text such as the year backdrop.
    Display,
}

impl FontRole {
    fn families(self) -> &'static [&'static str] {
        match self {
            FontRole::Body => &["Open Sans", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"],
            FontRole::Numeric => &["Open Sans", "Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"],
            FontRole::Display => &["Aleo", "Georgia", "DejaVu Serif", "Times New Roman", "serif"],
        }
    }
}

/// Cloning shares the underlying font collection.
#[derive(Clone)]
pub struct TextShaper {
    fonts: FontCollection,
    registered: usize,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, registered: 0 }
    }

    /// Register every `.ttf`/`.otf` in `dir` ahead of the system fonts.
    /// Returns the number of typefaces that loaded.
    pub fn register_font_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).with_context(|| format!("reading font dir {}", dir.display()))?;
        let mgr = skia::FontMgr::default();
        let mut provider = TypefaceFontProvider::new();
        let mut loaded = 0usize;
        for entry in entries {
            let path = entry?.path();
            let is_font = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"))
                .unwrap_or(false);
            if !is_font { continue; }
            let bytes = std::fs::read(&path).with_context(|| format!("reading font {}", path.display()))?;
            match mgr.new_from_data(skia::Data::new_copy(&bytes), None) {
                Some(tf) => {
                    log::debug!("registered font {} ({})", tf.family_name(), path.display());
                    provider.register_typeface(tf, None::<&str>);
                    loaded += 1;
                }
                None => log::warn!("skipping unreadable font file {}", path.display()),
            }
        }
        if loaded > 0 {
            let assets: skia::FontMgr = provider.into();
            self.fonts.set_asset_font_manager(Some(assets));
            self.registered += loaded;
        }
        Ok(loaded)
    }

    /// Number of typefaces registered from font files.
    pub fn registered_fonts(&self) -> usize { self.registered }

    fn make_style(size: f32, color: skia::Color, role: FontRole) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(role.families());
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, role: FontRole) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, role);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, role: FontRole) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), role);
        // width of the longest line
        p.longest_line()
    }

    /// Draw with `(x, y)` as the left baseline (approximate).
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, role: FontRole) {
        let mut p = self.layout(text, size, color, role);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw so the text box is centered on `(cx, cy)`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color, role: FontRole) {
        let mut p = self.layout(text, size, color, role);
        let w = p.longest_line();
        let h = p.height();
        p.paint(canvas, (cx - w * 0.5, cy - h * 0.5));
    }

    /// Draw with the right edge at `x`, vertically centered on `cy`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, x: f32, cy: f32, size: f32, color: skia::Color, role: FontRole) {
        let mut p = self.layout(text, size, color, role);
        let w = p.longest_line();
        let h = p.height();
        p.paint(canvas, (x - w, cy - h * 0.5));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
