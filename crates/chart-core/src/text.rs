// File: crates/chart-core/src/text.rs
// Summary: Simple text shaper/renderer using Skia textlayout with sensible defaults.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // System font manager; fallback resolves emoji and symbols.
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        fc.enable_font_fallback();
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&[
            "Open Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans",
            "Noto Color Emoji", "Apple Color Emoji", "Segoe UI Emoji", "sans-serif",
        ]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// (width of the longest line, paragraph height)
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    /// Draw with the left edge at `x` and the vertical middle at `y`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (x, y - p.height() * 0.5));
    }

    /// Draw centered on `(x, y)`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (x - p.longest_line() * 0.5, y - p.height() * 0.5));
    }

    /// Draw with the right edge at `x` and the vertical middle at `y`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (x - p.longest_line(), y - p.height() * 0.5));
    }

    /// Draw starting at `(x, y)` and running along a direction rotated
    /// `degrees` clockwise from horizontal, vertically centered on that line.
    pub fn draw_rotated(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, degrees: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(degrees, None);
        p.paint(canvas, (0.0, -p.height() * 0.5));
        canvas.restore();
    }
}
