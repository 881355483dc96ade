// File: crates/ticker-core/src/text.rs
// Summary: Single-line text layout for the PNG display's header and footer bands.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

// Monospaced families first so prices line up between frames; the symbol
// families cover the status glyphs and currency signs.
const FAMILIES: &[&str] = &[
    "DejaVu Sans Mono",
    "Menlo",
    "Consolas",
    "Roboto Mono",
    "Noto Sans Symbols2",
    "Segoe UI Symbol",
    "monospace",
];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(FAMILIES);

        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw `text` with its top-left corner at `(x, top)`; returns the advance.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, top: f32, size: f32, color: skia::Color) -> f32 {
        let mut p = self.layout(text, size, color);
        p.paint(canvas, (x, top));
        p.longest_line()
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
