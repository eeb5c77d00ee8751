// File: crates/crosshair-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; measures and draws labels at canvas-2D style anchors.

use crosshair_core::{FontSpec, TextAlign, TextBaseline};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

const FALLBACK_FAMILIES: [&str; 5] = ["Segoe UI", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size_px.max(1.0));
        ts.set_color(color);
        let mut families = vec![font.family.as_str()];
        families.extend(FALLBACK_FAMILIES.iter().copied().filter(|f| *f != font.family));
        ts.set_font_families(&families[..]);
        ts
    }

    pub fn layout(&self, text: &str, font: &FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(font, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        let p = self.layout(text, font, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` so that `(x, y)` is the anchor named by `align` and `baseline`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        align: TextAlign,
        baseline: TextBaseline,
        font: &FontSpec,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, font, color);
        let width = p.longest_line();
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Right => x - width,
            TextAlign::Center => x - width * 0.5,
        };
        // Paragraph paints from its top-left corner
        let top = match baseline {
            TextBaseline::Alphabetic => y - p.alphabetic_baseline(),
            TextBaseline::Hanging | TextBaseline::Top => y,
            TextBaseline::Middle => y - p.height() * 0.5,
            TextBaseline::Bottom => y - p.height(),
        };
        p.paint(canvas, (left, top));
    }
}
