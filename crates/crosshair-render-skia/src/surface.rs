// File: crates/crosshair-render-skia/src/surface.rs
// Summary: DrawingSurface over a Skia canvas with a canvas-2D style save/restore stack.

use crosshair_core::{Color, DrawingSurface, FontSpec, LineJoin, TextAlign, TextBaseline};
use skia_safe as skia;
use tracing::trace;

use crate::text::TextShaper;

pub(crate) fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

#[derive(Clone)]
struct SurfaceStyle {
    stroke: skia::Paint,
    dash: Vec<f32>,
    fill: skia::Color,
    font: FontSpec,
    align: TextAlign,
    baseline: TextBaseline,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(skia::Color::BLACK);
        Self {
            stroke,
            dash: Vec::new(),
            fill: skia::Color::BLACK,
            font: FontSpec::default(),
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
        }
    }
}

/// Canvas wrapper that overlay plugins draw through.
///
/// Style setters live on a stack mirrored with `Canvas::save`/`restore`, so a
/// plugin's strokes and fonts never leak into the host's later drawing.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    style: SurfaceStyle,
    stack: Vec<SurfaceStyle>,
    path: skia::Path,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self {
            canvas,
            shaper,
            style: SurfaceStyle::default(),
            stack: Vec::new(),
            path: skia::Path::new(),
        }
    }

    fn apply_dash(&mut self) {
        let effect = if self.style.dash.is_empty() {
            None
        } else {
            let mut intervals = self.style.dash.clone();
            if intervals.len() % 2 == 1 {
                intervals.extend_from_within(..);
            }
            skia::PathEffect::dash(&intervals, 0.0)
        };
        self.style.stroke.set_path_effect(effect);
    }
}

impl DrawingSurface for SkiaSurface<'_> {
    fn save(&mut self) {
        self.canvas.save();
        self.stack.push(self.style.clone());
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.style = prev;
            self.canvas.restore();
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.canvas.translate((dx as f32, dy as f32));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.style.stroke.set_color(to_skia(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.style.stroke.set_stroke_width(width as f32);
    }

    fn set_line_join(&mut self, join: LineJoin) {
        let join = match join {
            LineJoin::Miter => skia::paint::Join::Miter,
            LineJoin::Round => skia::paint::Join::Round,
            LineJoin::Bevel => skia::paint::Join::Bevel,
        };
        self.style.stroke.set_stroke_join(join);
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.style.dash = segments.iter().map(|s| *s as f32).collect();
        self.apply_dash();
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x as f32, y as f32));
    }

    fn stroke(&mut self) {
        self.canvas.draw_path(&self.path, &self.style.stroke);
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.style.font = font.clone();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.style.fill = to_skia(color);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.style.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.style.baseline = baseline;
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        self.shaper.measure_width(text, &self.style.font) as f64
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        trace!(text, x, y, align = ?self.style.align, baseline = ?self.style.baseline, "fill text");
        self.shaper.draw_anchored(
            self.canvas,
            text,
            x as f32,
            y as f32,
            self.style.align,
            self.style.baseline,
            &self.style.font,
            self.style.fill,
        );
    }
}
