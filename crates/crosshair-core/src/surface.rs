// File: crates/crosshair-core/src/surface.rs
// Summary: Drawing-surface contract (canvas-2D style) and a recording backend for headless use.

use crate::config::{Color, FontSpec};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// `y` is the alphabetic baseline; glyphs sit above it.
    #[default]
    Alphabetic,
    /// `y` is the hanging baseline; glyphs extend below it.
    Hanging,
    Top,
    Middle,
    Bottom,
}

/// Immediate-mode drawing target handed to overlay passes.
///
/// Semantics follow a canvas 2D context: `save`/`restore` push and pop the
/// transform together with every style setter below, and a path is built with
/// `begin_path`/`move_to`/`line_to` then painted by `stroke`.
pub trait DrawingSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);

    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_join(&mut self, join: LineJoin);
    /// Dash lengths; an odd-length list is repeated to make it even. Empty means solid.
    fn set_line_dash(&mut self, segments: &[f64]);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);

    fn set_font(&mut self, font: &FontSpec);
    fn set_fill_color(&mut self, color: Color);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    /// Advance width of `text` in the current font.
    fn measure_text(&mut self, text: &str) -> f64;
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    StrokeColor(Color),
    LineWidth(f64),
    LineJoin(LineJoin),
    LineDash(Vec<f64>),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
    Font(FontSpec),
    FillColor(Color),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    MeasureText(String),
    FillText { text: String, x: f64, y: f64, align: TextAlign, baseline: TextBaseline },
}

#[derive(Clone, Copy, Debug, Default)]
struct RecordedStyle {
    align: TextAlign,
    baseline: TextBaseline,
}

/// Surface that records calls instead of rasterizing.
///
/// Text is measured with a fixed advance per character so label placement is
/// deterministic without a font stack.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    char_width: f64,
    style: RecordedStyle,
    stack: Vec<RecordedStyle>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub const DEFAULT_CHAR_WIDTH: f64 = 7.0;

    pub fn new() -> Self {
        Self::with_char_width(Self::DEFAULT_CHAR_WIDTH)
    }

    pub fn with_char_width(char_width: f64) -> Self {
        Self { commands: Vec::new(), char_width, style: RecordedStyle::default(), stack: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of unmatched `save` calls.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Every `FillText` call.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::FillText { .. }))
    }

    /// Segments stroked, as `(from, to)` pairs in surface-local coordinates.
    pub fn segments(&self) -> Vec<((f64, f64), (f64, f64))> {
        let mut out = Vec::new();
        let mut cursor = None;
        for c in &self.commands {
            match *c {
                DrawCommand::MoveTo { x, y } => cursor = Some((x, y)),
                DrawCommand::LineTo { x, y } => {
                    if let Some(from) = cursor {
                        out.push((from, (x, y)));
                    }
                    cursor = Some((x, y));
                }
                _ => {}
            }
        }
        out
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.style);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.style = prev;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.commands.push(DrawCommand::LineJoin(join));
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.commands.push(DrawCommand::LineDash(segments.to_vec()));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.commands.push(DrawCommand::Font(font.clone()));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.style.align = align;
        self.commands.push(DrawCommand::TextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.style.baseline = baseline;
        self.commands.push(DrawCommand::TextBaseline(baseline));
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        self.commands.push(DrawCommand::MeasureText(text.to_string()));
        text.chars().count() as f64 * self.char_width
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            align: self.style.align,
            baseline: self.style.baseline,
        });
    }
}
