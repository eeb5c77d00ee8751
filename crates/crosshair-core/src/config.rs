// File: crates/crosshair-core/src/config.rs
// Summary: Crosshair options (mode, stroke and label styling) with TOML loading.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};
use crate::point::AxisPoint;

/// Which reference lines are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrosshairMode {
    /// Crosshair disabled: no events bound, nothing drawn.
    #[default]
    None,
    /// Vertical line tracing the x axis (`"x"`).
    Vertical,
    /// Horizontal line tracing the y axis (`"y"`).
    Horizontal,
    /// Both lines (`"xy"`).
    Both,
}

impl CrosshairMode {
    pub const fn is_enabled(self) -> bool {
        !matches!(self, CrosshairMode::None)
    }
    pub const fn has_vertical(self) -> bool {
        matches!(self, CrosshairMode::Vertical | CrosshairMode::Both)
    }
    pub const fn has_horizontal(self) -> bool {
        matches!(self, CrosshairMode::Horizontal | CrosshairMode::Both)
    }

    /// Parse a mode string by the axis letters it contains. Never fails: a
    /// non-empty string with neither `x` nor `y` degrades to `None`.
    pub fn parse_lenient(s: &str) -> Self {
        let s = s.trim();
        let vertical = s.contains('x');
        let horizontal = s.contains('y');
        match (vertical, horizontal) {
            (true, true) => CrosshairMode::Both,
            (true, false) => CrosshairMode::Vertical,
            (false, true) => CrosshairMode::Horizontal,
            (false, false) => {
                if !s.is_empty() {
                    warn!(mode = s, "unrecognized crosshair mode; no lines will be drawn");
                }
                CrosshairMode::None
            }
        }
    }

    pub const fn as_str(self) -> Option<&'static str> {
        match self {
            CrosshairMode::None => None,
            CrosshairMode::Vertical => Some("x"),
            CrosshairMode::Horizontal => Some("y"),
            CrosshairMode::Both => Some("xy"),
        }
    }
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color with a fractional alpha in `0.0..=1.0`.
    pub fn with_alpha_f(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b, a }
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    /// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)` and a few names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().to_ascii_lowercase();
        let bad = || ConfigError::Color(s.to_string());

        if let Some(hex) = raw.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(bad);
        }
        if let Some(args) = raw.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            if parts.len() != 4 {
                return Err(bad());
            }
            let (r, g, b) = parse_channels(&parts[..3]).ok_or_else(bad)?;
            let alpha = parts[3].parse::<f64>().map_err(|_| bad())?;
            return Ok(Color::with_alpha_f(r, g, b, alpha));
        }
        if let Some(args) = raw.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(bad());
            }
            let (r, g, b) = parse_channels(&parts).ok_or_else(bad)?;
            return Ok(Color::rgb(r, g, b));
        }
        match raw.as_str() {
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "red" => Ok(Color::rgb(255, 0, 0)),
            "green" => Ok(Color::rgb(0, 128, 0)),
            "blue" => Ok(Color::rgb(0, 0, 255)),
            "gray" | "grey" => Ok(Color::rgb(128, 128, 128)),
            "transparent" => Ok(Color::TRANSPARENT),
            _ => Err(bad()),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let nibble = |c: char| c.to_digit(16).map(|d| d as u8);
    let chars: Vec<char> = hex.chars().collect();
    match chars.len() {
        3 => {
            let r = nibble(chars[0])?;
            let g = nibble(chars[1])?;
            let b = nibble(chars[2])?;
            Some(Color::rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let byte = |i: usize| Some(nibble(chars[i])? * 16 + nibble(chars[i + 1])?);
            Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

fn parse_channels(parts: &[&str]) -> Option<(u8, u8, u8)> {
    let ch = |s: &str| s.parse::<u8>().ok();
    Some((ch(parts[0])?, ch(parts[1])?, ch(parts[2])?))
}

/// Label font: family name plus pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f32,
}

impl FontSpec {
    pub const DEFAULT_SIZE: f32 = 12.0;

    pub fn new(family: impl Into<String>, size_px: f32) -> Self {
        Self { family: family.into(), size_px }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Arial", Self::DEFAULT_SIZE)
    }
}

impl FromStr for FontSpec {
    type Err = ConfigError;

    /// Accepts `"Arial 12px"` as well as CSS order `"12px Arial"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::Font(s.to_string());
        let mut size = None;
        let mut family = Vec::new();
        for tok in s.split_whitespace() {
            if let Some(num) = tok.strip_suffix("px") {
                let v = num.parse::<f32>().map_err(|_| bad())?;
                if v <= 0.0 {
                    return Err(bad());
                }
                size = Some(v);
            } else {
                family.push(tok);
            }
        }
        if family.is_empty() {
            return Err(bad());
        }
        Ok(Self::new(family.join(" "), size.unwrap_or(Self::DEFAULT_SIZE)))
    }
}

/// Label offsets relative to the crosshair intersection.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Padding {
    pub top: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self { top: 10.0, left: -4.0 }
    }
}

/// Maps the crosshair's data-space position to label text. Empty text draws no label.
pub type LabelFn = Arc<dyn Fn(&AxisPoint) -> String>;

fn no_label() -> LabelFn {
    Arc::new(|_| String::new())
}

/// Read-only crosshair configuration, supplied once when the controller is built.
#[derive(Clone)]
pub struct CrosshairOptions {
    pub mode: CrosshairMode,
    pub color: Color,
    pub line_width: f64,
    pub line_dashed: bool,
    pub text_color: Color,
    pub font: FontSpec,
    pub padding: Padding,
    pub label: LabelFn,
}

impl Default for CrosshairOptions {
    fn default() -> Self {
        Self {
            mode: CrosshairMode::None,
            color: Color::with_alpha_f(170, 0, 0, 0.80),
            line_width: 1.0,
            line_dashed: false,
            text_color: Color::BLACK,
            font: FontSpec::default(),
            padding: Padding::default(),
            label: no_label(),
        }
    }
}

impl fmt::Debug for CrosshairOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrosshairOptions")
            .field("mode", &self.mode)
            .field("color", &self.color)
            .field("line_width", &self.line_width)
            .field("line_dashed", &self.line_dashed)
            .field("text_color", &self.text_color)
            .field("font", &self.font)
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}

impl CrosshairOptions {
    pub fn with_mode(mut self, mode: CrosshairMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_label<F>(mut self, label: F) -> Self
    where
        F: Fn(&AxisPoint) -> String + 'static,
    {
        self.label = Arc::new(label);
        self
    }

    /// Load options from a TOML document with a `[crosshair]` table.
    /// Missing keys keep their defaults; the label function is never read from file.
    pub fn from_toml_str(src: &str) -> ConfigResult<Self> {
        let doc: OptionsDocument = toml::from_str(src)?;
        doc.crosshair.into_options()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsDocument {
    #[serde(default)]
    crosshair: RawOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
struct RawOptions {
    mode: Option<String>,
    color: Option<String>,
    line_width: Option<f64>,
    line_dashed: Option<bool>,
    text_color: Option<String>,
    font: Option<String>,
    padding: Option<Padding>,
}

impl RawOptions {
    fn into_options(self) -> ConfigResult<CrosshairOptions> {
        let mut opts = CrosshairOptions::default();
        if let Some(mode) = self.mode.as_deref() {
            opts.mode = CrosshairMode::parse_lenient(mode);
        }
        if let Some(color) = self.color.as_deref() {
            opts.color = color.parse()?;
        }
        if let Some(w) = self.line_width {
            opts.line_width = w.max(0.0);
        }
        if let Some(dashed) = self.line_dashed {
            opts.line_dashed = dashed;
        }
        if let Some(color) = self.text_color.as_deref() {
            opts.text_color = color.parse()?;
        }
        if let Some(font) = self.font.as_deref() {
            opts.font = font.parse()?;
        }
        if let Some(padding) = self.padding {
            opts.padding = padding;
        }
        Ok(opts)
    }
}
