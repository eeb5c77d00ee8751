// File: crates/crosshair-core/src/types.rs
// Summary: Shared types and constants (sentinel, offsets, paddings, margins).

/// Default canvas width in pixels.
pub const WIDTH: i32 = 1024;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 640;

/// Crosshair coordinate meaning "not shown".
pub const HIDDEN: f64 = -1.0;

/// Vertical distance from the top edge, in pixels, below which the label flips
/// under the horizontal line. Text height is not measurable, so this is fixed.
pub const LABEL_FLIP_THRESHOLD: f64 = 50.0;

/// Pixel coordinates relative to the drawing area's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPoint {
    pub left: f64,
    pub top: f64,
}

impl PixelPoint {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Offset of one box within another (drawing area within canvas, canvas within page).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Canvas margins around the drawing area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
