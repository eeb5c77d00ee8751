// File: crates/crosshair-core/src/label.rs
// Summary: Label anchor placement with left/right and up/down flips at the plot edges.

use crate::config::Padding;
use crate::surface::{TextAlign, TextBaseline};
use crate::types::LABEL_FLIP_THRESHOLD;

/// Where and how the crosshair label is drawn, in drawing-area pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Place a label of `text_width` next to the anchor `(x_offset, y_offset)`.
///
/// Horizontal: text that would cross the left edge starts at the anchor,
/// otherwise it ends at the anchor. Vertical: without a horizontal line, or far
/// enough from the top, the baseline sits below the anchor; near the top it
/// hangs from above.
pub fn place_label(
    x_offset: f64,
    y_offset: f64,
    text_width: f64,
    padding: Padding,
    horizontal_line: bool,
) -> LabelPlacement {
    let (x, align) = if x_offset + padding.left < text_width {
        (x_offset - padding.left, TextAlign::Left)
    } else {
        (x_offset + padding.left, TextAlign::Right)
    };

    let (y, baseline) = if y_offset >= LABEL_FLIP_THRESHOLD || !horizontal_line {
        (y_offset + padding.top, TextBaseline::Alphabetic)
    } else {
        (y_offset - padding.top, TextBaseline::Hanging)
    };

    LabelPlacement { x, y, align, baseline }
}
