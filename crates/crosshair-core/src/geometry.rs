// File: crates/crosshair-core/src/geometry.rs
// Summary: Lightweight helpers for pixel math on the drawing area.

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Clamp a crosshair coordinate into `[0, max]`.
///
/// A non-finite input (a component the host could not resolve) lands on `0`
/// so the state never carries NaN into the render pass.
#[inline]
pub fn clamp_coord(v: f64, max: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    clamp(v, 0.0, max.max(0.0))
}

/// Half-pixel shift that puts odd-width strokes on pixel centres.
/// Any width that is not a multiple of two counts as odd.
#[inline]
pub fn stroke_adjustment(line_width: f64) -> f64 {
    if line_width % 2.0 != 0.0 { 0.5 } else { 0.0 }
}
