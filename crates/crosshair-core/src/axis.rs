// File: crates/crosshair-core/src/axis.rs
// Summary: Axis model with labels, ranges and linear/log10 normalization.

const MIN_SPAN: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    /// Log axis; the range is forced strictly positive.
    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        let min = if min <= MIN_SPAN { MIN_SPAN } else { min };
        let max = if max <= min { min * 10.0 } else { max };
        Self { label: label.into(), min, max, kind: ScaleKind::Log10 }
    }

    pub fn default_x() -> Self {
        Self::new("Time", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Price", 0.0, 100.0)
    }

    fn mapped(&self, v: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => v.max(MIN_SPAN).log10(),
        }
    }

    fn unmapped(&self, v: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => 10f64.powf(v),
        }
    }

    /// Position of `v` along the axis: `0` at `min`, `1` at `max`.
    pub fn normalize(&self, v: f64) -> f64 {
        let lo = self.mapped(self.min);
        let span = (self.mapped(self.max) - lo).max(MIN_SPAN);
        (self.mapped(v) - lo) / span
    }

    /// Inverse of [`Axis::normalize`].
    pub fn denormalize(&self, t: f64) -> f64 {
        let lo = self.mapped(self.min);
        let span = (self.mapped(self.max) - lo).max(MIN_SPAN);
        self.unmapped(lo + t * span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_normalize_roundtrip() {
        let a = Axis::new("X", -10.0, 10.0);
        assert_eq!(a.normalize(0.0), 0.5);
        assert!((a.denormalize(0.25) - -5.0).abs() < 1e-9);
    }

    #[test]
    fn log_normalize_decades() {
        let a = Axis::log10("Y", 1.0, 1000.0);
        assert!((a.normalize(10.0) - 1.0 / 3.0).abs() < 1e-9);
        assert!((a.denormalize(2.0 / 3.0) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn log_forces_positive_range() {
        let a = Axis::log10("Y", -5.0, -1.0);
        assert!(a.min > 0.0);
        assert!(a.max > a.min);
    }
}
