// File: crates/crosshair-core/src/point.rs
// Summary: Data-space points addressed by named axes (x, x2, y, y3, ...).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxisDirection {
    X,
    Y,
}

/// Name of one axis: direction plus 1-based index. Axis 1 is written bare (`x`, `y`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxisKey {
    pub direction: AxisDirection,
    pub index: u8,
}

impl AxisKey {
    pub const X: AxisKey = AxisKey { direction: AxisDirection::X, index: 1 };
    pub const Y: AxisKey = AxisKey { direction: AxisDirection::Y, index: 1 };

    pub const fn x(index: u8) -> Self {
        Self { direction: AxisDirection::X, index }
    }

    pub const fn y(index: u8) -> Self {
        Self { direction: AxisDirection::Y, index }
    }
}

impl fmt::Display for AxisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = match self.direction {
            AxisDirection::X => 'x',
            AxisDirection::Y => 'y',
        };
        if self.index == 1 { write!(f, "{d}") } else { write!(f, "{d}{}", self.index) }
    }
}

impl FromStr for AxisKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::AxisKey(s.to_string());
        let mut chars = s.trim().chars();
        let direction = match chars.next() {
            Some('x') | Some('X') => AxisDirection::X,
            Some('y') | Some('Y') => AxisDirection::Y,
            _ => return Err(bad()),
        };
        let rest = chars.as_str();
        let index = if rest.is_empty() { 1 } else { rest.parse::<u8>().map_err(|_| bad())? };
        if index == 0 {
            return Err(bad());
        }
        Ok(Self { direction, index })
    }
}

/// A point in data space. Each coordinate is stored under the axis it belongs to,
/// so a point can reference secondary axes (`{x2, y3}`) as well as the primary pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisPoint {
    values: BTreeMap<AxisKey, f64>,
}

impl AxisPoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point on the primary axes.
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new().with(AxisKey::X, x).with(AxisKey::Y, y)
    }

    pub fn with(mut self, key: AxisKey, value: f64) -> Self {
        self.values.insert(key, value);
        self
    }

    pub fn set(&mut self, key: AxisKey, value: f64) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: AxisKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    pub fn x(&self) -> Option<f64> { self.get(AxisKey::X) }
    pub fn y(&self) -> Option<f64> { self.get(AxisKey::Y) }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (AxisKey, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<(AxisKey, f64)> for AxisPoint {
    fn from_iter<I: IntoIterator<Item = (AxisKey, f64)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_key_names() {
        assert_eq!("x".parse::<AxisKey>().unwrap(), AxisKey::X);
        assert_eq!("x1".parse::<AxisKey>().unwrap(), AxisKey::X);
        assert_eq!("y3".parse::<AxisKey>().unwrap(), AxisKey::y(3));
        assert_eq!(AxisKey::x(2).to_string(), "x2");
        assert_eq!(AxisKey::Y.to_string(), "y");
        assert!("z".parse::<AxisKey>().is_err());
        assert!("x0".parse::<AxisKey>().is_err());
        assert!("xa".parse::<AxisKey>().is_err());
    }

    #[test]
    fn secondary_axes_are_kept_apart() {
        let p = AxisPoint::new().with(AxisKey::x(2), 4.0).with(AxisKey::y(3), -1.0);
        assert_eq!(p.x(), None);
        assert_eq!(p.get(AxisKey::x(2)), Some(4.0));
        assert_eq!(p.get(AxisKey::y(3)), Some(-1.0));
    }
}
