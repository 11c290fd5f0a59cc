use super::Size;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    #[must_use]
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Uniformly scales both coordinates, rounding half away from zero.
    #[inline]
    #[must_use]
    pub fn scale_by(self, scalar: f64) -> Self {
        Self {
            x: (self.x as f64 * scalar).round() as i64,
            y: (self.y as f64 * scalar).round() as i64,
        }
    }
}

impl Default for Point {
    #[inline]
    fn default() -> Self {
        Self::origin()
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from(coords: (i64, i64)) -> Self {
        Self {
            x: coords.0,
            y: coords.1,
        }
    }
}

impl From<Size> for Point {
    #[inline]
    fn from(size: Size) -> Self {
        Self {
            x: i64::from(size.width),
            y: i64::from(size.height),
        }
    }
}

impl std::fmt::Display for Point {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
