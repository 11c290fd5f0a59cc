use serde::{Deserialize, Serialize};
use std::cmp::{max, min};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Default, Copy, Clone)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[inline]
    #[must_use]
    pub fn wh(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub fn min_dim(&self) -> u32 {
        min(self.width, self.height)
    }

    #[inline]
    #[must_use]
    pub fn max_dim(&self) -> u32 {
        max(self.width, self.height)
    }

    /// Width over height. Degenerate sizes produce non-finite values;
    /// callers that must stay finite go through `AspectRatio::resolve`.
    #[inline]
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Uniformly scales both dimensions, rounding half away from zero.
    #[inline]
    #[must_use]
    pub fn scale_by(self, scalar: f64) -> Self {
        Self {
            width: (f64::from(self.width) * scalar).round() as u32,
            height: (f64::from(self.height) * scalar).round() as u32,
        }
    }
}

impl std::fmt::Display for Size {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Size {
    #[inline]
    fn from(size: (u32, u32)) -> Self {
        Self {
            width: size.0,
            height: size.1,
        }
    }
}

impl<'a, P, Container> From<&'a image::ImageBuffer<P, Container>> for Size
where
    P: image::Pixel,
    Container: std::ops::Deref<Target = [P::Subpixel]>,
{
    #[inline]
    fn from(image: &'a image::ImageBuffer<P, Container>) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

impl<'a> From<&'a image::DynamicImage> for Size {
    #[inline]
    fn from(image: &'a image::DynamicImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}
