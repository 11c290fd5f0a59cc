use crate::types::{AspectRatio, Point, Size};
use serde::{Deserialize, Serialize};

/// Expanded canvas geometry for a framed photo.
///
/// `canvas` is the output size after border padding and aspect-ratio
/// correction; `offset` is where the untouched source lands on it.
/// Invariants: the source fits inside the canvas at `offset`, and it is
/// centered within a 1px rounding tolerance on both axes.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Layout {
    pub canvas: Size,
    pub offset: Point,
}

/// Border width in pixels: the given percentage of the shorter source
/// side, rounded half away from zero, never negative.
#[inline]
fn border_width(source: Size, percent: f64) -> u32 {
    let border = (f64::from(source.min_dim()) * (percent / 100.0)).round();
    border.max(0.0) as u32
}

impl Layout {
    /// Computes the canvas size and draw offset for `source` with a
    /// symmetric border and a target aspect ratio.
    ///
    /// The frame only ever adds padding: the canvas never shrinks below
    /// the bordered source in either dimension. Pure and deterministic,
    /// so interactive callers can recompute per adjustment.
    #[must_use]
    pub fn calculate(source: Size, border_percent: f64, ratio: AspectRatio) -> Self {
        let border = border_width(source, border_percent);
        let base = Size {
            width: source.width.saturating_add(border.saturating_mul(2)),
            height: source.height.saturating_add(border.saturating_mul(2)),
        };

        let canvas = match ratio {
            AspectRatio::Original => base,
            _ => {
                let target = ratio.resolve(source);
                if base.aspect_ratio() > target {
                    // base is relatively wider: pad vertically
                    Size {
                        width: base.width,
                        height: (f64::from(base.width) / target).round() as u32,
                    }
                } else {
                    // pad horizontally
                    Size {
                        width: (f64::from(base.height) * target).round() as u32,
                        height: base.height,
                    }
                }
            }
        };

        let offset = Point {
            x: ((f64::from(canvas.width) - f64::from(source.width)) / 2.0).round() as i64,
            y: ((f64::from(canvas.height) - f64::from(source.height)) / 2.0).round() as i64,
        };
        Self { canvas, offset }
    }

    /// Advisory uniform downscale factor in `(0, 1]` so the larger
    /// canvas dimension fits `max_dimension` (`0` = unbounded).
    ///
    /// The caller multiplies the canvas, offset, and source extents by
    /// this factor before compositing; the unscaled layout stays the
    /// source of truth.
    #[inline]
    #[must_use]
    pub fn scale_for(&self, max_dimension: u32) -> f64 {
        if max_dimension == 0 {
            return 1.0;
        }
        let largest = self.canvas.max_dim();
        if largest <= max_dimension {
            1.0
        } else {
            f64::from(max_dimension) / f64::from(largest)
        }
    }

    /// True iff both rendered margins are at least `floor(border_pixels)`.
    #[inline]
    #[must_use]
    pub fn has_minimum_border(&self, border_pixels: f64) -> bool {
        let safe_border = border_pixels.floor().max(0.0) as i64;
        let min_x = self.offset.x.min(i64::from(self.canvas.width) - self.offset.x);
        let min_y = self.offset.y.min(i64::from(self.canvas.height) - self.offset.y);
        min_x >= safe_border && min_y >= safe_border
    }
}
