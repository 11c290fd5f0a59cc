use crate::defaults;
use crate::types::{AspectRatio, Color};
use serde::{Deserialize, Serialize};

/// Everything the renderer needs besides the photo itself.
///
/// Owned by the caller (CLI, prefs layer) and passed in explicitly on
/// each recomputation; nothing in the crate retains it.
#[derive(Serialize, Deserialize, Debug, PartialEq, Copy, Clone)]
pub struct FrameOptions {
    /// Border width in percent of the shorter source side.
    pub border_percent: f64,
    pub ratio: AspectRatio,
    /// Longest allowed canvas side; `0` disables downscaling.
    pub max_dimension: u32,
    /// Output image quality (1-100), JPEG only.
    pub quality: u8,
    pub background: Color,
}

impl Default for FrameOptions {
    #[inline]
    fn default() -> Self {
        Self {
            border_percent: defaults::BORDER_PERCENT,
            ratio: AspectRatio::default(),
            max_dimension: defaults::MAX_CANVAS_DIMENSION,
            quality: defaults::JPEG_QUALITY,
            background: defaults::BACKGROUND,
        }
    }
}
