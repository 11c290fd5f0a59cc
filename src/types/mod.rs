pub mod color;
pub mod point;
pub mod size;

pub use color::Color;
pub use point::Point;
pub use size::Size;

use serde::{Deserialize, Serialize};

/// Target aspect ratio for the framed canvas.
///
/// `Original` keeps the bordered image's own proportions instead of a
/// fixed constant.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[serde(rename_all = "kebab-case")]
pub enum AspectRatio {
    Story,
    Square,
    PostVertical,
    PostHorizontal,
    Original,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Story,
        AspectRatio::Square,
        AspectRatio::PostVertical,
        AspectRatio::PostHorizontal,
        AspectRatio::Original,
    ];

    /// Resolves to a numeric width/height ratio.
    ///
    /// Always finite and positive: `Original` on a zero-height source
    /// falls back to `1.0`.
    #[inline]
    #[must_use]
    pub fn resolve(self, source: Size) -> f64 {
        match self {
            AspectRatio::Story => 9.0 / 16.0,
            AspectRatio::Square => 1.0,
            AspectRatio::PostVertical => 4.0 / 5.0,
            AspectRatio::PostHorizontal => 1.91,
            AspectRatio::Original => {
                if source.height == 0 {
                    1.0
                } else {
                    source.aspect_ratio()
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Story => "Instagram Story (9:16)",
            AspectRatio::Square => "Instagram Square (1:1)",
            AspectRatio::PostVertical => "Instagram Post Vertical (4:5)",
            AspectRatio::PostHorizontal => "Instagram Post Horizontal (1.91:1)",
            AspectRatio::Original => "Original",
        }
    }
}

impl Default for AspectRatio {
    #[inline]
    fn default() -> Self {
        AspectRatio::Story
    }
}

impl std::fmt::Display for AspectRatio {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            AspectRatio::Story => "story",
            AspectRatio::Square => "square",
            AspectRatio::PostVertical => "post-vertical",
            AspectRatio::PostHorizontal => "post-horizontal",
            AspectRatio::Original => "original",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for AspectRatio {
    type Err = super::error::ParseEnum;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_ascii_lowercase();
        match s.as_str() {
            "story" => Ok(AspectRatio::Story),
            "square" => Ok(AspectRatio::Square),
            "post-vertical" => Ok(AspectRatio::PostVertical),
            "post-horizontal" => Ok(AspectRatio::PostHorizontal),
            "original" => Ok(AspectRatio::Original),
            _ => Err(super::error::ParseEnum::Unknown(s.to_string())),
        }
    }
}
