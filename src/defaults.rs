use crate::types::Color;
use image::imageops::FilterType;

pub static JPEG_QUALITY: u8 = 92; // 1-100
pub static BORDER_PERCENT_MIN: f64 = 0.0;
pub static BORDER_PERCENT_MAX: f64 = 20.0;
pub static BORDER_PERCENT: f64 = 8.0;
pub static MAX_CANVAS_DIMENSION: u32 = 4096;
pub static BACKGROUND: Color = Color::white();
pub static FILTER_TYPE: FilterType = FilterType::Lanczos3;
