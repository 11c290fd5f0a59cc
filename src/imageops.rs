use crate::types::{Point, Size};
pub use image::imageops::*;

/// Fills a rectangle of `image` with `color`, clamped to the image
/// bounds.
#[inline]
pub fn fill_rect(
    image: &mut image::RgbaImage,
    color: image::Rgba<u8>,
    top_left: Point,
    size: Size,
) {
    let x_start = top_left.x.clamp(0, i64::from(u32::MAX)) as u32;
    let y_start = top_left.y.clamp(0, i64::from(u32::MAX)) as u32;
    let x_end = x_start.saturating_add(size.width).min(image.width());
    let y_end = y_start.saturating_add(size.height).min(image.height());
    for y in y_start..y_end {
        for x in x_start..x_end {
            image.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fill_rect;
    use crate::types::{Point, Size};
    use image::Rgba;

    #[test]
    fn test_fill_rect_clamps_to_bounds() {
        let mut image = image::RgbaImage::new(4, 4);
        let red = Rgba([255, 0, 0, 255]);
        fill_rect(&mut image, red, Point { x: 2, y: -1 }, Size::wh(10, 10));
        assert_eq!(*image.get_pixel(3, 3), red);
        assert_eq!(*image.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_rect_covers_full_image() {
        let mut image = image::RgbaImage::new(3, 3);
        let white = Rgba([255, 255, 255, 255]);
        fill_rect(&mut image, white, Point::origin(), Size::wh(3, 3));
        assert!(image.pixels().all(|p| *p == white));
    }
}
