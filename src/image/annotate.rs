//! Overlay drawing for the optional debug display channel.
//!
//! The node's HUD draws a one-pixel rectangle around the detected gesture.
//! These helpers write directly into an owned frame copy; rectangles are
//! clipped to the image bounds.

use crate::image::OwnedImage;

/// Intensity used for detection rectangles, matching the node's HUD.
pub const OVERLAY_INTENSITY: u8 = 155;

/// Draws a one-pixel rectangle outline from `top_left` (inclusive) to
/// `bottom_right` (exclusive), clipped to the image.
pub fn draw_rect(
    img: &mut OwnedImage,
    top_left: (usize, usize),
    bottom_right: (usize, usize),
    value: u8,
) {
    let width = img.width();
    let height = img.height();
    let (x0, y0) = top_left;
    let x1 = bottom_right.0.min(width);
    let y1 = bottom_right.1.min(height);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let data = img.data_mut();
    for x in x0..x1 {
        data[y0 * width + x] = value;
        data[(y1 - 1) * width + x] = value;
    }
    for y in y0..y1 {
        data[y * width + x0] = value;
        data[y * width + (x1 - 1)] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::{draw_rect, OVERLAY_INTENSITY};
    use crate::image::OwnedImage;

    #[test]
    fn rect_outline_touches_only_the_border() {
        let mut img = OwnedImage::new(vec![0u8; 36], 6, 6).unwrap();
        draw_rect(&mut img, (1, 1), (5, 4), OVERLAY_INTENSITY);

        let view = img.view();
        assert_eq!(*view.get(1, 1).unwrap(), OVERLAY_INTENSITY);
        assert_eq!(*view.get(4, 3).unwrap(), OVERLAY_INTENSITY);
        assert_eq!(*view.get(2, 2).unwrap(), 0);
        assert_eq!(*view.get(0, 0).unwrap(), 0);
        assert_eq!(*view.get(5, 4).unwrap(), 0);
    }

    #[test]
    fn rect_is_clipped_to_image_bounds() {
        let mut img = OwnedImage::new(vec![0u8; 16], 4, 4).unwrap();
        draw_rect(&mut img, (2, 2), (9, 9), 200);
        assert_eq!(*img.view().get(3, 3).unwrap(), 200);
    }

    #[test]
    fn empty_rect_draws_nothing() {
        let mut img = OwnedImage::new(vec![0u8; 16], 4, 4).unwrap();
        draw_rect(&mut img, (3, 3), (3, 3), 200);
        assert!(img.data().iter().all(|&v| v == 0));
    }
}
