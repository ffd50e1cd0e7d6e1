//! Isotropic width-driven resize for grayscale templates.
//!
//! The target height is derived from the target width by the source aspect
//! ratio with integer truncation, matching the deployed node's resize
//! convention. Sampling is bilinear with clamped taps.

use crate::image::{ImageView, OwnedImage};
use crate::util::{GestMatchError, GestMatchResult};

/// Resizes a grayscale view to `target_width`, scaling the height
/// proportionally (`height * target_width / width`, truncated).
///
/// Each destination pixel center is mapped into source coordinates with the
/// half-pixel offset convention, sampled bilinearly from clamped neighbor
/// taps, rounded to nearest, and clamped to `[0, 255]`.
pub fn resize_u8_to_width(src: ImageView<'_, u8>, target_width: usize) -> GestMatchResult<OwnedImage> {
    let src_width = src.width();
    let src_height = src.height();
    let target_height = src_height
        .checked_mul(target_width)
        .map(|v| v / src_width)
        .ok_or(GestMatchError::InvalidDimensions {
            width: target_width,
            height: 0,
        })?;
    if target_width == 0 || target_height == 0 {
        return Err(GestMatchError::InvalidDimensions {
            width: target_width,
            height: target_height,
        });
    }

    let scale_x = src_width as f32 / target_width as f32;
    let scale_y = src_height as f32 / target_height as f32;
    let max_x = src_width as f32 - 1.0;
    let max_y = src_height as f32 - 1.0;

    let mut out = vec![0u8; target_width * target_height];
    for y in 0..target_height {
        let src_y = ((y as f32 + 0.5) * scale_y - 0.5).clamp(0.0, max_y);
        let y0 = src_y.floor() as usize;
        let y1 = (y0 + 1).min(src_height - 1);
        let fy = src_y - y0 as f32;
        let row0 = src.row(y0).expect("row in bounds");
        let row1 = src.row(y1).expect("row in bounds");

        for x in 0..target_width {
            let src_x = ((x as f32 + 0.5) * scale_x - 0.5).clamp(0.0, max_x);
            let x0 = src_x.floor() as usize;
            let x1 = (x0 + 1).min(src_width - 1);
            let fx = src_x - x0 as f32;

            let a = row0[x0] as f32;
            let b = row0[x1] as f32;
            let c = row1[x0] as f32;
            let d = row1[x1] as f32;

            let top = a + (b - a) * fx;
            let bottom = c + (d - c) * fx;
            let value = top + (bottom - top) * fy;

            out[y * target_width + x] = value.round().clamp(0.0, 255.0) as u8;
        }
    }

    OwnedImage::new(out, target_width, target_height)
}

#[cfg(test)]
mod tests {
    use super::resize_u8_to_width;
    use crate::image::ImageView;

    #[test]
    fn identity_width_keeps_pixels() {
        let data: Vec<u8> = (0u8..12).collect();
        let view = ImageView::from_slice(&data, 4, 3).unwrap();
        let out = resize_u8_to_width(view, 4).unwrap();
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 3);
        assert_eq!(out.data(), data.as_slice());
    }

    #[test]
    fn target_height_truncates() {
        let data = vec![7u8; 5 * 3];
        let view = ImageView::from_slice(&data, 5, 3).unwrap();
        // 3 * 7 / 5 = 4 (truncated from 4.2)
        let out = resize_u8_to_width(view, 7).unwrap();
        assert_eq!(out.width(), 7);
        assert_eq!(out.height(), 4);
        assert!(out.data().iter().all(|&v| v == 7));
    }

    #[test]
    fn degenerate_target_is_rejected() {
        let data = vec![0u8; 10];
        let view = ImageView::from_slice(&data, 10, 1).unwrap();
        // 1 * 4 / 10 truncates to a zero height
        assert!(resize_u8_to_width(view, 4).is_err());
    }
}
