//! Grayscale image loading and saving via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Errors carry the
//! offending path so startup failures point at the broken gesture folder or
//! frame file.

use crate::image::{ImageView, OwnedImage};
use crate::util::{GestMatchError, GestMatchResult};
use std::path::Path;

/// Creates a borrowed view from a grayscale image buffer.
pub fn view_from_gray_image(img: &image::GrayImage) -> GestMatchResult<ImageView<'_, u8>> {
    ImageView::from_slice(img.as_raw(), img.width() as usize, img.height() as usize)
}

/// Copies a grayscale image buffer into an owned image.
pub fn owned_from_gray_image(img: &image::GrayImage) -> GestMatchResult<OwnedImage> {
    OwnedImage::new(
        img.as_raw().clone(),
        img.width() as usize,
        img.height() as usize,
    )
}

/// Loads an image from disk and converts it to 8-bit grayscale.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> GestMatchResult<OwnedImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|err| GestMatchError::ImageIo {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    owned_from_gray_image(&img.to_luma8())
}

/// Saves an owned grayscale image to disk; the format follows the extension.
pub fn save_gray_image<P: AsRef<Path>>(img: &OwnedImage, path: P) -> GestMatchResult<()> {
    let path = path.as_ref();
    let buf = image::GrayImage::from_raw(
        img.width() as u32,
        img.height() as u32,
        img.data().to_vec(),
    )
    .ok_or(GestMatchError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    buf.save(path).map_err(|err| GestMatchError::ImageIo {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}
