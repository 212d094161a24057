//! Utility functions for canvas handling.
//!
//! This module provides functions for loading and converting the images the
//! overlay renderer draws on. Persistence and display of the annotated
//! result stay with the caller; `image::RgbImage::save` covers the common
//! case.

use crate::core::OverlayError;
use image::{DynamicImage, ImageBuffer, RgbImage};

/// Converts a DynamicImage to an RgbImage.
///
/// # Arguments
///
/// * `img` - The DynamicImage to convert
///
/// # Returns
///
/// * `RgbImage` - The converted RGB image
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Loads an image from a file path and converts it to an RgbImage canvas.
///
/// # Arguments
///
/// * `path` - A reference to the path of the image file to load
///
/// # Returns
///
/// * `Ok(RgbImage)` - The loaded and converted RGB image
/// * `Err(OverlayError)` - An error if the image could not be loaded
///
/// # Errors
///
/// This function will return an `OverlayError::ImageLoad` error if the image
/// cannot be loaded from the specified path.
pub fn load_image(path: &std::path::Path) -> Result<RgbImage, OverlayError> {
    let img = image::open(path).map_err(OverlayError::ImageLoad)?;
    Ok(dynamic_to_rgb(img))
}

/// Creates an RgbImage canvas from raw pixel data.
///
/// The data must be in RGB format (3 bytes per pixel) and its length must
/// match the specified width and height.
///
/// # Arguments
///
/// * `width` - The width of the image in pixels
/// * `height` - The height of the image in pixels
/// * `data` - A vector containing the raw pixel data (RGB format)
///
/// # Returns
///
/// * `Some(RgbImage)` - The created RGB image if the data is valid
/// * `None` - If the data length does not match the dimensions
pub fn rgb_from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<RgbImage> {
    ImageBuffer::from_raw(width, height, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_raw_valid() {
        let data = vec![0u8; 4 * 2 * 3];
        let img = rgb_from_raw(4, 2, data).unwrap();
        assert_eq!(img.dimensions(), (4, 2));
    }

    #[test]
    fn test_rgb_from_raw_wrong_length() {
        let data = vec![0u8; 5];
        assert!(rgb_from_raw(4, 2, data).is_none());
    }
}
