use image::{DynamicImage, RgbImage};

use crate::core::processing::crop::crop_to_target_aspect;
use crate::core::processing::pixel::normalize_pixel_format;
use crate::core::processing::resize::resize_to_target;
use crate::error::Result;

/// RGB8 conversion, crop-to-fill and resize, in that order.
pub fn normalize_image(img: DynamicImage) -> Result<RgbImage> {
    let rgb = normalize_pixel_format(img);
    let cropped = crop_to_target_aspect(rgb);
    resize_to_target(cropped)
}
