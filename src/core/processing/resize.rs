use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{TARGET_HEIGHT, TARGET_WIDTH};

/// Resize an interleaved RGB8 buffer with a Lanczos3 convolution.
pub fn resize_rgb_image(
    data: Vec<u8>,
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data, PixelType::U8x3)
        .map_err(Error::processing)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::processing)?;

    Ok(dst_image.into_vec())
}

/// Scale `img` to exactly `TARGET_WIDTH`×`TARGET_HEIGHT`, upscaling when the
/// source is smaller.
pub fn resize_to_target(img: RgbImage) -> Result<RgbImage> {
    let (cols, rows) = img.dimensions();
    debug!(
        "Original size: {}x{}, New size: {}x{}",
        cols, rows, TARGET_WIDTH, TARGET_HEIGHT
    );

    let resized = resize_rgb_image(img.into_raw(), cols, rows, TARGET_WIDTH, TARGET_HEIGHT)?;

    RgbImage::from_raw(TARGET_WIDTH, TARGET_HEIGHT, resized)
        .ok_or_else(|| Error::Processing("Resized buffer has unexpected length".to_string()))
}
