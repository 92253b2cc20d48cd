use image::{DynamicImage, RgbImage};
use tracing::debug;

/// Force any decoded pixel mode into 8-bit RGB.
///
/// Alpha is dropped without compositing: a fully transparent pixel keeps its
/// stored color channels. Wider channel types are scaled down to 8 bits.
pub fn normalize_pixel_format(img: DynamicImage) -> RgbImage {
    if let DynamicImage::ImageRgb8(rgb) = img {
        return rgb;
    }
    debug!("Converting {:?} to Rgb8", img.color());
    img.into_rgb8()
}
