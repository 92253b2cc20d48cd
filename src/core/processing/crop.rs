use image::RgbImage;
use image::imageops;
use tracing::debug;

use crate::types::{CropBox, TARGET_HEIGHT, TARGET_WIDTH};

/// Compute the centered crop that trims the longer axis of a `width`×`height`
/// source down to the target aspect ratio.
///
/// Sources strictly wider than 16:9 lose columns; everything else (including
/// an exact 16:9 source, which yields the identity box) loses rows. All floors
/// are taken in integer arithmetic.
pub fn calculate_crop_box(width: u32, height: u32) -> CropBox {
    let w = u64::from(width);
    let h = u64::from(height);
    let tw = u64::from(TARGET_WIDTH);
    let th = u64::from(TARGET_HEIGHT);

    // w / h > tw / th, without division
    if w * th > h * tw {
        let new_w = ((h * tw) / th).max(1);
        let left = (w - new_w) / 2;
        CropBox {
            left: left as u32,
            top: 0,
            width: new_w as u32,
            height,
        }
    } else {
        let new_h = ((w * th) / tw).max(1);
        let top = (h - new_h) / 2;
        CropBox {
            left: 0,
            top: top as u32,
            width,
            height: new_h as u32,
        }
    }
}

/// Crop `img` to the target aspect ratio. Returns the image untouched when the
/// crop box covers the whole source.
pub fn crop_to_target_aspect(img: RgbImage) -> RgbImage {
    let (width, height) = img.dimensions();
    let crop = calculate_crop_box(width, height);

    debug!("Source size: {}x{}, crop box: {}", width, height, crop);

    if crop.is_identity(width, height) {
        return img;
    }

    imageops::crop_imm(&img, crop.left, crop.top, crop.width, crop.height).to_image()
}
