use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode the image at `path`. The file handle lives only for this call.
///
/// The container is sniffed from content, so a PNG saved with a `.jpg`
/// extension still decodes.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)
        .map_err(|e| Error::decode(path, e))?
        .with_guessed_format()
        .map_err(|e| Error::decode(path, e))?
        .decode()
        .map_err(|e| Error::decode(path, e))?;

    debug!(
        "Loaded {:?}: {}x{} {:?}",
        path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}
