use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use ::webp::{Encoder, WebPConfig};

use crate::error::{Error, Result};
use crate::types::{WEBP_METHOD, WEBP_QUALITY};

fn lossy_config() -> Result<WebPConfig> {
    let mut config = WebPConfig::new()
        .map_err(|_| Error::Processing("libwebp rejected the default config".to_string()))?;
    config.lossless = 0;
    config.quality = WEBP_QUALITY;
    config.method = WEBP_METHOD;
    Ok(config)
}

/// Encode RGB8 pixels as lossy WebP in memory.
pub fn encode_rgb_webp(img: &RgbImage) -> Result<Vec<u8>> {
    let (cols, rows) = img.dimensions();
    let config = lossy_config()?;
    let encoder = Encoder::from_rgb(img.as_raw(), cols, rows);
    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| Error::Processing(format!("WebP encoding failed: {e:?}")))?;
    Ok(memory.to_vec())
}

/// Encode and write `img` to `output`, replacing any existing file.
pub fn write_rgb_webp(output: &Path, img: &RgbImage) -> Result<()> {
    let bytes = encode_rgb_webp(img).map_err(|e| match e {
        Error::Processing(reason) => Error::encode(output, reason),
        other => other,
    })?;

    let file = File::create(output).map_err(|e| Error::encode(output, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::encode(output, e))?;
    Ok(())
}
