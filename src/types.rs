//! Shared types and constants used across aspectnorm.
//! Includes the fixed output geometry, the encoder settings, the supported
//! input extensions (`InputFormat`) and the `CropBox` produced by the crop step.
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Output width in pixels.
pub const TARGET_WIDTH: u32 = 1280;
/// Output height in pixels.
pub const TARGET_HEIGHT: u32 = 720;

/// Lossy WebP quality on a 0-100 scale.
pub const WEBP_QUALITY: f32 = 85.0;
/// libwebp compression method; 6 is the slowest, highest-effort setting.
pub const WEBP_METHOD: i32 = 6;

/// Extension of every file written by the normalizer.
pub const OUTPUT_EXTENSION: &str = "webp";

/// Default number of digits in output file names (`00.webp`, `01.webp`, ...).
pub const DEFAULT_INDEX_WIDTH: usize = 2;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum InputFormat {
    Jpeg,
    Png,
    Webp,
}

impl InputFormat {
    /// Match a file extension case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(InputFormat::Jpeg),
            "png" => Some(InputFormat::Png),
            "webp" => Some(InputFormat::Webp),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InputFormat::Jpeg => "JPEG",
            InputFormat::Png => "PNG",
            InputFormat::Webp => "WebP",
        };
        write!(f, "{}", s)
    }
}

/// Region kept by the crop step, in source pixel coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropBox {
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    /// True when the box covers the whole `width`×`height` source.
    pub fn is_identity(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.width == width && self.height == height
    }
}

impl std::fmt::Display for CropBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left,
            self.top,
            self.right(),
            self.bottom()
        )
    }
}
