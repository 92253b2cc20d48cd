#![doc = r#"
aspectnorm — crop-to-fill, resize and WebP-encode batches of images.

Every input image (JPEG, PNG or WebP) is converted to 8-bit RGB, cropped
symmetrically along its longer axis to exactly 16:9, resized to 1280×720 with a
Lanczos3 filter, and written as lossy WebP (quality 85, method 6). Outputs are
named only by their position in the sorted input sequence: `00.webp`,
`01.webp`, ...

Quick start: process a directory
--------------------------------
```rust,no_run
use std::path::Path;
use aspectnorm::{process_inputs, NormalizeParams};

fn main() -> aspectnorm::Result<()> {
    let report = process_inputs(Path::new("in"), Path::new("out"), &NormalizeParams::default())?;
    println!("processed={} errors={}", report.processed, report.errors);
    Ok(())
}
```

Crop geometry without decoding
------------------------------
```rust
use aspectnorm::calculate_crop_box;

let b = calculate_crop_box(2000, 1000);
assert_eq!((b.left, b.top, b.right(), b.bottom()), (111, 0, 1888, 1000));
```

Error handling
--------------
All public functions return `aspectnorm::Result<T>`; match on
`aspectnorm::Error` to tell a missing input apart from a corrupt file.

```rust,no_run
use std::path::Path;
use aspectnorm::{process_inputs, Error, NormalizeParams};

match process_inputs(Path::new("missing/"), Path::new("out"), &NormalizeParams::default()) {
    Ok(_) => {}
    Err(Error::InputNotFound { path }) => eprintln!("no such input: {}", path.display()),
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — crop, pixel-format, resize and pipeline primitives.
- [`io`] — input discovery, decoding and the WebP writer.
- [`types`] — constants and shared types.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::NormalizeParams;
pub use error::{Error, Result};
pub use types::{
    CropBox, DEFAULT_INDEX_WIDTH, InputFormat, TARGET_HEIGHT, TARGET_WIDTH, WEBP_METHOD,
    WEBP_QUALITY,
};

// Processing primitives
pub use crate::core::processing::crop::{calculate_crop_box, crop_to_target_aspect};
pub use crate::core::processing::pipeline::normalize_image;
pub use crate::core::processing::pixel::normalize_pixel_format;
pub use crate::core::processing::resize::resize_to_target;

// I/O
pub use io::{load_image, resolve_inputs};

// High-level API re-exports
pub use api::{
    BatchReport, normalize_file_to_buffer, normalize_file_to_path, output_file_name,
    process_inputs,
};
