use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::InputFormat;

pub fn is_supported(path: &Path) -> bool {
    InputFormat::from_path(path).is_some()
}

/// Resolve `input` into the ordered list of images to process.
///
/// A file must carry a supported extension. A directory contributes its
/// immediate regular files with supported extensions, sorted by name.
pub fn resolve_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    if input.is_file() {
        if !is_supported(input) {
            return Err(Error::UnsupportedFormat {
                path: input.to_path_buf(),
            });
        }
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(input)? {
        let path = entry?.path();
        if path.is_file() && is_supported(&path) {
            files.push(path);
        } else {
            debug!("Skipping: {:?}", path);
        }
    }

    if files.is_empty() {
        return Err(Error::NoSupportedFiles {
            dir: input.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    info!("Found {} image(s) in {:?}", files.len(), input);
    Ok(files)
}
