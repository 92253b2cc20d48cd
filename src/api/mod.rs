//! High-level, ergonomic library API: normalize a single image to a buffer or a
//! file, and run the whole resolve → normalize → encode sequence over a file or
//! directory. Prefer these entrypoints over the low-level processing modules.
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::{info, warn};

use crate::core::params::NormalizeParams;
use crate::core::processing::pipeline::normalize_image;
use crate::error::Result;
use crate::io::discover::resolve_inputs;
use crate::io::reader::load_image;
use crate::io::writers::webp::write_rgb_webp;
use crate::types::OUTPUT_EXTENSION;

/// Output file name for sequence position `index`, zero-padded to `width`
/// digits. Indices that need more digits widen the name.
pub fn output_file_name(index: usize, width: usize) -> String {
    format!("{index:0width$}.{OUTPUT_EXTENSION}")
}

/// Load, convert, crop and resize one image without touching the disk for output
pub fn normalize_file_to_buffer(input: &Path) -> Result<RgbImage> {
    let img = load_image(input)?;
    normalize_image(img)
}

/// Normalize one image and write it as lossy WebP to `output`
pub fn normalize_file_to_path(input: &Path, output: &Path) -> Result<()> {
    let normalized = normalize_file_to_buffer(input)?;
    write_rgb_webp(output, &normalized)
}

/// Batch processing report
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub errors: usize,
    /// Written files, in processing order
    pub outputs: Vec<PathBuf>,
    /// Inputs that failed while `continue_on_error` was set, with the reason
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed + self.errors
    }
}

/// Resolve `input`, create `output_dir`, and normalize every image in order.
///
/// Inputs are validated before the output directory is created. Without
/// `continue_on_error` the first failure is returned; with it, failures are
/// recorded and later files keep their own sequence index.
pub fn process_inputs(
    input: &Path,
    output_dir: &Path,
    params: &NormalizeParams,
) -> Result<BatchReport> {
    params.validate()?;
    let files = resolve_inputs(input)?;

    fs::create_dir_all(output_dir)?;
    info!("Output directory: {:?}", output_dir);

    let mut report = BatchReport::default();

    for (index, path) in files.iter().enumerate() {
        let output_path = output_dir.join(output_file_name(index, params.index_width));
        info!("Processing: {:?} -> {:?}", path, output_path);

        match normalize_file_to_path(path, &output_path) {
            Ok(()) => {
                info!("Saved: {}", output_path.display());
                report.processed += 1;
                report.outputs.push(output_path);
            }
            Err(e) if params.continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
                report.failures.push((path.clone(), e.to_string()));
            }
            Err(e) => return Err(e),
        }
    }

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Errors: {}", report.errors);

    Ok(report)
}
