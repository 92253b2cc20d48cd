use std::fs;
use std::path::Path;

use tracing::{info, warn};

use aspectnorm::{NormalizeParams, process_inputs};

use super::args::CliArgs;
use super::errors::AppError;

fn load_params(path: &Path) -> Result<NormalizeParams, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ParamsRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AppError::ParamsParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge the optional params file with explicit flags; flags win.
pub fn resolve_params(args: &CliArgs) -> Result<NormalizeParams, AppError> {
    let mut params = match &args.params {
        Some(path) => load_params(path)?,
        None => NormalizeParams::default(),
    };

    if let Some(width) = args.index_width {
        params.index_width = width;
    }
    if args.keep_going {
        params.continue_on_error = true;
    }

    params.validate()?;
    Ok(params)
}

pub fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    let params = resolve_params(&args)?;

    info!("Input: {:?}", args.input);
    info!("Output directory: {:?}", args.output);

    let report = process_inputs(&args.input, &args.output, &params)?;

    if report.errors > 0 {
        for (path, reason) in &report.failures {
            warn!("Failed: {:?}: {}", path, reason);
        }
        return Err(AppError::BatchFailed {
            failed: report.errors,
            total: report.total(),
        });
    }

    Ok(())
}
