use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "aspectnorm",
    version,
    about = "Crop images to 16:9, resize to 1280x720 and save them as WebP"
)]
pub struct CliArgs {
    /// Input image or directory of images (jpg, jpeg, png, webp)
    #[arg(short, long, default_value = "in")]
    pub input: PathBuf,

    /// Output directory; created if missing
    #[arg(short, long, default_value = "out")]
    pub output: PathBuf,

    /// JSON file with run parameters; explicit flags take precedence
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Minimum digits in output file names (default 2: 00.webp, 01.webp, ...)
    #[arg(long)]
    pub index_width: Option<usize>,

    /// Keep processing remaining files after a failure and report them at the end
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
