//! grayify - local image-to-grayscale converter
//!
//! Decodes an image, computes a luminance-weighted grayscale version, and
//! writes both as a downloadable artifact pair.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "grayify")]
#[command(author, version, about = "Local image-to-grayscale converter")]
#[command(long_about = "
Converts images to grayscale using the ITU-R BT.601 luminance weights
(0.2989 R + 0.5870 G + 0.1140 B). All processing happens locally; the
output is a pair of artifacts next to each other:

  grayify_original.<ext>    untouched copy of the input
  grayify_grayscale.<ext>   the converted image

Examples:
  grayify convert photo.jpg                 # artifacts in the current dir
  grayify convert photo.png -o out/         # artifacts in out/
  grayify convert photo.png -f jpg -q 75    # force JPEG output at quality 75
  grayify info photo.jpg                    # show image info
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (progress and summary lines)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to grayscale
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Input image (PNG or JPEG, max 10 MB)
    input: PathBuf,

    /// Directory for the artifact pair
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Output format: png, jpg (default: same as input)
    #[arg(short, long)]
    format: Option<String>,

    /// Quality (1-100, for JPEG output)
    #[arg(short, long, default_value = "90")]
    quality: u8,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
