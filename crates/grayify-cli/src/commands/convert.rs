//! Grayscale conversion command.
//!
//! The whole pipeline for one request: validate the input (type and size),
//! decode, run the grayscale pass with a progress readout, then encode and
//! write the original/grayscale artifact pair. Validation failures abort
//! before any pixel work; nothing is written unless the transform and both
//! encodes succeeded.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use grayify_io::{artifact, Format};
use grayify_ops::to_grayscale;
use std::io::Write;
use tracing::{debug, info, trace};

/// Runs the convert command.
pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), output_dir = %args.output_dir.display(), "convert::run");

    if args.quality == 0 || args.quality > 100 {
        anyhow::bail!("Quality must be between 1 and 100, got {}", args.quality);
    }

    let input_format = Format::detect(&args.input).unwrap_or(Format::Unknown);
    let output_format = match args.format.as_deref() {
        Some(s) => parse_format(s)?,
        None => input_format,
    };

    info!(
        input = %args.input.display(),
        input_format = ?input_format,
        output_format = ?output_format,
        quality = args.quality,
        "Converting image"
    );

    if verbose {
        println!(
            "Converting {} ({:?}) -> {} ({:?})",
            args.input.display(),
            input_format,
            args.output_dir.display(),
            output_format
        );
    }

    // Eager validation (type, 10 MB limit) happens inside load
    let original = super::load_image(&args.input)?;
    let (width, height) = original.dimensions();
    debug!(width, height, "Decoded image");

    let grayscale = to_grayscale(&original, |pct| {
        if verbose {
            print!("\rProcessing image... {}%", pct.round() as u32);
            let _ = std::io::stdout().flush();
        }
    })
    .context("Grayscale conversion failed")?;

    if verbose {
        println!();
    }

    let pair = artifact::write_artifact_pair(
        &args.output_dir,
        output_format,
        &original,
        &grayscale,
        args.quality,
    )
    .with_context(|| {
        format!(
            "Failed to write artifacts to {}",
            args.output_dir.display()
        )
    })?;

    if verbose {
        println!("  {}", pair.original.display());
        println!("  {}", pair.grayscale.display());
        println!("Done.");
    }

    Ok(())
}

/// Parses an output format string into a Format.
fn parse_format(s: &str) -> Result<Format> {
    match s.to_lowercase().as_str() {
        "png" => Ok(Format::Png),
        "jpg" | "jpeg" => Ok(Format::Jpeg),
        _ => anyhow::bail!("Unknown output format '{}'. Options: png, jpg", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("png").unwrap(), Format::Png);
        assert_eq!(parse_format("JPG").unwrap(), Format::Jpeg);
        assert_eq!(parse_format("jpeg").unwrap(), Format::Jpeg);
        assert!(parse_format("webp").is_err());
    }

    #[test]
    fn test_end_to_end_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("red.png");
        let red = grayify_core::PixelBuffer::filled(10, 10, [255, 0, 0, 255]);
        grayify_io::save(&input, &red).unwrap();

        let args = ConvertArgs {
            input,
            output_dir: dir.path().to_path_buf(),
            format: None,
            quality: 90,
        };
        run(args, false).unwrap();

        let out = grayify_io::load(dir.path().join("grayify_grayscale.png")).unwrap();
        assert_eq!(out.pixel(0, 0), [76, 76, 76, 255]);
        assert!(dir.path().join("grayify_original.png").exists());
    }

    #[test]
    fn test_rejects_bad_quality() {
        let args = ConvertArgs {
            input: "x.png".into(),
            output_dir: ".".into(),
            format: None,
            quality: 0,
        };
        assert!(run(args, false).is_err());
    }
}
