//! Image information command.
//!
//! Prints dimensions, detected format, and file size without converting.

use crate::InfoArgs;
use anyhow::Result;
use grayify_io::Format;
use tracing::trace;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        trace!(input = %path.display(), "info::run");

        let format = Format::detect(path).unwrap_or(Format::Unknown);
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let image = super::load_image(path)?;
        let (width, height) = image.dimensions();

        println!(
            "{}: {}x{}, {:?}, {}",
            path.display(),
            width,
            height,
            format,
            super::format_size(size)
        );

        if verbose {
            println!("  pixels: {}", image.pixel_count());
            let opaque = image.pixels().all(|px| px[3] == 255);
            println!("  alpha: {}", if opaque { "opaque" } else { "present" });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_runs_on_valid_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        let img = grayify_core::PixelBuffer::filled(5, 5, [1, 2, 3, 255]);
        grayify_io::save(&path, &img).unwrap();

        let args = InfoArgs { input: vec![path] };
        run(args, true).unwrap();
    }

    #[test]
    fn test_info_fails_on_missing_file() {
        let args = InfoArgs {
            input: vec!["/nonexistent/none.png".into()],
        };
        assert!(run(args, false).is_err());
    }
}
