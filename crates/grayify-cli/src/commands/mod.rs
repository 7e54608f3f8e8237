//! CLI command implementations

pub mod convert;
pub mod info;

use anyhow::{Context, Result};
use grayify_core::PixelBuffer;
use std::path::Path;

/// Load and validate an image from a path.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    grayify_io::load(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
