//! CLI command implementations

pub mod batch;
pub mod correct;
pub mod info;

use anyhow::{Context, Result, bail};
use castor_io::ImageData;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<ImageData> {
    castor_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &ImageData) -> Result<()> {
    castor_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Ensure the image has the separate RGB channels color corrections need.
pub fn ensure_color_image(image: &ImageData, op: &str) -> Result<()> {
    if image.is_color() {
        return Ok(());
    }

    match image.layout() {
        Some(layout) => bail!("{} requires an RGB image, got {}", op, layout),
        None => bail!(
            "{} requires an RGB image, got {} channels",
            op,
            image.channels
        ),
    }
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
