//! PNG output of rendered grids

use image::imageops::FilterType;
use image::RgbaImage;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a rendered image could not be written
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save a rendered grid as PNG, creating parent directories as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    log::info!("wrote {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Scale by an integer factor with nearest-neighbour sampling so each cell
/// stays a crisp block.
pub fn scale_image(image: RgbaImage, factor: u8) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(&image, w * factor as u32, h * factor as u32, FilterType::Nearest)
}

/// `-o` if given, otherwise the script path with a `.png` extension.
pub fn output_path(script: &Path, output_arg: Option<&Path>) -> PathBuf {
    match output_arg {
        Some(output) => output.to_path_buf(),
        None => script.with_extension("png"),
    }
}
