use std::path::Path;

use crate::model::LoadedImage;

use super::raster::{decode_with_fallback, encode_for_extension};
use super::util::extension;
use super::{IoError, Result};

const SUPPORTED: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

/// Decodes `path` and normalizes it to one or three 8-bit planes.
pub fn read_image(path: impl AsRef<Path>) -> Result<LoadedImage> {
    let path = path.as_ref();
    let decoded = decode_with_fallback(path)?;
    let image = LoadedImage::from_dynamic(decoded)?.with_source(path);
    log::debug!(
        "decoded {} as {}",
        path.display(),
        image.shape()
    );
    Ok(image)
}

pub fn write_image(path: impl AsRef<Path>, image: &LoadedImage) -> Result<()> {
    let path = path.as_ref();
    let extension = extension(path)?;
    if !SUPPORTED.contains(&extension.as_str()) {
        return Err(IoError::UnsupportedFormat(extension));
    }
    encode_for_extension(path, &extension, image)
}

pub fn supported_formats() -> &'static [&'static str] {
    SUPPORTED
}

pub fn is_supported_path(path: &Path) -> bool {
    extension(path)
        .map(|extension| SUPPORTED.contains(&extension.as_str()))
        .unwrap_or(false)
}
