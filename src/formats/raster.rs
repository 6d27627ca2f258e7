use std::path::Path;

use crate::model::LoadedImage;
use image::{DynamicImage, ImageReader};

use super::tiff::read_tiff;
use super::util::extension;
use super::{IoError, Result};

/// Tries the extension-driven decoder first, then sniffs the content.
///
/// TIFF files the primary decoder rejects (float or unusual sample layouts)
/// go through the dedicated TIFF reader instead of content sniffing.
pub(crate) fn decode_with_fallback(path: &Path) -> Result<DynamicImage> {
    let primary_error = match image::open(path) {
        Ok(image) => return Ok(image),
        Err(error) => error,
    };
    log::debug!(
        "primary decoder rejected {}: {primary_error}; trying fallback",
        path.display()
    );

    if matches!(extension(path).as_deref(), Ok("tif" | "tiff")) {
        return read_tiff(path);
    }

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    if reader.format().is_none() {
        return Err(IoError::Image(primary_error));
    }
    Ok(reader.decode()?)
}

/// Encodes with a plane layout the destination encoder accepts.
pub(crate) fn encode_for_extension(
    path: &Path,
    extension: &str,
    image: &LoadedImage,
) -> Result<()> {
    let dynamic = match extension {
        "gif" => DynamicImage::ImageRgba8(image.to_dynamic().to_rgba8()),
        _ => image.to_dynamic(),
    };
    dynamic.save(path)?;
    Ok(())
}
