use std::fs::File;
use std::path::Path;

use image::{DynamicImage, ImageBuffer};
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};

use super::util::quantize_floats;
use super::{IoError, Result};

/// Reads the first page of a TIFF file into an 8-bit image.
pub(crate) fn read_tiff(path: &Path) -> Result<DynamicImage> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(file)?;
    let (width, height) = decoder.dimensions()?;
    let samples_per_pixel = match decoder.colortype()? {
        ColorType::Gray(_) => 1,
        ColorType::RGB(_) => 3,
        ColorType::RGBA(_) => 4,
        other => {
            return Err(IoError::UnsupportedLayout(format!(
                "unsupported TIFF color type: {other:?}"
            )));
        }
    };

    let samples = match decoder.read_image()? {
        DecodingResult::U8(buffer) => buffer,
        DecodingResult::U16(buffer) => buffer
            .into_iter()
            .map(|value| (value >> 8) as u8)
            .collect::<Vec<_>>(),
        DecodingResult::F32(buffer) => quantize_floats(&buffer),
        other => {
            return Err(IoError::UnsupportedLayout(format!(
                "unsupported TIFF sample type: {other:?}"
            )));
        }
    };

    let expected = width as usize * height as usize * samples_per_pixel;
    if samples.len() != expected {
        return Err(IoError::UnsupportedLayout(format!(
            "TIFF page holds {} samples, expected {expected}",
            samples.len()
        )));
    }

    let layout_error = || IoError::UnsupportedLayout("failed to construct TIFF image".into());
    let image = match samples_per_pixel {
        1 => DynamicImage::ImageLuma8(
            ImageBuffer::from_raw(width, height, samples).ok_or_else(layout_error)?,
        ),
        3 => DynamicImage::ImageRgb8(
            ImageBuffer::from_raw(width, height, samples).ok_or_else(layout_error)?,
        ),
        _ => DynamicImage::ImageRgba8(
            ImageBuffer::from_raw(width, height, samples).ok_or_else(layout_error)?,
        ),
    };
    Ok(image)
}
