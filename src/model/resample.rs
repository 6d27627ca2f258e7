use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};

use super::{CoreError, PlaneCount, Result};

/// Area-averaging resize of interleaved 8-bit samples.
///
/// A box convolution averages every source pixel a destination pixel covers
/// when shrinking and replicates pixels when enlarging. Identical sizes
/// reproduce the input exactly.
pub fn resample_area(
    samples: &[u8],
    source: (u32, u32),
    planes: PlaneCount,
    target: (u32, u32),
) -> Result<Vec<u8>> {
    let (width, height) = target;
    if width == 0 || height == 0 {
        return Err(CoreError::ZeroSized { width, height });
    }
    if source == target {
        return Ok(samples.to_vec());
    }

    let pixel_type = match planes {
        PlaneCount::Single => PixelType::U8,
        PlaneCount::Triple => PixelType::U8x3,
    };
    let source_view = ImageRef::new(source.0, source.1, samples, pixel_type)
        .map_err(|error| CoreError::Resample(error.to_string()))?;
    let mut resized = Image::new(width, height, pixel_type);
    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box));
    Resizer::new()
        .resize(&source_view, &mut resized, &options)
        .map_err(|error| CoreError::Resample(error.to_string()))?;
    Ok(resized.into_vec())
}
