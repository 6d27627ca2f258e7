use std::path::Path;

use super::{IoError, Result};

/// Lower-cased file extension; paths without one are unsupported.
pub(crate) fn extension(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| IoError::UnsupportedFormat(path.display().to_string()))
}

/// Quantizes float samples to bytes. Data already inside [0, 1] keeps its
/// scale; anything else is stretched by its own range, and flat data maps to 0.
pub(crate) fn quantize_floats(values: &[f32]) -> Vec<u8> {
    let (low, high) = sample_range(values);
    let (offset, span) = if low >= 0.0 && high <= 1.0 {
        (0.0, 1.0)
    } else {
        (low, high - low)
    };
    values
        .iter()
        .map(|value| {
            let unit = if span.abs() < f32::EPSILON {
                0.0
            } else {
                (value - offset) / span
            };
            (unit.clamp(0.0, 1.0) * 255.0).round() as u8
        })
        .collect()
}

fn sample_range(values: &[f32]) -> (f32, f32) {
    values
        .iter()
        .copied()
        .fold(None, |range, value| match range {
            None => Some((value, value)),
            Some((low, high)) => Some((f32::min(low, value), f32::max(high, value))),
        })
        .unwrap_or((0.0, 0.0))
}
