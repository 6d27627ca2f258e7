mod api;
mod error;
mod raster;
mod tiff;
mod util;

#[cfg(test)]
mod tests;

pub use api::{is_supported_path, read_image, supported_formats, write_image};
pub use error::{IoError, Result};
