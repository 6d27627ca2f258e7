mod error;
mod image;
mod resample;
mod shape;


pub use error::{CoreError, Result};
pub use self::image::{LoadedImage, Planes};
pub use resample::resample_area;
pub use shape::{ImageShape, PlaneCount};
