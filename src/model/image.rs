use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageBuffer, RgbImage, imageops};

use super::{CoreError, ImageShape, PlaneCount, Result, resample_area};

/// 8-bit pixel storage with either one intensity plane or three color planes.
#[derive(Debug, Clone, PartialEq)]
pub enum Planes {
    Gray(GrayImage),
    Rgb(RgbImage),
}

impl Planes {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Gray(buffer) => buffer.dimensions(),
            Self::Rgb(buffer) => buffer.dimensions(),
        }
    }

    pub fn plane_count(&self) -> PlaneCount {
        match self {
            Self::Gray(_) => PlaneCount::Single,
            Self::Rgb(_) => PlaneCount::Triple,
        }
    }

    pub fn samples(&self) -> &[u8] {
        match self {
            Self::Gray(buffer) => buffer.as_raw(),
            Self::Rgb(buffer) => buffer.as_raw(),
        }
    }
}

/// A decoded raster owned by the image store.
///
/// The pixel buffer is never mutated after construction; transforms build a
/// new `LoadedImage` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    planes: Planes,
    source: Option<PathBuf>,
}

impl LoadedImage {
    pub fn new(planes: Planes) -> Result<Self> {
        let (width, height) = planes.dimensions();
        if width == 0 || height == 0 {
            return Err(CoreError::ZeroSized { width, height });
        }
        Ok(Self {
            planes,
            source: None,
        })
    }

    pub fn from_gray(buffer: GrayImage) -> Result<Self> {
        Self::new(Planes::Gray(buffer))
    }

    pub fn from_rgb(buffer: RgbImage) -> Result<Self> {
        Self::new(Planes::Rgb(buffer))
    }

    pub fn from_raw(
        width: u32,
        height: u32,
        planes: PlaneCount,
        samples: Vec<u8>,
    ) -> Result<Self> {
        let shape = ImageShape {
            width,
            height,
            planes,
        };
        let actual = samples.len();
        let mismatch = || CoreError::BufferLength {
            actual,
            expected_shape: shape.to_string(),
        };
        if actual != shape.sample_count() {
            return Err(mismatch());
        }
        let planes = match planes {
            PlaneCount::Single => {
                Planes::Gray(ImageBuffer::from_raw(width, height, samples).ok_or_else(mismatch)?)
            }
            PlaneCount::Triple => {
                Planes::Rgb(ImageBuffer::from_raw(width, height, samples).ok_or_else(mismatch)?)
            }
        };
        Self::new(planes)
    }

    /// Normalizes any decoded color mode to one or three 8-bit planes.
    ///
    /// Intensity-only modes (with or without alpha, any depth) become a single
    /// plane; everything else, including palette and alpha modes, becomes RGB.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self> {
        match image {
            DynamicImage::ImageLuma8(buffer) => Self::from_gray(buffer),
            DynamicImage::ImageRgb8(buffer) => Self::from_rgb(buffer),
            other @ (DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLumaA16(_)) => Self::from_gray(other.to_luma8()),
            other => Self::from_rgb(other.to_rgb8()),
        }
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn planes(&self) -> &Planes {
        &self.planes
    }

    pub fn width(&self) -> u32 {
        self.planes.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.planes.dimensions().1
    }

    pub fn plane_count(&self) -> PlaneCount {
        self.planes.plane_count()
    }

    pub fn shape(&self) -> ImageShape {
        ImageShape {
            width: self.width(),
            height: self.height(),
            planes: self.plane_count(),
        }
    }

    pub fn samples(&self) -> &[u8] {
        self.planes.samples()
    }

    pub fn to_gray(&self) -> GrayImage {
        match &self.planes {
            Planes::Gray(buffer) => buffer.clone(),
            Planes::Rgb(buffer) => imageops::grayscale(buffer),
        }
    }

    pub fn to_rgb(&self) -> RgbImage {
        match &self.planes {
            Planes::Gray(buffer) => DynamicImage::ImageLuma8(buffer.clone()).to_rgb8(),
            Planes::Rgb(buffer) => buffer.clone(),
        }
    }

    /// Converts between one and three planes, keeping geometry and source.
    pub fn with_plane_count(&self, planes: PlaneCount) -> Self {
        let converted = match planes {
            PlaneCount::Single => Planes::Gray(self.to_gray()),
            PlaneCount::Triple => Planes::Rgb(self.to_rgb()),
        };
        Self {
            planes: converted,
            source: self.source.clone(),
        }
    }

    /// Area-averaging resize; returns a copy when the size already matches.
    pub fn resized(&self, width: u32, height: u32) -> Result<Self> {
        if (width, height) == (self.width(), self.height()) {
            return Ok(self.clone());
        }
        let samples = resample_area(
            self.samples(),
            (self.width(), self.height()),
            self.plane_count(),
            (width, height),
        )?;
        let mut resized = Self::from_raw(width, height, self.plane_count(), samples)?;
        resized.source = self.source.clone();
        Ok(resized)
    }

    pub fn to_dynamic(&self) -> DynamicImage {
        match &self.planes {
            Planes::Gray(buffer) => DynamicImage::ImageLuma8(buffer.clone()),
            Planes::Rgb(buffer) => DynamicImage::ImageRgb8(buffer.clone()),
        }
    }
}
