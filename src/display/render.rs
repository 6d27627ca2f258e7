use crate::model::{LoadedImage, PlaneCount, Result, resample_area};

/// Presentation settings for panel rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Used whenever a panel reports a zero-sized area (not yet laid out).
    pub fallback_width: u32,
    pub fallback_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fallback_width: 400,
            fallback_height: 300,
        }
    }
}

/// A packed RGB bitmap ready to hand to the GUI toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: usize,
    pub height: usize,
    pub rgb: Vec<u8>,
}

impl Bitmap {
    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }
}

/// Largest size with the image's aspect ratio that fits the target box.
pub fn fit_within(
    image_width: u32,
    image_height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32) {
    let aspect = f64::from(image_width) / f64::from(image_height.max(1));
    let (width, height) = if f64::from(target_width) / aspect <= f64::from(target_height) {
        (
            f64::from(target_width),
            (f64::from(target_width) / aspect).round(),
        )
    } else {
        (
            (f64::from(target_height) * aspect).round(),
            f64::from(target_height),
        )
    };
    ((width as u32).max(1), (height as u32).max(1))
}

pub fn render(image: &LoadedImage, target_width: u32, target_height: u32) -> Result<Bitmap> {
    render_with(&DisplayConfig::default(), image, target_width, target_height)
}

/// Scales `image` into the target box for on-screen presentation.
///
/// Pure function of its inputs: the stored image is only read, and single
/// plane images are expanded to RGB so every panel uploads the same layout.
pub fn render_with(
    config: &DisplayConfig,
    image: &LoadedImage,
    target_width: u32,
    target_height: u32,
) -> Result<Bitmap> {
    let (target_width, target_height) = if target_width == 0 || target_height == 0 {
        (config.fallback_width, config.fallback_height)
    } else {
        (target_width, target_height)
    };
    let (width, height) = fit_within(image.width(), image.height(), target_width, target_height);
    let scaled = resample_area(
        image.samples(),
        (image.width(), image.height()),
        image.plane_count(),
        (width, height),
    )?;

    let rgb = match image.plane_count() {
        PlaneCount::Triple => scaled,
        PlaneCount::Single => scaled
            .iter()
            .flat_map(|value| [*value, *value, *value])
            .collect(),
    };
    Ok(Bitmap {
        width: width as usize,
        height: height as usize,
        rgb,
    })
}
