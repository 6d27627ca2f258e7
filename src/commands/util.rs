use crate::model::{LoadedImage, Planes};
use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};
use rayon::prelude::*;

use super::{OpsError, Result};

/// Applies `f` to every sample of every plane.
pub(crate) fn map_samples<F>(image: &LoadedImage, f: F) -> Result<LoadedImage>
where
    F: Fn(u8) -> u8 + Sync,
{
    let mut samples = image.samples().to_vec();
    samples.par_iter_mut().for_each(|sample| *sample = f(*sample));
    Ok(LoadedImage::from_raw(
        image.width(),
        image.height(),
        image.plane_count(),
        samples,
    )?)
}

/// Combines two shape-compatible images sample by sample.
pub(crate) fn zip_samples<F>(left: &LoadedImage, right: &LoadedImage, f: F) -> Result<LoadedImage>
where
    F: Fn(u8, u8) -> u8 + Sync,
{
    if left.shape() != right.shape() {
        return Err(OpsError::ShapeMismatch {
            left: left.shape(),
            right: right.shape(),
        });
    }
    let samples = left
        .samples()
        .par_iter()
        .zip(right.samples().par_iter())
        .map(|(a, b)| f(*a, *b))
        .collect::<Vec<_>>();
    Ok(LoadedImage::from_raw(
        left.width(),
        left.height(),
        left.plane_count(),
        samples,
    )?)
}

/// Runs a single-plane filter independently on each plane.
pub(crate) fn map_planes<F>(image: &LoadedImage, f: F) -> Result<LoadedImage>
where
    F: Fn(&GrayImage) -> GrayImage,
{
    match image.planes() {
        Planes::Gray(buffer) => Ok(LoadedImage::from_gray(f(buffer))?),
        Planes::Rgb(buffer) => {
            let [red, green, blue] = split_planes(buffer).map(|plane| f(&plane));
            Ok(LoadedImage::from_rgb(merge_planes(&red, &green, &blue))?)
        }
    }
}

pub(crate) fn split_planes(buffer: &RgbImage) -> [GrayImage; 3] {
    let (width, height) = buffer.dimensions();
    [0, 1, 2].map(|channel| {
        ImageBuffer::from_fn(width, height, |x, y| {
            Luma([buffer.get_pixel(x, y).0[channel]])
        })
    })
}

pub(crate) fn merge_planes(red: &GrayImage, green: &GrayImage, blue: &GrayImage) -> RgbImage {
    let (width, height) = red.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([
            red.get_pixel(x, y).0[0],
            green.get_pixel(x, y).0[0],
            blue.get_pixel(x, y).0[0],
        ])
    })
}

/// Gaussian sigma matching a square kernel of side `size`.
pub(crate) fn sigma_for_kernel(size: i64) -> f32 {
    0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}
