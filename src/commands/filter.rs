use crate::model::{LoadedImage, Planes};
use imageproc::filter::{filter3x3, separable_filter_equal};
use serde_json::Value;

use super::util::sigma_for_kernel;
use super::{Arity, OpInputs, OpOutput, OpSchema, Operation, ParamSpec, Result};

const SHARPEN_KERNEL: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

#[derive(Debug, Clone, Copy)]
pub struct GaussianBlurOp;

impl GaussianBlurOp {
    fn size_param() -> ParamSpec {
        ParamSpec::odd_integer(
            "size",
            "Side length of the Gaussian kernel; sigma is derived from it.",
            1,
            99,
            5,
        )
    }
}

impl Operation for GaussianBlurOp {
    fn name(&self) -> &'static str {
        "filter.gaussian"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Gaussian smoothing of every plane.".to_string(),
            arity: Arity::Single,
            params: vec![Self::size_param()],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, params: &Value) -> Result<OpOutput> {
        let kernel = gaussian_taps(Self::size_param().read(params));
        let output = match inputs.primary().planes() {
            Planes::Gray(buffer) => LoadedImage::from_gray(separable_filter_equal(buffer, &kernel))?,
            Planes::Rgb(buffer) => LoadedImage::from_rgb(separable_filter_equal(buffer, &kernel))?,
        };
        Ok(OpOutput::Image(output))
    }
}

/// Normalized 1-D Gaussian with exactly `size` taps.
pub(crate) fn gaussian_taps(size: i64) -> Vec<f32> {
    let sigma = sigma_for_kernel(size);
    let radius = (size / 2) as f32;
    let weights = (0..size.max(1))
        .map(|index| {
            let offset = index as f32 - radius;
            (-offset * offset / (2.0 * sigma * sigma)).exp()
        })
        .collect::<Vec<_>>();
    let total = weights.iter().sum::<f32>();
    weights.into_iter().map(|weight| weight / total).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct SharpenOp;

impl Operation for SharpenOp {
    fn name(&self) -> &'static str {
        "filter.sharpen"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "3x3 Laplacian sharpening convolution.".to_string(),
            arity: Arity::Single,
            params: vec![],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, _params: &Value) -> Result<OpOutput> {
        let output = match inputs.primary().planes() {
            Planes::Gray(buffer) => {
                LoadedImage::from_gray(filter3x3::<_, f32, u8>(buffer, &SHARPEN_KERNEL))?
            }
            Planes::Rgb(buffer) => {
                LoadedImage::from_rgb(filter3x3::<_, f32, u8>(buffer, &SHARPEN_KERNEL))?
            }
        };
        Ok(OpOutput::Image(output))
    }
}
