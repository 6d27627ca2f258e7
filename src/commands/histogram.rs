use crate::model::{LoadedImage, Planes};
use imageproc::contrast::equalize_histogram;
use imageproc::stats::histogram;
use serde_json::Value;

use super::{Arity, Histogram, OpInputs, OpOutput, OpSchema, Operation, Result};

#[derive(Debug, Clone, Copy)]
pub struct EqualizeOp;

impl Operation for EqualizeOp {
    fn name(&self) -> &'static str {
        "histogram.equalize"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Histogram equalization of the intensity plane.".to_string(),
            arity: Arity::Single,
            params: vec![],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, _params: &Value) -> Result<OpOutput> {
        let gray = inputs.primary().to_gray();
        let equalized = equalize_histogram(&gray);
        Ok(OpOutput::Image(LoadedImage::from_gray(equalized)?))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HistogramOp;

impl Operation for HistogramOp {
    fn name(&self) -> &'static str {
        "histogram.compute"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "256-bin intensity counts for every plane.".to_string(),
            arity: Arity::Single,
            params: vec![],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, _params: &Value) -> Result<OpOutput> {
        Ok(OpOutput::Histogram(compute_histogram(inputs.primary())))
    }
}

pub fn compute_histogram(image: &LoadedImage) -> Histogram {
    let counts = match image.planes() {
        Planes::Gray(buffer) => histogram(buffer),
        Planes::Rgb(buffer) => histogram(buffer),
    };
    Histogram {
        planes: counts.channels.iter().map(|bins| bins.to_vec()).collect(),
    }
}
