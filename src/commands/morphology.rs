use imageproc::morphology::{Mask, grayscale_dilate, grayscale_erode};
use serde_json::Value;

use super::util::map_planes;
use super::{Arity, OpInputs, OpOutput, OpSchema, Operation, ParamSpec, Result};

fn size_param() -> ParamSpec {
    ParamSpec::odd_integer(
        "size",
        "Side length of the square structuring element.",
        1,
        31,
        3,
    )
}

/// Square structuring element of side `size`; samples outside the image are ignored.
fn square_mask(params: &Value) -> Mask {
    Mask::square((size_param().read(params) / 2) as u8)
}

#[derive(Debug, Clone, Copy)]
pub struct ErodeOp;

impl Operation for ErodeOp {
    fn name(&self) -> &'static str {
        "morphology.erode"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Grayscale erosion (neighborhood minimum) with a square element."
                .to_string(),
            arity: Arity::Single,
            params: vec![size_param()],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, params: &Value) -> Result<OpOutput> {
        let mask = square_mask(params);
        let output = map_planes(inputs.primary(), |plane| grayscale_erode(plane, &mask))?;
        Ok(OpOutput::Image(output))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DilateOp;

impl Operation for DilateOp {
    fn name(&self) -> &'static str {
        "morphology.dilate"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Grayscale dilation (neighborhood maximum) with a square element."
                .to_string(),
            arity: Arity::Single,
            params: vec![size_param()],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, params: &Value) -> Result<OpOutput> {
        let mask = square_mask(params);
        let output = map_planes(inputs.primary(), |plane| grayscale_dilate(plane, &mask))?;
        Ok(OpOutput::Image(output))
    }
}
