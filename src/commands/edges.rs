use crate::model::LoadedImage;
use imageproc::edges::canny;
use serde_json::Value;

use super::{Arity, OpInputs, OpOutput, OpSchema, Operation, ParamSpec, Result};

#[derive(Debug, Clone, Copy)]
pub struct CannyOp;

impl CannyOp {
    fn low_param() -> ParamSpec {
        ParamSpec::integer(
            "low",
            "Lower hysteresis threshold; the upper threshold is twice this value.",
            0,
            255,
            100,
        )
    }
}

impl Operation for CannyOp {
    fn name(&self) -> &'static str {
        "edges.canny"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Canny edge map of the intensity plane.".to_string(),
            arity: Arity::Single,
            params: vec![Self::low_param()],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, params: &Value) -> Result<OpOutput> {
        let low = Self::low_param().read(params) as f32;
        let gray = inputs.primary().to_gray();
        let edges = canny(&gray, low, low * 2.0);
        Ok(OpOutput::Image(LoadedImage::from_gray(edges)?))
    }
}
