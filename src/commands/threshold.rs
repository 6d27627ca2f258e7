use crate::model::LoadedImage;
use imageproc::contrast::{ThresholdType, threshold};
use serde_json::Value;

use super::{Arity, OpInputs, OpOutput, OpSchema, Operation, ParamSpec, Result};

#[derive(Debug, Clone, Copy)]
pub struct BinaryThresholdOp;

impl BinaryThresholdOp {
    fn threshold_param() -> ParamSpec {
        ParamSpec::integer(
            "threshold",
            "Intensities above this value become 255; the rest become 0.",
            0,
            255,
            127,
        )
    }
}

impl Operation for BinaryThresholdOp {
    fn name(&self) -> &'static str {
        "threshold.binary"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Binary threshold of the intensity plane at a fixed level.".to_string(),
            arity: Arity::Single,
            params: vec![Self::threshold_param()],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, params: &Value) -> Result<OpOutput> {
        let level = Self::threshold_param().read(params) as u8;
        let gray = inputs.primary().to_gray();
        let binary = threshold(&gray, level, ThresholdType::Binary);
        Ok(OpOutput::Image(LoadedImage::from_gray(binary)?))
    }
}
