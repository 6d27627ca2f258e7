use crate::model::LoadedImage;
use serde_json::Value;

use super::{Arity, OpInputs, OpOutput, OpSchema, Operation, Result};

#[derive(Debug, Clone, Copy)]
pub struct GrayscaleOp;

impl Operation for GrayscaleOp {
    fn name(&self) -> &'static str {
        "color.grayscale"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Luma-weighted conversion to a single intensity plane.".to_string(),
            arity: Arity::Single,
            params: vec![],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, _params: &Value) -> Result<OpOutput> {
        let gray = inputs.primary().to_gray();
        Ok(OpOutput::Image(LoadedImage::from_gray(gray)?))
    }
}
