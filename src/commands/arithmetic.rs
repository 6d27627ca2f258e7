use serde_json::Value;

use super::util::{map_samples, zip_samples};
use super::{Arity, OpInputs, OpOutput, OpSchema, Operation, OpsError, ParamSpec, Result};

fn delta_param() -> ParamSpec {
    ParamSpec::integer(
        "delta",
        "Amount added to or subtracted from every sample.",
        0,
        255,
        50,
    )
}

#[derive(Debug, Clone, Copy)]
pub struct BrightenOp;

impl Operation for BrightenOp {
    fn name(&self) -> &'static str {
        "arith.brighten"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Saturating brightness increase.".to_string(),
            arity: Arity::Single,
            params: vec![delta_param()],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, params: &Value) -> Result<OpOutput> {
        let delta = delta_param().read(params) as u8;
        let output = map_samples(inputs.primary(), |sample| sample.saturating_add(delta))?;
        Ok(OpOutput::Image(output))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DarkenOp;

impl Operation for DarkenOp {
    fn name(&self) -> &'static str {
        "arith.darken"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Saturating brightness decrease.".to_string(),
            arity: Arity::Single,
            params: vec![delta_param()],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, params: &Value) -> Result<OpOutput> {
        let delta = delta_param().read(params) as u8;
        let output = map_samples(inputs.primary(), |sample| sample.saturating_sub(delta))?;
        Ok(OpOutput::Image(output))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AddImagesOp;

impl Operation for AddImagesOp {
    fn name(&self) -> &'static str {
        "arith.add"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Saturating per-sample sum of two images.".to_string(),
            arity: Arity::Pair,
            params: vec![],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, _params: &Value) -> Result<OpOutput> {
        let OpInputs::Pair(left, right) = inputs else {
            return Err(OpsError::ArityMismatch {
                op: self.name(),
                expected: 2,
            });
        };
        Ok(OpOutput::Image(zip_samples(left, right, u8::saturating_add)?))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SubtractImagesOp;

impl Operation for SubtractImagesOp {
    fn name(&self) -> &'static str {
        "arith.subtract"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Saturating per-sample difference of two images.".to_string(),
            arity: Arity::Pair,
            params: vec![],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, _params: &Value) -> Result<OpOutput> {
        let OpInputs::Pair(left, right) = inputs else {
            return Err(OpsError::ArityMismatch {
                op: self.name(),
                expected: 2,
            });
        };
        Ok(OpOutput::Image(zip_samples(left, right, u8::saturating_sub)?))
    }
}
