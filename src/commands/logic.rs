use serde_json::Value;

use super::util::{map_samples, zip_samples};
use super::{Arity, OpInputs, OpOutput, OpSchema, Operation, OpsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitwiseKind {
    And,
    Or,
    Xor,
}

/// Per-sample Boolean composition of two images.
#[derive(Debug, Clone, Copy)]
pub struct BitwiseOp {
    kind: BitwiseKind,
}

impl BitwiseOp {
    pub const fn new(kind: BitwiseKind) -> Self {
        Self { kind }
    }

    fn combine(&self) -> fn(u8, u8) -> u8 {
        match self.kind {
            BitwiseKind::And => |a, b| a & b,
            BitwiseKind::Or => |a, b| a | b,
            BitwiseKind::Xor => |a, b| a ^ b,
        }
    }
}

impl Operation for BitwiseOp {
    fn name(&self) -> &'static str {
        match self.kind {
            BitwiseKind::And => "logic.and",
            BitwiseKind::Or => "logic.or",
            BitwiseKind::Xor => "logic.xor",
        }
    }

    fn schema(&self) -> OpSchema {
        let symbol = match self.kind {
            BitwiseKind::And => "AND",
            BitwiseKind::Or => "OR",
            BitwiseKind::Xor => "XOR",
        };
        OpSchema {
            name: self.name().to_string(),
            description: format!("Bitwise {symbol} of two shape-compatible images."),
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
        Ok(OpOutput::Image(zip_samples(left, right, self.combine())?))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BitwiseNotOp;

impl Operation for BitwiseNotOp {
    fn name(&self) -> &'static str {
        "logic.not"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Bitwise complement of every sample.".to_string(),
            arity: Arity::Single,
            params: vec![],
        }
    }

    fn execute(&self, inputs: OpInputs<'_>, _params: &Value) -> Result<OpOutput> {
        Ok(OpOutput::Image(map_samples(inputs.primary(), |sample| !sample)?))
    }
}
