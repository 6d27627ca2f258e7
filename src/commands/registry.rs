use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use super::{
    AddImagesOp, BinaryThresholdOp, BitwiseKind, BitwiseNotOp, BitwiseOp, BrightenOp, CannyOp,
    DarkenOp, DilateOp, EqualizeOp, ErodeOp, GaussianBlurOp, GrayscaleOp, HistogramOp, OpInputs,
    OpOutput, OpSchema, Operation, OpsError, Result, SharpenOp, SubtractImagesOp,
};

pub type Registry = HashMap<&'static str, Arc<dyn Operation>>;

fn register<O: Operation + 'static>(map: &mut Registry, operation: O) {
    map.insert(operation.name(), Arc::new(operation));
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut map: Registry = HashMap::new();
        register(&mut map, GrayscaleOp);
        register(&mut map, BinaryThresholdOp);
        register(&mut map, BrightenOp);
        register(&mut map, DarkenOp);
        register(&mut map, AddImagesOp);
        register(&mut map, SubtractImagesOp);
        register(&mut map, BitwiseOp::new(BitwiseKind::And));
        register(&mut map, BitwiseOp::new(BitwiseKind::Or));
        register(&mut map, BitwiseOp::new(BitwiseKind::Xor));
        register(&mut map, BitwiseNotOp);
        register(&mut map, ErodeOp);
        register(&mut map, DilateOp);
        register(&mut map, GaussianBlurOp);
        register(&mut map, SharpenOp);
        register(&mut map, CannyOp);
        register(&mut map, EqualizeOp);
        register(&mut map, HistogramOp);
        map
    })
}

pub fn default_registry() -> Registry {
    registry()
        .iter()
        .map(|(name, op)| (*name, Arc::clone(op)))
        .collect()
}

pub fn list_operations() -> Vec<OpSchema> {
    let mut schemas = registry()
        .values()
        .map(|op| op.schema())
        .collect::<Vec<_>>();
    schemas.sort_by(|left, right| left.name.cmp(&right.name));
    schemas
}

pub fn execute_operation(name: &str, inputs: OpInputs<'_>, params: &Value) -> Result<OpOutput> {
    execute_operation_with_registry(registry(), name, inputs, params)
}

/// Looks up `name` and runs it after checking the input count.
pub fn execute_operation_with_registry(
    registry: &Registry,
    name: &str,
    inputs: OpInputs<'_>,
    params: &Value,
) -> Result<OpOutput> {
    let op = registry
        .get(name)
        .ok_or_else(|| OpsError::UnknownOperation(name.to_string()))?;
    let expected = op.schema().arity;
    if inputs.arity() != expected {
        return Err(OpsError::ArityMismatch {
            op: op.name(),
            expected: expected.count(),
        });
    }
    op.execute(inputs, params)
}
