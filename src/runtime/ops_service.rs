use crate::commands::{
    OpInputs, OpOutput, OpSchema, Registry, default_registry, execute_operation_with_registry,
};
use serde_json::Value;

use super::Result;

#[derive(Clone)]
pub struct OpsService {
    registry: Registry,
}

impl std::fmt::Debug for OpsService {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OpsService")
            .field("registered_ops", &self.registry.len())
            .finish()
    }
}

impl Default for OpsService {
    fn default() -> Self {
        Self {
            registry: default_registry(),
        }
    }
}

impl OpsService {
    pub fn schema(&self, op: &str) -> Option<OpSchema> {
        self.registry.get(op).map(|operation| operation.schema())
    }

    pub fn execute(&self, op: &str, inputs: OpInputs<'_>, params: &Value) -> Result<OpOutput> {
        Ok(execute_operation_with_registry(
            &self.registry,
            op,
            inputs,
            params,
        )?)
    }
}
