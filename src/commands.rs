mod arithmetic;
mod color;
mod edges;
mod error;
mod filter;
mod histogram;
mod logic;
mod morphology;
mod params;
mod registry;
mod schema;
mod threshold;
mod util;

#[cfg(test)]
mod tests;

pub use arithmetic::{AddImagesOp, BrightenOp, DarkenOp, SubtractImagesOp};
pub use color::GrayscaleOp;
pub use edges::CannyOp;
pub use error::{InvalidParameter, OpsError, Result};
pub use filter::{GaussianBlurOp, SharpenOp};
pub use histogram::{EqualizeOp, HistogramOp, compute_histogram};
pub use logic::{BitwiseKind, BitwiseNotOp, BitwiseOp};
pub use morphology::{DilateOp, ErodeOp};
pub use registry::{
    Registry, default_registry, execute_operation, execute_operation_with_registry,
    list_operations,
};
pub use schema::{
    Arity, Histogram, OpInputs, OpOutput, OpSchema, Operation, ParamKind, ParamSpec,
};
pub use threshold::BinaryThresholdOp;
