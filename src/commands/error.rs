use crate::model::{CoreError, ImageShape};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpsError>;

#[derive(Debug, Error)]
pub enum OpsError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("invalid operation parameters: {0}")]
    InvalidParams(String),

    #[error("operation `{op}` expects {expected} input image(s)")]
    ArityMismatch { op: &'static str, expected: usize },

    #[error("input shapes differ: {left} vs {right}")]
    ShapeMismatch { left: ImageShape, right: ImageShape },

    #[error("core image error: {0}")]
    Core(#[from] CoreError),
}

/// A user-supplied parameter that could not be used as typed.
///
/// These never abort a command: the dispatcher substitutes the documented
/// fallback and reports the problem as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidParameter {
    #[error("`{input}` is not a whole number for {name}; using default {fallback}")]
    NotNumeric {
        name: String,
        input: String,
        fallback: i64,
    },

    #[error("{name} {value} is outside [{min}, {max}]; using {clamped}")]
    OutOfRange {
        name: String,
        value: i64,
        min: i64,
        max: i64,
        clamped: i64,
    },

    #[error("{name} must be odd; using {adjusted} instead of {value}")]
    EvenKernel {
        name: String,
        value: i64,
        adjusted: i64,
    },
}
