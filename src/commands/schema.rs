use crate::model::LoadedImage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Result;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Integer,
    /// Kernel sizes: integers restricted to odd values.
    OddInteger,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub kind: ParamKind,
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    Single,
    Pair,
}

impl Arity {
    pub fn count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Pair => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpSchema {
    pub name: String,
    pub description: String,
    pub arity: Arity,
    pub params: Vec<ParamSpec>,
}

#[derive(Debug, Clone, Copy)]
pub enum OpInputs<'a> {
    Single(&'a LoadedImage),
    Pair(&'a LoadedImage, &'a LoadedImage),
}

impl<'a> OpInputs<'a> {
    pub fn primary(&self) -> &'a LoadedImage {
        match self {
            Self::Single(image) | Self::Pair(image, _) => image,
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Self::Single(_) => Arity::Single,
            Self::Pair(_, _) => Arity::Pair,
        }
    }
}

/// Per-plane 256-bin intensity counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Histogram {
    pub planes: Vec<Vec<u32>>,
}

#[derive(Debug, Clone)]
pub enum OpOutput {
    Image(LoadedImage),
    Histogram(Histogram),
}

pub trait Operation: Send + Sync {
    fn name(&self) -> &'static str;
    fn schema(&self) -> OpSchema;
    fn execute(&self, inputs: OpInputs<'_>, params: &Value) -> Result<OpOutput>;
}
