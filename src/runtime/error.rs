use std::path::PathBuf;

use crate::commands::OpsError;
use crate::formats::IoError;
use crate::model::ImageShape;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// A command was issued while the image store could not satisfy it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("load a primary image before loading a second image")]
    NoPrimaryImage,

    #[error("no image loaded")]
    NoImageLoaded,

    #[error("this command needs a second image; load one first")]
    NoSecondImage,

    #[error("images are not shape-compatible: {original} vs {second}")]
    ShapeMismatch {
        original: ImageShape,
        second: ImageShape,
    },

    #[error("nothing to reset: no image has been opened from disk")]
    NothingToReset,

    #[error("no processed image to save")]
    NoProcessedImage,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot open `{}`: {source}", path.display())]
    Decode { path: PathBuf, source: IoError },

    #[error("cannot save `{}`: {source}", path.display())]
    Encode { path: PathBuf, source: IoError },

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error("operation failed: {0}")]
    Operation(#[from] OpsError),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
