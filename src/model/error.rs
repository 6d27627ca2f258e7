use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid image size {width}x{height}: both sides must be non-zero")]
    ZeroSized { width: u32, height: u32 },

    #[error("sample buffer of length {actual} does not fit {expected_shape}")]
    BufferLength {
        actual: usize,
        expected_shape: String,
    },

    #[error("resampling failed: {0}")]
    Resample(String),
}
