//! Error type shared by every stage of the sketch pipeline.

use thiserror::Error;

/// Errors raised by the sketch filters and pipeline.
///
/// Every error aborts the pipeline; no stage produces partial output.
#[derive(Debug, Error)]
pub enum SketchError {
    /// The source buffer cannot be converted (too few channels, empty image).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A numeric parameter is not finite, not positive, or too large for
    /// the blur kernel.
    #[error("invalid parameter `{name}`: {value} is out of range")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The two maps handed to the dodge blend differ in shape.
    #[error("shape mismatch: front is {front:?}, back is {back:?}")]
    ShapeMismatch {
        front: (usize, usize),
        back: (usize, usize),
    },

    /// The configuration file could not be read.
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`SketchConfig`](crate::SketchConfig).
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),
}

impl SketchError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SketchError>;
