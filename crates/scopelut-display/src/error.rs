//! Error types for scopelut-display

use scopelut_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur while configuring or rendering a display session
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] scopelut_core::Error),

    /// Out-of-range scaling, gamma or channel argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation not supported by the active color mode or sample type
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Pixel buffer does not match the reported frame dimensions
    #[error("dimension mismatch: expected {expected} samples, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Settings could not be encoded or decoded
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// I/O error while saving or loading settings
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DisplayError {
    /// Classify this error, looking through wrapped core errors.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DisplayError::Core(e) => e.kind(),
            DisplayError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            DisplayError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            DisplayError::DimensionMismatch { .. }
            | DisplayError::Settings(_)
            | DisplayError::Io(_) => ErrorKind::Other,
        }
    }
}

/// Result type for display operations
pub type DisplayResult<T> = Result<T, DisplayError>;
