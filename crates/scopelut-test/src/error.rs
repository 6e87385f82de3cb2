//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// LUT comparison failed
    #[error("lut comparison failed at index {index}: first difference at entry {entry}")]
    LutMismatch { index: usize, entry: usize },

    /// Byte comparison failed
    #[error("byte comparison failed at index {index}: sizes {left} vs {right}")]
    BytesMismatch {
        index: usize,
        left: usize,
        right: usize,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
