//! Error types for scopelut-core
//!
//! Provides a unified error type for the data model and LUT generation.
//! Errors are always synchronous and local to the call that raised them;
//! nothing here is transient, so callers should surface them rather than
//! retry.

use thiserror::Error;

/// Broad classification of a rejected call.
///
/// Both this crate's [`Error`] and the display crate's error type map onto
/// these kinds, so callers can tell an out-of-range argument from an
/// operation the active mode does not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument was out of range or malformed
    InvalidArgument,
    /// The operation is not supported for this mode or sample type
    UnsupportedOperation,
    /// Anything else (I/O, serialization, geometry)
    Other,
}

/// scopelut-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation not supported
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
        }
    }
}

/// Result type alias for scopelut-core operations
pub type Result<T> = std::result::Result<T, Error>;
