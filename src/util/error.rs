//! Error types for yolopost.

use thiserror::Error;

/// Result alias for yolopost operations.
pub type PostResult<T> = std::result::Result<T, PostError>;

/// Errors that can occur when post-processing detector output.
///
/// Every variant describes a precondition violation by the caller or an I/O
/// problem while loading resources. Degenerate geometry is never an error.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PostError {
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The declared tensor shape cannot describe any boxes.
    #[error("invalid shape: num_boxes={num_boxes}, num_classes={num_classes}")]
    InvalidShape {
        /// Declared number of candidate boxes.
        num_boxes: usize,
        /// Declared number of classes.
        num_classes: usize,
    },
    /// The raw buffer length does not match `(4 + C) * N`.
    #[error("buffer size mismatch: needed {needed}, got {got}")]
    BufferSizeMismatch { needed: usize, got: usize },
    /// An index was outside the valid range.
    #[error("{context} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        context: &'static str,
    },
    /// The label set has fewer entries than the declared class count.
    #[error("label set too short: needed {needed} labels, got {got}")]
    LabelsTooShort { needed: usize, got: usize },
    /// A label resource could not be parsed.
    #[error("label parse error: {reason}")]
    LabelParse { reason: String },
    /// A file could not be read.
    #[error("io error: {reason}")]
    Io { reason: String },
}

impl From<std::io::Error> for PostError {
    fn from(err: std::io::Error) -> Self {
        PostError::Io {
            reason: err.to_string(),
        }
    }
}
