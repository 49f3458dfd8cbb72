//! Error types for annotation.

use std::str::Utf8Error;

/// Error raised before any scanning begins.
///
/// String inputs never fail; only raw byte input can be rejected.
#[derive(Debug, thiserror::Error)]
pub enum AnnotateError {
    /// The input is not a valid UTF-8 string.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] Utf8Error),
}
