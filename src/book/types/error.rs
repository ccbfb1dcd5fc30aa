//! Custom error types for the txt-reader crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Encoding detection itself never fails; these errors come from the
/// storage side of the read path and from user-supplied configuration.
#[derive(Debug, Error)]
pub enum BookError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book's file no longer exists on disk.
    #[error("Book file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The library root exists but is not a directory.
    #[error("Library root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// An encoding label did not name one of the supported candidate encodings.
    #[error("Unknown or unsupported encoding label: {0:?}")]
    UnknownEncoding(String),
}

/// A convenience `Result` type alias using the crate's `BookError` type.
pub type Result<T> = std::result::Result<T, BookError>;
