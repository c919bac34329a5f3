//! Error types for AAC boards

use thiserror::Error;

/// Main error type for AAC board operations
#[derive(Error, Debug)]
pub enum AacError {
    /// Associative array failure
    #[error(transparent)]
    Array(#[from] ArrayError),

    /// Selection failure on a page
    #[error(transparent)]
    Page(#[from] PageError),

    /// Malformed board file
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Reading or writing a board file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by [`AssociativeArray`](crate::AssociativeArray).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// Attempted to store an entry under a null key
    #[error("null key")]
    NullKey,

    /// Lookup of a key that is not in the array
    #[error("key not found")]
    KeyNotFound,
}

/// Errors raised when selecting an image on a page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The image is not selectable on the current page
    #[error("no such image: {image_loc:?}")]
    NotFound {
        /// The image location that was requested
        image_loc: String,
    },
}

impl PageError {
    /// Build a `NotFound` error for an image location.
    pub fn not_found(image_loc: impl Into<String>) -> Self {
        PageError::NotFound {
            image_loc: image_loc.into(),
        }
    }
}

/// Errors found while parsing a board file.
///
/// Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A header or item line without a space between image and text
    #[error("line {line}: expected `<image> <text>`, got {content:?}")]
    MissingSeparator {
        /// Line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// An item line (`>...`) before any category header
    #[error("line {line}: item appears before any category header")]
    ItemBeforeHeader {
        /// Line number
        line: usize,
    },
}

impl FormatError {
    /// The line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            FormatError::MissingSeparator { line, .. } | FormatError::ItemBeforeHeader { line } => {
                *line
            }
        }
    }
}

/// Result type alias for AAC board operations
pub type Result<T> = std::result::Result<T, AacError>;
