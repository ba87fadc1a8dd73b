//! Error types for conversion operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Fatal conversion errors. Content-level problems are reported as
/// [`Warning`](crate::Warning)s instead.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input file does not exist.
    #[error("Input file '{}' not found", path.display())]
    InputNotFound { path: PathBuf },

    /// Reading the input failed.
    #[error("Error reading input file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the output failed.
    #[error("Error writing output file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No element in the document could serve as the content root.
    #[error("Could not find main content container in HTML")]
    NoContentContainer,

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl From<serde_json::Error> for ConvertError {
    fn from(error: serde_json::Error) -> Self {
        ConvertError::Config {
            message: error.to_string(),
        }
    }
}
