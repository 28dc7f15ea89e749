//! Error types for mdocx library.

use std::io;
use thiserror::Error;

/// Result type alias for mdocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or packing a document.
///
/// Malformed markdown is never an error: incomplete tables are dropped and
/// unmatched emphasis delimiters simply toggle style. Only the export inputs
/// and the packer can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required asset (the header logo) was missing or empty.
    #[error("Missing asset: {0}")]
    MissingAsset(String),

    /// The header logo bytes are not in a supported image format.
    #[error("Unsupported image format for header logo")]
    UnsupportedImage,

    /// The packer failed to serialize the document.
    #[error("Packing error: {0}")]
    Pack(String),

    /// No packer is registered under the requested name or extension.
    #[error("No packer registered for: {0}")]
    UnknownPacker(String),

    /// The export input could not be understood.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::InvalidInput(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedImage;
        assert_eq!(err.to_string(), "Unsupported image format for header logo");

        let err = Error::MissingAsset("header logo".to_string());
        assert_eq!(err.to_string(), "Missing asset: header logo");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
