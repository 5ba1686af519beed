//! Error types for the image converter.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use serde::Serialize;
use std::io;
use thiserror::Error;

/// Main error type for the converter.
///
/// Per-item failures inside a batch are caught and downgraded to
/// [`crate::core::ItemFailure`]; only stage-level failures (staging-directory
/// reset, archive build) surface as this type at the batch boundary.
#[derive(Error, Debug, Serialize)]
pub enum ConverterError {
    /// Image decode, resize, or encode failed
    #[error("Image error: {0}")]
    Image(String),

    /// File IO error
    #[error("IO error: {0}")]
    Io(String),

    /// ZIP archive construction failed
    #[error("Archive error: {0}")]
    Archive(String),

    /// Unsupported or invalid target format
    #[error("Format error: {0}")]
    Format(String),
}

/// Convenience result type for converter operations.
pub type ConverterResult<T> = Result<T, ConverterError>;

// Helper methods for error creation
impl ConverterError {
    pub fn image<T: Into<String>>(msg: T) -> Self {
        Self::Image(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }
}

// Convert std::io::Error to ConverterError
impl From<io::Error> for ConverterError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

// Convert image decode/encode errors to ConverterError
impl From<image::ImageError> for ConverterError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}

// Convert zip errors to ConverterError
impl From<zip::result::ZipError> for ConverterError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}
