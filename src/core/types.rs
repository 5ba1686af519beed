//! Core types for batch conversion settings and results.

use crate::utils::{ConverterError, ConverterResult, TargetFormat};
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Smallest output dimension the UI slider offers.
pub const MIN_DIMENSION: u32 = 32;
/// Largest output dimension the UI slider offers.
pub const MAX_DIMENSION: u32 = 1024;

/// MIME type for the downloadable archive.
pub const ZIP_MIME: &str = "application/zip";

/// One uploaded image as received from the UI collaborator.
///
/// Lives for a single batch run; the pipeline never mutates it.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Original filename, extension included
    pub name: String,
    /// Raw encoded file content
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Exact output dimensions for every image in a batch.
///
/// Width and height are chosen independently; there is no aspect-ratio
/// preservation, so distortion is expected when the ratio differs from the
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSize {
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
}

impl OutputSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Configuration settings for one batch conversion run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Exact output dimensions
    pub size: OutputSize,
    /// Output format for all images in the batch
    pub format: TargetFormat,
}

impl ConversionSettings {
    pub fn new(size: OutputSize, format: TargetFormat) -> Self {
        Self { size, format }
    }

    /// Boundary check for UI callers.
    ///
    /// The pipeline itself does not enforce these bounds; the sliders are
    /// expected to. Callers taking dimensions from elsewhere can use this
    /// before starting a run.
    pub fn validate(&self) -> ConverterResult<()> {
        for (label, value) in [("width", self.size.width), ("height", self.size.height)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
                return Err(ConverterError::format(format!(
                    "Invalid {}: {}. Must be between {} and {}",
                    label, value, MIN_DIMENSION, MAX_DIMENSION
                )));
            }
        }
        Ok(())
    }

    /// Filename offered to the user for the finished archive,
    /// e.g. `converted_images_128x128.png.zip`.
    pub fn download_filename(&self) -> String {
        format!(
            "converted_images_{}x{}.{}.zip",
            self.size.width, self.size.height, self.format
        )
    }
}

/// Before/after pair for one successfully converted image.
///
/// Held in memory for rendering only; never persisted. `original` is the
/// decoded source after RGB flattening, `resized` the final output image.
#[derive(Debug, Clone)]
pub struct PreviewPair {
    /// Original filename, extension included
    pub name: String,
    /// Decoded source image
    pub original: DynamicImage,
    /// Resized, format-converted result
    pub resized: DynamicImage,
}

/// One failed item in a batch, attributed to its original filename.
#[derive(Debug, Clone, Serialize)]
pub struct ItemFailure {
    /// Original filename of the item that failed
    pub name: String,
    /// Human-readable failure description
    pub reason: String,
}

/// Result of the transform stage alone.
#[derive(Debug)]
pub struct TransformOutput {
    /// Staging directory now holding one file per successful item
    pub staging_dir: PathBuf,
    /// Before/after pairs in input order, failed items skipped
    pub previews: Vec<PreviewPair>,
    /// Per-item failures in input order
    pub failures: Vec<ItemFailure>,
}

/// Result of a full transform-and-archive run.
#[derive(Debug)]
pub struct BatchOutput {
    /// Staging directory the archive was built from
    pub staging_dir: PathBuf,
    /// Before/after pairs in input order, failed items skipped
    pub previews: Vec<PreviewPair>,
    /// Per-item failures in input order
    pub failures: Vec<ItemFailure>,
    /// Complete ZIP archive, readable from byte 0
    pub archive: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_filename_matches_template() {
        let settings =
            ConversionSettings::new(OutputSize::new(128, 256), TargetFormat::Png);
        assert_eq!(
            settings.download_filename(),
            "converted_images_128x256.png.zip"
        );
    }

    #[test]
    fn validate_rejects_out_of_range_dimensions() {
        let ok = ConversionSettings::new(OutputSize::new(32, 1024), TargetFormat::Jpg);
        assert!(ok.validate().is_ok());

        let too_small = ConversionSettings::new(OutputSize::new(16, 64), TargetFormat::Jpg);
        assert!(too_small.validate().is_err());

        let too_large = ConversionSettings::new(OutputSize::new(64, 2048), TargetFormat::Jpg);
        assert!(too_large.validate().is_err());
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings =
            ConversionSettings::new(OutputSize::new(100, 50), TargetFormat::Jpg);
        let json = serde_json::to_string(&settings).unwrap();
        let back: ConversionSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.size, settings.size);
        assert_eq!(back.format, settings.format);
    }
}
