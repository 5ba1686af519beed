//! Transform stage: decode, resize, re-encode, and stage uploaded images.

use crate::core::{
    BatchOutput, ConversionSettings, ItemFailure, PreviewPair, TransformOutput, UploadedImage,
};
use crate::processing::archive::zip_directory;
use crate::processing::resize::resize_exact;
use crate::utils::{ConverterResult, file_stem, reset_dir};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Runs batch conversions against a caller-allocated staging directory.
///
/// The staging directory is deleted and recreated at the start of every
/// [`transform`](Self::transform) call, so it never carries files over from a
/// previous run. Two converters sharing one path would corrupt each other's
/// output; allocate one path per converter.
pub struct BatchConverter {
    settings: ConversionSettings,
    staging_dir: PathBuf,
}

impl BatchConverter {
    pub fn new(settings: ConversionSettings, staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings,
            staging_dir: staging_dir.into(),
        }
    }

    pub fn settings(&self) -> &ConversionSettings {
        &self.settings
    }

    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    /// Converts a batch of uploaded images into the staging directory.
    ///
    /// Items are processed independently in input order: a failed item is
    /// recorded in the output's `failures` and skipped, never aborting the
    /// batch. Only a staging-directory reset failure aborts the whole run.
    /// Items sharing a base name after extension stripping silently
    /// overwrite one another in the staging directory (last one wins).
    pub fn transform(&self, files: &[UploadedImage]) -> ConverterResult<TransformOutput> {
        let size = self.settings.size;
        info!(
            "Converting batch of {} images to {} at {}x{}",
            files.len(),
            self.settings.format,
            size.width,
            size.height
        );

        reset_dir(&self.staging_dir)?;

        let mut previews = Vec::with_capacity(files.len());
        let mut failures = Vec::new();

        for file in files {
            match self.convert_item(file) {
                Ok(pair) => {
                    debug!("Converted {}", file.name);
                    previews.push(pair);
                }
                Err(e) => {
                    warn!("Failed to process {}: {}", file.name, e);
                    failures.push(ItemFailure {
                        name: file.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if failures.is_empty() {
            info!("Batch completed: {} images converted", previews.len());
        } else {
            warn!(
                "Batch completed with {} failed items out of {}",
                failures.len(),
                files.len()
            );
        }

        Ok(TransformOutput {
            staging_dir: self.staging_dir.clone(),
            previews,
            failures,
        })
    }

    /// Converts the batch and archives the staging directory in one call.
    pub fn run(&self, files: &[UploadedImage]) -> ConverterResult<BatchOutput> {
        let transformed = self.transform(files)?;
        let archive = zip_directory(&transformed.staging_dir)?;
        Ok(BatchOutput {
            staging_dir: transformed.staging_dir,
            previews: transformed.previews,
            failures: transformed.failures,
            archive,
        })
    }

    fn convert_item(&self, file: &UploadedImage) -> ConverterResult<PreviewPair> {
        let decoded = image::load_from_memory(&file.bytes)?;
        // Flatten palette and alpha sources to plain 3-channel RGB so every
        // input can be re-encoded as JPEG as well as PNG.
        let original = decoded.to_rgb8();

        let size = self.settings.size;
        let resized = resize_exact(&original, size.width, size.height)?;

        let format = self.settings.format;
        let output_name = format!("{}.{}", file_stem(&file.name), format.extension());
        let output_path = self.staging_dir.join(&output_name);
        resized.save_with_format(&output_path, format.encoder())?;

        Ok(PreviewPair {
            name: file.name.clone(),
            original: DynamicImage::ImageRgb8(original),
            resized: DynamicImage::ImageRgb8(resized),
        })
    }
}
