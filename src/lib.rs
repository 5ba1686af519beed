// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{
    BatchOutput, ConversionSettings, ItemFailure, OutputSize, PreviewPair, TransformOutput,
    UploadedImage, MAX_DIMENSION, MIN_DIMENSION, ZIP_MIME,
};
pub use crate::processing::{BatchConverter, zip_directory};
pub use crate::utils::{ConverterError, ConverterResult, TargetFormat};
