pub mod types;

pub use types::{
    BatchOutput, ConversionSettings, ItemFailure, OutputSize, PreviewPair, TransformOutput,
    UploadedImage, MAX_DIMENSION, MIN_DIMENSION, ZIP_MIME,
};
