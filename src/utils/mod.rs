pub mod error;
pub mod formats;
pub mod fs;

pub use error::{ConverterError, ConverterResult};
pub use formats::{TargetFormat, UPLOAD_EXTENSIONS};
pub use fs::{file_stem, reset_dir};
