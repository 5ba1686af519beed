pub mod archive;
pub mod resize;
pub mod transform;

pub use archive::zip_directory;
pub use transform::BatchConverter;
