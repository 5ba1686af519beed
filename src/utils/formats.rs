use crate::utils::ConverterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format chosen for every image in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    Jpg,
    Png,
}

impl TargetFormat {
    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::Jpg => &["jpg", "jpeg"],
            Self::Png => &["png"],
        }
    }

    /// Get the primary extension for this format, used for output filenames
    pub fn extension(&self) -> &str {
        self.extensions()[0]
    }

    /// The `image` crate encoder for this format
    pub fn encoder(&self) -> image::ImageFormat {
        match self {
            Self::Jpg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for TargetFormat {
    type Err = ConverterError;

    /// Parses the format strings the UI boundary sends (`"JPG"`, `"PNG"`),
    /// accepting any casing plus the `jpeg` alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "png" => Ok(Self::Png),
            _ => Err(ConverterError::format(format!(
                "Unsupported target format: {}",
                s
            ))),
        }
    }
}

/// Extensions accepted at the upload boundary.
pub const UPLOAD_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ui_format_strings() {
        assert_eq!("JPG".parse::<TargetFormat>().unwrap(), TargetFormat::Jpg);
        assert_eq!("png".parse::<TargetFormat>().unwrap(), TargetFormat::Png);
        assert_eq!("jpeg".parse::<TargetFormat>().unwrap(), TargetFormat::Jpg);
        assert!("webp".parse::<TargetFormat>().is_err());
    }

    #[test]
    fn lowercase_extension_for_filenames() {
        assert_eq!(TargetFormat::Jpg.extension(), "jpg");
        assert_eq!(TargetFormat::Png.extension(), "png");
        assert_eq!(TargetFormat::Jpg.to_string(), "jpg");
    }

    #[test]
    fn every_upload_extension_maps_to_a_format() {
        for ext in UPLOAD_EXTENSIONS {
            assert!(ext.parse::<TargetFormat>().is_ok());
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TargetFormat::Png).unwrap(),
            "\"png\""
        );
    }
}
