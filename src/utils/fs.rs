use crate::utils::ConverterResult;
use std::fs;
use std::path::Path;

/// Delete a directory (if present) and recreate it empty.
///
/// Guarantees the staging invariant: no stale files from a previous run ever
/// survive into the next one. Not safe against a concurrent run using the
/// same path.
pub fn reset_dir(path: impl AsRef<Path>) -> ConverterResult<()> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Strip the extension from an uploaded filename, keeping only the base name.
///
/// Uploads arrive as flat names, so only the final path component is used;
/// a name without an extension is returned unchanged.
pub fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_dir_clears_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("staging");
        fs::create_dir_all(staging.join("nested")).unwrap();
        fs::write(staging.join("stale.png"), b"old").unwrap();

        reset_dir(&staging).unwrap();

        assert!(staging.is_dir());
        assert_eq!(fs::read_dir(&staging).unwrap().count(), 0);
    }

    #[test]
    fn reset_dir_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("a").join("b").join("staging");
        reset_dir(&staging).unwrap();
        assert!(staging.is_dir());
    }

    #[test]
    fn file_stem_strips_only_the_extension() {
        assert_eq!(file_stem("photo.jpeg"), "photo");
        assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
        assert_eq!(file_stem("noext"), "noext");
    }
}
