use crate::error::{BumpError, Result};
use crate::manifest::FileAccess;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Filesystem-backed [FileAccess]
///
/// Writes go to a temporary file in the target's directory which is then
/// renamed over the target, so readers never observe a half-written manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAccess;

impl FileAccess for FsAccess {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(contents.as_bytes())?;
        staged.as_file().sync_all()?;

        if let Ok(metadata) = fs::metadata(path) {
            staged.as_file().set_permissions(metadata.permissions())?;
        }

        staged
            .persist(path)
            .map_err(|e| BumpError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");

        FsAccess.write_text(&path, "{\"version\":\"1.0.0\"}").unwrap();
        assert!(FsAccess.exists(&path));
        assert_eq!(FsAccess.read_text(&path).unwrap(), "{\"version\":\"1.0.0\"}");
    }

    #[test]
    fn test_write_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "old contents that are longer than the new ones").unwrap();

        FsAccess.write_text(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");

        FsAccess.write_text(&path, "{}").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        assert!(!FsAccess.exists(&path));
        assert!(matches!(FsAccess.read_text(&path), Err(BumpError::Io(_))));
    }

    #[test]
    fn test_directory_is_not_a_manifest() {
        let dir = TempDir::new().unwrap();
        assert!(!FsAccess.exists(dir.path()));
    }
}
