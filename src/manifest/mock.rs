use crate::error::{BumpError, Result};
use crate::manifest::FileAccess;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory file access for testing without touching the disk
pub struct MockFileAccess {
    files: RefCell<HashMap<PathBuf, String>>,
    read_only: bool,
    writes: Cell<usize>,
}

impl MockFileAccess {
    /// Create a new empty mock filesystem
    pub fn new() -> Self {
        MockFileAccess {
            files: RefCell::new(HashMap::new()),
            read_only: false,
            writes: Cell::new(0),
        }
    }

    /// Add a file with the given contents
    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.get_mut().insert(path.into(), contents.into());
    }

    /// Make every write fail with a permission error
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Current contents of a file, if present
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Default for MockFileAccess {
    fn default() -> Self {
        Self::new()
    }
}

impl FileAccess for MockFileAccess {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        self.contents(path).ok_or_else(|| {
            BumpError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<()> {
        if self.read_only {
            return Err(BumpError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            )));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
