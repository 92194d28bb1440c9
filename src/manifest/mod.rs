//! Manifest access layer
//!
//! This module provides a trait-based abstraction over file access so the
//! version workflow can run against the real filesystem or an in-memory
//! mock in tests.
//!
//! # Overview
//!
//! - [FileAccess]: read text, write text, report existence
//! - [fs::FsAccess]: the real implementation, writing atomically
//! - [mock::MockFileAccess]: an in-memory implementation for testing
//! - [Manifest]: a JSON manifest whose `version` field can be read and
//!   replaced without touching any other byte of the document
//!
//! ```rust
//! # use json_bump::manifest::{FileAccess, Manifest};
//! # use std::path::Path;
//! # fn example<F: FileAccess>(files: &F) -> json_bump::Result<()> {
//! let mut manifest = Manifest::load(files, Path::new("package.json"))?;
//! let version = manifest.version()?;
//! manifest.set_version(&version.to_string())?;
//! manifest.save(files)?;
//! # Ok(())
//! # }
//! ```

pub mod fs;
pub mod mock;

pub use fs::FsAccess;
pub use mock::MockFileAccess;

use crate::domain::Version;
use crate::error::{BumpError, Result};
use serde_json::{Map, Value};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Key holding the version string in a manifest
pub const VERSION_KEY: &str = "version";

/// File access used by the version workflow
///
/// ## Error Handling
///
/// Implementations map their failures onto [BumpError::Io]. Writes must be
/// all-or-nothing: a failed write leaves the previous contents in place.
pub trait FileAccess {
    /// Whether a file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file as UTF-8 text
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Replace the whole file with `contents`
    fn write_text(&self, path: &Path, contents: &str) -> Result<()>;
}

/// A JSON manifest loaded from disk
///
/// The original text is kept as read. Replacing the version splices the new
/// string literal over the old one, so every other byte is written back as is.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    text: String,
    document: Map<String, Value>,
}

impl Manifest {
    /// Load and parse the manifest at `path`.
    ///
    /// # Returns
    /// * `Err(BumpError::ManifestNotFound)` - If no file exists at `path`
    /// * `Err(BumpError::ManifestParse)` - If the file is not a JSON object
    pub fn load<F: FileAccess + ?Sized>(files: &F, path: &Path) -> Result<Self> {
        if !files.exists(path) {
            return Err(BumpError::ManifestNotFound(path.display().to_string()));
        }
        let text = files.read_text(path)?;
        Manifest::from_text(path, &text)
    }

    /// Parse manifest text that was read from `path`.
    pub fn from_text(path: &Path, text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| BumpError::manifest(format!("{}: {}", path.display(), e)))?;

        let document = match value {
            Value::Object(map) => map,
            _ => {
                return Err(BumpError::manifest(format!(
                    "{}: top-level value is not an object",
                    path.display()
                )))
            }
        };

        Ok(Manifest {
            path: path.to_path_buf(),
            text: text.to_string(),
            document,
        })
    }

    /// The raw `version` string.
    pub fn version_text(&self) -> Result<&str> {
        let value = self
            .document
            .get(VERSION_KEY)
            .ok_or_else(|| BumpError::VersionFieldMissing(self.path.display().to_string()))?;

        value.as_str().ok_or_else(|| {
            BumpError::VersionFieldNotString(format!("{} = {}", self.path.display(), value))
        })
    }

    /// The `version` field parsed as a semantic version.
    pub fn version(&self) -> Result<Version> {
        self.version_text()?;
        Version::from_json(&self.document[VERSION_KEY])
    }

    /// Replace the `version` string in place.
    ///
    /// # Returns
    /// * `Err(BumpError::VersionFieldMissing)` - If there is no top-level `version`
    /// * `Err(BumpError::VersionFieldNotString)` - If it holds anything but a string
    pub fn set_version(&mut self, version: &str) -> Result<()> {
        self.version_text()?;
        let span = top_level_string_span(&self.text, VERSION_KEY)
            .ok_or_else(|| BumpError::VersionFieldMissing(self.path.display().to_string()))?;
        let literal =
            serde_json::to_string(version).map_err(|e| BumpError::manifest(e.to_string()))?;

        self.text.replace_range(span, &literal);
        self.document
            .insert(VERSION_KEY.to_string(), Value::String(version.to_string()));
        Ok(())
    }

    /// Current manifest text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Write the document back to the path it was loaded from.
    pub fn save<F: FileAccess + ?Sized>(&self, files: &F) -> Result<()> {
        files.write_text(&self.path, &self.text)
    }
}

/// Byte range of the string literal stored under `key` in the top-level object.
///
/// Keys are decoded before comparing since they may contain escapes. With
/// duplicate keys the last one wins, matching `serde_json`.
fn top_level_string_span(text: &str, key: &str) -> Option<Range<usize>> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut expect_key = false;
    let mut key_matched = false;
    let mut in_value = false;
    let mut span = None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = string_end(bytes, i)?;
                if depth == 1 {
                    if expect_key {
                        let decoded = serde_json::from_str::<String>(&text[i..end]).ok();
                        key_matched = decoded.as_deref() == Some(key);
                        expect_key = false;
                    } else if in_value {
                        span = Some(i..end);
                    }
                    in_value = false;
                }
                i = end;
                continue;
            }
            b'{' | b'[' => {
                depth += 1;
                if depth == 1 {
                    expect_key = bytes[i] == b'{';
                }
                in_value = false;
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            b':' if depth == 1 => {
                in_value = key_matched;
                key_matched = false;
            }
            b',' if depth == 1 => {
                expect_key = true;
                in_value = false;
            }
            _ => {}
        }
        i += 1;
    }

    span
}

/// Index just past the closing quote of the string starting at `start`.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}
