//! Read-once file source for catalog data.

use crate::model::InputError;
use std::path::{Path, PathBuf};

/// File-based catalog source.
///
/// Validates the path at construction; contents are read once via
/// `read_lines`.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a file source, validating that the path exists.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` when the path does not exist.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, InputError> {
        let path = path.into();
        if !path.exists() {
            return Err(InputError::FileNotFound { path });
        }
        Ok(Self { path })
    }

    /// The catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file as individual lines.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures (permissions, disk errors).
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}
