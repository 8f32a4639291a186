//! Catalog input sources.
//!
//! This module provides input sources for catalog JSONL data:
//! - File loading for read-once file input
//! - Stdin for piped input
//! - Unified CatalogSource enum for both

use crate::model::InputError;
use std::io::IsTerminal;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for catalog JSONL data.
///
/// Abstracts over file loading and stdin with a common interface.
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum CatalogSource {
    /// File source - read-once loading
    File(FileSource),
    /// Stdin source - reads piped stdin to EOF
    Stdin(StdinSource),
}

impl CatalogSource {
    /// Read all catalog lines from the source.
    ///
    /// The catalog is a static snapshot: both variants read to completion
    /// in one call at startup.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        match self {
            CatalogSource::File(f) => f.read_lines(),
            CatalogSource::Stdin(s) => s.read_lines(),
        }
    }

    /// Short human-readable description of the source, for the status bar.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::File(f) => f.path().display().to_string(),
            CatalogSource::Stdin(_) => "stdin".to_string(),
        }
    }
}

/// Detect and create the appropriate catalog source.
///
/// # Logic
///
/// 1. If a file path is provided: create a `FileSource` (path must exist)
/// 2. If stdin is piped: use `StdinSource`
/// 3. Else: return `InputError::NoInput`
///
/// # Arguments
///
/// * `path` - Optional catalog file path from the CLI
///
/// # Errors
///
/// Returns `InputError::FileNotFound` for a missing file and
/// `InputError::NoInput` when neither a path nor piped stdin is available.
pub fn detect_catalog_source(path: Option<PathBuf>) -> Result<CatalogSource, InputError> {
    if let Some(path) = path {
        return Ok(CatalogSource::File(FileSource::new(path)?));
    }

    if std::io::stdin().is_terminal() {
        return Err(InputError::NoInput);
    }

    Ok(CatalogSource::Stdin(StdinSource::new()))
}
