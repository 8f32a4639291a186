//! Piped stdin source for catalog data.

use crate::model::InputError;
use std::io::Read;

/// Stdin-based catalog source.
///
/// Reads piped stdin to EOF in one call. The TTY check that prevents
/// hanging on an interactive terminal lives in `detect_catalog_source`.
#[derive(Debug, Default)]
pub struct StdinSource {
    consumed: bool,
}

impl StdinSource {
    /// Create a stdin source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read all of stdin as individual lines.
    ///
    /// Subsequent calls return an empty vec; stdin is a one-shot stream.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures.
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        if self.consumed {
            return Ok(Vec::new());
        }
        self.consumed = true;

        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer.lines().map(str::to_string).collect())
    }
}
