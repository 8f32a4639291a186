//! Pure core integration functions.
//!
//! This module contains the pure fan-in from raw catalog lines to domain
//! entries, used by the shell at startup. Testable without any I/O.

use crate::model::CatalogEntry;
use crate::parser;

/// Process raw catalog lines into catalog entries.
///
/// Blank lines are skipped without consuming a line number slot in error
/// reports (the original line number is preserved). Lines that fail to
/// parse become `CatalogEntry::Malformed` so callers can report them.
///
/// # Arguments
///
/// * `lines` - Raw catalog lines to process
/// * `starting_line_number` - Line number of the first line (for error reporting)
pub fn process_lines(lines: Vec<String>, starting_line_number: usize) -> Vec<CatalogEntry> {
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let line_number = starting_line_number + index;
            parser::parse_entry_graceful(&line, line_number)
        })
        .collect()
}
