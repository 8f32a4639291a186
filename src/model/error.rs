//! Error types for the railview application.
//!
//! This module defines a hierarchical error taxonomy using `thiserror` for
//! structured error handling. Errors compose cleanly via `?` and `From`
//! conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Catalog file/stdin reading failures (file not found, no input, IO)
//!   - [`ParseError`] - Catalog JSONL parsing failures (malformed JSON, missing fields, bad dates)
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Parsing errors are **non-fatal**: malformed catalog lines are logged and
//! skipped, so the browser stays usable with partial data. Input and terminal
//! errors are fatal and propagate to the top-level handler.
//!
//! The rail controller itself has no error path at all: the only failure
//! condition it can encounter is a viewport that has not been measured yet,
//! which is a normal pre-first-render race handled by no-op, never surfaced.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types (`InputError`, `ParseError`) automatically
/// convert to `AppError` via `From` implementations, enabling clean error
/// propagation with the `?` operator.
///
/// # Recovery Behavior
///
/// - **Input/Terminal errors**: Fatal - propagate to main for graceful shutdown
/// - **Parse errors**: Non-fatal - logged, ingest continues
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the catalog from file or stdin.
    ///
    /// A fundamental inability to access the catalog source. The application
    /// cannot proceed without a catalog; display the error and exit.
    #[error("Failed to read catalog: {0}")]
    Input(#[from] InputError),

    /// Failed to parse a catalog entry.
    ///
    /// Malformed JSON, a missing required field, or invalid data in a catalog
    /// line. Non-fatal at ingest: the line is logged with its line number and
    /// skipped, and parsing continues with the next line.
    #[error("Failed to parse catalog entry: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer: raw mode, alternate screen,
    /// broken pipes, I/O errors during rendering. Fatal - attempt terminal
    /// cleanup, then exit with the message on stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the catalog from a file or stdin.
///
/// This type distinguishes specific failure modes (file not found vs no
/// input at all) rather than collapsing them into generic I/O errors, so the
/// shell can produce targeted messages.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified catalog file does not exist at the given path.
    ///
    /// **Recovery**: Display the full path, suggest checking it or using
    /// `--help` for usage. Exit with non-zero status.
    #[error("Catalog file not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No catalog source was provided.
    ///
    /// Occurs when no file path argument is given and stdin is an
    /// interactive terminal rather than a pipe.
    ///
    /// **Recovery**: Display usage showing both invocation modes:
    /// - `railview /path/to/catalog.jsonl` (file mode)
    /// - `cat catalog.jsonl | railview` (stdin mode)
    #[error("No catalog source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the catalog source.
    ///
    /// Permission denied, disk read errors, broken pipes when reading from
    /// stdin. The wrapped `std::io::Error` carries the OS detail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing catalog JSONL entries.
///
/// All variants include a 1-based `line` for error reporting - users need to
/// know which line of the catalog is malformed. Parse errors are non-fatal:
/// the line becomes a malformed entry and ingest continues.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A catalog line contains syntactically invalid JSON.
    ///
    /// The parser error message is extracted as a `String` rather than
    /// wrapping `serde_json::Error`, to avoid carrying parser state through
    /// the application.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// The 1-based line number where parsing failed.
        line: usize,
        /// The JSON parser error message.
        message: String,
    },

    /// A JSON object is missing a required field for the catalog schema.
    ///
    /// Field names are compile-time constants from the catalog schema
    /// ("id", "title", "shelf", ...), hence `&'static str`.
    #[error("Missing required field '{field}' at line {line}")]
    MissingField {
        /// The 1-based line number of the incomplete object.
        line: usize,
        /// The name of the missing required field.
        field: &'static str,
    },

    /// A field held a value that failed domain validation.
    ///
    /// Covers empty identifiers and similar smart-constructor rejections.
    #[error("Invalid value for '{field}' at line {line}: {reason}")]
    InvalidField {
        /// The 1-based line number containing the invalid value.
        line: usize,
        /// The field whose value was rejected.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A date field contains a value that cannot be parsed as `YYYY-MM-DD`.
    ///
    /// The raw value is preserved so users can diagnose formatting issues in
    /// their catalog generation pipeline.
    #[error("Invalid date '{raw}' at line {line}")]
    InvalidDate {
        /// The 1-based line number containing the invalid date.
        line: usize,
        /// The raw date value that failed to parse.
        raw: String,
    },

    /// The entry's `type` field names an unknown record kind.
    ///
    /// Known kinds are `"show"` and `"icon"`.
    #[error("Unknown entry type '{kind}' at line {line}")]
    UnknownEntryType {
        /// The 1-based line number of the unknown entry.
        line: usize,
        /// The raw `type` value.
        kind: String,
    },
}
