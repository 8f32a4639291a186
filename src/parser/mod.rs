//! JSONL parser for catalog entries.
//!
//! This module provides pure parsing functions for converting catalog JSONL
//! lines into validated domain records. A catalog line is one JSON object
//! with a `type` discriminator of `"show"` or `"icon"`.

use crate::model::{
    CatalogEntry, IconId, MalformedEntry, ParseError, ProfileIcon, ShelfId, Show, ShowId,
};
use chrono::NaiveDate;
use serde::Deserialize;

// Entry type string constants
const ENTRY_TYPE_SHOW: &str = "show";
const ENTRY_TYPE_ICON: &str = "icon";

/// Raw JSON structure for deserializing catalog entries.
#[derive(Debug, Deserialize)]
struct RawCatalogEntry {
    #[serde(rename = "type")]
    entry_type: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    shelf: Option<String>,
    #[serde(default)]
    backdrop_path: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    first_air_date: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    // Icon entry fields
    #[serde(default)]
    href: Option<String>,
}

/// Parse a single catalog line into a domain entry.
///
/// # Arguments
///
/// * `raw` - The raw JSONL line to parse
/// * `line_number` - The line number (1-indexed) for error reporting
///
/// # Errors
///
/// Returns `ParseError` for invalid JSON, a missing required field, an
/// invalid identifier, an unparseable date, or an unknown entry type.
pub fn parse_entry(raw: &str, line_number: usize) -> Result<CatalogEntry, ParseError> {
    let raw_entry: RawCatalogEntry =
        serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
            line: line_number,
            message: e.to_string(),
        })?;

    match raw_entry.entry_type.as_str() {
        ENTRY_TYPE_SHOW => {
            parse_show(raw_entry, line_number).map(|s| CatalogEntry::Show(Box::new(s)))
        }
        ENTRY_TYPE_ICON => parse_icon(raw_entry, line_number).map(CatalogEntry::Icon),
        other => Err(ParseError::UnknownEntryType {
            line: line_number,
            kind: other.to_string(),
        }),
    }
}

/// Parse a single catalog line gracefully.
///
/// Unlike `parse_entry()`, this function never returns an error. A line
/// that fails to parse becomes a `CatalogEntry::Malformed` carrying the
/// line number, raw text, and error message, so ingest can continue.
pub fn parse_entry_graceful(raw: &str, line_number: usize) -> CatalogEntry {
    match parse_entry(raw, line_number) {
        Ok(entry) => entry,
        Err(parse_error) => CatalogEntry::Malformed(MalformedEntry::new(
            line_number,
            raw,
            parse_error.to_string(),
        )),
    }
}

fn parse_show(raw: RawCatalogEntry, line: usize) -> Result<Show, ParseError> {
    let id = require_field(raw.id, line, "id")?;
    let id = ShowId::new(id).map_err(|e| ParseError::InvalidField {
        line,
        field: "id",
        reason: e.to_string(),
    })?;

    let title = require_field(raw.title, line, "title")?;

    let shelf = require_field(raw.shelf, line, "shelf")?;
    let shelf = ShelfId::new(shelf).map_err(|e| ParseError::InvalidField {
        line,
        field: "shelf",
        reason: e.to_string(),
    })?;

    let first_air_date = match raw.first_air_date {
        Some(raw_date) if !raw_date.is_empty() => Some(
            NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d").map_err(|_| {
                ParseError::InvalidDate {
                    line,
                    raw: raw_date,
                }
            })?,
        ),
        _ => None,
    };

    Ok(Show::new(
        id,
        title,
        shelf,
        raw.backdrop_path,
        raw.poster_path,
        first_air_date,
        raw.overview,
    ))
}

fn parse_icon(raw: RawCatalogEntry, line: usize) -> Result<ProfileIcon, ParseError> {
    let id = require_field(raw.id, line, "id")?;
    let id = IconId::new(id).map_err(|e| ParseError::InvalidField {
        line,
        field: "id",
        reason: e.to_string(),
    })?;

    let title = require_field(raw.title, line, "title")?;
    let href = require_field(raw.href, line, "href")?;

    Ok(ProfileIcon::new(id, title, href))
}

fn require_field<T>(value: Option<T>, line: usize, field: &'static str) -> Result<T, ParseError> {
    value.ok_or(ParseError::MissingField { line, field })
}
