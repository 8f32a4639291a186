//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;
use thiserror::Error;

/// Error for an empty or whitespace-only show identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("show id must be non-empty")]
pub struct InvalidShowId;

/// Error for an empty or whitespace-only shelf identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("shelf id must be non-empty")]
pub struct InvalidShelfId;

/// Error for an empty or whitespace-only icon identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("icon id must be non-empty")]
pub struct InvalidIconId;

/// Unique identifier for a show in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShowId(String);

impl ShowId {
    /// Smart constructor: validates non-empty show ID.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidShowId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidShowId);
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the shelf (row) a show is grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShelfId(String);

impl ShelfId {
    /// Smart constructor: validates non-empty shelf ID.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidShelfId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidShelfId);
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShelfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a profile icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconId(String);

impl IconId {
    /// Smart constructor: validates non-empty icon ID.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidIconId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidIconId);
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
