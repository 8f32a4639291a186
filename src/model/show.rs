//! Catalog item types.
//!
//! Show is the core media record from the catalog file; ProfileIcon is a
//! selectable avatar image. All fields are validated at construction time.

use crate::model::{IconId, ShelfId, ShowId};
use chrono::NaiveDate;

// ===== Show =====

/// A show in the media catalog.
///
/// Invariant: All fields validated at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    id: ShowId,
    title: String,
    shelf: ShelfId,
    backdrop_path: Option<String>,
    poster_path: Option<String>,
    first_air_date: Option<NaiveDate>,
    overview: Option<String>,
}

impl Show {
    /// Create a new show record.
    ///
    /// This constructor mirrors all fields and is intended for use by the
    /// parser, which validates the raw JSONL before calling it.
    pub fn new(
        id: ShowId,
        title: impl Into<String>,
        shelf: ShelfId,
        backdrop_path: Option<String>,
        poster_path: Option<String>,
        first_air_date: Option<NaiveDate>,
        overview: Option<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            shelf,
            backdrop_path,
            poster_path,
            first_air_date,
            overview,
        }
    }

    // ===== Accessors (read-only) =====

    pub fn id(&self) -> &ShowId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn shelf(&self) -> &ShelfId {
        &self.shelf
    }

    /// Preferred display image: backdrop when present, poster otherwise.
    pub fn artwork(&self) -> Option<&str> {
        self.backdrop_path
            .as_deref()
            .or(self.poster_path.as_deref())
    }

    pub fn first_air_date(&self) -> Option<NaiveDate> {
        self.first_air_date
    }

    /// Release year, when the air date is known.
    pub fn year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.first_air_date.map(|d| d.year())
    }

    pub fn overview(&self) -> Option<&str> {
        self.overview.as_deref()
    }
}

// ===== ProfileIcon =====

/// A selectable profile avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileIcon {
    id: IconId,
    title: String,
    href: String,
}

impl ProfileIcon {
    /// Create a new profile icon record.
    pub fn new(id: IconId, title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            href: href.into(),
        }
    }

    pub fn id(&self) -> &IconId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Image reference for the icon (a URL or path; not fetched here).
    pub fn href(&self) -> &str {
        &self.href
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show_id(s: &str) -> ShowId {
        ShowId::new(s).unwrap()
    }

    fn shelf_id(s: &str) -> ShelfId {
        ShelfId::new(s).unwrap()
    }

    #[test]
    fn artwork_prefers_backdrop_over_poster() {
        let show = Show::new(
            show_id("s1"),
            "Dark",
            shelf_id("trending"),
            Some("/backdrop.jpg".to_string()),
            Some("/poster.jpg".to_string()),
            None,
            None,
        );
        assert_eq!(show.artwork(), Some("/backdrop.jpg"));
    }

    #[test]
    fn artwork_falls_back_to_poster() {
        let show = Show::new(
            show_id("s1"),
            "Dark",
            shelf_id("trending"),
            None,
            Some("/poster.jpg".to_string()),
            None,
            None,
        );
        assert_eq!(show.artwork(), Some("/poster.jpg"));
    }

    #[test]
    fn artwork_absent_when_no_images() {
        let show = Show::new(show_id("s1"), "Dark", shelf_id("trending"), None, None, None, None);
        assert_eq!(show.artwork(), None);
    }

    #[test]
    fn year_derived_from_air_date() {
        let show = Show::new(
            show_id("s1"),
            "Dark",
            shelf_id("trending"),
            None,
            None,
            NaiveDate::from_ymd_opt(2017, 12, 1),
            None,
        );
        assert_eq!(show.year(), Some(2017));
    }

    #[test]
    fn year_absent_without_air_date() {
        let show = Show::new(show_id("s1"), "Dark", shelf_id("trending"), None, None, None, None);
        assert_eq!(show.year(), None);
    }
}
