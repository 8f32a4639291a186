//! Catalog grouping types.
//!
//! Library is the root domain aggregate: shelves of shows in first-seen
//! order plus the profile icon set. Malformed catalog lines are retained
//! as entries so the shell can report them without aborting ingest.

use crate::model::{ProfileIcon, ShelfId, Show};

// ===== MalformedEntry =====

/// A catalog line that could not be parsed.
///
/// Retains enough context (line number, raw text, error message) for the
/// shell layer to log the failure while ingest continues.
#[derive(Debug, Clone)]
pub struct MalformedEntry {
    line_number: usize,
    raw_line: String,
    error_message: String,
}

impl MalformedEntry {
    /// Create a new malformed entry.
    ///
    /// # Arguments
    ///
    /// * `line_number` - The line number in the catalog file (1-indexed)
    /// * `raw_line` - The raw line content that failed to parse
    /// * `error_message` - Human-readable error message
    pub fn new(
        line_number: usize,
        raw_line: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            raw_line: raw_line.into(),
            error_message: error_message.into(),
        }
    }

    /// Get the line number where the error occurred.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Get the raw line content.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Get the error message.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

// ===== CatalogEntry =====

/// One parsed catalog line: a show, a profile icon, or a parse failure.
#[derive(Debug, Clone)]
pub enum CatalogEntry {
    /// A valid show record.
    Show(Box<Show>),
    /// A valid profile icon record.
    Icon(ProfileIcon),
    /// A line that failed to parse; kept for reporting.
    Malformed(MalformedEntry),
}

impl CatalogEntry {
    /// Borrow the malformed payload, if this entry is one.
    pub fn as_malformed(&self) -> Option<&MalformedEntry> {
        match self {
            CatalogEntry::Malformed(m) => Some(m),
            _ => None,
        }
    }
}

// ===== Shelf =====

/// An ordered row of shows sharing a shelf ID.
#[derive(Debug, Clone)]
pub struct Shelf {
    id: ShelfId,
    title: String,
    shows: Vec<Show>,
}

impl Shelf {
    /// Create an empty shelf.
    ///
    /// The display title is derived from the shelf ID by replacing
    /// separators and title-casing words ("top-rated" → "Top Rated").
    pub fn new(id: ShelfId) -> Self {
        let title = display_title(id.as_str());
        Self {
            id,
            title,
            shows: Vec::new(),
        }
    }

    pub fn id(&self) -> &ShelfId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    fn push(&mut self, show: Show) {
        self.shows.push(show);
    }
}

/// Derive a human-readable shelf title from its ID.
fn display_title(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ===== Library =====

/// The full media catalog: shelves in first-seen order plus profile icons.
#[derive(Debug, Clone, Default)]
pub struct Library {
    shelves: Vec<Shelf>,
    icons: Vec<ProfileIcon>,
    malformed_count: usize,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a parsed catalog entry into the library.
    ///
    /// Shows are appended to their shelf, creating the shelf on first
    /// reference so shelf order follows first appearance in the catalog.
    /// Malformed entries only bump the malformed counter; logging them is
    /// the shell's job.
    pub fn add_entry(&mut self, entry: CatalogEntry) {
        match entry {
            CatalogEntry::Show(show) => self.add_show(*show),
            CatalogEntry::Icon(icon) => self.icons.push(icon),
            CatalogEntry::Malformed(_) => self.malformed_count += 1,
        }
    }

    fn add_show(&mut self, show: Show) {
        let shelf_id = show.shelf().clone();
        match self.shelves.iter_mut().find(|s| *s.id() == shelf_id) {
            Some(shelf) => shelf.push(show),
            None => {
                let mut shelf = Shelf::new(shelf_id);
                shelf.push(show);
                self.shelves.push(shelf);
            }
        }
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn shelf(&self, index: usize) -> Option<&Shelf> {
        self.shelves.get(index)
    }

    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    pub fn icons(&self) -> &[ProfileIcon] {
        &self.icons
    }

    /// Number of catalog lines that failed to parse during ingest.
    pub fn malformed_count(&self) -> usize {
        self.malformed_count
    }

    /// Total show count across all shelves.
    pub fn show_count(&self) -> usize {
        self.shelves.iter().map(Shelf::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty() && self.icons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IconId, ShelfId, ShowId};

    fn make_show(id: &str, shelf: &str) -> Show {
        Show::new(
            ShowId::new(id).unwrap(),
            format!("Title {id}"),
            ShelfId::new(shelf).unwrap(),
            None,
            None,
            None,
            None,
        )
    }

    fn make_icon(id: &str) -> ProfileIcon {
        ProfileIcon::new(IconId::new(id).unwrap(), "The Classics", "/icons/c.png")
    }

    #[test]
    fn shelves_appear_in_first_seen_order() {
        let mut library = Library::new();
        library.add_entry(CatalogEntry::Show(Box::new(make_show("a", "trending"))));
        library.add_entry(CatalogEntry::Show(Box::new(make_show("b", "top-rated"))));
        library.add_entry(CatalogEntry::Show(Box::new(make_show("c", "trending"))));

        let ids: Vec<&str> = library.shelves().iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, vec!["trending", "top-rated"]);
    }

    #[test]
    fn shows_keep_catalog_order_within_shelf() {
        let mut library = Library::new();
        library.add_entry(CatalogEntry::Show(Box::new(make_show("a", "trending"))));
        library.add_entry(CatalogEntry::Show(Box::new(make_show("b", "trending"))));

        let titles: Vec<&str> = library.shelves()[0]
            .shows()
            .iter()
            .map(Show::title)
            .collect();
        assert_eq!(titles, vec!["Title a", "Title b"]);
    }

    #[test]
    fn shelf_title_derived_from_id() {
        let shelf = Shelf::new(ShelfId::new("top-rated").unwrap());
        assert_eq!(shelf.title(), "Top Rated");
    }

    #[test]
    fn icons_collected_separately_from_shelves() {
        let mut library = Library::new();
        library.add_entry(CatalogEntry::Icon(make_icon("i1")));
        library.add_entry(CatalogEntry::Icon(make_icon("i2")));

        assert_eq!(library.icons().len(), 2);
        assert_eq!(library.shelf_count(), 0);
    }

    #[test]
    fn malformed_entries_counted_not_stored() {
        let mut library = Library::new();
        library.add_entry(CatalogEntry::Malformed(MalformedEntry::new(
            3,
            "{bad",
            "unexpected end of input",
        )));

        assert_eq!(library.malformed_count(), 1);
        assert!(library.is_empty());
    }

    #[test]
    fn show_count_sums_all_shelves() {
        let mut library = Library::new();
        library.add_entry(CatalogEntry::Show(Box::new(make_show("a", "trending"))));
        library.add_entry(CatalogEntry::Show(Box::new(make_show("b", "top-rated"))));
        library.add_entry(CatalogEntry::Show(Box::new(make_show("c", "top-rated"))));

        assert_eq!(library.show_count(), 3);
    }
}
