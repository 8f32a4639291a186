//! Profile picker host state.
//!
//! The picker is the second host of the rail controller: a strip of
//! selectable profile icons. Icon selection goes through the injected
//! `IconStore` interface (the original host's selection callback);
//! selection lives for the session only - persisting it is out of scope.
//!
//! The picker page also derives a `scrolled` flag from its vertical scroll
//! offset, which the view uses to restyle the pinned header once the page
//! has moved off the top (the original listened to window scroll position
//! for the same effect).

use crate::model::IconId;
use crate::state::RailState;

/// Selection interface for profile icons, injected into the host UI.
pub trait IconStore {
    /// The currently selected icon, if any.
    fn selected(&self) -> Option<&IconId>;

    /// Select an icon. Invoked by the host on icon activation.
    fn select(&mut self, icon: IconId);
}

/// Session-lifetime icon selection. No persistence.
#[derive(Debug, Clone, Default)]
pub struct SessionIconStore {
    selected: Option<IconId>,
}

impl SessionIconStore {
    /// Create a store with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IconStore for SessionIconStore {
    fn selected(&self) -> Option<&IconId> {
        self.selected.as_ref()
    }

    fn select(&mut self, icon: IconId) {
        self.selected = Some(icon);
    }
}

/// UI state for the profile picker page.
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    /// Rail state for the icon strip.
    pub rail: RailState,
    /// Vertical scroll offset of the page body, in rows.
    vertical_offset: usize,
    /// Derived view-state: has the page scrolled off the top?
    scrolled: bool,
}

impl PickerState {
    /// Create a picker at the top of the page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current vertical offset of the page body.
    pub fn vertical_offset(&self) -> usize {
        self.vertical_offset
    }

    /// Whether the page has scrolled off the top.
    ///
    /// Drives the pinned header restyle. Not sticky: returns false again
    /// when the page is back at the top.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Scroll the page body up by `rows` (toward the top).
    pub fn scroll_up(&mut self, rows: usize) {
        self.set_vertical_offset(self.vertical_offset.saturating_sub(rows));
    }

    /// Scroll the page body down by `rows`, clamped to `max_offset`.
    pub fn scroll_down(&mut self, rows: usize, max_offset: usize) {
        self.set_vertical_offset(self.vertical_offset.saturating_add(rows).min(max_offset));
    }

    /// Reset to the top of the page (used when the picker is reopened).
    pub fn reset_scroll(&mut self) {
        self.set_vertical_offset(0);
    }

    fn set_vertical_offset(&mut self, offset: usize) {
        self.vertical_offset = offset;
        self.scrolled = offset > 0;
    }
}
