//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are pure functions; the shell layer (view) only
//! routes events into them and draws the result.

use crate::model::Library;
use crate::state::modal::DetailModal;
use crate::state::profile::{PickerState, SessionIconStore};
use crate::state::rail::RailController;
use crate::view_state::RailViewport;

// ===== Route =====

/// Which page the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// The shelf browser (default).
    #[default]
    Browse,
    /// The profile icon picker.
    ProfilePicker,
}

// ===== RailState =====

/// Controller plus measured viewport for one rail.
///
/// The viewport is `None` until the rail has been rendered once - geometry
/// cannot be known before the first draw, and every controller operation
/// tolerates the absence by no-op.
#[derive(Debug, Clone, Default)]
pub struct RailState {
    /// Pure command/drag logic for the rail.
    pub controller: RailController,
    /// Measured window onto the strip; absent before first render.
    pub viewport: Option<RailViewport>,
}

impl RailState {
    /// Whether this rail's glide is still in flight.
    pub fn is_animating(&self) -> bool {
        self.viewport.as_ref().is_some_and(RailViewport::is_animating)
    }

    /// Advance this rail's glide by one frame.
    pub fn tick(&mut self) {
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.tick();
        }
    }
}

// ===== DragTarget =====

/// Which rail owns the active pointer drag.
///
/// Captured at pointer down so the drag keeps tracking the same rail even
/// when the pointer leaves its strip area mid-gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// A shelf rail on the browse page.
    Shelf(usize),
    /// The icon strip on the profile picker page.
    PickerIcons,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Route**: Browse ⇄ ProfilePicker
/// - **Modal**: closed → open (card activation) → closed (Back)
/// - **Drag**: at most one rail dragging at a time, tracked by `drag_target`
/// - **Help**: overlay toggled on top of either route
#[derive(Debug, Clone)]
pub struct AppState {
    /// The catalog; all other fields are UI state.
    library: Library,

    /// Which page is showing.
    pub route: Route,

    /// One rail per shelf, same order as `library.shelves()`.
    rails: Vec<RailState>,

    /// Index of the shelf with keyboard focus.
    pub selected_shelf: usize,

    /// First shelf row currently shown (vertical windowing of shelves).
    pub first_visible_shelf: usize,

    /// Detail modal store (injected interface; see `state::modal`).
    pub modal: DetailModal,

    /// Icon selection store (injected interface; see `state::profile`).
    pub icon_store: SessionIconStore,

    /// Profile picker page state.
    pub picker: PickerState,

    /// Rail owning the active pointer drag, if any.
    pub drag_target: Option<DragTarget>,

    /// Whether the key-binding help overlay is visible.
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Library::default())
    }
}

impl AppState {
    /// Create new AppState over a catalog, with default UI state.
    pub fn new(library: Library) -> Self {
        let rails = (0..library.shelf_count()).map(|_| RailState::default()).collect();
        Self {
            library,
            route: Route::Browse,
            rails,
            selected_shelf: 0,
            first_visible_shelf: 0,
            modal: DetailModal::new(),
            icon_store: SessionIconStore::new(),
            picker: PickerState::new(),
            drag_target: None,
            help_visible: false,
        }
    }

    /// Get immutable reference to the catalog.
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Rail state for a shelf index.
    pub fn rail(&self, index: usize) -> Option<&RailState> {
        self.rails.get(index)
    }

    /// Mutable rail state for a shelf index.
    pub fn rail_mut(&mut self, index: usize) -> Option<&mut RailState> {
        self.rails.get_mut(index)
    }

    /// Mutable rail state for the focused shelf.
    pub fn selected_rail_mut(&mut self) -> Option<&mut RailState> {
        self.rails.get_mut(self.selected_shelf)
    }

    /// Mutable rail state for a drag target, route-independent.
    pub fn rail_for_target_mut(&mut self, target: DragTarget) -> Option<&mut RailState> {
        match target {
            DragTarget::Shelf(index) => self.rails.get_mut(index),
            DragTarget::PickerIcons => Some(&mut self.picker.rail),
        }
    }

    /// Move shelf focus down by one, clamped to the last shelf.
    pub fn focus_next_shelf(&mut self) {
        if self.selected_shelf + 1 < self.rails.len() {
            self.selected_shelf += 1;
        }
    }

    /// Move shelf focus up by one, clamped to the first shelf.
    pub fn focus_prev_shelf(&mut self) {
        self.selected_shelf = self.selected_shelf.saturating_sub(1);
    }

    /// Keep the focused shelf inside the visible window of `capacity` rows.
    ///
    /// Adjusts `first_visible_shelf` minimally: scrolls up when focus moved
    /// above the window, down when it moved below.
    pub fn ensure_shelf_visible(&mut self, capacity: usize) {
        if capacity == 0 {
            return;
        }
        if self.selected_shelf < self.first_visible_shelf {
            self.first_visible_shelf = self.selected_shelf;
        } else if self.selected_shelf >= self.first_visible_shelf + capacity {
            self.first_visible_shelf = self.selected_shelf + 1 - capacity;
        }
    }

    /// Whether any rail glide is still in flight (either route).
    pub fn is_animating(&self) -> bool {
        self.rails.iter().any(RailState::is_animating) || self.picker.rail.is_animating()
    }

    /// Advance all rail glides by one frame.
    ///
    /// Returns true when anything was moving, so the caller knows to draw
    /// (including the settle frame).
    pub fn tick_glides(&mut self) -> bool {
        let was_animating = self.is_animating();
        for rail in &mut self.rails {
            rail.tick();
        }
        self.picker.rail.tick();
        was_animating
    }
}
