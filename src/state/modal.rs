//! Detail modal store.
//!
//! The original host kept modal state in a global store shared across the
//! app. Here it is an injected interface: `ModalStore` exposes get/set
//! operations scoped to the session, and the activation handlers are
//! generic over it rather than reaching for ambient state.

use crate::model::Show;

/// Get/set interface for the detail modal, injected into the host UI.
pub trait ModalStore {
    /// The show the modal is presenting, if any.
    fn shown(&self) -> Option<&Show>;

    /// Replace the presented show.
    fn set_shown(&mut self, show: Option<Show>);

    /// Whether the modal is visible.
    fn is_open(&self) -> bool;

    /// Show or hide the modal.
    fn set_open(&mut self, open: bool);

    /// Whether playback should start automatically when the modal opens.
    fn autoplay(&self) -> bool;

    /// Set the autoplay flag.
    fn set_autoplay(&mut self, autoplay: bool);
}

/// Session-lifetime modal state. Pure data, no side effects.
#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    shown: Option<Show>,
    open: bool,
    autoplay: bool,
}

impl DetailModal {
    /// Create a closed modal with nothing to present.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModalStore for DetailModal {
    fn shown(&self) -> Option<&Show> {
        self.shown.as_ref()
    }

    fn set_shown(&mut self, show: Option<Show>) {
        self.shown = show;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn autoplay(&self) -> bool {
        self.autoplay
    }

    fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
    }
}

/// Present a show in the modal.
///
/// Mirrors the activation sequence of the original host: set the show,
/// open the modal, and reset autoplay.
pub fn present(store: &mut impl ModalStore, show: Show) {
    store.set_shown(Some(show));
    store.set_open(true);
    store.set_autoplay(false);
}

/// Hide the modal, keeping the last shown show for reopening.
pub fn dismiss(store: &mut impl ModalStore) {
    store.set_open(false);
}
