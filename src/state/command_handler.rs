//! Keyboard action handler.
//!
//! Pure functions that transform AppState in response to domain key
//! actions. Route-aware: the same move commands drive the shelf rails on
//! the browse page and the icon strip on the profile picker.

use crate::model::KeyAction;
use crate::state::modal::{self, ModalStore};
use crate::state::profile::IconStore;
use crate::state::rail::{RailDirection, Viewport};
use crate::state::{AppState, Route};
use crate::view::constants::{CARD_STRIDE, ICON_STRIDE};

/// Rows the picker body can scroll past its pinned header.
const PICKER_SCROLL_SPAN: usize = 12;

/// Handle a keyboard action, returning the transformed state.
///
/// `Quit` is intentionally not handled here - the shell decides when to
/// tear the terminal down.
///
/// # Behavior
/// - Help overlay captures everything except its own dismissal
/// - An open modal captures Back (dismiss) and Activate (autoplay toggle)
/// - Otherwise actions dispatch by route
pub fn handle_key_action(mut state: AppState, action: KeyAction) -> AppState {
    // Help overlay captures keys until dismissed.
    if state.help_visible {
        if matches!(action, KeyAction::ToggleHelp | KeyAction::Back) {
            state.help_visible = false;
        }
        return state;
    }

    if action == KeyAction::ToggleHelp {
        state.help_visible = true;
        return state;
    }

    // An open modal captures interaction until dismissed.
    if state.route == Route::Browse && state.modal.is_open() {
        match action {
            KeyAction::Back => modal::dismiss(&mut state.modal),
            KeyAction::Activate => {
                let autoplay = state.modal.autoplay();
                state.modal.set_autoplay(!autoplay);
            }
            _ => {}
        }
        return state;
    }

    match state.route {
        Route::Browse => handle_browse_action(state, action),
        Route::ProfilePicker => handle_picker_action(state, action),
    }
}

fn handle_browse_action(mut state: AppState, action: KeyAction) -> AppState {
    match action {
        KeyAction::MoveLeft => {
            if let Some(rail) = state.selected_rail_mut() {
                rail.controller.move_by(rail.viewport.as_mut(), RailDirection::Left);
            }
        }
        KeyAction::MoveRight => {
            if let Some(rail) = state.selected_rail_mut() {
                rail.controller.move_by(rail.viewport.as_mut(), RailDirection::Right);
            }
        }
        KeyAction::NextShelf => state.focus_next_shelf(),
        KeyAction::PrevShelf => state.focus_prev_shelf(),
        KeyAction::Activate => {
            let card = state
                .rail(state.selected_shelf)
                .and_then(|rail| rail.viewport.as_ref())
                .map(|viewport| first_fully_visible(viewport.offset(), CARD_STRIDE));
            let show = card.and_then(|card| {
                state
                    .library()
                    .shelf(state.selected_shelf)
                    .and_then(|shelf| shelf.shows().get(card))
                    .cloned()
            });
            if let Some(show) = show {
                modal::present(&mut state.modal, show);
            }
        }
        KeyAction::OpenProfilePicker => {
            state.route = Route::ProfilePicker;
            state.picker.reset_scroll();
        }
        KeyAction::Back | KeyAction::ToggleHelp | KeyAction::Quit => {}
    }
    state
}

fn handle_picker_action(mut state: AppState, action: KeyAction) -> AppState {
    match action {
        KeyAction::MoveLeft => {
            let rail = &mut state.picker.rail;
            rail.controller.move_by(rail.viewport.as_mut(), RailDirection::Left);
        }
        KeyAction::MoveRight => {
            let rail = &mut state.picker.rail;
            rail.controller.move_by(rail.viewport.as_mut(), RailDirection::Right);
        }
        KeyAction::NextShelf => state.picker.scroll_down(1, PICKER_SCROLL_SPAN),
        KeyAction::PrevShelf => state.picker.scroll_up(1),
        KeyAction::Activate => {
            let icon = state
                .picker
                .rail
                .viewport
                .as_ref()
                .map(|viewport| first_fully_visible(viewport.offset(), ICON_STRIDE))
                .and_then(|index| state.library().icons().get(index))
                .map(|icon| icon.id().clone());
            if let Some(icon) = icon {
                // The selection callback, then back to browsing - the same
                // two steps the original host performed on icon click.
                state.icon_store.select(icon);
                state.route = Route::Browse;
            }
        }
        KeyAction::Back => state.route = Route::Browse,
        KeyAction::OpenProfilePicker | KeyAction::ToggleHelp | KeyAction::Quit => {}
    }
    state
}

/// Index of the leftmost fully visible card at a given offset.
fn first_fully_visible(offset: usize, stride: u16) -> usize {
    offset.div_ceil(usize::from(stride))
}

// ===== Tests =====

#[cfg(test)]
#[path = "command_handler_tests.rs"]
mod tests;
