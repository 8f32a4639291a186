//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to mouse events.
//! The pointer adapter for the rails lives here: pointer down on a strip
//! begins a drag session, drags track it, and release either ends a drag
//! or - when the pointer barely travelled - activates the card under it.

use crate::model::KeyAction;
use crate::state::command_handler::handle_key_action;
use crate::state::modal::{self, ModalStore};
use crate::state::profile::IconStore;
use crate::state::rail::RailDirection;
use crate::state::{AppState, DragTarget, Route};
use crate::view::constants::{
    CARD_STRIDE, CARD_WIDTH, DRAG_CLICK_THRESHOLD, ICON_STRIDE, ICON_WIDTH,
};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Strip areas recorded at render time, for mapping pointer positions to
/// rails and cards.
///
/// The view rebuilds this every draw; the handlers only read it.
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    /// Shelf index → rail strip area (browse route).
    pub shelf_strips: Vec<(usize, Rect)>,
    /// Icon strip area (picker route).
    pub icon_strip: Option<Rect>,
}

impl HitRegions {
    /// The drag target under a pointer position, if any.
    fn target_at(&self, column: u16, row: u16) -> Option<DragTarget> {
        if let Some(strip) = self.icon_strip {
            if contains(strip, column, row) {
                return Some(DragTarget::PickerIcons);
            }
        }
        self.shelf_strips
            .iter()
            .find(|(_, strip)| contains(*strip, column, row))
            .map(|(index, _)| DragTarget::Shelf(*index))
    }

    /// The strip area for a drag target, if it was rendered last frame.
    fn strip_for(&self, target: DragTarget) -> Option<Rect> {
        match target {
            DragTarget::Shelf(index) => self
                .shelf_strips
                .iter()
                .find(|(i, _)| *i == index)
                .map(|(_, strip)| *strip),
            DragTarget::PickerIcons => self.icon_strip,
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

/// Handle a mouse event and update AppState accordingly.
///
/// # Behavior
/// - Left down on a strip opens a drag session on that rail
/// - Left drag tracks the session (even after leaving the strip)
/// - Left up closes the session; travel under the click threshold makes
///   the gesture a click, activating the card under the pointer
/// - Horizontal wheel maps to move commands on the rail under the pointer
/// - Vertical wheel moves shelf focus (browse) or scrolls the page (picker)
/// - All mouse input is ignored while the modal or help overlay is up
pub fn handle_mouse_event(mut state: AppState, event: MouseEvent, regions: &HitRegions) -> AppState {
    if state.help_visible || (state.route == Route::Browse && state.modal.is_open()) {
        return state;
    }

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(target) = regions.target_at(event.column, event.row) {
                state.drag_target = Some(target);
                if let Some(rail) = state.rail_for_target_mut(target) {
                    rail.controller.begin_drag(rail.viewport.as_ref(), event.column);
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(target) = state.drag_target {
                if let Some(rail) = state.rail_for_target_mut(target) {
                    rail.controller.update_drag(rail.viewport.as_mut(), event.column);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(target) = state.drag_target.take() {
                let session = state
                    .rail_for_target_mut(target)
                    .and_then(|rail| rail.controller.end_drag());
                let is_click =
                    session.is_some_and(|session| session.travel() < DRAG_CLICK_THRESHOLD);
                if is_click {
                    state = activate_at(state, target, event.column, regions);
                }
            }
        }
        MouseEventKind::ScrollRight => {
            state = wheel_move(state, regions, event, RailDirection::Right);
        }
        MouseEventKind::ScrollLeft => {
            state = wheel_move(state, regions, event, RailDirection::Left);
        }
        MouseEventKind::ScrollDown => {
            state = handle_key_action(state, KeyAction::NextShelf);
        }
        MouseEventKind::ScrollUp => {
            state = handle_key_action(state, KeyAction::PrevShelf);
        }
        _ => {}
    }

    state
}

/// Apply a horizontal wheel tick as a move command.
///
/// Targets the rail under the pointer, falling back to the focused rail.
fn wheel_move(
    mut state: AppState,
    regions: &HitRegions,
    event: MouseEvent,
    direction: RailDirection,
) -> AppState {
    let target = regions
        .target_at(event.column, event.row)
        .or(match state.route {
            Route::Browse => Some(DragTarget::Shelf(state.selected_shelf)),
            Route::ProfilePicker => Some(DragTarget::PickerIcons),
        });
    if let Some(rail) = target.and_then(|t| state.rail_for_target_mut(t)) {
        rail.controller.move_by(rail.viewport.as_mut(), direction);
    }
    state
}

/// Activate the card under the pointer after a click-sized release.
fn activate_at(mut state: AppState, target: DragTarget, column: u16, regions: &HitRegions) -> AppState {
    let Some(strip) = regions.strip_for(target) else {
        return state;
    };

    match target {
        DragTarget::Shelf(index) => {
            let card = state
                .rail(index)
                .and_then(|rail| rail.viewport.as_ref())
                .and_then(|viewport| {
                    card_at(strip, viewport.render_offset(), column, CARD_STRIDE, CARD_WIDTH)
                });
            let show = card.and_then(|card| {
                state
                    .library()
                    .shelf(index)
                    .and_then(|shelf| shelf.shows().get(card))
                    .cloned()
            });
            if let Some(show) = show {
                modal::present(&mut state.modal, show);
            }
        }
        DragTarget::PickerIcons => {
            let icon = state
                .picker
                .rail
                .viewport
                .as_ref()
                .and_then(|viewport| {
                    card_at(strip, viewport.render_offset(), column, ICON_STRIDE, ICON_WIDTH)
                })
                .and_then(|index| state.library().icons().get(index))
                .map(|icon| icon.id().clone());
            if let Some(icon) = icon {
                state.icon_store.select(icon);
                state.route = Route::Browse;
            }
        }
    }

    state
}

/// Map a pointer column inside a strip to a card index.
///
/// Returns `None` for positions outside the strip or in the gap between
/// cards.
fn card_at(strip: Rect, render_offset: usize, column: u16, stride: u16, width: u16) -> Option<usize> {
    if column < strip.x || column >= strip.x + strip.width {
        return None;
    }
    let rel = render_offset + usize::from(column - strip.x);
    let index = rel / usize::from(stride);
    let within = rel % usize::from(stride);
    (within < usize::from(width)).then_some(index)
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
