//! Acceptance tests for the profile picker page.

use crate::state::profile::IconStore;
use crate::state::{Route, Viewport};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

fn catalog() -> Vec<String> {
    let mut lines = vec![
        r#"{"type":"show","id":"tt1","title":"Alpha Zero","shelf":"trending"}"#.to_string(),
    ];
    for i in 0..8 {
        lines.push(format!(
            r#"{{"type":"icon","id":"classic-{i}","title":"Classic {i}","href":"/icons/{i}.png"}}"#
        ));
    }
    lines
}

fn picker_harness() -> AcceptanceTestHarness {
    let lines = catalog();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut harness = AcceptanceTestHarness::from_catalog(&refs);
    harness.key(KeyCode::Char('p'));
    harness
}

#[test]
fn p_opens_the_picker() {
    let harness = picker_harness();

    assert_eq!(harness.state().route, Route::ProfilePicker);
    let screen = harness.screen();
    assert!(screen.contains("Edit Profile"));
    assert!(screen.contains("Choose a profile icon."));
    assert!(screen.contains("The Classics"));
    assert!(screen.contains("Classic 0"));
}

#[test]
fn esc_returns_to_browse() {
    let mut harness = picker_harness();
    harness.key(KeyCode::Esc);

    assert_eq!(harness.state().route, Route::Browse);
    assert!(harness.screen().contains("Trending (1)"));
}

#[test]
fn vertical_scroll_restyles_the_header() {
    let mut harness = picker_harness();
    assert!(!harness.state().picker.is_scrolled());

    harness.key(KeyCode::Char('j'));
    assert!(harness.state().picker.is_scrolled());

    harness.key(KeyCode::Char('k'));
    assert!(!harness.state().picker.is_scrolled(), "derived, not sticky");
}

#[test]
fn enter_selects_first_visible_icon_and_returns() {
    let mut harness = picker_harness();
    harness.key(KeyCode::Enter);

    assert_eq!(harness.state().route, Route::Browse);
    assert_eq!(
        harness.state().icon_store.selected().unwrap().as_str(),
        "classic-0"
    );
    // The header now carries the selection.
    assert!(harness.screen().contains("✦ classic-0"));
}

#[test]
fn click_selects_the_icon_under_the_pointer() {
    let mut harness = picker_harness();
    // Icon strip starts at column 1, row 6; icon 1 spans columns 17-30.
    harness.mouse_down(20, 8).mouse_up(20, 8);

    assert_eq!(harness.state().route, Route::Browse);
    assert_eq!(
        harness.state().icon_store.selected().unwrap().as_str(),
        "classic-1"
    );
}

#[test]
fn dragging_the_icon_strip_scrolls_without_selecting() {
    let mut harness = picker_harness();
    harness.mouse_down(20, 8).mouse_drag(5, 8).mouse_up(5, 8);

    assert_eq!(harness.state().route, Route::ProfilePicker);
    assert!(harness.state().icon_store.selected().is_none());

    let offset = harness
        .state()
        .picker
        .rail
        .viewport
        .as_ref()
        .unwrap()
        .offset();
    assert_eq!(offset, 15);
}

#[test]
fn move_right_pages_the_icon_strip() {
    let mut harness = picker_harness();
    harness.key(KeyCode::Char('l')).settle();

    let offset = harness
        .state()
        .picker
        .rail
        .viewport
        .as_ref()
        .unwrap()
        .offset();
    // 8 icons on a 16-column stride: content 126, strip 98 → the page
    // clamps to the 28-column maximum.
    assert_eq!(offset, 28);
    assert!(harness.state().picker.rail.controller.is_scrollable());
}

#[test]
fn reselection_replaces_previous_icon() {
    let mut harness = picker_harness();
    harness.mouse_down(20, 8).mouse_up(20, 8);
    harness.key(KeyCode::Char('p'));
    harness.mouse_down(3, 8).mouse_up(3, 8);

    assert_eq!(
        harness.state().icon_store.selected().unwrap().as_str(),
        "classic-0"
    );
    assert!(harness.screen().contains("✦ classic-0"));
}
