//! Tests for the rail controller.

use super::*;

// ===== Test Helpers =====

/// Minimal viewport capturing the requests made against it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TestViewport {
    offset: usize,
    visible: usize,
    content: usize,
    last_smooth: Option<bool>,
    request_count: usize,
}

impl TestViewport {
    fn new(offset: usize, visible: usize, content: usize) -> Self {
        Self {
            offset,
            visible,
            content,
            last_smooth: None,
            request_count: 0,
        }
    }
}

impl Viewport for TestViewport {
    fn offset(&self) -> usize {
        self.offset
    }

    fn visible_width(&self) -> usize {
        self.visible
    }

    fn content_width(&self) -> usize {
        self.content
    }

    fn scroll_to(&mut self, offset: usize, smooth: bool) {
        self.offset = offset.min(max_offset(self));
        self.last_smooth = Some(smooth);
        self.request_count += 1;
    }
}

// ===== move_by =====

#[test]
fn move_right_advances_one_viewport_width() {
    let mut viewport = TestViewport::new(0, 300, 1200);
    let mut rail = RailController::new();

    let target = rail.move_by(Some(&mut viewport), RailDirection::Right);

    assert_eq!(target, Some(300));
    assert_eq!(viewport.offset, 300);
}

#[test]
fn move_right_clamps_at_max_offset() {
    let mut viewport = TestViewport::new(800, 300, 1200);
    let mut rail = RailController::new();

    let target = rail.move_by(Some(&mut viewport), RailDirection::Right);

    // max offset is 1200 - 300 = 900
    assert_eq!(target, Some(900));
}

#[test]
fn move_right_at_max_stays_at_max() {
    let mut viewport = TestViewport::new(900, 300, 1200);
    let mut rail = RailController::new();

    let target = rail.move_by(Some(&mut viewport), RailDirection::Right);

    assert_eq!(target, Some(900));
}

#[test]
fn move_left_retreats_one_viewport_width() {
    let mut viewport = TestViewport::new(600, 300, 1200);
    let mut rail = RailController::new();

    let target = rail.move_by(Some(&mut viewport), RailDirection::Left);

    assert_eq!(target, Some(300));
}

#[test]
fn move_left_saturates_at_zero_when_offset_positive() {
    // offset > 0 never wraps, even when the step overshoots the left edge
    let mut viewport = TestViewport::new(100, 300, 1200);
    let mut rail = RailController::new();

    let target = rail.move_by(Some(&mut viewport), RailDirection::Left);

    assert_eq!(target, Some(0));
}

#[test]
fn move_left_at_left_edge_wraps_to_far_end() {
    let mut viewport = TestViewport::new(0, 300, 1200);
    let mut rail = RailController::new();

    let target = rail.move_by(Some(&mut viewport), RailDirection::Left);

    // Wrap target is the clamped maximum, not raw content width.
    assert_eq!(target, Some(900));
    assert_eq!(viewport.request_count, 1, "wrap is a single request");
}

#[test]
fn move_right_at_left_edge_does_not_wrap() {
    let mut viewport = TestViewport::new(0, 300, 1200);
    let mut rail = RailController::new();

    let target = rail.move_by(Some(&mut viewport), RailDirection::Right);

    assert_eq!(target, Some(300));
}

#[test]
fn moves_request_smooth_scrolls() {
    let mut viewport = TestViewport::new(0, 300, 1200);
    let mut rail = RailController::new();

    rail.move_by(Some(&mut viewport), RailDirection::Right);

    assert_eq!(viewport.last_smooth, Some(true));
}

#[test]
fn move_without_viewport_is_noop() {
    let mut rail = RailController::new();

    let target = rail.move_by(None::<&mut TestViewport>, RailDirection::Right);

    assert_eq!(target, None);
    assert!(!rail.is_scrollable(), "no-op must not set the sticky flag");
}

#[test]
fn worked_example_right_right_then_left_three_times() {
    // visible=300, content=1200, starting at rest.
    let mut viewport = TestViewport::new(0, 300, 1200);
    let mut rail = RailController::new();

    assert_eq!(rail.move_by(Some(&mut viewport), RailDirection::Right), Some(300));
    assert_eq!(rail.move_by(Some(&mut viewport), RailDirection::Right), Some(600));
    assert_eq!(rail.move_by(Some(&mut viewport), RailDirection::Left), Some(300));
    assert_eq!(rail.move_by(Some(&mut viewport), RailDirection::Left), Some(0));
    // At the edge: wrap to the clamped far end.
    assert_eq!(rail.move_by(Some(&mut viewport), RailDirection::Left), Some(900));
}

#[test]
fn content_narrower_than_viewport_pins_offset_to_zero() {
    let mut viewport = TestViewport::new(0, 300, 200);
    let mut rail = RailController::new();

    assert_eq!(rail.move_by(Some(&mut viewport), RailDirection::Right), Some(0));
    // Left at the edge wraps - to a max offset of 0.
    assert_eq!(rail.move_by(Some(&mut viewport), RailDirection::Left), Some(0));
}

// ===== is_scrollable =====

#[test]
fn is_scrollable_false_before_any_move() {
    let rail = RailController::new();
    assert!(!rail.is_scrollable());
}

#[test]
fn is_scrollable_true_after_one_move() {
    let mut viewport = TestViewport::new(0, 300, 1200);
    let mut rail = RailController::new();

    rail.move_by(Some(&mut viewport), RailDirection::Right);

    assert!(rail.is_scrollable());
}

#[test]
fn is_scrollable_sticky_after_offset_returns_to_zero() {
    let mut viewport = TestViewport::new(0, 300, 1200);
    let mut rail = RailController::new();

    rail.move_by(Some(&mut viewport), RailDirection::Right);
    rail.move_by(Some(&mut viewport), RailDirection::Left);
    assert_eq!(viewport.offset, 0);

    assert!(rail.is_scrollable());
}

#[test]
fn drag_alone_does_not_reveal_controls() {
    // Only move commands flip the sticky flag.
    let mut viewport = TestViewport::new(0, 300, 1200);
    let mut rail = RailController::new();

    rail.begin_drag(Some(&viewport), 50);
    rail.update_drag(Some(&mut viewport), 40);
    rail.end_drag();

    assert!(!rail.is_scrollable());
}

// ===== drag =====

#[test]
fn drag_follows_worked_example() {
    // start_offset=50, begin at column 100, move to 130 → request 20.
    let mut viewport = TestViewport::new(50, 300, 1200);
    let mut rail = RailController::new();

    rail.begin_drag(Some(&viewport), 100);
    rail.update_drag(Some(&mut viewport), 130);

    assert_eq!(viewport.offset, 20);
    assert_eq!(viewport.last_smooth, Some(false), "drag tracking is immediate");
}

#[test]
fn drag_left_reveals_later_items() {
    // Pointer moving left (delta negative) pushes the offset up.
    let mut viewport = TestViewport::new(50, 300, 1200);
    let mut rail = RailController::new();

    rail.begin_drag(Some(&viewport), 100);
    rail.update_drag(Some(&mut viewport), 60);

    assert_eq!(viewport.offset, 90);
}

#[test]
fn drag_saturates_below_zero() {
    let mut viewport = TestViewport::new(10, 300, 1200);
    let mut rail = RailController::new();

    rail.begin_drag(Some(&viewport), 0);
    rail.update_drag(Some(&mut viewport), 200);

    assert_eq!(viewport.offset, 0);
}

#[test]
fn update_drag_without_begin_is_noop() {
    let mut viewport = TestViewport::new(50, 300, 1200);
    let mut rail = RailController::new();

    rail.update_drag(Some(&mut viewport), 130);

    assert_eq!(viewport.offset, 50);
    assert_eq!(viewport.request_count, 0);
}

#[test]
fn begin_drag_without_viewport_is_noop() {
    let mut rail = RailController::new();

    rail.begin_drag(None::<&TestViewport>, 100);

    assert!(!rail.is_dragging());
    assert_eq!(rail.end_drag(), None);
}

#[test]
fn drag_updates_relative_to_session_start_not_previous_position() {
    let mut viewport = TestViewport::new(100, 300, 1200);
    let mut rail = RailController::new();

    rail.begin_drag(Some(&viewport), 50);
    rail.update_drag(Some(&mut viewport), 60);
    assert_eq!(viewport.offset, 90);
    rail.update_drag(Some(&mut viewport), 55);
    assert_eq!(viewport.offset, 95, "each update derives from the captured start");
}

#[test]
fn end_drag_consumes_the_session() {
    let mut viewport = TestViewport::new(50, 300, 1200);
    let mut rail = RailController::new();

    rail.begin_drag(Some(&viewport), 100);
    assert!(rail.is_dragging());

    let session = rail.end_drag().expect("session was active");
    assert_eq!(session.start_offset(), 50);
    assert_eq!(session.start_column(), 100);
    assert!(!rail.is_dragging());

    // Discarded: updates after release do nothing.
    rail.update_drag(Some(&mut viewport), 200);
    assert_eq!(viewport.offset, 50);
}

#[test]
fn travel_records_farthest_excursion() {
    let mut viewport = TestViewport::new(50, 300, 1200);
    let mut rail = RailController::new();

    rail.begin_drag(Some(&viewport), 100);
    rail.update_drag(Some(&mut viewport), 110);
    rail.update_drag(Some(&mut viewport), 95);
    rail.update_drag(Some(&mut viewport), 102);

    let session = rail.end_drag().unwrap();
    assert_eq!(session.travel(), 10, "travel keeps the max, not the last delta");
}

#[test]
fn stationary_release_has_zero_travel() {
    let mut viewport = TestViewport::new(50, 300, 1200);
    let mut rail = RailController::new();

    rail.begin_drag(Some(&viewport), 100);
    rail.update_drag(Some(&mut viewport), 100);

    let session = rail.end_drag().unwrap();
    assert_eq!(session.travel(), 0);
}

#[test]
fn begin_drag_during_active_session_recaptures() {
    let mut viewport = TestViewport::new(50, 300, 1200);
    let mut rail = RailController::new();

    rail.begin_drag(Some(&viewport), 100);
    rail.update_drag(Some(&mut viewport), 120);

    // Second pointer down re-captures from the current position.
    rail.begin_drag(Some(&viewport), 10);
    let session = rail.end_drag().unwrap();
    assert_eq!(session.start_offset(), 30);
    assert_eq!(session.start_column(), 10);
    assert_eq!(session.travel(), 0);
}
