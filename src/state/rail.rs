//! Horizontal rail controller (pure).
//!
//! Owns the command/drag logic for one carousel rail: page-wise movement
//! with wraparound at the left edge, a sticky interacted flag that reveals
//! the directional controls, and a pointer-drag session that maps column
//! deltas onto the viewport without smoothing.
//!
//! The controller is independent of rendering: it talks to the rail's
//! geometry through the [`Viewport`] trait and tolerates the viewport not
//! existing yet (nothing has been measured before the first render), in
//! which case every operation is a silent no-op.

/// Horizontal movement command for a rail.
///
/// Invalid directions are unrepresentable; there is no runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailDirection {
    /// Toward the start of the strip (earlier items).
    Left,
    /// Toward the end of the strip (later items).
    Right,
}

/// Scrollable window onto a rail's content strip.
///
/// Implementations own clamping: offsets passed to `scroll_to` may exceed
/// the scrollable range and must be clamped to
/// `[0, content_width - visible_width]`.
pub trait Viewport {
    /// Current offset - the position the rail is settling toward.
    fn offset(&self) -> usize;

    /// Width of the visible window, in columns.
    fn visible_width(&self) -> usize;

    /// Total width of the content strip, in columns.
    fn content_width(&self) -> usize;

    /// Request a scroll to `offset`. `smooth` requests an animated glide;
    /// the call is fire-and-forget either way, and a new request simply
    /// re-targets any glide still in flight.
    fn scroll_to(&mut self, offset: usize, smooth: bool);
}

/// Transient state tracking an in-progress pointer drag.
///
/// Created on pointer down, mutated on pointer move, consumed and discarded
/// on pointer up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    start_offset: usize,
    start_column: u16,
    travel: u16,
}

impl DragSession {
    /// Viewport offset captured at pointer down.
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// Pointer column captured at pointer down.
    pub fn start_column(&self) -> u16 {
        self.start_column
    }

    /// Largest column distance the pointer travelled from its start.
    ///
    /// Used by the host to disambiguate a drag from a click on release.
    pub fn travel(&self) -> u16 {
        self.travel
    }
}

/// Controller for one horizontal rail.
///
/// At most one drag session is active per controller instance; the
/// `Option` enforces the invariant. All mutation happens on the UI event
/// thread - no sharing across rails, no locking.
///
/// # Wraparound policy
///
/// A Left command at offset 0 wraps to the far right end. The wrap target
/// is the clamped maximum offset (`content_width - visible_width`), so
/// every offset this controller emits is a valid scroll position; the wrap
/// still lands on the last page, which is what sustains the endless-loop
/// feel. The edge test runs against the pre-move offset, and the wrap
/// replaces the computed target entirely - it never re-wraps iteratively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RailController {
    drag: Option<DragSession>,
    interacted: bool,
}

impl RailController {
    /// Create a controller with no drag in progress and controls hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the rail by one viewport width in `direction`.
    ///
    /// Requests the transition as a smooth scroll and returns the target
    /// offset. Marks the rail as interacted (see [`is_scrollable`]).
    ///
    /// Returns `None` without side effects when the viewport has not been
    /// measured yet.
    ///
    /// [`is_scrollable`]: RailController::is_scrollable
    pub fn move_by<V: Viewport>(
        &mut self,
        viewport: Option<&mut V>,
        direction: RailDirection,
    ) -> Option<usize> {
        let viewport = viewport?;
        self.interacted = true;

        let offset = viewport.offset();
        let width = viewport.visible_width();
        let max = max_offset(viewport);

        let target = match direction {
            // At the left edge: wrap to the far end instead of clamping to 0.
            RailDirection::Left if offset == 0 => max,
            RailDirection::Left => offset.saturating_sub(width),
            RailDirection::Right => offset.saturating_add(width).min(max),
        };

        viewport.scroll_to(target, true);
        Some(target)
    }

    /// Whether directional controls should be shown.
    ///
    /// Sticky: false until the first move command is issued, true ever
    /// after - including after the offset returns to 0. The flag reveals
    /// controls on first interaction; it does not track content overflow.
    pub fn is_scrollable(&self) -> bool {
        self.interacted
    }

    /// Open a drag session capturing the current offset and pointer column.
    ///
    /// Silent no-op when the viewport has not been measured yet (the
    /// normal pre-first-render race, not a caller mistake). A pointer down
    /// during an active session re-captures: a stale session can only
    /// linger if a release event was lost, and re-capturing recovers.
    pub fn begin_drag<V: Viewport>(&mut self, viewport: Option<&V>, column: u16) {
        let Some(viewport) = viewport else { return };
        self.drag = Some(DragSession {
            start_offset: viewport.offset(),
            start_column: column,
            travel: 0,
        });
    }

    /// Track a pointer move while a drag session is active.
    ///
    /// Applies `start_offset - (column - start_column)` to the viewport
    /// immediately, without smoothing - drag tracking must feel direct,
    /// unlike commanded moves. Content follows the pointer: dragging
    /// rightward pulls earlier cards back into view. Saturates below zero;
    /// the viewport clamps the upper bound.
    ///
    /// No-op when no session is active or the viewport is absent.
    pub fn update_drag<V: Viewport>(&mut self, viewport: Option<&mut V>, column: u16) {
        let Some(viewport) = viewport else { return };
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        let delta = i64::from(column) - i64::from(drag.start_column);
        let target = (drag.start_offset as i64 - delta).max(0) as usize;

        let moved = delta.unsigned_abs().min(u64::from(u16::MAX)) as u16;
        drag.travel = drag.travel.max(moved);

        viewport.scroll_to(target, false);
    }

    /// Close the drag session, returning it for inspection.
    ///
    /// The rail stays wherever the drag left it - no inertia. The host
    /// reads [`DragSession::travel`] off the returned session to decide
    /// whether the gesture was a drag or a click. Returns `None` when no
    /// session was active.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        self.drag.take()
    }

    /// Whether a drag session is currently active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

/// Largest valid scroll offset for a viewport.
pub fn max_offset<V: Viewport + ?Sized>(viewport: &V) -> usize {
    viewport.content_width().saturating_sub(viewport.visible_width())
}

// ===== Tests =====

#[cfg(test)]
#[path = "rail_tests.rs"]
mod tests;
