//! Measured rail viewport with glide animation.
//!
//! `RailViewport` is the concrete window onto one rail's content strip.
//! It is created the first time the rail is rendered (geometry cannot be
//! known before then) and re-measured on resize.
//!
//! Smooth scrolls are realized as a displacement that decays toward zero
//! with exponential ease-out: each frame the remaining displacement is
//! multiplied by a damping factor, so cards slide fast at first and settle
//! gently. The logical offset jumps to the target immediately; only the
//! drawn position lags. Immediate writes (drag tracking) cancel the glide.

use crate::state::rail::{max_offset, Viewport};

/// Damping applied per animation frame: `glide *= 1 - GLIDE_DECAY`.
/// Tuned for the 50ms frame cadence of the event loop's animation timer.
const GLIDE_DECAY: f64 = 0.35;

/// Displacement below which the glide snaps to settled.
const GLIDE_EPSILON: f64 = 0.5;

/// Measured geometry and scroll position of one rail.
#[derive(Debug, Clone, PartialEq)]
pub struct RailViewport {
    offset: usize,
    visible_width: usize,
    content_width: usize,
    /// Remaining drawn displacement from `offset`, in columns.
    glide: f64,
}

impl RailViewport {
    /// Create a viewport from measured geometry, at rest at offset 0.
    pub fn new(visible_width: usize, content_width: usize) -> Self {
        Self {
            offset: 0,
            visible_width,
            content_width,
            glide: 0.0,
        }
    }

    /// Re-measure after a layout change, re-clamping the offset.
    ///
    /// A shrunken strip can leave the offset beyond the new maximum; the
    /// glide is dropped so the rail lands on the re-clamped position
    /// without sliding through stale geometry.
    pub fn set_extent(&mut self, visible_width: usize, content_width: usize) {
        if visible_width == self.visible_width && content_width == self.content_width {
            return;
        }
        self.visible_width = visible_width;
        self.content_width = content_width;
        let max = self.content_width.saturating_sub(self.visible_width);
        self.offset = self.offset.min(max);
        self.glide = 0.0;
    }

    /// The position actually drawn this frame: logical offset plus the
    /// transient glide displacement, clamped to the scrollable range.
    pub fn render_offset(&self) -> usize {
        let drawn = self.offset as f64 + self.glide;
        let max = max_offset(self) as f64;
        drawn.clamp(0.0, max).round() as usize
    }

    /// Whether a glide is still in flight.
    pub fn is_animating(&self) -> bool {
        self.glide != 0.0
    }

    /// Decay the glide toward zero. Call once per animation frame.
    ///
    /// Returns true while motion remains (the caller keeps the fast frame
    /// timer running only as long as some rail reports motion).
    pub fn tick(&mut self) -> bool {
        self.glide *= 1.0 - GLIDE_DECAY;
        if self.glide.abs() < GLIDE_EPSILON {
            self.glide = 0.0;
        }
        self.is_animating()
    }
}

impl Viewport for RailViewport {
    fn offset(&self) -> usize {
        self.offset
    }

    fn visible_width(&self) -> usize {
        self.visible_width
    }

    fn content_width(&self) -> usize {
        self.content_width
    }

    fn scroll_to(&mut self, offset: usize, smooth: bool) {
        let max = self.content_width.saturating_sub(self.visible_width);
        let target = offset.min(max);
        if smooth {
            // Keep the drawn position continuous: the displacement absorbs
            // the jump of the logical offset, then decays. Re-targeting an
            // in-flight glide folds into the same displacement.
            self.glide += self.offset as f64 - target as f64;
        } else {
            self.glide = 0.0;
        }
        self.offset = target;
    }
}
