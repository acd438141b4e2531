//! Scroll-edge derivation for the table viewport.
//!
//! Four booleans say whether the viewport sits flush against each edge of
//! its content. They exist purely to toggle visual affordances: an edge
//! whose flag is false has content clipped in that direction and gets a
//! shadow marker.

/// At-edge flags for a scrollable viewport.
///
/// `at_top == true` means nothing is clipped above, so no top shadow is
/// needed. The default is all-at-edge (no shadows anywhere).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEdges {
    pub at_top: bool,
    pub at_bottom: bool,
    pub at_left: bool,
    pub at_right: bool,
}

impl Default for ScrollEdges {
    fn default() -> Self {
        Self::all_at_edge()
    }
}

impl ScrollEdges {
    /// All four flags set: no overflow anywhere, no shadows.
    ///
    /// Also used while a data load is in flight, since the displayed
    /// content is about to change.
    pub fn all_at_edge() -> Self {
        Self {
            at_top: true,
            at_bottom: true,
            at_left: true,
            at_right: true,
        }
    }

    /// Derive the flags from content size, viewport size, and scroll offset.
    ///
    /// Sizes are measured values; the end-of-axis comparison rounds both
    /// sides so sub-cell layout jitter cannot flicker the flag.
    pub fn compute(
        content: (f64, f64),
        viewport: (f64, f64),
        offset: (f64, f64),
    ) -> Self {
        let (at_left, at_right) = axis(content.0, viewport.0, offset.0);
        let (at_top, at_bottom) = axis(content.1, viewport.1, offset.1);
        Self {
            at_top,
            at_bottom,
            at_left,
            at_right,
        }
    }

    /// Whether a shadow should be drawn above the viewport.
    pub fn shadow_top(&self) -> bool {
        !self.at_top
    }

    /// Whether a shadow should be drawn below the viewport.
    pub fn shadow_bottom(&self) -> bool {
        !self.at_bottom
    }

    /// Whether a shadow should be drawn at the left edge.
    pub fn shadow_left(&self) -> bool {
        !self.at_left
    }

    /// Whether a shadow should be drawn at the right edge.
    pub fn shadow_right(&self) -> bool {
        !self.at_right
    }
}

/// At-start/at-end flags for one axis.
fn axis(content: f64, viewport: f64, offset: f64) -> (bool, bool) {
    if content <= viewport {
        // No overflow: both edges count as reached.
        return (true, true);
    }
    let at_start = offset == 0.0;
    let at_end = (content - offset).round() == viewport.round();
    (at_start, at_end)
}
