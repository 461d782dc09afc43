#![forbid(unsafe_code)]

//! Sticky section header overlay.
//!
//! On every scroll notification the controller recomputes which section
//! header floats at the top of the viewport and how far it has been pushed
//! off by the next section's incoming header. Only the first visible row's
//! section and its immediate neighbor are ever queried, so the cost per
//! scroll tick is independent of list length.
//!
//! Three mutually exclusive branches per notification:
//!
//! - first visible row *is* a section boundary → adopt that section's
//!   header, flush at the top;
//! - scrolled backward past the overlay's section → drop the overlay and
//!   re-anchor to the lower section so the next notification re-evaluates;
//! - steady state inside the overlay's section → push the overlay up by
//!   exactly the overlap once the next header's top crosses the overlay
//!   height (plus a small seam allowance).

use crate::adapter::{ListAdapter, ListViewport};

/// Currently displayed header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShownHeader {
    /// Section whose header is displayed.
    pub section: usize,
    /// Measured header height in pixels.
    pub height: f32,
}

/// Overlay state: which header shows and where.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderOverlay {
    /// Section the overlay is anchored to, `None` before the first
    /// boundary crossing. Tracked even while no header is displayed.
    pub current_section: Option<usize>,
    /// Displayed header, if any.
    pub shown: Option<ShownHeader>,
    /// Vertical offset: 0 = flush at the top, negative = partially pushed
    /// off by the incoming next header.
    pub offset: f32,
}

/// Recomputes the header overlay from scroll position.
#[derive(Debug, Default)]
pub struct StickyHeaderController {
    overlay: HeaderOverlay,
    gap: f32,
}

impl StickyHeaderController {
    /// Create a controller with the given seam allowance between the
    /// overlay and the incoming next header.
    #[must_use]
    pub fn new(gap: f32) -> Self {
        Self {
            overlay: HeaderOverlay::default(),
            gap,
        }
    }

    /// Current overlay state.
    #[must_use]
    pub fn overlay(&self) -> &HeaderOverlay {
        &self.overlay
    }

    /// Forget all overlay state (widget detached or data reset).
    pub fn reset(&mut self) {
        self.overlay = HeaderOverlay::default();
    }

    /// Recompute the overlay for a scroll notification.
    ///
    /// Returns `true` when the overlay changed and a redraw is needed.
    pub fn on_scroll(
        &mut self,
        first_visible: usize,
        adapter: &dyn ListAdapter,
        viewport: &dyn ListViewport,
    ) -> bool {
        let section = adapter.section_of(first_visible);

        if adapter.start_index_of(section) == first_visible {
            // The boundary row itself is at the top: adopt its header.
            let Some(height) = adapter.header_height(section) else {
                return false;
            };
            let next = HeaderOverlay {
                current_section: Some(section),
                shown: Some(ShownHeader { section, height }),
                offset: 0.0,
            };
            return self.replace(next);
        }

        if self.overlay.current_section.is_some_and(|c| c > section) {
            // Scrolled backward past the overlay's section.
            let next = HeaderOverlay {
                current_section: Some(section),
                shown: None,
                offset: 0.0,
            };
            return self.replace(next);
        }

        if self.overlay.current_section == Some(section) {
            // Steady state: push off as the next header approaches.
            let Some(shown) = self.overlay.shown else {
                return false;
            };
            if adapter.header_height(section + 1).is_none() {
                return false;
            }
            let next_start = adapter.start_index_of(section + 1);
            let Some(slot) = next_start.checked_sub(first_visible) else {
                return false;
            };
            let Some(frame) = viewport.child_frame(slot) else {
                return false;
            };
            let limit = shown.height + self.gap;
            let offset = if frame.y < limit { frame.y - limit } else { 0.0 };
            if (offset - self.overlay.offset).abs() < f32::EPSILON {
                return false;
            }
            self.overlay.offset = offset;
            #[cfg(feature = "tracing")]
            tracing::trace!(section, offset, "header push-off");
            return true;
        }

        false
    }

    fn replace(&mut self, next: HeaderOverlay) -> bool {
        if next == self.overlay {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            section = ?next.current_section,
            shown = next.shown.is_some(),
            "header overlay updated"
        );
        self.overlay = next;
        true
    }
}
