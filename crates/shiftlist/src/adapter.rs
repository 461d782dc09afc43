#![forbid(unsafe_code)]

//! Collaborator contracts implemented by the host list.
//!
//! The engine never touches the item storage or the render tree directly.
//! It sees the list through two narrow traits: [`ListAdapter`] for the data
//! layer (visibility marks, section metadata, the reorder commit) and
//! [`ListViewport`] for the render surface (hit testing, child frames,
//! layout mutation, snapshot capture, smooth scrolling).
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | `hit_test` misses | Pointer outside any row | Drag not initiated |
//! | `child_frame` absent | Row recycled / scrolled out | Animation or query no-ops |
//! | `capture_snapshot` fails | Host cannot rasterize the row | Drag not initiated |
//! | No header for a section | Section has no header view | Overlay unchanged |

use shiftlist_core::geometry::{RectF, Vec2};
use std::time::Duration;

/// Data-layer contract.
///
/// Indices are absolute logical item indices. Hidden rows keep their index
/// (they still count, they just contribute zero visual height).
pub trait ListAdapter {
    /// Total item count, hidden rows included.
    fn count(&self) -> usize;

    /// Mark a row as contributing zero height to layout.
    fn hide_position(&mut self, index: usize);

    /// Clear a [`hide_position`](ListAdapter::hide_position) mark.
    fn show_position(&mut self, index: usize);

    /// Tell the adapter what height an expanded placeholder slot renders at.
    fn set_placeholder_height(&mut self, height: f32);

    /// Section containing `index`.
    fn section_of(&self, index: usize) -> usize;

    /// First item index of `section`.
    fn start_index_of(&self, section: usize) -> usize;

    /// Measured height of the section's header, or `None` when the section
    /// has no header view.
    fn header_height(&self, section: usize) -> Option<f32>;

    /// Commit a reorder: the item at `from` moves to `to`.
    ///
    /// Called once per committed drag, after the resolution animation
    /// lands. Both indices are absolute and refer to the pre-move order.
    fn move_item(&mut self, from: usize, to: usize);
}

/// Render-surface contract.
///
/// Slot arguments are viewport-relative: slot 0 is the first visible row.
/// Any slot with no live child view is answered with `None` / a no-op.
pub trait ListViewport {
    /// Absolute index of the first visible row.
    fn first_visible(&self) -> usize;

    /// Absolute index of the last visible row.
    fn last_visible(&self) -> usize;

    /// Raw hit test: absolute index of the row under the point, if any.
    fn hit_test(&self, position: Vec2) -> Option<usize>;

    /// Frame of the child at a viewport-relative slot.
    fn child_frame(&self, slot: usize) -> Option<RectF>;

    /// Set the layout height of the child at a viewport-relative slot and
    /// request re-layout. No-op when the slot has no live child.
    fn set_child_height(&mut self, slot: usize, height: f32);

    /// Capture a visual snapshot of the child at a viewport-relative slot.
    ///
    /// The returned handle owns the capture; dropping it releases the
    /// underlying resource.
    fn capture_snapshot(&mut self, slot: usize) -> Option<Box<dyn RowSnapshot>>;

    /// Scroll the content by `delta` pixels (positive = down) smoothly over
    /// `duration`. Fire-and-forget; a later call supersedes the motion.
    fn smooth_scroll_by(&mut self, delta: f32, duration: Duration);
}

/// Opaque captured image of a row.
///
/// Ownership is the release contract: the engine holds the box for the
/// lifetime of one drag session and drops it on every exit path.
pub trait RowSnapshot {
    /// Size of the captured image in pixels.
    fn size(&self) -> Vec2;
}

/// Compositing surface for the engine's overlay content.
///
/// The host draws normal list content first, then hands the surface to
/// [`InteractionEngine::draw`](crate::InteractionEngine::draw), which adds
/// the header overlay and then the floating drag snapshot, in that order.
pub trait DrawSurface {
    /// Draw the header view of `section` with its top edge at `offset`
    /// (0 = flush with the viewport top, negative = partially pushed off).
    fn draw_header(&mut self, section: usize, offset: f32);

    /// Draw a captured row snapshot with its top-left at `position`.
    fn draw_snapshot(&mut self, snapshot: &dyn RowSnapshot, position: Vec2);
}
