#![forbid(unsafe_code)]

//! Drag session state.
//!
//! One value per live drag, owned by the engine as an `Option` — `None`
//! means no drag, and every per-drag field lives and dies with the value,
//! so no stale drag state can leak between gestures. The session holds the
//! captured snapshot (dropping the session releases it), the index
//! bookkeeping, the velocity tracker, and — once the pointer lifts — the
//! resolution animation.
//!
//! ## Invariants
//!
//! 1. At most one session exists at a time (enforced by the engine).
//! 2. `current_slot` is viewport-relative and strictly positive; slot
//!    changes that would violate this are ignored by the caller.
//! 3. While the session lives, the row at `original_index` is hidden in
//!    the adapter and exactly one slot is marked as the expanding
//!    placeholder; the engine clears both on close.

use crate::resolver::{Resolution, ResolutionKind};
use shiftlist_core::animation::{Animation, Tween, ease_in_out};
use shiftlist_core::geometry::Vec2;
use shiftlist_core::velocity::VelocityTracker;
use std::time::Duration;

use crate::adapter::RowSnapshot;

/// Resolution animation in flight after the pointer lifted.
#[derive(Debug)]
pub struct ResolveState {
    /// Outcome class being animated toward.
    pub kind: ResolutionKind,
    /// Floating position when the animation started.
    pub start: Vec2,
    /// Animation endpoint.
    pub target: Vec2,
    /// Absolute index the reorder commits to (meaningful for
    /// [`ResolutionKind::Reorder`] only).
    pub drop_index: usize,
    /// Progress tween, 0 → 1.
    pub progress: Tween,
}

/// Gesture lifecycle phase.
#[derive(Debug)]
pub enum DragPhase {
    /// Pointer down and moving; placeholder follows the pointer.
    Tracking,
    /// Pointer lifted; snapshot animating to its endpoint.
    Resolving(ResolveState),
}

/// All state for one live drag gesture.
pub struct DragSession {
    /// Lifecycle phase.
    pub phase: DragPhase,
    /// Absolute index where the drag began. Immutable for the session.
    pub original_index: usize,
    /// Viewport-relative slot currently acting as the drop placeholder.
    pub current_slot: usize,
    /// Top-left of the floating snapshot in viewport coordinates.
    pub floating: Vec2,
    /// Offset from the snapshot's top-left to the pointer-down point.
    pub pointer_offset: Vec2,
    /// Height of the dragged row, the placeholder expansion target.
    pub placeholder_height: f32,
    /// Captured row image. Dropped (and thereby released) with the session.
    pub snapshot: Box<dyn RowSnapshot>,
    /// Pointer samples for the release velocity estimate.
    pub velocity: VelocityTracker,
}

impl std::fmt::Debug for DragSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSession")
            .field("phase", &self.phase)
            .field("original_index", &self.original_index)
            .field("current_slot", &self.current_slot)
            .field("floating", &self.floating)
            .field("placeholder_height", &self.placeholder_height)
            .field("snapshot", &"..")
            .finish()
    }
}

impl DragSession {
    /// Open a session at pointer-down.
    ///
    /// `row_origin` is the touched row's frame origin, `pointer` the down
    /// position. The placeholder starts one slot below the touched row.
    #[must_use]
    pub fn open(
        original_index: usize,
        origin_slot: usize,
        row_origin: Vec2,
        pointer: Vec2,
        placeholder_height: f32,
        snapshot: Box<dyn RowSnapshot>,
    ) -> Self {
        Self {
            phase: DragPhase::Tracking,
            original_index,
            current_slot: origin_slot + 1,
            floating: row_origin,
            pointer_offset: pointer - row_origin,
            placeholder_height,
            snapshot,
            velocity: VelocityTracker::new(),
        }
    }

    /// Whether the session is still following the pointer.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, DragPhase::Tracking)
    }

    /// Move the floating snapshot to follow a pointer position.
    pub fn follow_pointer(&mut self, pointer: Vec2) {
        self.floating = pointer - self.pointer_offset;
    }

    /// Enter the resolving phase with a classified outcome.
    pub fn begin_resolve(&mut self, resolution: Resolution, drop_index: usize, duration: Duration) {
        self.phase = DragPhase::Resolving(ResolveState {
            kind: resolution.kind,
            start: self.floating,
            target: resolution.target,
            drop_index,
            progress: Tween::new(0.0, 1.0, duration).easing(ease_in_out),
        });
    }

    /// Advance the resolution animation.
    ///
    /// Returns the outcome once the animation lands; `None` while it is
    /// still running or when the session is not resolving.
    pub fn tick_resolve(&mut self, dt: Duration) -> Option<(ResolutionKind, usize)> {
        let DragPhase::Resolving(resolve) = &mut self.phase else {
            return None;
        };
        resolve.progress.tick(dt);
        self.floating = resolve.start.lerp(resolve.target, resolve.progress.value());
        if resolve.progress.is_complete() {
            Some((resolve.kind, resolve.drop_index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftlist_core::geometry::Vec2;

    struct NullSnapshot;

    impl RowSnapshot for NullSnapshot {
        fn size(&self) -> Vec2 {
            Vec2::new(320.0, 48.0)
        }
    }

    fn session() -> DragSession {
        DragSession::open(
            5,
            2,
            Vec2::new(0.0, 96.0),
            Vec2::new(30.0, 110.0),
            48.0,
            Box::new(NullSnapshot),
        )
    }

    #[test]
    fn open_captures_offsets() {
        let s = session();
        assert!(s.is_tracking());
        assert_eq!(s.original_index, 5);
        assert_eq!(s.current_slot, 3); // one below the touched slot
        assert_eq!(s.floating, Vec2::new(0.0, 96.0));
        assert_eq!(s.pointer_offset, Vec2::new(30.0, 14.0));
        assert_eq!(s.placeholder_height, 48.0);
    }

    #[test]
    fn follow_pointer_preserves_grab_point() {
        let mut s = session();
        s.follow_pointer(Vec2::new(50.0, 200.0));
        assert_eq!(s.floating, Vec2::new(20.0, 186.0));
    }

    #[test]
    fn resolve_animates_to_target() {
        let mut s = session();
        s.begin_resolve(
            Resolution {
                kind: ResolutionKind::Reorder,
                target: Vec2::new(0.0, 240.0),
            },
            8,
            Duration::from_millis(200),
        );
        assert!(!s.is_tracking());

        // Partway: strictly between start and target.
        assert!(s.tick_resolve(Duration::from_millis(100)).is_none());
        assert!(s.floating.y > 96.0 && s.floating.y < 240.0);

        let done = s.tick_resolve(Duration::from_millis(100));
        assert_eq!(done, Some((ResolutionKind::Reorder, 8)));
        assert_eq!(s.floating, Vec2::new(0.0, 240.0));
    }

    #[test]
    fn tick_resolve_while_tracking_is_none() {
        let mut s = session();
        assert!(s.tick_resolve(Duration::from_millis(16)).is_none());
        assert!(s.is_tracking());
    }

    #[test]
    fn resolve_to_current_position_is_stable() {
        let mut s = session();
        let here = s.floating;
        s.begin_resolve(
            Resolution {
                kind: ResolutionKind::NoChange,
                target: here,
            },
            5,
            Duration::from_millis(200),
        );
        s.tick_resolve(Duration::from_millis(100));
        assert_eq!(s.floating, here);
    }
}
