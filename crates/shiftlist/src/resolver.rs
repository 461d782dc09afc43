#![forbid(unsafe_code)]

//! Release-time gesture classification.
//!
//! At pointer-up (or cancel) the drag is classified into one of four
//! outcomes from its final index delta and horizontal fling velocity, and
//! the floating snapshot gets an animation endpoint. The decision order is
//! fixed; first match wins:
//!
//! 1. **No change** — the drop index never moved beyond the tolerance.
//! 2. **Cancel offscreen** — fast horizontal fling while the drop index is
//!    outside the visible range: the snapshot flies off the right edge.
//! 3. **Cancel to origin** — fast fling with a visible drop index: the
//!    snapshot returns home.
//! 4. **Reorder** — deliberate release: the snapshot lands on the drop
//!    slot and the reorder commits.

use shiftlist_core::geometry::Vec2;

/// Classification of a completed drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    /// Drop index within tolerance of the origin; nothing changes.
    NoChange,
    /// Flung while targeting an off-screen index; snapshot exits right.
    CancelOffscreen,
    /// Flung while targeting a visible index; snapshot returns to origin.
    CancelToOrigin,
    /// Deliberate drop; the backing order is updated.
    Reorder,
}

/// Outcome of [`GestureResolver::resolve`]: the classification and the
/// endpoint the floating snapshot animates to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Outcome class.
    pub kind: ResolutionKind,
    /// Animation endpoint for the snapshot's top-left.
    pub target: Vec2,
}

/// Inputs captured at release time.
///
/// The view positions are optional because the corresponding child may
/// have been recycled out of the window; a missing endpoint degrades to
/// animating in place rather than failing.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseState {
    /// Absolute index where the drag began.
    pub original_index: usize,
    /// Absolute index of the current drop target.
    pub current_index: usize,
    /// Absolute index of the first visible row.
    pub first_visible: usize,
    /// Absolute index of the last visible row.
    pub last_visible: usize,
    /// Horizontal velocity, pixels per resolution window.
    pub velocity_x: f32,
    /// Frame origin of the original row, when still visible.
    pub original_pos: Option<Vec2>,
    /// Frame origin of the drop slot, when visible.
    pub drop_pos: Option<Vec2>,
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Current floating snapshot position.
    pub floating: Vec2,
}

/// Velocity- and position-based gesture classification policy.
///
/// The thresholds are policy, not per-gesture tunables: a host wanting a
/// different feel constructs a different resolver.
#[derive(Debug, Clone, Copy)]
pub struct GestureResolver {
    /// Fling threshold in pixels per velocity window (default: 20).
    pub velocity_threshold: f32,
    /// Index distance treated as "no change" (default: 1).
    pub index_tolerance: usize,
}

impl Default for GestureResolver {
    fn default() -> Self {
        Self {
            velocity_threshold: 20.0,
            index_tolerance: 1,
        }
    }
}

impl GestureResolver {
    /// Create a resolver with explicit thresholds.
    #[must_use]
    pub fn new(velocity_threshold: f32, index_tolerance: usize) -> Self {
        Self {
            velocity_threshold,
            index_tolerance,
        }
    }

    /// Classify a release and produce the snapshot's animation endpoint.
    #[must_use]
    pub fn resolve(&self, state: &ReleaseState) -> Resolution {
        let fling = state.velocity_x.abs() > self.velocity_threshold;
        let home = state.original_pos.unwrap_or(state.floating);

        if state.current_index.abs_diff(state.original_index) <= self.index_tolerance {
            return Resolution {
                kind: ResolutionKind::NoChange,
                target: home,
            };
        }
        if fling
            && (state.current_index < state.first_visible
                || state.current_index > state.last_visible)
        {
            return Resolution {
                kind: ResolutionKind::CancelOffscreen,
                target: Vec2::new(state.viewport_width, state.floating.y),
            };
        }
        if fling {
            return Resolution {
                kind: ResolutionKind::CancelToOrigin,
                target: home,
            };
        }
        Resolution {
            kind: ResolutionKind::Reorder,
            target: state.drop_pos.unwrap_or(state.floating),
        }
    }
}
