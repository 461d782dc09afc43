#![forbid(unsafe_code)]

//! Composition root: routes pointer and scroll events to the drag session
//! and the sticky header, and drives all animation from one frame clock.
//!
//! # Event flow
//!
//! - pointer-down inside the handle strip over a live row → open a
//!   [`DragSession`]: capture the row snapshot, hide the original row,
//!   start expanding the placeholder one slot below.
//! - pointer-move → follow the pointer, re-map the drop index, toggle the
//!   placeholder between slots, and nudge the scroll offset near the
//!   viewport edges.
//! - pointer-up/cancel → finalize the velocity estimate, collapse the
//!   placeholder, classify the outcome, and animate the snapshot to its
//!   endpoint.
//! - [`InteractionEngine::tick`] → advance placeholder and resolution
//!   tweens; when the resolution lands, close the session: re-show the
//!   original row, commit the reorder if that was the outcome, drop the
//!   snapshot.
//!
//! Scroll notifications (including those caused by auto-scroll) feed the
//! sticky header independently of drag state.
//!
//! ## Invariants
//!
//! 1. At most one drag session is live; a second pointer-down while one
//!    exists is ignored, never adopted, so no snapshot is orphaned.
//! 2. Closing a session always re-shows the hidden original row and drops
//!    the snapshot, on normal completion and on [`detach`] alike.
//! 3. Handlers return `false` for gestures the engine does not own, so the
//!    host falls through to normal scrolling and taps.
//!
//! [`detach`]: InteractionEngine::detach

use crate::adapter::{DrawSurface, ListAdapter, ListViewport};
use crate::config::EngineConfig;
use crate::placeholder::PlaceholderAnimator;
use crate::resolver::{GestureResolver, ReleaseState, ResolutionKind};
use crate::session::DragSession;
use crate::sticky::{HeaderOverlay, StickyHeaderController};
use crate::{autoscroll, mapper};
use bitflags::bitflags;
use shiftlist_core::event::PointerEvent;
use shiftlist_core::geometry::Vec2;
use std::time::Duration;

bitflags! {
    /// What the host needs to refresh after an engine call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Invalidation: u8 {
        /// Overlay content moved; repaint.
        const REDRAW = 1 << 0;
        /// Row heights changed; re-run layout before painting.
        const RELAYOUT = 1 << 1;
    }
}

/// The interaction engine for one list widget.
#[derive(Debug)]
pub struct InteractionEngine {
    config: EngineConfig,
    resolver: GestureResolver,
    session: Option<DragSession>,
    placeholder: PlaceholderAnimator,
    header: StickyHeaderController,
    viewport_size: Vec2,
}

impl Default for InteractionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default(), GestureResolver::default())
    }
}

impl InteractionEngine {
    /// Create an engine with the given policy.
    #[must_use]
    pub fn new(config: EngineConfig, resolver: GestureResolver) -> Self {
        let placeholder = PlaceholderAnimator::new(config.placeholder_duration);
        let header = StickyHeaderController::new(config.header_gap);
        Self {
            config,
            resolver,
            session: None,
            placeholder,
            header,
            viewport_size: Vec2::ZERO,
        }
    }

    /// Active drag session, if any.
    #[must_use]
    pub fn active_session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether a drag is in progress (tracking or resolving).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Current sticky header overlay state.
    #[must_use]
    pub fn overlay(&self) -> &HeaderOverlay {
        self.header.overlay()
    }

    /// Whether any animation still needs [`tick`](Self::tick) calls.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.placeholder.is_idle()
            || self
                .session
                .as_ref()
                .is_some_and(|session| !session.is_tracking())
    }

    /// Handle a pointer-down.
    ///
    /// Returns `true` when a drag session opened. Pointer-downs outside
    /// the handle strip, over no row, or while a session already exists
    /// are not handled.
    pub fn on_pointer_down(
        &mut self,
        ev: PointerEvent,
        adapter: &mut dyn ListAdapter,
        viewport: &mut dyn ListViewport,
    ) -> bool {
        if self.session.is_some() {
            // One gesture at a time; a second contact never steals the
            // session (that would orphan the live snapshot).
            #[cfg(feature = "tracing")]
            tracing::debug!("pointer-down ignored: drag already active");
            return false;
        }
        if ev.position.x >= self.config.handle_width {
            return false;
        }
        let Some(original_index) = viewport.hit_test(ev.position) else {
            return false;
        };
        let Some(origin_slot) = original_index.checked_sub(viewport.first_visible()) else {
            return false;
        };
        let Some(frame) = viewport.child_frame(origin_slot) else {
            return false;
        };
        adapter.set_placeholder_height(frame.height);
        let Some(snapshot) = viewport.capture_snapshot(origin_slot) else {
            return false;
        };
        adapter.hide_position(original_index);

        let mut session = DragSession::open(
            original_index,
            origin_slot,
            frame.origin(),
            ev.position,
            frame.height,
            snapshot,
        );
        session.velocity.add(ev.timestamp, ev.position);
        self.placeholder
            .expand(session.current_slot, session.placeholder_height);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            index = original_index,
            height = session.placeholder_height,
            "drag opened"
        );
        self.session = Some(session);
        true
    }

    /// Handle a pointer-move.
    ///
    /// Only meaningful while a session is tracking; moves during the
    /// resolution animation are swallowed (the gesture is still owned) and
    /// moves without a session fall through.
    pub fn on_pointer_move(
        &mut self,
        ev: PointerEvent,
        adapter: &mut dyn ListAdapter,
        viewport: &mut dyn ListViewport,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.is_tracking() {
            return true;
        }
        session.velocity.add(ev.timestamp, ev.position);
        session.follow_pointer(ev.position);

        // Re-map the drop target.
        let candidate = mapper::index_at(viewport.hit_test(ev.position), session.original_index);
        if let Some(index) = candidate
            && let Some(slot) = index.checked_sub(viewport.first_visible())
            && slot != session.current_slot
            && slot > 0
        {
            self.placeholder
                .collapse(session.current_slot, session.placeholder_height);
            session.current_slot = slot;
            self.placeholder.expand(slot, session.placeholder_height);
            #[cfg(feature = "tracing")]
            tracing::trace!(slot, "placeholder moved");
        }

        // Edge auto-scroll; fire-and-forget, superseded by the next move.
        if self.viewport_size.y > 0.0 {
            let can_up = viewport.first_visible() > 0;
            let can_down = viewport.last_visible() + 1 < adapter.count();
            let delta =
                autoscroll::scroll_delta(ev.position.y, self.viewport_size.y, can_up, can_down);
            if delta != 0.0 {
                viewport.smooth_scroll_by(delta, self.config.scroll_tick);
            }
        }
        true
    }

    /// Handle a pointer-up.
    pub fn on_pointer_up(&mut self, ev: PointerEvent, viewport: &mut dyn ListViewport) -> bool {
        self.resolve_gesture(ev, viewport)
    }

    /// Handle a platform pointer-cancel. Resolved like a release: the
    /// final position and velocity decide where the snapshot lands.
    pub fn on_pointer_cancel(&mut self, ev: PointerEvent, viewport: &mut dyn ListViewport) -> bool {
        self.resolve_gesture(ev, viewport)
    }

    fn resolve_gesture(&mut self, ev: PointerEvent, viewport: &mut dyn ListViewport) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.is_tracking() {
            return true;
        }
        session.velocity.add(ev.timestamp, ev.position);
        session.follow_pointer(ev.position);
        let velocity = session.velocity.velocity(self.config.velocity_window);

        self.placeholder
            .collapse(session.current_slot, session.placeholder_height);

        let first = viewport.first_visible();
        let current_index = first + session.current_slot;
        let original_pos = session
            .original_index
            .checked_sub(first)
            .and_then(|slot| viewport.child_frame(slot))
            .map(|frame| frame.origin());
        let drop_pos = viewport
            .child_frame(session.current_slot)
            .map(|frame| frame.origin());

        let resolution = self.resolver.resolve(&ReleaseState {
            original_index: session.original_index,
            current_index,
            first_visible: first,
            last_visible: viewport.last_visible(),
            velocity_x: velocity.x,
            original_pos,
            drop_pos,
            viewport_width: self.viewport_size.x,
            floating: session.floating,
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(
            kind = ?resolution.kind,
            from = session.original_index,
            to = current_index,
            vx = velocity.x,
            "drag resolved"
        );
        session.begin_resolve(resolution, current_index, self.config.resolve_duration);
        true
    }

    /// Scroll notification, from user scrolling and auto-scroll alike.
    pub fn on_scroll_changed(
        &mut self,
        first_visible: usize,
        adapter: &dyn ListAdapter,
        viewport: &dyn ListViewport,
    ) -> Invalidation {
        if self.header.on_scroll(first_visible, adapter, viewport) {
            Invalidation::REDRAW
        } else {
            Invalidation::empty()
        }
    }

    /// Viewport resize notification.
    pub fn on_size_changed(&mut self, width: f32, height: f32) {
        self.viewport_size = Vec2::new(width, height);
    }

    /// Advance all animation by `dt` from the host's frame clock.
    ///
    /// Closes the session when its resolution animation lands: the hidden
    /// original row is re-shown, a committed reorder calls
    /// [`ListAdapter::move_item`], and the snapshot is dropped.
    pub fn tick(
        &mut self,
        dt: Duration,
        adapter: &mut dyn ListAdapter,
        viewport: &mut dyn ListViewport,
    ) -> Invalidation {
        let mut invalidation = Invalidation::empty();
        if self.placeholder.tick(dt, viewport) {
            invalidation |= Invalidation::REDRAW | Invalidation::RELAYOUT;
        }

        let mut finished = None;
        if let Some(session) = self.session.as_mut()
            && !session.is_tracking()
        {
            invalidation |= Invalidation::REDRAW;
            finished = session.tick_resolve(dt);
        }
        if let Some((kind, drop_index)) = finished
            && let Some(session) = self.session.take()
        {
            adapter.show_position(session.original_index);
            if kind == ResolutionKind::Reorder {
                adapter.move_item(session.original_index, drop_index);
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(?kind, "drag closed");
            invalidation |= Invalidation::REDRAW | Invalidation::RELAYOUT;
            // Snapshot released here with the session.
            drop(session);
        }
        invalidation
    }

    /// Compose the engine's overlay content, called after the host has
    /// drawn normal list content: header overlay first, floating snapshot
    /// on top.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let overlay = self.header.overlay();
        if let Some(shown) = overlay.shown {
            surface.draw_header(shown.section, overlay.offset);
        }
        if let Some(session) = &self.session {
            surface.draw_snapshot(session.snapshot.as_ref(), session.floating);
        }
    }

    /// Abnormal teardown (widget detached mid-gesture).
    ///
    /// Best-effort cleanup: the hidden row is re-shown, in-flight height
    /// tweens are discarded without touching views, overlay state is
    /// forgotten. Snapshot release is unconditional.
    pub fn detach(&mut self, adapter: &mut dyn ListAdapter) {
        if let Some(session) = self.session.take() {
            adapter.show_position(session.original_index);
            #[cfg(feature = "tracing")]
            tracing::debug!(index = session.original_index, "drag torn down on detach");
            drop(session);
        }
        self.placeholder.discard_all();
        self.header.reset();
    }
}
