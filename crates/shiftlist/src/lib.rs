#![forbid(unsafe_code)]

//! Interaction engine for a reorderable, sectioned scrollable list.
//!
//! Two capabilities layered on top of a host-provided scrollable list:
//!
//! - **Drag-to-reorder**: a pointer-down inside the left-edge handle strip
//!   lifts the touched row into a floating snapshot, opens a collapsible
//!   placeholder slot that follows the pointer, auto-scrolls near the
//!   viewport edges, and classifies the release (commit, cancel, no-op)
//!   from position and fling velocity.
//! - **Sticky section header**: an overlay tracking the first visible row's
//!   section, pushed off screen by the next section's header as it scrolls
//!   up underneath.
//!
//! The engine owns gesture state and animation timing only. Rendering, row
//! recycling, snapshot pixel capture, and item storage stay on the host
//! side, reached through the narrow traits in [`adapter`].
//!
//! # Design
//!
//! - Single-threaded and cooperative: pointer events, scroll callbacks, and
//!   [`InteractionEngine::tick`] all run on the host's UI event loop. No
//!   locks, no tasks.
//! - Animations are data (tweens) advanced by `tick`, never callbacks.
//!   A superseded animation is dropped; a tween whose target row scrolled
//!   out of the visible window writes nowhere and is harmless.
//! - Every failure mode is a local no-op. A pointer over no row, a missing
//!   child view, an absent section header — none of these are errors, the
//!   operation simply does not happen and gesture handlers report
//!   "not handled" so the event falls through to normal list behavior.

pub mod adapter;
pub mod autoscroll;
pub mod config;
pub mod engine;
pub mod mapper;
pub mod placeholder;
pub mod resolver;
pub mod session;
pub mod sticky;

pub use adapter::{DrawSurface, ListAdapter, ListViewport, RowSnapshot};
pub use config::EngineConfig;
pub use engine::{InteractionEngine, Invalidation};
pub use resolver::{GestureResolver, Resolution, ResolutionKind};
pub use sticky::{HeaderOverlay, StickyHeaderController};

pub use shiftlist_core as core;
pub use shiftlist_core::{PointerEvent, PointerKind, RectF, Vec2};
