#![forbid(unsafe_code)]

//! Canonical pointer events.
//!
//! The host view translates platform input (touch, mouse, pen) into these
//! events before handing them to the engine. Timestamps are monotonic
//! offsets supplied by the host; the engine never reads a wall clock, which
//! keeps gesture handling deterministic under test.

use crate::geometry::Vec2;
use std::time::Duration;

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Pointer made contact.
    Down,
    /// Pointer moved while in contact.
    Move,
    /// Pointer lifted normally.
    Up,
    /// Gesture aborted by the platform (focus loss, palm rejection, ...).
    Cancel,
}

/// A single pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Gesture phase.
    pub kind: PointerKind,
    /// Position in viewport pixels.
    pub position: Vec2,
    /// Monotonic timestamp, host-defined epoch.
    pub timestamp: Duration,
}

impl PointerEvent {
    /// Create an event with the given phase.
    #[must_use]
    pub const fn new(kind: PointerKind, position: Vec2, timestamp: Duration) -> Self {
        Self {
            kind,
            position,
            timestamp,
        }
    }

    /// Convenience constructor for a `Down` event.
    #[must_use]
    pub const fn down(x: f32, y: f32, timestamp: Duration) -> Self {
        Self::new(PointerKind::Down, Vec2::new(x, y), timestamp)
    }

    /// Convenience constructor for a `Move` event.
    #[must_use]
    pub const fn moved(x: f32, y: f32, timestamp: Duration) -> Self {
        Self::new(PointerKind::Move, Vec2::new(x, y), timestamp)
    }

    /// Convenience constructor for an `Up` event.
    #[must_use]
    pub const fn up(x: f32, y: f32, timestamp: Duration) -> Self {
        Self::new(PointerKind::Up, Vec2::new(x, y), timestamp)
    }

    /// Convenience constructor for a `Cancel` event.
    #[must_use]
    pub const fn cancel(x: f32, y: f32, timestamp: Duration) -> Self {
        Self::new(PointerKind::Cancel, Vec2::new(x, y), timestamp)
    }

    /// Whether this event terminates a gesture.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.kind, PointerKind::Up | PointerKind::Cancel)
    }
}
