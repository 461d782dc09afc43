#![forbid(unsafe_code)]

//! Engine policy configuration.
//!
//! The interaction constants shipped here are inherited feel parameters
//! with no derivation behind them; they are defaults, not laws. Hosts that
//! want a different feel override them through the builders.

use std::time::Duration;

/// Tunable policy for the interaction engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Width in pixels of the left-edge drag handle strip (default: 64).
    /// A pointer-down at or beyond this x starts no drag.
    pub handle_width: f32,
    /// Resolution window for the release velocity estimate (default: 10 ms).
    /// The fling threshold in [`GestureResolver`](crate::GestureResolver)
    /// is expressed in pixels per this window.
    pub velocity_window: Duration,
    /// Duration of a placeholder expand or collapse (default: 100 ms).
    pub placeholder_duration: Duration,
    /// Duration of the release resolution animation (default: 200 ms).
    pub resolve_duration: Duration,
    /// Duration over which one auto-scroll delta is applied (default: 20 ms).
    pub scroll_tick: Duration,
    /// Seam allowance between the header overlay and the incoming next
    /// header (default: 2 px).
    pub header_gap: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            handle_width: 64.0,
            velocity_window: Duration::from_millis(10),
            placeholder_duration: Duration::from_millis(100),
            resolve_duration: Duration::from_millis(200),
            scroll_tick: Duration::from_millis(20),
            header_gap: 2.0,
        }
    }
}

impl EngineConfig {
    /// Set the drag handle strip width.
    #[must_use]
    pub fn with_handle_width(mut self, px: f32) -> Self {
        self.handle_width = px;
        self
    }

    /// Set the velocity resolution window.
    #[must_use]
    pub fn with_velocity_window(mut self, window: Duration) -> Self {
        self.velocity_window = window;
        self
    }

    /// Set the placeholder expand/collapse duration.
    #[must_use]
    pub fn with_placeholder_duration(mut self, duration: Duration) -> Self {
        self.placeholder_duration = duration;
        self
    }

    /// Set the release resolution animation duration.
    #[must_use]
    pub fn with_resolve_duration(mut self, duration: Duration) -> Self {
        self.resolve_duration = duration;
        self
    }

    /// Set the auto-scroll application tick.
    #[must_use]
    pub fn with_scroll_tick(mut self, tick: Duration) -> Self {
        self.scroll_tick = tick;
        self
    }

    /// Set the header seam allowance.
    #[must_use]
    pub fn with_header_gap(mut self, px: f32) -> Self {
        self.header_gap = px;
        self
    }
}
