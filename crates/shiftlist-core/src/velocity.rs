#![forbid(unsafe_code)]

//! Pointer velocity estimation.
//!
//! A [`VelocityTracker`] accumulates timestamped pointer samples during a
//! gesture and answers one question at release time: how fast was the
//! pointer moving, expressed as displacement per caller-chosen resolution
//! window? Only recent samples count — anything older than
//! [`SAMPLE_HORIZON`] relative to the newest sample is ignored, so a long
//! pause before release reads as zero velocity.

use crate::geometry::Vec2;
use std::collections::VecDeque;
use std::time::Duration;

/// Samples older than this (relative to the newest) do not contribute.
pub const SAMPLE_HORIZON: Duration = Duration::from_millis(100);

/// Maximum retained samples.
const MAX_SAMPLES: usize = 16;

/// Accumulates pointer samples and estimates gesture velocity.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<(Duration, Vec2)>,
}

impl VelocityTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer sample.
    ///
    /// Samples are assumed non-decreasing in timestamp; an out-of-order
    /// sample resets the tracker rather than corrupting the estimate.
    pub fn add(&mut self, timestamp: Duration, position: Vec2) {
        if let Some(&(last, _)) = self.samples.back()
            && timestamp < last
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(?timestamp, ?last, "out-of-order sample, tracker reset");
            self.samples.clear();
        }
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back((timestamp, position));
    }

    /// Drop all samples (reused between gestures).
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Estimate velocity as displacement per `window`.
    ///
    /// Computed from the oldest in-horizon sample to the newest. Returns
    /// zero with fewer than two in-horizon samples or zero elapsed time.
    #[must_use]
    pub fn velocity(&self, window: Duration) -> Vec2 {
        let Some(&(t_new, p_new)) = self.samples.back() else {
            return Vec2::ZERO;
        };
        let mut oldest = None;
        for &(t, p) in self.samples.iter() {
            if t_new.saturating_sub(t) <= SAMPLE_HORIZON {
                oldest = Some((t, p));
                break;
            }
        }
        let Some((t_old, p_old)) = oldest else {
            return Vec2::ZERO;
        };
        let dt = t_new.saturating_sub(t_old);
        if dt.is_zero() {
            return Vec2::ZERO;
        }
        (p_new - p_old) * (window.as_secs_f32() / dt.as_secs_f32())
    }
}
