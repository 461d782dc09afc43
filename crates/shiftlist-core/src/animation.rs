#![forbid(unsafe_code)]

//! Tween-based animation driver.
//!
//! Animations are plain data: a start value, an end value, a duration, and
//! an easing function, advanced by explicit [`Animation::tick`] calls from
//! the host's frame clock. There are no scheduled callbacks or suspended
//! tasks; a superseded tween is simply dropped. One driver ([`Tween`])
//! carries every animation in the engine — placeholder heights and the
//! drag resolution path alike.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (slow start).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation producing normalized progress in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current eased progress, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Interpolates an `f32` value between `from` and `to` over a duration.
///
/// [`Animation::value`] returns the eased progress; [`Tween::current`]
/// returns the interpolated value. Elapsed time accumulates as [`Duration`]
/// for precise accumulation (no floating-point drift); ticking past the
/// duration clamps at the endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Create a tween from `from` to `to` over `duration`, linear easing.
    ///
    /// A zero duration is clamped to one nanosecond so the tween completes
    /// on the first tick instead of dividing by zero.
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Start value.
    #[must_use]
    pub fn from(&self) -> f32 {
        self.from
    }

    /// End value.
    #[must_use]
    pub fn to(&self) -> f32 {
        self.to
    }

    fn progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated value.
    #[must_use]
    pub fn current(&self) -> f32 {
        let t = (self.easing)(self.progress());
        self.from + (self.to - self.from) * t
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_50: Duration = Duration::from_millis(50);
    const MS_100: Duration = Duration::from_millis(100);
    const MS_200: Duration = Duration::from_millis(200);

    // ---- Easing tests ----

    #[test]
    fn easing_endpoints() {
        for f in [linear, ease_in, ease_out, ease_in_out] {
            assert!((f(0.0) - 0.0).abs() < f32::EPSILON);
            assert!((f(1.0) - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn easing_clamps_input() {
        assert!((linear(-1.0) - 0.0).abs() < f32::EPSILON);
        assert!((linear(2.0) - 1.0).abs() < f32::EPSILON);
        assert!((ease_in_out(-0.5) - 0.0).abs() < f32::EPSILON);
        assert!((ease_in_out(1.5) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn ease_in_slower_start() {
        assert!(ease_in(0.5) < linear(0.5));
    }

    #[test]
    fn ease_out_faster_start() {
        assert!(ease_out(0.5) > linear(0.5));
    }

    // ---- Tween tests ----

    #[test]
    fn tween_starts_at_from() {
        let tw = Tween::new(0.0, 48.0, MS_100);
        assert!((tw.current() - 0.0).abs() < f32::EPSILON);
        assert!(!tw.is_complete());
    }

    #[test]
    fn tween_ends_at_to() {
        let mut tw = Tween::new(0.0, 48.0, MS_100);
        tw.tick(MS_100);
        assert!(tw.is_complete());
        assert!((tw.current() - 48.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tween_midpoint_linear() {
        let mut tw = Tween::new(0.0, 48.0, MS_100);
        tw.tick(MS_50);
        assert!((tw.current() - 24.0).abs() < 0.5);
    }

    #[test]
    fn tween_descending_range() {
        let mut tw = Tween::new(48.0, 0.0, MS_100);
        tw.tick(MS_50);
        assert!((tw.current() - 24.0).abs() < 0.5);
        tw.tick(MS_50);
        assert!((tw.current() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tween_overshoot_clamps() {
        let mut tw = Tween::new(10.0, 20.0, MS_100);
        tw.tick(MS_200);
        assert!(tw.is_complete());
        assert!((tw.current() - 20.0).abs() < f32::EPSILON);
        tw.tick(MS_200);
        assert!((tw.current() - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tween_zero_duration_completes_immediately() {
        let mut tw = Tween::new(0.0, 5.0, Duration::ZERO);
        tw.tick(Duration::from_millis(1));
        assert!(tw.is_complete());
        assert!((tw.current() - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tween_reset() {
        let mut tw = Tween::new(0.0, 10.0, MS_100);
        tw.tick(MS_100);
        tw.reset();
        assert!(!tw.is_complete());
        assert!((tw.current() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tween_incremental_ticks() {
        let mut tw = Tween::new(0.0, 1.0, Duration::from_millis(160));
        for _ in 0..10 {
            tw.tick(Duration::from_millis(16));
        }
        assert!(tw.is_complete());
    }

    #[test]
    fn tween_with_ease_in() {
        let mut tw = Tween::new(0.0, 100.0, MS_100).easing(ease_in);
        tw.tick(MS_50);
        // ease_in(0.5) = 0.25
        assert!((tw.current() - 25.0).abs() < 1.0);
    }

    #[test]
    fn zero_dt_is_noop() {
        let mut tw = Tween::new(0.0, 1.0, MS_100);
        tw.tick(Duration::ZERO);
        assert!((tw.value() - 0.0).abs() < f32::EPSILON);
    }

    // ---- Property tests ----

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tween_current_stays_in_range(
                from in -1000.0f32..1000.0,
                to in -1000.0f32..1000.0,
                ticks in proptest::collection::vec(0u64..50, 0..20),
            ) {
                let lo = from.min(to);
                let hi = from.max(to);
                let mut tw = Tween::new(from, to, MS_100);
                for t in ticks {
                    tw.tick(Duration::from_millis(t));
                    let v = tw.current();
                    prop_assert!(v >= lo - 1e-3 && v <= hi + 1e-3, "out of range: {v}");
                }
            }

            #[test]
            fn tween_value_monotonic_under_linear(
                steps in proptest::collection::vec(1u64..30, 1..20),
            ) {
                let mut tw = Tween::new(0.0, 1.0, MS_200);
                let mut last = tw.value();
                for s in steps {
                    tw.tick(Duration::from_millis(s));
                    let v = tw.value();
                    prop_assert!(v >= last);
                    last = v;
                }
            }
        }
    }
}
