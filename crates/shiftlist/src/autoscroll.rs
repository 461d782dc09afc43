#![forbid(unsafe_code)]

//! Edge-triggered auto-scroll.
//!
//! While a drag is tracking, the pointer entering the top or bottom quarter
//! of the viewport nudges the scroll offset. The nudge grows linearly with
//! intrusion depth, so repeated calls during continuous movement produce a
//! proportional-speed scroll rather than a jump. The caller applies each
//! delta as a smooth scroll over one short tick
//! ([`EngineConfig::scroll_tick`](crate::EngineConfig)).

/// Scroll delta for a pointer at `pointer_y` in a viewport of
/// `viewport_height` pixels.
///
/// Positive = scroll down (pointer in the bottom quarter and more content
/// below), negative = scroll up (top quarter and more content above), zero
/// in the middle band or when the relevant edge has no more content.
#[must_use]
pub fn scroll_delta(
    pointer_y: f32,
    viewport_height: f32,
    can_scroll_up: bool,
    can_scroll_down: bool,
) -> f32 {
    let bottom_band = viewport_height * 3.0 / 4.0;
    let top_band = viewport_height / 4.0;
    if pointer_y > bottom_band {
        if can_scroll_down {
            pointer_y - bottom_band
        } else {
            0.0
        }
    } else if pointer_y < top_band {
        if can_scroll_up {
            pointer_y - top_band
        } else {
            0.0
        }
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const H: f32 = 400.0;

    #[test]
    fn middle_band_no_scroll() {
        assert_eq!(scroll_delta(H / 4.0, H, true, true), 0.0);
        assert_eq!(scroll_delta(H / 2.0, H, true, true), 0.0);
        assert_eq!(scroll_delta(H * 3.0 / 4.0, H, true, true), 0.0);
    }

    #[test]
    fn bottom_band_scrolls_down() {
        let d = scroll_delta(350.0, H, true, true);
        assert_eq!(d, 50.0);
    }

    #[test]
    fn top_band_scrolls_up() {
        let d = scroll_delta(40.0, H, true, true);
        assert_eq!(d, -60.0);
    }

    #[test]
    fn bottom_band_at_end_of_content() {
        assert_eq!(scroll_delta(390.0, H, true, false), 0.0);
    }

    #[test]
    fn top_band_at_start_of_content() {
        assert_eq!(scroll_delta(10.0, H, false, true), 0.0);
    }

    #[test]
    fn deeper_intrusion_scrolls_faster() {
        let shallow = scroll_delta(310.0, H, true, true);
        let deep = scroll_delta(390.0, H, true, true);
        assert!(deep > shallow);
    }

    // ---- Property tests ----

    proptest! {
        #[test]
        fn dead_zone_is_zero(y in 0.25f32..=0.75) {
            prop_assert_eq!(scroll_delta(y * H, H, true, true), 0.0);
        }

        #[test]
        fn monotonic_below_bottom_threshold(
            y1 in 0.7501f32..0.99,
            y2 in 0.7501f32..0.99,
        ) {
            let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
            let d_lo = scroll_delta(lo * H, H, true, true);
            let d_hi = scroll_delta(hi * H, H, true, true);
            prop_assert!(d_hi >= d_lo);
            prop_assert!(d_lo > 0.0);
        }

        #[test]
        fn monotonic_above_top_threshold(
            y1 in 0.0f32..0.2499,
            y2 in 0.0f32..0.2499,
        ) {
            let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
            let d_lo = scroll_delta(lo * H, H, true, true);
            let d_hi = scroll_delta(hi * H, H, true, true);
            // Decreasing in magnitude as y rises toward the threshold.
            prop_assert!(d_hi >= d_lo);
            prop_assert!(d_hi < 0.0);
        }

        #[test]
        fn pinned_edges_never_scroll(y in 0.0f32..1.0) {
            prop_assert_eq!(scroll_delta(y * H, H, false, false), 0.0);
        }
    }
}
