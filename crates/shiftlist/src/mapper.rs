#![forbid(unsafe_code)]

//! Pointer-to-index mapping.
//!
//! Pure functions layered on the viewport's raw hit test. Two domain rules
//! apply on top of the raw result:
//!
//! 1. **Placeholder folding**: layout interleaves real rows with reserved
//!    drop slots on a fixed even/odd convention — even indices are
//!    placeholder slots, odd indices are real rows. A hit on an even index
//!    folds onto the preceding real row.
//! 2. **Origin hysteresis**: a folded index within one position of the
//!    drag's origin snaps to the origin exactly, so hovering near the
//!    starting row cannot flicker the placeholder back and forth.

/// Fold a raw hit-tested index onto the preceding real row.
///
/// Even indices are reserved placeholder slots; `fold(0)` has no preceding
/// row and returns `None`.
#[inline]
#[must_use]
pub fn fold(raw: usize) -> Option<usize> {
    if raw % 2 == 0 {
        raw.checked_sub(1)
    } else {
        Some(raw)
    }
}

/// Snap a folded index to the drag origin when within one position of it.
#[inline]
#[must_use]
pub fn snap_to_origin(folded: usize, original: usize) -> usize {
    if folded.abs_diff(original) <= 1 {
        original
    } else {
        folded
    }
}

/// Map a raw hit-test result to a logical drop index for a drag that
/// started at `original`. `None` when the pointer has no backing row.
#[must_use]
pub fn index_at(raw_hit: Option<usize>, original: usize) -> Option<usize> {
    raw_hit
        .and_then(fold)
        .map(|folded| snap_to_origin(folded, original))
}
