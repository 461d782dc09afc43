#![forbid(unsafe_code)]

//! Placeholder height animation.
//!
//! Whichever viewport slot currently plays the drop-placeholder role is
//! grown from zero to the dragged row's height, and the previous slot is
//! shrunk back, each over a fixed short duration. A collapse on the old
//! slot and an expand on the new one routinely overlap; they are
//! independent tweens with no shared state and neither cancels the other.
//! A tween whose slot has no live child (scrolled out of the window)
//! writes nothing and finishes harmlessly.

use crate::adapter::ListViewport;
use shiftlist_core::animation::{Animation, Tween};
use std::time::Duration;

#[derive(Debug)]
struct HeightAnim {
    slot: usize,
    tween: Tween,
}

/// Drives expand/collapse height tweens for placeholder slots.
#[derive(Debug)]
pub struct PlaceholderAnimator {
    anims: Vec<HeightAnim>,
    duration: Duration,
}

impl PlaceholderAnimator {
    /// Create an animator with the given expand/collapse duration.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            anims: Vec::new(),
            duration,
        }
    }

    /// Begin growing the child at `slot` from 0 to `target_height`.
    pub fn expand(&mut self, slot: usize, target_height: f32) {
        self.anims.push(HeightAnim {
            slot,
            tween: Tween::new(0.0, target_height, self.duration),
        });
    }

    /// Begin shrinking the child at `slot` from `from_height` to 0.
    pub fn collapse(&mut self, slot: usize, from_height: f32) {
        self.anims.push(HeightAnim {
            slot,
            tween: Tween::new(from_height, 0.0, self.duration),
        });
    }

    /// Advance all tweens by `dt`, writing interpolated heights through the
    /// viewport. Completed tweens are retired after writing their end
    /// height. Returns `true` when any layout was (potentially) touched.
    pub fn tick(&mut self, dt: Duration, viewport: &mut dyn ListViewport) -> bool {
        if self.anims.is_empty() {
            return false;
        }
        for anim in &mut self.anims {
            anim.tween.tick(dt);
            viewport.set_child_height(anim.slot, anim.tween.current());
        }
        self.anims.retain(|a| !a.tween.is_complete());
        true
    }

    /// Whether no tween is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.anims.is_empty()
    }

    /// Drop all in-flight tweens without touching any view.
    ///
    /// Used on teardown when the view tree may already be gone.
    pub fn discard_all(&mut self) {
        self.anims.clear();
    }
}
