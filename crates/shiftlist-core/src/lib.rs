#![forbid(unsafe_code)]

//! Primitives for the shiftlist interaction engine.
//!
//! This crate carries the dependency-light building blocks shared by the
//! engine: continuous-coordinate geometry, canonical pointer events, the
//! tween/animation driver, and pointer velocity estimation. It knows nothing
//! about lists, adapters, or drag semantics.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod velocity;

pub use animation::{Animation, Tween};
pub use event::{PointerEvent, PointerKind};
pub use geometry::{RectF, Vec2};
pub use velocity::VelocityTracker;
