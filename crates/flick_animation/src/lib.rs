//! Flick Animation System
//!
//! Easing functions and time-stepped tweens for frame-driven UI motion.
//!
//! # Features
//!
//! - **Easing**: polynomial eases plus the smooth-step curve used for
//!   programmatic scroll moves
//! - **Tweens**: explicit `(start, target, elapsed, duration)` state advanced
//!   by `tick(dt)` - no hidden clocks, no implicit suspension
//! - **Interruptible**: a tween can be retargeted mid-flight from its current
//!   value

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::{Interpolate, Tween};
