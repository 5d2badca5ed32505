//! Time-stepped tweens
//!
//! A tween carries its whole state explicitly - start value, target value,
//! elapsed time, duration - and is advanced by the owner's update loop one
//! `tick(dt)` at a time. There is no background clock: a tween that nobody
//! ticks simply does not move.

use flick_core::geometry::Vec2;

use crate::easing::Easing;

/// Values a tween can interpolate between
pub trait Interpolate: Copy {
    fn interpolate(from: Self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Interpolate for Vec2 {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        from.lerp(to, t)
    }
}

/// A single in-flight animation from `start` to `target`
#[derive(Clone, Copy, Debug)]
pub struct Tween<T: Interpolate> {
    start: T,
    target: T,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl<T: Interpolate + std::fmt::Debug> Tween<T> {
    /// Create a tween. A non-positive duration yields a tween that is already
    /// finished and reports the target value.
    pub fn new(start: T, target: T, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Fraction of the duration that has elapsed (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Current eased value
    pub fn value(&self) -> T {
        T::interpolate(self.start, self.target, self.easing.apply(self.progress()))
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds and return the new value. Elapsed time is
    /// clamped at the duration, so ticking past the end keeps returning the
    /// exact target.
    pub fn tick(&mut self, dt: f32) -> T {
        if dt > 0.0 && !self.is_finished() {
            self.elapsed = (self.elapsed + dt).min(self.duration);
            if self.is_finished() {
                tracing::trace!("tween finished at {:?}", self.target);
            }
        }
        self.value()
    }

    /// Restart toward a new target from the current value, keeping the
    /// easing and duration. Used to preempt an in-flight move.
    pub fn retarget(&mut self, target: T) {
        tracing::trace!("tween retargeted to {:?}", target);
        self.start = self.value();
        self.target = target;
        self.elapsed = 0.0;
    }
}
