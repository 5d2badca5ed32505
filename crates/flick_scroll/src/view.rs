//! Scroll view engine
//!
//! One mutator of the content position per frame: the drag controller while a
//! pointer holds the content, the inertia integrator while a flick decays, or
//! a centering tween while it holds the interaction lock. Pointer positions
//! arrive in screen coordinates and are projected into viewport-local space
//! through a shared scale factor, so both the drag-start point and every
//! subsequent point cancel the same canvas scaling.

use flick_animation::{Easing, Tween};
use flick_core::events::{event_types, EventType, StateTransitions};
use flick_core::geometry::{Point, Rect, Size, Vec2};

use crate::bounds::{self, elastic, scroll_bounds, ScrollBounds};
use crate::config::{ConfigError, ScrollConfig};
use crate::phase::ScrollPhase;

/// Viewport/content geometry the engine scrolls within
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewGeometry {
    /// Visible window, in screen coordinates
    pub viewport: Rect,
    /// Size of the scrollable surface, in viewport-local units
    pub content: Size,
    /// Screen-to-local scale (canvas scaling); 1.0 means screen pixels are
    /// local units
    pub scale_factor: f32,
}

/// Ephemeral per-drag state, created on drag-begin and dropped on drag-end
#[derive(Clone, Copy, Debug)]
struct DragSession {
    /// Content position when the drag began
    content_start: Vec2,
    /// Pointer position when the drag began, viewport-local
    pointer_start: Vec2,
}

/// The scroll engine: drag, elastic bounds, inertia, and focus centering
pub struct ScrollView {
    config: ScrollConfig,
    geometry: Option<ViewGeometry>,
    /// Content anchored position relative to the viewport frame
    position: Vec2,
    /// Units per second, persists across frames between drags
    velocity: Vec2,
    phase: ScrollPhase,
    drag: Option<DragSession>,
    /// Interaction lock: while held, drags and inertia are suppressed and
    /// the holder is the sole writer of `position`
    locked: bool,
    /// In-flight eased centering move; present only while `locked`
    center_move: Option<Tween<Vec2>>,
    /// Per-frame latches so overshoot damping applies at most once per axis
    /// per frame, however many corrections run within the frame
    damped_x: bool,
    damped_y: bool,
}

impl ScrollView {
    pub fn new(config: ScrollConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            geometry: None,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            phase: ScrollPhase::Idle,
            drag: None,
            locked: false,
            center_move: None,
            damped_x: false,
            damped_y: false,
        })
    }

    /// Supply or replace the viewport/content geometry. Until this is called
    /// every geometric operation is a no-op.
    pub fn set_geometry(&mut self, viewport: Rect, content: Size, scale_factor: f32) {
        if scale_factor <= 0.0 {
            tracing::warn!("ignoring geometry with non-positive scale factor {scale_factor}");
            return;
        }
        self.geometry = Some(ViewGeometry {
            viewport,
            content,
            scale_factor,
        });
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_active()
    }

    /// Scroll range for the current geometry, if geometry has been set
    pub fn bounds(&self) -> Option<ScrollBounds> {
        self.geometry
            .map(|g| scroll_bounds(g.content, viewport_local_size(&g), self.config.axes))
    }

    /// Project a screen point into viewport-local space
    fn screen_to_local(&self, geometry: &ViewGeometry, screen: Point) -> Vec2 {
        (screen - geometry.viewport.origin) * (1.0 / geometry.scale_factor)
    }

    fn transition(&mut self, event: EventType) {
        if let Some(next) = self.phase.on_event(event) {
            tracing::debug!("phase {:?} -> {:?} on event {event}", self.phase, next);
            self.phase = next;
        }
    }

    // =========================================================================
    // Drag Controller
    // =========================================================================

    /// Begin a pointer drag. Records the content and pointer start positions
    /// and zeroes velocity. No-op while locked or before geometry is set.
    pub fn begin_drag(&mut self, pointer: Point) {
        if self.locked {
            tracing::trace!("begin_drag ignored: interaction locked");
            return;
        }
        let Some(geometry) = self.geometry else {
            tracing::warn!("begin_drag ignored: no geometry");
            return;
        };
        self.velocity = Vec2::ZERO;
        self.drag = Some(DragSession {
            content_start: self.position,
            pointer_start: self.screen_to_local(&geometry, pointer),
        });
        self.transition(event_types::DRAG_START);
    }

    /// Move the content with the pointer. Displacement is measured in
    /// viewport-local space from the drag-start point, masked to the enabled
    /// axes, then elastically corrected against the bounds.
    pub fn drag(&mut self, pointer: Point) {
        if self.locked {
            return;
        }
        let Some(geometry) = self.geometry else {
            return;
        };
        let Some(session) = self.drag else {
            tracing::trace!("drag ignored: no active session");
            return;
        };
        let local = self.screen_to_local(&geometry, pointer);
        let displacement = self.config.axes.mask(local - session.pointer_start);
        self.position = session.content_start + displacement;
        self.apply_elastic();
        tracing::trace!(
            "drag displacement ({:.1}, {:.1}) -> position ({:.1}, {:.1})",
            displacement.x,
            displacement.y,
            self.position.x,
            self.position.y
        );
    }

    /// End the drag and seed inertia with a flick-velocity estimate:
    /// `pointer_delta / frame_time * flick_scale`. The estimate is a
    /// heuristic, not physically exact.
    pub fn end_drag(&mut self, pointer_delta: Vec2, frame_time: f32) {
        if self.locked || self.drag.take().is_none() {
            return;
        }
        if frame_time > 0.0 {
            let flick = self.config.flick_scale / frame_time;
            self.velocity = self.config.axes.mask(pointer_delta) * flick;
        } else {
            tracing::warn!("end_drag with non-positive frame time {frame_time}, dropping flick");
            self.velocity = Vec2::ZERO;
        }
        self.transition(event_types::DRAG_END);
        if self.velocity.length() <= self.config.rest_threshold {
            self.velocity = Vec2::ZERO;
            self.transition(event_types::SETTLED);
        }
    }

    // =========================================================================
    // Interaction Lock
    // =========================================================================

    /// External suspend/resume. Locking zeroes velocity and cancels any drag
    /// session immediately; unlocking also cancels an in-flight centering
    /// move, leaving the content where it is.
    pub fn set_interaction_locked(&mut self, locked: bool) {
        if locked == self.locked {
            return;
        }
        self.locked = locked;
        if locked {
            self.velocity = Vec2::ZERO;
            self.drag = None;
            self.transition(event_types::LOCK);
        } else if self.center_move.take().is_some() {
            tracing::debug!("unlock cancelled in-flight centering move");
            self.transition(event_types::CENTER_DONE);
        }
    }

    // =========================================================================
    // Focus Centering
    // =========================================================================

    /// Drive an eased move that brings `target` (screen coordinates) to the
    /// viewport center. Takes the interaction lock for the duration of the
    /// move; a request while one is in flight preempts it. Targets within
    /// the deadband of the center produce no action, and so does a request
    /// while the lock is held externally - only the lock's owner may move
    /// the content or give the lock up.
    pub fn focus_on(&mut self, target: Rect) {
        if self.locked && self.center_move.is_none() {
            tracing::warn!("focus_on ignored: interaction lock held externally");
            return;
        }
        let Some(geometry) = self.geometry else {
            tracing::warn!("focus_on ignored: no geometry");
            return;
        };
        let target_local = self.screen_to_local(&geometry, target.center());
        let viewport_center_local = self.screen_to_local(&geometry, geometry.viewport.center());
        let offset = self.config.axes.mask(target_local - viewport_center_local);

        if offset.x.abs() < self.config.center_deadband
            && offset.y.abs() < self.config.center_deadband
        {
            tracing::debug!("focus_on: target already centered");
            return;
        }

        let bounds = scroll_bounds(
            geometry.content,
            viewport_local_size(&geometry),
            self.config.axes,
        );
        let target_position = bounds.clamp(self.position - offset);

        self.drag = None;
        self.velocity = Vec2::ZERO;
        self.locked = true;
        match &mut self.center_move {
            Some(tween) => tween.retarget(target_position),
            None => {
                self.center_move = Some(Tween::new(
                    self.position,
                    target_position,
                    self.config.center_duration,
                    Easing::SmoothStep,
                ));
            }
        }
        self.transition(event_types::CENTER);
        tracing::debug!(
            "centering from ({:.1}, {:.1}) to ({:.1}, {:.1})",
            self.position.x,
            self.position.y,
            target_position.x,
            target_position.y
        );
    }

    /// Snap the content to the middle of its scroll range immediately, with
    /// no animation. Cancels any drag or centering move, releases the lock,
    /// and zeroes velocity. Idempotent.
    pub fn reset_to_center(&mut self) {
        let Some(bounds) = self.bounds() else {
            tracing::warn!("reset_to_center ignored: no geometry");
            return;
        };
        self.drag = None;
        self.center_move = None;
        self.locked = false;
        self.velocity = Vec2::ZERO;
        self.position = bounds.center();
        self.phase = ScrollPhase::Idle;
    }

    // =========================================================================
    // Frame update
    // =========================================================================

    /// Advance one frame. Runs the centering tween while the lock is held,
    /// otherwise integrates inertia. Returns true while anything is still in
    /// motion.
    pub fn tick(&mut self, dt: f32) -> bool {
        if dt <= 0.0 {
            return self.phase.is_active();
        }
        // New frame: overshoot damping may fire again
        self.damped_x = false;
        self.damped_y = false;

        if self.locked {
            self.velocity = Vec2::ZERO;
            return self.tick_centering(dt);
        }

        match self.phase {
            // Position is driven by drag events, not ticks
            ScrollPhase::Dragging => true,
            ScrollPhase::Coasting => self.tick_inertia(dt),
            ScrollPhase::Idle | ScrollPhase::Centering => false,
        }
    }

    fn tick_centering(&mut self, dt: f32) -> bool {
        let Some(tween) = &mut self.center_move else {
            // Externally locked, nothing to animate
            return false;
        };
        self.position = tween.tick(dt);
        if tween.is_finished() {
            self.position = tween.target();
            self.center_move = None;
            // Release is unconditional so a stuck tween can never deadlock
            // future drags
            self.locked = false;
            self.transition(event_types::CENTER_DONE);
            return false;
        }
        true
    }

    fn tick_inertia(&mut self, dt: f32) -> bool {
        if self.velocity.length() <= self.config.rest_threshold {
            self.velocity = Vec2::ZERO;
            self.transition(event_types::SETTLED);
            return false;
        }
        self.position += self.velocity * dt;
        let t = (dt * self.config.decay_rate).min(1.0);
        self.velocity = self.velocity.lerp(Vec2::ZERO, t);
        self.apply_elastic();
        if self.velocity.length() <= self.config.rest_threshold {
            self.velocity = Vec2::ZERO;
            self.transition(event_types::SETTLED);
            return false;
        }
        true
    }

    /// Elastic-correct the current position and damp velocity on any axis in
    /// overshoot. Damping fires at most once per axis per frame.
    fn apply_elastic(&mut self) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        let k = self.config.elastic_strength;
        if self.config.axes.horizontal {
            let raw = self.position.x;
            self.position.x = elastic(raw, bounds.min.x, bounds.max.x, k);
            if bounds::overshoot(raw, bounds.min.x, bounds.max.x) != 0.0 && !self.damped_x {
                self.velocity.x *= self.config.overshoot_damping;
                self.damped_x = true;
            }
        }
        if self.config.axes.vertical {
            let raw = self.position.y;
            self.position.y = elastic(raw, bounds.min.y, bounds.max.y, k);
            if bounds::overshoot(raw, bounds.min.y, bounds.max.y) != 0.0 && !self.damped_y {
                self.velocity.y *= self.config.overshoot_damping;
                self.damped_y = true;
            }
        }
    }
}

/// Viewport size in local units (screen size divided by the scale factor)
fn viewport_local_size(geometry: &ViewGeometry) -> Size {
    Size::new(
        geometry.viewport.size.width / geometry.scale_factor,
        geometry.viewport.size.height / geometry.scale_factor,
    )
}
