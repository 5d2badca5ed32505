//! Flick Core Primitives
//!
//! This crate provides the foundational types for the Flick scroll toolkit:
//!
//! - **Geometry**: 2D points, sizes, rectangles, and vectors
//! - **Events**: event-type identifiers shared by interaction state machines
//! - **State Transitions**: the trait interaction FSMs implement to react to
//!   events
//!
//! # Example
//!
//! ```rust
//! use flick_core::geometry::{Rect, Vec2};
//!
//! let viewport = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let center = viewport.center();
//! assert_eq!(center.x, 200.0);
//!
//! let v = Vec2::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//! ```

pub mod events;
pub mod geometry;

pub use events::{EventType, StateTransitions};
pub use geometry::{Point, Rect, Size, Vec2};
