//! Flick Scroll Engine
//!
//! Frame-driven scroll physics with elastic bounds, flick inertia, and
//! programmatic focus centering.
//!
//! # Features
//!
//! - **Elastic bounds**: progressively stiffer resistance past the scroll
//!   range, saturating at a fixed overshoot distance
//! - **Flick inertia**: release velocity decays exponentially frame by frame
//!   until it rests
//! - **Focus centering**: eased moves that bring a registered element to the
//!   viewport center while holding the interaction lock
//! - **Selection**: insertion-ordered selection set for dimming exemption
//!
//! Everything runs on explicit `tick(dt)` calls from a single update loop -
//! no threads, no hidden clocks.
//!
//! # Example
//!
//! ```rust
//! use flick_core::geometry::{Point, Rect, Size, Vec2};
//! use flick_scroll::{ScrollConfig, ScrollView};
//!
//! let mut view = ScrollView::new(ScrollConfig::horizontal()).unwrap();
//! view.set_geometry(Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(1000.0, 300.0), 1.0);
//!
//! view.begin_drag(Point::new(200.0, 150.0));
//! view.drag(Point::new(150.0, 150.0));
//! assert_eq!(view.position(), Vec2::new(-50.0, 0.0));
//!
//! view.end_drag(Vec2::new(-8.0, 0.0), 1.0 / 60.0);
//! while view.tick(1.0 / 60.0) {}
//! ```

pub mod bounds;
pub mod config;
pub mod focus;
pub mod phase;
pub mod selection;
pub mod view;

pub use bounds::{scroll_bounds, ScrollAxes, ScrollBounds};
pub use config::{ConfigError, ScrollConfig};
pub use focus::{ElementId, FocusManager, FocusRegistry};
pub use phase::ScrollPhase;
pub use selection::SelectionSet;
pub use view::{ScrollView, ViewGeometry};
