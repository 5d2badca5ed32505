//! Headless simulation of a drag, a flick, and a focus-centering move.
//!
//! Run with `RUST_LOG=trace cargo run --example flick_sim` to watch the
//! per-frame physics in the log output.

use flick_core::geometry::{Point, Rect, Size, Vec2};
use flick_scroll::{FocusManager, ScrollConfig, ScrollView};
use tracing_subscriber::EnvFilter;

const DT: f32 = 1.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut view = ScrollView::new(ScrollConfig::horizontal()).expect("valid default config");
    view.set_geometry(
        Rect::new(0.0, 0.0, 400.0, 300.0),
        Size::new(1000.0, 300.0),
        1.0,
    );

    // Drag the gallery 120 units left over a few frames, then flick
    view.begin_drag(Point::new(350.0, 150.0));
    for step in 1..=12 {
        view.drag(Point::new(350.0 - step as f32 * 10.0, 150.0));
        view.tick(DT);
    }
    view.end_drag(Vec2::new(-10.0, 0.0), DT);

    let mut frames = 0;
    while view.tick(DT) {
        frames += 1;
    }
    println!(
        "flick settled at ({:.1}, {:.1}) after {frames} frames",
        view.position().x,
        view.position().y
    );

    // Center a far-right card via the focus manager
    let mut manager = FocusManager::new();
    let card = manager
        .registry_mut()
        .register(Rect::new(360.0, 120.0, 30.0, 60.0));
    manager.focus_and_select(card, &mut view);

    let mut frames = 0;
    while view.tick(DT) {
        frames += 1;
    }
    println!(
        "centered card at ({:.1}, {:.1}) after {frames} frames, selection: {:?}",
        view.position().x,
        view.position().y,
        manager.selection().snapshot()
    );
}
