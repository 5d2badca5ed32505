//! Scroll bounds and elastic overshoot
//!
//! Pure functions over content/viewport sizes. Offsets follow the anchored
//! convention: `max = 0` with the content's origin flush against the
//! viewport's origin, and `min = viewport - content` when the content is the
//! larger of the two. An axis whose content fits inside the viewport is
//! pinned - its scroll range collapses to a single value.

use flick_core::geometry::{Size, Vec2};

/// Overshoot distance at which elastic resistance saturates, in the same
/// units as offsets (logical pixels).
pub const ELASTIC_SATURATION: f32 = 100.0;

/// Which axes may scroll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollAxes {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Default for ScrollAxes {
    fn default() -> Self {
        Self {
            horizontal: true,
            vertical: true,
        }
    }
}

impl ScrollAxes {
    pub const BOTH: ScrollAxes = ScrollAxes {
        horizontal: true,
        vertical: true,
    };

    pub const HORIZONTAL: ScrollAxes = ScrollAxes {
        horizontal: true,
        vertical: false,
    };

    pub const VERTICAL: ScrollAxes = ScrollAxes {
        horizontal: false,
        vertical: true,
    };

    /// Zero out components on disabled axes
    pub fn mask(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            if self.horizontal { v.x } else { 0.0 },
            if self.vertical { v.y } else { 0.0 },
        )
    }
}

/// Per-axis scroll range: `min <= offset <= max` outside of elastic overshoot
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScrollBounds {
    /// Hard clamp, no elastic term. Used for programmatic targets (focus
    /// centering, reset), never for intermediate drag frames.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(self.min.x, self.max.x),
            pos.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Midpoint of the scroll range, the "centered" resting position
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

}

/// Compute the scrollable range for a content/viewport pair.
///
/// A disabled axis, or one where the content does not exceed the viewport,
/// is pinned at zero.
pub fn scroll_bounds(content: Size, viewport: Size, axes: ScrollAxes) -> ScrollBounds {
    let min_x = if axes.horizontal && content.width > viewport.width {
        viewport.width - content.width
    } else {
        0.0
    };
    let min_y = if axes.vertical && content.height > viewport.height {
        viewport.height - content.height
    } else {
        0.0
    };
    ScrollBounds {
        min: Vec2::new(min_x, min_y),
        max: Vec2::ZERO,
    }
}

/// Signed overshoot distance: positive past `max`, negative past `min`,
/// zero inside the range.
pub fn overshoot(pos: f32, min: f32, max: f32) -> f32 {
    if pos > max {
        pos - max
    } else if pos < min {
        pos - min
    } else {
        0.0
    }
}

/// Apply elastic resistance to a single out-of-range axis value.
///
/// The correction scales the overshoot by `1 - k * min(1, d / 100)` where
/// `d` is the overshoot distance: the farther past the bound, the stiffer the
/// resistance, saturating at 100 units. `k = 0` leaves the position
/// untouched, `k = 1` pins it at the bound once saturated.
pub fn elastic(pos: f32, min: f32, max: f32, strength: f32) -> f32 {
    let over = overshoot(pos, min, max);
    if over == 0.0 {
        return pos;
    }
    let d = over.abs();
    let give = 1.0 - strength * (d / ELASTIC_SATURATION).min(1.0);
    let bound = if over > 0.0 { max } else { min };
    bound + over * give
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_for_wide_content() {
        let b = scroll_bounds(
            Size::new(1000.0, 300.0),
            Size::new(400.0, 300.0),
            ScrollAxes::HORIZONTAL,
        );
        assert_eq!(b.min, Vec2::new(-600.0, 0.0));
        assert_eq!(b.max, Vec2::ZERO);
    }

    #[test]
    fn test_small_content_pins_axis() {
        // Content fits in the viewport on both axes: no scroll range at all
        let b = scroll_bounds(
            Size::new(200.0, 100.0),
            Size::new(400.0, 300.0),
            ScrollAxes::BOTH,
        );
        assert_eq!(b.min, Vec2::ZERO);
        assert_eq!(b.max, Vec2::ZERO);
    }

    #[test]
    fn test_equal_sizes_pin_axis() {
        let b = scroll_bounds(
            Size::new(400.0, 300.0),
            Size::new(400.0, 300.0),
            ScrollAxes::BOTH,
        );
        assert_eq!(b.min, Vec2::ZERO);
    }

    #[test]
    fn test_disabled_axis_is_pinned() {
        let b = scroll_bounds(
            Size::new(1000.0, 900.0),
            Size::new(400.0, 300.0),
            ScrollAxes::HORIZONTAL,
        );
        assert_eq!(b.min.y, 0.0);
        assert_eq!(b.min.x, -600.0);
    }

    #[test]
    fn test_elastic_identity_inside_bounds() {
        assert_eq!(elastic(-300.0, -600.0, 0.0, 1.0), -300.0);
        assert_eq!(elastic(0.0, -600.0, 0.0, 1.0), 0.0);
        assert_eq!(elastic(-600.0, -600.0, 0.0, 1.0), -600.0);
    }

    #[test]
    fn test_elastic_zero_strength_is_identity() {
        assert_eq!(elastic(50.0, -600.0, 0.0, 0.0), 50.0);
        assert_eq!(elastic(-700.0, -600.0, 0.0, 0.0), -700.0);
    }

    #[test]
    fn test_elastic_full_strength_saturates_at_bound() {
        // d >= 100 with k = 1 collapses onto the bound
        assert_eq!(elastic(150.0, -600.0, 0.0, 1.0), 0.0);
        assert_eq!(elastic(-750.0, -600.0, 0.0, 1.0), -600.0);
    }

    #[test]
    fn test_elastic_monotonic_in_strength() {
        // Stronger k pulls the corrected position closer to the bound
        for d in [1.0_f32, 10.0, 50.0, 99.0, 100.0, 500.0] {
            let mut prev = f32::INFINITY;
            for k10 in 0..=10 {
                let k = k10 as f32 / 10.0;
                let corrected = elastic(d, -600.0, 0.0, k);
                assert!(
                    corrected <= prev + 1e-4,
                    "d={d} k={k}: {corrected} > {prev}"
                );
                assert!(corrected >= 0.0, "corrected below the bound");
                prev = corrected;
            }
        }
    }

    #[test]
    fn test_elastic_symmetric_below_min() {
        // Same overshoot distance gives the same resisted distance on
        // either side of the range
        let above = elastic(30.0, -600.0, 0.0, 0.5) - 0.0;
        let below = -600.0 - elastic(-630.0, -600.0, 0.0, 0.5);
        assert!((above - below).abs() < 1e-3, "{above} vs {below}");
    }

    #[test]
    fn test_zero_sized_geometry_never_divides_by_zero() {
        let b = scroll_bounds(Size::ZERO, Size::ZERO, ScrollAxes::BOTH);
        assert_eq!(b.min, Vec2::ZERO);
        let v = elastic(10.0, b.min.x, b.max.x, 1.0);
        assert!(v.is_finite());
    }

    #[test]
    fn test_axes_mask() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(ScrollAxes::HORIZONTAL.mask(v), Vec2::new(3.0, 0.0));
        assert_eq!(ScrollAxes::VERTICAL.mask(v), Vec2::new(0.0, 4.0));
        assert_eq!(ScrollAxes::BOTH.mask(v), v);
    }
}
