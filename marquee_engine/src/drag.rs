// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee drag state: anchor, normalized bounds, and the dead-zone latch.

use kurbo::{Point, Rect};

/// Dead zone in image-space pixels before a press becomes a drag.
///
/// A press-and-release that never leaves this zone is treated as a click on
/// empty space rather than a (degenerate) marquee selection.
pub const DRAG_DEAD_ZONE: f64 = 5.0;

/// State of one in-progress rubber-band drag.
///
/// Created on pointer-down over empty space and discarded on pointer-up or
/// pointer-leave; it never outlives a single gesture. The anchor stays fixed
/// while [`MarqueeDrag::update`] moves the opposite corner, so the reported
/// rectangle is always normalized regardless of drag direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeDrag {
    anchor: Point,
    current: Point,
    moved: bool,
}

impl MarqueeDrag {
    /// Starts a drag anchored at `anchor`.
    #[must_use]
    pub fn start(anchor: Point) -> Self {
        Self {
            anchor,
            current: anchor,
            moved: false,
        }
    }

    /// Moves the free corner to `pos`.
    ///
    /// The first update that exceeds [`DRAG_DEAD_ZONE`] on either axis
    /// latches [`MarqueeDrag::has_moved`] permanently true; moving back
    /// inside the zone afterwards does not unlatch it.
    pub fn update(&mut self, pos: Point) {
        self.current = pos;
        if (pos.x - self.anchor.x).abs() > DRAG_DEAD_ZONE
            || (pos.y - self.anchor.y).abs() > DRAG_DEAD_ZONE
        {
            self.moved = true;
        }
    }

    /// Returns `true` once the drag has left the dead zone.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Returns the anchor corner set at pointer-down.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Returns the normalized drag rectangle in image space.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.anchor, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_drag_is_a_point_and_unmoved() {
        let drag = MarqueeDrag::start(Point::new(10.0, 20.0));
        assert!(!drag.has_moved());
        assert_eq!(drag.rect(), Rect::new(10.0, 20.0, 10.0, 20.0));
    }

    #[test]
    fn rect_normalizes_any_drag_direction() {
        let mut drag = MarqueeDrag::start(Point::new(100.0, 100.0));
        drag.update(Point::new(40.0, 160.0));
        assert_eq!(drag.rect(), Rect::new(40.0, 100.0, 100.0, 160.0));
    }

    #[test]
    fn dead_zone_is_strictly_greater_than() {
        let mut drag = MarqueeDrag::start(Point::new(0.0, 0.0));
        drag.update(Point::new(5.0, 5.0));
        assert!(!drag.has_moved());
        drag.update(Point::new(5.001, 0.0));
        assert!(drag.has_moved());
    }

    #[test]
    fn moved_latch_survives_return_to_anchor() {
        let mut drag = MarqueeDrag::start(Point::new(0.0, 0.0));
        drag.update(Point::new(30.0, 0.0));
        drag.update(Point::new(0.0, 0.0));
        assert!(drag.has_moved());
    }

    #[test]
    fn vertical_only_movement_exits_dead_zone() {
        let mut drag = MarqueeDrag::start(Point::new(50.0, 50.0));
        drag.update(Point::new(50.0, 60.0));
        assert!(drag.has_moved());
    }
}
