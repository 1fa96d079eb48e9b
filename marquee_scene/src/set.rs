// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The detection set and its hit-testing queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::object::{DetectedObject, ObjectId};

/// Inclusive point-in-rectangle test.
///
/// Returns `true` iff `point.x` lies in `[rect.x0, rect.x1]` and `point.y`
/// in `[rect.y0, rect.y1]`. Both edges are inclusive, unlike kurbo's
/// half-open [`Rect::contains`], so a pointer resting exactly on a box edge
/// still hovers it.
///
/// The bounds are used as stored; a rectangle with inverted corners simply
/// matches nothing. Behavior is well-defined only for well-formed input.
#[must_use]
pub fn hit_point(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// An immutable, ordered set of detected objects for one analyzed image.
///
/// Order is draw order: later entries are drawn on top of earlier ones, and
/// hit queries honor that stacking. The set is replaced wholesale when a new
/// analysis arrives; see [`ObjectId`] for the staleness contract.
#[derive(Clone, Debug, Default)]
pub struct DetectionSet {
    objects: Vec<DetectedObject>,
}

impl DetectionSet {
    /// Creates a set from objects in draw order.
    #[must_use]
    pub fn new(objects: Vec<DetectedObject>) -> Self {
        Self { objects }
    }

    /// Returns the number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the set holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns the object for `id`, or `None` for a stale id.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&DetectedObject> {
        self.objects.get(id.index())
    }

    /// Iterates over `(id, object)` pairs in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &DetectedObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, obj)| (ObjectId(i as u32), obj))
    }

    /// Iterates over all ids in draw order.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        (0..self.objects.len() as u32).map(ObjectId)
    }

    /// Returns every object containing `point`, topmost first.
    ///
    /// The scan runs in reverse draw order so that the last-drawn (topmost)
    /// box is found first, and it never exits early: a fully occluded box is
    /// still reported so the user can cycle down to it. An empty result means
    /// the pointer is over empty space.
    #[must_use]
    pub fn hover_stack(&self, point: Point) -> SmallVec<[ObjectId; 4]> {
        let mut stack = SmallVec::new();
        for (i, obj) in self.objects.iter().enumerate().rev() {
            if hit_point(obj.bounds, point) {
                stack.push(ObjectId(i as u32));
            }
        }
        stack
    }

    /// Returns the objects selected by the marquee rectangle, in draw order.
    ///
    /// An object is selected iff any of its four corners lies within `rect`,
    /// or `rect` lies entirely within the object. This corner rule is an
    /// approximation of rectangle intersection: an object whose edges cross
    /// `rect` with no corner inside is not selected.
    #[must_use]
    pub fn marquee_hits(&self, rect: Rect) -> Vec<ObjectId> {
        self.iter()
            .filter(|(_, obj)| marquee_captures(rect, obj.bounds))
            .map(|(id, _)| id)
            .collect()
    }
}

/// The marquee capture rule for a single box.
fn marquee_captures(marquee: Rect, bounds: Rect) -> bool {
    let corners = [
        Point::new(bounds.x0, bounds.y0),
        Point::new(bounds.x1, bounds.y1),
        Point::new(bounds.x1, bounds.y0),
        Point::new(bounds.x0, bounds.y1),
    ];
    if corners.iter().any(|&c| hit_point(marquee, c)) {
        return true;
    }
    // Marquee swept entirely inside the box also selects it.
    marquee.x0 >= bounds.x0
        && marquee.x1 <= bounds.x1
        && marquee.y0 >= bounds.y0
        && marquee.y1 <= bounds.y1
}
