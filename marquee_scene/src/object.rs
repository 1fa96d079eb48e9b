// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Object types: detected boxes, keypoints, and the stable id handle.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;

/// Identifier for an object within one [`DetectionSet`](crate::DetectionSet).
///
/// This is a small, copyable handle equal to the object's index in draw
/// order. It stays valid for as long as the set that produced it is alive;
/// replacing the set with a new analysis result invalidates all previous
/// ids. Stale ids are harmless: lookups against a smaller set return `None`
/// and hit queries never produce them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) u32);

impl ObjectId {
    /// Returns the draw-order index this id refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A display-only skeleton point attached to a detected object.
///
/// Keypoints (pose or hand landmarks) are carried through for rendering but
/// are opaque to hit-testing: only [`DetectedObject::bounds`] participates in
/// hover and marquee queries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyPoint {
    /// X coordinate in image-pixel space.
    pub x: f64,
    /// Y coordinate in image-pixel space.
    pub y: f64,
    /// Per-point confidence in `[0, 1]`.
    pub score: f64,
}

/// One machine-detected object: a box in image-pixel space plus metadata.
///
/// `bounds` uses the corner-pair convention throughout: `(x0, y0)` is the
/// top-left corner and `(x1, y1)` the bottom-right corner. Well-formed input
/// satisfies `x1 >= x0` and `y1 >= y0`; this is an invariant of the source
/// data and is not validated here.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectedObject {
    /// Axis-aligned bounds in image-pixel space (corner pair).
    pub bounds: Rect,
    /// Category label, e.g. `"person"`.
    pub category: String,
    /// Detection confidence in `[0, 1]`.
    pub score: f64,
    /// Optional pose keypoints. Display-only.
    pub pose: Option<Vec<KeyPoint>>,
    /// Optional hand keypoints. Display-only.
    pub hand: Option<Vec<KeyPoint>>,
}

impl DetectedObject {
    /// Creates an object with no keypoints.
    #[must_use]
    pub fn new(bounds: Rect, category: impl Into<String>, score: f64) -> Self {
        Self {
            bounds,
            category: category.into(),
            score,
            pose: None,
            hand: None,
        }
    }

    /// Attaches pose keypoints, builder style.
    #[must_use]
    pub fn with_pose(mut self, pose: Vec<KeyPoint>) -> Self {
        self.pose = Some(pose);
        self
    }

    /// Attaches hand keypoints, builder style.
    #[must_use]
    pub fn with_hand(mut self, hand: Vec<KeyPoint>) -> Self {
        self.hand = Some(hand);
        self
    }
}
