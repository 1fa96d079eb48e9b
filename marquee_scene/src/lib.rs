// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Scene: the detection-result model and its box hit-testing queries.
//!
//! A [`DetectionSet`] holds the machine-generated objects for one analyzed
//! image: axis-aligned boxes in image-pixel space plus a category label, a
//! confidence score, and optional display-only keypoints. The set is
//! immutable for the lifetime of one result; a new analysis replaces it
//! wholesale.
//!
//! Objects are addressed by [`ObjectId`], a stable index handle into the set
//! that produced it. All higher layers (hover stacks, selections) key their
//! bookkeeping by `ObjectId` rather than by comparing object values.
//!
//! Two queries drive the interaction layer:
//! - [`DetectionSet::hover_stack`]: every object containing a point, ordered
//!   topmost-first so stacked boxes can be cycled through.
//! - [`DetectionSet::marquee_hits`]: the objects picked up by a rubber-band
//!   rectangle, using a corner-containment rule.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use marquee_scene::{DetectedObject, DetectionSet};
//!
//! let set = DetectionSet::new(vec![
//!     DetectedObject::new(Rect::new(100.0, 100.0, 200.0, 200.0), "cat", 0.91),
//!     DetectedObject::new(Rect::new(150.0, 150.0, 300.0, 300.0), "dog", 0.87),
//! ]);
//!
//! // Both boxes cover (175, 175); the later-drawn "dog" box comes first.
//! let stack = set.hover_stack(Point::new(175.0, 175.0));
//! assert_eq!(stack.len(), 2);
//! assert_eq!(set.get(stack[0]).unwrap().category, "dog");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod object;
mod set;

pub use object::{DetectedObject, KeyPoint, ObjectId};
pub use set::{DetectionSet, hit_point};
