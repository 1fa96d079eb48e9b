// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Engine: pointer-gesture state machines for box selection.
//!
//! [`PickEngine`] turns image-space pointer events into selection commits.
//! It owns two pieces of transient state:
//! - The **hover stack**: every box under the pointer, topmost first, plus an
//!   active index that repeated clicks cycle through so fully occluded boxes
//!   stay reachable.
//! - The **marquee drag**: a rubber-band rectangle swept from a press on
//!   empty space, with a small dead zone that keeps a stationary click from
//!   being misread as a drag.
//!
//! The committed selection is *not* part of the engine. The caller owns a
//! [`Selection`] and lends it to [`PickEngine::pointer_up`] for each commit;
//! between gestures the engine holds no reference to it.
//!
//! Callers are expected to map raw pointer coordinates into image space
//! first (see `marquee_view`); every test the engine performs runs purely in
//! image space.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use marquee_engine::{CursorHint, PickEngine};
//! use marquee_scene::{DetectedObject, DetectionSet};
//! use marquee_selection::Selection;
//!
//! let scene = DetectionSet::new(vec![DetectedObject::new(
//!     Rect::new(100.0, 100.0, 200.0, 200.0),
//!     "cat",
//!     0.9,
//! )]);
//! let mut engine = PickEngine::new();
//! let mut selection = Selection::new();
//!
//! // Hovering the box flips the cursor affordance.
//! let hint = engine.pointer_move(&scene, Point::new(150.0, 150.0));
//! assert_eq!(hint, CursorHint::Pointer);
//!
//! // A plain click commits the hovered box.
//! engine.pointer_down(Point::new(150.0, 150.0), true);
//! engine.pointer_up(&scene, true, false, &mut selection);
//! assert_eq!(selection.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drag;
mod engine;

pub use drag::{DRAG_DEAD_ZONE, MarqueeDrag};
pub use engine::{CursorHint, PickEngine};
