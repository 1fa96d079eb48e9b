// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Paint: render color coding and redraw orchestration.
//!
//! This crate turns the interaction state into something a renderer can draw
//! without re-deriving any rules of its own:
//! - [`ObjectState`] / [`Role`]: per-object render-state flags and their
//!   precedence resolution (selected over active-hover over hovered).
//! - [`Theme`]: stroke/fill/width/label colors per role, plus the marquee
//!   overlay style.
//! - [`FramePlan`] via [`compose`]: an ordered draw plan for one frame,
//!   holding every box with its resolved role and label plus the marquee
//!   rectangle when one is being swept. `compose` is pure, so redrawing an unchanged
//!   frame yields identical output.
//! - [`Repaint`]: a tiny dirty flag merging the redraw triggers (engine
//!   transitions, viewport refits, selection revisions) for the host's
//!   render loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use marquee_engine::PickEngine;
//! use marquee_paint::{Role, Theme, compose};
//! use marquee_scene::{DetectedObject, DetectionSet};
//! use marquee_selection::Selection;
//!
//! let scene = DetectionSet::new(vec![DetectedObject::new(
//!     Rect::new(0.0, 0.0, 50.0, 50.0),
//!     "person",
//!     0.973,
//! )]);
//! let mut engine = PickEngine::new();
//! let selection = Selection::new();
//!
//! engine.pointer_move(&scene, Point::new(25.0, 25.0));
//! let plan = compose(&scene, &engine, &selection);
//!
//! assert_eq!(plan.boxes[0].role, Role::ActiveHover);
//! assert_eq!(plan.boxes[0].label, "person (97.3%)");
//!
//! let theme = Theme::default();
//! let style = theme.style_for(plan.boxes[0].role);
//! assert_eq!(style.stroke_width, 6.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod plan;
mod repaint;
mod style;

pub use plan::{BoxPaint, FramePlan, compose};
pub use repaint::Repaint;
pub use style::{BoxStyle, MarqueeStyle, ObjectState, Role, Theme, label_text};
