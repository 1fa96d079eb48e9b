// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee View: the letterbox viewport mapper.
//!
//! [`LetterboxView`] fits a fixed-size image into a variable-size display
//! surface, preserving aspect ratio: content is scaled to exactly fill one
//! axis of the container and centered along the other. It owns the single
//! coordinate transform between display space (on-screen pixels) and image
//! space (source-image pixels), so that all downstream hit-testing can run
//! purely in image space and survive resizes and retina-ratio changes.
//!
//! The view is headless: it knows nothing about the scene or the renderer.
//! Callers feed it the container and image dimensions as the host layout
//! reports them and use the conversion methods to map pointer coordinates
//! before handing them to the interaction layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use marquee_view::LetterboxView;
//!
//! let mut view = LetterboxView::new();
//! view.set_image_size(Size::new(800.0, 600.0));
//! view.set_container_size(Size::new(1600.0, 900.0));
//!
//! // Container is relatively wider: the image fills the height and is
//! // centered horizontally.
//! assert_eq!(view.scale(), 1.5);
//! assert_eq!(view.offset().x, (1600.0 - 800.0 * 1.5) / 2.0);
//! assert_eq!(view.offset().y, 0.0);
//!
//! // The image center lands in the middle of the letterboxed region.
//! let display_pt = view.image_to_display_point(Point::new(400.0, 300.0));
//! assert_eq!(display_pt, Point::new(800.0, 450.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod letterbox;

pub use letterbox::{LetterboxDebugInfo, LetterboxView};
