// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Letterbox viewport over an image-space plane.
///
/// `LetterboxView` tracks the container (display surface) size and the
/// intrinsic image size, and derives a uniform scale plus a centering offset
/// that fit the image into the container while preserving its aspect ratio.
/// It can be used to:
/// - Convert points and rectangles between image and display coordinates.
/// - Map raw pointer coordinates (in CSS pixels relative to the surface's
///   bounding rectangle) into image space for hit-testing.
///
/// The fit is recomputed whenever either size changes. A degenerate size
/// (any non-positive dimension) skips the recompute and leaves the previous
/// transform in place, so steady-state pointer handling never divides by
/// zero mid-resize.
#[derive(Clone, Debug)]
pub struct LetterboxView {
    container: Size,
    image: Size,
    scale: f64,
    offset: Vec2,
    image_to_display: Affine,
    display_to_image: Affine,
}

impl Default for LetterboxView {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterboxView {
    /// Creates a view with no sizes set and an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            container: Size::ZERO,
            image: Size::ZERO,
            scale: 1.0,
            offset: Vec2::ZERO,
            image_to_display: Affine::IDENTITY,
            display_to_image: Affine::IDENTITY,
        }
    }

    /// Returns the current container size in display pixels.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Returns the current image size in image pixels.
    #[must_use]
    pub fn image_size(&self) -> Size {
        self.image
    }

    /// Returns the uniform image-pixels-to-display-pixels scale factor.
    ///
    /// Positive whenever both sizes are positive and a fit has been computed.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the display-pixel translation that centers the letterboxed
    /// image. Exactly one component is nonzero for a non-matching aspect
    /// ratio; both are zero when the ratios agree.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the container size, refitting the image.
    ///
    /// Returns `true` when the transform changed. A non-positive dimension
    /// on either size skips the recompute and returns `false`.
    pub fn set_container_size(&mut self, size: Size) -> bool {
        self.container = size;
        self.refit()
    }

    /// Sets the intrinsic image size, refitting the image.
    ///
    /// Returns `true` when the transform changed. A non-positive dimension
    /// on either size skips the recompute and returns `false`.
    pub fn set_image_size(&mut self, size: Size) -> bool {
        self.image = size;
        self.refit()
    }

    /// Converts an image-space point into display coordinates.
    #[must_use]
    pub fn image_to_display_point(&self, pt: Point) -> Point {
        self.image_to_display * pt
    }

    /// Converts a display-space point into image coordinates.
    #[must_use]
    pub fn display_to_image_point(&self, pt: Point) -> Point {
        self.display_to_image * pt
    }

    /// Converts an image-space rectangle into display coordinates.
    #[must_use]
    pub fn image_to_display_rect(&self, rect: Rect) -> Rect {
        self.image_to_display.transform_rect_bbox(rect)
    }

    /// Converts a display-space rectangle into image coordinates.
    #[must_use]
    pub fn display_to_image_rect(&self, rect: Rect) -> Rect {
        self.display_to_image.transform_rect_bbox(rect)
    }

    /// Maps a raw pointer coordinate into image space.
    ///
    /// `pointer` is in CSS pixels relative to the page, `display_rect` is the
    /// surface's bounding rectangle in the same CSS pixels, and `surface` is
    /// the surface's backing-store size in device pixels. The pointer is
    /// first rebased against `display_rect` and stretched by the per-axis
    /// CSS-to-device ratio, then run through the inverse letterbox transform.
    ///
    /// Every downstream hit test consumes the result of this method, so a
    /// retina ratio or a CSS resize can never skew hit-testing: it all
    /// happens in image space.
    #[must_use]
    pub fn pointer_to_image(&self, pointer: Point, display_rect: Rect, surface: Size) -> Point {
        let device = Point::new(
            (pointer.x - display_rect.x0) * (surface.width / display_rect.width()),
            (pointer.y - display_rect.y0) * (surface.height / display_rect.height()),
        );
        self.display_to_image * device
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> LetterboxDebugInfo {
        LetterboxDebugInfo {
            container: self.container,
            image: self.image,
            scale: self.scale,
            offset: self.offset,
        }
    }

    /// Recomputes scale and offset from the current sizes.
    ///
    /// The relatively larger container axis receives the letterbox bars: a
    /// wider container scales to the image height and centers X, otherwise it
    /// scales to the image width and centers Y.
    fn refit(&mut self) -> bool {
        if self.container.width <= 0.0
            || self.container.height <= 0.0
            || self.image.width <= 0.0
            || self.image.height <= 0.0
        {
            return false;
        }

        let container_aspect = self.container.width / self.container.height;
        let image_aspect = self.image.width / self.image.height;

        let (scale, offset) = if container_aspect > image_aspect {
            let scale = self.container.height / self.image.height;
            let offset_x = (self.container.width - self.image.width * scale) / 2.0;
            (scale, Vec2::new(offset_x, 0.0))
        } else {
            let scale = self.container.width / self.image.width;
            let offset_y = (self.container.height - self.image.height * scale) / 2.0;
            (scale, Vec2::new(0.0, offset_y))
        };

        if scale == self.scale && offset == self.offset {
            return false;
        }

        self.scale = scale;
        self.offset = offset;
        // Image → display: scale first, then translate into the letterbox.
        self.image_to_display = Affine::translate(offset) * Affine::scale(scale);
        self.display_to_image = self.image_to_display.inverse();
        true
    }
}

/// Debug snapshot of a [`LetterboxView`] state.
#[derive(Clone, Copy, Debug)]
pub struct LetterboxDebugInfo {
    /// Container size in display pixels.
    pub container: Size,
    /// Image size in image pixels.
    pub image: Size,
    /// Uniform image-to-display scale factor.
    pub scale: f64,
    /// Centering offset in display pixels.
    pub offset: Vec2,
}
