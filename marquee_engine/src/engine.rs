// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pick engine: hover cycling plus marquee selection.

use kurbo::{Point, Rect};
use marquee_scene::{DetectionSet, ObjectId};
use marquee_selection::Selection;
use smallvec::SmallVec;

use crate::drag::MarqueeDrag;

/// Cursor affordance hint for the host toolkit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorHint {
    /// The pointer is over at least one box: show a pointer/hand cursor.
    Pointer,
    /// The pointer is over empty space: show a crosshair.
    #[default]
    Crosshair,
}

/// Gesture state machine translating pointer events into selection commits.
///
/// All positions are in image space. The engine is single-threaded and
/// synchronous: each event method completes its state transition before
/// returning, and there is no background work to cancel beyond the explicit
/// drag cancellation in [`PickEngine::pointer_leave`].
///
/// Event methods that change observable state (hover stack, active index,
/// drag rectangle, committed selection) set an internal repaint flag; hosts
/// drain it with [`PickEngine::take_repaint`] to schedule redraws, instead of
/// diffing the engine's state themselves.
#[derive(Clone, Debug, Default)]
pub struct PickEngine {
    /// Boxes under the pointer, topmost first. Rebuilt on every move.
    hover: SmallVec<[ObjectId; 4]>,
    /// Cursor into `hover` advanced by each click, wrapping at the end.
    active: usize,
    /// In-progress rubber-band drag, if any.
    drag: Option<MarqueeDrag>,
    repaint: bool,
}

impl PickEngine {
    /// Creates an idle engine with no hover and no drag in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a pointer move and returns the cursor affordance to show.
    ///
    /// While a marquee drag is in progress the hover stack is frozen and
    /// only the drag rectangle tracks the pointer. Otherwise the hover stack
    /// is recomputed; the active cycling index survives the move only if the
    /// stack's membership and order are unchanged, and resets to the topmost
    /// box whenever they differ.
    pub fn pointer_move(&mut self, scene: &DetectionSet, pos: Point) -> CursorHint {
        if let Some(drag) = &mut self.drag {
            drag.update(pos);
            self.repaint = true;
            return CursorHint::Crosshair;
        }

        let stack = scene.hover_stack(pos);
        if stack != self.hover {
            self.hover = stack;
            self.active = 0;
            self.repaint = true;
        }
        self.cursor_hint()
    }

    /// Handles a pointer press.
    ///
    /// A primary-button press over empty space arms a marquee drag anchored
    /// at `pos`. A press over a box does nothing here: that position is
    /// reserved for the click/cycle commit on release.
    pub fn pointer_down(&mut self, pos: Point, primary: bool) {
        if primary && self.hover.is_empty() && self.drag.is_none() {
            self.drag = Some(MarqueeDrag::start(pos));
            self.repaint = true;
        }
    }

    /// Handles a pointer release, committing into `selection`.
    ///
    /// Commit rules:
    /// - A drag that never left the dead zone is an empty-space click: the
    ///   selection is cleared.
    /// - A real drag commits its marquee hits: unioned into the selection
    ///   when `shift` is held, replacing it otherwise.
    /// - With boxes hovered, the box at the active index commits (`shift`
    ///   toggles it, a plain click makes it the only selection), then the
    ///   active index advances with wraparound so the next click at the same
    ///   spot reaches the box underneath.
    /// - Otherwise the selection is cleared.
    ///
    /// Non-primary releases are ignored. Returns `true` when the selection
    /// actually changed.
    pub fn pointer_up(
        &mut self,
        scene: &DetectionSet,
        primary: bool,
        shift: bool,
        selection: &mut Selection<ObjectId>,
    ) -> bool {
        if !primary {
            return false;
        }
        let before = selection.revision();

        if let Some(drag) = self.drag.take() {
            if drag.has_moved() {
                let hits = scene.marquee_hits(drag.rect());
                if shift {
                    selection.extend_with(hits);
                } else {
                    selection.replace_with(hits);
                }
            } else {
                selection.clear();
            }
        } else if !self.hover.is_empty() {
            let target = self.hover[self.active];
            if shift {
                selection.toggle(target);
            } else {
                selection.select_only(target);
            }
            self.active = (self.active + 1) % self.hover.len();
        } else {
            selection.clear();
        }

        self.repaint = true;
        selection.revision() != before
    }

    /// Handles the pointer leaving the surface.
    ///
    /// Cancels any in-progress drag, discarding its rectangle without
    /// touching the selection. The hover stack is left as-is; the next move
    /// event rebuilds it.
    pub fn pointer_leave(&mut self) {
        if self.drag.take().is_some() {
            self.repaint = true;
        }
    }

    /// Returns the boxes currently under the pointer, topmost first.
    #[must_use]
    pub fn hover_stack(&self) -> &[ObjectId] {
        &self.hover
    }

    /// Returns the box the next click would commit, if any.
    #[must_use]
    pub fn active_hover(&self) -> Option<ObjectId> {
        self.hover.get(self.active).copied()
    }

    /// Returns `true` while a marquee drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns the marquee rectangle to draw, once the drag has left the
    /// dead zone. `None` for an armed-but-stationary press, so a click never
    /// flashes a degenerate rectangle.
    #[must_use]
    pub fn marquee_rect(&self) -> Option<Rect> {
        self.drag.as_ref().filter(|d| d.has_moved()).map(MarqueeDrag::rect)
    }

    /// Returns the cursor affordance for the current hover state.
    #[must_use]
    pub fn cursor_hint(&self) -> CursorHint {
        if self.hover.is_empty() {
            CursorHint::Crosshair
        } else {
            CursorHint::Pointer
        }
    }

    /// Drains the repaint flag, returning whether a redraw is due.
    #[must_use]
    pub fn take_repaint(&mut self) -> bool {
        core::mem::take(&mut self.repaint)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use kurbo::Rect;
    use marquee_scene::DetectedObject;

    use super::*;

    fn scene_one_box() -> DetectionSet {
        DetectionSet::new(vec![DetectedObject::new(
            Rect::new(100.0, 100.0, 200.0, 200.0),
            "cat",
            0.9,
        )])
    }

    #[test]
    fn hover_flips_cursor_hint() {
        let scene = scene_one_box();
        let mut engine = PickEngine::new();

        assert_eq!(
            engine.pointer_move(&scene, Point::new(10.0, 10.0)),
            CursorHint::Crosshair
        );
        assert_eq!(
            engine.pointer_move(&scene, Point::new(150.0, 150.0)),
            CursorHint::Pointer
        );
    }

    #[test]
    fn drag_only_arms_on_primary_over_empty_space() {
        let scene = scene_one_box();
        let mut engine = PickEngine::new();

        // Over the box: no drag.
        engine.pointer_move(&scene, Point::new(150.0, 150.0));
        engine.pointer_down(Point::new(150.0, 150.0), true);
        assert!(!engine.is_dragging());

        // Empty space, secondary button: no drag.
        engine.pointer_move(&scene, Point::new(10.0, 10.0));
        engine.pointer_down(Point::new(10.0, 10.0), false);
        assert!(!engine.is_dragging());

        // Empty space, primary button: armed.
        engine.pointer_down(Point::new(10.0, 10.0), true);
        assert!(engine.is_dragging());
    }

    #[test]
    fn marquee_rect_hidden_inside_dead_zone() {
        let scene = scene_one_box();
        let mut engine = PickEngine::new();

        engine.pointer_move(&scene, Point::new(10.0, 10.0));
        engine.pointer_down(Point::new(10.0, 10.0), true);
        assert_eq!(engine.marquee_rect(), None);

        engine.pointer_move(&scene, Point::new(13.0, 13.0));
        assert_eq!(engine.marquee_rect(), None);

        engine.pointer_move(&scene, Point::new(40.0, 40.0));
        assert_eq!(engine.marquee_rect(), Some(Rect::new(10.0, 10.0, 40.0, 40.0)));
    }

    #[test]
    fn hover_is_frozen_while_dragging() {
        let scene = scene_one_box();
        let mut engine = PickEngine::new();

        engine.pointer_move(&scene, Point::new(10.0, 10.0));
        engine.pointer_down(Point::new(10.0, 10.0), true);

        // Sweep across the box: hover stays empty until the drag ends.
        let hint = engine.pointer_move(&scene, Point::new(150.0, 150.0));
        assert_eq!(hint, CursorHint::Crosshair);
        assert!(engine.hover_stack().is_empty());
    }

    #[test]
    fn pointer_leave_cancels_drag_without_selection_change() {
        let scene = scene_one_box();
        let mut engine = PickEngine::new();
        let mut selection = Selection::new();
        selection.select_only(scene.ids().next().unwrap());
        let rev = selection.revision();

        engine.pointer_move(&scene, Point::new(10.0, 10.0));
        engine.pointer_down(Point::new(10.0, 10.0), true);
        engine.pointer_move(&scene, Point::new(300.0, 300.0));
        engine.pointer_leave();

        assert!(!engine.is_dragging());
        assert_eq!(selection.revision(), rev);

        // The release after re-entry is not a drag commit; with nothing
        // hovered it clears instead.
        let changed = engine.pointer_up(&scene, true, false, &mut selection);
        assert!(changed);
        assert!(selection.is_empty());
    }

    #[test]
    fn repaint_flag_drains_once() {
        let scene = scene_one_box();
        let mut engine = PickEngine::new();

        assert!(!engine.take_repaint());
        engine.pointer_move(&scene, Point::new(150.0, 150.0));
        assert!(engine.take_repaint());
        assert!(!engine.take_repaint());

        // Moving within the same hover stack is not a repaint.
        engine.pointer_move(&scene, Point::new(151.0, 151.0));
        assert!(!engine.take_repaint());
    }
}
