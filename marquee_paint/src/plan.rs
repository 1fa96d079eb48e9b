// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame composition: one draw plan per redraw.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;
use marquee_engine::PickEngine;
use marquee_scene::{DetectionSet, ObjectId};
use marquee_selection::Selection;

use crate::style::{ObjectState, Role, label_text};

/// Draw instructions for one box.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxPaint {
    /// The object this paints.
    pub id: ObjectId,
    /// Box bounds in image space.
    pub bounds: Rect,
    /// Resolved render role; look up colors via [`Theme::style_for`].
    ///
    /// [`Theme::style_for`]: crate::Theme::style_for
    pub role: Role,
    /// Label text, already formatted.
    pub label: String,
}

/// A complete, ordered draw plan for one frame.
///
/// Boxes appear in draw order (bottom first), matching the stacking the hit
/// queries assume. The marquee rectangle, when present, is drawn above
/// everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FramePlan {
    /// All boxes, bottom-most first.
    pub boxes: Vec<BoxPaint>,
    /// Rubber-band rectangle in image space, once the drag left its dead
    /// zone.
    pub marquee: Option<Rect>,
}

/// Composes the draw plan for the current interaction state.
///
/// This function is pure: it reads the scene, the engine's transient state,
/// and the committed selection, and produces the same plan for the same
/// inputs. Hosts call it whenever a repaint is due and hand the plan to
/// their renderer of choice.
#[must_use]
pub fn compose(
    scene: &DetectionSet,
    engine: &PickEngine,
    selection: &Selection<ObjectId>,
) -> FramePlan {
    let active = engine.active_hover();
    let boxes = scene
        .iter()
        .map(|(id, obj)| {
            let mut state = ObjectState::empty();
            if selection.contains(&id) {
                state |= ObjectState::SELECTED;
            }
            if engine.hover_stack().contains(&id) {
                state |= ObjectState::HOVERED;
                if active == Some(id) {
                    state |= ObjectState::ACTIVE_HOVER;
                }
            }
            BoxPaint {
                id,
                bounds: obj.bounds,
                role: Role::resolve(state),
                label: label_text(&obj.category, obj.score),
            }
        })
        .collect();

    FramePlan {
        boxes,
        marquee: engine.marquee_rect(),
    }
}
