// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-object render roles and the color theme.

use alloc::format;
use alloc::string::String;
use peniko::Color;

bitflags::bitflags! {
    /// Render-state flags for one detected object.
    ///
    /// `HOVERED` marks every box in the hover stack; `ACTIVE_HOVER`
    /// additionally marks the one the next click would commit. `SELECTED`
    /// marks membership in the committed selection set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ObjectState: u8 {
        /// The object is in the committed selection set.
        const SELECTED     = 0b0000_0001;
        /// The object is under the pointer.
        const HOVERED      = 0b0000_0010;
        /// The object is the hover-cycle candidate for the next click.
        const ACTIVE_HOVER = 0b0000_0100;
    }
}

/// Resolved render role for one object, after precedence.
///
/// Precedence is selected > active-hover > hovered > default: a selected box
/// keeps its selected color even while hovered, and the active cycle
/// candidate stands out from the rest of its stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    /// Not selected, not hovered.
    #[default]
    Default,
    /// In the hover stack but not the active candidate.
    Hovered,
    /// The hover-cycle candidate for the next click.
    ActiveHover,
    /// In the committed selection.
    Selected,
}

impl Role {
    /// Resolves state flags into a role by precedence.
    #[must_use]
    pub fn resolve(state: ObjectState) -> Self {
        if state.contains(ObjectState::SELECTED) {
            Self::Selected
        } else if state.contains(ObjectState::ACTIVE_HOVER) {
            Self::ActiveHover
        } else if state.contains(ObjectState::HOVERED) {
            Self::Hovered
        } else {
            Self::Default
        }
    }
}

/// Stroke, fill, and label colors for one render role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStyle {
    /// Box outline color.
    pub stroke: Color,
    /// Translucent interior fill.
    pub fill: Color,
    /// Outline width in image-space pixels.
    pub stroke_width: f64,
    /// Label text color.
    pub label_color: Color,
}

/// Style of the rubber-band overlay rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeStyle {
    /// Outline color.
    pub stroke: Color,
    /// Translucent interior fill.
    pub fill: Color,
    /// Outline width in image-space pixels.
    pub stroke_width: f64,
    /// On/off lengths of the dashed outline.
    pub dash: [f64; 2],
}

/// Color theme mapping roles to box styles.
///
/// The defaults carry the conventional palette for detection overlays:
/// green for idle boxes, orange for the hover stack, yellow for the active
/// cycle candidate, red for selected, and a dashed blue marquee. Hovered and
/// selected boxes get the wider stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Style for [`Role::Default`].
    pub default_box: BoxStyle,
    /// Style for [`Role::Hovered`].
    pub hovered: BoxStyle,
    /// Style for [`Role::ActiveHover`].
    pub active_hover: BoxStyle,
    /// Style for [`Role::Selected`].
    pub selected: BoxStyle,
    /// Style for the marquee overlay.
    pub marquee: MarqueeStyle,
}

const FILL_ALPHA: f32 = 0.1;

impl Default for Theme {
    fn default() -> Self {
        Self {
            default_box: BoxStyle {
                stroke: Color::from_rgb8(0x00, 0xff, 0x00),
                fill: Color::from_rgb8(0x00, 0xff, 0x00).with_alpha(FILL_ALPHA),
                stroke_width: 4.0,
                label_color: Color::from_rgb8(0xff, 0xff, 0xff),
            },
            hovered: BoxStyle {
                stroke: Color::from_rgb8(0xff, 0xa5, 0x00),
                fill: Color::from_rgb8(0xff, 0xa5, 0x00).with_alpha(FILL_ALPHA),
                stroke_width: 6.0,
                label_color: Color::from_rgb8(0xff, 0xd7, 0x00),
            },
            active_hover: BoxStyle {
                stroke: Color::from_rgb8(0xff, 0xff, 0x00),
                fill: Color::from_rgb8(0xff, 0xff, 0x00).with_alpha(FILL_ALPHA),
                stroke_width: 6.0,
                label_color: Color::from_rgb8(0xff, 0xff, 0x99),
            },
            selected: BoxStyle {
                stroke: Color::from_rgb8(0xff, 0x00, 0x00),
                fill: Color::from_rgb8(0xff, 0x00, 0x00).with_alpha(FILL_ALPHA),
                stroke_width: 6.0,
                label_color: Color::from_rgb8(0xff, 0x99, 0x99),
            },
            marquee: MarqueeStyle {
                stroke: Color::from_rgb8(0x00, 0x66, 0xff),
                fill: Color::from_rgb8(0x00, 0x66, 0xff).with_alpha(FILL_ALPHA),
                stroke_width: 2.0,
                dash: [6.0, 6.0],
            },
        }
    }
}

impl Theme {
    /// Returns the box style for `role`.
    #[must_use]
    pub fn style_for(&self, role: Role) -> &BoxStyle {
        match role {
            Role::Default => &self.default_box,
            Role::Hovered => &self.hovered,
            Role::ActiveHover => &self.active_hover,
            Role::Selected => &self.selected,
        }
    }
}

/// Formats a box label as `"category (97.3%)"`.
///
/// The score is rendered as a percentage with one decimal place.
#[must_use]
pub fn label_text(category: &str, score: f64) -> String {
    format!("{category} ({:.1}%)", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_precedence_selected_wins() {
        let all = ObjectState::SELECTED | ObjectState::HOVERED | ObjectState::ACTIVE_HOVER;
        assert_eq!(Role::resolve(all), Role::Selected);
        assert_eq!(
            Role::resolve(ObjectState::HOVERED | ObjectState::ACTIVE_HOVER),
            Role::ActiveHover
        );
        assert_eq!(Role::resolve(ObjectState::HOVERED), Role::Hovered);
        assert_eq!(Role::resolve(ObjectState::empty()), Role::Default);
    }

    #[test]
    fn emphasis_roles_use_wide_stroke() {
        let theme = Theme::default();
        assert_eq!(theme.style_for(Role::Default).stroke_width, 4.0);
        assert_eq!(theme.style_for(Role::Hovered).stroke_width, 6.0);
        assert_eq!(theme.style_for(Role::ActiveHover).stroke_width, 6.0);
        assert_eq!(theme.style_for(Role::Selected).stroke_width, 6.0);
    }

    #[test]
    fn label_formats_score_with_one_decimal() {
        assert_eq!(label_text("person", 0.973), "person (97.3%)");
        assert_eq!(label_text("cat", 1.0), "cat (100.0%)");
        assert_eq!(label_text("dog", 0.0), "dog (0.0%)");
    }
}
