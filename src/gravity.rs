// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! Horizontal placement policy for the composite's children.

use kurbo::Insets;

/// Alignment of a child within the horizontal space left to it by its parent.
///
/// `Start` and `End` are relative to the [`LayoutDirection`] and must be
/// [resolved](Gravity::resolve) to an absolute alignment before placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gravity {
    /// Leading edge: left in left-to-right layouts, right otherwise.
    #[default]
    Start,
    /// Centered within the available space.
    CenterHorizontal,
    /// Trailing edge: right in left-to-right layouts, left otherwise.
    End,
}

/// The direction in which the host lays text and children out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// A [`Gravity`] resolved against a [`LayoutDirection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

impl Gravity {
    /// Resolves this gravity to an absolute alignment.
    pub fn resolve(self, direction: LayoutDirection) -> HorizontalAlignment {
        match (self, direction) {
            (Self::Start, LayoutDirection::LeftToRight) => HorizontalAlignment::Left,
            (Self::Start, LayoutDirection::RightToLeft) => HorizontalAlignment::Right,
            (Self::End, LayoutDirection::LeftToRight) => HorizontalAlignment::Right,
            (Self::End, LayoutDirection::RightToLeft) => HorizontalAlignment::Left,
            (Self::CenterHorizontal, _) => HorizontalAlignment::Center,
        }
    }
}

/// Computes the left edge of a child of `width` placed between `parent_left`
/// and `parent_right` with the given alignment and margins.
///
/// Centered children offset by `left - right` margin, and right-aligned ones
/// ignore the left margin, matching conventional gravity arithmetic.
pub(crate) fn child_left_edge(
    alignment: HorizontalAlignment,
    parent_left: f64,
    parent_right: f64,
    width: f64,
    margins: &Insets,
) -> f64 {
    match alignment {
        HorizontalAlignment::Left => parent_left + margins.x0,
        HorizontalAlignment::Center => {
            parent_left + (parent_right - parent_left - width) / 2. + margins.x0 - margins.x1
        }
        HorizontalAlignment::Right => parent_right - width - margins.x1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_end_swap_under_rtl() {
        assert_eq!(
            Gravity::Start.resolve(LayoutDirection::LeftToRight),
            HorizontalAlignment::Left
        );
        assert_eq!(
            Gravity::Start.resolve(LayoutDirection::RightToLeft),
            HorizontalAlignment::Right
        );
        assert_eq!(
            Gravity::End.resolve(LayoutDirection::RightToLeft),
            HorizontalAlignment::Left
        );
        assert_eq!(
            Gravity::CenterHorizontal.resolve(LayoutDirection::RightToLeft),
            HorizontalAlignment::Center
        );
    }

    #[test]
    fn placement_arithmetic() {
        let margins = Insets::new(4., 0., 6., 0.);
        assert_eq!(
            child_left_edge(HorizontalAlignment::Left, 0., 100., 20., &margins),
            4.
        );
        assert_eq!(
            child_left_edge(HorizontalAlignment::Right, 0., 100., 20., &margins),
            74.
        );
        // Center: midpoint shifted by left minus right margin.
        assert_eq!(
            child_left_edge(HorizontalAlignment::Center, 0., 100., 20., &margins),
            38.
        );
    }
}
