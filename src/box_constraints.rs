// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::Size;

/// Constraints for a measurement pass.
///
/// A widget's [`measure`] method should return a size that fits between the
/// minimum and maximum bounds. A container computes appropriate constraints
/// for each of its children and passes those down when recursing.
///
/// Three regimes matter to layout policy:
///
/// - *exact*: min and max agree on an axis ([`is_width_tight`]), so the
///   widget has no say in its size there.
/// - *at most*: the axis is bounded above but not pinned
///   ([`is_width_bounded`] without tightness).
/// - *unconstrained*: the maximum on the axis is infinite.
///
/// The bounds are always [rounded away from zero] to integers to enable
/// pixel perfect layout.
///
/// [`measure`]: crate::FloatLabel::measure
/// [`is_width_tight`]: Self::is_width_tight
/// [`is_width_bounded`]: Self::is_width_bounded
/// [rounded away from zero]: Size::expand
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxConstraints {
    min: Size,
    max: Size,
}

impl BoxConstraints {
    /// An unbounded box constraints object.
    ///
    /// Can be satisfied by any nonnegative size.
    pub const UNBOUNDED: BoxConstraints = BoxConstraints {
        min: Size::ZERO,
        max: Size::new(f64::INFINITY, f64::INFINITY),
    };

    /// Create a new box constraints object.
    ///
    /// The given sizes are also [rounded away from zero],
    /// so that the layout is aligned to integers.
    ///
    /// [rounded away from zero]: Size::expand
    pub fn new(min: Size, max: Size) -> BoxConstraints {
        BoxConstraints {
            min: min.expand(),
            max: max.expand(),
        }
    }

    /// Create constraints that can only be satisfied by `size` exactly.
    pub fn tight(size: Size) -> BoxConstraints {
        let size = size.expand();
        BoxConstraints {
            min: size,
            max: size,
        }
    }

    /// Create constraints with no minimum and the given maximum size.
    pub fn loose(max: Size) -> BoxConstraints {
        BoxConstraints {
            min: Size::ZERO,
            max: max.expand(),
        }
    }

    /// Returns a version of these constraints with the minimum removed.
    pub fn loosen(&self) -> BoxConstraints {
        BoxConstraints {
            min: Size::ZERO,
            max: self.max,
        }
    }

    /// Clamp a given size so that it fits within the constraints.
    ///
    /// The given size is also [rounded away from zero],
    /// so that the layout is aligned to integers.
    ///
    /// [rounded away from zero]: Size::expand
    pub fn constrain(&self, size: impl Into<Size>) -> Size {
        size.into().expand().clamp(self.min, self.max)
    }

    /// Returns the min size of these constraints.
    pub fn min(&self) -> Size {
        self.min
    }

    /// Returns the max size of these constraints.
    pub fn max(&self) -> Size {
        self.max
    }

    /// Whether there is an upper bound on the width.
    pub fn is_width_bounded(&self) -> bool {
        self.max.width.is_finite()
    }

    /// Whether there is an upper bound on the height.
    pub fn is_height_bounded(&self) -> bool {
        self.max.height.is_finite()
    }

    /// Whether the width is pinned to a single value.
    pub fn is_width_tight(&self) -> bool {
        self.max.width.is_finite() && self.min.width == self.max.width
    }

    /// Whether the height is pinned to a single value.
    pub fn is_height_tight(&self) -> bool {
        self.max.height.is_finite() && self.min.height == self.max.height
    }

    /// Shrink both bounds by `diff`, flooring at zero.
    ///
    /// The given size is also [rounded away from zero],
    /// so that the layout is aligned to integers.
    ///
    /// [rounded away from zero]: Size::expand
    pub fn shrink(&self, diff: impl Into<Size>) -> BoxConstraints {
        let diff = diff.into().expand();
        let min = Size::new(
            (self.min().width - diff.width).max(0.),
            (self.min().height - diff.height).max(0.),
        );
        let max = Size::new(
            (self.max().width - diff.width).max(0.),
            (self.max().height - diff.height).max(0.),
        );

        BoxConstraints::new(min, max)
    }

    /// Test whether these constraints contain the given `Size`.
    pub fn contains(&self, size: impl Into<Size>) -> bool {
        let size = size.into();
        (self.min.width <= size.width && size.width <= self.max.width)
            && (self.min.height <= size.height && size.height <= self.max.height)
    }

    /// Check to see if these constraints are legit.
    ///
    /// In debug mode, logs a warning if `BoxConstraints` are invalid.
    pub fn debug_check(&self, name: &str) {
        if cfg!(not(debug_assertions)) {
            return;
        }

        if !(0.0 <= self.min.width
            && self.min.width <= self.max.width
            && 0.0 <= self.min.height
            && self.min.height <= self.max.height
            && self.min.expand() == self.min
            && self.max.expand() == self.max)
        {
            tracing::warn!("Bad BoxConstraints passed to {}:", name);
            tracing::warn!("{:?}", self);
        }

        if self.min.width.is_nan() || self.min.height.is_nan() {
            tracing::warn!("Minimum constraint passed to {name} is NaN");
        }
        if self.max.width.is_nan() || self.max.height.is_nan() {
            tracing::warn!("Maximum constraint passed to {name} is NaN");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bc(min_width: f64, min_height: f64, max_width: f64, max_height: f64) -> BoxConstraints {
        BoxConstraints::new(
            Size::new(min_width, min_height),
            Size::new(max_width, max_height),
        )
    }

    #[test]
    fn unbounded() {
        assert!(!BoxConstraints::UNBOUNDED.is_width_bounded());
        assert!(!BoxConstraints::UNBOUNDED.is_height_bounded());
        assert!(!BoxConstraints::UNBOUNDED.is_width_tight());
    }

    #[test]
    fn tight_is_tight() {
        let bc = BoxConstraints::tight(Size::new(300., 40.));
        assert!(bc.is_width_tight());
        assert!(bc.is_height_tight());
        assert_eq!(bc.constrain(Size::new(10., 400.)), Size::new(300., 40.));
    }

    #[test]
    fn loose_is_not_tight() {
        let bc = BoxConstraints::loose(Size::new(300., 40.));
        assert!(bc.is_width_bounded());
        assert!(!bc.is_width_tight());
        assert_eq!(bc.constrain(Size::new(10., 400.)), Size::new(10., 40.));
    }

    #[test]
    fn shrink_floors_at_zero() {
        let shrunk = bc(10., 10., 100., 50.).shrink(Size::new(20., 20.));
        assert_eq!(shrunk.min(), Size::ZERO);
        assert_eq!(shrunk.max(), Size::new(80., 30.));
    }

    #[test]
    fn contains_respects_both_bounds() {
        let bc = bc(10., 10., 100., 50.);
        assert!(bc.contains(Size::new(10., 50.)));
        assert!(!bc.contains(Size::new(5., 20.)));
        assert!(!bc.contains(Size::new(20., 60.)));
    }
}
