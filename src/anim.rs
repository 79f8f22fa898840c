// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! Animated values stepped by the host's animation clock.

use std::cmp::Ordering;

/// An `f32` value which can move towards a target value at a linear rate over time.
#[derive(Clone, Debug)]
pub struct AnimatedF32 {
    /// The value which self will eventually reach.
    target: f32,
    /// The current value.
    value: f32,
    /// The change in value every millisecond, which will not change over the lifetime of the value.
    rate_per_millisecond: f32,
}

impl AnimatedF32 {
    /// Creates a value which is not changing.
    pub fn stable(value: f32) -> Self {
        assert!(value.is_finite(), "invalid animated value");
        Self {
            target: value,
            value,
            rate_per_millisecond: 0.,
        }
    }

    /// The current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value this animation is heading towards.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether this value is still moving towards its target.
    pub fn is_animating(&self) -> bool {
        self.value != self.target
    }

    /// Sets the value immediately, cancelling any in-flight motion.
    pub fn jump_to(&mut self, value: f32) {
        assert!(value.is_finite(), "invalid animated value");
        self.value = value;
        self.target = value;
        self.rate_per_millisecond = 0.;
    }

    /// Moves this value to the `target` over `over_millis` milliseconds.
    /// Might change the current value, if `over_millis` is zero.
    ///
    /// `over_millis` should be non-negative.
    ///
    /// # Panics
    ///
    /// If `target` is not a finite value.
    pub fn move_to(&mut self, target: f32, over_millis: f32) {
        assert!(target.is_finite(), "invalid target value");
        assert!(over_millis.is_finite(), "invalid delay value");
        self.target = target;
        match over_millis.partial_cmp(&0.) {
            Some(Ordering::Equal) => self.value = target,
            Some(Ordering::Less) => {
                tracing::warn!("move_to: provided negative time step {over_millis}");
                self.value = target;
            }
            Some(Ordering::Greater) => {
                self.rate_per_millisecond = (self.target - self.value) / over_millis;
                debug_assert!(
                    self.rate_per_millisecond.is_finite(),
                    "Calculated invalid rate despite valid inputs. Current value is {}",
                    self.value
                );
            }
            None => panic!("Provided invalid time step {over_millis}"),
        }
    }

    /// Advances this animation by `by_millis` milliseconds.
    ///
    /// Returns the status of the animation after this advancement.
    pub fn advance(&mut self, by_millis: f32) -> AnimationStatus {
        assert!(by_millis.is_finite(), "invalid timestep value");

        let original_side = self
            .value
            .partial_cmp(&self.target)
            .expect("Target and value are not NaN.");

        self.value += self.rate_per_millisecond * by_millis;
        let other_side = self
            .value
            .partial_cmp(&self.target)
            .expect("Target and value are not NaN.");

        if other_side.is_eq() || original_side != other_side {
            self.value = self.target;
            self.rate_per_millisecond = 0.;
            AnimationStatus::Completed
        } else {
            AnimationStatus::Ongoing
        }
    }
}

/// The status an animation can be in.
///
/// Generally returned when an animation is advanced, to determine whether another
/// animation frame should be requested.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    /// The animation has finished.
    Completed,
    /// The animation is still running.
    Ongoing,
}

impl AnimationStatus {
    /// Return true if the animation has finished.
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Combines two statuses; the result is completed only when both are.
    pub fn and(self, other: AnimationStatus) -> AnimationStatus {
        if self.is_completed() && other.is_completed() {
            Self::Completed
        } else {
            Self::Ongoing
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn stable_value_completes_immediately() {
        let mut value = AnimatedF32::stable(0.5);
        assert!(!value.is_animating());
        assert_eq!(value.advance(16.), AnimationStatus::Completed);
        assert_eq!(value.value(), 0.5);
    }

    #[test]
    fn advances_linearly_and_clamps_at_target() {
        let mut value = AnimatedF32::stable(0.);
        value.move_to(1., 100.);
        assert!(value.is_animating());

        assert_eq!(value.advance(50.), AnimationStatus::Ongoing);
        assert!(approx_eq!(f32, value.value(), 0.5, epsilon = 1e-5));

        // Overshooting lands exactly on the target.
        assert_eq!(value.advance(500.), AnimationStatus::Completed);
        assert_eq!(value.value(), 1.);
        assert!(!value.is_animating());
    }

    #[test]
    fn zero_duration_jumps() {
        let mut value = AnimatedF32::stable(0.);
        value.move_to(1., 0.);
        assert_eq!(value.value(), 1.);
    }

    #[test]
    fn jump_to_cancels_motion() {
        let mut value = AnimatedF32::stable(0.);
        value.move_to(1., 100.);
        value.jump_to(0.25);
        assert!(!value.is_animating());
        assert_eq!(value.advance(1000.), AnimationStatus::Completed);
        assert_eq!(value.value(), 0.25);
    }

    #[test]
    fn retargeting_mid_flight() {
        let mut value = AnimatedF32::stable(0.);
        value.move_to(1., 100.);
        value.advance(50.);
        value.move_to(0., 100.);
        assert_eq!(value.target(), 0.);
        assert_eq!(value.advance(200.), AnimationStatus::Completed);
        assert_eq!(value.value(), 0.);
    }
}
