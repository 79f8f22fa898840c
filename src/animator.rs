// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! The visibility transition strategy.

use crate::widgets::CaptionLabel;

/// Performs the visual transition of the caption between hidden and shown.
///
/// Implementations drive the caption's public animation channels
/// ([`jump_alpha`], [`animate_y_to`], …); the host's animation clock then
/// advances them. Install a custom implementation with
/// [`FloatLabel::set_caption_animator`].
///
/// [`jump_alpha`]: CaptionLabel::jump_alpha
/// [`animate_y_to`]: CaptionLabel::animate_y_to
/// [`FloatLabel::set_caption_animator`]: crate::FloatLabel::set_caption_animator
pub trait CaptionAnimator {
    /// Called when the caption should become visible.
    fn on_show_caption(&mut self, label: &mut CaptionLabel);

    /// Called when the caption should become invisible.
    fn on_hide_caption(&mut self, label: &mut CaptionLabel);
}

/// The traditional float-label motion: a vertical shift and fade.
///
/// Showing resets the caption half its own height below its slot, then fades
/// in while rising into place; hiding fades out while dropping back down into
/// the placeholder position.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCaptionAnimator;

impl DefaultCaptionAnimator {
    /// How long either transition takes.
    pub const TRANSITION_MILLIS: f32 = 200.;
}

impl CaptionAnimator for DefaultCaptionAnimator {
    fn on_show_caption(&mut self, label: &mut CaptionLabel) {
        let offset = (label.size().height / 2.) as f32;
        if label.y_offset() != offset {
            label.jump_y(offset);
        }
        label.animate_alpha_to(1., Self::TRANSITION_MILLIS);
        label.animate_y_to(0., Self::TRANSITION_MILLIS);
    }

    fn on_hide_caption(&mut self, label: &mut CaptionLabel) {
        let offset = (label.size().height / 2.) as f32;
        if label.y_offset() != 0. {
            label.jump_y(0.);
        }
        label.animate_alpha_to(0., Self::TRANSITION_MILLIS);
        label.animate_y_to(offset, Self::TRANSITION_MILLIS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_constraints::BoxConstraints;

    fn measured_label() -> CaptionLabel {
        let mut label = CaptionLabel::new("Name").with_line_height(20.);
        label.measure(&BoxConstraints::UNBOUNDED);
        label
    }

    #[test]
    fn show_starts_from_half_height_below() {
        let mut label = measured_label();
        let mut animator = DefaultCaptionAnimator;
        animator.on_show_caption(&mut label);

        assert_eq!(label.y_offset(), 10.);
        assert_eq!(label.alpha_target(), 1.);
        assert!(label.is_animating());

        label.advance_animations(DefaultCaptionAnimator::TRANSITION_MILLIS + 1.);
        assert_eq!(label.alpha(), 1.);
        assert_eq!(label.y_offset(), 0.);
    }

    #[test]
    fn hide_drops_into_placeholder_position() {
        let mut label = measured_label();
        label.show_instant();
        // Leave the label mid-rise to exercise the reset branch.
        label.jump_y(3.);

        let mut animator = DefaultCaptionAnimator;
        animator.on_hide_caption(&mut label);
        assert_eq!(label.y_offset(), 0.);

        label.advance_animations(DefaultCaptionAnimator::TRANSITION_MILLIS + 1.);
        assert_eq!(label.alpha(), 0.);
        assert_eq!(label.y_offset(), 10.);
    }
}
