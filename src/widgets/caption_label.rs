// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Insets, Point, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};

use crate::anim::{AnimatedF32, AnimationStatus};
use crate::box_constraints::BoxConstraints;
use crate::gravity::Gravity;
use crate::util;

/// The caption child of a [`FloatLabel`].
///
/// Draws nothing itself; it models the caption's text, color, and the two
/// animated channels a [`CaptionAnimator`] drives: opacity and a vertical
/// offset relative to the caption's laid-out position.
///
/// [`FloatLabel`]: crate::FloatLabel
/// [`CaptionAnimator`]: crate::CaptionAnimator
#[derive(Debug)]
pub struct CaptionLabel {
    text: String,
    color: Option<Color>,
    alpha: AnimatedF32,
    y_offset: AnimatedF32,
    gravity: Gravity,
    margins: Insets,
    font_size: f64,
    line_height: Option<f64>,
    size: Size,
    origin: Point,
}

/// The caption's native saved state.
#[derive(Serialize, Deserialize)]
struct CaptionLabelState {
    text: String,
    alpha: f32,
    y_offset: f32,
}

// --- MARK: BUILDERS
impl CaptionLabel {
    /// Creates a caption with the given text, fully transparent.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            alpha: AnimatedF32::stable(0.),
            y_offset: AnimatedF32::stable(0.),
            gravity: Gravity::Start,
            margins: Insets::ZERO,
            font_size: 12.,
            line_height: None,
            size: Size::ZERO,
            origin: Point::ORIGIN,
        }
    }

    /// Builder-style method for setting the caption's accent color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder-style method for setting the layout gravity.
    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Builder-style method for setting layout margins.
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Builder-style method for setting the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Builder-style method for setting an explicit line height.
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = Some(line_height);
        self
    }
}

// --- MARK: ACCESSORS
impl CaptionLabel {
    /// The caption's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The caption's accent color, if configured.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Current opacity, between 0 and 1.
    pub fn alpha(&self) -> f32 {
        self.alpha.value()
    }

    /// The opacity the caption is animating towards.
    pub fn alpha_target(&self) -> f32 {
        self.alpha.target()
    }

    /// Current vertical offset from the laid-out position, in pixels.
    pub fn y_offset(&self) -> f32 {
        self.y_offset.value()
    }

    /// Whether either animated channel is still in motion.
    pub fn is_animating(&self) -> bool {
        self.alpha.is_animating() || self.y_offset.is_animating()
    }

    /// The caption's layout gravity.
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// The caption's layout margins.
    pub fn margins(&self) -> Insets {
        self.margins
    }

    /// The size from the last measurement pass.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The origin from the last layout pass.
    pub fn origin(&self) -> Point {
        self.origin
    }

    fn line_height(&self) -> f64 {
        self.line_height
            .unwrap_or(self.font_size * util::LINE_HEIGHT_FACTOR)
    }
}

// --- MARK: ANIMATION CHANNELS
// Public so caller-supplied animators can drive the same channels the
// default one does.
impl CaptionLabel {
    /// Sets the opacity immediately, cancelling any in-flight fade.
    pub fn jump_alpha(&mut self, alpha: f32) {
        self.alpha.jump_to(alpha);
    }

    /// Sets the vertical offset immediately, cancelling any in-flight shift.
    pub fn jump_y(&mut self, y_offset: f32) {
        self.y_offset.jump_to(y_offset);
    }

    /// Animates the opacity towards `target` over `over_millis`.
    pub fn animate_alpha_to(&mut self, target: f32, over_millis: f32) {
        self.alpha.move_to(target, over_millis);
    }

    /// Animates the vertical offset towards `target` over `over_millis`.
    pub fn animate_y_to(&mut self, target: f32, over_millis: f32) {
        self.y_offset.move_to(target, over_millis);
    }
}

// --- MARK: MUTATION & STATE
impl CaptionLabel {
    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    pub(crate) fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Snaps to the fully shown state without animating.
    pub(crate) fn show_instant(&mut self) {
        self.alpha.jump_to(1.);
        self.y_offset.jump_to(0.);
    }

    /// Snaps to the fully hidden state without animating.
    pub(crate) fn hide_instant(&mut self) {
        self.alpha.jump_to(0.);
    }

    /// Advances both animated channels by `millis`.
    pub(crate) fn advance_animations(&mut self, millis: f32) -> AnimationStatus {
        self.alpha.advance(millis).and(self.y_offset.advance(millis))
    }

    pub(crate) fn measure(&mut self, bc: &BoxConstraints) -> Size {
        let width = util::text_advance(&self.text, self.font_size);
        self.size = bc.constrain(Size::new(width, self.line_height()));
        self.size
    }

    pub(crate) fn save_state(&self) -> Vec<u8> {
        let state = CaptionLabelState {
            text: self.text.clone(),
            alpha: self.alpha.value(),
            y_offset: self.y_offset.value(),
        };
        serde_json::to_vec(&state).expect("CaptionLabelState is always serializable")
    }

    /// Applies a saved blob; malformed state is logged and skipped.
    pub(crate) fn restore_state(&mut self, blob: &[u8]) {
        let state: CaptionLabelState = match serde_json::from_slice(blob) {
            Ok(state) => state,
            Err(error) => {
                tracing::warn!("discarding malformed caption label state: {error}");
                return;
            }
        };
        self.text = state.text;
        self.alpha = AnimatedF32::stable(state.alpha);
        self.y_offset = AnimatedF32::stable(state.y_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let label = CaptionLabel::new("Name");
        assert_eq!(label.alpha(), 0.);
        assert!(!label.is_animating());
    }

    #[test]
    fn instant_show_and_hide() {
        let mut label = CaptionLabel::new("Name");
        label.show_instant();
        assert_eq!(label.alpha(), 1.);
        assert_eq!(label.y_offset(), 0.);
        label.hide_instant();
        assert_eq!(label.alpha(), 0.);
    }

    #[test]
    fn both_channels_advance_together() {
        let mut label = CaptionLabel::new("Name");
        label.animate_alpha_to(1., 100.);
        label.animate_y_to(8., 100.);
        assert!(label.is_animating());

        assert_eq!(label.advance_animations(50.), AnimationStatus::Ongoing);
        assert_eq!(label.advance_animations(60.), AnimationStatus::Completed);
        assert_eq!(label.alpha(), 1.);
        assert_eq!(label.y_offset(), 8.);
    }

    #[test]
    fn state_round_trip_preserves_animation_values() {
        let mut label = CaptionLabel::new("Name");
        label.show_instant();
        let saved = label.save_state();

        let mut restored = CaptionLabel::new("");
        restored.restore_state(&saved);
        assert_eq!(restored.text(), "Name");
        assert_eq!(restored.alpha(), 1.);
        assert!(!restored.is_animating());
    }

    #[test]
    fn measures_one_line_of_text() {
        let mut label = CaptionLabel::new("Name").with_font_size(10.).with_line_height(20.);
        let size = label.measure(&BoxConstraints::UNBOUNDED);
        assert_eq!(size, Size::new(util::text_advance("Name", 10.), 20.));
    }
}
