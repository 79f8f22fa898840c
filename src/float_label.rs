// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Insets, Point, Rect, Size};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace, trace_span};

use crate::animator::{CaptionAnimator, DefaultCaptionAnimator};
use crate::box_constraints::BoxConstraints;
use crate::config::FieldConfiguration;
use crate::event::{PointerEvent, TextEvent};
use crate::gravity::{child_left_edge, LayoutDirection};
use crate::state::{ElementState, StateBundle};
use crate::template::{ElementId, Template};
use crate::watcher::{CaptionCommand, CaptionVisibility, EmptinessWatcher};
use crate::widgets::{CaptionLabel, TextField};

const SAVE_STATE_KEY_TEXT_FIELD: &str = "textField";
const SAVE_STATE_KEY_CAPTION_LABEL: &str = "captionLabel";
const SAVE_STATE_KEY_FOCUS: &str = "focus";
const SAVE_STATE_KEY_TAG: &str = "tag";
const SAVE_STATE_KEY_PARENT: &str = "parent";

/// A text input with a floating caption.
///
/// The caption sits as placeholder text inside the empty field and animates
/// into a small label above the field once the user enters text. The widget
/// owns exactly two children, a [`TextField`] and a [`CaptionLabel`], and is
/// closed: the children are resolved from a [`Template`] at construction and
/// no attachment API exists afterwards.
///
/// In dialog mode the field is not focusable by touch and a press instead
/// invokes the installed dialog listener, signaling that an external picker
/// should open.
pub struct FloatLabel {
    text_field: TextField,
    caption_label: CaptionLabel,
    text_field_id: ElementId,
    caption_label_id: ElementId,
    watcher: EmptinessWatcher,
    animator: Box<dyn CaptionAnimator>,
    dialog_listener: Option<Box<dyn FnMut(ElementId)>>,
    is_dialog: bool,
    padding: Insets,
    direction: LayoutDirection,
    base: ElementState,
    /// Restored state waiting to be applied at the next measure pass.
    pending_restore: Option<StateBundle>,
    size: Size,
}

// --- MARK: BUILDERS
impl FloatLabel {
    /// Creates a floating-label field over the standard template, with
    /// `caption` as placeholder and caption text.
    pub fn new(caption: impl Into<String>) -> Self {
        Self::build(Template::standard(caption), FieldConfiguration::default())
    }

    /// Builds the composite from a template and a resolved configuration.
    ///
    /// Locates the text field and caption label children by the configured
    /// identifiers, falling back to the default identifiers.
    ///
    /// # Panics
    ///
    /// If the template contains no locatable text field or no locatable
    /// caption label. Both are programmer errors: the composite cannot
    /// function without either child. The text field check runs before any
    /// other initialization step.
    pub fn build(mut template: Template, config: FieldConfiguration) -> Self {
        let mut text_field = match template.take_text_field(&config.text_field_id) {
            Some(field) => field,
            None => panic!(
                "FloatLabel template must contain a text field with id `{}` (or `{}`)",
                config.text_field_id,
                ElementId::edit_text(),
            ),
        };
        let mut caption_label = match template.take_caption_label(&config.caption_label_id) {
            Some(label) => label,
            None => panic!(
                "FloatLabel template must contain a caption label with id `{}` (or `{}`)",
                config.caption_label_id,
                ElementId::float_label(),
            ),
        };

        text_field.apply_configuration(&config);
        // The caption mirrors the field's placeholder.
        caption_label.set_text(text_field.hint().unwrap_or_default().to_owned());
        if let Some(color) = config.caption_color {
            caption_label.set_color(color);
        }

        if config.is_dialog {
            text_field.set_focusable_in_touch(false);
            text_field.set_trailing_affordance(true);
        }

        let visibility = if text_field.is_empty() {
            caption_label.hide_instant();
            CaptionVisibility::Hidden
        } else {
            caption_label.show_instant();
            CaptionVisibility::Shown
        };

        Self {
            text_field,
            caption_label,
            text_field_id: config.text_field_id,
            caption_label_id: config.caption_label_id,
            watcher: EmptinessWatcher::new(visibility),
            animator: Box::new(DefaultCaptionAnimator),
            dialog_listener: None,
            is_dialog: config.is_dialog,
            padding: Insets::ZERO,
            direction: LayoutDirection::default(),
            base: ElementState::default(),
            pending_restore: None,
            size: Size::ZERO,
        }
    }

    /// Builder-style method for setting the composite's padding.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Builder-style method for setting the layout direction.
    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }
}

// --- MARK: ACCESSORS
impl FloatLabel {
    /// The text field portion of this widget.
    pub fn text_field(&self) -> &TextField {
        &self.text_field
    }

    /// The caption label portion of this widget.
    pub fn caption_label(&self) -> &CaptionLabel {
        &self.caption_label
    }

    /// Whether the caption is currently shown above the field.
    pub fn caption_visibility(&self) -> CaptionVisibility {
        self.watcher.visibility()
    }

    /// Whether taps open an external picker instead of focusing the field.
    pub fn is_dialog(&self) -> bool {
        self.is_dialog
    }

    /// The composite's padding.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// The size from the last measurement pass.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The identifiers of the two children, text field first.
    pub fn children_ids(&self) -> SmallVec<[ElementId; 2]> {
        smallvec![self.text_field_id.clone(), self.caption_label_id.clone()]
    }
}

// --- MARK: OPERATIONS
impl FloatLabel {
    /// Sets the caption: the text shown above the field when it is non-empty
    /// and as the field's placeholder when it is empty.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        let caption = caption.into();
        self.text_field.set_hint(caption.clone());
        self.caption_label.set_text(caption);
    }

    /// Sets the field's text, animating the caption if the empty/non-empty
    /// boundary is crossed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text_field.set_text(text);
        self.after_text_changed();
    }

    /// Sets the field's text without animating the caption.
    ///
    /// The caption still snaps to the state matching the new text; only the
    /// transition animation is suppressed, and only for this one change.
    pub fn set_text_without_animation(&mut self, text: impl Into<String>) {
        self.watcher.suppress_next();
        self.text_field.set_text(text);
        self.after_text_changed();
    }

    /// Installs a caption animator, replacing the current one.
    pub fn set_caption_animator(&mut self, animator: impl CaptionAnimator + 'static) {
        self.animator = Box::new(animator);
    }

    /// Restores the default caption animator.
    pub fn reset_caption_animator(&mut self) {
        self.animator = Box::new(DefaultCaptionAnimator);
    }

    /// Installs the listener invoked when a press hits the field in dialog
    /// mode, passing the originating element's identifier.
    pub fn set_dialog_listener(&mut self, listener: impl FnMut(ElementId) + 'static) {
        self.dialog_listener = Some(Box::new(listener));
    }

    /// Gives the text field input focus.
    pub fn request_focus(&mut self) {
        self.text_field.request_focus();
    }

    /// Removes input focus from the text field.
    pub fn clear_focus(&mut self) {
        self.text_field.clear_focus();
    }

    fn after_text_changed(&mut self) {
        let command = self.watcher.after_text_changed(self.text_field.text());
        match command {
            CaptionCommand::AnimateShow => {
                debug!("caption transition: hidden -> shown");
                self.animator.on_show_caption(&mut self.caption_label);
            }
            CaptionCommand::AnimateHide => {
                debug!("caption transition: shown -> hidden");
                self.animator.on_hide_caption(&mut self.caption_label);
            }
            CaptionCommand::ShowInstant => self.caption_label.show_instant(),
            CaptionCommand::HideInstant => self.caption_label.hide_instant(),
            CaptionCommand::Keep => {}
        }
    }
}

// --- MARK: EVENTS
impl FloatLabel {
    /// Handles a user text editing event.
    ///
    /// Ignored in dialog mode, where the field is read-only.
    pub fn on_text_event(&mut self, event: TextEvent) {
        if self.is_dialog {
            trace!("ignoring text event in dialog mode");
            return;
        }
        let changed = match event {
            TextEvent::Insert(text) => {
                self.text_field.insert_text(&text);
                true
            }
            TextEvent::DeleteBackwards => self.text_field.delete_backwards(),
            TextEvent::Clear => self.text_field.clear(),
        };
        if changed {
            self.after_text_changed();
        }
    }

    /// Handles a pointer event in the widget's layout coordinate space.
    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        let PointerEvent::Press { position } = event else {
            return;
        };
        let field_rect =
            Rect::from_origin_size(self.text_field.origin(), self.text_field.size());
        if !field_rect.contains(position) {
            return;
        }
        if self.is_dialog {
            debug!("dialog-mode press on text field");
            if let Some(listener) = self.dialog_listener.as_mut() {
                listener(self.text_field_id.clone());
            }
        } else if self.text_field.is_focusable_in_touch() {
            self.text_field.request_focus();
        }
    }

    /// Advances caption animations by `interval` nanoseconds.
    ///
    /// Returns true if another animation frame should be scheduled.
    pub fn on_anim_frame(&mut self, interval: u64) -> bool {
        let millis = (interval as f64 / 1_000_000.) as f32;
        let status = self.caption_label.advance_animations(millis);
        !status.is_completed()
    }
}

// --- MARK: LAYOUT
impl FloatLabel {
    /// Measures the composite.
    ///
    /// Any staged restored state is applied exactly once at the top of the
    /// pass, before the children are measured. The composite's width is the
    /// larger of the two children's widths plus padding; its height is their
    /// sum plus padding; both subject to the constraints' exact / at-most /
    /// unconstrained policy.
    pub fn measure(&mut self, bc: &BoxConstraints) -> Size {
        let _span = trace_span!("FloatLabel::measure").entered();
        bc.debug_check("FloatLabel");

        self.commit_pending_restore();

        let child_bc = bc.loosen().shrink(self.padding.size());
        self.text_field.measure(&child_bc);
        self.caption_label.measure(&child_bc);

        self.size = Size::new(self.measure_width(bc), self.measure_height(bc));
        self.size
    }

    fn measure_width(&self, bc: &BoxConstraints) -> f64 {
        if bc.is_width_tight() {
            return bc.max().width;
        }
        let mut width = self
            .text_field
            .size()
            .width
            .max(self.caption_label.size().width);
        width += self.padding.x0 + self.padding.x1;
        if bc.is_width_bounded() {
            width = width.min(bc.max().width);
        }
        width.max(bc.min().width)
    }

    fn measure_height(&self, bc: &BoxConstraints) -> f64 {
        if bc.is_height_tight() {
            return bc.max().height;
        }
        let mut height = self.text_field.size().height + self.caption_label.size().height;
        height += self.padding.y0 + self.padding.y1;
        if bc.is_height_bounded() {
            height = height.min(bc.max().height);
        }
        height.max(bc.min().height)
    }

    /// Positions the children inside the measured size, with the widget's
    /// top-left corner at `origin`.
    ///
    /// The caption is placed first, honoring its gravity and margins; the
    /// text field goes directly below it, offset by the caption's measured
    /// height.
    pub fn layout(&mut self, origin: Point) {
        let _span = trace_span!("FloatLabel::layout").entered();

        let content_left = origin.x + self.padding.x0;
        let content_right = origin.x + self.size.width - self.padding.x1;
        let content_top = origin.y + self.padding.y0;

        let caption_alignment = self.caption_label.gravity().resolve(self.direction);
        let caption_margins = self.caption_label.margins();
        let caption_left = child_left_edge(
            caption_alignment,
            content_left,
            content_right,
            self.caption_label.size().width,
            &caption_margins,
        );
        self.caption_label
            .set_origin(Point::new(caption_left, content_top + caption_margins.y0));

        let field_alignment = self.text_field.gravity().resolve(self.direction);
        let field_margins = self.text_field.margins();
        let field_left = child_left_edge(
            field_alignment,
            content_left,
            content_right,
            self.text_field.size().width,
            &field_margins,
        );
        let field_top = content_top + self.caption_label.size().height + field_margins.y0;
        self.text_field.set_origin(Point::new(field_left, field_top));
    }
}

// --- MARK: PERSISTENCE
impl FloatLabel {
    /// Produces the widget's saved state: both children's native states, the
    /// field's focus flag, and the base element state, tagged as this
    /// widget's own.
    pub fn save_state(&self) -> StateBundle {
        let mut bundle = StateBundle::new();
        bundle.put_raw(SAVE_STATE_KEY_TEXT_FIELD, self.text_field.save_state());
        bundle.put_raw(SAVE_STATE_KEY_CAPTION_LABEL, self.caption_label.save_state());
        bundle.put_bool(SAVE_STATE_KEY_FOCUS, self.text_field.is_focused());
        bundle.put_bool(SAVE_STATE_KEY_TAG, true);
        bundle.put_raw(SAVE_STATE_KEY_PARENT, self.base.save());
        bundle
    }

    /// Stages a saved bundle for restoration.
    ///
    /// The base element portion is applied immediately; the children's state
    /// is held back and committed at the top of the next measure pass, since
    /// sibling elements may still be mid-restore when this is called. A
    /// bundle that is not tagged as this widget's own is ignored.
    pub fn restore_state(&mut self, state: StateBundle) {
        if state.get_bool(SAVE_STATE_KEY_TAG) != Some(true) {
            tracing::warn!("ignoring saved state not produced by a FloatLabel");
            return;
        }
        if let Some(blob) = state.get_raw(SAVE_STATE_KEY_PARENT) {
            self.base.restore(blob);
        }
        debug!("staging restored state until the next measure pass");
        self.pending_restore = Some(state);
    }

    fn commit_pending_restore(&mut self) {
        let Some(state) = self.pending_restore.take() else {
            return;
        };
        debug!("applying staged state");
        if let Some(blob) = state.get_raw(SAVE_STATE_KEY_TEXT_FIELD) {
            self.text_field.restore_state(blob);
        }
        if let Some(blob) = state.get_raw(SAVE_STATE_KEY_CAPTION_LABEL) {
            self.caption_label.restore_state(blob);
        }
        if state.get_bool(SAVE_STATE_KEY_FOCUS).unwrap_or(false) {
            self.text_field.request_focus();
        }
        // Re-sync the watcher with the restored content; the caption's
        // visual state came back through its own saved state, so this must
        // not animate.
        self.watcher.suppress_next();
        self.after_text_changed();
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use kurbo::Size;

    use super::*;
    use crate::config::Attributes;
    use crate::gravity::Gravity;
    use crate::template::Element;
    use crate::testing::Harness;

    fn label_with_heights(caption_height: f64, field_height: f64) -> FloatLabel {
        FloatLabel::build(
            Template::new()
                .with_child(
                    ElementId::edit_text(),
                    Element::TextField(
                        TextField::new()
                            .with_hint("Name")
                            .with_line_height(field_height),
                    ),
                )
                .with_child(
                    ElementId::float_label(),
                    Element::CaptionLabel(CaptionLabel::new("Name").with_line_height(caption_height)),
                ),
            FieldConfiguration::default(),
        )
    }

    #[test]
    fn starts_hidden_when_empty_and_shown_when_prefilled() {
        let empty = FloatLabel::new("Name");
        assert_eq!(empty.caption_visibility(), CaptionVisibility::Hidden);
        assert_eq!(empty.caption_label().alpha(), 0.);

        let attrs = Attributes::new().with_text("Alice");
        let prefilled = FloatLabel::build(
            Template::standard("Name"),
            FieldConfiguration::resolve(Some(&attrs)),
        );
        assert_eq!(prefilled.caption_visibility(), CaptionVisibility::Shown);
        assert_eq!(prefilled.caption_label().alpha(), 1.);
    }

    #[test]
    #[should_panic(expected = "must contain a text field")]
    fn missing_text_field_is_fatal() {
        let template = Template::new().with_child(
            ElementId::float_label(),
            Element::CaptionLabel(CaptionLabel::new("Name")),
        );
        let _ = FloatLabel::build(template, FieldConfiguration::default());
    }

    #[test]
    #[should_panic(expected = "must contain a caption label")]
    fn missing_caption_label_is_fatal() {
        let template = Template::new().with_child(
            ElementId::edit_text(),
            Element::TextField(TextField::new()),
        );
        let _ = FloatLabel::build(template, FieldConfiguration::default());
    }

    #[test]
    fn typing_shows_caption_once() {
        let mut harness = Harness::create(FloatLabel::new("Name"));
        assert_eq!(harness.root().caption_visibility(), CaptionVisibility::Hidden);

        harness.type_text("A");
        assert_eq!(harness.root().caption_visibility(), CaptionVisibility::Shown);
        assert!(harness.root().caption_label().is_animating());

        // Let the show transition finish, then keep typing; no new
        // transition may start.
        harness.animate_ms(300);
        assert!(!harness.root().caption_label().is_animating());
        harness.type_text("lice");
        assert!(!harness.root().caption_label().is_animating());
    }

    #[test]
    fn deleting_everything_hides_caption() {
        let mut harness = Harness::create(FloatLabel::new("Name"));
        harness.type_text("A");
        harness.animate_ms(300);

        harness.press_backspace();
        assert_eq!(harness.root().caption_visibility(), CaptionVisibility::Hidden);
        harness.animate_ms(300);
        assert_eq!(harness.root().caption_label().alpha(), 0.);
    }

    #[test]
    fn programmatic_set_without_animation_snaps() {
        let mut label = FloatLabel::new("Name");
        label.set_text_without_animation("Alice");
        assert_eq!(label.caption_visibility(), CaptionVisibility::Shown);
        assert_eq!(label.caption_label().alpha(), 1.);
        assert!(!label.caption_label().is_animating());

        // The suppression was one-shot: the next boundary crossing animates.
        label.set_text("");
        assert_eq!(label.caption_visibility(), CaptionVisibility::Hidden);
        assert!(label.caption_label().is_animating());
    }

    #[test]
    fn measure_exact_width_unconstrained_height() {
        let mut label = label_with_heights(20., 40.);
        let bc = BoxConstraints::new(
            Size::new(300., 0.),
            Size::new(300., f64::INFINITY),
        );
        let size = label.measure(&bc);
        assert_eq!(size.width, 300.);
        assert_eq!(size.height, 60.);
    }

    #[test]
    fn measure_adds_padding_outside_tight_axes() {
        let mut label = label_with_heights(20., 40.).with_padding(Insets::uniform(5.));
        let size = label.measure(&BoxConstraints::UNBOUNDED);
        assert_eq!(size.height, 70.);

        // An at-most bound clips the result.
        let clipped = label.measure(&BoxConstraints::loose(Size::new(1000., 45.)));
        assert_eq!(clipped.height, 45.);
    }

    #[test]
    fn layout_stacks_field_below_caption() {
        let mut label = label_with_heights(20., 40.);
        label.measure(&BoxConstraints::loose(Size::new(300., 300.)));
        label.layout(Point::ORIGIN);
        assert_eq!(label.caption_label().origin().y, 0.);
        assert_eq!(label.text_field().origin().y, 20.);
    }

    #[test]
    fn caption_gravity_end_places_at_right_edge_in_ltr() {
        let mut label = FloatLabel::build(
            Template::new()
                .with_child(
                    ElementId::edit_text(),
                    Element::TextField(TextField::new().with_hint("Name")),
                )
                .with_child(
                    ElementId::float_label(),
                    Element::CaptionLabel(
                        CaptionLabel::new("Name")
                            .with_font_size(10.)
                            .with_gravity(Gravity::End),
                    ),
                ),
            FieldConfiguration::default(),
        );
        label.measure(&BoxConstraints::tight(Size::new(100., 60.)));
        label.layout(Point::ORIGIN);
        let caption = label.caption_label();
        assert_eq!(caption.origin().x, 100. - caption.size().width);

        // Under RTL the same gravity resolves to the left edge.
        let mut rtl = label.with_layout_direction(LayoutDirection::RightToLeft);
        rtl.measure(&BoxConstraints::tight(Size::new(100., 60.)));
        rtl.layout(Point::ORIGIN);
        assert_eq!(rtl.caption_label().origin().x, 0.);
    }

    #[test]
    fn untagged_bundle_is_ignored() {
        let mut label = FloatLabel::new("Name");
        let mut foreign = StateBundle::new();
        foreign.put_bool("somebody", true);
        label.restore_state(foreign);
        label.measure(&BoxConstraints::UNBOUNDED);
        assert_eq!(label.text_field().text(), "");
        assert_matches!(label.caption_visibility(), CaptionVisibility::Hidden);
    }

    #[test]
    fn restore_is_deferred_until_measure() {
        let mut first = Harness::create(FloatLabel::new("Name"));
        first.type_text("Alice");
        first.root_mut().request_focus();
        let saved = first.root().save_state();

        let mut second = FloatLabel::new("Name");
        second.restore_state(saved);
        // Nothing applied yet: children restore only during measure.
        assert_eq!(second.text_field().text(), "");
        assert!(!second.text_field().is_focused());

        second.measure(&BoxConstraints::UNBOUNDED);
        assert_eq!(second.text_field().text(), "Alice");
        assert!(second.text_field().is_focused());
        assert_eq!(second.caption_visibility(), CaptionVisibility::Shown);
        // The re-sync is instant, not animated.
        assert!(!second.caption_label().is_animating());
    }

    #[test]
    fn dialog_mode_is_read_only() {
        let attrs = Attributes::new().with_dialog_mode(true);
        let mut harness = Harness::create(FloatLabel::build(
            Template::standard("Birthday"),
            FieldConfiguration::resolve(Some(&attrs)),
        ));
        assert!(!harness.root().text_field().is_focusable_in_touch());
        assert!(harness.root().text_field().has_trailing_affordance());

        harness.type_text("typing is inert");
        assert_eq!(harness.root().text_field().text(), "");
        assert_eq!(harness.root().caption_visibility(), CaptionVisibility::Hidden);
    }

    #[test]
    fn colors_and_theme_are_applied() {
        use peniko::Color;

        use crate::config::Theme;

        let attrs = Attributes::new()
            .with_hint("Name")
            .with_hint_color(Color::from_rgb8(120, 120, 120))
            .with_caption_color(Color::from_rgb8(0, 100, 255))
            .with_theme(Theme {
                font_size: Some(18.),
                text_color: Some(Color::from_rgb8(10, 10, 10)),
            });
        let label = FloatLabel::build(
            Template::standard("Name"),
            FieldConfiguration::resolve(Some(&attrs)),
        );
        assert_eq!(
            label.text_field().hint_color(),
            Some(Color::from_rgb8(120, 120, 120))
        );
        assert_eq!(label.text_field().font_size(), 18.);
        assert_eq!(
            label.text_field().text_color(),
            Some(Color::from_rgb8(10, 10, 10))
        );
        assert_eq!(
            label.caption_label().color(),
            Some(Color::from_rgb8(0, 100, 255))
        );
    }

    #[test]
    fn set_caption_updates_hint_and_label() {
        let mut label = FloatLabel::new("Name");
        label.set_caption("Full name");
        assert_eq!(label.text_field().hint(), Some("Full name"));
        assert_eq!(label.caption_label().text(), "Full name");
    }

    #[test]
    fn children_are_exactly_the_two_configured_ids() {
        let label = FloatLabel::new("Name");
        let ids = label.children_ids();
        assert_eq!(
            ids.as_slice(),
            [ElementId::edit_text(), ElementId::float_label()]
        );
    }

    #[test]
    fn next_focus_targets_reach_the_field() {
        use crate::config::NextFocus;

        let attrs = Attributes::new().with_next_focus(NextFocus {
            down: Some(ElementId::new("password")),
            ..NextFocus::default()
        });
        let label = FloatLabel::build(
            Template::standard("Name"),
            FieldConfiguration::resolve(Some(&attrs)),
        );
        let next = label.text_field().next_focus();
        assert_eq!(next.down, Some(ElementId::new("password")));
        assert_eq!(next.forward, None);
    }
}
