// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! The style-attribute source and the configuration resolved from it.

use peniko::Color;

use crate::template::ElementId;

/// What the software keyboard's action key should do when the field is focused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImeAction {
    #[default]
    Unspecified,
    Next,
    Done,
    Go,
    Search,
    Send,
}

/// The kind of content the text field accepts.
///
/// Only `MultilineText` allows user-entered newlines; every other kind
/// measures as a single line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    MultilineText,
    Number,
    Phone,
    Email,
    Password,
}

impl InputType {
    /// Whether text of this kind can span multiple lines.
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::MultilineText)
    }
}

/// Explicit focus-navigation targets for the text field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NextFocus {
    pub up: Option<ElementId>,
    pub down: Option<ElementId>,
    pub left: Option<ElementId>,
    pub right: Option<ElementId>,
    pub forward: Option<ElementId>,
}

/// A visual theme reference: style overrides applied to the text field after
/// the rest of the configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Theme {
    pub font_size: Option<f64>,
    pub text_color: Option<Color>,
}

/// The style-attribute source: named, optional configuration options.
///
/// Every option has a stated default, applied by
/// [`FieldConfiguration::resolve`] when the option is absent.
#[derive(Clone, Debug, Default)]
pub struct Attributes {
    text: Option<String>,
    hint: Option<String>,
    hint_color: Option<Color>,
    caption_color: Option<Color>,
    ime_action: Option<ImeAction>,
    input_type: Option<InputType>,
    next_focus: NextFocus,
    is_dialog: Option<bool>,
    theme: Option<Theme>,
    text_field_id: Option<ElementId>,
    caption_label_id: Option<ElementId>,
}

impl Attributes {
    /// Creates an attribute set with every option absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial field text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Placeholder/caption text.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Color of the placeholder text while it sits inside the field.
    pub fn with_hint_color(mut self, color: Color) -> Self {
        self.hint_color = Some(color);
        self
    }

    /// Accent color of the floating caption.
    pub fn with_caption_color(mut self, color: Color) -> Self {
        self.caption_color = Some(color);
        self
    }

    /// Action-key behavior of the software keyboard.
    pub fn with_ime_action(mut self, action: ImeAction) -> Self {
        self.ime_action = Some(action);
        self
    }

    /// Input constraint for the field's content.
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    /// Explicit focus-navigation targets.
    pub fn with_next_focus(mut self, next_focus: NextFocus) -> Self {
        self.next_focus = next_focus;
        self
    }

    /// Dialog mode: the field is read-only and taps open an external picker.
    pub fn with_dialog_mode(mut self, is_dialog: bool) -> Self {
        self.is_dialog = Some(is_dialog);
        self
    }

    /// Visual theme applied to the text field.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Overrides which template child plays the text-field role.
    pub fn with_text_field_id(mut self, id: ElementId) -> Self {
        self.text_field_id = Some(id);
        self
    }

    /// Overrides which template child plays the caption-label role.
    pub fn with_caption_label_id(mut self, id: ElementId) -> Self {
        self.caption_label_id = Some(id);
        self
    }
}

/// The immutable set of initialization options, resolved once at construction.
#[derive(Clone, Debug)]
pub struct FieldConfiguration {
    pub text: Option<String>,
    pub hint: Option<String>,
    pub hint_color: Option<Color>,
    pub caption_color: Option<Color>,
    pub ime_action: ImeAction,
    pub input_type: InputType,
    pub next_focus: NextFocus,
    pub is_dialog: bool,
    pub theme: Option<Theme>,
    pub text_field_id: ElementId,
    pub caption_label_id: ElementId,
}

impl FieldConfiguration {
    /// Resolves a configuration from an attribute source, applying stated
    /// defaults for absent options. A `None` source yields all defaults.
    pub fn resolve(attributes: Option<&Attributes>) -> Self {
        let Some(attrs) = attributes else {
            return Self {
                text: None,
                hint: None,
                hint_color: None,
                caption_color: None,
                ime_action: ImeAction::Unspecified,
                input_type: InputType::Text,
                next_focus: NextFocus::default(),
                is_dialog: false,
                theme: None,
                text_field_id: ElementId::edit_text(),
                caption_label_id: ElementId::float_label(),
            };
        };
        Self {
            text: attrs.text.clone(),
            hint: attrs.hint.clone(),
            hint_color: attrs.hint_color,
            caption_color: attrs.caption_color,
            ime_action: attrs.ime_action.unwrap_or_default(),
            input_type: attrs.input_type.unwrap_or_default(),
            next_focus: attrs.next_focus.clone(),
            is_dialog: attrs.is_dialog.unwrap_or(false),
            theme: attrs.theme,
            text_field_id: attrs
                .text_field_id
                .clone()
                .unwrap_or_else(ElementId::edit_text),
            caption_label_id: attrs
                .caption_label_id
                .clone()
                .unwrap_or_else(ElementId::float_label),
        }
    }
}

impl Default for FieldConfiguration {
    fn default() -> Self {
        Self::resolve(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_source_yields_defaults() {
        let config = FieldConfiguration::resolve(None);
        assert_eq!(config.input_type, InputType::Text);
        assert_eq!(config.ime_action, ImeAction::Unspecified);
        assert!(!config.is_dialog);
        assert_eq!(config.text_field_id, ElementId::edit_text());
        assert_eq!(config.caption_label_id, ElementId::float_label());
    }

    #[test]
    fn explicit_options_override_defaults() {
        let attrs = Attributes::new()
            .with_text("Alice")
            .with_hint("Name")
            .with_input_type(InputType::Email)
            .with_dialog_mode(true)
            .with_text_field_id(ElementId::new("custom_field"));
        let config = FieldConfiguration::resolve(Some(&attrs));
        assert_eq!(config.text.as_deref(), Some("Alice"));
        assert_eq!(config.hint.as_deref(), Some("Name"));
        assert_eq!(config.input_type, InputType::Email);
        assert!(config.is_dialog);
        assert_eq!(config.text_field_id, ElementId::new("custom_field"));
        // Unset options still default.
        assert_eq!(config.caption_label_id, ElementId::float_label());
    }
}
