// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Insets, Point, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};

use crate::box_constraints::BoxConstraints;
use crate::config::{FieldConfiguration, ImeAction, InputType, NextFocus, Theme};
use crate::gravity::Gravity;
use crate::util;

/// The editable child of a [`FloatLabel`].
///
/// Holds the field's text and cursor, its hint (the caption text while the
/// field is empty), focus state, and the input options resolved from the
/// configuration. All mutation goes through the owning composite, which is
/// how the emptiness watcher sees every change.
///
/// [`FloatLabel`]: crate::FloatLabel
#[derive(Debug)]
pub struct TextField {
    text: String,
    /// Byte index of the cursor, always on a char boundary.
    cursor: usize,
    scroll_offset: f64,
    hint: Option<String>,
    hint_color: Option<Color>,
    text_color: Option<Color>,
    focused: bool,
    focusable_in_touch: bool,
    /// Dialog mode draws a trailing "opens a picker" decorator.
    trailing_affordance: bool,
    ime_action: ImeAction,
    input_type: InputType,
    next_focus: NextFocus,
    gravity: Gravity,
    margins: Insets,
    font_size: f64,
    line_height: Option<f64>,
    size: Size,
    origin: Point,
}

/// The field's native saved state: content, cursor, and scroll.
#[derive(Serialize, Deserialize)]
struct TextFieldState {
    text: String,
    cursor: usize,
    scroll_offset: f64,
}

impl Default for TextField {
    fn default() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            scroll_offset: 0.,
            hint: None,
            hint_color: None,
            text_color: None,
            focused: false,
            focusable_in_touch: true,
            trailing_affordance: false,
            ime_action: ImeAction::Unspecified,
            input_type: InputType::Text,
            next_focus: NextFocus::default(),
            gravity: Gravity::Start,
            margins: Insets::ZERO,
            font_size: 14.,
            line_height: None,
            size: Size::ZERO,
            origin: Point::ORIGIN,
        }
    }
}

// --- MARK: BUILDERS
impl TextField {
    /// Creates an empty text field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method for setting the initial text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.cursor = self.text.len();
        self
    }

    /// Builder-style method for setting the hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
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

    /// Builder-style method for setting layout margins.
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Builder-style method for setting the layout gravity.
    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }
}

// --- MARK: ACCESSORS
impl TextField {
    /// The field's current content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the field holds no content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The hint shown while the field is empty.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// The hint's color, if configured.
    pub fn hint_color(&self) -> Option<Color> {
        self.hint_color
    }

    /// The text color, if a theme set one.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// The byte position of the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the field currently has input focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether a touch press can give the field focus. False in dialog mode.
    pub fn is_focusable_in_touch(&self) -> bool {
        self.focusable_in_touch
    }

    /// Whether the trailing "opens a picker" decorator is drawn.
    pub fn has_trailing_affordance(&self) -> bool {
        self.trailing_affordance
    }

    /// The configured keyboard action.
    pub fn ime_action(&self) -> ImeAction {
        self.ime_action
    }

    /// The configured input constraint.
    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    /// The configured focus-navigation targets.
    pub fn next_focus(&self) -> &NextFocus {
        &self.next_focus
    }

    /// The field's layout gravity.
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// The field's layout margins.
    pub fn margins(&self) -> Insets {
        self.margins
    }

    /// The font size used by the measurement model.
    pub fn font_size(&self) -> f64 {
        self.font_size
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

// --- MARK: MUTATION
impl TextField {
    pub(crate) fn apply_configuration(&mut self, config: &FieldConfiguration) {
        if let Some(hint) = &config.hint {
            self.hint = Some(hint.clone());
        }
        if let Some(text) = &config.text {
            self.set_text(text.clone());
        }
        if let Some(color) = config.hint_color {
            self.hint_color = Some(color);
        }
        self.ime_action = config.ime_action;
        self.input_type = config.input_type;
        self.next_focus = config.next_focus.clone();
        if let Some(theme) = config.theme {
            self.apply_theme(&theme);
        }
    }

    fn apply_theme(&mut self, theme: &Theme) {
        if let Some(font_size) = theme.font_size {
            self.font_size = font_size;
        }
        if let Some(color) = theme.text_color {
            self.text_color = Some(color);
        }
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
        self.scroll_offset = 0.;
    }

    pub(crate) fn set_hint(&mut self, hint: impl Into<String>) {
        self.hint = Some(hint.into());
    }

    /// Inserts `text` at the cursor, filtering newlines unless multiline.
    pub(crate) fn insert_text(&mut self, text: &str) {
        let filtered: String = if self.input_type.is_multiline() {
            text.to_owned()
        } else {
            text.chars().filter(|ch| *ch != '\n').collect()
        };
        self.text.insert_str(self.cursor, &filtered);
        self.cursor += filtered.len();
    }

    /// Deletes the character before the cursor. Returns whether the text changed.
    pub(crate) fn delete_backwards(&mut self) -> bool {
        let Some(prev) = self.text[..self.cursor].chars().next_back() else {
            return false;
        };
        let start = self.cursor - prev.len_utf8();
        self.text.remove(start);
        self.cursor = start;
        true
    }

    /// Empties the field. Returns whether the text changed.
    pub(crate) fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.cursor = 0;
        self.scroll_offset = 0.;
        true
    }

    pub(crate) fn request_focus(&mut self) {
        self.focused = true;
    }

    pub(crate) fn clear_focus(&mut self) {
        self.focused = false;
    }

    pub(crate) fn set_focusable_in_touch(&mut self, focusable: bool) {
        self.focusable_in_touch = focusable;
    }

    pub(crate) fn set_trailing_affordance(&mut self, affordance: bool) {
        self.trailing_affordance = affordance;
    }

    pub(crate) fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }
}

// --- MARK: MEASURE & STATE
impl TextField {
    /// Measures the field's content under the fixed-advance model and
    /// records the constrained result.
    pub(crate) fn measure(&mut self, bc: &BoxConstraints) -> Size {
        let shown: &str = if self.text.is_empty() {
            self.hint.as_deref().unwrap_or("")
        } else {
            &self.text
        };
        let mut width = util::widest_line_advance(shown, self.font_size);
        if self.trailing_affordance {
            // Leave room for the picker decorator at the trailing edge.
            width += self.line_height();
        }
        let lines = if self.input_type.is_multiline() {
            util::line_count(shown)
        } else {
            1
        };
        let height = lines as f64 * self.line_height();
        self.size = bc.constrain(Size::new(width, height));
        self.size
    }

    pub(crate) fn save_state(&self) -> Vec<u8> {
        let state = TextFieldState {
            text: self.text.clone(),
            cursor: self.cursor,
            scroll_offset: self.scroll_offset,
        };
        serde_json::to_vec(&state).expect("TextFieldState is always serializable")
    }

    /// Applies a saved blob; malformed state is logged and skipped.
    pub(crate) fn restore_state(&mut self, blob: &[u8]) {
        let state: TextFieldState = match serde_json::from_slice(blob) {
            Ok(state) => state,
            Err(error) => {
                tracing::warn!("discarding malformed text field state: {error}");
                return;
            }
        };
        self.text = state.text;
        self.cursor = state.cursor.min(self.text.len());
        while !self.text.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
        self.scroll_offset = state.scroll_offset;
    }
}
