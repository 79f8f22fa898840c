// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! Small shared helpers.

/// Horizontal advance per character, as a fraction of the font size.
///
/// This crate models text with deterministic fixed-advance metrics rather
/// than real shaping; see DESIGN.md.
pub(crate) const FIXED_ADVANCE_FACTOR: f64 = 0.5;

/// Line height as a fraction of the font size, when not set explicitly.
pub(crate) const LINE_HEIGHT_FACTOR: f64 = 1.25;

/// The measured width of `text` at `font_size` under the fixed-advance model.
pub(crate) fn text_advance(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * FIXED_ADVANCE_FACTOR
}

/// The number of display lines in `text`. Empty text still occupies one line.
pub(crate) fn line_count(text: &str) -> usize {
    text.split('\n').count().max(1)
}

/// The width of the widest display line in `text`.
pub(crate) fn widest_line_advance(text: &str, font_size: f64) -> f64 {
    text.split('\n')
        .map(|line| text_advance(line, font_size))
        .fold(0., f64::max)
}
