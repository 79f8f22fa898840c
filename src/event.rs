// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! Events the host dispatches to the widget.

use kurbo::Point;

/// A text editing event targeting the text field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextEvent {
    /// Insert the given string at the cursor.
    Insert(String),
    /// Delete the character before the cursor.
    DeleteBackwards,
    /// Clear the whole field.
    Clear,
}

/// A pointer event, in the same coordinate space the widget was laid out in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The primary pointer was pressed.
    Press { position: Point },
    /// The primary pointer was released.
    Release { position: Point },
}
