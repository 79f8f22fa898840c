// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! Change detection: the emptiness state machine driven by text notifications.

/// Whether the caption is drawn above the field or acts as placeholder.
///
/// Always reflects the last transition target requested, not a transient
/// animation frame value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionVisibility {
    /// The caption is the field's placeholder and is not drawn.
    Hidden,
    /// The caption is drawn above the field.
    Shown,
}

/// What the composite should do to the caption after a text change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CaptionCommand {
    /// Run the animator's show transition.
    AnimateShow,
    /// Run the animator's hide transition.
    AnimateHide,
    /// Snap to shown without animating (suppressed notification).
    ShowInstant,
    /// Snap to hidden without animating (suppressed notification).
    HideInstant,
    /// The empty/non-empty boundary was not crossed.
    Keep,
}

/// Watches the field's content for empty/non-empty transitions.
///
/// The one-shot suppress flag is armed right before a programmatic text
/// assignment; it downgrades the very next notification to an instant state
/// change and then clears itself.
#[derive(Debug)]
pub(crate) struct EmptinessWatcher {
    visibility: CaptionVisibility,
    skip_next_animation: bool,
}

impl EmptinessWatcher {
    pub(crate) fn new(visibility: CaptionVisibility) -> Self {
        Self {
            visibility,
            skip_next_animation: false,
        }
    }

    pub(crate) fn visibility(&self) -> CaptionVisibility {
        self.visibility
    }

    /// Arms the one-shot suppress flag.
    pub(crate) fn suppress_next(&mut self) {
        self.skip_next_animation = true;
    }

    /// Processes one change notification, returning the caption command.
    pub(crate) fn after_text_changed(&mut self, text: &str) -> CaptionCommand {
        let empty = text.is_empty();
        let suppressed = std::mem::take(&mut self.skip_next_animation);

        match (empty, self.visibility) {
            (true, CaptionVisibility::Shown) => {
                self.visibility = CaptionVisibility::Hidden;
                if suppressed {
                    CaptionCommand::HideInstant
                } else {
                    CaptionCommand::AnimateHide
                }
            }
            (false, CaptionVisibility::Hidden) => {
                self.visibility = CaptionVisibility::Shown;
                if suppressed {
                    CaptionCommand::ShowInstant
                } else {
                    CaptionCommand::AnimateShow
                }
            }
            _ => CaptionCommand::Keep,
        }
    }
}
