// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! A floating-label text input widget, modeled headlessly.
//!
//! The widget, [`FloatLabel`], is a closed composite of two children: an
//! editable [`TextField`](widgets::TextField) and a
//! [`CaptionLabel`](widgets::CaptionLabel). The caption sits as placeholder
//! text inside the empty field and animates into a small label above the
//! field once the user enters text. A dialog mode makes the field read-only,
//! with taps invoking a listener that opens an external picker.
//!
//! This crate is not bound to a render or window backend. It owns the parts
//! of the control a host toolkit would delegate to a custom widget —
//! measurement and layout, the empty/non-empty transition state machine, the
//! animator strategy, and save/restore of the children's transient state —
//! and exposes the host boundaries as plain types: a [`Template`] resolves
//! the child tree, [`Attributes`] supply named configuration options,
//! [`StateBundle`] carries saved state, and the animation clock is driven
//! through [`FloatLabel::on_anim_frame`].
//!
//! # Example
//!
//! ```
//! use float_label::{Attributes, FieldConfiguration, FloatLabel, Template, TextEvent};
//!
//! let attrs = Attributes::new().with_hint("Name");
//! let mut field = FloatLabel::build(
//!     Template::standard("Name"),
//!     FieldConfiguration::resolve(Some(&attrs)),
//! );
//!
//! // The caption is hidden while the field is empty...
//! assert_eq!(field.caption_label().alpha(), 0.);
//!
//! // ...and starts its show transition on the first typed character.
//! field.on_text_event(TextEvent::Insert("A".into()));
//! assert_eq!(field.caption_label().alpha_target(), 1.);
//! ```

// Re-export the geometry and color crates the public API speaks.
pub use kurbo;
pub use peniko;

mod anim;
mod animator;
mod box_constraints;
mod config;
mod event;
mod float_label;
mod gravity;
mod state;
mod template;
mod util;
mod watcher;

pub mod testing;
pub mod widgets;

pub use anim::{AnimatedF32, AnimationStatus};
pub use animator::{CaptionAnimator, DefaultCaptionAnimator};
pub use box_constraints::BoxConstraints;
pub use config::{Attributes, FieldConfiguration, ImeAction, InputType, NextFocus, Theme};
pub use event::{PointerEvent, TextEvent};
pub use float_label::FloatLabel;
pub use gravity::{Gravity, HorizontalAlignment, LayoutDirection};
pub use state::{ElementState, StateBundle, StateValue};
pub use template::{Element, ElementId, Template};
pub use watcher::CaptionVisibility;
