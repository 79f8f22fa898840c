// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! Tools and infrastructure for testing the widget.
//!
//! [`Harness`] is a safe headless environment standing in for the host: it
//! dispatches events the way a window would, runs the measure/layout passes
//! the host's render pipeline would run, and steps the animation clock in
//! frame-sized increments.

use std::sync::Once;

use kurbo::{Point, Size};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::box_constraints::BoxConstraints;
use crate::event::{PointerEvent, TextEvent};
use crate::float_label::FloatLabel;

/// Default window size for tests.
pub const HARNESS_DEFAULT_SIZE: Size = Size::new(400., 400.);

/// A safe headless environment to test the widget in.
///
/// ## Workflow
///
/// - Create a harness with some widget.
/// - Send events to the widget as if you were a user interacting with a
///   window. (Measure and layout passes are handled automatically.)
/// - Check that the state of the widget matches what you expect.
pub struct Harness {
    root: FloatLabel,
    window_constraints: BoxConstraints,
}

impl Harness {
    /// Creates a harness with the default window size.
    pub fn create(root: FloatLabel) -> Self {
        Self::create_with_constraints(root, BoxConstraints::loose(HARNESS_DEFAULT_SIZE))
    }

    /// Creates a harness measuring the widget under the given constraints.
    pub fn create_with_constraints(root: FloatLabel, constraints: BoxConstraints) -> Self {
        try_init_test_tracing();
        let mut harness = Self {
            root,
            window_constraints: constraints,
        };
        harness.run_layout_pass();
        harness
    }

    /// The widget under test.
    pub fn root(&self) -> &FloatLabel {
        &self.root
    }

    /// Mutable access to the widget under test.
    ///
    /// Mutations through this do not re-run layout; call
    /// [`run_layout_pass`](Self::run_layout_pass) if the test needs it.
    pub fn root_mut(&mut self) -> &mut FloatLabel {
        &mut self.root
    }

    /// Types `text` one character at a time, as a user would.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.root.on_text_event(TextEvent::Insert(ch.to_string()));
        }
        self.run_layout_pass();
    }

    /// Presses backspace once.
    pub fn press_backspace(&mut self) {
        self.root.on_text_event(TextEvent::DeleteBackwards);
        self.run_layout_pass();
    }

    /// Presses and releases the primary pointer at `position`.
    pub fn mouse_press_at(&mut self, position: impl Into<Point>) {
        let position = position.into();
        self.root.on_pointer_event(PointerEvent::Press { position });
        self.root
            .on_pointer_event(PointerEvent::Release { position });
    }

    /// Moves the animation clock forward by `ms` milliseconds, in
    /// frame-sized steps like a real compositor would.
    pub fn animate_ms(&mut self, ms: u64) {
        const FRAME_MILLIS: u64 = 16;
        let mut remaining = ms;
        while remaining > 0 {
            let step = remaining.min(FRAME_MILLIS);
            self.root.on_anim_frame(step * 1_000_000);
            remaining -= step;
        }
        self.run_layout_pass();
    }

    /// Runs a measure and layout pass, as the host would before painting.
    pub fn run_layout_pass(&mut self) {
        let constraints = self.window_constraints;
        self.root.measure(&constraints);
        self.root.layout(Point::ORIGIN);
    }
}

/// Initializes a tracing subscriber for unit tests, once per process.
///
/// Most messages are suppressed; set `RUST_LOG` to see more.
fn try_init_test_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
