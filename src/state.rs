// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! The state container used for save/restore.
//!
//! The host treats saved state as an opaque serializable value; this crate
//! treats it as a mapping from string keys to nested bundles, booleans, or
//! opaque native-state blobs produced by individual elements.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A value stored in a [`StateBundle`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StateValue {
    /// A nested bundle.
    Bundle(StateBundle),
    /// A boolean flag.
    Bool(bool),
    /// An element's native saved state, opaque to everyone but its producer.
    Raw(Vec<u8>),
}

/// A string-keyed bundle of saved state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateBundle {
    entries: HashMap<String, StateValue>,
}

impl StateBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a boolean under `key`, replacing any previous value.
    pub fn put_bool(&mut self, key: &str, value: bool) {
        self.entries.insert(key.to_owned(), StateValue::Bool(value));
    }

    /// Stores an opaque blob under `key`, replacing any previous value.
    pub fn put_raw(&mut self, key: &str, blob: Vec<u8>) {
        self.entries.insert(key.to_owned(), StateValue::Raw(blob));
    }

    /// Stores a nested bundle under `key`, replacing any previous value.
    pub fn put_bundle(&mut self, key: &str, bundle: StateBundle) {
        self.entries
            .insert(key.to_owned(), StateValue::Bundle(bundle));
    }

    /// Reads a boolean, or `None` if absent or of another kind.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(StateValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Reads an opaque blob, or `None` if absent or of another kind.
    pub fn get_raw(&self, key: &str) -> Option<&[u8]> {
        match self.entries.get(key) {
            Some(StateValue::Raw(blob)) => Some(blob.as_slice()),
            _ => None,
        }
    }

    /// Reads a nested bundle, or `None` if absent or of another kind.
    pub fn get_bundle(&self, key: &str) -> Option<&StateBundle> {
        match self.entries.get(key) {
            Some(StateValue::Bundle(bundle)) => Some(bundle),
            _ => None,
        }
    }

    /// Whether `key` is present, regardless of kind.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether the bundle holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The base element state every widget in the host carries: the "supertype"
/// portion of a composite's saved state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementState {
    /// Whether the element is drawn at all.
    pub visible: bool,
    /// Whether the element responds to input.
    pub enabled: bool,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            visible: true,
            enabled: true,
        }
    }
}

impl ElementState {
    pub(crate) fn save(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("ElementState is always serializable")
    }

    /// Applies a saved blob, returning false (and leaving self untouched) if
    /// the blob does not parse.
    pub(crate) fn restore(&mut self, blob: &[u8]) -> bool {
        match serde_json::from_slice(blob) {
            Ok(state) => {
                *self = state;
                true
            }
            Err(error) => {
                tracing::warn!("discarding malformed base element state: {error}");
                false
            }
        }
    }
}
