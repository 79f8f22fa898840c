// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! The template-resolution boundary: a small tree of elements locatable by
//! identifier, consumed during construction of the composite.

use std::fmt;
use std::sync::Arc;

use crate::widgets::{CaptionLabel, TextField};

/// A name identifying an element within a [`Template`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ElementId(Arc<str>);

impl ElementId {
    /// Creates an identifier from a name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The default identifier of the text field child.
    pub fn edit_text() -> Self {
        Self::new("edit_text")
    }

    /// The default identifier of the caption label child.
    pub fn float_label() -> Self {
        Self::new("float_label")
    }

    /// The identifier's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({:?})", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A child element a template can hold.
#[derive(Debug)]
pub enum Element {
    TextField(TextField),
    CaptionLabel(CaptionLabel),
}

/// An ordered tree of identified elements.
///
/// A template is consumed by value when a [`FloatLabel`] is built; the
/// composite that results holds exactly the children resolved here and
/// exposes no way to attach more.
///
/// [`FloatLabel`]: crate::FloatLabel
#[derive(Debug, Default)]
pub struct Template {
    children: Vec<(ElementId, Element)>,
}

impl Template {
    /// Creates an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard floating-label tree: one text field and one caption
    /// label under their default identifiers, sharing `hint` as caption.
    pub fn standard(hint: impl Into<String>) -> Self {
        let hint = hint.into();
        Self::new()
            .with_child(
                ElementId::edit_text(),
                Element::TextField(TextField::new().with_hint(hint.clone())),
            )
            .with_child(
                ElementId::float_label(),
                Element::CaptionLabel(CaptionLabel::new(hint)),
            )
    }

    /// Builder-style method for adding a child under an identifier.
    pub fn with_child(mut self, id: ElementId, element: Element) -> Self {
        self.children.push((id, element));
        self
    }

    /// The number of children currently in the template.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the template holds no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Removes and returns the text field identified by `id`, falling back
    /// to the default identifier. An element of the wrong kind never matches.
    pub(crate) fn take_text_field(&mut self, id: &ElementId) -> Option<TextField> {
        self.take_matching(id, |element| matches!(element, Element::TextField(_)))
            .or_else(|| {
                self.take_matching(&ElementId::edit_text(), |element| {
                    matches!(element, Element::TextField(_))
                })
            })
            .map(|element| match element {
                Element::TextField(field) => field,
                Element::CaptionLabel(_) => unreachable!("filtered by kind"),
            })
    }

    /// Removes and returns the caption label identified by `id`, falling
    /// back to the default identifier.
    pub(crate) fn take_caption_label(&mut self, id: &ElementId) -> Option<CaptionLabel> {
        self.take_matching(id, |element| matches!(element, Element::CaptionLabel(_)))
            .or_else(|| {
                self.take_matching(&ElementId::float_label(), |element| {
                    matches!(element, Element::CaptionLabel(_))
                })
            })
            .map(|element| match element {
                Element::CaptionLabel(label) => label,
                Element::TextField(_) => unreachable!("filtered by kind"),
            })
    }

    fn take_matching(
        &mut self,
        id: &ElementId,
        kind: impl Fn(&Element) -> bool,
    ) -> Option<Element> {
        let index = self
            .children
            .iter()
            .position(|(child_id, element)| child_id == id && kind(element))?;
        Some(self.children.remove(index).1)
    }
}
