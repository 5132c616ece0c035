//! Metadata extraction by structural traversal.

use crate::event::{ElementId, StringBinding, Value};

use super::node::{FieldValue, ViewDesc};

/// Identifying metadata discovered for (or declared by) one element.
///
/// Two ways in: [`ElementMeta::of`] walks a wrapper chain and collects
/// whatever it recognizes (best-effort -- the chain's shape belongs to the
/// framework, not to us), or the builder methods declare the same values
/// directly, with nothing left to pattern-match.
#[derive(Debug, Clone, Default)]
pub struct ElementMeta {
    /// Identifiers, in traversal order; the last is the most specific.
    pub ids: Vec<ElementId>,
    /// Tag values found alongside the identifiers.
    pub tags: Vec<Value>,
    /// Two-way text bindings.
    pub text_bindings: Vec<StringBinding>,
}

impl ElementMeta {
    /// Empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an identifier directly.
    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.ids.push(id.into());
        self
    }

    /// Declare a tag directly.
    pub fn with_tag(mut self, tag: impl Into<Value>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Declare a text binding directly.
    pub fn with_text_binding(mut self, binding: StringBinding) -> Self {
        self.text_bindings.push(binding);
        self
    }

    /// Walk a composed element description and collect the identifying
    /// metadata its wrapper chain exposes.
    ///
    /// Recognized labels: `content` (recurse into the wrapped child), `id`
    /// (append to ids), `modifier` (tag values sit behind `value` ->
    /// `tagged`), `text` (append the binding). Every other label is
    /// skipped, never an error, so chains may grow fields we have not seen.
    pub fn of(desc: &ViewDesc) -> Self {
        let mut meta = Self::new();
        meta.fill(desc);
        meta
    }

    fn fill(&mut self, desc: &ViewDesc) {
        for (label, value) in desc.fields() {
            match (label.as_str(), value) {
                ("content", FieldValue::Node(child)) => self.fill(child),
                ("id", FieldValue::Value(value)) => {
                    if let Some(id) = ElementId::from_value(value) {
                        self.ids.push(id);
                    }
                }
                ("modifier", FieldValue::Node(modifier)) => {
                    if let Some(tag) = tagged_value(modifier) {
                        self.tags.push(tag.clone());
                    }
                }
                ("text", FieldValue::Binding(binding)) => {
                    self.text_bindings.push(binding.clone());
                }
                _ => {}
            }
        }
    }
}

impl From<&ViewDesc> for ElementMeta {
    fn from(desc: &ViewDesc) -> Self {
        Self::of(desc)
    }
}

/// Tags are buried in modifier internals: `modifier` -> `value` -> `tagged`.
fn tagged_value(modifier: &ViewDesc) -> Option<&Value> {
    let FieldValue::Node(inner) = modifier.field("value")? else {
        return None;
    };
    match inner.field("tagged")? {
        FieldValue::Value(value) => Some(value),
        _ => None,
    }
}
