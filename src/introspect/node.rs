//! Structural description of a composed element.

use crate::event::{ElementId, StringBinding, Value};

/// Value side of one labeled field in a [`ViewDesc`].
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// A plain hashable value (identifiers, tags, flags).
    Value(Value),
    /// A two-way string binding (bound text).
    Binding(StringBinding),
    /// A nested structure (a wrapped child, a modifier's internals).
    Node(ViewDesc),
}

/// A composed element description: an ordered list of labeled fields,
/// arbitrarily nested.
///
/// Stands in for the framework's internal representation of a decorated
/// element. The builder methods assemble the same wrapper chains the
/// framework would: each decoration wraps the previous description under a
/// `content` field and adds its own fields beside it.
#[derive(Debug, Clone, Default)]
pub struct ViewDesc {
    fields: Vec<(String, FieldValue)>,
}

impl ViewDesc {
    /// An empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary labeled field.
    pub fn with_field(mut self, label: impl Into<String>, value: FieldValue) -> Self {
        self.fields.push((label.into(), value));
        self
    }

    /// Declare an identifier: wraps the description and records the id
    /// beside the wrapped child.
    pub fn with_id(self, id: impl Into<ElementId>) -> Self {
        let value = match id.into() {
            ElementId::Str(s) => Value::Str(s),
            ElementId::Uuid(u) => Value::Uuid(u),
        };
        Self::new()
            .with_field("content", FieldValue::Node(self))
            .with_field("id", FieldValue::Value(value))
    }

    /// Attach a tag: wraps the description in a modifier whose internals
    /// carry the tagged value under `value` -> `tagged`.
    pub fn with_tag(self, tag: impl Into<Value>) -> Self {
        let inner = Self::new().with_field("tagged", FieldValue::Value(tag.into()));
        let modifier = Self::new().with_field("value", FieldValue::Node(inner));
        Self::new()
            .with_field("content", FieldValue::Node(self))
            .with_field("modifier", FieldValue::Node(modifier))
    }

    /// Bind editable text to this element.
    pub fn with_text(self, binding: StringBinding) -> Self {
        self.with_field("text", FieldValue::Binding(binding))
    }

    /// Wrap in a plain decorator that exposes nothing of interest
    /// (padding, borders and the like).
    pub fn wrap(self) -> Self {
        Self::new()
            .with_field("content", FieldValue::Node(self))
            .with_field("modifier", FieldValue::Node(Self::new()))
    }

    /// The labeled fields, in order.
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// First field with the given label, if any.
    pub fn field(&self, label: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }
}
