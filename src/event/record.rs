//! The unit of registration.

use std::fmt;
use std::sync::Arc;

use crate::introspect::ElementMeta;

use super::binding::StringBinding;
use super::value::{ElementId, Payload, Value};

/// How a record participates in delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventKind {
    /// Transient observation of a composition pass; never registered.
    #[default]
    Compose,
    /// Addressable registration, target of `send`.
    Receive,
}

/// Callback invoked with the record when an event fires.
///
/// A handler must never `send` to one of its own ids from inside itself --
/// that recurses without bound. This is the caller's responsibility.
pub type Handler = Arc<dyn Fn(&EventRecord) + Send + Sync>;

/// Registration details for one element: the identity it exposes, the
/// handler to run, and the payload most recently delivered to it.
///
/// Records are built fresh on every composition pass. Receive records are
/// handed to the registry, which owns them from then on; Compose records
/// are used once and discarded.
#[derive(Clone, Default)]
pub struct EventRecord {
    /// How this record participates in delivery.
    pub kind: EventKind,
    /// Callback to run on delivery (or once, for Compose records).
    pub handler: Option<Handler>,
    /// Identifiers discovered for the owning element, in traversal order.
    /// The last one is the most specific.
    pub ids: Vec<ElementId>,
    /// Data last delivered; replaced wholesale on each send.
    pub payload: Payload,
    /// Tag values discovered alongside the identifiers.
    pub tags: Vec<Value>,
    /// Two-way text bindings discovered during traversal.
    pub text_bindings: Vec<StringBinding>,
}

impl EventRecord {
    /// An empty record with default kind and no handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// A transient record observing one composition pass.
    pub fn transient<F>(meta: ElementMeta, action: F) -> Self
    where
        F: Fn(&EventRecord) + Send + Sync + 'static,
    {
        Self::from_parts(EventKind::Compose, meta, Arc::new(action))
    }

    /// A record addressable by `send`.
    pub fn receiver<F>(meta: ElementMeta, action: F) -> Self
    where
        F: Fn(&EventRecord) + Send + Sync + 'static,
    {
        Self::from_parts(EventKind::Receive, meta, Arc::new(action))
    }

    fn from_parts(kind: EventKind, meta: ElementMeta, handler: Handler) -> Self {
        Self {
            kind,
            handler: Some(handler),
            ids: meta.ids,
            payload: Payload::new(),
            tags: meta.tags,
            text_bindings: meta.text_bindings,
        }
    }
}

impl fmt::Debug for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRecord")
            .field("kind", &self.kind)
            .field("has_handler", &self.handler.is_some())
            .field("ids", &self.ids)
            .field("payload", &self.payload)
            .field("tags", &self.tags)
            .field("text_bindings", &self.text_bindings)
            .finish()
    }
}
