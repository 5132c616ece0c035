//! Composition hooks: the glue between element descriptions and delivery.
//!
//! Both hooks chain off a [`ViewDesc`] and hand it back unchanged, so
//! further decoration can keep chaining -- the hook observes or registers,
//! it never alters the element.

use crate::dispatch::Dispatcher;
use crate::event::EventRecord;
use crate::introspect::{ElementMeta, ViewDesc};

impl ViewDesc {
    /// Observe a composition pass.
    ///
    /// `action` runs immediately and exactly once, with a transient record
    /// holding whatever metadata this description exposes. The record is
    /// never registered, so `send` cannot target it.
    pub fn on_compose<F>(self, action: F) -> Self
    where
        F: Fn(&EventRecord) + Send + Sync + 'static,
    {
        let record = EventRecord::transient(ElementMeta::of(&self), action);
        if let Some(handler) = record.handler.clone() {
            handler(&record);
        }
        self
    }

    /// Make this element addressable by `send`.
    ///
    /// Introspects the description and registers `action` under every
    /// identifier it exposes. An element exposing no identifier registers
    /// nothing -- not an error, there is simply no slot to occupy.
    pub fn on_receive<F>(self, dispatcher: &Dispatcher, action: F) -> Self
    where
        F: Fn(&EventRecord) + Send + Sync + 'static,
    {
        dispatcher.register(EventRecord::receiver(ElementMeta::of(&self), action));
        self
    }
}

/// Explicit registration: declare the element's metadata instead of having
/// it discovered by traversal.
///
/// Preferred over [`ViewDesc::on_receive`] when the caller already knows
/// the identifiers -- nothing is pattern-matched out of a wrapper chain,
/// so nothing can silently stop being found.
pub fn register_receiver<F>(dispatcher: &Dispatcher, meta: ElementMeta, action: F)
where
    F: Fn(&EventRecord) + Send + Sync + 'static,
{
    dispatcher.register(EventRecord::receiver(meta, action));
}
