//! Stateless façade for targeted delivery.

use std::sync::Arc;

use crate::event::{ElementId, EventRecord, Payload};
use crate::lifecycle::ScenePhase;
use crate::registry::EventRegistry;

/// Routes registrations and `send` calls to one [`EventRegistry`].
///
/// The registry is constructed once at startup and injected here; every
/// component that registers or sends holds a clone of the dispatcher.
/// Constructing a second registry has no effect on existing dispatchers --
/// delivery only ever targets the instance a dispatcher was built with.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<EventRegistry>,
}

impl Dispatcher {
    /// A dispatcher routing to `registry`.
    pub fn new(registry: Arc<EventRegistry>) -> Self {
        Self { registry }
    }

    /// Register a receive record. See [`EventRegistry::register`].
    pub fn register(&self, record: EventRecord) {
        self.registry.register(record);
    }

    /// The record currently registered under `id`, if any.
    pub fn lookup(&self, id: &ElementId) -> Option<EventRecord> {
        self.registry.lookup(id)
    }

    /// Deliver `payload` to whatever is registered under `id`.
    ///
    /// The handler runs synchronously, before this returns, on the calling
    /// thread -- no queueing in between. Returns whether anything was
    /// registered under `id`; a miss is silent.
    pub fn send(&self, id: impl Into<ElementId>, payload: Payload) -> bool {
        let id = id.into();
        self.registry.send(&id, payload)
    }

    /// Host lifecycle transition. Entering the background drops every
    /// registration, since their handlers may close over UI state that is
    /// about to be torn down.
    pub fn scene_phase_changed(&self, phase: ScenePhase) {
        if phase == ScenePhase::Background {
            tracing::info!("entering background; clearing event registrations");
            self.registry.clear();
        }
    }
}
