//! Identifier-keyed cache of event registrations.
//!
//! One slot per identifier. The newest registration wins the slot, but the
//! previous occupant's payload is carried forward, so data delivered before
//! a re-composition survives it. Handlers and kind always come from the
//! newest registration.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::event::{ElementId, EventKind, EventRecord, Payload};

/// Storage for receive registrations.
///
/// All access goes through a single lock. `send` snapshots the target
/// record and releases the lock before the handler runs, so a handler may
/// itself call `send` or `register` without deadlocking.
#[derive(Debug, Default)]
pub struct EventRegistry {
    slots: Mutex<HashMap<ElementId, EventRecord>>,
}

impl EventRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under every identifier it carries.
    ///
    /// Each identifier gets its own independent slot. An occupied slot is
    /// replaced, except that the old payload overwrites the incoming one:
    /// handlers follow the newest composition pass, data follows the
    /// element. A record with no identifiers registers nothing.
    ///
    /// Only Receive records are addressable; handing a Compose record to
    /// the registry is a wiring mistake, reported loudly and refused.
    pub fn register(&self, record: EventRecord) {
        if record.kind != EventKind::Receive {
            debug_assert!(
                false,
                "Compose records are transient and cannot be registered as send targets"
            );
            tracing::error!(
                kind = ?record.kind,
                ids = ?record.ids,
                "refusing to register a non-receive record"
            );
            return;
        }
        if record.ids.is_empty() {
            tracing::trace!("record carries no identifiers; nothing to register");
            return;
        }
        let mut slots = self.slots.lock();
        for id in &record.ids {
            let mut entry = record.clone();
            if let Some(old) = slots.get(id) {
                entry.payload = old.payload.clone();
                tracing::debug!(id = %id, "replacing existing registration");
            }
            slots.insert(id.clone(), entry);
        }
    }

    /// The record currently occupying `id`, if any.
    pub fn lookup(&self, id: &ElementId) -> Option<EventRecord> {
        self.slots.lock().get(id).cloned()
    }

    /// Deliver `payload` to the record registered under `id`.
    ///
    /// The stored payload is replaced wholesale and the handler is invoked
    /// synchronously on the calling thread, after the registry lock is
    /// released. Returns whether a registration was found; a miss is not an
    /// error -- the target may simply not be on screen right now.
    pub fn send(&self, id: &ElementId, payload: Payload) -> bool {
        let delivered = {
            let mut slots = self.slots.lock();
            match slots.get_mut(id) {
                Some(record) => {
                    record.payload = payload;
                    record.kind = EventKind::Receive;
                    Some(record.clone())
                }
                None => None,
            }
        };
        match delivered {
            Some(record) => {
                if let Some(handler) = record.handler.clone() {
                    handler(&record);
                }
                true
            }
            None => {
                tracing::debug!(id = %id, "no registration for id; dropping send");
                false
            }
        }
    }

    /// Drop every registration.
    ///
    /// Run this on coarse lifecycle transitions so handlers closed over
    /// torn-down UI state cannot fire later.
    pub fn clear(&self) {
        let mut slots = self.slots.lock();
        let dropped = slots.len();
        slots.clear();
        if dropped > 0 {
            tracing::debug!(dropped, "cleared event registrations");
        }
    }

    /// Number of occupied identifier slots.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    /// Whether no identifier slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use uuid::Uuid;

    use crate::introspect::ElementMeta;

    use super::*;

    fn payload_of(key: &str, value: &str) -> Payload {
        let mut payload = Payload::new();
        payload.insert(key.to_string(), value.into());
        payload
    }

    fn counting_receiver(ids: &[ElementId]) -> (EventRecord, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let mut meta = ElementMeta::new();
        for id in ids {
            meta.ids.push(id.clone());
        }
        let record = EventRecord::receiver(meta, move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (record, count)
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = EventRegistry::new();
        let id = ElementId::from("x");
        let (record, _) = counting_receiver(&[id.clone()]);
        registry.register(record);

        let found = registry.lookup(&id).expect("registered record");
        assert_eq!(found.kind, EventKind::Receive);
        assert_eq!(found.ids, vec![id]);
        assert!(registry.lookup(&ElementId::from("other")).is_none());
    }

    #[test]
    fn test_replace_keeps_old_payload_and_new_handler() {
        let registry = EventRegistry::new();
        let id = ElementId::from("x");

        let (mut first, first_count) = counting_receiver(&[id.clone()]);
        first.payload = payload_of("k", "v1");
        registry.register(first);

        let (mut second, second_count) = counting_receiver(&[id.clone()]);
        second.payload = payload_of("k", "v2");
        registry.register(second);

        // Old payload wins the slot...
        let found = registry.lookup(&id).unwrap();
        assert_eq!(found.payload, payload_of("k", "v1"));

        // ...while the newest handler does.
        registry.send(&id, Payload::new());
        assert_eq!(first_count.load(Ordering::SeqCst), 0);
        assert_eq!(second_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_send_invokes_handler_with_sent_payload() {
        let registry = EventRegistry::new();
        let id = ElementId::from("y");
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let record = EventRecord::receiver(
            ElementMeta::new().with_id("y"),
            move |event: &EventRecord| {
                *sink.lock() = Some(event.payload.clone());
            },
        );
        registry.register(record);

        assert!(registry.send(&id, payload_of("a", "1")));
        assert_eq!(seen.lock().clone(), Some(payload_of("a", "1")));

        // The stored payload was replaced wholesale.
        assert_eq!(registry.lookup(&id).unwrap().payload, payload_of("a", "1"));
    }

    #[test]
    fn test_send_to_absent_id_is_noop() {
        let registry = EventRegistry::new();
        assert!(!registry.send(&ElementId::from("nonexistent"), payload_of("a", "1")));
    }

    #[test]
    fn test_clear_empties_all_slots() {
        let registry = EventRegistry::new();
        for name in ["p", "q", "r"] {
            let (record, _) = counting_receiver(&[ElementId::from(name)]);
            registry.register(record);
        }
        assert_eq!(registry.len(), 3);

        registry.clear();
        assert!(registry.is_empty());
        for name in ["p", "q", "r"] {
            assert!(registry.lookup(&ElementId::from(name)).is_none());
        }
    }

    #[test]
    fn test_multi_id_registration_creates_independent_slots() {
        let registry = EventRegistry::new();
        let a = ElementId::from("a");
        let b = ElementId::Uuid(Uuid::new_v4());

        let (mut record, _) = counting_receiver(&[a.clone(), b.clone()]);
        record.payload = payload_of("k", "shared");
        registry.register(record);

        assert!(registry.lookup(&a).is_some());
        assert!(registry.lookup(&b).is_some());

        // Replacing the record at `a` alone leaves `b` untouched.
        let (mut replacement, _) = counting_receiver(&[a.clone()]);
        replacement.payload = payload_of("k", "replaced");
        registry.register(replacement);

        assert_eq!(registry.lookup(&a).unwrap().payload, payload_of("k", "shared"));
        assert_eq!(registry.lookup(&b).unwrap().payload, payload_of("k", "shared"));
        registry.send(&b, payload_of("k", "b-only"));
        assert_eq!(registry.lookup(&a).unwrap().payload, payload_of("k", "shared"));
        assert_eq!(registry.lookup(&b).unwrap().payload, payload_of("k", "b-only"));
    }

    #[test]
    fn test_register_without_ids_is_noop() {
        let registry = EventRegistry::new();
        let (record, _) = counting_receiver(&[]);
        registry.register(record);
        assert!(registry.is_empty());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "transient")]
    fn test_registering_compose_record_is_a_usage_fault() {
        let registry = EventRegistry::new();
        let record = EventRecord::transient(ElementMeta::new().with_id("x"), |_| {});
        registry.register(record);
    }

    #[test]
    fn test_payload_survives_recomposition_round() {
        // Deliver data, then re-register (as a composition pass would), and
        // the delivered data is still there.
        let registry = EventRegistry::new();
        let id = ElementId::from("row");

        let (record, _) = counting_receiver(&[id.clone()]);
        registry.register(record);
        registry.send(&id, payload_of("uuid", "abc"));

        let (fresh, fresh_count) = counting_receiver(&[id.clone()]);
        registry.register(fresh);

        let found = registry.lookup(&id).unwrap();
        assert_eq!(found.payload, payload_of("uuid", "abc"));
        registry.send(&id, payload_of("uuid", "def"));
        assert_eq!(fresh_count.load(Ordering::SeqCst), 1);
    }
}
