//! Targeted payload delivery for declarative UI trees, plus the deep-link
//! URLs that usually carry those payloads in from outside the process.
//!
//! A composed element exposes identifying metadata -- an id, optionally
//! tags and text bindings -- either discovered by walking its structural
//! description ([`introspect`]) or declared explicitly. Registering the
//! element ([`hooks`], [`registry`]) makes it addressable: any code can
//! later call [`Dispatcher::send`] with that id and a payload, and the
//! element's handler runs synchronously with the new data, bypassing
//! parent-to-child data flow entirely.
//!
//! Delivery is single-process, at-most-one-recipient and best-effort: a
//! target that is not currently registered is skipped silently, because it
//! may simply not be on screen. The [`deeplink`] module covers the other
//! half of the round trip -- encoding a path and key/value data into a
//! `scheme:///path?key=value` URL and decoding it back.

pub mod deeplink;
pub mod dispatch;
pub mod event;
pub mod hooks;
pub mod introspect;
pub mod lifecycle;
pub mod registry;

pub use dispatch::Dispatcher;
pub use event::{ElementId, EventKind, EventRecord, Handler, Payload, StringBinding, Value};
pub use hooks::register_receiver;
pub use introspect::{ElementMeta, FieldValue, ViewDesc};
pub use lifecycle::ScenePhase;
pub use registry::EventRegistry;
