//! Identity and payload model for targeted event delivery.
//!
//! Everything here is plain data: the keys elements are addressed by, the
//! values payloads carry, and the record that ties an element's identity to
//! the handler that should run when data arrives for it.

mod binding;
mod record;
mod value;

pub use binding::StringBinding;
pub use record::{EventKind, EventRecord, Handler};
pub use value::{ElementId, Payload, Value};
