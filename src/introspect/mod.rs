//! Element descriptions and metadata extraction.
//!
//! A decorated element arrives as a chain of wrapper structures, each
//! holding its child under a `content` field plus whatever fields the
//! decoration adds. There is no generic way to ask such a chain for "the
//! declared identifier" other than walking it and matching conventional
//! field labels, so that walk lives here -- together with the explicit
//! [`ElementMeta`] form that skips the walk entirely when the caller
//! already knows the element's identity.

mod node;
mod walk;

pub use node::{FieldValue, ViewDesc};
pub use walk::ElementMeta;
