//! Shared two-way string bindings.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// A two-way string cell shared between an element description and whoever
/// holds a clone of it.
///
/// Clones share the same underlying storage, so text set through one handle
/// is visible through all of them. Discovered bindings ride along on event
/// records for future indirect mutation of bound text; delivery itself does
/// not touch them.
#[derive(Clone, Default)]
pub struct StringBinding {
    cell: Arc<Mutex<String>>,
}

impl StringBinding {
    /// A binding holding `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            cell: Arc::new(Mutex::new(initial.into())),
        }
    }

    /// Current text.
    pub fn get(&self) -> String {
        self.cell.lock().clone()
    }

    /// Replace the text, visible through every clone.
    pub fn set(&self, text: impl Into<String>) {
        *self.cell.lock() = text.into();
    }
}

impl fmt::Debug for StringBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StringBinding").field(&self.get()).finish()
    }
}
