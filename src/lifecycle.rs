//! Host process lifecycle signal.

/// Coarse lifecycle states reported by the embedding shell.
///
/// The interesting transition is into [`Background`](Self::Background):
/// element state may be torn down at any point after it, so registrations
/// made on earlier composition passes are dropped wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    /// UI is frontmost and interactive.
    Active,
    /// UI is visible but not receiving events.
    Inactive,
    /// UI left the screen.
    Background,
}
