//! Frame driver types

use easel_scene::Scene;

use crate::manager::ScopeId;

/// Timing information passed to a frame callback on each tick
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameEvent {
    /// Seconds of frame time accumulated by the owning scope
    pub time: f32,
    /// Seconds since the previous tick
    pub delta: f32,
    /// Ticks delivered to this scope so far, including this one
    pub count: u64,
}

/// Per-frame callback.
///
/// Runs synchronously inside [`ScopeManager::tick`](crate::ScopeManager::tick)
/// and is handed exactly one scene: the one owned by its scope. It must not
/// block; every tick has to finish before the next display refresh.
pub type FrameCallback = Box<dyn FnMut(&mut Scene, &FrameEvent)>;

/// Cancellation token for a registered frame callback.
///
/// Returned by [`ScopeManager::on_frame`](crate::ScopeManager::on_frame).
/// A stale token (superseded by a newer subscription on the same scope) is
/// ignored by [`ScopeManager::cancel`](crate::ScopeManager::cancel).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSubscription {
    pub(crate) scope: ScopeId,
    pub(crate) token: u64,
}

impl FrameSubscription {
    /// The scope this subscription belongs to
    pub fn scope(&self) -> ScopeId {
        self.scope
    }
}
