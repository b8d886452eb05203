//! One isolated graphics environment

use easel_scene::Scene;

use crate::frame::FrameCallback;
use crate::surface::{Surface, Viewport};

/// A surface binding, an owned scene, and a single frame-callback slot.
///
/// Ownership is tree-shaped: the scope owns everything below it, and
/// disposal releases in dependency order (callback, objects, binding).
pub(crate) struct Scope {
    pub(crate) surface: Surface,
    pub(crate) viewport: Viewport,
    pub(crate) scene: Scene,
    pub(crate) on_frame: Option<FrameCallback>,
    /// Token of the current frame subscription; stale tokens do not match.
    pub(crate) frame_token: u64,
    pub(crate) time: f32,
    pub(crate) ticks: u64,
}

impl Scope {
    pub(crate) fn new(surface: Surface) -> Self {
        Self {
            viewport: Viewport {
                width: surface.width,
                height: surface.height,
            },
            surface,
            scene: Scene::new(),
            on_frame: None,
            frame_token: 0,
            time: 0.0,
            ticks: 0,
        }
    }
}
