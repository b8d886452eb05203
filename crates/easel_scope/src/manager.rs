//! The scope manager: creation, handle-based access, disposal, and the
//! cooperative frame pump.

use easel_scene::{NodeId, Scene, SceneNode};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::error::SetupError;
use crate::frame::{FrameCallback, FrameEvent, FrameSubscription};
use crate::scope::Scope;
use crate::surface::{Surface, SurfaceId, Viewport};

new_key_type! {
    /// Handle to a live scope
    pub struct ScopeId;
}

/// Owns every scope in the process and drives their frame callbacks.
///
/// Each surface drives at most one live scope at a time. All access goes
/// through [`ScopeId`] handles; a handle to a disposed scope resolves to
/// nothing rather than dangling.
#[derive(Default)]
pub struct ScopeManager {
    scopes: SlotMap<ScopeId, Scope>,
    bindings: FxHashMap<SurfaceId, ScopeId>,
    next_token: u64,
}

impl ScopeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new scope bound to `surface`.
    ///
    /// The binding is exclusive until [`dispose`](Self::dispose) releases it.
    pub fn create(&mut self, surface: Surface) -> Result<ScopeId, SetupError> {
        if surface.is_degenerate() {
            return Err(SetupError::InvalidSurface(surface.id));
        }
        if self.bindings.contains_key(&surface.id) {
            return Err(SetupError::SurfaceAlreadyBound(surface.id));
        }
        let surface_id = surface.id;
        let id = self.scopes.insert(Scope::new(surface));
        self.bindings.insert(surface_id, id);
        debug!(?id, surface = ?surface_id, "scope created");
        Ok(id)
    }

    pub fn is_live(&self, id: ScopeId) -> bool {
        self.scopes.contains_key(id)
    }

    /// Number of live scopes
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn viewport(&self, id: ScopeId) -> Option<Viewport> {
        self.scopes.get(id).map(|scope| scope.viewport)
    }

    pub fn scene(&self, id: ScopeId) -> Option<&Scene> {
        self.scopes.get(id).map(|scope| &scope.scene)
    }

    pub fn scene_mut(&mut self, id: ScopeId) -> Option<&mut Scene> {
        self.scopes.get_mut(id).map(|scope| &mut scope.scene)
    }

    /// Insert a scene object into the scope named by `id`
    pub fn insert(&mut self, id: ScopeId, node: SceneNode) -> Result<NodeId, SetupError> {
        let scope = self.scopes.get_mut(id).ok_or(SetupError::ScopeGone)?;
        Ok(scope.scene.insert(node))
    }

    /// Register `callback` to run once per tick while the scope is live.
    ///
    /// A scope holds one callback slot; registering again replaces the
    /// previous callback and invalidates its token.
    pub fn on_frame(
        &mut self,
        id: ScopeId,
        callback: FrameCallback,
    ) -> Result<FrameSubscription, SetupError> {
        let scope = self.scopes.get_mut(id).ok_or(SetupError::ScopeGone)?;
        self.next_token += 1;
        scope.frame_token = self.next_token;
        scope.on_frame = Some(callback);
        debug!(?id, token = self.next_token, "frame callback registered");
        Ok(FrameSubscription {
            scope: id,
            token: self.next_token,
        })
    }

    /// Cancel a frame subscription. Stale tokens are ignored.
    pub fn cancel(&mut self, subscription: FrameSubscription) {
        if let Some(scope) = self.scopes.get_mut(subscription.scope) {
            if scope.frame_token == subscription.token && scope.on_frame.take().is_some() {
                debug!(scope = ?subscription.scope, "frame callback cancelled");
            }
        }
    }

    /// Advance every live scope by one tick of `delta` seconds.
    ///
    /// Callbacks run synchronously on the caller's thread. A scope disposed
    /// before this call receives nothing; once a scope is gone its callback
    /// can never fire again.
    pub fn tick(&mut self, delta: f32) {
        for (_, scope) in self.scopes.iter_mut() {
            if let Some(mut callback) = scope.on_frame.take() {
                scope.time += delta;
                scope.ticks += 1;
                let event = FrameEvent {
                    time: scope.time,
                    delta,
                    count: scope.ticks,
                };
                callback(&mut scope.scene, &event);
                // The callback has no route back into the manager, so the
                // slot is still empty here.
                scope.on_frame = Some(callback);
            }
        }
    }

    /// Tear down a scope: frame callback first, then owned objects, then
    /// the surface binding.
    ///
    /// Best-effort and idempotent; disposing an unknown or already-disposed
    /// handle is a no-op.
    pub fn dispose(&mut self, id: ScopeId) {
        let Some(mut scope) = self.scopes.remove(id) else {
            debug!(?id, "dispose on a scope that is already gone");
            return;
        };
        scope.on_frame = None;
        scope.scene.clear();
        self.bindings.remove(&scope.surface.id);
        debug!(?id, surface = ?scope.surface.id, "scope disposed");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use easel_scene::{Circle, Color, Point, Rect, SceneNode, Shape};

    use super::*;

    fn surface(id: u64) -> Surface {
        Surface::new(SurfaceId(id), 800.0, 400.0)
    }

    fn dot() -> SceneNode {
        SceneNode::filled(
            Shape::Circle(Circle::new(Point::new(10.0, 10.0), 5.0)),
            Color::WHITE,
        )
    }

    #[test]
    fn create_binds_surface_exclusively() {
        let mut manager = ScopeManager::new();
        let first = manager.create(surface(1)).unwrap();
        assert!(manager.is_live(first));

        let err = manager.create(surface(1)).unwrap_err();
        assert_eq!(err, SetupError::SurfaceAlreadyBound(SurfaceId(1)));
    }

    #[test]
    fn degenerate_surface_is_rejected() {
        let mut manager = ScopeManager::new();
        let err = manager
            .create(Surface::new(SurfaceId(1), 0.0, 400.0))
            .unwrap_err();
        assert_eq!(err, SetupError::InvalidSurface(SurfaceId(1)));
        assert!(manager.is_empty());
    }

    #[test]
    fn dispose_frees_the_surface_for_rebinding() {
        let mut manager = ScopeManager::new();
        let first = manager.create(surface(1)).unwrap();
        manager.dispose(first);
        assert!(manager.create(surface(1)).is_ok());
    }

    #[test]
    fn dispose_is_idempotent() {
        let mut manager = ScopeManager::new();
        let id = manager.create(surface(1)).unwrap();
        manager.insert(id, dot()).unwrap();
        manager.dispose(id);
        manager.dispose(id);
        assert!(!manager.is_live(id));
        assert!(manager.scene(id).is_none());
    }

    #[test]
    fn insert_after_dispose_fails() {
        let mut manager = ScopeManager::new();
        let id = manager.create(surface(1)).unwrap();
        manager.dispose(id);
        assert_eq!(manager.insert(id, dot()).unwrap_err(), SetupError::ScopeGone);
    }

    #[test]
    fn tick_delivers_time_and_count() {
        let mut manager = ScopeManager::new();
        let id = manager.create(surface(1)).unwrap();
        let seen = Rc::new(Cell::new((0.0f32, 0u64)));
        let sink = seen.clone();
        manager
            .on_frame(
                id,
                Box::new(move |_, event| {
                    sink.set((event.time, event.count));
                }),
            )
            .unwrap();

        manager.tick(0.016);
        manager.tick(0.016);
        manager.tick(0.016);
        let (time, count) = seen.get();
        assert_eq!(count, 3);
        assert!((time - 0.048).abs() < 1e-6);
    }

    #[test]
    fn callback_mutates_owned_scene_only() {
        let mut manager = ScopeManager::new();
        let a = manager.create(surface(1)).unwrap();
        let b = manager.create(surface(2)).unwrap();
        let rect = manager
            .insert(
                a,
                SceneNode::filled(
                    Shape::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
                    Color::BLACK,
                ),
            )
            .unwrap();
        manager.insert(b, dot()).unwrap();

        manager
            .on_frame(
                a,
                Box::new(move |scene, _| {
                    if let Some(node) = scene.get_mut(rect) {
                        node.rotate(1.0);
                    }
                }),
            )
            .unwrap();

        manager.tick(0.016);
        assert_eq!(manager.scene(a).unwrap().get(rect).unwrap().rotation, 1.0);
        let other = manager.scene(b).unwrap();
        assert!(other.iter().all(|(_, node)| node.rotation == 0.0));
    }

    #[test]
    fn dispose_stops_ticks_even_mid_run() {
        let mut manager = ScopeManager::new();
        let id = manager.create(surface(1)).unwrap();
        let ticks = Rc::new(Cell::new(0usize));
        let sink = ticks.clone();
        manager
            .on_frame(id, Box::new(move |_, _| sink.set(sink.get() + 1)))
            .unwrap();

        manager.tick(0.016);
        assert_eq!(ticks.get(), 1);

        manager.dispose(id);
        manager.tick(0.016);
        manager.tick(0.016);
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn cancel_clears_the_slot() {
        let mut manager = ScopeManager::new();
        let id = manager.create(surface(1)).unwrap();
        let ticks = Rc::new(Cell::new(0usize));
        let sink = ticks.clone();
        let subscription = manager
            .on_frame(id, Box::new(move |_, _| sink.set(sink.get() + 1)))
            .unwrap();

        manager.cancel(subscription);
        manager.tick(0.016);
        assert_eq!(ticks.get(), 0);
        assert!(manager.is_live(id));
    }

    #[test]
    fn stale_token_does_not_cancel_newer_subscription() {
        let mut manager = ScopeManager::new();
        let id = manager.create(surface(1)).unwrap();
        let ticks = Rc::new(Cell::new(0usize));

        let stale = manager.on_frame(id, Box::new(|_, _| {})).unwrap();
        let sink = ticks.clone();
        manager
            .on_frame(id, Box::new(move |_, _| sink.set(sink.get() + 1)))
            .unwrap();

        manager.cancel(stale);
        manager.tick(0.016);
        assert_eq!(ticks.get(), 1);
    }
}
