//! The per-scope object container

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::node::SceneNode;

new_key_type! {
    /// Handle to a scene object within one scope's scene
    pub struct NodeId;
}

/// The retained object set owned by a single scope.
///
/// Handles are never reused for a different object; a removed or cleared
/// node's id simply stops resolving.
#[derive(Default)]
pub struct Scene {
    nodes: SlotMap<NodeId, SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: SceneNode) -> NodeId {
        self.nodes.insert(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    pub fn remove(&mut self, id: NodeId) -> Option<SceneNode> {
        self.nodes.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Release every object in the scene
    pub fn clear(&mut self) {
        let released = self.nodes.len();
        self.nodes.clear();
        debug!(released, "scene cleared");
    }
}
