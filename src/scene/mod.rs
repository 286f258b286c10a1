pub mod material;

pub use material::Material;

use slotmap::SlotMap;

use crate::error::SceneError;
use crate::math::Isometry3;
use crate::tessellation::TriangleMesh;

slotmap::new_key_type! {
    /// Unique identifier for a node in the scene graph.
    pub struct NodeId;
}

/// What a scene node draws.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// A pure transform node with children.
    Group,
    /// A drawable triangle mesh in the node's local frame.
    Mesh {
        mesh: TriangleMesh,
        material: Material,
    },
}

/// Data associated with a scene node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Name used by callers to locate parts (`"Wall"`, `"DoorFrame"`, ...).
    pub name: String,
    pub kind: NodeKind,
    /// Transform from this node's frame into its parent's frame.
    pub transform: Isometry3,
    /// Local visibility flag; a node is drawn only if all ancestors are visible too.
    pub visible: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(name: &str, kind: NodeKind) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            transform: Isometry3::identity(),
            visible: true,
            parent: None,
            children: Vec::new(),
        }
    }

    /// The parent node, if attached.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The mesh and material, if this is a mesh node.
    #[must_use]
    pub fn mesh(&self) -> Option<(&TriangleMesh, &Material)> {
        match &self.kind {
            NodeKind::Mesh { mesh, material } => Some((mesh, material)),
            NodeKind::Group => None,
        }
    }
}

/// Retained-mode scene tree handed to the renderer.
///
/// Nodes live in an arena and reference each other by [`NodeId`]; a node
/// has at most one parent.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, NodeData>,
}

impl SceneGraph {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts a detached group node.
    pub fn add_group(&mut self, name: &str) -> NodeId {
        self.nodes.insert(NodeData::new(name, NodeKind::Group))
    }

    /// Inserts a detached mesh node.
    pub fn add_mesh(&mut self, name: &str, mesh: TriangleMesh, material: Material) -> NodeId {
        self.nodes
            .insert(NodeData::new(name, NodeKind::Mesh { mesh, material }))
    }

    /// Returns a reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NodeNotFound`] if the node is not in the scene.
    pub fn node(&self, id: NodeId) -> Result<&NodeData, SceneError> {
        self.nodes.get(id).ok_or(SceneError::NodeNotFound)
    }

    /// Returns a mutable reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NodeNotFound`] if the node is not in the scene.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData, SceneError> {
        self.nodes.get_mut(id).ok_or(SceneError::NodeNotFound)
    }

    /// Makes `child` the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is missing, `child` already has a
    /// parent, or `child` is `parent` or one of its ancestors.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        let child_data = self.node(child)?;
        if child_data.parent.is_some() {
            return Err(SceneError::AlreadyAttached(child_data.name.clone()));
        }
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(SceneError::Cycle(child_data.name.clone()));
            }
            cursor = self.node(id)?.parent;
        }

        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Sets the local transform of a node.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NodeNotFound`] if the node is not in the scene.
    pub fn set_transform(&mut self, id: NodeId, transform: Isometry3) -> Result<(), SceneError> {
        self.node_mut(id)?.transform = transform;
        Ok(())
    }

    /// Sets the local visibility flag of a node.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NodeNotFound`] if the node is not in the scene.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<(), SceneError> {
        self.node_mut(id)?.visible = visible;
        Ok(())
    }

    /// Nodes without a parent, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(id, _)| id)
    }

    /// Composes the transforms from the root down to `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NodeNotFound`] if the node is not in the scene.
    pub fn world_transform(&self, id: NodeId) -> Result<Isometry3, SceneError> {
        let mut node = self.node(id)?;
        let mut world = node.transform;
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            world = node.transform * world;
        }
        Ok(world)
    }

    /// Returns `true` if the node and all of its ancestors are visible.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NodeNotFound`] if the node is not in the scene.
    pub fn is_effectively_visible(&self, id: NodeId) -> Result<bool, SceneError> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current)?;
            if !node.visible {
                return Ok(false);
            }
            cursor = node.parent;
        }
        Ok(true)
    }

    /// `id` and every node below it, depth-first in child order.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NodeNotFound`] if any visited node is missing.
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>, SceneError> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.node(current)?;
            out.push(current);
            stack.extend(node.children.iter().rev());
        }
        Ok(out)
    }

    /// All nodes in the scene with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.name == name)
            .map(|(id, _)| id)
            .collect()
    }

    /// Nodes named `name` within the subtree rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NodeNotFound`] if `root` is not in the scene.
    pub fn find_in(&self, root: NodeId, name: &str) -> Result<Vec<NodeId>, SceneError> {
        Ok(self
            .descendants(root)?
            .into_iter()
            .filter(|&id| self.nodes.get(id).is_some_and(|n| n.name == name))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};

    #[test]
    fn attach_links_parent_and_child() {
        let mut scene = SceneGraph::new();
        let group = scene.add_group("Wall");
        let body = scene.add_mesh("WallBody", TriangleMesh::default(), Material::WALL);
        scene.attach(group, body).unwrap();

        assert_eq!(scene.node(group).unwrap().children(), &[body]);
        assert_eq!(scene.node(body).unwrap().parent(), Some(group));
        assert_eq!(scene.roots().collect::<Vec<_>>(), vec![group]);
    }

    #[test]
    fn attach_rejects_second_parent_and_cycles() {
        let mut scene = SceneGraph::new();
        let a = scene.add_group("a");
        let b = scene.add_group("b");
        let c = scene.add_group("c");
        scene.attach(a, b).unwrap();
        assert!(matches!(scene.attach(c, b), Err(SceneError::AlreadyAttached(_))));
        assert!(matches!(scene.attach(b, a), Err(SceneError::Cycle(_))));
        assert!(matches!(scene.attach(a, a), Err(SceneError::Cycle(_))));
    }

    #[test]
    fn world_transform_composes_parents() {
        let mut scene = SceneGraph::new();
        let outer = scene.add_group("outer");
        let inner = scene.add_group("inner");
        scene.attach(outer, inner).unwrap();
        scene
            .set_transform(outer, Isometry3::translation(-5.0, 0.0, 4.0))
            .unwrap();
        scene
            .set_transform(inner, Isometry3::translation(1.0, 2.0, 3.0))
            .unwrap();

        let p = scene.world_transform(inner).unwrap() * Point3::origin();
        assert!((p - Point3::new(-4.0, 2.0, 7.0)).norm() < 1e-12);

        let rotated = Isometry3::new(Vector3::zeros(), Vector3::y() * std::f64::consts::FRAC_PI_2);
        scene.set_transform(outer, rotated).unwrap();
        let p = scene.world_transform(inner).unwrap() * Point3::origin();
        // (1, 2, 3) turned a quarter about +Y.
        assert!((p - Point3::new(3.0, 2.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn hidden_ancestor_hides_descendants() {
        let mut scene = SceneGraph::new();
        let outer = scene.add_group("outer");
        let inner = scene.add_group("inner");
        scene.attach(outer, inner).unwrap();
        assert!(scene.is_effectively_visible(inner).unwrap());
        scene.set_visible(outer, false).unwrap();
        assert!(!scene.is_effectively_visible(inner).unwrap());
        assert!(scene.node(inner).unwrap().visible);
    }

    #[test]
    fn find_in_limits_search_to_subtree() {
        let mut scene = SceneGraph::new();
        let first = scene.add_group("Wall");
        let second = scene.add_group("Wall");
        let door = scene.add_group("Door");
        scene.attach(first, door).unwrap();

        assert_eq!(scene.find_by_name("Wall").len(), 2);
        assert_eq!(scene.find_in(first, "Door").unwrap(), vec![door]);
        assert!(scene.find_in(second, "Door").unwrap().is_empty());
        assert_eq!(scene.descendants(first).unwrap(), vec![first, door]);
    }
}
