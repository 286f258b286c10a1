use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::scene::{NodeId, SceneGraph};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// The smallest box containing all `points`, or `None` if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |aabb, p| aabb.including(p)))
    }

    /// Extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// The smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    #[must_use]
    fn including(&self, p: &Point3) -> Self {
        Self {
            min: self.min.inf(p),
            max: self.max.sup(p),
        }
    }
}

/// Computes the world-space axis-aligned bounding box of every mesh under a node.
pub struct BoundingBox {
    node: NodeId,
    visible_only: bool,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query covering the whole subtree.
    #[must_use]
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            visible_only: false,
        }
    }

    /// Skips meshes that are hidden directly or through an ancestor.
    #[must_use]
    pub fn visible_only(mut self, visible_only: bool) -> Self {
        self.visible_only = visible_only;
        self
    }

    /// Executes the query, returning the AABB, or `None` if the subtree holds no
    /// (visible) mesh vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn execute(&self, scene: &SceneGraph) -> Result<Option<Aabb>> {
        let mut result: Option<Aabb> = None;
        for id in scene.descendants(self.node)? {
            let Some((mesh, _)) = scene.node(id)?.mesh() else {
                continue;
            };
            if self.visible_only && !scene.is_effectively_visible(id)? {
                continue;
            }
            let world = scene.world_transform(id)?;
            let points: Vec<Point3> = mesh.vertices.iter().map(|v| world * v).collect();
            if let Some(aabb) = Aabb::from_points(&points) {
                result = Some(result.map_or(aabb, |r| r.union(&aabb)));
            }
        }
        Ok(result)
    }
}
