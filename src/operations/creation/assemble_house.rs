use tracing::info;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::bounds;
use crate::math::{Isometry3, Vector3};
use crate::operations::creation::{MakeFloor, MakeRoof, MakeWall};
use crate::scene::{NodeId, SceneGraph};
use crate::spec::HouseSpec;

/// Handles to the parts of an assembled house.
#[derive(Debug, Clone)]
pub struct HouseParts {
    /// The `"House"` group holding every other part.
    pub root: NodeId,
    pub floor: NodeId,
    pub roof: NodeId,
    /// The `"Walls"` group.
    pub walls_group: NodeId,
    /// One `"Wall"` group per wall spec, in order.
    pub walls: Vec<NodeId>,
    /// Every `"Door"` group across all walls.
    pub doors: Vec<NodeId>,
    /// Every `"Window"` group across all walls.
    pub windows: Vec<NodeId>,
}

/// Builds floor, roof and walls into one `"House"` group centered on the origin.
///
/// The house-level openings go to `walls[opening_wall]`; every other wall
/// keeps its own openings.
pub struct AssembleHouse<'a> {
    spec: &'a HouseSpec,
}

impl<'a> AssembleHouse<'a> {
    /// Creates a new `AssembleHouse` operation.
    #[must_use]
    pub fn new(spec: &'a HouseSpec) -> Self {
        Self { spec }
    }

    /// The translation that centers the footprint's bounding box on the world origin.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the footprint is empty.
    pub fn recenter_offset(&self) -> Result<Vector3> {
        let (min, max) = bounds(&self.spec.footprint())
            .ok_or_else(|| GeometryError::Degenerate("house footprint is empty".into()))?;
        Ok(Vector3::new(-(min.x + max.x) / 2.0, 0.0, (min.y + max.y) / 2.0))
    }

    /// Executes the assembly, adding the detached house group to the scene.
    ///
    /// The whole spec is validated first, so a failure leaves no partial house.
    ///
    /// # Errors
    ///
    /// Returns the first validation or geometry error.
    pub fn execute(&self, scene: &mut SceneGraph) -> Result<HouseParts> {
        let spec = self.spec;
        spec.validate()?;
        let offset = self.recenter_offset()?;

        let root = scene.add_group("House");
        let floor = MakeFloor::new(&spec.floor).execute(scene)?;
        scene.attach(root, floor)?;
        let roof = MakeRoof::new(&spec.roof).execute(scene)?;
        scene.attach(root, roof)?;

        let walls_group = scene.add_group("Walls");
        let mut walls = Vec::with_capacity(spec.walls.len());
        for (index, wall_spec) in spec.walls.iter().enumerate() {
            let op = MakeWall::new(wall_spec);
            let op = if index == spec.opening_wall {
                op.with_openings(&spec.openings)
            } else {
                op
            };
            let wall = op.execute(scene)?;
            scene.attach(walls_group, wall)?;
            walls.push(wall);
        }
        scene.attach(root, walls_group)?;
        scene.set_transform(root, Isometry3::translation(offset.x, offset.y, offset.z))?;

        let doors = scene.find_in(walls_group, "Door")?;
        let windows = scene.find_in(walls_group, "Window")?;
        info!(
            walls = walls.len(),
            doors = doors.len(),
            windows = windows.len(),
            offset_x = offset.x,
            offset_z = offset.z,
            "assembled house"
        );

        Ok(HouseParts {
            root,
            floor,
            roof,
            walls_group,
            walls,
            doors,
            windows,
        })
    }
}
