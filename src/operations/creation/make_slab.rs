use crate::error::Result;
use crate::math::polygon_2d::expand_rect;
use crate::math::{Isometry3, Point2};
use crate::operations::shaping::ExtrudeProfile;
use crate::operations::transform::Rotate;
use crate::scene::{Material, NodeId, SceneGraph};
use crate::spec::{FloorSpec, RoofSpec, Vec2};
use crate::tessellation::TriangleMesh;

/// Creates the floor slab mesh node named `"Floor"`.
pub struct MakeFloor<'a> {
    spec: &'a FloorSpec,
}

impl<'a> MakeFloor<'a> {
    /// Creates a new `MakeFloor` operation.
    #[must_use]
    pub fn new(spec: &'a FloorSpec) -> Self {
        Self { spec }
    }

    /// Executes the operation, adding the detached floor node to the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec is invalid or the contour cannot be extruded.
    pub fn execute(&self, scene: &mut SceneGraph) -> Result<NodeId> {
        self.spec.validate()?;
        let contour = to_points(&self.spec.contour);
        let mesh = slab_mesh(&contour, self.spec.thickness)?;
        place_slab(scene, "Floor", mesh, Material::FLOOR, self.spec.z, self.spec.thickness)
    }
}

/// Creates the flat roof slab mesh node named `"Roof"`.
///
/// The contour's bounding rectangle, grown by the overhang on every side,
/// is extruded; non-rectangular footprints therefore get a rectangular roof.
pub struct MakeRoof<'a> {
    spec: &'a RoofSpec,
}

impl<'a> MakeRoof<'a> {
    /// Creates a new `MakeRoof` operation.
    #[must_use]
    pub fn new(spec: &'a RoofSpec) -> Self {
        Self { spec }
    }

    /// Executes the operation, adding the detached roof node to the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec is invalid or the contour cannot be extruded.
    pub fn execute(&self, scene: &mut SceneGraph) -> Result<NodeId> {
        self.spec.validate()?;
        let expanded = expand_rect(&to_points(&self.spec.contour), self.spec.overhang);
        let mesh = slab_mesh(&expanded, self.spec.thickness)?;
        place_slab(scene, "Roof", mesh, Material::ROOF, self.spec.z, self.spec.thickness)
    }
}

fn to_points(contour: &[Vec2]) -> Vec<Point2> {
    contour.iter().map(|v| v.to_point()).collect()
}

/// Extrudes the ground contour by `thickness` and stands the extrusion axis
/// up, so the slab spans world `y` in `[0, thickness]`.
fn slab_mesh(contour: &[Point2], thickness: f64) -> Result<TriangleMesh> {
    let mut mesh = ExtrudeProfile::new(contour, thickness).execute()?;
    Rotate::ground_remap().execute(&mut mesh)?;
    Ok(mesh)
}

/// Adds the slab so its top face sits at `z`.
fn place_slab(
    scene: &mut SceneGraph,
    name: &str,
    mesh: TriangleMesh,
    material: Material,
    z: f64,
    thickness: f64,
) -> Result<NodeId> {
    let node = scene.add_mesh(name, mesh, material);
    scene.set_transform(node, Isometry3::translation(0.0, z - thickness, 0.0))?;
    Ok(node)
}
