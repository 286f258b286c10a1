use nalgebra::Translation3;
use tracing::debug;

use crate::error::Result;
use crate::math::{ground_to_world, shortest_arc, Isometry3, Point2, Vector3};
use crate::operations::creation::{MakeOpening, Opening};
use crate::operations::shaping::ExtrudeProfile;
use crate::operations::transform::Translate;
use crate::scene::{Material, NodeId, SceneGraph};
use crate::spec::{validate_wall_with_openings, Openings, WallSpec};

/// Creates a wall group named `"Wall"`, with its openings, placed in world space.
///
/// In the wall's local frame `+X` runs along the wall from `start`, `+Y` is
/// up and `Z` crosses the wall, whose body spans `[-t/2, t/2]`. Openings are
/// overlaid on the `+Z` face; the body is not cut.
pub struct MakeWall<'a> {
    spec: &'a WallSpec,
    openings: Option<&'a Openings>,
}

impl<'a> MakeWall<'a> {
    /// Creates a new `MakeWall` operation using the wall's own openings.
    #[must_use]
    pub fn new(spec: &'a WallSpec) -> Self {
        Self { spec, openings: None }
    }

    /// Supplies openings that replace the wall's own lists kind by kind.
    #[must_use]
    pub fn with_openings(mut self, openings: &'a Openings) -> Self {
        self.openings = Some(openings);
        self
    }

    /// Executes the operation, adding the detached wall group to the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall or any resolved opening is invalid.
    pub fn execute(&self, scene: &mut SceneGraph) -> Result<NodeId> {
        let spec = self.spec;
        validate_wall_with_openings(spec, self.openings)?;

        let length = spec.length();
        let depth_offset = spec.thickness / 2.0;
        let doors = spec.resolved_doors(self.openings);
        let windows = spec.resolved_windows(self.openings);

        let group = scene.add_group("Wall");
        for door in doors {
            attach_opening(scene, group, door, depth_offset)?;
        }
        for window in windows {
            attach_opening(scene, group, window, depth_offset)?;
        }

        let profile = [
            Point2::new(0.0, 0.0),
            Point2::new(length, 0.0),
            Point2::new(length, spec.height),
            Point2::new(0.0, spec.height),
        ];
        let mut body = ExtrudeProfile::new(&profile, spec.thickness).execute()?;
        Translate::new(Vector3::new(0.0, 0.0, -depth_offset)).execute(&mut body);
        let body = scene.add_mesh("WallBody", body, Material::WALL);
        scene.attach(group, body)?;

        let dir = Vector3::new(spec.end.x - spec.start.x, 0.0, -(spec.end.y - spec.start.y));
        let rotation = shortest_arc(&Vector3::x(), &dir)?;
        let translation = Translation3::from(ground_to_world(&spec.start.to_point(), 0.0).coords);
        scene.set_transform(group, Isometry3::from_parts(translation, rotation))?;

        debug!(
            length,
            doors = doors.len(),
            windows = windows.len(),
            children = ?child_names(scene, group),
            "built wall"
        );
        Ok(group)
    }
}

fn attach_opening<O: Opening>(
    scene: &mut SceneGraph,
    wall: NodeId,
    opening: &O,
    depth_offset: f64,
) -> Result<()> {
    let node = MakeOpening::new(opening).execute(scene)?;
    scene.set_transform(
        node,
        Isometry3::translation(opening.offset(), opening.mount_height(), depth_offset),
    )?;
    scene.attach(wall, node)?;
    Ok(())
}

fn child_names(scene: &SceneGraph, id: NodeId) -> Vec<&str> {
    scene
        .node(id)
        .map(|n| {
            n.children()
                .iter()
                .filter_map(|&c| scene.node(c).ok().map(|c| c.name.as_str()))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{HejausError, SpecError};
    use crate::math::Point3;
    use crate::operations::query::BoundingBox;
    use crate::spec::{DoorSpec, Vec2, WindowSpec};

    fn wall(start: (f64, f64), end: (f64, f64)) -> WallSpec {
        WallSpec {
            start: Vec2::new(start.0, start.1),
            end: Vec2::new(end.0, end.1),
            height: 3.0,
            thickness: 0.2,
            doors: None,
            windows: None,
        }
    }

    fn sample_openings() -> Openings {
        Openings {
            doors: Some(vec![DoorSpec { x: 2.5, width: 1.0, height: 2.1, z: None }]),
            windows: Some(vec![WindowSpec { x: 6.5, width: 1.0, height: 1.2, z: 0.9 }]),
        }
    }

    fn end_of_length_axis(scene: &SceneGraph, group: NodeId, length: f64) -> Point3 {
        scene.world_transform(group).unwrap() * Point3::new(length, 0.0, 0.0)
    }

    #[test]
    fn wall_along_x_has_identity_orientation() {
        let spec = wall((0.0, 0.0), (10.0, 0.0));
        let mut scene = SceneGraph::new();
        let group = MakeWall::new(&spec).execute(&mut scene).unwrap();

        let transform = scene.node(group).unwrap().transform;
        assert!(transform.rotation.angle().abs() < 1e-12);
        assert!(transform.translation.vector.norm() < 1e-12);

        let bounds = BoundingBox::new(group).execute(&scene).unwrap().unwrap();
        assert_relative_eq!(bounds.min.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.max.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.max.y, 3.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.min.z, -0.1, epsilon = 1e-9);
        assert_relative_eq!(bounds.max.z, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn wall_along_ground_y_maps_to_negative_world_z() {
        let spec = wall((0.0, 0.0), (0.0, 8.0));
        let mut scene = SceneGraph::new();
        let group = MakeWall::new(&spec).execute(&mut scene).unwrap();

        let rotation = scene.node(group).unwrap().transform.rotation;
        assert_relative_eq!(rotation.angle(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);

        let end = end_of_length_axis(&scene, group, spec.length());
        assert!((end - Point3::new(0.0, 0.0, -8.0)).norm() < 1e-9, "{end:?}");
    }

    #[test]
    fn wall_length_axis_ends_at_wall_end() {
        for (start, end) in [
            ((10.0, 0.0), (10.0, 8.0)),
            ((10.0, 8.0), (0.0, 8.0)),
            ((0.0, 8.0), (0.0, 0.0)),
            ((1.0, 2.0), (4.0, 6.0)),
        ] {
            let spec = wall(start, end);
            let length = spec.length();
            assert_relative_eq!(length, (end.0 - start.0).hypot(end.1 - start.1), epsilon = 1e-9);

            let mut scene = SceneGraph::new();
            let group = MakeWall::new(&spec).execute(&mut scene).unwrap();
            let tip = end_of_length_axis(&scene, group, length);
            assert!((tip - Point3::new(end.0, 0.0, -end.1)).norm() < 1e-9, "{start:?} -> {end:?}: {tip:?}");

            // Walls stay upright.
            let up = scene.world_transform(group).unwrap() * Vector3::y();
            assert!((up - Vector3::y()).norm() < 1e-9);
        }
    }

    #[test]
    fn body_is_centered_on_mid_depth() {
        let spec = wall((0.0, 0.0), (4.0, 0.0));
        let mut scene = SceneGraph::new();
        let group = MakeWall::new(&spec).execute(&mut scene).unwrap();
        let body = scene.find_in(group, "WallBody").unwrap()[0];
        let (mesh, material) = scene.node(body).unwrap().mesh().unwrap();
        assert_eq!(material, &Material::WALL);
        assert_relative_eq!(mesh.signed_volume(), 4.0 * 3.0 * 0.2, epsilon = 1e-9);
        assert!(mesh.vertices.iter().all(|v| (v.z.abs() - 0.1).abs() < 1e-12));
    }

    #[test]
    fn door_is_centered_at_its_offset() {
        let spec = wall((0.0, 0.0), (10.0, 0.0));
        let openings = sample_openings();
        let mut scene = SceneGraph::new();
        let group = MakeWall::new(&spec)
            .with_openings(&openings)
            .execute(&mut scene)
            .unwrap();

        let door = scene.find_in(group, "Door").unwrap();
        assert_eq!(door.len(), 1);
        let bounds = BoundingBox::new(door[0]).execute(&scene).unwrap().unwrap();
        assert_relative_eq!(bounds.center().x, 2.5, epsilon = 1e-9);
        assert_relative_eq!(bounds.min.x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.max.x, 3.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.min.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.max.y, 2.1, epsilon = 1e-9);
        // Flush with the wall's +Z face.
        assert_relative_eq!(bounds.center().z, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn window_is_placed_at_offset_and_raised_mount() {
        let spec = wall((0.0, 0.0), (10.0, 0.0));
        let openings = sample_openings();
        let mut scene = SceneGraph::new();
        let group = MakeWall::new(&spec)
            .with_openings(&openings)
            .execute(&mut scene)
            .unwrap();

        let window = scene.find_in(group, "Window").unwrap()[0];
        let origin = scene.world_transform(window).unwrap() * Point3::origin();
        assert!((origin - Point3::new(6.5, 1.5, 0.1)).norm() < 1e-9, "{origin:?}");
        assert_eq!(scene.find_in(group, "WindowFrame").unwrap().len(), 1);
    }

    #[test]
    fn children_are_openings_then_body() {
        let spec = wall((0.0, 0.0), (10.0, 0.0));
        let openings = sample_openings();
        let mut scene = SceneGraph::new();
        let group = MakeWall::new(&spec)
            .with_openings(&openings)
            .execute(&mut scene)
            .unwrap();
        assert_eq!(child_names(&scene, group), ["Door", "Window", "WallBody"]);
    }

    #[test]
    fn own_openings_are_used_without_override() {
        let mut spec = wall((0.0, 0.0), (10.0, 0.0));
        spec.windows = Some(vec![
            WindowSpec { x: 2.0, width: 1.0, height: 1.0, z: 1.0 },
            WindowSpec { x: 5.0, width: 1.0, height: 1.0, z: 1.0 },
        ]);
        let mut scene = SceneGraph::new();
        let group = MakeWall::new(&spec).execute(&mut scene).unwrap();
        assert_eq!(scene.find_in(group, "Window").unwrap().len(), 2);
        assert!(scene.find_in(group, "Door").unwrap().is_empty());
    }

    #[test]
    fn plain_wall_has_only_a_body() {
        let spec = wall((10.0, 0.0), (10.0, 8.0));
        let mut scene = SceneGraph::new();
        let group = MakeWall::new(&spec).execute(&mut scene).unwrap();
        assert_eq!(child_names(&scene, group), ["WallBody"]);
    }

    #[test]
    fn zero_length_wall_fails_before_building() {
        let spec = wall((3.0, 3.0), (3.0, 3.0));
        let mut scene = SceneGraph::new();
        let err = MakeWall::new(&spec).execute(&mut scene).unwrap_err();
        assert!(matches!(err, HejausError::Spec(SpecError::ZeroLengthWall)));
        assert!(scene.is_empty());
    }

    #[test]
    fn opening_past_wall_end_fails() {
        let spec = wall((0.0, 0.0), (6.0, 0.0));
        let openings = sample_openings();
        let mut scene = SceneGraph::new();
        let err = MakeWall::new(&spec)
            .with_openings(&openings)
            .execute(&mut scene)
            .unwrap_err();
        assert!(matches!(
            err,
            HejausError::Spec(SpecError::OpeningOutOfBounds { kind: "Window", .. })
        ));
    }
}
