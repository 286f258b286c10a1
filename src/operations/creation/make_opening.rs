use crate::error::{Result, SpecError};
use crate::math::{Isometry3, Point2, Vector3, TOLERANCE};
use crate::operations::creation::MakeBox;
use crate::scene::{Material, NodeId, SceneGraph};
use crate::spec::{finite, non_negative, positive, DoorSpec, WindowSpec};

/// A door or window placed along a wall.
///
/// Offsets are in the wall's local frame: `offset` runs along the wall from
/// its start point, heights are measured up from the wall base.
pub trait Opening {
    /// Group node name, e.g. `"Door"`.
    fn kind(&self) -> &'static str;
    /// Frame mesh node name, e.g. `"DoorFrame"`.
    fn frame_name(&self) -> &'static str;
    /// Thickness of the frame volume across the wall.
    fn frame_depth(&self) -> f64;
    fn material(&self) -> Material;

    /// Horizontal center along the wall.
    fn offset(&self) -> f64;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    /// Height of the opening's bottom edge.
    fn sill(&self) -> f64;
    /// Local height at which the wall builder places the opening's origin.
    fn mount_height(&self) -> f64;

    /// Outline `(left, sill) -> (right, sill) -> (right, top) -> (left, top)`,
    /// implicitly closed, in wall-local `(length, height)` coordinates.
    fn hole_path(&self) -> [Point2; 4] {
        let (left, right) = (self.offset() - self.width() / 2.0, self.offset() + self.width() / 2.0);
        let (bottom, top) = (self.sill(), self.sill() + self.height());
        [
            Point2::new(left, bottom),
            Point2::new(right, bottom),
            Point2::new(right, top),
            Point2::new(left, top),
        ]
    }

    /// Checks the opening's dimensions and that its outline fits the wall.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] for bad dimensions or an outline outside
    /// `[0, wall_length] x [0, wall_height]`.
    fn validate(&self, wall_length: f64, wall_height: f64) -> std::result::Result<(), SpecError> {
        let kind = self.kind();
        finite("opening offset", self.offset())?;
        positive("opening width", self.width())?;
        positive("opening height", self.height())?;
        non_negative("opening sill height", self.sill())?;

        let [bottom_left, _, top_right, _] = self.hole_path();
        if bottom_left.x < -TOLERANCE || top_right.x > wall_length + TOLERANCE {
            return Err(SpecError::OpeningOutOfBounds {
                kind,
                start: bottom_left.x,
                end: top_right.x,
                wall_length,
            });
        }
        if top_right.y > wall_height + TOLERANCE {
            return Err(SpecError::OpeningTooTall {
                kind,
                top: top_right.y,
                wall_height,
            });
        }
        Ok(())
    }
}

impl Opening for DoorSpec {
    fn kind(&self) -> &'static str {
        "Door"
    }

    fn frame_name(&self) -> &'static str {
        "DoorFrame"
    }

    fn frame_depth(&self) -> f64 {
        0.1
    }

    fn material(&self) -> Material {
        Material::DOOR
    }

    fn offset(&self) -> f64 {
        self.x
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn sill(&self) -> f64 {
        self.z.unwrap_or(0.0)
    }

    fn mount_height(&self) -> f64 {
        self.sill()
    }
}

impl Opening for WindowSpec {
    fn kind(&self) -> &'static str {
        "Window"
    }

    fn frame_name(&self) -> &'static str {
        "WindowFrame"
    }

    fn frame_depth(&self) -> f64 {
        0.05
    }

    fn material(&self) -> Material {
        Material::WINDOW
    }

    fn offset(&self) -> f64 {
        self.x
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn sill(&self) -> f64 {
        self.z
    }

    // The frame is lifted by a further half height inside the group, so the
    // glass sits at [z + h/2, z + 3h/2] while the hole path stays at [z, z + h].
    fn mount_height(&self) -> f64 {
        self.z + self.height / 2.0
    }
}

/// Builds the local volume of an opening: a group named after its kind,
/// holding one frame box whose base is at the group origin.
pub struct MakeOpening<'a, O: Opening + ?Sized> {
    opening: &'a O,
}

impl<'a, O: Opening + ?Sized> MakeOpening<'a, O> {
    /// Creates a new `MakeOpening` operation.
    #[must_use]
    pub fn new(opening: &'a O) -> Self {
        Self { opening }
    }

    /// Executes the operation, adding the detached opening group to the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the width or height is not positive.
    pub fn execute(&self, scene: &mut SceneGraph) -> Result<NodeId> {
        let o = self.opening;
        let frame_mesh = MakeBox::new(Vector3::new(o.width(), o.height(), o.frame_depth())).execute()?;

        let group = scene.add_group(o.kind());
        let frame = scene.add_mesh(o.frame_name(), frame_mesh, o.material());
        scene.set_transform(frame, Isometry3::translation(0.0, o.height() / 2.0, 0.0))?;
        scene.attach(group, frame)?;
        Ok(group)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::BoundingBox;

    fn door() -> DoorSpec {
        DoorSpec { x: 2.5, width: 1.0, height: 2.1, z: None }
    }

    fn window() -> WindowSpec {
        WindowSpec { x: 6.5, width: 1.0, height: 1.2, z: 0.9 }
    }

    #[test]
    fn door_hole_path_defaults_sill_to_zero() {
        let path = door().hole_path();
        assert_eq!(
            path,
            [
                Point2::new(2.0, 0.0),
                Point2::new(3.0, 0.0),
                Point2::new(3.0, 2.1),
                Point2::new(2.0, 2.1),
            ]
        );
    }

    #[test]
    fn raised_door_uses_its_sill() {
        let d = DoorSpec { z: Some(0.3), ..door() };
        assert!((d.hole_path()[0].y - 0.3).abs() < TOLERANCE);
        assert!((d.mount_height() - 0.3).abs() < TOLERANCE);
    }

    #[test]
    fn window_hole_path_starts_at_sill() {
        let path = window().hole_path();
        assert!((path[0].x - 6.0).abs() < TOLERANCE);
        assert!((path[0].y - 0.9).abs() < TOLERANCE);
        assert!((path[2].y - 2.1).abs() < TOLERANCE);
        assert!((window().mount_height() - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn door_volume_sits_on_its_origin() {
        let mut scene = SceneGraph::new();
        let group = MakeOpening::new(&door()).execute(&mut scene).unwrap();

        let node = scene.node(group).unwrap();
        assert_eq!(node.name, "Door");
        let frame = scene.node(node.children()[0]).unwrap();
        assert_eq!(frame.name, "DoorFrame");
        assert_eq!(frame.mesh().unwrap().1, &Material::DOOR);

        let bounds = BoundingBox::new(group).execute(&scene).unwrap().unwrap();
        let size = bounds.size();
        assert!((size.x - 1.0).abs() < 1e-9 && (size.y - 2.1).abs() < 1e-9);
        assert!((size.z - 0.1).abs() < 1e-9);
        // Centered horizontally on the origin, base at y = 0.
        assert!(bounds.center().x.abs() < 1e-9);
        assert!(bounds.min.y.abs() < 1e-9);
    }

    #[test]
    fn window_uses_translucent_material() {
        let mut scene = SceneGraph::new();
        let group = MakeOpening::new(&window()).execute(&mut scene).unwrap();
        let frame_id = scene.node(group).unwrap().children()[0];
        let (_, material) = scene.node(frame_id).unwrap().mesh().unwrap();
        assert!(material.is_translucent());
        assert_eq!(scene.node(frame_id).unwrap().name, "WindowFrame");
    }

    #[test]
    fn openings_share_one_trait() {
        let (d, w) = (door(), window());
        let openings: [&dyn Opening; 2] = [&d, &w];
        let kinds: Vec<_> = openings.iter().map(|o| o.kind()).collect();
        assert_eq!(kinds, ["Door", "Window"]);
    }

    #[test]
    fn validate_checks_span_and_height() {
        assert!(door().validate(10.0, 3.0).is_ok());
        assert!(matches!(
            door().validate(2.9, 3.0),
            Err(SpecError::OpeningOutOfBounds { .. })
        ));
        assert!(matches!(
            DoorSpec { x: 0.4, ..door() }.validate(10.0, 3.0),
            Err(SpecError::OpeningOutOfBounds { .. })
        ));
        assert!(matches!(
            door().validate(10.0, 2.0),
            Err(SpecError::OpeningTooTall { .. })
        ));
        assert!(matches!(
            WindowSpec { width: 0.0, ..window() }.validate(10.0, 3.0),
            Err(SpecError::NonPositive { .. })
        ));
    }
}
