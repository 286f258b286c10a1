use crate::error::Result;
use crate::math::{Point2, Vector3};
use crate::operations::shaping::ExtrudeProfile;
use crate::operations::transform::Translate;
use crate::tessellation::TriangleMesh;

/// Creates a cuboid mesh of the given size centered at the local origin.
pub struct MakeBox {
    size: Vector3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation; `size` is `(width, height, depth)`.
    #[must_use]
    pub fn new(size: Vector3) -> Self {
        Self { size }
    }

    /// Executes the operation, returning the box mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if any extent is not positive.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let (hx, hy) = (self.size.x / 2.0, self.size.y / 2.0);
        let profile = [
            Point2::new(-hx, -hy),
            Point2::new(hx, -hy),
            Point2::new(hx, hy),
            Point2::new(-hx, hy),
        ];
        let mut mesh = ExtrudeProfile::new(&profile, self.size.z).execute()?;
        Translate::new(Vector3::new(0.0, 0.0, -self.size.z / 2.0)).execute(&mut mesh);
        Ok(mesh)
    }
}
