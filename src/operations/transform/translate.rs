use crate::math::{Matrix4, Vector3};
use crate::tessellation::TriangleMesh;

/// Translates a mesh by a displacement vector.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Executes the translation, modifying the mesh in place.
    pub fn execute(&self, mesh: &mut TriangleMesh) {
        mesh.transform(&Matrix4::new_translation(&self.displacement));
    }
}
