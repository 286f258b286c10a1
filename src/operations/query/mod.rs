mod bounding_box;
mod surface;
mod thermal;

pub use bounding_box::{Aabb, BoundingBox};
pub use surface::{SurfaceArea, WallSurface, WallSurfaceReport};
pub use thermal::{LayerResistance, ResistanceReport, ThermalResistance};
