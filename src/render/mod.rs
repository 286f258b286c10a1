//! The boundary to whatever draws the scene.
//!
//! The crate never draws anything itself. A [`SceneRenderer`] receives the
//! finished [`SceneGraph`] whenever it changes, and once per frame through
//! [`House::frame`](crate::House::frame).

pub mod config;

pub use config::{CameraConfig, GridConfig, LightingConfig, ViewportConfig};

use crate::error::Result;
use crate::scene::SceneGraph;

/// A retained-mode renderer that can draw a scene graph.
pub trait SceneRenderer {
    /// Draws the scene once. Hidden nodes, and everything below them, are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene cannot be drawn.
    fn render(&mut self, scene: &SceneGraph) -> Result<()>;
}

impl<R: SceneRenderer + ?Sized> SceneRenderer for &mut R {
    fn render(&mut self, scene: &SceneGraph) -> Result<()> {
        (**self).render(scene)
    }
}

impl<R: SceneRenderer + ?Sized> SceneRenderer for Box<R> {
    fn render(&mut self, scene: &SceneGraph) -> Result<()> {
        (**self).render(scene)
    }
}
