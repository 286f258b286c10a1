//! Procedural geometry for simple single-story houses.
//!
//! A [`HouseSpec`] describes a floor contour, a flat roof and a list of wall
//! segments with doors and windows. [`AssembleHouse`] turns it into a named
//! [`SceneGraph`] of triangle meshes, and [`House`] keeps that scene together
//! with per-part visibility for a [`SceneRenderer`].

pub mod error;
pub mod house;
pub mod math;
pub mod operations;
pub mod render;
pub mod scene;
pub mod spec;
pub mod tessellation;

pub use error::{HejausError, Result};
pub use house::{House, Part, Visibility};
pub use operations::creation::{AssembleHouse, HouseParts};
pub use render::{SceneRenderer, ViewportConfig};
pub use scene::{NodeId, SceneGraph};
pub use spec::HouseSpec;
