//! Declarative house description.
//!
//! All lengths are meters. Ground-plan coordinates `(x, y)` are the same for
//! contours and wall endpoints. The structs deserialize from any serde
//! format; optional fields default as documented on each one.

pub mod sample;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::math::polygon_2d::{distance, open_loop};
use crate::math::{Point2, TOLERANCE};

/// A location in the house's ground plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn to_point(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// Horizontal slab whose top sits at `z` and bottom at `z - thickness`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorSpec {
    pub contour: Vec<Vec2>,
    pub thickness: f64,
    pub z: f64,
}

/// Flat roof slab; the contour's bounding rectangle is grown by `overhang`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofSpec {
    pub contour: Vec<Vec2>,
    pub thickness: f64,
    pub z: f64,
    pub overhang: f64,
}

/// A door, centered at `x` along its wall; its bottom is at `z` (default 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorSpec {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub z: Option<f64>,
}

/// A window, centered at `x` along its wall; `z` is the sill height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub z: f64,
}

/// Straight vertical wall segment from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSpec {
    pub start: Vec2,
    pub end: Vec2,
    pub height: f64,
    pub thickness: f64,
    #[serde(default)]
    pub doors: Option<Vec<DoorSpec>>,
    #[serde(default)]
    pub windows: Option<Vec<WindowSpec>>,
}

/// Openings supplied at build time.
///
/// A present list replaces the wall's own list of that kind; an absent one
/// falls back to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Openings {
    #[serde(default)]
    pub doors: Option<Vec<DoorSpec>>,
    #[serde(default)]
    pub windows: Option<Vec<WindowSpec>>,
}

/// One material layer of a multi-layer wall construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallLayer {
    pub material: String,
    /// Layer thickness in meters.
    pub thickness: f64,
    /// Thermal conductivity in W/(m·K).
    pub lambda: f64,
}

/// Complete description of a single-story house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseSpec {
    pub floor: FloorSpec,
    pub roof: RoofSpec,
    pub walls: Vec<WallSpec>,
    /// Openings attached to `walls[opening_wall]`.
    #[serde(default)]
    pub openings: Openings,
    #[serde(default)]
    pub opening_wall: usize,
}

impl WallSpec {
    /// Distance between the wall's endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.start.to_point(), &self.end.to_point())
    }

    /// Resolves the effective door list: override, then own list, then none.
    #[must_use]
    pub fn resolved_doors<'a>(&'a self, openings: Option<&'a Openings>) -> &'a [DoorSpec] {
        openings
            .and_then(|o| o.doors.as_deref())
            .or(self.doors.as_deref())
            .unwrap_or(&[])
    }

    /// Resolves the effective window list: override, then own list, then none.
    #[must_use]
    pub fn resolved_windows<'a>(&'a self, openings: Option<&'a Openings>) -> &'a [WindowSpec] {
        openings
            .and_then(|o| o.windows.as_deref())
            .or(self.windows.as_deref())
            .unwrap_or(&[])
    }

    /// Checks the wall's own dimensions (openings are checked by the wall builder).
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] for non-finite or non-positive dimensions or
    /// coincident endpoints.
    pub fn validate(&self) -> Result<(), SpecError> {
        finite("wall start", self.start.x)?;
        finite("wall start", self.start.y)?;
        finite("wall end", self.end.x)?;
        finite("wall end", self.end.y)?;
        positive("wall height", self.height)?;
        positive("wall thickness", self.thickness)?;
        if self.length() < TOLERANCE {
            return Err(SpecError::ZeroLengthWall);
        }
        Ok(())
    }
}

impl FloorSpec {
    /// # Errors
    ///
    /// Returns a [`SpecError`] for a contour under 3 points or bad dimensions.
    pub fn validate(&self) -> Result<(), SpecError> {
        contour("floor contour", &self.contour)?;
        positive("floor thickness", self.thickness)?;
        finite("floor elevation", self.z)
    }
}

impl RoofSpec {
    /// # Errors
    ///
    /// Returns a [`SpecError`] for a contour under 3 points or bad dimensions.
    pub fn validate(&self) -> Result<(), SpecError> {
        contour("roof contour", &self.contour)?;
        positive("roof thickness", self.thickness)?;
        finite("roof elevation", self.z)?;
        non_negative("roof overhang", self.overhang)
    }
}

impl HouseSpec {
    /// The ground-plan footprint used for recentering.
    #[must_use]
    pub fn footprint(&self) -> Vec<Point2> {
        self.floor.contour.iter().map(|v| v.to_point()).collect()
    }

    /// Validates every part of the house, including the openings of every wall.
    ///
    /// # Errors
    ///
    /// Returns the first [`SpecError`] found.
    pub fn validate(&self) -> Result<(), SpecError> {
        self.floor.validate()?;
        self.roof.validate()?;
        if self.opening_wall >= self.walls.len() && has_any(&self.openings) {
            return Err(SpecError::WallIndexOutOfRange {
                index: self.opening_wall,
                count: self.walls.len(),
            });
        }
        for (index, wall) in self.walls.iter().enumerate() {
            let openings = (index == self.opening_wall).then_some(&self.openings);
            validate_wall_with_openings(wall, openings).map_err(|e| SpecError::InvalidWall {
                index,
                context: "house",
                source: Box::new(e),
            })?;
        }
        Ok(())
    }
}

/// Validates a wall together with its resolved openings.
///
/// # Errors
///
/// Returns a [`SpecError`] for bad wall dimensions or an opening that does
/// not fit inside the wall.
pub fn validate_wall_with_openings(
    wall: &WallSpec,
    openings: Option<&Openings>,
) -> Result<(), SpecError> {
    use crate::operations::creation::Opening;

    wall.validate()?;
    let (length, height) = (wall.length(), wall.height);
    for door in wall.resolved_doors(openings) {
        door.validate(length, height)?;
    }
    for window in wall.resolved_windows(openings) {
        window.validate(length, height)?;
    }
    Ok(())
}

fn has_any(openings: &Openings) -> bool {
    openings.doors.as_ref().is_some_and(|d| !d.is_empty())
        || openings.windows.as_ref().is_some_and(|w| !w.is_empty())
}

fn contour(what: &'static str, points: &[Vec2]) -> Result<(), SpecError> {
    for p in points {
        finite(what, p.x)?;
        finite(what, p.y)?;
    }
    let pts: Vec<Point2> = points.iter().map(|v| v.to_point()).collect();
    let count = open_loop(&pts).len();
    if count < 3 {
        return Err(SpecError::TooFewPoints { what, count });
    }
    Ok(())
}

pub(crate) fn finite(what: &'static str, value: f64) -> Result<(), SpecError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpecError::NonFinite { what })
    }
}

pub(crate) fn positive(what: &'static str, value: f64) -> Result<(), SpecError> {
    finite(what, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SpecError::NonPositive { what, value })
    }
}

pub(crate) fn non_negative(what: &'static str, value: f64) -> Result<(), SpecError> {
    finite(what, value)?;
    if value < 0.0 {
        Err(SpecError::Negative { what, value })
    } else {
        Ok(())
    }
}
