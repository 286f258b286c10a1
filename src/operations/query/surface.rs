use crate::error::Result;
use crate::math::polygon_2d::signed_area;
use crate::operations::creation::Opening;
use crate::spec::{non_negative, validate_wall_with_openings, Openings, WallSpec};

/// Computes the area of a `width x height` rectangle.
pub struct SurfaceArea {
    width: f64,
    height: f64,
}

impl SurfaceArea {
    /// Creates a new `SurfaceArea` query.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Executes the query, returning the area in square meters.
    ///
    /// # Errors
    ///
    /// Returns an error if either side is negative or not finite.
    pub fn execute(&self) -> Result<f64> {
        non_negative("surface width", self.width)?;
        non_negative("surface height", self.height)?;
        Ok(self.width * self.height)
    }
}

/// Wall face areas, all in square meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSurfaceReport {
    /// `length x height` of one wall face.
    pub gross: f64,
    /// Sum of the door and window outlines.
    pub openings: f64,
    /// `gross - openings`.
    pub net: f64,
}

/// Computes the gross, opening and net face area of a wall.
pub struct WallSurface<'a> {
    wall: &'a WallSpec,
    openings: Option<&'a Openings>,
}

impl<'a> WallSurface<'a> {
    /// Creates a new `WallSurface` query over the wall's own openings.
    #[must_use]
    pub fn new(wall: &'a WallSpec) -> Self {
        Self {
            wall,
            openings: None,
        }
    }

    /// Uses the same opening override as [`MakeWall::with_openings`].
    ///
    /// [`MakeWall::with_openings`]: crate::operations::creation::MakeWall::with_openings
    #[must_use]
    pub fn with_openings(mut self, openings: &'a Openings) -> Self {
        self.openings = Some(openings);
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall or one of its openings is invalid.
    pub fn execute(&self) -> Result<WallSurfaceReport> {
        validate_wall_with_openings(self.wall, self.openings)?;
        let gross = SurfaceArea::new(self.wall.length(), self.wall.height).execute()?;

        let doors = self.wall.resolved_doors(self.openings).iter().map(hole_area);
        let windows = self.wall.resolved_windows(self.openings).iter().map(hole_area);
        let openings: f64 = doors.chain(windows).sum();

        Ok(WallSurfaceReport {
            gross,
            openings,
            net: gross - openings,
        })
    }
}

fn hole_area<O: Opening>(opening: &O) -> f64 {
    signed_area(&opening.hole_path()).abs()
}
