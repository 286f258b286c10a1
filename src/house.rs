use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HejausError, Result, SpecError};
use crate::operations::creation::{AssembleHouse, HouseParts};
use crate::render::SceneRenderer;
use crate::scene::{NodeId, SceneGraph};
use crate::spec::HouseSpec;

/// A part of the house whose visibility can be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    Floor,
    Walls,
    Roof,
    Windows,
    Doors,
}

impl Part {
    pub const ALL: [Part; 5] = [Part::Floor, Part::Walls, Part::Roof, Part::Windows, Part::Doors];

    fn as_str(self) -> &'static str {
        match self {
            Part::Floor => "floor",
            Part::Walls => "walls",
            Part::Roof => "roof",
            Part::Windows => "windows",
            Part::Doors => "doors",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Part {
    type Err = HejausError;

    fn from_str(s: &str) -> Result<Self> {
        Part::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SpecError::UnknownPart(s.to_owned()).into())
    }
}

/// Visibility flag per [`Part`]; everything starts hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub floor: bool,
    pub walls: bool,
    pub roof: bool,
    pub windows: bool,
    pub doors: bool,
}

impl Visibility {
    #[must_use]
    pub fn all() -> Self {
        Self {
            floor: true,
            walls: true,
            roof: true,
            windows: true,
            doors: true,
        }
    }

    #[must_use]
    pub fn get(&self, part: Part) -> bool {
        match part {
            Part::Floor => self.floor,
            Part::Walls => self.walls,
            Part::Roof => self.roof,
            Part::Windows => self.windows,
            Part::Doors => self.doors,
        }
    }

    fn get_mut(&mut self, part: Part) -> &mut bool {
        match part {
            Part::Floor => &mut self.floor,
            Part::Walls => &mut self.walls,
            Part::Roof => &mut self.roof,
            Part::Windows => &mut self.windows,
            Part::Doors => &mut self.doors,
        }
    }
}

/// An assembled house, its visibility state, and the renderer that shows it.
///
/// Windows and doors sit inside the walls group, so they are only drawn
/// while the walls are visible too.
pub struct House<R> {
    scene: SceneGraph,
    parts: HouseParts,
    visibility: Visibility,
    renderer: R,
}

impl<R: SceneRenderer> House<R> {
    /// Assembles the house with every part hidden. Nothing is rendered yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec is invalid.
    pub fn new(spec: &HouseSpec, renderer: R) -> Result<Self> {
        let (scene, parts) = build(spec)?;
        let mut house = Self {
            scene,
            parts,
            visibility: Visibility::default(),
            renderer,
        };
        house.apply_visibility()?;
        Ok(house)
    }

    /// Flips one part's visibility and renders once.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn toggle(&mut self, part: Part) -> Result<()> {
        let flag = self.visibility.get_mut(part);
        *flag = !*flag;
        debug!(%part, visible = *flag, "toggled part");
        self.apply_visibility()?;
        self.renderer.render(&self.scene)
    }

    /// Makes every part visible and renders once.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn show_all(&mut self) -> Result<()> {
        self.visibility = Visibility::all();
        debug!("showing all parts");
        self.apply_visibility()?;
        self.renderer.render(&self.scene)
    }

    /// Redraws the current scene; called by the host once per frame.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn frame(&mut self) -> Result<()> {
        self.renderer.render(&self.scene)
    }

    /// Rebuilds the scene from a new spec, keeping the current visibility flags,
    /// and renders once. On error the previous house is kept unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec is invalid or rendering fails.
    pub fn rebuild(&mut self, spec: &HouseSpec) -> Result<()> {
        let (scene, parts) = build(spec)?;
        self.scene = scene;
        self.parts = parts;
        debug!(nodes = self.scene.len(), "rebuilt house");
        self.apply_visibility()?;
        self.renderer.render(&self.scene)
    }

    #[must_use]
    pub fn is_visible(&self, part: Part) -> bool {
        self.visibility.get(part)
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    #[must_use]
    pub fn parts(&self) -> &HouseParts {
        &self.parts
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Nodes whose local visibility mirrors one part's flag.
    fn part_nodes(&self, part: Part) -> Vec<NodeId> {
        let parts = &self.parts;
        match part {
            Part::Floor => vec![parts.floor],
            Part::Walls => vec![parts.walls_group],
            Part::Roof => vec![parts.roof],
            Part::Windows => parts.windows.clone(),
            Part::Doors => parts.doors.clone(),
        }
    }

    fn apply_visibility(&mut self) -> Result<()> {
        for part in Part::ALL {
            let visible = self.visibility.get(part);
            for id in self.part_nodes(part) {
                self.scene.set_visible(id, visible)?;
            }
        }
        Ok(())
    }
}

fn build(spec: &HouseSpec) -> Result<(SceneGraph, HouseParts)> {
    let mut scene = SceneGraph::new();
    let parts = AssembleHouse::new(spec).execute(&mut scene)?;
    Ok((scene, parts))
}
