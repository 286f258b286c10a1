//! Sample house: builds the 10 x 8 m reference house and prints its scene tree.
//!
//! Usage:
//! ```text
//! cargo run --example sample_house                      # show all parts
//! cargo run --example sample_house -- floor walls       # toggle parts in order
//! RUST_LOG=hejaus=debug cargo run --example sample_house
//! ```

use hejaus::operations::query::{BoundingBox, ThermalResistance, WallSurface};
use hejaus::scene::NodeKind;
use hejaus::spec::sample::sample_house;
use hejaus::spec::WallLayer;
use hejaus::{House, NodeId, Part, Result, SceneGraph, SceneRenderer, ViewportConfig};

/// Prints the visible part of the scene instead of drawing it.
struct TreePrinter {
    config: ViewportConfig,
    frames: usize,
}

impl TreePrinter {
    fn print_node(scene: &SceneGraph, id: NodeId, depth: usize) -> Result<()> {
        let node = scene.node(id)?;
        if !node.visible {
            return Ok(());
        }
        let detail = match &node.kind {
            NodeKind::Group => String::new(),
            NodeKind::Mesh { mesh, material } => {
                format!(" [{} triangles, #{:06x}]", mesh.triangle_count(), material.color)
            }
        };
        let at = node.transform.translation.vector;
        println!(
            "{:indent$}{}{detail} at ({:.2}, {:.2}, {:.2})",
            "",
            node.name,
            at.x,
            at.y,
            at.z,
            indent = depth * 2
        );
        for &child in node.children() {
            Self::print_node(scene, child, depth + 1)?;
        }
        Ok(())
    }
}

impl SceneRenderer for TreePrinter {
    fn render(&mut self, scene: &SceneGraph) -> Result<()> {
        self.frames += 1;
        println!(
            "-- frame {} (background #{:06x}, fov {}°)",
            self.frames, self.config.background, self.config.camera.fov_degrees
        );
        for root in scene.roots() {
            Self::print_node(scene, root, 0)?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for hejaus.
    // Override with RUST_LOG env var (e.g. RUST_LOG=hejaus=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hejaus=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let spec = sample_house();
    let renderer = TreePrinter {
        config: ViewportConfig::default(),
        frames: 0,
    };
    let mut house = House::new(&spec, renderer)?;

    let parts: Vec<Part> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse())
        .collect::<Result<_>>()?;
    if parts.is_empty() {
        house.show_all()?;
    } else {
        for part in parts {
            house.toggle(part)?;
        }
    }

    println!("rendered {} frame(s)", house.renderer().frames);

    if let Some(bounds) = BoundingBox::new(house.parts().root)
        .visible_only(true)
        .execute(house.scene())?
    {
        let size = bounds.size();
        println!("visible extent: {:.2} x {:.2} x {:.2} m", size.x, size.y, size.z);
    }

    let front = WallSurface::new(&spec.walls[spec.opening_wall])
        .with_openings(&spec.openings)
        .execute()?;
    println!(
        "front wall: gross {:.2} m², openings {:.2} m², net {:.2} m²",
        front.gross, front.openings, front.net
    );

    let layers = [
        WallLayer {
            material: "polystyrene".into(),
            thickness: 0.1,
            lambda: 0.035,
        },
        WallLayer {
            material: "brique".into(),
            thickness: 0.2,
            lambda: 0.8,
        },
    ];
    let report = ThermalResistance::new(&layers).execute()?.rounded();
    for layer in &report.layers {
        println!("R({}) = {} m²·K/W", layer.material, layer.r);
    }
    println!("R total = {} m²·K/W", report.total);
    Ok(())
}
