use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::spec::{non_negative, positive, WallLayer};

/// Thermal resistance of one layer, in m²·K/W.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerResistance {
    pub material: String,
    pub r: f64,
}

/// Per-layer and total thermal resistance of a wall construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistanceReport {
    /// Sum of the layer resistances, in m²·K/W.
    pub total: f64,
    /// One entry per input layer, in input order.
    pub layers: Vec<LayerResistance>,
}

impl ResistanceReport {
    /// Rounds each layer to 3 decimals and the total to 2.
    ///
    /// The total is rounded from the exact sum, not from the rounded layers.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            total: round_to(self.total, 2),
            layers: self
                .layers
                .iter()
                .map(|l| LayerResistance {
                    material: l.material.clone(),
                    r: round_to(l.r, 3),
                })
                .collect(),
        }
    }
}

/// Computes `R = thickness / lambda` for every layer of a multi-layer wall.
pub struct ThermalResistance<'a> {
    layers: &'a [WallLayer],
}

impl<'a> ThermalResistance<'a> {
    /// Creates a new `ThermalResistance` query.
    #[must_use]
    pub fn new(layers: &'a [WallLayer]) -> Self {
        Self { layers }
    }

    /// Executes the query. An empty construction has zero resistance.
    ///
    /// # Errors
    ///
    /// Returns an error if a thickness is negative or a conductivity is not positive.
    pub fn execute(&self) -> Result<ResistanceReport> {
        let mut layers = Vec::with_capacity(self.layers.len());
        for layer in self.layers {
            non_negative("layer thickness", layer.thickness)?;
            positive("layer conductivity", layer.lambda)?;
            layers.push(LayerResistance {
                material: layer.material.clone(),
                r: layer.thickness / layer.lambda,
            });
        }
        let total = layers.iter().map(|l| l.r).sum();
        debug!(layers = layers.len(), total, "computed thermal resistance");
        Ok(ResistanceReport { total, layers })
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{HejausError, SpecError};

    fn layer(material: &str, thickness: f64, lambda: f64) -> WallLayer {
        WallLayer {
            material: material.to_owned(),
            thickness,
            lambda,
        }
    }

    fn insulated_brick() -> Vec<WallLayer> {
        vec![layer("polystyrene", 0.1, 0.035), layer("brique", 0.2, 0.8)]
    }

    #[test]
    fn resistance_is_thickness_over_lambda() {
        let layers = insulated_brick();
        let report = ThermalResistance::new(&layers).execute().unwrap();
        assert_relative_eq!(report.layers[0].r, 0.1 / 0.035, epsilon = 1e-12);
        assert_relative_eq!(report.layers[1].r, 0.25, epsilon = 1e-12);
        assert_relative_eq!(report.total, 0.1 / 0.035 + 0.25, epsilon = 1e-12);
        assert_eq!(report.layers[0].material, "polystyrene");
    }

    #[test]
    fn rounded_report_matches_presentation() {
        let layers = insulated_brick();
        let report = ThermalResistance::new(&layers).execute().unwrap().rounded();
        assert_eq!(report.total, 3.11);
        assert_eq!(report.layers[0].r, 2.857);
        assert_eq!(report.layers[1].r, 0.25);
    }

    #[test]
    fn empty_construction_has_zero_resistance() {
        let report = ThermalResistance::new(&[]).execute().unwrap();
        assert_eq!(report.total, 0.0);
        assert!(report.layers.is_empty());
    }

    #[test]
    fn bad_layers_are_rejected() {
        let err = ThermalResistance::new(&[layer("air", 0.1, 0.0)])
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            HejausError::Spec(SpecError::NonPositive { what: "layer conductivity", .. })
        ));
        let err = ThermalResistance::new(&[layer("air", -0.1, 0.02)])
            .execute()
            .unwrap_err();
        assert!(matches!(err, HejausError::Spec(SpecError::Negative { .. })));
    }

    #[test]
    fn layers_deserialize_from_json() {
        let json = r#"[{"material": "brique", "thickness": 0.2, "lambda": 0.8}]"#;
        let layers: Vec<WallLayer> = serde_json::from_str(json).unwrap();
        let report = ThermalResistance::new(&layers).execute().unwrap();
        assert_relative_eq!(report.total, 0.25, epsilon = 1e-12);
    }
}
