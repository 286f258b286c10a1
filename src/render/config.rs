use serde::{Deserialize, Serialize};

/// Perspective camera with orbit controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    pub position: [f64; 3],
    /// Point the orbit controls circle around.
    pub target: [f64; 3],
    /// Orbit damping factor; `0.0` disables damping.
    pub damping: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position: [10.0, 8.0, 15.0],
            target: [0.0, 1.5, 0.0],
            damping: 0.05,
        }
    }
}

/// One white ambient light plus one white directional light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub color: u32,
    pub ambient_intensity: f64,
    pub directional_intensity: f64,
    pub directional_position: [f64; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            color: 0xff_ffff,
            ambient_intensity: 0.7,
            directional_intensity: 0.8,
            directional_position: [10.0, 15.0, 10.0],
        }
    }
}

/// Reference grid on the ground plane, centered on the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Side length in meters.
    pub size: f64,
    pub divisions: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 40.0,
            divisions: 40,
        }
    }
}

/// Viewport settings for a [`SceneRenderer`](super::SceneRenderer).
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Clear color as `0xRRGGBB`.
    pub background: u32,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub grid: GridConfig,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            background: 0xf5_f5f5,
            camera: CameraConfig::default(),
            lighting: LightingConfig::default(),
            grid: GridConfig::default(),
        }
    }
}

impl ViewportConfig {
    /// Horizontal field of view in degrees for a viewport of the given `width / height`.
    #[must_use]
    pub fn horizontal_fov_degrees(&self, aspect: f64) -> f64 {
        let half = (self.camera.fov_degrees.to_radians() / 2.0).tan() * aspect;
        (2.0 * half.atan()).to_degrees()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_viewer() {
        let config = ViewportConfig::default();
        assert_eq!(config.background, 0xf5f5f5);
        assert_eq!(config.camera.fov_degrees, 75.0);
        assert_eq!(config.camera.position, [10.0, 8.0, 15.0]);
        assert_eq!(config.camera.target, [0.0, 1.5, 0.0]);
        assert_eq!(config.lighting.ambient_intensity, 0.7);
        assert_eq!(config.grid.divisions, 40);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: ViewportConfig =
            serde_json::from_str(r#"{"background": 0, "camera": {"fov_degrees": 50.0}}"#).unwrap();
        assert_eq!(config.background, 0);
        assert_eq!(config.camera.fov_degrees, 50.0);
        assert_eq!(config.camera.far, 1000.0);
        assert_eq!(config.grid, GridConfig::default());
    }

    #[test]
    fn square_viewport_keeps_fov() {
        let config = ViewportConfig::default();
        assert!((config.horizontal_fov_degrees(1.0) - 75.0).abs() < 1e-9);
        assert!(config.horizontal_fov_degrees(16.0 / 9.0) > 75.0);
    }
}
