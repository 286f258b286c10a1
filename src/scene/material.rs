/// Surface appearance of a mesh, in physically-based terms.
///
/// Colors are `0xRRGGBB`. Only the renderer interprets these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: u32,
    pub roughness: f64,
    /// Alpha in `[0, 1]`; `1.0` is fully opaque.
    pub opacity: f64,
    /// Fraction of light transmitted through the surface.
    pub transmission: f64,
    pub clearcoat: f64,
    pub clearcoat_roughness: f64,
}

impl Material {
    /// An opaque material with the given color and roughness.
    #[must_use]
    pub const fn opaque(color: u32, roughness: f64) -> Self {
        Self {
            color,
            roughness,
            opacity: 1.0,
            transmission: 0.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
        }
    }

    /// Returns `true` if the renderer must blend this material.
    #[must_use]
    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0 || self.transmission > 0.0
    }

    pub const FLOOR: Self = Self::opaque(0xaa_aaaa, 1.0);
    pub const ROOF: Self = Self::opaque(0x88_8888, 1.0);
    pub const WALL: Self = Self::opaque(0xc9_c9c9, 1.0);
    pub const DOOR: Self = Self::opaque(0x65_4321, 0.6);
    /// Tinted glass.
    pub const WINDOW: Self = Self {
        color: 0xff_0000,
        roughness: 0.05,
        opacity: 0.4,
        transmission: 0.9,
        clearcoat: 1.0,
        clearcoat_roughness: 0.1,
    };
}

impl Default for Material {
    fn default() -> Self {
        Self::opaque(0xff_ffff, 1.0)
    }
}
