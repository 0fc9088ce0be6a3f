use serde::Serialize;

/// Convert a `0xRRGGBB` literal to linear-ish `[r, g, b]` in `[0, 1]`.
#[must_use]
pub const fn hex(rgb: u32) -> [f32; 3] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    ]
}

/// Shading model requested from the rendering library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// Lit, specular (Blinn-Phong).
    Phong,
    /// Unlit flat color.
    Basic,
}

/// Surface parameters of one mesh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    /// Shading model.
    pub kind: MaterialKind,
    /// Diffuse color.
    pub color: [f32; 3],
    /// Emissive color (Phong only).
    pub emissive: [f32; 3],
    /// Specular exponent (Phong only).
    pub shininess: f32,
    /// Opacity in `[0, 1]`; only honored when `transparent`.
    pub opacity: f32,
    /// Whether the renderer blends this material.
    pub transparent: bool,
    /// Draw edges only.
    pub wireframe: bool,
    /// Render back faces too.
    pub double_sided: bool,
    /// Name carried over from the model file, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kind: MaterialKind::Phong,
            color: [1.0, 1.0, 1.0],
            emissive: [0.0, 0.0, 0.0],
            shininess: 30.0,
            opacity: 1.0,
            transparent: false,
            wireframe: false,
            double_sided: false,
            name: None,
        }
    }
}

impl Material {
    /// Opaque Phong material with the given `0xRRGGBB` color.
    #[must_use]
    pub fn phong(color: u32) -> Self {
        Self {
            color: hex(color),
            ..Self::default()
        }
    }

    /// Opaque unlit material with the given `0xRRGGBB` color.
    #[must_use]
    pub fn basic(color: u32) -> Self {
        Self {
            kind: MaterialKind::Basic,
            color: hex(color),
            ..Self::default()
        }
    }

    /// Set the emissive color.
    #[must_use]
    pub fn with_emissive(mut self, emissive: u32) -> Self {
        self.emissive = hex(emissive);
        self
    }

    /// Set the specular exponent.
    #[must_use]
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Make the material blended at the given opacity.
    #[must_use]
    pub fn transparent(mut self, opacity: f32) -> Self {
        self.transparent = true;
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Draw edges only.
    #[must_use]
    pub fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    /// Render both faces.
    #[must_use]
    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// Keep the name of the material this one replaces.
    #[must_use]
    pub fn named(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_splits_channels() {
        assert_eq!(hex(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex(0x00ff00), [0.0, 1.0, 0.0]);
        let teal = hex(0x4ecdc4);
        assert!((teal[0] - 78.0 / 255.0).abs() < 1e-6);
        assert!((teal[2] - 196.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn builders_compose() {
        let m = Material::basic(0x00ffff).wireframe().transparent(1.5);
        assert_eq!(m.kind, MaterialKind::Basic);
        assert!(m.wireframe);
        assert!(m.transparent);
        assert_eq!(m.opacity, 1.0);
    }
}
