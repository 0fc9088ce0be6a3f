use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The three-light rig installed in every section scene: a white ambient
/// fill, a shadow-casting key light and a tinted point light.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// Ambient light color (linear RGB).
    #[schemars(skip)]
    pub ambient_color: [f32; 3],
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient_intensity: f32,
    /// Key (directional) light color.
    #[schemars(skip)]
    pub key_color: [f32; 3],
    /// Key light intensity.
    #[schemars(title = "Key Light", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub key_intensity: f32,
    /// Key light position; it points at the origin.
    #[schemars(skip)]
    pub key_position: [f32; 3],
    /// Shadow map resolution of the key light, in texels per side.
    #[schemars(skip)]
    pub shadow_map_size: u32,
    /// Point light color.
    #[schemars(skip)]
    pub point_color: [f32; 3],
    /// Point light intensity.
    #[schemars(title = "Point Light", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub point_intensity: f32,
    /// Point light falloff distance.
    #[schemars(skip)]
    pub point_range: f32,
    /// Point light position.
    #[schemars(skip)]
    pub point_position: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.4,
            key_color: [1.0, 1.0, 1.0],
            key_intensity: 0.8,
            key_position: [10.0, 10.0, 5.0],
            shadow_map_size: 1024,
            // #4ecdc4
            point_color: [0.306, 0.804, 0.769],
            point_intensity: 0.6,
            point_range: 100.0,
            point_position: [-10.0, 10.0, 10.0],
        }
    }
}
