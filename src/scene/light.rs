use glam::Vec3;
use serde::Serialize;

use crate::options::LightingOptions;

/// A light in a section scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    /// Uniform fill light.
    Ambient {
        /// Linear RGB color.
        color: [f32; 3],
        /// Intensity multiplier.
        intensity: f32,
    },
    /// Directional light shining from `position` toward the origin.
    Directional {
        /// Linear RGB color.
        color: [f32; 3],
        /// Intensity multiplier.
        intensity: f32,
        /// Source position.
        position: Vec3,
        /// Shadow map resolution, 0 for no shadows.
        shadow_map_size: u32,
    },
    /// Omni light with distance falloff.
    Point {
        /// Linear RGB color.
        color: [f32; 3],
        /// Intensity multiplier.
        intensity: f32,
        /// Falloff distance.
        range: f32,
        /// Position.
        position: Vec3,
    },
}

impl Light {
    /// The standard three-light rig installed in every section scene.
    #[must_use]
    pub fn rig(options: &LightingOptions) -> Vec<Light> {
        vec![
            Light::Ambient {
                color: options.ambient_color,
                intensity: options.ambient_intensity,
            },
            Light::Directional {
                color: options.key_color,
                intensity: options.key_intensity,
                position: Vec3::from_array(options.key_position),
                shadow_map_size: options.shadow_map_size,
            },
            Light::Point {
                color: options.point_color,
                intensity: options.point_intensity,
                range: options.point_range,
                position: Vec3::from_array(options.point_position),
            },
        ]
    }
}
