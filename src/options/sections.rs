//! Per-section animation constants.
//!
//! Each table holds the numbers one section's animation interpolates
//! between. The animation code only reads these; changing a preset never
//! needs a code change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::easing::EasingFunction;

/// Arms converging (bigbang).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Big Bang", inline)]
#[serde(default)]
pub struct BigBangParams {
    /// Starting x of the left arm.
    pub initial_left_x: f32,
    /// Starting x of the right arm.
    pub initial_right_x: f32,
    /// Gap left between the fingertips when the arms meet.
    #[schemars(range(min = 0.0, max = 2.0))]
    pub touch_distance: f32,
    /// Scale at progress 0.
    pub initial_scale: f32,
    /// Scale once the scale ramp completes.
    pub target_scale: f32,
    /// Opacity at progress 0; fades to zero as the section completes.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub opacity: f32,
    /// Easing of the scale ramp.
    #[schemars(skip)]
    pub scale_easing: EasingFunction,
}

impl Default for BigBangParams {
    fn default() -> Self {
        Self {
            initial_left_x: -3.0,
            initial_right_x: 3.0,
            touch_distance: 0.5,
            initial_scale: 0.1,
            target_scale: 0.4,
            opacity: 1.0,
            scale_easing: EasingFunction::DoubleSpeed,
        }
    }
}

/// Rotating helix (adn).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "DNA", inline)]
#[serde(default)]
pub struct AdnParams {
    /// Scale at progress 0.
    pub initial_scale: f32,
    /// Scale at progress 1.
    pub target_scale: f32,
    /// Material opacity before the first frame.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub initial_opacity: f32,
    /// Radians added to the y rotation per frame at full progress.
    pub rotation_speed: f32,
    /// Easing of the scale ramp.
    #[schemars(skip)]
    pub scale_easing: EasingFunction,
}

impl Default for AdnParams {
    fn default() -> Self {
        Self {
            initial_scale: 0.1,
            target_scale: 0.4,
            initial_opacity: 0.0,
            rotation_speed: 0.008,
            scale_easing: EasingFunction::Linear,
        }
    }
}

/// Wireframe figure (humano).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Human", inline)]
#[serde(default)]
pub struct HumanoParams {
    /// Scale at progress 0.
    pub initial_scale: f32,
    /// Scale at progress 1.
    pub target_scale: f32,
    /// Opacity at progress 0.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub initial_opacity: f32,
    /// Opacity at progress 1.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub target_opacity: f32,
    /// Resting height of the figure.
    pub rest_y: f32,
    /// Easing of the scale and opacity ramps.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for HumanoParams {
    fn default() -> Self {
        Self {
            initial_scale: 0.1,
            target_scale: 0.4,
            initial_opacity: 0.0,
            target_opacity: 0.8,
            rest_y: -2.0,
            easing: EasingFunction::Linear,
        }
    }
}

/// Vitruvian figure and ring (vitruvio).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Vitruvian", inline)]
#[serde(default)]
pub struct VitruvioParams {
    /// Scale at progress 0.
    pub initial_scale: f32,
    /// Scale at progress 1.
    pub target_scale: f32,
    /// Material opacity before the first frame.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub initial_opacity: f32,
    /// Radians added to the figure's y rotation per frame at full progress.
    pub rotation_speed: f32,
    /// Radians added to the ring's z rotation per frame at full progress.
    pub ring_rotation_speed: f32,
    /// Ring opacity at progress 1.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub ring_max_opacity: f32,
    /// Resting height of the figure.
    pub rest_y: f32,
    /// Easing of the scale ramp.
    #[schemars(skip)]
    pub scale_easing: EasingFunction,
}

impl Default for VitruvioParams {
    fn default() -> Self {
        Self {
            initial_scale: 0.1,
            target_scale: 0.4,
            initial_opacity: 0.0,
            rotation_speed: 0.003,
            ring_rotation_speed: 0.002,
            ring_max_opacity: 0.3,
            rest_y: -1.0,
            scale_easing: EasingFunction::Linear,
        }
    }
}

/// Tree, apple and hand (newton).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Newton", inline)]
#[serde(default)]
pub struct NewtonParams {
    /// Tree scale at progress 0.
    pub tree_initial_scale: f32,
    /// Tree scale added between progress 0 and 1.
    pub tree_scale_gain: f32,
    /// Scale of the apple and the hand.
    pub prop_scale: f32,
    /// Apple height at progress 0.
    pub apple_start_y: f32,
    /// Apple height once it has landed.
    pub apple_rest_y: f32,
    /// Horizontal position of the apple and the hand.
    pub apple_x: f32,
    /// Progress at which the fall ends and the bounce begins.
    #[schemars(range(min = 0.05, max = 1.0))]
    pub bounce_threshold: f32,
    /// Number of half-period bounces during the bounce phase.
    pub bounce_count: f32,
    /// Radians added to the apple's x rotation per frame at full progress.
    pub apple_spin_x: f32,
    /// Radians added to the apple's z rotation per frame at full progress.
    pub apple_spin_z: f32,
    /// Material opacity before the first frame.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub initial_opacity: f32,
}

impl Default for NewtonParams {
    fn default() -> Self {
        Self {
            tree_initial_scale: 0.1,
            tree_scale_gain: 0.3,
            prop_scale: 0.1,
            apple_start_y: 5.0,
            apple_rest_y: -1.5,
            apple_x: 2.0,
            bounce_threshold: 0.75,
            bounce_count: 3.0,
            apple_spin_x: 0.1,
            apple_spin_z: 0.05,
            initial_opacity: 0.0,
        }
    }
}

/// All per-section tables.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Sections", inline)]
#[serde(default)]
pub struct SectionOptions {
    /// Arms converging.
    pub bigbang: BigBangParams,
    /// Rotating helix.
    pub adn: AdnParams,
    /// Wireframe figure.
    pub humano: HumanoParams,
    /// Vitruvian figure and ring.
    pub vitruvio: VitruvioParams,
    /// Tree, apple and hand.
    pub newton: NewtonParams,
}
