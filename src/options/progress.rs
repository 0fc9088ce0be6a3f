use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How local progress inside the active section is normalized.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProgressNormalization {
    /// Divide by the viewport height: every section completes after one
    /// screen of scrolling past its start, whatever its length.
    #[default]
    Viewport,
    /// Divide by the section's own `[start, end)` band width.
    SectionBand,
}

/// Scroll-to-progress mapping parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Progress", inline)]
#[serde(default)]
pub struct ProgressOptions {
    /// Fraction of the viewport height added to `scrollY` before mapping,
    /// so a section activates before its top reaches the viewport top.
    #[schemars(title = "Look Ahead", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub look_ahead: f64,
    /// Progress normalization strategy.
    #[schemars(title = "Normalization")]
    pub normalization: ProgressNormalization,
    /// Global multiplier for per-frame rotation increments.
    #[schemars(title = "Speed Factor", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub speed_factor: f32,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            look_ahead: 0.5,
            normalization: ProgressNormalization::Viewport,
            speed_factor: 1.5,
        }
    }
}
