//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (progress mapping, camera, lighting, per-section
//! animation constants, asset locations, page chrome) are consolidated here.
//! Options serialize to/from TOML so a page can ship a preset next to its
//! models.

mod assets;
mod camera;
mod lighting;
mod progress;
mod sections;
mod ui;

use std::path::Path;

pub use assets::{AssetOptions, PlaceholderPolicy};
pub use camera::CameraOptions;
pub use lighting::LightingOptions;
pub use progress::{ProgressNormalization, ProgressOptions};
use schemars::JsonSchema;
pub use sections::{
    AdnParams, BigBangParams, HumanoParams, NewtonParams, SectionOptions,
    VitruvioParams,
};
use serde::{Deserialize, Serialize};
pub use ui::UiOptions;

use crate::error::StoryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[progress]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Scroll-to-progress mapping.
    pub progress: ProgressOptions,
    /// Camera projection.
    pub camera: CameraOptions,
    /// Per-scene lighting rig.
    pub lighting: LightingOptions,
    /// Per-section animation constants.
    pub sections: SectionOptions,
    /// Model locations.
    #[schemars(skip)]
    pub assets: AssetOptions,
    /// Navbar and scroll-indicator thresholds.
    pub ui: UiOptions,
}

impl Options {
    /// Generate JSON Schema describing the tweakable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, StoryError> {
        toml::from_str(content)
            .map_err(|e| StoryError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, StoryError> {
        let content = std::fs::read_to_string(path).map_err(StoryError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), StoryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StoryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StoryError::Io)?;
        }
        std::fs::write(path, content).map_err(StoryError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[progress]
normalization = "section_band"

[sections.newton]
bounce_threshold = 0.6
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.progress.normalization,
            ProgressNormalization::SectionBand
        );
        assert_eq!(opts.sections.newton.bounce_threshold, 0.6);
        // Everything else should be default
        assert_eq!(opts.progress.look_ahead, 0.5);
        assert_eq!(opts.sections.newton.apple_start_y, 5.0);
        assert_eq!(opts.sections.adn.rotation_speed, 0.008);
        assert_eq!(opts.camera.fovy, 75.0);
    }

    #[test]
    fn easing_is_configurable() {
        let toml_str = r#"
[sections.adn.scale_easing]
kind = "quadratic_out"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.sections.adn.scale_easing,
            EasingFunction::QuadraticOut
        );
        assert_eq!(
            opts.sections.bigbang.scale_easing,
            EasingFunction::DoubleSpeed
        );
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[progress\nlook_ahead = ").unwrap_err();
        assert!(matches!(err, StoryError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = std::env::temp_dir()
            .join(format!("scrollstory-opts-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.progress.speed_factor = 2.25;
        opts.assets.models_path = "/cdn/models".to_owned();
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("progress"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("sections"));
        assert!(props.contains_key("ui"));

        // Asset paths are deployment details, not tweakables
        assert!(!props.contains_key("assets"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}
