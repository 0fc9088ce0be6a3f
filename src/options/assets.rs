use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::section::SlotKey;

/// When procedural stand-ins are installed while a loader is available.
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
pub enum PlaceholderPolicy {
    /// Install the fallback at startup; the loaded model replaces it.
    #[default]
    Immediate,
    /// Leave the slot empty until the load resolves; the section renders
    /// nothing animated in the meantime.
    OnFailure,
}

/// Model locations and placeholder policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Assets", inline)]
#[serde(default)]
pub struct AssetOptions {
    /// Base path (URL prefix on the web) that model file names resolve
    /// against.
    pub models_path: String,
    /// Placeholder policy while loads are in flight.
    pub placeholder: PlaceholderPolicy,
    /// Left arm model file.
    pub left_arm: String,
    /// Right arm model file.
    pub right_arm: String,
    /// DNA helix model file.
    pub dna: String,
    /// Human figure model file.
    pub human: String,
    /// Vitruvian figure model file.
    pub vitruvian: String,
    /// Tree model file.
    pub tree: String,
    /// Apple model file.
    pub apple: String,
    /// Hand model file.
    pub hand: String,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            models_path: "./models/".to_owned(),
            placeholder: PlaceholderPolicy::Immediate,
            left_arm: "izquierdo.obj".to_owned(),
            right_arm: "derecho.obj".to_owned(),
            dna: "DNA.fbx".to_owned(),
            human: "Male.OBJ".to_owned(),
            vitruvian: "DaVinci_Model.fbx".to_owned(),
            tree: "01_Arbol.fbx".to_owned(),
            apple: "manzana.fbx".to_owned(),
            hand: "hand.obj".to_owned(),
        }
    }
}

impl AssetOptions {
    /// Model file name configured for a slot.
    #[must_use]
    pub fn file_for(&self, slot: SlotKey) -> &str {
        match slot {
            SlotKey::LeftArm => &self.left_arm,
            SlotKey::RightArm => &self.right_arm,
            SlotKey::Dna => &self.dna,
            SlotKey::Human => &self.human,
            SlotKey::Vitruvian => &self.vitruvian,
            SlotKey::Tree => &self.tree,
            SlotKey::Apple => &self.apple,
            SlotKey::Hand => &self.hand,
        }
    }

    /// Full path of a slot's model: `models_path` joined with its file
    /// name, with exactly one `/` between them. An empty `models_path`
    /// gives the bare file name; a root `models_path` (`/`) keeps the root.
    #[must_use]
    pub fn path_for(&self, slot: SlotKey) -> String {
        let base = self.models_path.trim_end_matches('/');
        let file = self.file_for(slot).trim_start_matches('/');
        if self.models_path.is_empty() {
            file.to_owned()
        } else if base.is_empty() {
            format!("/{file}")
        } else {
            format!("{base}/{file}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_joins_with_single_separator() {
        let opts = AssetOptions::default();
        assert_eq!(opts.path_for(SlotKey::Dna), "./models/DNA.fbx");

        let bare = AssetOptions {
            models_path: String::new(),
            ..AssetOptions::default()
        };
        assert_eq!(bare.path_for(SlotKey::Hand), "hand.obj");
    }

    #[test]
    fn root_models_path_keeps_leading_slash() {
        for root in ["/", "//"] {
            let opts = AssetOptions {
                models_path: root.to_owned(),
                ..AssetOptions::default()
            };
            assert_eq!(opts.path_for(SlotKey::Hand), "/hand.obj");
        }
        let absolute = AssetOptions {
            models_path: "/static/models/".to_owned(),
            ..AssetOptions::default()
        };
        assert_eq!(absolute.path_for(SlotKey::Hand), "/static/models/hand.obj");
    }
}
