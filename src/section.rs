//! Section identity and narrative order.
//!
//! The page tells one story in a fixed order: bigbang → adn → humano →
//! vitruvio → newton. Every per-section table in the crate is keyed by
//! [`SectionId`] and stored in a [`PerSection`] array, so the order can never
//! drift between the progress mapper, the registry and the UI.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One narrative beat of the scroll experience.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum SectionId {
    /// Two arms reaching toward each other.
    #[serde(rename = "bigbang")]
    BigBang,
    /// Rotating DNA helix.
    #[serde(rename = "adn")]
    Adn,
    /// Wireframe human figure.
    #[serde(rename = "humano")]
    Humano,
    /// Vitruvian man inside a ring.
    #[serde(rename = "vitruvio")]
    Vitruvio,
    /// Tree, falling apple and catching hand.
    #[serde(rename = "newton")]
    Newton,
}

impl SectionId {
    /// Number of sections in the narrative.
    pub const COUNT: usize = 5;

    /// All sections in narrative order.
    pub const ALL: [SectionId; Self::COUNT] = [
        Self::BigBang,
        Self::Adn,
        Self::Humano,
        Self::Vitruvio,
        Self::Newton,
    ];

    /// Position of this section in the narrative order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::BigBang => 0,
            Self::Adn => 1,
            Self::Humano => 2,
            Self::Vitruvio => 3,
            Self::Newton => 4,
        }
    }

    /// Section at a narrative position, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short name used for DOM ids and logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BigBang => "bigbang",
            Self::Adn => "adn",
            Self::Humano => "humano",
            Self::Vitruvio => "vitruvio",
            Self::Newton => "newton",
        }
    }

    /// Look a section up by its short name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// The section immediately before this one in the narrative.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// DOM id of the element that hosts this section's canvas.
    #[must_use]
    pub fn canvas_id(self) -> String {
        format!("{}-canvas", self.name())
    }

    /// DOM id of this section's particle layer.
    #[must_use]
    pub fn particles_id(self) -> String {
        format!("particles-{}", self.name())
    }

    /// Model slots owned by this section.
    #[must_use]
    pub fn slots(self) -> &'static [SlotKey] {
        match self {
            Self::BigBang => &[SlotKey::LeftArm, SlotKey::RightArm],
            Self::Adn => &[SlotKey::Dna],
            Self::Humano => &[SlotKey::Human],
            Self::Vitruvio => &[SlotKey::Vitruvian],
            Self::Newton => &[SlotKey::Tree, SlotKey::Apple, SlotKey::Hand],
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A loadable model position inside a section's display graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SlotKey {
    /// Left arm reaching right.
    LeftArm,
    /// Right arm reaching left.
    RightArm,
    /// DNA double helix.
    Dna,
    /// Human figure.
    Human,
    /// Vitruvian figure.
    Vitruvian,
    /// Newton's tree.
    Tree,
    /// The falling apple.
    Apple,
    /// The hand catching the apple.
    Hand,
}

impl SlotKey {
    /// Every slot across all sections, in narrative order.
    pub const ALL: [SlotKey; 8] = [
        Self::LeftArm,
        Self::RightArm,
        Self::Dna,
        Self::Human,
        Self::Vitruvian,
        Self::Tree,
        Self::Apple,
        Self::Hand,
    ];

    /// Section that owns this slot.
    #[must_use]
    pub fn section(self) -> SectionId {
        match self {
            Self::LeftArm | Self::RightArm => SectionId::BigBang,
            Self::Dna => SectionId::Adn,
            Self::Human => SectionId::Humano,
            Self::Vitruvian => SectionId::Vitruvio,
            Self::Tree | Self::Apple | Self::Hand => SectionId::Newton,
        }
    }

    /// Short name used for logging and node names.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LeftArm => "left_arm",
            Self::RightArm => "right_arm",
            Self::Dna => "dna",
            Self::Human => "human",
            Self::Vitruvian => "vitruvian",
            Self::Tree => "tree",
            Self::Apple => "apple",
            Self::Hand => "hand",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-size table with one entry per section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PerSection<T>([T; SectionId::COUNT]);

impl<T> PerSection<T> {
    /// Build a table by evaluating `f` for each section in order.
    pub fn from_fn(mut f: impl FnMut(SectionId) -> T) -> Self {
        Self(SectionId::ALL.map(&mut f))
    }

    /// Iterate `(section, value)` pairs in narrative order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &T)> {
        SectionId::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterate `(section, value)` pairs mutably in narrative order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SectionId, &mut T)> {
        SectionId::ALL.into_iter().zip(self.0.iter_mut())
    }

    /// Values in narrative order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> Index<SectionId> for PerSection<T> {
    type Output = T;

    fn index(&self, section: SectionId) -> &T {
        &self.0[section.index()]
    }
}

impl<T> IndexMut<SectionId> for PerSection<T> {
    fn index_mut(&mut self, section: SectionId) -> &mut T {
        &mut self.0[section.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_order() {
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(SectionId::from_index(i), Some(section));
            assert_eq!(SectionId::from_name(section.name()), Some(section));
        }
        assert_eq!(SectionId::from_index(SectionId::COUNT), None);
        assert_eq!(SectionId::from_name("epilogue"), None);
    }

    #[test]
    fn previous_follows_narrative() {
        assert_eq!(SectionId::BigBang.previous(), None);
        assert_eq!(SectionId::Adn.previous(), Some(SectionId::BigBang));
        assert_eq!(SectionId::Newton.previous(), Some(SectionId::Vitruvio));
    }

    #[test]
    fn dom_ids_match_page_markup() {
        assert_eq!(SectionId::Vitruvio.canvas_id(), "vitruvio-canvas");
        assert_eq!(SectionId::Adn.particles_id(), "particles-adn");
    }

    #[test]
    fn every_slot_belongs_to_its_section() {
        for key in SlotKey::ALL {
            assert!(key.section().slots().contains(&key));
        }
        let total: usize =
            SectionId::ALL.iter().map(|s| s.slots().len()).sum();
        assert_eq!(total, SlotKey::ALL.len());
    }

    #[test]
    fn serde_uses_short_names() {
        let json = serde_json::to_string(&SectionId::BigBang).unwrap();
        assert_eq!(json, "\"bigbang\"");
        let slot = serde_json::to_string(&SlotKey::LeftArm).unwrap();
        assert_eq!(slot, "\"left_arm\"");
    }

    #[test]
    fn per_section_indexing() {
        let mut table = PerSection::from_fn(SectionId::index);
        table[SectionId::Humano] = 42;
        assert_eq!(table[SectionId::Humano], 42);
        assert_eq!(table[SectionId::Newton], 4);
        let collected: Vec<_> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(collected, SectionId::ALL.to_vec());
    }
}
