use super::Node;
use crate::section::SlotKey;

/// What currently occupies a model slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotState {
    /// Nothing yet: the load is pending and no stand-in was installed.
    Empty,
    /// Procedural stand-in.
    Fallback(Node),
    /// The real model.
    Loaded(Node),
}

/// One model position in a section's display graph.
///
/// A slot only moves forward: `Empty → Fallback → Loaded` or
/// `Empty → Loaded`. A loaded model always wins, and a fallback never
/// replaces anything.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSlot {
    key: SlotKey,
    state: SlotState,
}

impl ModelSlot {
    /// Empty slot.
    #[must_use]
    pub fn new(key: SlotKey) -> Self {
        Self {
            key,
            state: SlotState::Empty,
        }
    }

    /// Which slot this is.
    #[must_use]
    pub fn key(&self) -> SlotKey {
        self.key
    }

    /// Current occupant.
    #[must_use]
    pub fn state(&self) -> &SlotState {
        &self.state
    }

    /// Install a procedural stand-in if the slot is still empty.
    ///
    /// Returns `false` (and drops `node`) when the slot already holds
    /// something.
    pub fn install_fallback(&mut self, node: Node) -> bool {
        if matches!(self.state, SlotState::Empty) {
            self.state = SlotState::Fallback(node);
            true
        } else {
            false
        }
    }

    /// Install the loaded model, replacing whatever was there.
    ///
    /// The model takes over the stand-in's transform, so rotation
    /// accumulated while the stand-in was shown carries over.
    pub fn install_loaded(&mut self, mut node: Node) {
        if let SlotState::Fallback(previous) | SlotState::Loaded(previous) =
            &self.state
        {
            node.transform = previous.transform;
        }
        self.state = SlotState::Loaded(node);
    }

    /// The occupant, if any.
    #[must_use]
    pub fn node(&self) -> Option<&Node> {
        match &self.state {
            SlotState::Empty => None,
            SlotState::Fallback(node) | SlotState::Loaded(node) => Some(node),
        }
    }

    /// The occupant, mutably.
    pub fn node_mut(&mut self) -> Option<&mut Node> {
        match &mut self.state {
            SlotState::Empty => None,
            SlotState::Fallback(node) | SlotState::Loaded(node) => Some(node),
        }
    }

    /// Whether something can be drawn.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !matches!(self.state, SlotState::Empty)
    }

    /// Whether the real model is installed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, SlotState::Loaded(_))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{Geometry, Material};

    fn node(name: &str) -> Node {
        Node::mesh(name, Geometry::cuboid(1.0, 1.0, 1.0), Material::default())
    }

    #[test]
    fn fallback_only_fills_empty_slot() {
        let mut slot = ModelSlot::new(SlotKey::Apple);
        assert!(!slot.is_ready());
        assert!(slot.install_fallback(node("stand-in")));
        assert!(slot.is_ready());
        assert!(!slot.install_fallback(node("second")));
        assert_eq!(slot.node().unwrap().name, "stand-in");
    }

    #[test]
    fn loaded_model_wins_over_fallback() {
        let mut slot = ModelSlot::new(SlotKey::Dna);
        assert!(slot.install_fallback(node("helix")));
        slot.node_mut().unwrap().transform.rotation.y = 1.25;
        slot.install_loaded(node("DNA.fbx").at(Vec3::new(9.0, 9.0, 9.0)));
        assert!(slot.is_loaded());
        let loaded = slot.node().unwrap();
        assert_eq!(loaded.name, "DNA.fbx");
        assert_eq!(loaded.transform.rotation.y, 1.25);
        assert_eq!(loaded.transform.position, Vec3::ZERO);
    }

    #[test]
    fn late_fallback_never_replaces_loaded_model() {
        let mut slot = ModelSlot::new(SlotKey::Hand);
        slot.install_loaded(node("hand.obj"));
        assert!(!slot.install_fallback(node("box")));
        assert!(slot.is_loaded());
        assert_eq!(slot.node().unwrap().name, "hand.obj");
    }
}
