use log::debug;

use crate::animation::interpolation::{blend_with_previous, Ramp};
use crate::animation::{AnimationInput, CompletionLatch, SectionAnimation};
use crate::options::AdnParams;
use crate::scene::ModelSlot;
use crate::section::{SectionId, SlotKey};

/// Helix that grows, spins faster as progress rises and fades in from the
/// arms' trailing edge.
pub struct AdnAnimation {
    slots: [ModelSlot; 1],
    params: AdnParams,
    complete: CompletionLatch,
}

impl AdnAnimation {
    /// Animation with an empty helix slot.
    #[must_use]
    pub fn new(params: AdnParams) -> Self {
        Self {
            slots: [ModelSlot::new(SlotKey::Dna)],
            params,
            complete: CompletionLatch::default(),
        }
    }
}

impl SectionAnimation for AdnAnimation {
    fn section(&self) -> SectionId {
        SectionId::Adn
    }

    fn slots(&self) -> &[ModelSlot] {
        &self.slots
    }

    fn slot_mut(&mut self, key: SlotKey) -> Option<&mut ModelSlot> {
        self.slots.iter_mut().find(|s| s.key() == key)
    }

    fn animate(&mut self, input: &AnimationInput) {
        let Some(helix) = self.slots[0].node_mut() else {
            return;
        };
        let p = input.progress;
        let scale = Ramp::eased(
            self.params.initial_scale,
            self.params.target_scale,
            self.params.scale_easing,
        )
        .at(p);
        helix.transform.set_uniform_scale(scale);
        helix.transform.rotation.y +=
            self.params.rotation_speed * input.speed_factor * p;
        helix.set_opacity(blend_with_previous(input.previous_progress, p));

        if self.complete.observe(p >= 1.0) {
            debug!("adn: helix complete, figure next");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SectionOptions;
    use crate::scene::factory;

    fn ready() -> AdnAnimation {
        let sections = SectionOptions::default();
        let mut anim = AdnAnimation::new(sections.adn.clone());
        let _ = anim
            .slot_mut(SlotKey::Dna)
            .unwrap()
            .install_fallback(factory::fallback(SlotKey::Dna, &sections));
        anim
    }

    #[test]
    fn empty_slot_is_a_no_op() {
        let mut anim = AdnAnimation::new(AdnParams::default());
        anim.animate(&AnimationInput::new(1.0, 1.0));
        assert!(anim.nodes().is_empty());
    }

    #[test]
    fn rotation_accumulates_per_frame() {
        let mut anim = ready();
        let input = AnimationInput {
            progress: 0.5,
            previous_progress: 1.0,
            speed_factor: 1.5,
        };
        anim.animate(&input);
        anim.animate(&input);
        let helix = anim.slots[0].node().unwrap();
        let expected = 2.0 * 0.008 * 1.5 * 0.5;
        assert!((helix.transform.rotation.y - expected).abs() < 1e-6);
    }

    #[test]
    fn still_page_does_not_rotate_at_zero_progress() {
        let mut anim = ready();
        for _ in 0..10 {
            anim.animate(&AnimationInput::new(0.0, 0.3));
        }
        let helix = anim.slots[0].node().unwrap();
        assert_eq!(helix.transform.rotation.y, 0.0);
        assert!((helix.first_material().unwrap().opacity - 0.3).abs() < 1e-6);
    }

    #[test]
    fn opacity_blends_with_previous_section() {
        let mut anim = ready();
        anim.animate(&AnimationInput::new(0.25, 1.0));
        let helix = anim.slots[0].node().unwrap();
        assert_eq!(helix.first_material().unwrap().opacity, 1.0);
        assert!((helix.transform.scale.x - 0.175).abs() < 1e-6);
    }
}
