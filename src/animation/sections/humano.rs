use log::debug;

use crate::animation::interpolation::Ramp;
use crate::animation::{AnimationInput, CompletionLatch, SectionAnimation};
use crate::options::HumanoParams;
use crate::scene::ModelSlot;
use crate::section::{SectionId, SlotKey};

/// Wireframe figure that grows and materializes.
pub struct HumanoAnimation {
    slots: [ModelSlot; 1],
    params: HumanoParams,
    complete: CompletionLatch,
}

impl HumanoAnimation {
    /// Animation with an empty figure slot.
    #[must_use]
    pub fn new(params: HumanoParams) -> Self {
        Self {
            slots: [ModelSlot::new(SlotKey::Human)],
            params,
            complete: CompletionLatch::default(),
        }
    }
}

impl SectionAnimation for HumanoAnimation {
    fn section(&self) -> SectionId {
        SectionId::Humano
    }

    fn slots(&self) -> &[ModelSlot] {
        &self.slots
    }

    fn slot_mut(&mut self, key: SlotKey) -> Option<&mut ModelSlot> {
        self.slots.iter_mut().find(|s| s.key() == key)
    }

    fn animate(&mut self, input: &AnimationInput) {
        let Some(figure) = self.slots[0].node_mut() else {
            return;
        };
        let p = input.progress;
        let params = &self.params;
        let scale =
            Ramp::eased(params.initial_scale, params.target_scale, params.easing)
                .at(p);
        let opacity = Ramp::eased(
            params.initial_opacity,
            params.target_opacity,
            params.easing,
        )
        .at(p);
        figure.transform.set_uniform_scale(scale);
        figure.set_transparent_opacity(opacity);

        if self.complete.observe(p >= 1.0) {
            debug!("humano: figure complete, vitruvian next");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SectionOptions;
    use crate::scene::factory;

    #[test]
    fn fades_in_to_target_opacity() {
        let sections = SectionOptions::default();
        let mut anim = HumanoAnimation::new(sections.humano.clone());
        let _ = anim
            .slot_mut(SlotKey::Human)
            .unwrap()
            .install_fallback(factory::fallback(SlotKey::Human, &sections));

        anim.animate(&AnimationInput::new(0.0, 1.0));
        let figure = anim.nodes()[0];
        assert_eq!(figure.first_material().unwrap().opacity, 0.0);
        assert_eq!(figure.transform.position.y, -2.0);

        anim.animate(&AnimationInput::new(1.0, 1.0));
        let figure = anim.nodes()[0];
        assert!((figure.first_material().unwrap().opacity - 0.8).abs() < 1e-6);
        assert!((figure.transform.scale.y - 0.4).abs() < 1e-6);
    }
}
