use log::debug;

use crate::animation::interpolation::{blend_with_previous, Ramp};
use crate::animation::{AnimationInput, CompletionLatch, SectionAnimation};
use crate::options::VitruvioParams;
use crate::scene::{factory, ModelSlot, Node};
use crate::section::{SectionId, SlotKey};

/// Gold figure turning inside a slowly spinning ring.
pub struct VitruvioAnimation {
    slots: [ModelSlot; 1],
    ring: Node,
    params: VitruvioParams,
    complete: CompletionLatch,
}

impl VitruvioAnimation {
    /// Animation with an empty figure slot and a hidden ring.
    #[must_use]
    pub fn new(params: VitruvioParams) -> Self {
        Self {
            slots: [ModelSlot::new(SlotKey::Vitruvian)],
            ring: factory::vitruvian_ring(),
            params,
            complete: CompletionLatch::default(),
        }
    }

    /// The ring framing the figure.
    #[must_use]
    pub fn ring(&self) -> &Node {
        &self.ring
    }
}

impl SectionAnimation for VitruvioAnimation {
    fn section(&self) -> SectionId {
        SectionId::Vitruvio
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
        let scale = Ramp::eased(
            params.initial_scale,
            params.target_scale,
            params.scale_easing,
        )
        .at(p);
        figure.transform.set_uniform_scale(scale);
        figure.transform.rotation.y +=
            params.rotation_speed * input.speed_factor * p;
        figure.set_opacity(blend_with_previous(input.previous_progress, p));

        self.ring.transform.rotation.z +=
            params.ring_rotation_speed * input.speed_factor * p;
        self.ring.set_opacity(params.ring_max_opacity * p);

        if self.complete.observe(p >= 1.0) {
            debug!("vitruvio: figure complete, newton next");
        }
    }

    fn nodes(&self) -> Vec<&Node> {
        self.slots
            .iter()
            .filter_map(ModelSlot::node)
            .chain(std::iter::once(&self.ring))
            .collect()
    }
}
