use log::debug;

use crate::animation::interpolation::{blend_with_previous, FallBounce};
use crate::animation::{AnimationInput, CompletionLatch, SectionAnimation};
use crate::options::NewtonParams;
use crate::scene::ModelSlot;
use crate::section::{SectionId, SlotKey};

/// A growing tree, an apple that falls, bounces and spins, and the hand
/// waiting below.
pub struct NewtonAnimation {
    slots: [ModelSlot; 3],
    params: NewtonParams,
    landed: CompletionLatch,
}

impl NewtonAnimation {
    /// Animation with empty tree, apple and hand slots.
    #[must_use]
    pub fn new(params: NewtonParams) -> Self {
        Self {
            slots: [
                ModelSlot::new(SlotKey::Tree),
                ModelSlot::new(SlotKey::Apple),
                ModelSlot::new(SlotKey::Hand),
            ],
            params,
            landed: CompletionLatch::default(),
        }
    }

    /// The apple's height curve.
    #[must_use]
    pub fn fall(&self) -> FallBounce {
        FallBounce {
            start_y: self.params.apple_start_y,
            rest_y: self.params.apple_rest_y,
            threshold: self.params.bounce_threshold,
            bounces: self.params.bounce_count,
        }
    }
}

impl SectionAnimation for NewtonAnimation {
    fn section(&self) -> SectionId {
        SectionId::Newton
    }

    fn slots(&self) -> &[ModelSlot] {
        &self.slots
    }

    fn slot_mut(&mut self, key: SlotKey) -> Option<&mut ModelSlot> {
        self.slots.iter_mut().find(|s| s.key() == key)
    }

    fn animate(&mut self, input: &AnimationInput) {
        if !self.is_ready() {
            return;
        }
        let p = input.progress;
        let fall = self.fall();
        let opacity = blend_with_previous(input.previous_progress, p);
        let params = &self.params;
        let [tree, apple, hand] = &mut self.slots;

        if let Some(tree) = tree.node_mut() {
            tree.transform.set_uniform_scale(
                params.tree_initial_scale + params.tree_scale_gain * p,
            );
            tree.set_opacity(opacity);
        }

        let mut apple_y = fall.start_y;
        if let Some(apple) = apple.node_mut() {
            apple_y = fall.height(p);
            apple.transform.position.y = apple_y;
            apple.transform.rotation.x +=
                params.apple_spin_x * input.speed_factor * p;
            apple.transform.rotation.z +=
                params.apple_spin_z * input.speed_factor * p;
            apple.set_opacity(opacity);
        }

        if let Some(hand) = hand.node_mut() {
            hand.set_opacity(opacity);
        }

        let at_rest = apple_y <= params.apple_rest_y + 1e-4;
        if self.landed.observe(p >= 1.0 && at_rest) {
            debug!("newton: apple landed, sequence complete");
        }
    }
}
