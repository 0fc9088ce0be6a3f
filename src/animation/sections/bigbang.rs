use log::debug;

use crate::animation::interpolation::{lerp_f32, Ramp};
use crate::animation::{AnimationInput, CompletionLatch, SectionAnimation};
use crate::options::BigBangParams;
use crate::scene::ModelSlot;
use crate::section::{SectionId, SlotKey};

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// Two arms sliding toward each other until their fingertips almost touch,
/// growing at double speed and fading out as the section completes.
pub struct BigBangAnimation {
    slots: [ModelSlot; 2],
    params: BigBangParams,
    touched: CompletionLatch,
}

impl BigBangAnimation {
    /// Animation with empty arm slots.
    #[must_use]
    pub fn new(params: BigBangParams) -> Self {
        Self {
            slots: [
                ModelSlot::new(SlotKey::LeftArm),
                ModelSlot::new(SlotKey::RightArm),
            ],
            params,
            touched: CompletionLatch::default(),
        }
    }

    fn end_x(&self) -> f32 {
        self.params.touch_distance * 0.5
    }
}

impl SectionAnimation for BigBangAnimation {
    fn section(&self) -> SectionId {
        SectionId::BigBang
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
        let half_gap = self.end_x();
        let scale = Ramp::eased(
            self.params.initial_scale,
            self.params.target_scale,
            self.params.scale_easing,
        )
        .at(p);
        let opacity = self.params.opacity * (1.0 - p).max(0.0);
        let targets = [
            (LEFT, self.params.initial_left_x, -half_gap),
            (RIGHT, self.params.initial_right_x, half_gap),
        ];

        let mut left_x = self.params.initial_left_x;
        for (index, from, to) in targets {
            let Some(node) = self.slots[index].node_mut() else {
                continue;
            };
            let x = lerp_f32(from, to, p.clamp(0.0, 1.0));
            node.transform.position.x = x;
            node.transform.set_uniform_scale(scale);
            node.set_opacity(opacity);
            if index == LEFT {
                left_x = x;
            }
        }

        let touching = left_x.abs() <= self.params.touch_distance;
        if self.touched.observe(p >= 1.0 && touching) {
            debug!("{}: arms touched", self.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SectionOptions;
    use crate::scene::factory;

    fn ready() -> BigBangAnimation {
        let sections = SectionOptions::default();
        let mut anim = BigBangAnimation::new(sections.bigbang.clone());
        for key in [SlotKey::LeftArm, SlotKey::RightArm] {
            let _ = anim
                .slot_mut(key)
                .unwrap()
                .install_fallback(factory::fallback(key, &sections));
        }
        anim
    }

    fn arm_x(anim: &BigBangAnimation, index: usize) -> f32 {
        anim.slots[index].node().unwrap().transform.position.x
    }

    #[test]
    fn not_ready_until_both_arms_exist() {
        let sections = SectionOptions::default();
        let mut anim = BigBangAnimation::new(sections.bigbang.clone());
        let _ = anim
            .slot_mut(SlotKey::LeftArm)
            .unwrap()
            .install_fallback(factory::fallback(SlotKey::LeftArm, &sections));
        assert!(!anim.is_ready());
        anim.animate(&AnimationInput::new(0.5, 0.0));
        assert_eq!(arm_x(&anim, LEFT), -3.0);
    }

    #[test]
    fn arms_start_apart() {
        let mut anim = ready();
        anim.animate(&AnimationInput::new(0.0, 0.0));
        assert_eq!(arm_x(&anim, LEFT), -3.0);
        assert_eq!(arm_x(&anim, RIGHT), 3.0);
        let scale = anim.slots[LEFT].node().unwrap().transform.scale.x;
        assert!((scale - 0.1).abs() < 1e-6);
    }

    #[test]
    fn arms_meet_within_touch_distance() {
        let mut anim = ready();
        anim.animate(&AnimationInput::new(1.0, 0.0));
        assert!((arm_x(&anim, LEFT) - -0.25).abs() < 1e-6);
        assert!((arm_x(&anim, RIGHT) - 0.25).abs() < 1e-6);
        let node = anim.slots[RIGHT].node().unwrap();
        assert_eq!(node.first_material().unwrap().opacity, 0.0);
    }

    #[test]
    fn scale_saturates_at_half_progress() {
        let mut anim = ready();
        anim.animate(&AnimationInput::new(0.5, 0.0));
        let node = anim.slots[LEFT].node().unwrap();
        assert!((node.transform.scale.x - 0.4).abs() < 1e-6);
        assert!((node.first_material().unwrap().opacity - 0.5).abs() < 1e-6);
    }
}
