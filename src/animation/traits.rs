//! Core trait for section animations.

use crate::scene::{ModelSlot, Node};
use crate::section::{SectionId, SlotKey};

/// Everything a section animation may read besides its own graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationInput {
    /// This section's stored progress in `[0, 1]`.
    pub progress: f32,
    /// The previous section's stored progress (0 for the first section).
    pub previous_progress: f32,
    /// Global multiplier applied to per-frame rotation increments.
    pub speed_factor: f32,
}

impl AnimationInput {
    /// Input with the default speed factor of 1.
    #[must_use]
    pub fn new(progress: f32, previous_progress: f32) -> Self {
        Self {
            progress,
            previous_progress,
            speed_factor: 1.0,
        }
    }
}

/// One section's animation: owns the section's model slots and mutates
/// their transforms and materials as a function of progress.
///
/// `animate` runs every frame, not only when progress changes, so
/// rotations keep accumulating while the page is still. Rotation
/// increments are per call and therefore depend on the frame rate.
pub trait SectionAnimation: Send {
    /// Section this animation drives.
    fn section(&self) -> SectionId;

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        self.section().name()
    }

    /// Model slots owned by the section.
    fn slots(&self) -> &[ModelSlot];

    /// Mutable access to one of the section's slots.
    fn slot_mut(&mut self, key: SlotKey) -> Option<&mut ModelSlot>;

    /// Whether every slot holds something drawable. Until then
    /// [`animate`](Self::animate) is a no-op.
    fn is_ready(&self) -> bool {
        self.slots().iter().all(ModelSlot::is_ready)
    }

    /// Apply the pose for `input`. Does nothing while not ready.
    fn animate(&mut self, input: &AnimationInput);

    /// Root nodes to draw, in draw order.
    fn nodes(&self) -> Vec<&Node> {
        self.slots().iter().filter_map(ModelSlot::node).collect()
    }
}

/// Type alias for an owned section animation.
pub type BoxedAnimation = Box<dyn SectionAnimation>;

/// Box any [`SectionAnimation`] implementation.
pub fn boxed<A: SectionAnimation + 'static>(animation: A) -> BoxedAnimation {
    Box::new(animation)
}

/// Fires once each time a completion condition becomes true.
///
/// Completion is observational only: sections never advance on their own,
/// the scroll position alone decides which section is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionLatch {
    armed: bool,
}

impl Default for CompletionLatch {
    fn default() -> Self {
        Self { armed: true }
    }
}

impl CompletionLatch {
    /// Feed the current condition. Returns `true` on the rising edge only;
    /// the latch re-arms once the condition clears.
    pub fn observe(&mut self, complete: bool) -> bool {
        if complete {
            std::mem::replace(&mut self.armed, false)
        } else {
            self.armed = true;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_per_rising_edge() {
        let mut latch = CompletionLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
    }
}
