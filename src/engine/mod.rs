//! The story engine: scroll handling plus the per-frame render body.
//!
//! [`StoryEngine`] owns everything with a lifetime equal to the page's:
//! the progress mapper and its [`AnimationSequenceState`], the scene
//! registry, the load queue and the two output ports (renderer and UI).
//! The host drives it with three calls:
//!
//! - [`on_scroll_or_resize`](StoryEngine::on_scroll_or_resize) from the
//!   scroll listener,
//! - [`handle_resize`](StoryEngine::handle_resize) from the resize listener,
//! - [`frame`](StoryEngine::frame) once per animation frame.
//!
//! Scroll handling only writes progress; frames only read it. The two are
//! never interleaved because both run on the page's single thread.

mod construction;
mod frame;
mod scroll;

use rustc_hash::FxHashMap;

pub use frame::FrameReport;

use crate::assets::{LoadQueue, LoadRequest, LoadingTracker};
use crate::options::Options;
use crate::progress::{AnimationSequenceState, ProgressMapper};
use crate::render::{ClipMixer, SceneRenderer};
use crate::scene::SceneRegistry;
use crate::ui::UiSync;
use crate::util::frame_timing::FrameClock;

/// Scroll-driven narrative engine.
///
/// Generic over the render port `R` and the UI port `U` so the browser
/// front end, the headless CLI and tests plug in their own.
pub struct StoryEngine<R: SceneRenderer, U: UiSync> {
    /// Runtime options the engine was built with.
    options: Options,
    /// Scroll offset → active section and local progress.
    mapper: ProgressMapper,
    /// Per-section progress and the active section.
    state: AnimationSequenceState,
    /// Per-section contexts and animations.
    registry: SceneRegistry,
    /// Model loads answered but not yet applied.
    loads: LoadQueue,
    /// Requests issued and not yet answered, by id.
    pending: FxHashMap<u64, LoadRequest>,
    /// Loading-bar bookkeeping.
    tracker: LoadingTracker,
    /// Clip mixers advanced before animation.
    mixers: Vec<Box<dyn ClipMixer>>,
    /// Delta and FPS for [`frame`](Self::frame).
    clock: FrameClock,
    /// Render port.
    renderer: R,
    /// UI port.
    ui: U,
}

// =============================================================================
// Accessors
// =============================================================================

impl<R: SceneRenderer, U: UiSync> StoryEngine<R, U> {
    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current progress state.
    #[must_use]
    pub fn state(&self) -> &AnimationSequenceState {
        &self.state
    }

    /// The progress mapper (for its band layout).
    #[must_use]
    pub fn mapper(&self) -> &ProgressMapper {
        &self.mapper
    }

    /// Scene registry.
    #[must_use]
    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// Loading bookkeeping.
    #[must_use]
    pub fn tracker(&self) -> &LoadingTracker {
        &self.tracker
    }

    /// Number of model loads still in flight.
    #[must_use]
    pub fn pending_loads(&self) -> usize {
        self.pending.len()
    }

    /// Render port.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render port, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// UI port.
    #[must_use]
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// UI port, mutably.
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Register a clip mixer advanced once per frame.
    ///
    /// This is the host's hook for clip playback (e.g. a skeletal mixer
    /// owned by the page's 3D library). Mixers run in registration order,
    /// before any section animates.
    pub fn add_mixer(&mut self, mixer: Box<dyn ClipMixer>) {
        self.mixers.push(mixer);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::StoryEngine;
    use crate::assets::ModelLoader;
    use crate::layout::StaticLayout;
    use crate::options::Options;
    use crate::render::{ClipMixer, RecordingRenderer};
    use crate::ui::RecordingUi;

    pub(crate) type TestEngine = StoryEngine<RecordingRenderer, RecordingUi>;

    pub(crate) fn engine(
        layout: &StaticLayout,
        options: Options,
        loader: Option<&dyn ModelLoader>,
    ) -> TestEngine {
        StoryEngine::new(
            layout,
            options,
            loader,
            RecordingRenderer::new(),
            RecordingUi::default(),
        )
    }

    /// Clip that loops over a fixed duration.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub(crate) struct LoopingClip {
        duration: f32,
        time: f32,
    }

    impl LoopingClip {
        pub(crate) fn new(duration: f32) -> Self {
            Self {
                duration: duration.max(0.0),
                time: 0.0,
            }
        }

        pub(crate) fn time(&self) -> f32 {
            self.time
        }
    }

    impl ClipMixer for LoopingClip {
        fn update(&mut self, dt: f32) {
            if self.duration <= 0.0 || !dt.is_finite() {
                return;
            }
            self.time = (self.time + dt.max(0.0)).rem_euclid(self.duration);
        }
    }
}
