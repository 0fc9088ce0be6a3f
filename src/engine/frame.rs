//! The per-frame body of the render loop.

use log::{debug, error, trace, warn};

use super::StoryEngine;
use crate::animation::AnimationInput;
use crate::assets::LoadEvent;
use crate::render::SceneRenderer;
use crate::scene::factory;
use crate::section::SectionId;
use crate::ui::UiSync;

/// What one frame did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Sections animated and drawn, in narrative order.
    pub rendered: Vec<SectionId>,
    /// Available sections skipped because a required model is missing.
    pub skipped: Vec<SectionId>,
}

impl<R: SceneRenderer, U: UiSync> StoryEngine<R, U> {
    /// Run one frame, timing it with the engine's clock.
    pub fn frame(&mut self) -> FrameReport {
        let dt = self.clock.tick();
        self.frame_with_delta(dt)
    }

    /// Run one frame that advances mixers by `dt` seconds.
    ///
    /// Applies any finished model loads, advances the clip mixers, then
    /// animates and draws every section whose models are all present, each
    /// with its own stored progress. Sections without a scene are ignored;
    /// sections missing a model are skipped for this frame.
    pub fn frame_with_delta(&mut self, dt: f32) -> FrameReport {
        self.apply_finished_loads();

        for mixer in &mut self.mixers {
            mixer.update(dt);
        }

        let speed_factor = self.options.progress.speed_factor;
        let mut report = FrameReport::default();
        for (section, entry) in self.registry.iter_mut() {
            let Some(entry) = entry else { continue };
            if !entry.animation.is_ready() {
                debug!("{section}: models not ready, skipping frame");
                report.skipped.push(section);
                continue;
            }
            let input = AnimationInput {
                progress: self.state.progress(section),
                previous_progress: self.state.previous_progress(section),
                speed_factor,
            };
            entry.animation.animate(&input);
            let nodes = entry.animation.nodes();
            self.renderer.render(&entry.context, &nodes);
            report.rendered.push(section);
        }
        trace!("frame: {report:?}");
        report
    }

    /// Install every model that finished loading since the last frame.
    fn apply_finished_loads(&mut self) {
        let events = self.loads.try_drain();
        if events.is_empty() {
            return;
        }
        for LoadEvent { request, result } in events {
            if self.pending.remove(&request.id).is_none() {
                warn!("ignoring unexpected load answer for {}", request.path);
                continue;
            }
            let key = request.slot;
            self.tracker.record(result.is_ok());
            let sections = &self.options.sections;
            let Some(slot) = self.registry.slot_mut(key) else {
                continue;
            };
            match result {
                Ok(node) => {
                    debug!("{key}: loaded {}", request.path);
                    slot.install_loaded(factory::dress_loaded(
                        key, node, sections,
                    ));
                }
                Err(e) => {
                    error!("{key}: failed to load {}: {e}", request.path);
                    if slot.install_fallback(factory::fallback(key, sections)) {
                        debug!("{key}: using procedural model");
                    }
                }
            }
        }
        self.ui.set_loading_progress(self.tracker.percent());
        if self.tracker.take_completion() {
            self.ui.hide_loading();
        }
    }
}
