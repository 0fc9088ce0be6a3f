//! Engine construction: scenes, placeholders, loads and particle layers.

use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use super::StoryEngine;
use crate::assets::{LoadQueue, LoadingTracker, ModelLoader};
use crate::layout::PageLayout;
use crate::options::{Options, PlaceholderPolicy};
use crate::particles::{ParticleConfig, BACKGROUND_ID};
use crate::progress::{AnimationSequenceState, ProgressMapper, SectionBands};
use crate::render::SceneRenderer;
use crate::scene::{factory, SceneRegistry};
use crate::section::{SectionId, SlotKey};
use crate::ui::UiSync;
use crate::util::frame_timing::FrameClock;

impl<R: SceneRenderer, U: UiSync> StoryEngine<R, U> {
    /// Build the engine for the page described by `layout`.
    ///
    /// Creates a scene for every section whose container exists, starts
    /// the particle layers, asks `loader` for every model and maps the
    /// current scroll position. Without a loader every slot gets its
    /// procedural stand-in and loading completes at once.
    pub fn new(
        layout: &dyn PageLayout,
        options: Options,
        loader: Option<&dyn ModelLoader>,
        renderer: R,
        mut ui: U,
    ) -> Self {
        let registry = SceneRegistry::build(layout, &options);
        info!(
            "story engine: {} of {} sections available",
            registry.len(),
            SectionId::COUNT
        );

        ui.start_particles(BACKGROUND_ID, &ParticleConfig::background());
        for section in SectionId::ALL {
            ui.start_particles(
                &section.particles_id(),
                &ParticleConfig::for_section(section),
            );
        }

        let mut engine = Self {
            mapper: ProgressMapper::new(&options.progress),
            state: AnimationSequenceState::new(),
            registry,
            loads: LoadQueue::new(),
            pending: FxHashMap::default(),
            tracker: LoadingTracker::default(),
            mixers: Vec::new(),
            clock: FrameClock::new(),
            renderer,
            ui,
            options,
        };

        match loader {
            Some(loader) => engine.request_models(loader),
            None => {
                warn!("no model loader available, using procedural models");
                engine.install_all_fallbacks();
                engine.tracker.complete_all_immediately();
            }
        }
        engine.ui.set_loading_progress(engine.tracker.percent());
        if engine.tracker.take_completion() {
            engine.ui.hide_loading();
        }

        engine.refresh_bands(layout);
        engine.ui.set_active_section(SectionId::BigBang);
        engine.ui.set_particle_layer(SectionId::BigBang);
        let _ = engine.on_scroll_or_resize(&layout.scroll_metrics());
        engine
    }

    /// Issue one load per slot of every available section.
    fn request_models(&mut self, loader: &dyn ModelLoader) {
        let immediate =
            self.options.assets.placeholder == PlaceholderPolicy::Immediate;
        let mut requests = Vec::new();
        for key in SlotKey::ALL {
            let Some(slot) = self.registry.slot_mut(key) else {
                continue;
            };
            if immediate {
                let _ = slot
                    .install_fallback(factory::fallback(key, &self.options.sections));
            }
            let path = self.options.assets.path_for(key);
            requests.push(self.loads.next_request(key, path));
        }

        self.tracker = LoadingTracker::new(requests.len());
        debug!("{}: requesting {} models", loader.name(), requests.len());
        for request in &requests {
            let _ = self.pending.insert(request.id, request.clone());
        }
        for request in requests {
            loader.load(request, self.loads.sink());
        }
    }

    /// Put the procedural stand-in into every empty slot.
    fn install_all_fallbacks(&mut self) {
        for key in SlotKey::ALL {
            if let Some(slot) = self.registry.slot_mut(key) {
                let _ = slot
                    .install_fallback(factory::fallback(key, &self.options.sections));
            }
        }
    }

    /// Rebuild the mapper's bands from the page's section offsets.
    pub(super) fn refresh_bands(&mut self, layout: &dyn PageLayout) {
        let metrics = layout.scroll_metrics();
        let bands = SectionBands::from_offsets(
            &layout.section_offsets(),
            metrics.document_height,
        );
        debug!("section bands: {bands:?}");
        self.mapper.set_bands(bands);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::engine;
    use crate::assets::MemoryLoader;
    use crate::layout::StaticLayout;
    use crate::options::{Options, PlaceholderPolicy};
    use crate::scene::SlotState;
    use crate::section::{SectionId, SlotKey};
    use crate::ui::UiEvent;

    #[test]
    fn without_loader_every_slot_has_a_fallback() {
        let layout = StaticLayout::new(1200, 800);
        let eng = engine(&layout, Options::default(), None);
        for key in SlotKey::ALL {
            let anim = &eng.registry().get(key.section()).unwrap().animation;
            let slot = anim.slots().iter().find(|s| s.key() == key).unwrap();
            assert!(matches!(slot.state(), SlotState::Fallback(_)), "{key}");
        }
        assert!(eng.tracker().is_complete());
        assert!(eng.ui().events().contains(&UiEvent::LoadingHidden));
        assert_eq!(eng.pending_loads(), 0);
    }

    #[test]
    fn particle_layers_and_initial_section_are_announced() {
        let layout = StaticLayout::new(1200, 800);
        let eng = engine(&layout, Options::default(), None);
        let started: Vec<_> = eng
            .ui()
            .events()
            .iter()
            .filter_map(|e| match e {
                UiEvent::ParticlesStarted(id) => Some(id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            started,
            vec![
                "particles-bg",
                "particles-bigbang",
                "particles-adn",
                "particles-humano",
                "particles-vitruvio",
                "particles-newton",
            ]
        );
        assert_eq!(eng.ui().active_section(), Some(SectionId::BigBang));
        assert_eq!(eng.ui().section_switches(), 1);
    }

    #[test]
    fn immediate_policy_shows_fallbacks_while_loading() {
        let layout = StaticLayout::new(1200, 800);
        let loader = MemoryLoader::new();
        let eng = engine(&layout, Options::default(), Some(&loader));
        assert_eq!(eng.pending_loads(), 8);
        assert!(!eng.tracker().is_complete());
        let arms = &eng.registry().get(SectionId::BigBang).unwrap().animation;
        assert!(arms.is_ready());
        assert!(!eng.ui().events().contains(&UiEvent::LoadingHidden));
    }

    #[test]
    fn on_failure_policy_leaves_slots_empty() {
        let layout = StaticLayout::new(1200, 800);
        let loader = MemoryLoader::new();
        let mut options = Options::default();
        options.assets.placeholder = PlaceholderPolicy::OnFailure;
        let eng = engine(&layout, options, Some(&loader));
        for entry in eng.registry().iter() {
            assert!(!entry.animation.is_ready());
        }
    }

    #[test]
    fn missing_section_issues_no_loads() {
        let layout = StaticLayout::new(1200, 800).without_container("newton-canvas");
        let loader = MemoryLoader::new();
        let eng = engine(&layout, Options::default(), Some(&loader));
        assert_eq!(eng.pending_loads(), 5);
        assert!(eng.registry().get(SectionId::Newton).is_none());
    }
}
