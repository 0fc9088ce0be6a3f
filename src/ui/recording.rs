use super::UiSync;
use crate::particles::ParticleConfig;
use crate::section::SectionId;

/// One call received by a [`RecordingUi`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// [`UiSync::set_active_section`].
    ActiveSection(SectionId),
    /// [`UiSync::set_page_progress`].
    PageProgress(f64),
    /// [`UiSync::set_navbar_scrolled`].
    NavbarScrolled(bool),
    /// [`UiSync::set_scroll_indicator_hidden`].
    IndicatorHidden(bool),
    /// [`UiSync::set_loading_progress`].
    LoadingProgress(f32),
    /// [`UiSync::hide_loading`].
    LoadingHidden,
    /// [`UiSync::reveal_content`].
    ContentRevealed,
    /// [`UiSync::start_particles`], with the container id.
    ParticlesStarted(String),
    /// [`UiSync::set_particle_layer`].
    ParticleLayer(SectionId),
}

/// UI sink that records every call, for tests and the headless CLI.
#[derive(Debug, Clone, Default)]
pub struct RecordingUi {
    events: Vec<UiEvent>,
}

impl RecordingUi {
    /// Everything received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    /// How many section switches were announced.
    #[must_use]
    pub fn section_switches(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, UiEvent::ActiveSection(_)))
            .count()
    }

    /// Most recently announced active section.
    #[must_use]
    pub fn active_section(&self) -> Option<SectionId> {
        self.events.iter().rev().find_map(|e| match e {
            UiEvent::ActiveSection(s) => Some(*s),
            _ => None,
        })
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl UiSync for RecordingUi {
    fn set_active_section(&mut self, section: SectionId) {
        self.events.push(UiEvent::ActiveSection(section));
    }

    fn set_page_progress(&mut self, percent: f64) {
        self.events.push(UiEvent::PageProgress(percent));
    }

    fn set_navbar_scrolled(&mut self, scrolled: bool) {
        self.events.push(UiEvent::NavbarScrolled(scrolled));
    }

    fn set_scroll_indicator_hidden(&mut self, hidden: bool) {
        self.events.push(UiEvent::IndicatorHidden(hidden));
    }

    fn set_loading_progress(&mut self, percent: f32) {
        self.events.push(UiEvent::LoadingProgress(percent));
    }

    fn hide_loading(&mut self) {
        self.events.push(UiEvent::LoadingHidden);
    }

    fn reveal_content(&mut self) {
        self.events.push(UiEvent::ContentRevealed);
    }

    fn start_particles(&mut self, container_id: &str, _config: &ParticleConfig) {
        self.events
            .push(UiEvent::ParticlesStarted(container_id.to_owned()));
    }

    fn set_particle_layer(&mut self, section: SectionId) {
        self.events.push(UiEvent::ParticleLayer(section));
    }
}
