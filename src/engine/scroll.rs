//! Scroll and resize handling.

use log::{debug, info};

use super::StoryEngine;
use crate::layout::PageLayout;
use crate::progress::{ProgressUpdate, ScrollMetrics};
use crate::render::SceneRenderer;
use crate::ui::{ChromeState, UiSync};

impl<R: SceneRenderer, U: UiSync> StoryEngine<R, U> {
    /// Recompute the active section and its progress from page
    /// measurements, and update the page chrome.
    ///
    /// Only the active section's progress is written. UI highlighting and
    /// the particle layer change only when the active section changes, so
    /// repeating a call with the same metrics has no further effect.
    pub fn on_scroll_or_resize(
        &mut self,
        metrics: &ScrollMetrics,
    ) -> Option<ProgressUpdate> {
        ChromeState::from_metrics(metrics, &self.options.ui).apply(&mut self.ui);
        let y = self.mapper.effective_position(metrics);
        self.seek(y, metrics.viewport_height)
    }

    /// Like [`on_scroll_or_resize`](Self::on_scroll_or_resize), but from an
    /// effective position `y` that already includes the look-ahead, and
    /// without touching the chrome.
    pub fn seek(
        &mut self,
        y: f64,
        viewport_height: f64,
    ) -> Option<ProgressUpdate> {
        let Some(update) =
            self.mapper.update_at(&mut self.state, y, viewport_height)
        else {
            debug!("scroll ignored: no sections registered");
            return None;
        };
        self.ui.reveal_content();
        if let Some(from) = update.switched_from {
            info!("section {from} -> {}", update.active);
            self.ui.set_active_section(update.active);
            self.ui.set_particle_layer(update.active);
        }
        Some(update)
    }

    /// React to a viewport resize: match every camera and target to its
    /// container and re-measure the section bands.
    ///
    /// Stored progress and the active section are left alone; the next
    /// scroll event maps against the new bands. Returns how many scene
    /// contexts were resized.
    pub fn handle_resize(&mut self, layout: &dyn PageLayout) -> usize {
        let resized = self.registry.resize_all(layout);
        debug!("resize: {resized} scene contexts updated");
        for entry in self.registry.iter() {
            self.renderer.resize(&entry.context);
        }
        self.refresh_bands(layout);
        resized
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::engine;
    use crate::layout::{PageLayout, StaticLayout};
    use crate::options::Options;
    use crate::section::SectionId;
    use crate::ui::UiEvent;

    #[test]
    fn repeated_scroll_is_idempotent() {
        let mut layout = StaticLayout::new(1000, 800);
        let mut eng = engine(&layout, Options::default(), None);
        layout.scroll_to(1000.0);
        let first = eng.on_scroll_or_resize(&layout.scroll_metrics()).unwrap();
        assert_eq!(first.switched_from, Some(SectionId::BigBang));
        let state = eng.state().clone();
        let switches = eng.ui().section_switches();

        let again = eng.on_scroll_or_resize(&layout.scroll_metrics()).unwrap();
        assert!(!again.switched());
        assert_eq!(eng.state(), &state);
        assert_eq!(eng.ui().section_switches(), switches);
        let layers = eng
            .ui()
            .events()
            .iter()
            .filter(|e| matches!(e, UiEvent::ParticleLayer(_)))
            .count();
        assert_eq!(layers, 2);
    }

    #[test]
    fn switch_notifies_ui_once() {
        let mut layout = StaticLayout::new(1000, 800);
        let mut eng = engine(&layout, Options::default(), None);
        eng.ui_mut().clear();
        layout.scroll_to(1500.0);
        let _ = eng.on_scroll_or_resize(&layout.scroll_metrics());
        assert_eq!(eng.ui().active_section(), Some(SectionId::Humano));
        assert!(eng
            .ui()
            .events()
            .contains(&UiEvent::ParticleLayer(SectionId::Humano)));
        assert!(eng.ui().events().contains(&UiEvent::NavbarScrolled(true)));
        assert!(eng.ui().events().contains(&UiEvent::ContentRevealed));
    }

    #[test]
    fn resize_updates_cameras_and_targets() {
        let mut layout = StaticLayout::new(1200, 600);
        let mut eng = engine(&layout, Options::default(), None);

        layout.resize(600, 600);
        assert_eq!(eng.handle_resize(&layout), 5);
        for entry in eng.registry().iter() {
            assert_eq!(entry.context.camera.aspect, 1.0);
        }
        assert_eq!(eng.renderer().resizes().len(), 5);
    }

    #[test]
    fn resize_keeps_stored_progress_mid_page() {
        let mut layout = StaticLayout::new(1000, 800);
        let mut eng = engine(&layout, Options::default(), None);
        layout.scroll_to(700.0);
        let update = eng.on_scroll_or_resize(&layout.scroll_metrics()).unwrap();
        assert_eq!(update.active, SectionId::Adn);
        let state = eng.state().clone();
        let switches = eng.ui().section_switches();

        // A shorter viewport would map the same offset to a different
        // progress; resizing must not re-map.
        layout.resize(1000, 600);
        let _ = eng.handle_resize(&layout);
        assert_eq!(eng.state(), &state);
        assert_eq!(eng.state().active(), SectionId::Adn);
        assert!((eng.state().progress(SectionId::Adn) - 0.375).abs() < 1e-6);
        assert_eq!(eng.ui().section_switches(), switches);
        for entry in eng.registry().iter() {
            assert!((entry.context.camera.aspect - 1000.0 / 600.0).abs() < 1e-6);
        }
    }

    #[test]
    fn seek_uses_effective_position() {
        let layout = StaticLayout::new(1000, 800);
        let mut eng = engine(&layout, Options::default(), None);
        let update = eng.seek(1200.0, 800.0).unwrap();
        assert_eq!(update.active, SectionId::Adn);
        assert!((update.progress - 0.5).abs() < 1e-6);
        // Inactive sections keep their last value.
        assert!((eng.state().progress(SectionId::BigBang) - 0.5).abs() < 1e-6);
    }
}
