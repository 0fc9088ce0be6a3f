//! Ancillary UI sync: page chrome that follows the scroll position.
//!
//! The engine decides *what* the chrome should show (active nav link and
//! dot, progress-bar fill, navbar style, scroll hint, loading overlay,
//! emphasized particle layer); a [`UiSync`] implementation decides *how*.
//! [`ChromeState`] holds the pure scroll-derived part so it can be tested
//! without a page.

mod recording;

pub use recording::{RecordingUi, UiEvent};

use crate::options::UiOptions;
use crate::particles::ParticleConfig;
use crate::progress::ScrollMetrics;
use crate::section::SectionId;

/// Sink for everything outside the 3D canvases.
pub trait UiSync {
    /// Highlight the nav link and dot of `section`, clearing the others.
    fn set_active_section(&mut self, section: SectionId);

    /// Fill the page progress bar to `percent` (0–100).
    fn set_page_progress(&mut self, percent: f64);

    /// Toggle the navbar's compact "scrolled" style.
    fn set_navbar_scrolled(&mut self, scrolled: bool);

    /// Show or hide the "scroll down" hint.
    fn set_scroll_indicator_hidden(&mut self, hidden: bool);

    /// Fill the loading bar to `percent` (0–100).
    fn set_loading_progress(&mut self, percent: f32);

    /// Fade out the loading overlay.
    fn hide_loading(&mut self);

    /// Reveal narrative text blocks.
    fn reveal_content(&mut self);

    /// Start a particle layer in the container with DOM id `container_id`.
    fn start_particles(&mut self, container_id: &str, config: &ParticleConfig);

    /// Emphasize the particle layer of `section`.
    fn set_particle_layer(&mut self, section: SectionId);
}

/// Scroll-derived chrome values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeState {
    /// Progress-bar fill, 0–100.
    pub page_progress: f64,
    /// Navbar in its compact style.
    pub navbar_scrolled: bool,
    /// Scroll hint hidden.
    pub indicator_hidden: bool,
}

impl ChromeState {
    /// Compute the chrome for the given page measurements.
    #[must_use]
    pub fn from_metrics(metrics: &ScrollMetrics, options: &UiOptions) -> Self {
        let y = finite_or_zero(metrics.scroll_y);
        let vh = finite_or_zero(metrics.viewport_height);
        let doc = finite_or_zero(metrics.document_height);

        let scrollable = doc - vh;
        let page_progress = if scrollable > 0.0 {
            (y / scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        let margin = options.indicator_margin;
        Self {
            page_progress,
            navbar_scrolled: y > options.navbar_scrolled_threshold,
            indicator_hidden: y > margin || y + vh >= doc - margin,
        }
    }

    /// Push every value to `ui`.
    pub fn apply(&self, ui: &mut dyn UiSync) {
        ui.set_page_progress(self.page_progress);
        ui.set_navbar_scrolled(self.navbar_scrolled);
        ui.set_scroll_indicator_hidden(self.indicator_hidden);
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// UI sink that ignores everything (headless runs without a page).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullUi;

impl UiSync for NullUi {
    fn set_active_section(&mut self, _section: SectionId) {}
    fn set_page_progress(&mut self, _percent: f64) {}
    fn set_navbar_scrolled(&mut self, _scrolled: bool) {}
    fn set_scroll_indicator_hidden(&mut self, _hidden: bool) {}
    fn set_loading_progress(&mut self, _percent: f32) {}
    fn hide_loading(&mut self) {}
    fn reveal_content(&mut self) {}
    fn start_particles(&mut self, _container_id: &str, _config: &ParticleConfig) {
    }
    fn set_particle_layer(&mut self, _section: SectionId) {}
}
