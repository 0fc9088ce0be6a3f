//! Scroll-to-progress mapping.
//!
//! The [`ProgressMapper`] turns one scroll position into the active section
//! and that section's local progress, and writes both into the
//! [`AnimationSequenceState`]. It is the state's only writer.
//!
//! # Algorithm
//!
//! 1. Effective position `y = scrollY + viewportHeight * look_ahead`.
//! 2. Active index: the largest `i` with `y >= start(i)`.
//! 3. Local progress: `clamp((y - start) / d, 0, 1)` where `d` is the
//!    viewport height ([`ProgressNormalization::Viewport`]) or the active
//!    band's width ([`ProgressNormalization::SectionBand`]).
//! 4. Only the active section's progress is written. The others keep
//!    whatever they last held.

mod bands;
mod state;

pub use bands::SectionBands;
pub use state::AnimationSequenceState;

use crate::options::{ProgressNormalization, ProgressOptions};
use crate::section::SectionId;

/// Raw page measurements, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the page.
    pub scroll_y: f64,
    /// Viewport (window inner) height.
    pub viewport_height: f64,
    /// Full scrollable document height.
    pub document_height: f64,
}

/// Result of one mapping pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    /// Section active after the pass.
    pub active: SectionId,
    /// Local progress written for the active section.
    pub progress: f32,
    /// Previously active section, when the pass switched sections.
    pub switched_from: Option<SectionId>,
}

impl ProgressUpdate {
    /// Whether the active section changed in this pass.
    #[must_use]
    pub fn switched(&self) -> bool {
        self.switched_from.is_some()
    }
}

/// Converts scroll offsets into section progress.
#[derive(Debug, Clone)]
pub struct ProgressMapper {
    bands: SectionBands,
    look_ahead: f64,
    normalization: ProgressNormalization,
}

impl ProgressMapper {
    /// Mapper with no bands yet; every update is a no-op until
    /// [`set_bands`](Self::set_bands).
    #[must_use]
    pub fn new(options: &ProgressOptions) -> Self {
        Self {
            bands: SectionBands::default(),
            look_ahead: options.look_ahead,
            normalization: options.normalization,
        }
    }

    /// Replace the band layout (after a resize reflowed the page).
    pub fn set_bands(&mut self, bands: SectionBands) {
        self.bands = bands;
    }

    /// Current band layout.
    #[must_use]
    pub fn bands(&self) -> &SectionBands {
        &self.bands
    }

    /// Normalization strategy in use.
    #[must_use]
    pub fn normalization(&self) -> ProgressNormalization {
        self.normalization
    }

    /// `scrollY` biased by the look-ahead fraction of the viewport.
    #[must_use]
    pub fn effective_position(&self, metrics: &ScrollMetrics) -> f64 {
        let y = finite_or_zero(metrics.scroll_y);
        let vh = finite_or_zero(metrics.viewport_height).max(0.0);
        y + vh * self.look_ahead
    }

    /// Recompute the state from page measurements.
    ///
    /// Returns `None` when no section is registered.
    pub fn update(
        &self,
        state: &mut AnimationSequenceState,
        metrics: &ScrollMetrics,
    ) -> Option<ProgressUpdate> {
        let y = self.effective_position(metrics);
        self.update_at(state, y, metrics.viewport_height)
    }

    /// Recompute the state from an already-biased effective position `y`.
    pub fn update_at(
        &self,
        state: &mut AnimationSequenceState,
        y: f64,
        viewport_height: f64,
    ) -> Option<ProgressUpdate> {
        if self.bands.is_empty() {
            return None;
        }
        let index = self.bands.index_at(y);
        let active = SectionId::from_index(index)?;
        let progress = self.local_progress(index, y, viewport_height);

        let previous = state.active();
        let switched_from = (previous != active).then_some(previous);
        if switched_from.is_some() {
            state.set_active(active);
        }
        state.set_progress(active, progress);

        Some(ProgressUpdate {
            active,
            progress,
            switched_from,
        })
    }

    fn local_progress(&self, index: usize, y: f64, viewport_height: f64) -> f32 {
        let Some((start, end)) = self.bands.band(index) else {
            return 0.0;
        };
        let span = match self.normalization {
            ProgressNormalization::Viewport => finite_or_zero(viewport_height),
            ProgressNormalization::SectionBand => end - start,
        };
        let raw = if span > 0.0 {
            (y - start) / span
        } else if y >= start {
            1.0
        } else {
            0.0
        };
        if raw.is_nan() {
            0.0
        } else {
            raw.clamp(0.0, 1.0) as f32
        }
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
