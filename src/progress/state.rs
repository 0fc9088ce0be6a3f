use crate::section::{PerSection, SectionId};

/// Page-lifetime animation state: per-section progress in `[0, 1]` and the
/// active section.
///
/// Starts with every section at 0 and [`SectionId::BigBang`] active. Only
/// the [`ProgressMapper`](super::ProgressMapper) writes it; the render loop
/// and the UI sync read it. Inactive sections keep their last progress so a
/// section can read its predecessor's completion.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSequenceState {
    progress: PerSection<f32>,
    active: SectionId,
}

impl Default for AnimationSequenceState {
    fn default() -> Self {
        Self {
            progress: PerSection::default(),
            active: SectionId::BigBang,
        }
    }
}

impl AnimationSequenceState {
    /// Fresh state: all progress 0, first section active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored progress of `section`.
    #[must_use]
    pub fn progress(&self, section: SectionId) -> f32 {
        self.progress[section]
    }

    /// Stored progress of the section before `section`, or 0 for the first.
    #[must_use]
    pub fn previous_progress(&self, section: SectionId) -> f32 {
        section.previous().map_or(0.0, |prev| self.progress[prev])
    }

    /// Currently active section.
    #[must_use]
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// All stored progress values in narrative order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, f32)> + '_ {
        self.progress.iter().map(|(s, p)| (s, *p))
    }

    pub(crate) fn set_progress(&mut self, section: SectionId, value: f32) {
        self.progress[section] = value.clamp(0.0, 1.0);
    }

    pub(crate) fn set_active(&mut self, section: SectionId) {
        self.active = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_with_first_section_active() {
        let state = AnimationSequenceState::new();
        assert_eq!(state.active(), SectionId::BigBang);
        assert!(state.iter().all(|(_, p)| p == 0.0));
    }

    #[test]
    fn previous_progress_reads_predecessor() {
        let mut state = AnimationSequenceState::new();
        state.set_progress(SectionId::Humano, 0.6);
        assert_eq!(state.previous_progress(SectionId::Vitruvio), 0.6);
        assert_eq!(state.previous_progress(SectionId::BigBang), 0.0);
    }

    #[test]
    fn stored_progress_is_clamped() {
        let mut state = AnimationSequenceState::new();
        state.set_progress(SectionId::Adn, 3.0);
        assert_eq!(state.progress(SectionId::Adn), 1.0);
        state.set_progress(SectionId::Adn, -1.0);
        assert_eq!(state.progress(SectionId::Adn), 0.0);
    }
}
