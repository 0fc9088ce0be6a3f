//! Page layout port.
//!
//! Everything the engine needs to know about the page (scroll position,
//! viewport and document size, where each section starts, how big each
//! canvas container is) comes through [`PageLayout`]. The browser front end
//! reads it from the DOM; [`StaticLayout`] computes it from a fixed
//! description for headless runs and tests.

use rustc_hash::FxHashSet;

use crate::progress::ScrollMetrics;
use crate::section::SectionId;

/// Read-only view of the page geometry.
pub trait PageLayout {
    /// Current scroll offset, viewport height and document height.
    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Absolute top offset of each section element, in narrative order.
    /// Sections missing from the page are simply absent from the tail.
    fn section_offsets(&self) -> Vec<f64>;

    /// Pixel size of the container with DOM id `id`, or `None` when the
    /// page has no such element.
    fn container_size(&self, id: &str) -> Option<(u32, u32)>;
}

/// Layout with fixed section heights, measured in viewport heights.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticLayout {
    width: u32,
    height: u32,
    section_heights: Vec<f64>,
    scroll_y: f64,
    missing: FxHashSet<String>,
}

impl StaticLayout {
    /// `width × height` viewport with five one-viewport-tall sections.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            section_heights: vec![1.0; SectionId::COUNT],
            scroll_y: 0.0,
            missing: FxHashSet::default(),
        }
    }

    /// Replace the section heights (in viewport heights).
    #[must_use]
    pub fn with_section_heights(mut self, heights: &[f64]) -> Self {
        self.section_heights = heights.to_vec();
        self
    }

    /// Drop a container from the page.
    #[must_use]
    pub fn without_container(mut self, id: &str) -> Self {
        let _ = self.missing.insert(id.to_owned());
        self
    }

    /// Scroll to `scroll_y` pixels.
    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    /// Resize the viewport. Section heights scale with it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Largest meaningful scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - f64::from(self.height)).max(0.0)
    }

    fn document_height(&self) -> f64 {
        self.section_heights.iter().sum::<f64>() * f64::from(self.height)
    }
}

impl PageLayout for StaticLayout {
    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y: self.scroll_y,
            viewport_height: f64::from(self.height),
            document_height: self.document_height(),
        }
    }

    fn section_offsets(&self) -> Vec<f64> {
        let vh = f64::from(self.height);
        let mut top = 0.0;
        self.section_heights
            .iter()
            .map(|h| {
                let start = top;
                top += h * vh;
                start
            })
            .collect()
    }

    fn container_size(&self, id: &str) -> Option<(u32, u32)> {
        let known = SectionId::ALL.iter().any(|s| s.canvas_id() == id);
        (known && !self.missing.contains(id)).then_some((self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_accumulate_heights() {
        let layout = StaticLayout::new(1000, 800)
            .with_section_heights(&[1.0, 1.5, 1.0, 2.0, 1.0]);
        assert_eq!(
            layout.section_offsets(),
            vec![0.0, 800.0, 2000.0, 2800.0, 4400.0]
        );
        assert_eq!(layout.scroll_metrics().document_height, 5200.0);
        assert_eq!(layout.max_scroll(), 4400.0);
    }

    #[test]
    fn containers_follow_viewport_and_can_be_removed() {
        let mut layout = StaticLayout::new(1000, 800).without_container("adn-canvas");
        assert_eq!(layout.container_size("bigbang-canvas"), Some((1000, 800)));
        assert_eq!(layout.container_size("adn-canvas"), None);
        assert_eq!(layout.container_size("footer"), None);
        layout.resize(640, 480);
        assert_eq!(layout.container_size("newton-canvas"), Some((640, 480)));
    }
}
