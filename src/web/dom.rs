//! DOM-backed layout and UI ports.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::layout::PageLayout;
use crate::particles::ParticleConfig;
use crate::progress::ScrollMetrics;
use crate::section::SectionId;
use crate::ui::UiSync;

/// Page geometry read from the live document.
#[derive(Clone)]
pub struct DomLayout {
    window: Window,
    document: Document,
}

impl DomLayout {
    /// Layout over `window` and its document.
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl PageLayout for DomLayout {
    fn scroll_metrics(&self) -> ScrollMetrics {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let document_height = self
            .document
            .document_element()
            .map_or(0.0, |e| f64::from(e.scroll_height()));
        ScrollMetrics {
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    fn section_offsets(&self) -> Vec<f64> {
        let Ok(list) = self.document.query_selector_all(".section") else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|el| f64::from(el.offset_top()))
            .collect()
    }

    fn container_size(&self, id: &str) -> Option<(u32, u32)> {
        let el = self.document.get_element_by_id(id)?;
        Some((el.client_width().max(0) as u32, el.client_height().max(0) as u32))
    }
}

/// Page chrome driven through class and style changes.
pub struct DomUi {
    document: Document,
}

impl DomUi {
    /// UI over `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn each(&self, selector: &str, mut f: impl FnMut(usize, &Element)) {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return;
        };
        let elements = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok());
        for (index, el) in elements.enumerate() {
            f(index, &el);
        }
    }

    fn toggle(&self, selector: &str, class: &str, on: bool) {
        self.each(selector, |_, el| {
            let _ = el.class_list().toggle_with_force(class, on);
        });
    }

    fn set_width(&self, id: &str, percent: f64) {
        let Some(el) = self
            .document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let _ = el.style().set_property("width", &format!("{percent}%"));
    }

    fn highlight_index(&self, selector: &str, active: usize) {
        self.each(selector, |index, el| {
            let _ = el.class_list().toggle_with_force("active", index == active);
        });
    }
}

impl UiSync for DomUi {
    fn set_active_section(&mut self, section: SectionId) {
        self.highlight_index(".nav-link", section.index());
        self.highlight_index(".nav-dots .dot", section.index());
    }

    fn set_page_progress(&mut self, percent: f64) {
        self.set_width("progressFill", percent);
    }

    fn set_navbar_scrolled(&mut self, scrolled: bool) {
        self.toggle(".navbar", "scrolled", scrolled);
    }

    fn set_scroll_indicator_hidden(&mut self, hidden: bool) {
        self.toggle("#scrollIndicator", "hidden", hidden);
    }

    fn set_loading_progress(&mut self, percent: f32) {
        self.set_width("loadingProgressFill", f64::from(percent));
    }

    fn hide_loading(&mut self) {
        self.toggle("#loading", "hidden", true);
    }

    fn reveal_content(&mut self) {
        self.toggle(".content", "visible", true);
        self.toggle(".narrative", "visible", true);
    }

    fn start_particles(&mut self, container_id: &str, config: &ParticleConfig) {
        if self.document.get_element_by_id(container_id).is_none() {
            debug!("particle container '{container_id}' not on page");
            return;
        }
        match config.to_json() {
            Ok(json) => super::start_particle_layer(container_id, &json),
            Err(e) => debug!("particle config for {container_id}: {e}"),
        }
    }

    fn set_particle_layer(&mut self, section: SectionId) {
        for other in SectionId::ALL {
            let selector = format!("#{}", other.particles_id());
            self.toggle(&selector, "active", other == section);
        }
    }
}
