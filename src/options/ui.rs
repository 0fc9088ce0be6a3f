use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Page Chrome", inline)]
#[serde(default)]
/// Thresholds for the navbar and scroll-indicator chrome.
pub struct UiOptions {
    /// Scroll offset (px) past which the navbar switches to its compact
    /// "scrolled" style.
    #[schemars(title = "Navbar Threshold", range(min = 0.0, max = 1000.0))]
    pub navbar_scrolled_threshold: f64,
    /// The scroll indicator hides once the page scrolls further than this
    /// (px), or when the viewport bottom comes this close to the document
    /// end.
    #[schemars(title = "Indicator Margin", range(min = 0.0, max = 500.0))]
    pub indicator_margin: f64,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            navbar_scrolled_threshold: 100.0,
            indicator_margin: 50.0,
        }
    }
}
