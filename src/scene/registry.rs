use log::{debug, warn};
use serde::Serialize;

use super::{Light, ModelSlot};
use crate::animation::{sections, BoxedAnimation};
use crate::camera::Camera;
use crate::layout::PageLayout;
use crate::options::Options;
use crate::section::{PerSection, SectionId, SlotKey};

/// Pixel size of a section's drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderTarget {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Camera, lights and drawing surface bound to one section.
///
/// Created once at startup and never recreated; only
/// [`resize`](Self::resize) changes it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneContext {
    /// Section the context belongs to.
    pub section: SectionId,
    /// DOM id of the hosting container.
    pub container_id: String,
    /// Section camera.
    pub camera: Camera,
    /// Drawing surface size.
    pub target: RenderTarget,
    /// Scene lights.
    pub lights: Vec<Light>,
}

impl SceneContext {
    /// Match the camera aspect and the target size to the container.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect_from(width, height);
        self.target = RenderTarget { width, height };
    }
}

/// Build the context for `section`, or `None` when the page has no
/// container for it. A missing container makes the section unavailable;
/// it is never an error.
pub fn create_scene_context(
    section: SectionId,
    layout: &dyn PageLayout,
    options: &Options,
) -> Option<SceneContext> {
    let container_id = section.canvas_id();
    let Some((width, height)) = layout.container_size(&container_id) else {
        warn!("container '{container_id}' not found, {section} unavailable");
        return None;
    };
    let aspect = if height > 0 {
        width as f32 / height as f32
    } else {
        1.0
    };
    debug!("{section}: scene context {width}x{height}");
    Some(SceneContext {
        section,
        camera: Camera::for_section(section, &options.camera, aspect),
        target: RenderTarget { width, height },
        lights: Light::rig(&options.lighting),
        container_id,
    })
}

/// A section's context together with its animation (which owns the
/// section's display graph).
pub struct SceneEntry {
    /// Camera, lights and surface.
    pub context: SceneContext,
    /// The section animation and its model slots.
    pub animation: BoxedAnimation,
}

/// Per-section scene entries. Sections whose container is missing have no
/// entry.
#[derive(Default)]
pub struct SceneRegistry {
    entries: PerSection<Option<SceneEntry>>,
}

impl SceneRegistry {
    /// Create a context and an animation for every section the page hosts.
    pub fn build(layout: &dyn PageLayout, options: &Options) -> Self {
        let entries = PerSection::from_fn(|section| {
            let context = create_scene_context(section, layout, options)?;
            Some(SceneEntry {
                context,
                animation: sections::create(section, &options.sections),
            })
        });
        Self { entries }
    }

    /// Entry for `section`, if available.
    #[must_use]
    pub fn get(&self, section: SectionId) -> Option<&SceneEntry> {
        self.entries[section].as_ref()
    }

    /// Mutable entry for `section`, if available.
    pub fn get_mut(&mut self, section: SectionId) -> Option<&mut SceneEntry> {
        self.entries[section].as_mut()
    }

    /// The slot `key` in its owning section, if that section is available.
    pub fn slot_mut(&mut self, key: SlotKey) -> Option<&mut ModelSlot> {
        self.get_mut(key.section())?.animation.slot_mut(key)
    }

    /// Number of available sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().filter(|e| e.is_some()).count()
    }

    /// Whether no section is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Available entries in narrative order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneEntry> {
        self.entries.values().filter_map(Option::as_ref)
    }

    /// `(section, entry-or-none)` pairs in narrative order, mutably.
    pub fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (SectionId, Option<&mut SceneEntry>)> {
        self.entries.iter_mut().map(|(s, e)| (s, e.as_mut()))
    }

    /// Resize every context to its container's current size. Containers
    /// that disappeared keep their last size. Returns how many contexts
    /// were resized.
    pub fn resize_all(&mut self, layout: &dyn PageLayout) -> usize {
        let mut resized = 0;
        for (_, entry) in self.iter_mut() {
            let Some(entry) = entry else { continue };
            let id = &entry.context.container_id;
            if let Some((w, h)) = layout.container_size(id) {
                entry.context.resize(w, h);
                resized += 1;
            }
        }
        resized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;

    #[test]
    fn missing_container_leaves_section_out() {
        let layout = StaticLayout::new(1200, 600).without_container("humano-canvas");
        let registry = SceneRegistry::build(&layout, &Options::default());
        assert_eq!(registry.len(), 4);
        assert!(registry.get(SectionId::Humano).is_none());
        let adn = registry.get(SectionId::Adn).unwrap();
        assert_eq!(adn.context.camera.aspect, 2.0);
        assert_eq!(adn.context.lights.len(), 3);
        assert_eq!(adn.animation.section(), SectionId::Adn);
    }

    #[test]
    fn resize_updates_aspect_and_target() {
        let mut layout = StaticLayout::new(1200, 600);
        let mut registry = SceneRegistry::build(&layout, &Options::default());
        layout.resize(800, 800);
        assert_eq!(registry.resize_all(&layout), 5);
        for entry in registry.iter() {
            assert_eq!(entry.context.camera.aspect, 1.0);
            assert_eq!(
                entry.context.target,
                RenderTarget {
                    width: 800,
                    height: 800
                }
            );
        }
    }

    #[test]
    fn slot_lookup_routes_to_owning_section() {
        let layout = StaticLayout::new(640, 480);
        let mut registry = SceneRegistry::build(&layout, &Options::default());
        let slot = registry.slot_mut(SlotKey::Apple).unwrap();
        assert_eq!(slot.key(), SlotKey::Apple);
    }
}
