//! Render bridge to the page's scene-graph library.
//!
//! The engine's display graph is handed to JavaScript as `CustomEvent`s on
//! `window`:
//!
//! - `scrollstory-scene`: the full graph of one section, sent whenever its
//!   set of roots changes (first frame, a model replacing its stand-in),
//! - `scrollstory-frame`: per-frame transforms of those roots, plus the
//!   opacity of every mesh under each root, depth first,
//! - `scrollstory-resize`: new camera and target size of one section.
//!
//! Every `detail` is a JSON string.

use log::warn;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, Window};

use crate::render::SceneRenderer;
use crate::scene::{Node, RenderTarget, SceneContext};
use crate::section::{PerSection, SectionId};

#[derive(Serialize)]
struct SceneDetail<'a> {
    context: &'a SceneContext,
    roots: &'a [&'a Node],
}

#[derive(Serialize)]
struct RootDetail<'a> {
    name: &'a str,
    matrix: [f32; 16],
    visible: bool,
    opacities: Vec<f32>,
}

#[derive(Serialize)]
struct FrameDetail<'a> {
    section: SectionId,
    canvas: &'a str,
    view: [f32; 16],
    projection: [f32; 16],
    target: RenderTarget,
    roots: Vec<RootDetail<'a>>,
}

/// [`SceneRenderer`] that forwards every call to JavaScript.
pub struct BridgeRenderer {
    window: Window,
    /// Root signature last sent per section.
    sent: PerSection<Option<Vec<(String, usize)>>>,
}

impl BridgeRenderer {
    /// Bridge dispatching on `window`.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self {
            window,
            sent: PerSection::default(),
        }
    }

    fn dispatch(&self, kind: &str, detail: &impl Serialize) {
        let json = match serde_json::to_string(detail) {
            Ok(json) => json,
            Err(e) => {
                warn!("{kind}: could not encode detail: {e}");
                return;
            }
        };
        let init = CustomEventInit::new();
        init.set_detail(&JsValue::from_str(&json));
        match CustomEvent::new_with_event_init_dict(kind, &init) {
            Ok(event) => {
                let _ = self.window.dispatch_event(&event);
            }
            Err(e) => warn!("{kind}: could not create event: {e:?}"),
        }
    }
}

impl SceneRenderer for BridgeRenderer {
    fn render(&mut self, context: &SceneContext, nodes: &[&Node]) {
        let signature: Vec<(String, usize)> = nodes
            .iter()
            .map(|n| (n.name.clone(), n.mesh_count()))
            .collect();
        if self.sent[context.section].as_ref() != Some(&signature) {
            self.dispatch(
                "scrollstory-scene",
                &SceneDetail {
                    context,
                    roots: nodes,
                },
            );
            self.sent[context.section] = Some(signature);
        }

        let detail = FrameDetail {
            section: context.section,
            canvas: &context.container_id,
            view: context.camera.build_view().to_cols_array(),
            projection: context.camera.build_projection().to_cols_array(),
            target: context.target,
            roots: nodes
                .iter()
                .map(|n| RootDetail {
                    name: &n.name,
                    matrix: n.transform.matrix().to_cols_array(),
                    visible: n.visible,
                    opacities: n.mesh_opacities(),
                })
                .collect(),
        };
        self.dispatch("scrollstory-frame", &detail);
    }

    fn resize(&mut self, context: &SceneContext) {
        self.dispatch("scrollstory-resize", context);
    }
}
