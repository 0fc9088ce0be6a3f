//! Browser front end.
//!
//! [`start_story`] (exported to JavaScript as `startStory`) builds a
//! [`StoryEngine`] over the live document, wires the scroll and resize
//! listeners and runs the `requestAnimationFrame` loop. Rendering is
//! delegated to the page through [`BridgeRenderer`] events; models are
//! fetched with [`FetchLoader`].

mod bridge;
mod dom;
mod fetch;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect, JSON};
use log::{error, info, warn};
use wasm_bindgen::prelude::*;

pub use bridge::BridgeRenderer;
pub use dom::{DomLayout, DomUi};
pub use fetch::FetchLoader;

use crate::assets::ModelLoader;
use crate::engine::StoryEngine;
use crate::layout::PageLayout;
use crate::options::Options;

type WebEngine = StoryEngine<BridgeRenderer, DomUi>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Start the story on the current page.
///
/// `options_toml` optionally overrides the defaults with a TOML preset.
#[wasm_bindgen(js_name = startStory)]
pub fn start_story(options_toml: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let options = match options_toml {
        Some(text) => Options::from_toml_str(&text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => Options::default(),
    };
    let window =
        web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let layout = DomLayout::new(window.clone(), document.clone());
    let fetch = FetchLoader::detect();
    let loader: Option<&dyn ModelLoader> = match &fetch {
        Some(fetch) => Some(fetch),
        None => None,
    };
    let engine = Rc::new(RefCell::new(StoryEngine::new(
        &layout,
        options,
        loader,
        BridgeRenderer::new(window.clone()),
        DomUi::new(document),
    )));
    info!("story started");

    {
        let engine = Rc::clone(&engine);
        let layout = layout.clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let metrics = layout.scroll_metrics();
            let _ = engine.borrow_mut().on_scroll_or_resize(&metrics);
        });
        window.add_event_listener_with_callback(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
        )?;
        on_scroll.forget();
    }
    {
        let engine = Rc::clone(&engine);
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let _ = engine.borrow_mut().handle_resize(&layout);
        });
        window.add_event_listener_with_callback(
            "resize",
            on_resize.as_ref().unchecked_ref(),
        )?;
        on_resize.forget();
    }

    start_frame_loop(engine);
    Ok(())
}

/// Run `engine.frame()` on every animation frame, forever.
fn start_frame_loop(engine: Rc<RefCell<WebEngine>>) {
    // The closure reschedules itself, so it needs a handle to its own slot.
    let slot: FrameCallback = Rc::new(RefCell::new(None));
    let handle = Rc::clone(&slot);
    *slot.borrow_mut() = Some(Closure::new(move || {
        let _ = engine.borrow_mut().frame();
        request_frame(&handle);
    }));
    request_frame(&slot);
}

fn request_frame(slot: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = slot.borrow().as_ref() {
        if let Err(e) =
            window.request_animation_frame(callback.as_ref().unchecked_ref())
        {
            error!("requestAnimationFrame failed: {e:?}");
        }
    }
}

/// Hand a particle configuration to the page's `particlesJS` global.
pub(crate) fn start_particle_layer(container_id: &str, config_json: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(global) = Reflect::get(&window, &JsValue::from_str("particlesJS"))
    else {
        return;
    };
    let Some(particles_js) = global.dyn_ref::<Function>() else {
        warn!("particlesJS not loaded, skipping {container_id}");
        return;
    };
    let config = match JSON::parse(config_json) {
        Ok(config) => config,
        Err(e) => {
            warn!("bad particle config for {container_id}: {e:?}");
            return;
        }
    };
    if let Err(e) =
        particles_js.call2(&JsValue::NULL, &JsValue::from_str(container_id), &config)
    {
        warn!("particlesJS({container_id}) failed: {e:?}");
    }
}
