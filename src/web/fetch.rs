//! Model loading over `fetch`.

use js_sys::{Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Response;

use crate::assets::{parse_model, LoadRequest, LoadSink, ModelLoader};
use crate::error::StoryError;

/// Loader that fetches model files relative to the page.
#[derive(Debug, Clone, Copy)]
pub struct FetchLoader;

impl FetchLoader {
    /// A loader if the browser exposes `fetch`, otherwise `None` (the
    /// engine then falls back to procedural models).
    #[must_use]
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        Reflect::has(&window, &JsValue::from_str("fetch"))
            .unwrap_or(false)
            .then_some(Self)
    }
}

impl ModelLoader for FetchLoader {
    fn name(&self) -> &'static str {
        "fetch"
    }

    fn load(&self, request: LoadRequest, sink: LoadSink) {
        spawn_local(async move {
            let result = fetch_bytes(&request.path)
                .await
                .and_then(|bytes| parse_model(&request.path, &bytes));
            sink.complete(request, result);
        });
    }
}

async fn fetch_bytes(path: &str) -> Result<Vec<u8>, StoryError> {
    let failed = |reason: String| StoryError::AssetLoad {
        path: path.to_owned(),
        reason,
    };
    let window =
        web_sys::window().ok_or_else(|| StoryError::Web("no window".to_owned()))?;
    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| failed(format!("{e:?}")))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| failed("not a Response".to_owned()))?;
    if !response.ok() {
        return Err(failed(format!("HTTP {}", response.status())));
    }
    let buffer = response
        .array_buffer()
        .map_err(|e| failed(format!("{e:?}")))?;
    let buffer = JsFuture::from(buffer)
        .await
        .map_err(|e| failed(format!("{e:?}")))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}
