use log::{debug, error};

use super::{parse_model, LoadRequest, LoadSink, ModelLoader};
use crate::error::StoryError;
use crate::scene::Node;

/// Reads and parses model files on a background thread per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl FsLoader {
    /// Create a filesystem loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn read(request: &LoadRequest) -> Result<Node, StoryError> {
        let bytes = std::fs::read(&request.path).map_err(|e| {
            StoryError::AssetLoad {
                path: request.path.clone(),
                reason: e.to_string(),
            }
        })?;
        parse_model(&request.path, &bytes)
    }
}

impl ModelLoader for FsLoader {
    fn name(&self) -> &'static str {
        "filesystem"
    }

    fn load(&self, request: LoadRequest, sink: LoadSink) {
        debug!("loading {} for {}", request.path, request.slot);
        let thread_sink = sink.clone();
        let thread_request = request.clone();
        let spawned = std::thread::Builder::new()
            .name(format!("model-loader-{}", request.slot))
            .spawn(move || {
                let result = Self::read(&thread_request);
                thread_sink.complete(thread_request, result);
            });
        if let Err(e) = spawned {
            error!("failed to spawn loader thread for {}: {e}", request.path);
            let path = request.path.clone();
            sink.complete(
                request,
                Err(StoryError::AssetLoad {
                    path,
                    reason: e.to_string(),
                }),
            );
        }
    }
}
