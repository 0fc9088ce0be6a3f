use rustc_hash::FxHashMap;

use super::{parse_model, LoadRequest, LoadSink, ModelLoader};
use crate::error::StoryError;

/// Serves model files from memory and answers synchronously.
///
/// Useful headless and in tests: a path that was never inserted fails with
/// [`StoryError::AssetLoad`], exactly like a missing file or a 404.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: FxHashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    /// Loader with no files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file.
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        let _ = self.files.insert(path.into(), bytes.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_file(
        mut self,
        path: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.insert(path, bytes);
        self
    }
}

impl ModelLoader for MemoryLoader {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load(&self, request: LoadRequest, sink: LoadSink) {
        let result = match self.files.get(&request.path) {
            Some(bytes) => parse_model(&request.path, bytes),
            None => Err(StoryError::AssetLoad {
                path: request.path.clone(),
                reason: "not found".to_owned(),
            }),
        };
        sink.complete(request, result);
    }
}
