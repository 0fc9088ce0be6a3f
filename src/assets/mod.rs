//! Model loading.
//!
//! Loads are fire-and-forget: the engine hands a [`LoadRequest`] and a
//! [`LoadSink`] to a [`ModelLoader`], and the loader eventually sends one
//! [`LoadEvent`] back through the sink, from whatever thread or task it
//! used. The engine drains the [`LoadQueue`] at the start of every frame, so
//! a model can land between any two frames without locking. There is no
//! cancellation and no timeout: a load that never answers leaves its slot
//! as it was.

#[cfg(not(target_arch = "wasm32"))]
mod fs_loader;
mod memory;
pub mod obj;
mod tracker;

use std::path::Path;
use std::sync::mpsc;

#[cfg(not(target_arch = "wasm32"))]
pub use fs_loader::FsLoader;
pub use memory::MemoryLoader;
pub use tracker::LoadingTracker;

use crate::error::StoryError;
use crate::scene::Node;
use crate::section::SlotKey;

/// Model file formats recognized by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFormat {
    /// Wavefront OBJ (parsed).
    Obj,
    /// Autodesk FBX (recognized, not parsed).
    Fbx,
}

impl AssetFormat {
    /// Format of `path` by extension, case-insensitively.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "obj" => Some(Self::Obj),
            "fbx" => Some(Self::Fbx),
            _ => None,
        }
    }
}

/// Turn raw file contents into a display graph.
///
/// FBX is recognized but has no parser; it reports
/// [`StoryError::UnsupportedFormat`] so the slot falls back to its
/// procedural stand-in.
pub fn parse_model(path: &str, bytes: &[u8]) -> Result<Node, StoryError> {
    match AssetFormat::from_path(path) {
        Some(AssetFormat::Obj) => {
            let name = Path::new(path)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(path);
            obj::parse(&String::from_utf8_lossy(bytes), name)
        }
        Some(AssetFormat::Fbx) => {
            Err(StoryError::UnsupportedFormat(format!("FBX ({path})")))
        }
        None => Err(StoryError::UnsupportedFormat(path.to_owned())),
    }
}

/// One model to fetch for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Unique id within the queue that issued it.
    pub id: u64,
    /// Slot the model is for.
    pub slot: SlotKey,
    /// Asset path or URL.
    pub path: String,
}

/// Outcome of one [`LoadRequest`].
#[derive(Debug)]
pub struct LoadEvent {
    /// The request being answered.
    pub request: LoadRequest,
    /// Parsed graph, or why there is none.
    pub result: Result<Node, StoryError>,
}

/// Sending half handed to loaders.
#[derive(Debug, Clone)]
pub struct LoadSink {
    tx: mpsc::Sender<LoadEvent>,
}

impl LoadSink {
    /// Report the outcome of `request`. A queue that has gone away is
    /// ignored.
    pub fn complete(&self, request: LoadRequest, result: Result<Node, StoryError>) {
        let _ = self.tx.send(LoadEvent { request, result });
    }
}

/// Something that can fetch and parse model files.
pub trait ModelLoader {
    /// Loader name for logging.
    fn name(&self) -> &'static str;

    /// Start loading `request`; answer exactly once through `sink`, now or
    /// later.
    fn load(&self, request: LoadRequest, sink: LoadSink);
}

/// Receiving end of load events plus the request-id counter.
#[derive(Debug)]
pub struct LoadQueue {
    tx: mpsc::Sender<LoadEvent>,
    rx: mpsc::Receiver<LoadEvent>,
    next_id: u64,
}

impl Default for LoadQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadQueue {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx, next_id: 0 }
    }

    /// New sink feeding this queue.
    #[must_use]
    pub fn sink(&self) -> LoadSink {
        LoadSink {
            tx: self.tx.clone(),
        }
    }

    /// Allocate a request for `slot`.
    pub fn next_request(&mut self, slot: SlotKey, path: String) -> LoadRequest {
        let id = self.next_id;
        self.next_id += 1;
        LoadRequest { id, slot, path }
    }

    /// Every event that has arrived so far, without blocking.
    pub fn try_drain(&self) -> Vec<LoadEvent> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_by_extension_ignores_case() {
        assert_eq!(AssetFormat::from_path("./models/Male.OBJ"), Some(AssetFormat::Obj));
        assert_eq!(AssetFormat::from_path("DNA.fbx"), Some(AssetFormat::Fbx));
        assert_eq!(AssetFormat::from_path("tree.glb"), None);
        assert_eq!(AssetFormat::from_path("noext"), None);
    }

    #[test]
    fn fbx_is_unsupported() {
        let err = parse_model("./models/DNA.fbx", b"Kaydara FBX Binary").unwrap_err();
        assert!(matches!(err, StoryError::UnsupportedFormat(_)));
    }

    #[test]
    fn obj_is_parsed_and_named_after_file() {
        let src = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let node = parse_model("./models/hand.obj", src).unwrap();
        assert_eq!(node.name, "hand.obj");
        assert_eq!(node.mesh_count(), 1);
    }

    #[test]
    fn queue_collects_events_from_sinks() {
        let mut queue = LoadQueue::new();
        let a = queue.next_request(SlotKey::Apple, "a.obj".to_owned());
        let b = queue.next_request(SlotKey::Tree, "b.fbx".to_owned());
        assert_ne!(a.id, b.id);
        let sink = queue.sink();
        sink.complete(a, Err(StoryError::UnsupportedFormat("x".to_owned())));
        sink.clone().complete(
            b,
            Err(StoryError::AssetLoad {
                path: "b.fbx".to_owned(),
                reason: "404".to_owned(),
            }),
        );
        let events = queue.try_drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].request.slot, SlotKey::Apple);
        assert!(queue.try_drain().is_empty());
    }
}
