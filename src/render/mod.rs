//! Render port.
//!
//! The engine never draws anything itself. Once per frame it hands every
//! ready section's [`SceneContext`] and root nodes to a [`SceneRenderer`],
//! which forwards them to whatever scene-graph library the host uses.

mod mixer;
mod recording;

pub use mixer::ClipMixer;
pub use recording::{RecordingRenderer, RenderCall, RootSnapshot};

use crate::scene::{Node, SceneContext};

/// Draws one section's scene with its camera into its target.
pub trait SceneRenderer {
    /// Draw `nodes` (root nodes, in draw order) for `context`.
    fn render(&mut self, context: &SceneContext, nodes: &[&Node]);

    /// The context's target or camera changed size. Default: nothing.
    fn resize(&mut self, context: &SceneContext) {
        let _ = context;
    }
}

/// Renderer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl SceneRenderer for NullRenderer {
    fn render(&mut self, _context: &SceneContext, _nodes: &[&Node]) {}
}
