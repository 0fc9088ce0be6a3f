use super::SceneRenderer;
use crate::scene::{Node, RenderTarget, SceneContext, Transform};
use crate::section::SectionId;

/// What a root node looked like when it was drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct RootSnapshot {
    /// Node name.
    pub name: String,
    /// Root transform.
    pub transform: Transform,
    /// Opacity of the first mesh material, if any.
    pub opacity: Option<f32>,
    /// Opacity of every mesh, depth first.
    pub opacities: Vec<f32>,
    /// Meshes in the subtree.
    pub mesh_count: usize,
}

impl RootSnapshot {
    fn of(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            transform: node.transform,
            opacity: node.first_material().map(|m| m.opacity),
            opacities: node.mesh_opacities(),
            mesh_count: node.mesh_count(),
        }
    }
}

/// One recorded render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    /// Section drawn.
    pub section: SectionId,
    /// Target size at draw time.
    pub target: RenderTarget,
    /// Camera aspect at draw time.
    pub aspect: f32,
    /// Root nodes drawn.
    pub roots: Vec<RootSnapshot>,
}

/// Renderer that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
    resizes: Vec<(SectionId, RenderTarget)>,
}

impl RecordingRenderer {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every render call so far.
    #[must_use]
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Most recent render call for `section`.
    #[must_use]
    pub fn last_for(&self, section: SectionId) -> Option<&RenderCall> {
        self.calls.iter().rev().find(|c| c.section == section)
    }

    /// Every resize notification so far.
    #[must_use]
    pub fn resizes(&self) -> &[(SectionId, RenderTarget)] {
        &self.resizes
    }

    /// Forget everything recorded.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.resizes.clear();
    }
}

impl SceneRenderer for RecordingRenderer {
    fn render(&mut self, context: &SceneContext, nodes: &[&Node]) {
        self.calls.push(RenderCall {
            section: context.section,
            target: context.target,
            aspect: context.camera.aspect,
            roots: nodes.iter().map(|n| RootSnapshot::of(n)).collect(),
        });
    }

    fn resize(&mut self, context: &SceneContext) {
        self.resizes.push((context.section, context.target));
    }
}
