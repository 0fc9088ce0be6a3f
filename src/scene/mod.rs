//! Section display graphs and the registry that owns them.
//!
//! Each section owns a small tree of [`Node`]s (groups and meshes with a
//! [`Transform`] and a [`Material`]). Graphs are built by the
//! [`factory`] either from a loaded model or procedurally, and live in
//! [`ModelSlot`]s so a loaded model can replace its stand-in at any frame
//! boundary.

pub mod factory;
mod geometry;
mod light;
mod material;
mod registry;
mod slot;

use glam::{EulerRot, Mat4, Quat, Vec3};
pub use geometry::{Geometry, MeshData};
pub use light::Light;
pub use material::{hex, Material, MaterialKind};
pub use registry::{
    create_scene_context, RenderTarget, SceneContext, SceneEntry,
    SceneRegistry,
};
use serde::Serialize;
pub use slot::{ModelSlot, SlotState};

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Position, Euler rotation (radians, XYZ order) and scale of a node
/// relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// Translation.
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Identity transform translated to `position`.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Set the same scale on all three axes.
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::splat(scale);
    }

    /// Local-to-parent matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(
            self.scale,
            rotation,
            self.position,
        )
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// What a node carries besides its transform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// A container of child nodes.
    Group {
        /// Children, drawn with this node's transform applied.
        children: Vec<Node>,
    },
    /// A drawable mesh.
    Mesh {
        /// Shape.
        geometry: Geometry,
        /// Surface.
        material: Material,
    },
}

/// One node of a display graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Name for logging and model-file group names.
    pub name: String,
    /// Local transform.
    pub transform: Transform,
    /// Hidden nodes (and their subtrees) are not drawn.
    pub visible: bool,
    /// Whether meshes cast shadows from the key light.
    pub cast_shadow: bool,
    /// Whether meshes receive shadows.
    pub receive_shadow: bool,
    /// Group or mesh payload.
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    /// Empty group.
    #[must_use]
    pub fn group(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::with_kind(name, NodeKind::Group { children })
    }

    /// Single mesh.
    #[must_use]
    pub fn mesh(
        name: impl Into<String>,
        geometry: Geometry,
        material: Material,
    ) -> Self {
        Self::with_kind(name, NodeKind::Mesh { geometry, material })
    }

    fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            visible: true,
            cast_shadow: false,
            receive_shadow: false,
            kind,
        }
    }

    /// Move the node to `position`.
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Set the node's Euler rotation.
    #[must_use]
    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    /// Children of a group; empty for meshes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Group { children } => children,
            NodeKind::Mesh { .. } => &[],
        }
    }

    /// Visit every node of the subtree, depth first, parents first.
    pub fn traverse_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
        f(self);
        if let NodeKind::Group { children } = &mut self.kind {
            for child in children {
                child.traverse_mut(f);
            }
        }
    }

    /// Visit every mesh material of the subtree.
    pub fn for_each_material_mut(&mut self, mut f: impl FnMut(&mut Material)) {
        self.traverse_mut(&mut |node| {
            if let NodeKind::Mesh { material, .. } = &mut node.kind {
                f(material);
            }
        });
    }

    /// Set the opacity of every mesh material.
    pub fn set_opacity(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        self.for_each_material_mut(|m| m.opacity = opacity);
    }

    /// Set the opacity of blended materials only, leaving opaque ones as
    /// they are.
    pub fn set_transparent_opacity(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        self.for_each_material_mut(|m| {
            if m.transparent {
                m.opacity = opacity;
            }
        });
    }

    /// Set shadow flags on every mesh of the subtree.
    pub fn set_shadows(&mut self, cast: bool, receive: bool) {
        self.traverse_mut(&mut |node| {
            if matches!(node.kind, NodeKind::Mesh { .. }) {
                node.cast_shadow = cast;
                node.receive_shadow = receive;
            }
        });
    }

    /// Number of meshes in the subtree.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        match &self.kind {
            NodeKind::Mesh { .. } => 1,
            NodeKind::Group { children } => {
                children.iter().map(Node::mesh_count).sum()
            }
        }
    }

    /// Opacity of every mesh material, depth first, parents first (the
    /// order [`traverse_mut`](Self::traverse_mut) visits meshes in).
    #[must_use]
    pub fn mesh_opacities(&self) -> Vec<f32> {
        match &self.kind {
            NodeKind::Mesh { material, .. } => vec![material.opacity],
            NodeKind::Group { children } => {
                children.iter().flat_map(Node::mesh_opacities).collect()
            }
        }
    }

    /// First mesh material found depth first.
    #[must_use]
    pub fn first_material(&self) -> Option<&Material> {
        match &self.kind {
            NodeKind::Mesh { material, .. } => Some(material),
            NodeKind::Group { children } => {
                children.iter().find_map(Node::first_material)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn two_meshes() -> Node {
        Node::group(
            "pair",
            vec![
                Node::mesh(
                    "a",
                    Geometry::sphere(1.0, 8, 8),
                    Material::phong(0xff0000).transparent(1.0),
                ),
                Node::mesh(
                    "b",
                    Geometry::cuboid(1.0, 1.0, 1.0),
                    Material::phong(0x00ff00),
                ),
            ],
        )
    }

    #[test]
    fn transform_matrix_applies_scale_rotation_translation() {
        let mut t = Transform::at(Vec3::new(1.0, 2.0, 3.0));
        t.set_uniform_scale(2.0);
        t.rotation.z = FRAC_PI_2;
        let p = t.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 4.0, 3.0)).length() < 1e-5, "{p}");
    }

    #[test]
    fn opacity_setters() {
        let mut node = two_meshes();
        node.set_transparent_opacity(0.3);
        let opacities: Vec<f32> = node
            .children()
            .iter()
            .filter_map(|c| c.first_material().map(|m| m.opacity))
            .collect();
        assert_eq!(opacities, vec![0.3, 1.0]);

        node.set_opacity(2.0);
        node.for_each_material_mut(|m| assert_eq!(m.opacity, 1.0));
    }

    #[test]
    fn mesh_opacities_follow_every_mesh() {
        let mut node = Node::group(
            "figure",
            vec![two_meshes(), Node::group("empty", Vec::new())],
        );
        node.set_transparent_opacity(0.4);
        assert_eq!(node.mesh_opacities(), vec![0.4, 1.0]);
        assert_eq!(node.mesh_opacities().len(), node.mesh_count());
    }

    #[test]
    fn shadows_apply_to_meshes_only() {
        let mut node = two_meshes();
        node.set_shadows(true, true);
        assert!(!node.cast_shadow);
        assert!(node.children().iter().all(|c| c.cast_shadow));
    }

    #[test]
    fn node_serializes_flat() {
        let json = serde_json::to_value(two_meshes()).unwrap();
        assert_eq!(json["type"], "group");
        assert_eq!(json["children"][0]["type"], "mesh");
        assert_eq!(json["children"][0]["geometry"]["type"], "sphere");
        assert_eq!(json["transform"]["scale"], serde_json::json!([1.0, 1.0, 1.0]));
    }
}
