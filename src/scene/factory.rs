//! Object factory: per-slot materials, starting transforms and procedural
//! stand-ins.
//!
//! A loaded model and its procedural stand-in share one starting transform
//! and one material recipe, so swapping them mid-sequence changes the
//! silhouette but not the pose or the color.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::Vec3;

use super::{Geometry, Material, Node, Transform};
use crate::options::SectionOptions;
use crate::section::SlotKey;

/// Resting height of the tree.
const TREE_Y: f32 = -3.0;
/// Height of the catching hand.
const HAND_Y: f32 = -2.0;

/// Rungs in the procedural helix.
const HELIX_RUNGS: u32 = 50;
/// Radius of the procedural helix.
const HELIX_RADIUS: f32 = 2.0;
/// Vertical distance between rungs.
const HELIX_RISE: f32 = 0.4;
/// Angle between consecutive rungs.
const HELIX_TWIST: f32 = 0.3;

// ---------------------------------------------------------------------------
// Shared recipes
// ---------------------------------------------------------------------------

/// Starting transform of a slot's root node.
#[must_use]
pub fn base_transform(key: SlotKey, sections: &SectionOptions) -> Transform {
    let mut t = Transform::IDENTITY;
    let scale = match key {
        SlotKey::LeftArm => {
            t.position.x = sections.bigbang.initial_left_x;
            t.rotation.y = FRAC_PI_4;
            sections.bigbang.initial_scale
        }
        SlotKey::RightArm => {
            t.position.x = sections.bigbang.initial_right_x;
            t.rotation.y = -FRAC_PI_4;
            sections.bigbang.initial_scale
        }
        SlotKey::Dna => sections.adn.initial_scale,
        SlotKey::Human => {
            t.position.y = sections.humano.rest_y;
            sections.humano.initial_scale
        }
        SlotKey::Vitruvian => {
            t.position.y = sections.vitruvio.rest_y;
            sections.vitruvio.initial_scale
        }
        SlotKey::Tree => {
            t.position.y = TREE_Y;
            sections.newton.tree_initial_scale
        }
        SlotKey::Apple => {
            t.position =
                Vec3::new(sections.newton.apple_x, sections.newton.apple_start_y, 0.0);
            sections.newton.prop_scale
        }
        SlotKey::Hand => {
            t.position = Vec3::new(sections.newton.apple_x, HAND_Y, 0.0);
            t.rotation.x = FRAC_PI_4;
            sections.newton.prop_scale
        }
    };
    t.set_uniform_scale(scale);
    t
}

/// Material a slot's meshes are drawn with. `name` is the source
/// material's name; the tree uses it to tell leaves from bark.
#[must_use]
pub fn material_for(
    key: SlotKey,
    sections: &SectionOptions,
    name: Option<&str>,
) -> Material {
    match key {
        SlotKey::LeftArm | SlotKey::RightArm => {
            skin().transparent(sections.bigbang.opacity)
        }
        SlotKey::Dna => Material::phong(0x4ecdc4)
            .with_emissive(0x001122)
            .with_shininess(100.0)
            .transparent(sections.adn.initial_opacity),
        SlotKey::Human => Material::basic(0x00ffff)
            .wireframe()
            .transparent(sections.humano.initial_opacity),
        SlotKey::Vitruvian => Material::phong(0xffd700)
            .with_emissive(0x332200)
            .with_shininess(100.0)
            .transparent(sections.vitruvio.initial_opacity),
        SlotKey::Tree => {
            if name.is_some_and(|n| n.to_ascii_lowercase().contains("leaf")) {
                leaves(sections)
            } else {
                bark(sections)
            }
        }
        SlotKey::Apple => Material::phong(0xff0000)
            .with_emissive(0x220000)
            .with_shininess(100.0)
            .transparent(sections.newton.initial_opacity),
        SlotKey::Hand => skin().transparent(sections.newton.initial_opacity),
    }
}

fn skin() -> Material {
    Material::phong(0xead9c2)
        .with_emissive(0x332211)
        .with_shininess(50.0)
}

fn leaves(sections: &SectionOptions) -> Material {
    Material::phong(0x228b22)
        .with_emissive(0x001100)
        .transparent(sections.newton.initial_opacity)
}

fn bark(sections: &SectionOptions) -> Material {
    Material::phong(0x8b4513)
        .with_emissive(0x110000)
        .transparent(sections.newton.initial_opacity)
}

fn shadow_flags(key: SlotKey) -> (bool, bool) {
    match key {
        SlotKey::Dna | SlotKey::Human | SlotKey::Vitruvian => (false, false),
        SlotKey::Apple => (true, false),
        SlotKey::LeftArm | SlotKey::RightArm | SlotKey::Tree | SlotKey::Hand => {
            (true, true)
        }
    }
}

// ---------------------------------------------------------------------------
// Loaded models
// ---------------------------------------------------------------------------

/// Prepare a freshly parsed model for its slot: every mesh gets the slot's
/// material (keeping its source name) and shadow flags, and the root gets
/// the slot's starting transform.
#[must_use]
pub fn dress_loaded(
    key: SlotKey,
    mut node: Node,
    sections: &SectionOptions,
) -> Node {
    node.for_each_material_mut(|m| {
        let name = m.name.take();
        *m = material_for(key, sections, name.as_deref()).named(name);
    });
    let (cast, receive) = shadow_flags(key);
    node.set_shadows(cast, receive);
    node.transform = base_transform(key, sections);
    node
}

// ---------------------------------------------------------------------------
// Procedural stand-ins
// ---------------------------------------------------------------------------

/// Procedural stand-in for a slot, posed and colored like the real model.
#[must_use]
pub fn fallback(key: SlotKey, sections: &SectionOptions) -> Node {
    let material = material_for(key, sections, None);
    let mut node = match key {
        SlotKey::LeftArm | SlotKey::RightArm => {
            Node::mesh(key.name(), Geometry::cuboid(0.5, 3.0, 0.3), material)
        }
        SlotKey::Dna => helix(&material),
        SlotKey::Human => figure(
            key,
            &material,
            Geometry::cylinder(0.7, 0.9, 4.0, 12),
            Geometry::sphere(0.5, 12, 8),
            2.5,
        ),
        SlotKey::Vitruvian => figure(
            key,
            &material,
            Geometry::cylinder(0.5, 0.6, 3.0, 12),
            Geometry::sphere(0.4, 12, 8),
            2.0,
        ),
        SlotKey::Tree => Node::group(
            key.name(),
            vec![
                Node::mesh(
                    "trunk",
                    Geometry::cylinder(0.5, 0.7, 5.0, 12),
                    bark(sections),
                )
                .at(Vec3::new(0.0, -0.5, 0.0)),
                Node::mesh(
                    "leaves",
                    Geometry::sphere(3.0, 12, 8),
                    leaves(sections),
                )
                .at(Vec3::new(0.0, 3.0, 0.0)),
            ],
        ),
        SlotKey::Apple => {
            Node::mesh(key.name(), Geometry::sphere(0.3, 12, 8), material)
        }
        SlotKey::Hand => {
            Node::mesh(key.name(), Geometry::cuboid(0.7, 0.3, 1.5), material)
        }
    };
    let (cast, receive) = shadow_flags(key);
    node.set_shadows(cast, receive);
    node.transform = base_transform(key, sections);
    node
}

/// Double helix of paired spheres joined by horizontal rods.
fn helix(material: &Material) -> Node {
    let mut rungs = Vec::with_capacity(HELIX_RUNGS as usize * 3);
    for i in 0..HELIX_RUNGS {
        let y = (i as f32 - (HELIX_RUNGS / 2) as f32) * HELIX_RISE;
        let angle = i as f32 * HELIX_TWIST;
        for (strand, a) in [angle, angle + PI].into_iter().enumerate() {
            rungs.push(
                Node::mesh(
                    format!("base_{i}_{strand}"),
                    Geometry::sphere(0.2, 16, 12),
                    material.clone(),
                )
                .at(Vec3::new(a.cos() * HELIX_RADIUS, y, a.sin() * HELIX_RADIUS)),
            );
        }
        rungs.push(
            Node::mesh(
                format!("rod_{i}"),
                Geometry::cylinder(0.05, 0.05, 2.0 * HELIX_RADIUS, 8),
                material.clone(),
            )
            .at(Vec3::new(0.0, y, 0.0))
            .rotated(Vec3::new(0.0, 0.0, FRAC_PI_2)),
        );
    }
    Node::group(SlotKey::Dna.name(), rungs)
}

/// Body cylinder with a sphere head on top.
fn figure(
    key: SlotKey,
    material: &Material,
    body: Geometry,
    head: Geometry,
    head_y: f32,
) -> Node {
    Node::group(
        key.name(),
        vec![
            Node::mesh("body", body, material.clone()),
            Node::mesh("head", head, material.clone())
                .at(Vec3::new(0.0, head_y, 0.0)),
        ],
    )
}

/// The always-procedural ring framing the vitruvian figure, lying flat
/// (rotated a quarter turn about x) and fully transparent until the section
/// starts.
#[must_use]
pub fn vitruvian_ring() -> Node {
    Node::mesh(
        "ring",
        Geometry::ring(3.0, 3.1, 64),
        Material::basic(0xffffff).transparent(0.0).double_sided(),
    )
    .rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{MaterialKind, NodeKind};

    fn sections() -> SectionOptions {
        SectionOptions::default()
    }

    #[test]
    fn every_slot_has_a_non_empty_fallback() {
        for key in SlotKey::ALL {
            let node = fallback(key, &sections());
            assert!(node.mesh_count() > 0, "{key} fallback is empty");
            assert_eq!(node.transform, base_transform(key, &sections()));
        }
    }

    #[test]
    fn arms_start_mirrored() {
        let left = base_transform(SlotKey::LeftArm, &sections());
        let right = base_transform(SlotKey::RightArm, &sections());
        assert_eq!(left.position.x, -3.0);
        assert_eq!(right.position.x, 3.0);
        assert_eq!(left.rotation.y, -right.rotation.y);
        assert_eq!(left.scale, Vec3::splat(0.1));
    }

    #[test]
    fn helix_has_fifty_rungs() {
        let helix = fallback(SlotKey::Dna, &sections());
        assert_eq!(helix.mesh_count(), 150);
        let first = &helix.children()[0];
        assert!((first.transform.position.y - -10.0).abs() < 1e-5);
        assert!((first.transform.position.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn tree_materials_split_on_leaf_name() {
        let leaf = material_for(SlotKey::Tree, &sections(), Some("Leaf_01"));
        let trunk = material_for(SlotKey::Tree, &sections(), Some("bark"));
        assert_eq!(leaf.color, crate::scene::hex(0x228b22));
        assert_eq!(trunk.color, crate::scene::hex(0x8b4513));
        let unnamed = material_for(SlotKey::Tree, &sections(), None);
        assert_eq!(unnamed.color, trunk.color);
    }

    #[test]
    fn dress_loaded_overrides_materials_and_pose() {
        let raw = Node::group(
            "Male.OBJ",
            vec![Node::mesh(
                "Body",
                Geometry::cuboid(1.0, 1.0, 1.0),
                Material::phong(0x123456).named(Some("skin".to_owned())),
            )],
        );
        let dressed = dress_loaded(SlotKey::Human, raw, &sections());
        assert_eq!(dressed.transform.position.y, -2.0);
        let m = dressed.first_material().unwrap();
        assert_eq!(m.kind, MaterialKind::Basic);
        assert!(m.wireframe && m.transparent);
        assert_eq!(m.name.as_deref(), Some("skin"));
    }

    #[test]
    fn ring_lies_flat_and_starts_hidden() {
        let ring = vitruvian_ring();
        assert!((ring.transform.rotation.x - FRAC_PI_2).abs() < 1e-6);
        match &ring.kind {
            NodeKind::Mesh { material, .. } => {
                assert!(material.double_sided);
                assert_eq!(material.opacity, 0.0);
            }
            NodeKind::Group { .. } => panic!("ring should be a mesh"),
        }
    }
}
