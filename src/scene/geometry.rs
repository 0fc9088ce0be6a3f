use std::sync::Arc;

use glam::Vec3;
use serde::Serialize;

/// Triangle mesh produced by a model parser.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals; empty when the source had none.
    pub normals: Vec<[f32; 3]>,
    /// Triangle list indices into `positions`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Axis-aligned bounds `(min, max)`, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.positions.iter().map(|p| Vec3::from_array(*p));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

/// Shape of a mesh node, either a primitive the rendering library builds
/// itself or parsed triangle data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    /// Axis-aligned box centered on the origin.
    Box {
        /// Extent along x.
        width: f32,
        /// Extent along y.
        height: f32,
        /// Extent along z.
        depth: f32,
    },
    /// UV sphere.
    Sphere {
        /// Radius.
        radius: f32,
        /// Longitudinal segments.
        width_segments: u32,
        /// Latitudinal segments.
        height_segments: u32,
    },
    /// Truncated cone along y.
    Cylinder {
        /// Radius of the top cap.
        radius_top: f32,
        /// Radius of the bottom cap.
        radius_bottom: f32,
        /// Extent along y.
        height: f32,
        /// Segments around the axis.
        radial_segments: u32,
    },
    /// Flat annulus in the xy plane.
    Ring {
        /// Inner radius.
        inner_radius: f32,
        /// Outer radius.
        outer_radius: f32,
        /// Segments around the ring.
        segments: u32,
    },
    /// Parsed triangle data, shared between clones of a loaded model.
    Mesh(Arc<MeshData>),
}

impl Geometry {
    /// Box primitive.
    #[must_use]
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::Box {
            width,
            height,
            depth,
        }
    }

    /// Sphere primitive.
    #[must_use]
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self::Sphere {
            radius,
            width_segments,
            height_segments,
        }
    }

    /// Cylinder primitive.
    #[must_use]
    pub fn cylinder(
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    ) -> Self {
        Self::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        }
    }

    /// Ring primitive.
    #[must_use]
    pub fn ring(inner_radius: f32, outer_radius: f32, segments: u32) -> Self {
        Self::Ring {
            inner_radius,
            outer_radius,
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_bounds_and_counts() {
        let mesh = MeshData {
            positions: vec![[0.0, 0.0, 0.0], [1.0, -2.0, 0.5], [-1.0, 3.0, 0.0]],
            normals: Vec::new(),
            indices: vec![0, 1, 2],
        };
        assert_eq!(mesh.triangle_count(), 1);
        let (lo, hi) = mesh.bounds().unwrap();
        assert_eq!(lo, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(hi, Vec3::new(1.0, 3.0, 0.5));
        assert!(MeshData::default().bounds().is_none());
    }

    #[test]
    fn primitives_serialize_tagged() {
        let json = serde_json::to_value(Geometry::ring(3.0, 3.1, 64)).unwrap();
        assert_eq!(json["type"], "ring");
        assert_eq!(json["segments"], 64);
    }
}
