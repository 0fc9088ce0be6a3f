//! Minimal Wavefront OBJ reader.
//!
//! Reads positions (`v`), normals (`vn`) and polygonal faces (`f`) in any
//! of the `v`, `v/vt`, `v//vn`, `v/vt/vn` forms, with negative (relative)
//! indices. Polygons are fan-triangulated. Each `o`/`g` statement starts a
//! new child mesh, and so does a `usemtl` switch inside a group; the
//! material name is kept so the factory can pick a color per part.
//! Texture coordinates, smoothing groups, lines and `mtllib` files are
//! ignored.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::StoryError;
use crate::scene::{Geometry, Material, MeshData, Node};

/// A face corner: position index and optional normal index, both 0-based.
type Corner = (usize, Option<usize>);

#[derive(Default)]
struct Part {
    name: String,
    material: Option<String>,
    mesh: MeshData,
    has_normals: bool,
    lookup: FxHashMap<Corner, u32>,
}

impl Part {
    fn new(name: String, material: Option<String>) -> Self {
        Self {
            name,
            material,
            ..Self::default()
        }
    }

    fn vertex(
        &mut self,
        corner: Corner,
        positions: &[[f32; 3]],
        normals: &[[f32; 3]],
    ) -> u32 {
        if let Some(&index) = self.lookup.get(&corner) {
            return index;
        }
        let index = self.mesh.positions.len() as u32;
        self.mesh.positions.push(positions[corner.0]);
        let normal = corner.1.map_or([0.0; 3], |n| normals[n]);
        self.has_normals |= corner.1.is_some();
        self.mesh.normals.push(normal);
        let _ = self.lookup.insert(corner, index);
        index
    }

    fn into_node(mut self) -> Node {
        if !self.has_normals {
            self.mesh.normals.clear();
        }
        Node::mesh(
            self.name,
            Geometry::Mesh(Arc::new(self.mesh)),
            Material::default().named(self.material),
        )
    }
}

/// Parse OBJ text into a group named `name` with one child mesh per part.
pub fn parse(source: &str, name: &str) -> Result<Node, StoryError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut parts: Vec<Part> = Vec::new();
    let mut current = Part::new(name.to_owned(), None);
    let mut line_count = 0;

    for (i, raw) in source.lines().enumerate() {
        let line_no = i + 1;
        line_count = line_no;
        let line = raw.split('#').next().unwrap_or("").trim();
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        match keyword {
            "v" => positions.push(parse_vec3(&mut tokens, line_no)?),
            "vn" => normals.push(parse_vec3(&mut tokens, line_no)?),
            "o" | "g" => {
                let group = tokens.collect::<Vec<_>>().join(" ");
                let group = if group.is_empty() {
                    name.to_owned()
                } else {
                    group
                };
                let next = Part::new(group, current.material.clone());
                finish(&mut parts, std::mem::replace(&mut current, next));
            }
            "usemtl" => {
                let material = tokens.next().map(str::to_owned);
                if current.mesh.is_empty() {
                    current.material = material;
                } else if current.material != material {
                    let next = Part::new(current.name.clone(), material);
                    finish(&mut parts, std::mem::replace(&mut current, next));
                }
            }
            "f" => {
                let corners = tokens
                    .map(|t| {
                        parse_corner(t, positions.len(), normals.len(), line_no)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                if corners.len() < 3 {
                    return Err(StoryError::ObjParse {
                        line: line_no,
                        reason: format!(
                            "face needs at least 3 vertices, got {}",
                            corners.len()
                        ),
                    });
                }
                let first = current.vertex(corners[0], &positions, &normals);
                for pair in corners[1..].windows(2) {
                    let b = current.vertex(pair[0], &positions, &normals);
                    let c = current.vertex(pair[1], &positions, &normals);
                    current.mesh.indices.extend_from_slice(&[first, b, c]);
                }
            }
            _ => {}
        }
    }
    finish(&mut parts, current);

    if parts.is_empty() {
        return Err(StoryError::ObjParse {
            line: line_count,
            reason: "no faces".to_owned(),
        });
    }
    Ok(Node::group(
        name,
        parts.into_iter().map(Part::into_node).collect(),
    ))
}

fn finish(parts: &mut Vec<Part>, part: Part) {
    if !part.mesh.is_empty() {
        parts.push(part);
    }
}

fn parse_vec3<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<[f32; 3], StoryError> {
    let mut out = [0.0_f32; 3];
    for slot in &mut out {
        let token = tokens.next().ok_or_else(|| StoryError::ObjParse {
            line,
            reason: "expected 3 coordinates".to_owned(),
        })?;
        *slot = token.parse().map_err(|_| StoryError::ObjParse {
            line,
            reason: format!("bad number '{token}'"),
        })?;
    }
    Ok(out)
}

fn parse_corner(
    token: &str,
    position_count: usize,
    normal_count: usize,
    line: usize,
) -> Result<Corner, StoryError> {
    let mut fields = token.split('/');
    let v = fields.next().unwrap_or("");
    let _texcoord = fields.next();
    let vn = fields.next().filter(|s| !s.is_empty());
    let position = resolve_index(v, position_count, line)?;
    let normal = vn
        .map(|n| resolve_index(n, normal_count, line))
        .transpose()?;
    Ok((position, normal))
}

/// Resolve a 1-based (or negative, relative) OBJ index to 0-based.
fn resolve_index(token: &str, count: usize, line: usize) -> Result<usize, StoryError> {
    let bad = |reason: String| StoryError::ObjParse { line, reason };
    let raw: i64 = token
        .parse()
        .map_err(|_| bad(format!("bad index '{token}'")))?;
    let count_i = count as i64;
    let resolved = match raw {
        0 => return Err(bad("index 0 is not valid".to_owned())),
        r if r > 0 => r - 1,
        r => count_i + r,
    };
    if resolved < 0 || resolved >= count_i {
        return Err(bad(format!("index {raw} out of range ({count} defined)")));
    }
    Ok(resolved as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::NodeKind;

    fn mesh_of(node: &Node) -> &MeshData {
        match &node.kind {
            NodeKind::Mesh {
                geometry: Geometry::Mesh(data),
                ..
            } => data,
            other => panic!("expected parsed mesh, got {other:?}"),
        }
    }

    #[test]
    fn quad_is_fan_triangulated() {
        let src = "\
# unit quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1 4//1
";
        let node = parse(src, "quad").unwrap();
        let mesh = mesh_of(&node.children()[0]);
        assert_eq!(mesh.positions.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.normals.len(), 4);
        assert_eq!(mesh.normals[0], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn negative_indices_are_relative() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3/1 -2/2 -1/3\n";
        let node = parse(src, "tri").unwrap();
        let mesh = mesh_of(&node.children()[0]);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert!(mesh.normals.is_empty());
    }

    #[test]
    fn groups_and_materials_split_parts() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
o Trunk
usemtl bark
f 1 2 3
o Crown
usemtl LeafMat
f 1 2 3
usemtl bark
f 3 2 1
";
        let node = parse(src, "tree.obj").unwrap();
        let names: Vec<_> = node
            .children()
            .iter()
            .map(|c| {
                (
                    c.name.as_str(),
                    c.first_material().and_then(|m| m.name.as_deref()),
                )
            })
            .collect();
        assert_eq!(
            names,
            vec![
                ("Trunk", Some("bark")),
                ("Crown", Some("LeafMat")),
                ("Crown", Some("bark")),
            ]
        );
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = parse("v 0 0 0\nv 1 x 0\n", "bad").unwrap_err();
        assert!(matches!(err, StoryError::ObjParse { line: 2, .. }));

        let err = parse("v 0 0 0\nf 1 2 3\n", "bad").unwrap_err();
        assert!(matches!(err, StoryError::ObjParse { line: 2, .. }));

        let err = parse("v 0 0 0\nv 1 0 0\nf 1 2\n", "bad").unwrap_err();
        assert!(matches!(err, StoryError::ObjParse { line: 3, .. }));
    }

    #[test]
    fn no_faces_is_an_error() {
        let err = parse("v 0 0 0\n", "empty").unwrap_err();
        assert!(matches!(err, StoryError::ObjParse { .. }));
    }
}
